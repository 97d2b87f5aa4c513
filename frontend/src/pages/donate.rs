use crate::components::Card;
use kallari_site::registry::Donate;
use yew::prelude::*;

#[derive(Clone, Debug, PartialEq, Properties)]
pub struct DonatePageProps {
    pub donate: Donate,
}

#[function_component(DonatePage)]
pub fn donate_page(props: &DonatePageProps) -> Html {
    let donate = &props.donate;

    html!(
        <Card>
            <ul class="text-sm space-y-2">
                { for donate.items.iter().map(|item| html!(<li>{ "• " }{ item }</li>)) }
            </ul>
            <div class="mt-6 flex flex-wrap gap-3">
                { for donate.actions.iter().map(|action| {
                    let class = if action.primary {
                        "rounded-xl bg-emerald-600 text-white font-semibold px-5 py-3 shadow hover:bg-emerald-700"
                    } else {
                        "rounded-xl border font-semibold px-5 py-3 hover:bg-slate-50"
                    };
                    html!(<a key={action.label} {class} href={action.target.href()}>{ action.label }</a>)
                }) }
            </div>
        </Card>
    )
}
