use super::card_content;
use crate::components::Card;
use kallari_site::registry::About;
use yew::prelude::*;

#[derive(Clone, Debug, PartialEq, Properties)]
pub struct AboutPageProps {
    pub about: About,
}

#[function_component(AboutPage)]
pub fn about_page(props: &AboutPageProps) -> Html {
    let about = &props.about;

    html!(
        <div class="space-y-8">
            // the banner replaces the section title
            <img
                src={about.banner.src}
                alt={about.banner.alt}
                class="w-full rounded-2xl shadow-lg"
            />

            <Card>
                <h3 class="font-semibold">{ about.title }</h3>
                <div class="mt-2 text-sm text-slate-600 space-y-3">
                    { for about.intro.iter().map(|paragraph| html!(<p>{ paragraph }</p>)) }
                    <p>{ about.axes_title }</p>
                    <ul class="list-disc pl-5 space-y-2">
                        { for about.axes.iter().map(|axis| html!(
                            <li key={axis.name}>
                                <span class="font-semibold">{ axis.name }</span>{ ": " }{ axis.text }
                            </li>
                        )) }
                    </ul>
                </div>
            </Card>

            <div class="grid md:grid-cols-3 gap-6">
                { for about.cards.iter().map(|card| html!(
                    <Card key={card.title}>{ card_content(card) }</Card>
                )) }
            </div>

            <Card>{ card_content(&about.alliances) }</Card>
        </div>
    )
}
