use super::card_content;
use crate::components::Card;
use kallari_site::registry::SIDEBAR;
use yew::prelude::*;

/// News, shown next to the content of most pages.
#[function_component(Sidebar)]
pub fn sidebar() -> Html {
    html!(
        <div class="space-y-4">
            <Card>
                <h3 class="font-semibold">{ SIDEBAR.intro.title }</h3>
                <p class="mt-1 text-sm text-slate-600">{ SIDEBAR.intro.text }</p>
            </Card>
            { for SIDEBAR.cards.iter().map(|card| html!(
                <Card key={card.title}>{ card_content(card) }</Card>
            )) }
        </div>
    )
}
