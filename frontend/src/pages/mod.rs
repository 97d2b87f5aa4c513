mod about;
mod contact;
mod donate;
mod home;
mod programs;
mod sidebar;

use crate::components::{Card, Section};
use kallari_site::registry::{self, Body, Card as CardContent};
use kallari_site::{Route, SiteConfig};
use std::rc::Rc;
use yew::prelude::*;

pub use about::*;
pub use contact::*;
pub use donate::*;
pub use home::*;
pub use programs::*;
pub use sidebar::*;

#[derive(Clone, Debug, PartialEq, Properties)]
pub struct PageViewProps {
    pub route: Route,
    pub config: Rc<SiteConfig>,
}

#[function_component(PageView)]
pub fn page_view(props: &PageViewProps) -> Html {
    let page = registry::view(props.route);

    let content = match page.body {
        Body::Home(home) => return html!(<HomePage {home} />),
        Body::About(about) => html!(<AboutPage {about} />),
        Body::Programs(programs) => html!(<ProgramsPage {programs} />),
        Body::Transparency(cards) => html!(<CardGrid {cards} columns="md:grid-cols-2" />),
        Body::Involve(cards) => html!(<CardGrid {cards} columns="md:grid-cols-3" />),
        Body::Donate(donate) => html!(<DonatePage {donate} />),
        Body::Contact(contact) => {
            html!(<ContactPage {contact} form={props.config.contact_form()} />)
        }
    };

    let right = if page.sidebar {
        html!(<Sidebar />)
    } else {
        html!()
    };

    html!(
        <Section
            title={page.title.map(AttrValue::from)}
            subtitle={page.subtitle.map(AttrValue::from)}
            {right}
        >
            { content }
        </Section>
    )
}

/// Render the content of a card, without the surrounding card.
pub fn card_content(card: &CardContent) -> Html {
    html!(
        <>
            <h4 class="font-semibold">{ card.title }</h4>
            if !card.text.is_empty() {
                <p class="mt-2 text-sm text-slate-600">{ card.text }</p>
            }
            if !card.items.is_empty() {
                <ul class="mt-2 text-sm list-disc pl-5 space-y-1 text-slate-600">
                    { for card.items.iter().map(|item| html!(<li>{ item }</li>)) }
                </ul>
            }
            if !card.links.is_empty() {
                <ul class="mt-2 text-sm space-y-2">
                    { for card.links.iter().map(|link| html!(
                        <li><a class="hover:underline" href={link.target.href()}>{ link.label }</a></li>
                    )) }
                </ul>
            }
            if let Some(action) = &card.action {
                <a
                    class="mt-3 inline-block text-sm font-semibold text-emerald-700 hover:underline"
                    href={action.target.href()}
                >
                    { action.label }
                </a>
            }
        </>
    )
}

#[derive(Clone, Debug, PartialEq, Properties)]
pub struct CardGridProps {
    pub cards: &'static [CardContent],
    pub columns: &'static str,
}

#[function_component(CardGrid)]
pub fn card_grid(props: &CardGridProps) -> Html {
    let class = classes!("grid", props.columns, "gap-6");

    html!(
        <div {class}>
            { for props.cards.iter().map(|card| html!(
                <Card key={card.title}>{ card_content(card) }</Card>
            )) }
        </div>
    )
}
