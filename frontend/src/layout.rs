use crate::components::Menu;
use crate::utils::{copyright, current_year, link};
use kallari_site::nav::{self, Entry};
use kallari_site::SiteConfig;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Clone, Debug, PartialEq, Properties)]
pub struct LayoutProps {
    pub config: Rc<SiteConfig>,
    #[prop_or_default]
    pub onhome: Callback<()>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    html!(
        <div class="min-h-screen bg-white text-slate-800">
            <Header config={props.config.clone()} onhome={props.onhome.clone()} />
            { for props.children.iter() }
            <Footer name={props.config.name.clone()} />
        </div>
    )
}

#[derive(Clone, Debug, PartialEq, Properties)]
struct HeaderProps {
    config: Rc<SiteConfig>,
    onhome: Callback<()>,
}

#[function_component(Header)]
fn header(props: &HeaderProps) -> Html {
    let onclick = props.onhome.reform(|_: MouseEvent| ());
    let config = &props.config;

    html!(
        <header class="sticky top-0 z-40 backdrop-blur supports-[backdrop-filter]:bg-white/70 border-b">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-3 flex items-center justify-between">
                <div class="flex items-center gap-3 cursor-pointer" {onclick}>
                    <img
                        src={config.logo.clone()}
                        alt={format!("{} logo", config.name)}
                        class="h-10 w-auto object-contain flex-shrink-0"
                    />
                    <div class="leading-tight">
                        <p class="font-semibold">{ &config.name }</p>
                        <p class="text-xs text-slate-500">{ &config.tagline }</p>
                    </div>
                </div>

                <nav class="hidden md:flex items-center gap-6 text-sm">
                    { for nav::HEADER.iter().map(entry) }
                </nav>

                <div class="flex items-center gap-2">
                    { link(&nav::DONATE, "rounded-2xl px-4 py-2 bg-emerald-600 text-white text-sm font-semibold shadow-sm hover:bg-emerald-700") }
                </div>
            </div>
        </header>
    )
}

fn entry(entry: &Entry) -> Html {
    match entry {
        Entry::Link(target) => link(target, "hover:text-emerald-700"),
        Entry::Menu { label, items } => html!(<Menu label={*label} items={*items} />),
    }
}

#[derive(Clone, Debug, PartialEq, Properties)]
struct FooterProps {
    name: AttrValue,
}

#[function_component(Footer)]
fn footer(props: &FooterProps) -> Html {
    html!(
        <footer class="py-10 border-t">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 flex flex-col md:flex-row items-center justify-between gap-4">
                <p class="text-sm text-slate-500">{ copyright(current_year(), &props.name) }</p>
                <div class="flex items-center gap-4 text-sm">
                    { for nav::FOOTER.iter().map(|target| link(target, "hover:text-emerald-700")) }
                </div>
            </div>
        </footer>
    )
}
