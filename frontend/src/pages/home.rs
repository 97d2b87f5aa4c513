use crate::components::Section;
use kallari_site::registry::{Action, Home};
use yew::prelude::*;

#[derive(Clone, Debug, PartialEq, Properties)]
pub struct HomePageProps {
    pub home: Home,
}

#[function_component(HomePage)]
pub fn home_page(props: &HomePageProps) -> Html {
    let home = &props.home;
    let style = format!(
        "background-image: url('{}'); background-size: cover; background-position: center;",
        home.cover.src
    );

    html!(
        <div>
            <section
                id="inicio-hero"
                class="relative h-[600px] flex items-center justify-center text-center text-white"
                {style}
            >
                <div class="absolute inset-0 bg-black/40" />
                <div class="relative z-10 max-w-3xl px-4">
                    <h1 class="text-4xl sm:text-5xl lg:text-6xl font-bold leading-tight">
                        { home.headline }
                    </h1>
                    <p class="mt-6 text-lg sm:text-xl text-gray-200">{ home.lead }</p>
                    <div class="mt-8 flex flex-wrap gap-4 justify-center">
                        { for home.actions.iter().map(hero_action) }
                    </div>
                </div>
            </section>

            <Section
                title={home.partners_title}
                subtitle={home.partners_subtitle}
            >
                <div class="grid grid-cols-2 sm:grid-cols-3 lg:grid-cols-6 gap-6 items-center">
                    { for home.partners.iter().map(|logo| html!(
                        <div
                            key={logo.src}
                            class="aspect-[3/1] rounded-xl border grid place-content-center bg-white p-2"
                        >
                            <img src={logo.src} alt={logo.alt} class="max-h-12 object-contain" />
                        </div>
                    )) }
                </div>
            </Section>
        </div>
    )
}

fn hero_action(action: &Action) -> Html {
    let class = match action.primary {
        true => "rounded-xl px-6 py-3 bg-emerald-600 text-white font-semibold shadow hover:bg-emerald-700",
        false => "rounded-xl px-6 py-3 border border-white text-white font-semibold hover:bg-white/10",
    };

    html!(
        <a key={action.label} href={action.target.href()} {class}>{ action.label }</a>
    )
}
