use crate::components::{Card, Pill};
use kallari_site::registry::Programs;
use yew::prelude::*;

#[derive(Clone, Debug, PartialEq, Properties)]
pub struct ProgramsPageProps {
    pub programs: Programs,
}

#[function_component(ProgramsPage)]
pub fn programs_page(props: &ProgramsPageProps) -> Html {
    let programs = &props.programs;
    let href = programs.link.target.href();

    html!(
        <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
            { for programs.items.iter().map(|program| html!(
                <Card key={program.title}>
                    <Pill label={programs.label} />
                    <h3 class="mt-3 text-lg font-semibold">{ program.title }</h3>
                    <p class="mt-2 text-sm text-slate-600">{ program.description }</p>
                    <a
                        href={href.clone()}
                        class="mt-4 inline-block text-sm font-semibold text-emerald-700 hover:underline"
                    >
                        { programs.link.label }
                    </a>
                </Card>
            )) }
        </div>
    )
}
