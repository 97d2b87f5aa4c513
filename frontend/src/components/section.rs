use yew::prelude::*;

#[derive(Clone, Debug, PartialEq, Properties)]
pub struct SectionProps {
    #[prop_or_default]
    pub title: Option<AttrValue>,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    /// Content of the aside, next to the main content.
    #[prop_or_default]
    pub right: Html,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Section)]
pub fn section(props: &SectionProps) -> Html {
    let body = classes!(props.title.as_ref().map(|_| "mt-8"));

    html!(
        <section class="py-14 lg:py-20">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 grid lg:grid-cols-[1fr_320px] gap-10 items-start">
                <div>
                    if let Some(title) = &props.title {
                        <h2 class="text-3xl font-bold tracking-tight text-slate-900">{ title }</h2>
                        if let Some(subtitle) = &props.subtitle {
                            <p class="mt-2 text-slate-600">{ subtitle }</p>
                        }
                    }
                    <div class={body}>{ for props.children.iter() }</div>
                </div>
                <aside class="lg:sticky lg:top-20 space-y-4">{ props.right.clone() }</aside>
            </div>
        </section>
    )
}
