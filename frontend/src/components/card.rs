use yew::prelude::*;

#[derive(Clone, Debug, PartialEq, Properties)]
pub struct CardProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Card)]
pub fn card(props: &CardProps) -> Html {
    let class = classes!(
        "rounded-2xl",
        "border",
        "bg-white",
        "shadow-sm",
        "p-6",
        props.class.clone()
    );

    html!(
        <div {class}>{ for props.children.iter() }</div>
    )
}

#[derive(Clone, Debug, PartialEq, Properties)]
pub struct PillProps {
    pub label: AttrValue,
}

#[function_component(Pill)]
pub fn pill(props: &PillProps) -> Html {
    html!(
        <span class="inline-flex items-center px-2 py-1 text-xs font-semibold rounded-full bg-emerald-50 text-emerald-700">
            { &props.label }
        </span>
    )
}
