use kallari_site::registry::Link;
use yew::prelude::*;

#[derive(Clone, Debug, PartialEq, Properties)]
pub struct MenuProps {
    pub label: AttrValue,
    pub items: &'static [Link],
}

/// A dropdown of links, opened by hovering or clicking its label.
#[function_component(Menu)]
pub fn menu(props: &MenuProps) -> Html {
    let open = use_state_eq(|| false);

    let onmouseenter = use_callback(|_: MouseEvent, open| open.set(true), open.clone());
    let onmouseleave = use_callback(|_: MouseEvent, open| open.set(false), open.clone());
    let onclick = use_callback(|_: MouseEvent, open| open.set(!**open), open.clone());

    html!(
        <div class="relative" {onmouseleave}>
            <button {onmouseenter} {onclick} class="hover:text-emerald-700 font-medium">
                { &props.label }
            </button>
            if *open {
                <div class="absolute mt-2 w-64 rounded-2xl border bg-white shadow-lg p-2 z-50">
                    { for props.items.iter().map(|item| html!(
                        <a
                            key={item.label}
                            href={item.target.href()}
                            class="block px-3 py-2 rounded-xl hover:bg-slate-50 text-sm"
                        >
                            { item.label }
                        </a>
                    )) }
                </div>
            }
        </div>
    )
}
