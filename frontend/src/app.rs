use crate::{config, layout::Layout, pages::PageView, route::use_route};
use kallari_site::Route;
use yew::prelude::*;

#[function_component(Application)]
pub fn app() -> Html {
    let config = use_memo(|_| config::load(), ());
    let route = use_route(config.name.clone());

    let onhome = {
        let route = route.clone();
        Callback::from(move |_: ()| route.navigate(Route::Inicio))
    };

    html!(
        <Layout config={config.clone()} {onhome}>
            <PageView route={route.route()} {config} />
        </Layout>
    )
}
