use crate::location::BrowserLocation;
use kallari_site::{Route, RouteState};
use std::rc::Rc;
use yew::prelude::*;
use yew_hooks::use_title;

#[derive(Clone)]
pub struct UseRouteHandle {
    route: Route,
    state: Rc<RouteState<BrowserLocation>>,
}

impl UseRouteHandle {
    pub fn route(&self) -> Route {
        self.route
    }

    /// Navigate to a route, by changing the location's fragment.
    pub fn navigate(&self, route: Route) {
        self.state.navigate(route);
    }
}

/// Track the route of the browser location.
///
/// The location listener is registered for as long as the component using the hook is mounted.
#[hook]
pub fn use_route(site_name: String) -> UseRouteHandle {
    let state = use_memo(|_| RouteState::new(BrowserLocation), ());
    let route = use_state_eq(|| state.current());

    {
        let state = state.clone();
        let route = route.clone();
        use_effect_with_deps(
            move |_| {
                // the fragment may have changed before we got subscribed
                route.set(state.current());
                let subscription = state.subscribe(move |next| {
                    log::info!("Route: {next}");
                    route.set(next);
                });
                move || drop(subscription)
            },
            (),
        );
    }

    use_title(format!("{} | {}", route.title(), site_name));

    UseRouteHandle {
        route: *route,
        state,
    }
}
