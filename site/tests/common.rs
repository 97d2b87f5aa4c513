#![allow(dead_code)]

use kallari_site::{Route, RouteState, Subscription};
use kallari_site::{Location, MemoryLocation};
use std::cell::RefCell;
use std::rc::Rc;

/// Enable logging for a test, can be called more than once.
pub fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Create a route state, backed by an in-memory location starting at `fragment`.
pub fn state(fragment: &str) -> (MemoryLocation, RouteState<MemoryLocation>) {
    init();
    let location = MemoryLocation::new(fragment);
    let state = RouteState::new(location.clone());
    (location, state)
}

/// Collects all routes published to an observer.
#[derive(Clone, Default)]
pub struct Recorder(Rc<RefCell<Vec<Route>>>);

impl Recorder {
    pub fn attach<L: Location>(&self, state: &RouteState<L>) -> Subscription {
        let routes = self.0.clone();
        state.subscribe(move |route| routes.borrow_mut().push(route))
    }

    pub fn routes(&self) -> Vec<Route> {
        self.0.borrow().clone()
    }
}
