//! Keeping the current route in sync with the location fragment.
//!
//! The fragment is the single source of truth. Navigating only changes the fragment, the route
//! state follows once the location reports the change. That way the fragment and the rendered
//! view can never diverge, no matter whether a change originates from the application, a link,
//! the history or the address bar.

use crate::location::Location;
use crate::route::Route;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

type Observer = Rc<dyn Fn(Route)>;

struct Shared {
    current: Cell<Route>,
    next_id: Cell<u64>,
    observers: RefCell<Vec<(u64, Observer)>>,
}

impl Shared {
    fn update(&self, route: Route) {
        let previous = self.current.replace(route);
        if previous != route {
            log::debug!("Route changed: {previous} -> {route}");
        }

        let observers = self
            .observers
            .borrow()
            .iter()
            .map(|(_, observer)| observer.clone())
            .collect::<Vec<_>>();

        for observer in observers {
            observer(route);
        }
    }
}

/// The current route of a page session, synchronized with a [`Location`].
///
/// The change listener is registered on creation and removed by [`RouteState::unregister`], or
/// when the state is dropped.
pub struct RouteState<L: Location> {
    location: L,
    shared: Rc<Shared>,
    listener: Option<L::Listener>,
}

impl<L: Location> RouteState<L> {
    pub fn new(location: L) -> Self {
        let initial = Route::from_fragment(&location.hash());
        log::debug!("Initial route: {initial}");

        let shared = Rc::new(Shared {
            current: Cell::new(initial),
            next_id: Cell::new(0),
            observers: Default::default(),
        });

        let listener = {
            let shared = Rc::downgrade(&shared);
            location.listen(Box::new(move |hash| {
                if let Some(shared) = shared.upgrade() {
                    shared.update(Route::from_fragment(&hash));
                }
            }))
        };

        Self {
            location,
            shared,
            listener: Some(listener),
        }
    }

    pub fn current(&self) -> Route {
        self.shared.current.get()
    }

    /// Point the location at the target identifier.
    ///
    /// This does not change the current route by itself, that happens when the location
    /// notifies about the change.
    pub fn navigate(&self, target: impl AsRef<str>) {
        let target = target.as_ref();
        log::trace!("Navigate to: {target}");
        self.location.set_hash(target);
    }

    /// Observe route changes, until the returned subscription is dropped.
    ///
    /// Observers receive the recomputed route on every location notification.
    pub fn subscribe<F>(&self, observer: F) -> Subscription
    where
        F: Fn(Route) + 'static,
    {
        let id = self.shared.next_id.get();
        self.shared.next_id.set(id + 1);
        self.shared
            .observers
            .borrow_mut()
            .push((id, Rc::new(observer)));

        Subscription {
            id,
            shared: Rc::downgrade(&self.shared),
        }
    }

    /// Stop listening to the location. The current route stays as it is.
    pub fn unregister(&mut self) {
        if self.listener.take().is_some() {
            log::debug!("Unregistered from location");
        }
    }

    pub fn is_registered(&self) -> bool {
        self.listener.is_some()
    }
}

/// Handle of a route observer, dropping it removes the observer.
#[must_use = "the observer is removed when the subscription is dropped"]
pub struct Subscription {
    id: u64,
    shared: Weak<Shared>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(shared) = self.shared.upgrade() {
            shared
                .observers
                .borrow_mut()
                .retain(|(id, _)| *id != self.id);
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::location::MemoryLocation;

    #[test]
    fn empty_fragment_starts_at_fallback() {
        let state = RouteState::new(MemoryLocation::new(""));
        assert_eq!(state.current(), Route::Inicio);
    }

    #[test]
    fn initial_fragment_is_used() {
        let state = RouteState::new(MemoryLocation::new("#transparencia"));
        assert_eq!(state.current(), Route::Transparencia);
    }

    #[test]
    fn navigate_waits_for_notification() {
        let location = MemoryLocation::new("");
        let state = RouteState::new(location.clone());

        state.navigate(Route::Proyectos);
        assert_eq!(location.hash(), "#proyectos");
        assert_eq!(state.current(), Route::Inicio);

        location.flush();
        assert_eq!(state.current(), Route::Proyectos);
    }

    #[test]
    fn navigate_accepts_identifiers() {
        let location = MemoryLocation::new("");
        let state = RouteState::new(location.clone());

        state.navigate("contactos");
        location.flush();
        assert_eq!(state.current(), Route::Contactos);

        state.navigate("blog");
        location.flush();
        assert_eq!(location.hash(), "#blog");
        assert_eq!(state.current(), Route::Inicio);
    }

    #[test]
    fn dropping_state_removes_listener() {
        let location = MemoryLocation::new("");
        let state = RouteState::new(location.clone());
        assert_eq!(location.listener_count(), 1);

        drop(state);
        assert_eq!(location.listener_count(), 0);
    }

    #[test]
    fn unregister_is_idempotent() {
        let location = MemoryLocation::new("");
        let mut state = RouteState::new(location.clone());

        state.unregister();
        state.unregister();
        assert!(!state.is_registered());
        assert_eq!(location.listener_count(), 0);
    }
}
