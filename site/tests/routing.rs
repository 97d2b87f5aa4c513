use kallari_site::{Location, Route};

mod common;

use common::*;

#[test]
fn empty_fragment_is_home() {
    let (_, state) = state("");
    assert_eq!(state.current(), Route::Inicio);
    assert_eq!(state.current().as_str(), "inicio");
}

#[test]
fn unknown_fragment_is_home() {
    let (_, state) = state("#blog");
    assert_eq!(state.current(), Route::Inicio);
}

#[test]
fn navigate_then_notify() {
    let (location, state) = state("");

    state.navigate("proyectos");
    // the fragment is the source of truth, the state follows the notification
    assert_eq!(state.current(), Route::Inicio);

    assert!(location.flush());
    assert_eq!(state.current(), Route::Proyectos);
}

#[test]
fn external_navigation() {
    let (location, state) = state("#inicio");

    location.navigate("#dona");
    assert_eq!(state.current(), Route::Dona);

    location.navigate("");
    assert_eq!(state.current(), Route::Inicio);
}

#[test]
fn unregistered_state_stays() {
    let (location, mut state) = state("");
    let recorder = Recorder::default();
    let _subscription = recorder.attach(&state);

    location.navigate("proyectos");
    assert_eq!(state.current(), Route::Proyectos);

    state.unregister();
    assert_eq!(location.listener_count(), 0);
    location.navigate("dona");

    assert_eq!(location.hash(), "#dona");
    assert_eq!(state.current(), Route::Proyectos);
    // nothing delivered after unregistering
    assert_eq!(recorder.routes(), vec![Route::Proyectos]);
}

#[test]
fn observers_receive_changes() {
    let (location, state) = state("");
    let recorder = Recorder::default();
    let _subscription = recorder.attach(&state);

    location.navigate("dona");
    location.navigate("#sobre-nosotros");
    location.navigate("#nowhere");

    assert_eq!(
        recorder.routes(),
        vec![Route::Dona, Route::SobreNosotros, Route::Inicio]
    );
}

#[test]
fn dropped_subscription_is_not_notified() {
    let (location, state) = state("");
    let first = Recorder::default();
    let second = Recorder::default();

    let subscription = first.attach(&state);
    let _other = second.attach(&state);

    location.navigate("dona");
    drop(subscription);
    location.navigate("contactos");

    assert_eq!(first.routes(), vec![Route::Dona]);
    assert_eq!(second.routes(), vec![Route::Dona, Route::Contactos]);
}

#[test]
fn subscribe_from_observer() {
    use std::cell::RefCell;
    use std::rc::Rc;

    let (location, state) = state("");
    let state = Rc::new(state);
    let late = Recorder::default();
    let held = Rc::new(RefCell::new(Vec::new()));

    let _subscription = {
        let weak = Rc::downgrade(&state);
        let late = late.clone();
        let held = held.clone();
        state.subscribe(move |_| {
            if let Some(state) = weak.upgrade() {
                held.borrow_mut().push(late.attach(&*state));
            }
        })
    };

    location.navigate("dona");
    // registered during the notification, so it only sees the next one
    assert!(late.routes().is_empty());

    location.navigate("proyectos");
    assert_eq!(late.routes(), vec![Route::Proyectos]);
}

#[test]
fn state_never_empty() {
    let (location, state) = state("");
    for fragment in ["", "#", "inicio", "#proyectos", "x", "#sobre-nosotros"] {
        location.navigate(fragment);
        assert!(!state.current().as_str().is_empty());
    }
}
