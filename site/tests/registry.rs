use kallari_site::registry::{lookup, view, Body, Target};
use kallari_site::Route;

mod common;

#[test]
fn known_identifiers_resolve() {
    common::init();
    for route in Route::ALL {
        let page = lookup(route.as_str());
        assert_eq!(page.route, route);
        assert!(std::ptr::eq(page, view(route)));
    }
}

#[test]
fn lookup_is_stable() {
    for route in Route::ALL {
        let first = lookup(route.as_str());
        let second = lookup(route.as_str());
        assert!(std::ptr::eq(first, second));
    }
}

#[test]
fn unknown_identifiers_are_home() {
    let home = view(Route::Inicio);
    for identifier in ["", "blog", "PROYECTOS", "#dona", "sobre nosotros", " inicio"] {
        assert!(
            std::ptr::eq(lookup(identifier), home),
            "{identifier:?} should resolve to home"
        );
    }
}

#[test]
fn designated_blocks() {
    assert!(matches!(view(Route::Inicio).body, Body::Home(_)));
    assert!(matches!(view(Route::SobreNosotros).body, Body::About(_)));
    assert!(matches!(view(Route::Proyectos).body, Body::Programs(_)));
    assert!(matches!(view(Route::Transparencia).body, Body::Transparency(_)));
    assert!(matches!(view(Route::Involucrate).body, Body::Involve(_)));
    assert!(matches!(view(Route::Dona).body, Body::Donate(_)));
    assert!(matches!(view(Route::Contactos).body, Body::Contact(_)));
}

#[test]
fn programs() {
    let Body::Programs(programs) = view(Route::Proyectos).body else {
        panic!("not a program listing");
    };
    assert_eq!(programs.items.len(), 8);
    assert_eq!(programs.link.target, Target::Route(Route::Contactos));
}

#[test]
fn home_actions() {
    let Body::Home(home) = view(Route::Inicio).body else {
        panic!("not the home page");
    };
    let targets = home
        .actions
        .iter()
        .map(|action| action.target.href())
        .collect::<Vec<_>>();
    assert_eq!(targets, vec!["#proyectos", "#involucrate", "#dona"]);
    assert_eq!(home.partners.len(), 5);
}
