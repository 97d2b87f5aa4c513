//! Header and footer navigation.

use crate::registry::{Link, Target};
use crate::route::Route;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Entry {
    Link(Link),
    /// A dropdown, all items of a menu point into the same section.
    Menu {
        label: &'static str,
        items: &'static [Link],
    },
}

impl Entry {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Link(link) => link.label,
            Self::Menu { label, .. } => *label,
        }
    }
}

const fn to(label: &'static str, route: Route) -> Link {
    Link {
        label,
        target: Target::Route(route),
    }
}

pub static HEADER: [Entry; 7] = [
    Entry::Link(to("Inicio", Route::Inicio)),
    Entry::Menu {
        label: "Sobre nosotros",
        items: &[
            to("Quiénes somos", Route::SobreNosotros),
            to("Misión y valores", Route::SobreNosotros),
            to("Nuestros objetivos", Route::SobreNosotros),
            to("Nuestro equipo", Route::SobreNosotros),
            to("Nuestras alianzas", Route::SobreNosotros),
        ],
    },
    Entry::Menu {
        label: "Proyectos",
        items: &[
            to("Educativos", Route::Proyectos),
            to("Salud", Route::Proyectos),
            to("Discapacidad", Route::Proyectos),
            to("Equidad de género", Route::Proyectos),
            to("Desastres y resiliencia", Route::Proyectos),
            to("Emprendimiento", Route::Proyectos),
            to("Cambio climático", Route::Proyectos),
            to("Amazonía para el Futuro", Route::Proyectos),
        ],
    },
    Entry::Menu {
        label: "Transparencia",
        items: &[
            to("Rendición de cuentas", Route::Transparencia),
            to("Memoria anual", Route::Transparencia),
            to("Compliance", Route::Transparencia),
            to("Canal de denuncias", Route::Transparencia),
        ],
    },
    Entry::Menu {
        label: "Involúcrate",
        items: &[
            to("Voluntariado", Route::Involucrate),
            to("Padrinazgo", Route::Involucrate),
            to("¿Tienes un proyecto?", Route::Involucrate),
        ],
    },
    Entry::Link(to("Dona", Route::Dona)),
    Entry::Link(to("Contactos", Route::Contactos)),
];

/// The call to action next to the navigation.
pub const DONATE: Link = to("Donar", Route::Dona);

pub static FOOTER: [Link; 3] = [
    to("Transparencia", Route::Transparencia),
    Link {
        label: "Privacidad",
        target: Target::Anchor("#"),
    },
    Link {
        label: "Términos",
        target: Target::Anchor("#"),
    },
];

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn menus_are_not_empty() {
        for entry in HEADER.iter() {
            if let Entry::Menu { label, items } = entry {
                assert!(!items.is_empty(), "empty menu: {label}");
            }
        }
    }

    #[test]
    fn every_route_is_reachable_from_header() {
        for route in Route::ALL {
            let reachable = HEADER.iter().any(|entry| match entry {
                Entry::Link(link) => link.target == Target::Route(route),
                Entry::Menu { items, .. } => {
                    items.iter().any(|link| link.target == Target::Route(route))
                }
            });
            assert!(reachable, "route not in header: {route}");
        }
    }

    #[test]
    fn labels() {
        assert_eq!(HEADER[0].label(), "Inicio");
        assert_eq!(HEADER[1].label(), "Sobre nosotros");
    }
}
