//! The content block of every route.
//!
//! All content is static. Looking up a route can't fail: [`view`] is an exhaustive match, and
//! [`lookup`] resolves unknown identifiers to the home page.

mod content;

pub use content::SIDEBAR;

use crate::route::Route;

/// Where a link points to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Target {
    Route(Route),
    /// A raw anchor, which may not be a known route (e.g. `#blog`, or `#` for placeholders).
    Anchor(&'static str),
}

impl Target {
    pub fn href(&self) -> String {
        match self {
            Self::Route(route) => route.href(),
            Self::Anchor(anchor) => anchor.to_string(),
        }
    }
}

impl From<Route> for Target {
    fn from(route: Route) -> Self {
        Self::Route(route)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Link {
    pub label: &'static str,
    pub target: Target,
}

/// A prominent link, rendered as a button.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Action {
    pub label: &'static str,
    pub target: Target,
    pub primary: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Image {
    pub src: &'static str,
    pub alt: &'static str,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Card {
    pub title: &'static str,
    pub text: &'static str,
    pub items: &'static [&'static str],
    pub links: &'static [Link],
    pub action: Option<Link>,
}

impl Card {
    pub const fn new(title: &'static str) -> Self {
        Self {
            title,
            text: "",
            items: &[],
            links: &[],
            action: None,
        }
    }

    pub const fn text(mut self, text: &'static str) -> Self {
        self.text = text;
        self
    }

    pub const fn items(mut self, items: &'static [&'static str]) -> Self {
        self.items = items;
        self
    }

    pub const fn links(mut self, links: &'static [Link]) -> Self {
        self.links = links;
        self
    }

    pub const fn action(mut self, label: &'static str, target: Target) -> Self {
        self.action = Some(Link { label, target });
        self
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Program {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Axis {
    pub name: &'static str,
    pub text: &'static str,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Home {
    pub headline: &'static str,
    pub lead: &'static str,
    pub cover: Image,
    pub actions: &'static [Action],
    pub partners_title: &'static str,
    pub partners_subtitle: &'static str,
    pub partners: &'static [Image],
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct About {
    pub banner: Image,
    pub title: &'static str,
    pub intro: &'static [&'static str],
    pub axes_title: &'static str,
    pub axes: &'static [Axis],
    pub cards: &'static [Card],
    pub alliances: Card,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Programs {
    pub label: &'static str,
    pub items: &'static [Program],
    pub link: Link,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Donate {
    pub items: &'static [&'static str],
    pub actions: &'static [Action],
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Contact {
    pub submit: &'static str,
    pub note: &'static str,
    pub location: Card,
    pub map: Image,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Body {
    Home(Home),
    About(About),
    Programs(Programs),
    Transparency(&'static [Card]),
    Involve(&'static [Card]),
    Donate(Donate),
    Contact(Contact),
}

/// The content block of a route.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Page {
    pub route: Route,
    pub title: Option<&'static str>,
    pub subtitle: Option<&'static str>,
    /// Show the news sidebar next to the content.
    pub sidebar: bool,
    pub body: Body,
}

/// The "Actualidad" sidebar, shown next to most pages.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Sidebar {
    pub intro: Card,
    pub cards: &'static [Card],
}

pub fn view(route: Route) -> &'static Page {
    match route {
        Route::Inicio => &content::HOME,
        Route::SobreNosotros => &content::ABOUT,
        Route::Proyectos => &content::PROGRAMS,
        Route::Transparencia => &content::TRANSPARENCY,
        Route::Involucrate => &content::INVOLVE,
        Route::Dona => &content::DONATE,
        Route::Contactos => &content::CONTACT,
    }
}

/// Look up the page of a route identifier, falling back to the home page.
pub fn lookup(identifier: &str) -> &'static Page {
    view(Route::parse(identifier).unwrap_or(Route::FALLBACK))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn every_page_knows_its_route() {
        for route in Route::ALL {
            assert_eq!(view(route).route, route);
        }
    }

    #[test]
    fn home_has_no_sidebar() {
        assert!(!view(Route::Inicio).sidebar);
        assert!(Route::ALL
            .into_iter()
            .filter(|route| *route != Route::Inicio)
            .all(|route| view(route).sidebar));
    }

    #[test]
    fn target_href() {
        assert_eq!(Target::from(Route::Dona).href(), "#dona");
        assert_eq!(Target::Anchor("#blog").href(), "#blog");
    }

    #[test]
    fn card_builder() {
        let card = Card::new("Compliance")
            .text("Políticas")
            .action("Ver", Target::Route(Route::Transparencia));
        assert_eq!(card.title, "Compliance");
        assert_eq!(card.text, "Políticas");
        assert!(card.items.is_empty());
        assert_eq!(
            card.action,
            Some(Link {
                label: "Ver",
                target: Target::Route(Route::Transparencia)
            })
        );
    }
}
