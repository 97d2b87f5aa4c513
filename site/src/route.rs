//! Sections of the site, addressed by the location fragment.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown route: {0:?}")]
pub struct UnknownRoute(pub String);

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Route {
    #[default]
    Inicio,
    SobreNosotros,
    Proyectos,
    Transparencia,
    Involucrate,
    Dona,
    Contactos,
}

impl Route {
    /// All routes, in navigation order.
    pub const ALL: [Route; 7] = [
        Route::Inicio,
        Route::SobreNosotros,
        Route::Proyectos,
        Route::Transparencia,
        Route::Involucrate,
        Route::Dona,
        Route::Contactos,
    ];

    /// The route used whenever a fragment is empty or not recognized.
    pub const FALLBACK: Route = Route::Inicio;

    pub const fn as_str(&self) -> &'static str {
        match self {
            Route::Inicio => "inicio",
            Route::SobreNosotros => "sobre-nosotros",
            Route::Proyectos => "proyectos",
            Route::Transparencia => "transparencia",
            Route::Involucrate => "involucrate",
            Route::Dona => "dona",
            Route::Contactos => "contactos",
        }
    }

    pub const fn title(&self) -> &'static str {
        match self {
            Route::Inicio => "Inicio",
            Route::SobreNosotros => "Sobre nosotros",
            Route::Proyectos => "Proyectos",
            Route::Transparencia => "Transparencia",
            Route::Involucrate => "Involúcrate",
            Route::Dona => "Dona",
            Route::Contactos => "Contactos",
        }
    }

    /// Link target for in-page anchors, e.g. `#proyectos`.
    pub fn href(&self) -> String {
        format!("#{}", self.as_str())
    }

    /// Strict lookup of a bare identifier.
    pub fn parse(identifier: &str) -> Option<Route> {
        Self::ALL
            .into_iter()
            .find(|route| route.as_str() == identifier)
    }

    /// Resolve a location fragment, with or without its leading `#`.
    ///
    /// Never fails: an empty or unknown fragment resolves to [`Route::FALLBACK`].
    pub fn from_fragment(fragment: &str) -> Route {
        let identifier = fragment.strip_prefix('#').unwrap_or(fragment);
        Self::parse(identifier).unwrap_or(Self::FALLBACK)
    }
}

impl Display for Route {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for Route {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl FromStr for Route {
    type Err = UnknownRoute;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| UnknownRoute(s.to_string()))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn identifiers_round_trip() {
        for route in Route::ALL {
            assert_eq!(Route::parse(route.as_str()), Some(route));
            assert_eq!(route.as_str().parse::<Route>(), Ok(route));
            assert!(!route.as_str().is_empty());
        }
    }

    #[test]
    fn fragment_prefix_is_optional() {
        assert_eq!(Route::from_fragment("#dona"), Route::Dona);
        assert_eq!(Route::from_fragment("dona"), Route::Dona);
        assert_eq!(Route::from_fragment("#sobre-nosotros"), Route::SobreNosotros);
    }

    #[test]
    fn empty_and_unknown_fall_back() {
        assert_eq!(Route::from_fragment(""), Route::Inicio);
        assert_eq!(Route::from_fragment("#"), Route::Inicio);
        assert_eq!(Route::from_fragment("#blog"), Route::Inicio);
        assert_eq!(Route::from_fragment("#Proyectos"), Route::Inicio);
        assert_eq!(Route::from_fragment("##dona"), Route::Inicio);
    }

    #[test]
    fn strict_parse_rejects_unknown() {
        assert_eq!(Route::parse(""), None);
        assert_eq!(
            "blog".parse::<Route>(),
            Err(UnknownRoute("blog".to_string()))
        );
        assert_eq!(
            UnknownRoute("blog".into()).to_string(),
            r#"unknown route: "blog""#
        );
    }

    #[test]
    fn href_and_display() {
        assert_eq!(Route::Proyectos.href(), "#proyectos");
        assert_eq!(Route::Involucrate.to_string(), "involucrate");
        assert_eq!(Route::default(), Route::FALLBACK);
    }
}
