use gloo_events::EventListener;
use kallari_site::Location;

/// The location of the browser window.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct BrowserLocation;

impl BrowserLocation {
    fn location() -> web_sys::Location {
        gloo_utils::window().location()
    }
}

impl Location for BrowserLocation {
    type Listener = EventListener;

    fn hash(&self) -> String {
        Self::location().hash().unwrap_or_else(|err| {
            log::warn!("Failed to read location hash: {err:?}");
            String::new()
        })
    }

    fn set_hash(&self, fragment: &str) {
        if let Err(err) = Self::location().set_hash(fragment) {
            log::warn!("Failed to set location hash: {err:?}");
        }
    }

    fn listen(&self, callback: Box<dyn Fn(String)>) -> Self::Listener {
        let location = *self;
        EventListener::new(&gloo_utils::window(), "hashchange", move |_| {
            callback(location.hash());
        })
    }
}
