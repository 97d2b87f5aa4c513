#![doc = include_str!("../../README.md")]
//#![warn(missing_docs)]

pub mod config;
pub mod form;
pub mod location;
pub mod nav;
pub mod registry;
pub mod route;
pub mod state;

pub use config::SiteConfig;
pub use location::{Location, MemoryLocation};
pub use route::Route;
pub use state::{RouteState, Subscription};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const TAG: Option<&str> = option_env!("TAG");

/// Current version of the site
pub const fn version() -> &'static str {
    if let Some(tag) = TAG {
        tag
    } else {
        VERSION
    }
}
