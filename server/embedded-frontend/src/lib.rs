use std::collections::HashMap;

include!(concat!(env!("OUT_DIR"), "/generated-site.rs"));

/// The built single page application, by path.
pub fn site_assets() -> HashMap<&'static str, static_files::Resource> {
    generate_site_assets()
}
