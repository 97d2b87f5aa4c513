use anyhow::Context;
use kallari_site::SiteConfig;

const SITE_CONFIG: &str = include_str!("../site.yaml");
const FORM_ENDPOINT: Option<&str> = option_env!("KALLARI_FORM_ENDPOINT");

/// Load the site configuration embedded at build time, falling back to the defaults.
pub fn load() -> SiteConfig {
    match parse(SITE_CONFIG, FORM_ENDPOINT) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("Using default site configuration: {err:#}");
            SiteConfig::default()
        }
    }
}

fn parse(yaml: &str, form_endpoint: Option<&str>) -> anyhow::Result<SiteConfig> {
    let config = SiteConfig::from_yaml(yaml).context("Failed to load site.yaml")?;

    Ok(match form_endpoint {
        Some(endpoint) => {
            log::debug!("Form endpoint overridden: {endpoint}");
            config
                .with_form_endpoint(endpoint)
                .context("Invalid KALLARI_FORM_ENDPOINT")?
        }
        None => config,
    })
}
