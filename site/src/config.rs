use crate::form::ContactForm;
use serde::Deserialize;

pub const DEFAULT_FORM_ENDPOINT: &str = "https://formspree.io/f/xandkdol";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse site configuration: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("invalid site configuration: {0}")]
    Invalid(String),
}

/// Settings of the site which are not part of its content.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct SiteConfig {
    pub name: String,
    pub tagline: String,
    pub logo: String,
    /// Where the contact form gets posted to.
    pub form_endpoint: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: "KALLARI".to_string(),
            tagline: "Asociación Civil • Perú".to_string(),
            logo: "/kallari-logo.png".to_string(),
            form_endpoint: DEFAULT_FORM_ENDPOINT.to_string(),
        }
    }
}

impl SiteConfig {
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        // an empty document is a valid, default configuration
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::Invalid("name must not be empty".into()));
        }
        if !(self.form_endpoint.starts_with("https://") || self.form_endpoint.starts_with("http://"))
        {
            return Err(ConfigError::Invalid(format!(
                "form endpoint must be an HTTP(S) URL: {}",
                self.form_endpoint
            )));
        }
        Ok(())
    }

    /// Replace the form endpoint, validating the result.
    pub fn with_form_endpoint(mut self, endpoint: impl Into<String>) -> Result<Self, ConfigError> {
        self.form_endpoint = endpoint.into();
        self.validate()?;
        Ok(self)
    }

    pub fn contact_form(&self) -> ContactForm {
        ContactForm::new(self.form_endpoint.clone())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn empty_is_default() {
        assert_eq!(SiteConfig::from_yaml("").unwrap(), SiteConfig::default());
        assert_eq!(SiteConfig::from_yaml("  \n").unwrap(), SiteConfig::default());
    }

    #[test]
    fn partial_keeps_defaults() {
        let config = SiteConfig::from_yaml("formEndpoint: https://example.com/f/abc\n").unwrap();
        assert_eq!(config.form_endpoint, "https://example.com/f/abc");
        assert_eq!(config.name, "KALLARI");
        assert_eq!(config.contact_form().action, "https://example.com/f/abc");
    }

    #[test]
    fn unknown_field_is_rejected() {
        let err = SiteConfig::from_yaml("colour: green\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)), "{err}");
    }

    #[test]
    fn endpoint_must_be_url() {
        let err = SiteConfig::from_yaml("formEndpoint: mailto:info@kallari.pe\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)), "{err}");
    }

    #[test]
    fn override_endpoint() {
        let config = SiteConfig::default()
            .with_form_endpoint("https://example.com/f/x")
            .unwrap();
        assert_eq!(config.form_endpoint, "https://example.com/f/x");
    }

    #[test]
    fn override_endpoint_must_be_url() {
        let err = SiteConfig::default()
            .with_form_endpoint("mailto:x")
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)), "{err}");
    }
}
