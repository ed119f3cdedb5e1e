use super::constants::{DEFAULT_FORM_ENDPOINT, DEFAULT_ROLES};

/// Runtime page configuration: compiled-in defaults, optionally overridden
/// by `data-*` attributes on the page body.
#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    pub roles: Vec<String>,
    pub form_endpoint: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            roles: DEFAULT_ROLES.iter().map(|r| r.to_string()).collect(),
            form_endpoint: DEFAULT_FORM_ENDPOINT.to_string(),
        }
    }
}

impl SiteConfig {
    /// `roles` is a `|`-separated list; `endpoint` must be an http(s) URL.
    /// Blank or unusable values keep the default.
    pub fn with_overrides(roles: Option<&str>, endpoint: Option<&str>) -> Self {
        let mut cfg = Self::default();
        if let Some(list) = roles {
            let parsed = parse_roles(list);
            if !parsed.is_empty() {
                cfg.roles = parsed;
            }
        }
        if let Some(url) = endpoint.map(str::trim) {
            if url.starts_with("https://") || url.starts_with("http://") {
                cfg.form_endpoint = url.to_string();
            } else if !url.is_empty() {
                log::warn!("[config] ignoring form endpoint override {:?}", url);
            }
        }
        cfg
    }
}

pub fn parse_roles(list: &str) -> Vec<String> {
    list.split('|')
        .map(str::trim)
        .filter(|r| !r.is_empty())
        .map(str::to_string)
        .collect()
}
