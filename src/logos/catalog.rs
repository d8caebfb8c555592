use std::collections::BTreeMap;

/// Favicon service used when a domain has no configured override.
pub const FAVICON_SERVICE: &str = "https://www.google.com/s2/favicons";
/// Requested favicon size in pixels.
pub const FAVICON_SIZE_PX: u32 = 256;

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// Where a logo image comes from.
pub enum LogoSource {
    /// A site-local image path configured for the domain.
    Custom(String),
    /// A favicon fetched from the favicon service.
    Favicon(String),
}

impl LogoSource {
    /// The image URL or path.
    pub fn url(&self) -> &str {
        match self {
            Self::Custom(s) | Self::Favicon(s) => s,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
/// Per-domain logo overrides.
pub struct LogoCatalog {
    overrides: BTreeMap<String, String>,
}

impl LogoCatalog {
    /// Build a catalog from `(domain, image path)` pairs.
    pub fn from_overrides<I, K, V>(overrides: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            overrides: overrides
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Number of configured overrides.
    pub fn len(&self) -> usize {
        self.overrides.len()
    }

    /// True when no override is configured.
    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty()
    }

    /// Resolve the image for `domain`. Overrides win over the favicon service.
    pub fn source_for(&self, domain: &str) -> LogoSource {
        match self.overrides.get(domain) {
            Some(path) => LogoSource::Custom(path.clone()),
            None => LogoSource::Favicon(favicon_url(domain)),
        }
    }
}

/// Favicon service URL for `domain`.
pub fn favicon_url(domain: &str) -> String {
    format!("{FAVICON_SERVICE}?domain={domain}&sz={FAVICON_SIZE_PX}")
}

#[cfg(test)]
#[path = "../../tests/unit/logos/catalog.rs"]
mod tests;
