use crate::{
    foundation::error::{FolioError, FolioResult, ensure_finite_non_negative},
    logos::catalog::LogoCatalog,
    scatter::planner::ScatterParams,
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Configuration for laying out the logo column of the index page.
///
/// Geometry and timing fields default to the live site's values, so an empty
/// JSON object is a valid config. The logo catalog defaults to empty: image
/// overrides point at site-local assets and must be supplied by the deployment,
/// otherwise every domain resolves to its favicon.
pub struct PageConfig {
    /// Planner parameters (footprint, padding, trials, seed salt).
    pub scatter: ScatterParams,
    /// Horizontal margin kept on the left of the logo column.
    pub margin_left: f64,
    /// Horizontal margin kept on the right of the logo column.
    pub margin_right: f64,
    /// Zone label used for sections without a title.
    pub default_title: String,
    /// Section titles (compared trimmed and upper-cased) that never get logos.
    pub skipped_titles: Vec<String>,
    /// Per-domain logo overrides.
    pub logos: LogoCatalog,
    /// Quiet period before a resize triggers a new pass
    /// (see [`crate::ResizeDebounce::from_config`]).
    pub resize_debounce_ms: u64,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            scatter: ScatterParams::default(),
            margin_left: 30.0,
            margin_right: 50.0,
            default_title: "Sec".to_string(),
            skipped_titles: vec!["NAVIGATION".to_string()],
            logos: LogoCatalog::default(),
            resize_debounce_ms: 300,
        }
    }
}

impl PageConfig {
    /// Parse a config from JSON text and validate it.
    pub fn from_json_str(s: &str) -> FolioResult<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Check ranges of all numeric fields.
    pub fn validate(&self) -> FolioResult<()> {
        self.scatter
            .validate()
            .map_err(|e| FolioError::config(format!("scatter: {e}")))?;
        ensure_finite_non_negative(self.margin_left, "margin_left")
            .and_then(|()| ensure_finite_non_negative(self.margin_right, "margin_right"))
            .map_err(|e| FolioError::config(e.to_string()))?;
        if self.default_title.is_empty() {
            return Err(FolioError::config("default_title must be non-empty"));
        }
        Ok(())
    }

    /// Whether a section with `title` is excluded from logo placement.
    pub fn is_skipped_title(&self, title: &str) -> bool {
        let normalized = title.trim().to_uppercase();
        self.skipped_titles
            .iter()
            .any(|t| t.trim().to_uppercase() == normalized)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/page/config.rs"]
mod tests;
