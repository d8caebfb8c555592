use crate::{
    foundation::error::{FolioError, FolioResult, ensure_finite_non_negative},
    logos::catalog::LogoSource,
    page::config::PageConfig,
    scatter::planner::{Placement, plan_scatter},
    scatter::zone::Zone,
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One measured section of the left column.
pub struct Section {
    /// Section title text, if the section has one.
    #[serde(default)]
    pub title: Option<String>,
    /// Offset of the section's top edge within the column.
    pub top: f64,
    /// Rendered section height.
    pub height: f64,
    /// Domains listed in the section, in document order. Empty entries are ignored.
    #[serde(default)]
    pub domains: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Measured page geometry fed into a layout pass.
pub struct PageLayout {
    /// Client width of the logo column.
    pub column_width: f64,
    /// Sections in document order.
    pub sections: Vec<Section>,
}

impl PageLayout {
    /// Reject non-finite or negative measurements.
    pub fn validate(&self) -> FolioResult<()> {
        ensure_finite_non_negative(self.column_width, "column_width")?;
        for (idx, section) in self.sections.iter().enumerate() {
            if !section.top.is_finite() {
                return Err(FolioError::validation(format!(
                    "section {idx} top must be finite"
                )));
            }
            ensure_finite_non_negative(section.height, &format!("section {idx} height"))?;
        }
        Ok(())
    }
}

/// Derive one zone per eligible section.
///
/// Sections without domains and sections with a skipped title produce no zone.
pub fn zones_for_page(page: &PageLayout, config: &PageConfig) -> Vec<Zone> {
    let min_x = config.margin_left;
    let max_x = page.column_width - config.margin_right;

    let mut zones = Vec::with_capacity(page.sections.len());
    for section in &page.sections {
        let items: Vec<String> = section
            .domains
            .iter()
            .filter(|d| !d.is_empty())
            .cloned()
            .collect();
        if items.is_empty() {
            continue;
        }
        if let Some(title) = &section.title
            && config.is_skipped_title(title)
        {
            continue;
        }

        let label = match section.title.as_deref() {
            Some(t) if !t.is_empty() => t.to_string(),
            _ => config.default_title.clone(),
        };
        zones.push(Zone::new(
            label,
            min_x,
            max_x,
            section.top,
            section.top + section.height,
            items,
        ));
    }
    zones
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A placement joined with the image the renderer should show.
pub struct PlacedLogo {
    /// Position and footprint.
    #[serde(flatten)]
    pub placement: Placement,
    /// Logo image source.
    pub source: LogoSource,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// Output of a page layout pass.
pub struct PagePlan {
    /// Logos in placement order.
    pub logos: Vec<PlacedLogo>,
    /// Zones that were too narrow to host logos.
    pub skipped_zones: Vec<String>,
}

impl PagePlan {
    /// Number of logos placed by the fallback path.
    pub fn fallback_count(&self) -> usize {
        self.logos.iter().filter(|l| l.placement.fallback).count()
    }
}

/// Compute a fresh logo layout for the page.
#[tracing::instrument(skip(page, config), fields(sections = page.sections.len()))]
pub fn plan_page(page: &PageLayout, config: &PageConfig) -> FolioResult<PagePlan> {
    config.validate()?;
    page.validate()?;

    let zones = zones_for_page(page, config);
    let scatter = plan_scatter(&zones, &config.scatter);
    if !scatter.skipped_zones.is_empty() {
        tracing::warn!(
            column_width = page.column_width,
            skipped = ?scatter.skipped_zones,
            "logo column too narrow for some zones"
        );
    }

    let logos = scatter
        .placements
        .into_iter()
        .map(|placement| PlacedLogo {
            source: config.logos.source_for(&placement.item),
            placement,
        })
        .collect();
    Ok(PagePlan {
        logos,
        skipped_zones: scatter.skipped_zones,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/page/layout.rs"]
mod tests;
