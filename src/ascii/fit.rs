use crate::foundation::error::{FolioError, FolioResult, ensure_finite_non_negative};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Tunables of the art fitting loop, in CSS pixels.
pub struct FitConfig {
    /// Font size tried first.
    pub base_font_px: u32,
    /// Smallest font size the loop will reach.
    pub hard_min_font_px: u32,
    /// Window widths at or below this use the single-column layout.
    pub compact_breakpoint_px: f64,
    /// Width of the divider column between text and art.
    pub midline_px: f64,
    /// Lower bound of the art column as a fraction of usable width.
    pub right_min_fraction: f64,
    /// Upper bound of the art column as a fraction of usable width.
    pub right_max_fraction: f64,
    /// Minimum width of the text column.
    pub left_min_px: f64,
    /// Slack subtracted from measured widths to absorb rounding.
    pub edge_fudge_px: f64,
    /// Extra gutter added to the art wrapper padding.
    pub safety_margin_px: f64,
    /// Upper bound on desktop iterations.
    pub max_iterations: u32,
}

impl Default for FitConfig {
    fn default() -> Self {
        Self {
            base_font_px: 12,
            hard_min_font_px: 7,
            compact_breakpoint_px: 768.0,
            midline_px: 22.0,
            right_min_fraction: 0.35,
            right_max_fraction: 0.94,
            left_min_px: 260.0,
            edge_fudge_px: 3.0,
            safety_margin_px: 6.0,
            max_iterations: 24,
        }
    }
}

impl FitConfig {
    /// Check ordering and range constraints between the tunables.
    pub fn validate(&self) -> FolioResult<()> {
        if self.hard_min_font_px == 0 || self.hard_min_font_px > self.base_font_px {
            return Err(FolioError::config(
                "font sizes must satisfy 0 < hard_min_font_px <= base_font_px",
            ));
        }
        for (name, v) in [
            ("compact_breakpoint_px", self.compact_breakpoint_px),
            ("midline_px", self.midline_px),
            ("left_min_px", self.left_min_px),
            ("edge_fudge_px", self.edge_fudge_px),
            ("safety_margin_px", self.safety_margin_px),
        ] {
            ensure_finite_non_negative(v, name).map_err(|e| FolioError::config(e.to_string()))?;
        }
        let (lo, hi) = (self.right_min_fraction, self.right_max_fraction);
        if !(0.0..=1.0).contains(&lo) || !(0.0..=1.0).contains(&hi) || lo > hi {
            return Err(FolioError::config(
                "right column fractions must satisfy 0 <= min <= max <= 1",
            ));
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// Horizontal padding of an element.
pub struct HPadding {
    /// Left padding.
    #[serde(default)]
    pub left: f64,
    /// Right padding.
    #[serde(default)]
    pub right: f64,
}

impl HPadding {
    /// Sum of both sides.
    pub fn total(self) -> f64 {
        self.left + self.right
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// Measured host geometry for one fitting run.
pub struct FitViewport {
    /// Window inner width.
    pub window_width: f64,
    /// Client width of the grid container.
    pub grid_width: f64,
    /// Grid container padding.
    #[serde(default)]
    pub grid_padding: HPadding,
    /// Art wrapper padding.
    #[serde(default)]
    pub wrap_padding: HPadding,
}

/// Measures the rendered width of the art at a font size.
pub trait ArtMeasure {
    /// Rendered width in pixels with `font_px` font size.
    fn measure_width(&mut self, font_px: u32) -> f64;
}

impl<F> ArtMeasure for F
where
    F: FnMut(u32) -> f64,
{
    fn measure_width(&mut self, font_px: u32) -> f64 {
        self(font_px)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
/// Width model for a monospace block: `columns * font_px * advance_ratio`.
pub struct MonospaceMeasure {
    /// Longest line length in characters.
    pub columns: usize,
    /// Glyph advance as a fraction of the font size.
    pub advance_ratio: f64,
}

impl MonospaceMeasure {
    /// Measure for the longest line of `art`.
    pub fn for_text(art: &str, advance_ratio: f64) -> Self {
        let columns = art.lines().map(|l| l.chars().count()).max().unwrap_or(0);
        Self {
            columns,
            advance_ratio,
        }
    }
}

impl ArtMeasure for MonospaceMeasure {
    fn measure_width(&mut self, font_px: u32) -> f64 {
        self.columns as f64 * f64::from(font_px) * self.advance_ratio
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Widths of the text and art columns.
pub struct ColumnSplit {
    /// Text column width.
    pub left: f64,
    /// Art column width.
    pub right: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Result of fitting the art.
pub struct FitOutcome {
    /// Chosen font size.
    pub font_px: u32,
    /// Line height (font size + 1).
    pub line_height_px: u32,
    /// Last measured art width (rounded up).
    pub art_width: f64,
    /// True for the single-column layout.
    pub compact: bool,
    /// Column template to apply; `None` in compact mode or when the loop gave up.
    pub columns: Option<ColumnSplit>,
}

/// Split `usable` width between the text and art columns, aiming for
/// `desired_right` pixels of art.
pub fn solve_columns(usable: f64, desired_right: f64, cfg: &FitConfig) -> ColumnSplit {
    let min_right = cfg.right_min_fraction * usable;
    let max_right = cfg.right_max_fraction * usable;
    let mut right = min_right.max(desired_right.min(max_right));
    let mut left = usable - right;

    if left < cfg.left_min_px {
        right = min_right.max(usable - cfg.left_min_px);
        left = usable - right;
    }

    let left = cfg.left_min_px.max(left.floor());
    right = (usable - left).max(0.0);
    ColumnSplit { left, right }
}

/// Pick a font size (and, on wide windows, a column split) so the art fits.
#[tracing::instrument(skip(measure, cfg))]
pub fn fit_art<M: ArtMeasure>(
    viewport: &FitViewport,
    measure: &mut M,
    cfg: &FitConfig,
) -> FitOutcome {
    let content =
        (viewport.grid_width - viewport.grid_padding.total() - cfg.edge_fudge_px).max(0.0);
    let gutters = viewport.wrap_padding.total() + cfg.safety_margin_px;
    let mut width_at = |px: u32| measure.measure_width(px).ceil();

    if viewport.window_width <= cfg.compact_breakpoint_px {
        let allowed = (content - gutters - cfg.edge_fudge_px).max(0.0);
        let mut size = cfg.base_font_px;
        let mut art_width = width_at(size);
        while art_width > allowed && size > cfg.hard_min_font_px {
            size -= 1;
            art_width = width_at(size);
        }
        return FitOutcome {
            font_px: size,
            line_height_px: size + 1,
            art_width,
            compact: true,
            columns: None,
        };
    }

    let usable = (content - cfg.midline_px).max(0.0);
    let mut size = cfg.base_font_px;
    let mut art_width = 0.0;
    for _ in 0..cfg.max_iterations {
        art_width = width_at(size);
        let split = solve_columns(usable, (art_width + gutters).ceil(), cfg);
        let allowed = (split.right - gutters - cfg.edge_fudge_px).max(0.0);

        if art_width <= allowed || size <= cfg.hard_min_font_px {
            return FitOutcome {
                font_px: size,
                line_height_px: size + 1,
                art_width,
                compact: false,
                columns: Some(split),
            };
        }

        let target = (f64::from(size) * (allowed / art_width.max(1.0))).floor();
        let clamped = target.max(f64::from(cfg.hard_min_font_px)) as u32;
        size = clamped.min(size - 1);
    }

    tracing::warn!(font_px = size, art_width, "art fitting gave up before converging");
    FitOutcome {
        font_px: size,
        line_height_px: size + 1,
        art_width,
        compact: false,
        columns: None,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/ascii/fit.rs"]
mod tests;
