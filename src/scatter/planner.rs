use crate::{
    foundation::core::{Point, Rect, Size},
    foundation::error::{FolioError, FolioResult, ensure_finite_non_negative},
    foundation::math::{Lcg, seed_for_label},
    scatter::zone::{UsableArea, Zone},
};

/// Default number of candidates drawn per item.
pub const DEFAULT_TRIALS: u32 = 50;
/// Default salt appended to zone labels before hashing.
pub const DEFAULT_SEED_SALT: &str = "BaseSeed";

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Parameters shared by every zone of a scatter pass.
pub struct ScatterParams {
    /// Side length of an item's square footprint, in pixels.
    pub footprint: f64,
    /// Minimum gap kept between footprints and from zone edges.
    pub padding: f64,
    /// Candidates drawn per item.
    pub trials: u32,
    /// Salt appended to the zone label when deriving its seed.
    pub seed_salt: String,
}

impl Default for ScatterParams {
    fn default() -> Self {
        Self {
            footprint: 64.0,
            padding: 8.0,
            trials: DEFAULT_TRIALS,
            seed_salt: DEFAULT_SEED_SALT.to_string(),
        }
    }
}

impl ScatterParams {
    /// Check that the parameters describe a usable geometry.
    pub fn validate(&self) -> FolioResult<()> {
        if !self.footprint.is_finite() || self.footprint <= 0.0 {
            return Err(FolioError::validation("footprint must be finite and > 0"));
        }
        ensure_finite_non_negative(self.padding, "padding")?;
        if self.trials == 0 {
            return Err(FolioError::validation("trials must be > 0"));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A committed top-left position for one item.
pub struct Placement {
    /// Item identifier.
    pub item: String,
    /// Label of the zone the item was placed in.
    pub zone: String,
    /// Top-left corner.
    pub origin: Point,
    /// Side length of the square footprint.
    pub size: f64,
    /// True when every candidate overlapped and the position was drawn unconstrained.
    pub fallback: bool,
}

impl Placement {
    /// The item's square footprint.
    pub fn footprint(&self) -> Rect {
        Rect::from_origin_size(self.origin, Size::new(self.size, self.size))
    }

    /// Center of the footprint.
    pub fn center(&self) -> Point {
        self.footprint().center()
    }

    /// Footprint grown by `padding / 2` on every side.
    pub fn padded(&self, padding: f64) -> Rect {
        self.footprint().inflate(padding / 2.0, padding / 2.0)
    }

    /// Initial rigid-body rectangle for a physics collaborator.
    pub fn body_rect(&self) -> Rect {
        self.footprint()
    }
}

/// True when two padded footprints with origins `a` and `b` intersect on both axes.
pub fn padded_overlap(a: Point, b: Point, size: f64, padding: f64) -> bool {
    a.x < b.x + size + padding
        && a.x + size + padding > b.x
        && a.y < b.y + size + padding
        && a.y + size + padding > b.y
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
/// Summary of placing one zone.
pub struct ZoneOutcome {
    /// Items placed in this zone.
    pub placed: usize,
    /// How many of those came from the fallback path.
    pub fallbacks: usize,
    /// True when the zone was too narrow to host anything.
    pub skipped: bool,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// Result of a full scatter pass.
pub struct ScatterPlan {
    /// Every placement in commit order (zone order, then item order).
    pub placements: Vec<Placement>,
    /// Labels of zones that were skipped.
    pub skipped_zones: Vec<String>,
}

impl ScatterPlan {
    /// Number of placements produced by the fallback path.
    pub fn fallback_count(&self) -> usize {
        self.placements.iter().filter(|p| p.fallback).count()
    }

    /// Placements belonging to `zone`.
    pub fn placements_for<'a>(&'a self, zone: &'a str) -> impl Iterator<Item = &'a Placement> {
        self.placements.iter().filter(move |p| p.zone == zone)
    }
}

/// Incremental best-candidate placement across zones.
///
/// The pass owns the page-wide placement history; each zone is placed against
/// everything committed before it.
#[derive(Clone, Debug)]
pub struct ScatterPass {
    params: ScatterParams,
    placements: Vec<Placement>,
    skipped_zones: Vec<String>,
}

impl ScatterPass {
    /// Start a pass with an empty history.
    pub fn new(params: ScatterParams) -> Self {
        Self::with_history(params, Vec::new())
    }

    /// Continue from previously committed placements.
    pub fn with_history(params: ScatterParams, placements: Vec<Placement>) -> Self {
        Self {
            params,
            placements,
            skipped_zones: Vec::new(),
        }
    }

    /// Parameters in use.
    pub fn params(&self) -> &ScatterParams {
        &self.params
    }

    /// Placements committed so far.
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Place every item of `zone`, committing each before the next is considered.
    pub fn place_zone(&mut self, zone: &Zone) -> ZoneOutcome {
        let size = self.params.footprint;
        let Some(area) = zone.usable_area(size, self.params.padding) else {
            tracing::debug!(zone = %zone.label, "zone too narrow, skipping");
            self.skipped_zones.push(zone.label.clone());
            return ZoneOutcome {
                skipped: true,
                ..ZoneOutcome::default()
            };
        };

        let mut rng = Lcg::new(seed_for_label(&zone.label, &self.params.seed_salt));
        let mut outcome = ZoneOutcome::default();
        for item in &zone.items {
            let (origin, fallback) = match self.best_candidate(&area, &mut rng) {
                Some(origin) => (origin, false),
                None => {
                    tracing::debug!(zone = %zone.label, item = %item, "all candidates overlap, using fallback");
                    (draw_origin(&area, &mut rng), true)
                }
            };
            self.placements.push(Placement {
                item: item.clone(),
                zone: zone.label.clone(),
                origin,
                size,
                fallback,
            });
            outcome.placed += 1;
            outcome.fallbacks += usize::from(fallback);
        }
        outcome
    }

    /// Draw all trials and keep the one farthest from its nearest neighbour.
    /// Returns `None` when every trial overlaps an existing placement.
    fn best_candidate(&self, area: &UsableArea, rng: &mut Lcg) -> Option<Point> {
        let mut best: Option<Point> = None;
        let mut best_score = -1.0f64;
        for _ in 0..self.params.trials {
            let candidate = draw_origin(area, rng);
            let score = self.score(candidate);
            if score > best_score {
                best_score = score;
                best = Some(candidate);
            }
        }
        best
    }

    /// Distance from the candidate's center to the nearest placed center,
    /// `-1` on overlap, `+inf` on an empty page.
    fn score(&self, candidate: Point) -> f64 {
        let size = self.params.footprint;
        let half = size / 2.0;
        let center = Point::new(candidate.x + half, candidate.y + half);
        let mut nearest = f64::INFINITY;
        for placed in &self.placements {
            if padded_overlap(candidate, placed.origin, size, self.params.padding) {
                return -1.0;
            }
            let other = Point::new(placed.origin.x + half, placed.origin.y + half);
            nearest = nearest.min(center.distance(other));
        }
        nearest
    }

    /// Finish the pass.
    pub fn finish(self) -> ScatterPlan {
        ScatterPlan {
            placements: self.placements,
            skipped_zones: self.skipped_zones,
        }
    }
}

fn draw_origin(area: &UsableArea, rng: &mut Lcg) -> Point {
    let x = area.x.draw(rng);
    let y = area.y.draw(rng);
    Point::new(x, y)
}

/// Disperse the items of every zone, in order, starting from an empty page.
#[tracing::instrument(skip(zones, params), fields(zones = zones.len()))]
pub fn plan_scatter(zones: &[Zone], params: &ScatterParams) -> ScatterPlan {
    let mut pass = ScatterPass::new(params.clone());
    for zone in zones {
        pass.place_zone(zone);
    }
    let plan = pass.finish();
    tracing::debug!(
        placed = plan.placements.len(),
        fallbacks = plan.fallback_count(),
        skipped = plan.skipped_zones.len(),
        "scatter pass finished"
    );
    plan
}

#[cfg(test)]
#[path = "../../tests/unit/scatter/planner.rs"]
mod tests;
