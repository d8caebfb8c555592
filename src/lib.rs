//! Folio computes the layout data behind a portfolio index page.
//!
//! The heart of the crate is a best-candidate planner that disperses logos inside
//! rectangular zones without overlap, reproducibly for a given page geometry.
//!
//! # Pipeline overview
//!
//! 1. **Measure** (host): column width and section extents -> [`PageLayout`]
//! 2. **Zone**: [`PageLayout`] + [`PageConfig`] -> [`Zone`]s ([`zones_for_page`])
//! 3. **Scatter**: [`Zone`]s -> [`ScatterPlan`] ([`plan_scatter`])
//! 4. **Resolve**: placements joined with logo sources -> [`PagePlan`] ([`plan_page`])
//!
//! Display state (framed vs. gravity) is threaded explicitly through [`step`].
//! The [`ascii`] side of the page (font fitting and ping-pong frames) is
//! independent of the planner.
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: seeds come only from zone labels; no external entropy.
//! - **Total**: the planner never fails; narrow zones are skipped and crowded
//!   zones fall back to unconstrained positions.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;
mod logos;
mod page;
mod scatter;

pub mod ascii;

pub use foundation::core::{Point, Rect, Size, Span, Vec2};
pub use foundation::error::{FolioError, FolioResult};
pub use foundation::math::{Lcg, StringHash, seed_for_label};
pub use logos::catalog::{FAVICON_SERVICE, LogoCatalog, LogoSource, favicon_url};
pub use page::config::PageConfig;
pub use page::layout::{PageLayout, PagePlan, PlacedLogo, Section, plan_page, zones_for_page};
pub use page::session::{DisplayMode, PassOutcome, PassTrigger, ResizeDebounce, step};
pub use scatter::planner::{
    DEFAULT_SEED_SALT, DEFAULT_TRIALS, Placement, ScatterParams, ScatterPass, ScatterPlan,
    ZoneOutcome, padded_overlap, plan_scatter,
};
pub use scatter::zone::{UsableArea, Zone};
