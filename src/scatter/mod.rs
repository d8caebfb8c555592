//! Best-candidate dispersion of fixed-size items inside rectangular zones.
//!
//! Every zone draws from its own seeded generator while non-overlap is enforced
//! against all placements on the page.

pub mod planner;
pub mod zone;
