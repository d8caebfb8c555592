use crate::foundation::math::Lcg;

pub use kurbo::{Point, Rect, Size, Vec2};

/// Closed 1D interval `[lo, hi]` in layout pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Span {
    /// Lower bound.
    pub lo: f64,
    /// Upper bound.
    pub hi: f64,
}

impl Span {
    /// Build a span from its bounds (not reordered).
    pub fn new(lo: f64, hi: f64) -> Self {
        Self { lo, hi }
    }

    /// A span containing exactly one coordinate.
    pub fn point(v: f64) -> Self {
        Self { lo: v, hi: v }
    }

    /// `hi - lo`; negative for an inverted span.
    pub fn extent(self) -> f64 {
        self.hi - self.lo
    }

    /// True when `hi < lo`.
    pub fn is_inverted(self) -> bool {
        self.hi < self.lo
    }

    /// Inclusive containment with an absolute tolerance.
    pub fn contains_approx(self, v: f64, eps: f64) -> bool {
        v >= self.lo - eps && v <= self.hi + eps
    }

    pub(crate) fn draw(self, rng: &mut Lcg) -> f64 {
        rng.next_in(self.lo, self.hi)
    }
}
