use crate::foundation::core::{Rect, Span};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A rectangular region of the page that hosts an ordered group of items.
///
/// The label seeds the zone's random sequence, so two zones with the same label
/// and geometry disperse their items identically.
pub struct Zone {
    /// Stable label (usually the section title) used to derive the seed.
    pub label: String,
    /// Zone rectangle in layout pixels.
    pub bounds: Rect,
    /// Items to place, in input order.
    pub items: Vec<String>,
}

impl Zone {
    /// Build a zone from explicit bounds. Inverted bounds are clamped so that
    /// `max_x >= min_x` and `max_y >= min_y`.
    pub fn new(
        label: impl Into<String>,
        min_x: f64,
        max_x: f64,
        min_y: f64,
        max_y: f64,
        items: Vec<String>,
    ) -> Self {
        Self {
            label: label.into(),
            bounds: Rect::new(min_x, min_y, max_x.max(min_x), max_y.max(min_y)),
            items,
        }
    }

    /// Origins a `footprint`-sized square may take inside this zone while
    /// keeping `padding` from every edge.
    ///
    /// Returns `None` when the horizontal range is empty or a single point; the
    /// zone is then skipped. A vertical range that is too short collapses to
    /// the line through the zone's vertical center.
    pub fn usable_area(&self, footprint: f64, padding: f64) -> Option<UsableArea> {
        let b = self.bounds;
        let x = Span::new(b.x0 + padding, b.x1 - footprint - padding);
        if x.extent() <= 0.0 {
            return None;
        }

        let y = Span::new(b.y0 + padding, b.y1 - footprint - padding);
        if y.is_inverted() {
            let center_y = b.y0 + (b.y1 - b.y0) / 2.0;
            return Some(UsableArea {
                x,
                y: Span::point(center_y - footprint / 2.0),
                collapsed: true,
            });
        }
        Some(UsableArea {
            x,
            y,
            collapsed: false,
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
/// Ranges of valid top-left origins inside a zone.
pub struct UsableArea {
    /// Horizontal origin range.
    pub x: Span,
    /// Vertical origin range (a single point when `collapsed`).
    pub y: Span,
    /// True when the zone was shorter than the footprint plus padding.
    pub collapsed: bool,
}

impl UsableArea {
    /// Whether `(x, y)` lies inside the ranges, with tolerance `eps`.
    pub fn contains_origin(&self, x: f64, y: f64, eps: f64) -> bool {
        self.x.contains_approx(x, eps) && self.y.contains_approx(y, eps)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scatter/zone.rs"]
mod tests;
