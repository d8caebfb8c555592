//! Responsive sizing and frame sequencing for the index page ASCII art.

/// Font size and column split search.
pub mod fit;
/// Ping-pong frame ordering and the playback clock.
pub mod sequence;
