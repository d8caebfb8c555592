use crate::{
    foundation::error::FolioResult,
    page::config::PageConfig,
    page::layout::{PageLayout, PagePlan, plan_page},
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// How the logo column is presented.
pub enum DisplayMode {
    /// Section frames shown; logos sit at their dispersed positions.
    #[default]
    Framed,
    /// Frames hidden; logos are handed to a physics collaborator and fall.
    Gravity,
}

impl DisplayMode {
    /// Restore a mode from its persisted flag (`"true"` means frames enabled).
    /// Only a missing flag or exactly `"true"` restores [`DisplayMode::Framed`];
    /// any other stored string restores [`DisplayMode::Gravity`].
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            None | Some("true") => Self::Framed,
            Some(_) => Self::Gravity,
        }
    }

    /// Persisted flag for this mode.
    pub fn as_stored(self) -> &'static str {
        match self {
            Self::Framed => "true",
            Self::Gravity => "false",
        }
    }

    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            Self::Framed => Self::Gravity,
            Self::Gravity => Self::Framed,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
/// Host events that may start a layout pass.
pub enum PassTrigger {
    /// First render of the page.
    InitialLoad,
    /// The user flipped the frame switch.
    Toggle,
    /// A debounced window resize fired.
    Resize,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// What the host should do after a trigger.
pub struct PassOutcome {
    /// Mode in effect after the trigger.
    pub mode: DisplayMode,
    /// Fresh positions to apply, when a pass ran.
    pub plan: Option<PagePlan>,
    /// Whether the current logo positions should seed the physics collaborator.
    pub hand_off_to_physics: bool,
}

/// Advance the display state for `trigger`.
///
/// The static layout always runs on load and resize so the logos exist and
/// start from fresh positions even when gravity takes over right after.
#[tracing::instrument(skip(page, config))]
pub fn step(
    mode: DisplayMode,
    trigger: PassTrigger,
    page: &PageLayout,
    config: &PageConfig,
) -> FolioResult<PassOutcome> {
    let next = match trigger {
        PassTrigger::Toggle => mode.toggled(),
        PassTrigger::InitialLoad | PassTrigger::Resize => mode,
    };
    let needs_plan = !(trigger == PassTrigger::Toggle && next == DisplayMode::Gravity);
    let plan = if needs_plan {
        Some(plan_page(page, config)?)
    } else {
        None
    };
    Ok(PassOutcome {
        mode: next,
        plan,
        hand_off_to_physics: next == DisplayMode::Gravity,
    })
}

/// Trailing-edge debounce for resize events, driven by host timestamps.
#[derive(Clone, Debug)]
pub struct ResizeDebounce {
    delay_ms: u64,
    last_event_ms: Option<u64>,
}

impl ResizeDebounce {
    /// Fire `delay_ms` after the last recorded event.
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            last_event_ms: None,
        }
    }

    /// Debounce with the quiet period configured for the page.
    pub fn from_config(config: &PageConfig) -> Self {
        Self::new(config.resize_debounce_ms)
    }

    /// Quiet period in milliseconds.
    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    /// Record a resize event at `now_ms`, restarting the quiet period.
    pub fn notify(&mut self, now_ms: u64) {
        self.last_event_ms = Some(now_ms);
    }

    /// True when a pass is pending.
    pub fn is_pending(&self) -> bool {
        self.last_event_ms.is_some()
    }

    /// Returns true exactly once per burst, when the quiet period has elapsed.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        match self.last_event_ms {
            Some(t) if now_ms.saturating_sub(t) >= self.delay_ms => {
                self.last_event_ms = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/page/session.rs"]
mod tests;
