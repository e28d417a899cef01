//! Reveal animation
//!
//! The overlay appears to grow out of the tab being edited:
//!
//! ```text
//! frame 1: read layout → opacity 0, translateX(offset), no transition
//! frame 2: transition 0.135s → opacity 1, transform cleared
//! ```
//!
//! Both states must land on different frames or the renderer collapses them
//! and nothing animates.

use parking_lot::Mutex;
use std::time::Duration;

use crate::collaborators::LayoutProbe;
use crate::dom::{OverlayElement, OverlayStyle, Rect};

pub const DEFAULT_DAMPING: f64 = 0.45;
pub const DEFAULT_DURATION: Duration = Duration::from_millis(135);

pub type FrameCallback = Box<dyn FnOnce() + Send>;

/// Runs callbacks at the next render opportunity.
pub trait FrameScheduler: Send + Sync {
    fn request_frame(&self, callback: FrameCallback);
}

/// Frame scheduler driven by an explicit `run_frame` call.
#[derive(Default)]
pub struct FrameQueue {
    pending: Mutex<Vec<FrameCallback>>,
}

impl FrameQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self) -> usize {
        self.pending.lock().len()
    }

    /// Run the callbacks queued before this frame started. Callbacks requested
    /// while running wait for the following frame. Returns how many ran.
    pub fn run_frame(&self) -> usize {
        let due = std::mem::take(&mut *self.pending.lock());
        let count = due.len();
        for callback in due {
            callback();
        }
        count
    }
}

impl FrameScheduler for FrameQueue {
    fn request_frame(&self, callback: FrameCallback) {
        self.pending.lock().push(callback);
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationCoordinator {
    damping: f64,
    duration: Duration,
}

impl AnimationCoordinator {
    pub fn new(damping: f64, duration: Duration) -> Self {
        Self { damping, duration }
    }

    pub fn damping(&self) -> f64 {
        self.damping
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Start offset for the overlay, never past the right edge of the viewport.
    pub fn translate_x(&self, origin: Rect, destination: Rect, viewport_width: f64) -> f64 {
        ((origin.x - destination.x) * self.damping)
            .round()
            .min(viewport_width)
    }

    /// Read layout for `tab_id`. `None` when either end of the motion isn't laid out.
    pub fn plan(&self, layout: &dyn LayoutProbe, tab_id: &str) -> Option<RevealTransition> {
        let origin = layout.tab_item_rect(tab_id)?;
        let destination = layout.tab_container_rect()?;

        Some(RevealTransition {
            translate_x: self.translate_x(origin, destination, layout.viewport_width()),
            duration: self.duration,
        })
    }
}

impl Default for AnimationCoordinator {
    fn default() -> Self {
        Self::new(DEFAULT_DAMPING, DEFAULT_DURATION)
    }
}

/// Two-phase transition: start state now, end state on a later frame.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealTransition {
    translate_x: f64,
    duration: Duration,
}

impl RevealTransition {
    pub fn translate_x(&self) -> f64 {
        self.translate_x
    }

    pub fn start_state(&self) -> OverlayStyle {
        OverlayStyle {
            opacity: Some(0.0),
            translate_x: Some(self.translate_x),
            transition: None,
        }
    }

    pub fn end_state(&self) -> OverlayStyle {
        OverlayStyle {
            opacity: Some(1.0),
            translate_x: None,
            transition: Some(self.duration),
        }
    }

    pub fn apply_start_state(&self, overlay: &dyn OverlayElement) {
        overlay.set_style(self.start_state());
    }

    pub fn apply_end_state(&self, overlay: &dyn OverlayElement) {
        overlay.set_style(self.end_state());
    }
}
