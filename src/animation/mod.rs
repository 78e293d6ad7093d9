//! Count-up interpolation and staged choreography, driven by host frames.

mod counter;
mod scheduler;
mod stagger;

pub use counter::{CounterAnimation, CounterPhase, CounterPreset, CounterSpec, parse_target};
pub use scheduler::{AnimationScheduler, FrameUpdate};
pub use stagger::{StaggerOffsets, StaggerSchedule, StaggerStage};

/// Circumference of the progress ring (`r = 54`).
pub const PROGRESS_RING_CIRCUMFERENCE: f64 = 2.0 * std::f64::consts::PI * 54.0;

/// `stroke-dashoffset` that reveals `percentage` of the ring.
#[must_use]
pub fn ring_dash_offset(percentage: f64) -> f64 {
    PROGRESS_RING_CIRCUMFERENCE - (percentage / 100.0) * PROGRESS_RING_CIRCUMFERENCE
}
