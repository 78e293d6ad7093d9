//! site-motion: behavior layer for the marketing site.
//!
//! Visibility-triggered reveals, count-up numbers, staggered stats and
//! lazily created charts, driven by a host-agnostic controller. The browser
//! host lives behind the `web-adapter` feature; everything else runs
//! headless with injected timestamps.

pub mod animation;
pub mod api;
pub mod charts;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;
pub mod ui;
pub mod visibility;

#[cfg(feature = "web-adapter")]
pub mod platform_web;

pub use api::{PageConfig, PageController};
pub use error::{MotionError, MotionResult};
