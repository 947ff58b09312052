//! Framework-free policy behind the viewport effects: which section is
//! active, how far a layer drifts, where the trail segments sit and when an
//! element is revealed. The Leptos controller only measures the DOM and
//! writes these results back.

pub mod config;
pub mod cursor;
pub mod parallax;
pub mod reveal;
pub mod scroll;

pub use config::{ConfigError, InteractionConfig, PointerTargets};
pub use cursor::{CursorMode, CursorPoint, CursorState, TargetInfo, TargetKind, TrailScheduler};
pub use parallax::{ParallaxEngine, ParallaxLayer};
pub use reveal::{RevealKind, RevealLatch};
pub use scroll::{ScrollSnapshot, ScrollTracker, SectionGeometry};
