//! # Atrium Panel
//!
//! The role-gated navigation panel core: capability resolution, fail-closed
//! visibility, guarded tab transitions, and guarded sign-out behind one
//! consumer surface.
//!
//! ## Components
//!
//! - `PanelCore` - Central orchestrator consumed by the presentation layer

pub mod panel_core;

pub use panel_core::{PanelConfig, PanelCore};
