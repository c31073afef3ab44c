// SPDX-License-Identifier: MPL-2.0
//! Viewer control state.
//!
//! Pure value types holding the zoom, orbit and clip playback state of one
//! viewer instance, kept apart from rendering so they can be tested alone.

pub mod orbit;
pub mod playback;
pub mod zoom;

pub use orbit::{OrbitDrag, OrbitPose};
pub use playback::PlaybackState;
pub use zoom::{ZoomFactor, ZoomState};
