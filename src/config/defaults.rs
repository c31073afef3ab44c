// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Zoom**: Viewer zoom factor bounds and step
//! - **Motion**: Auto-rotation and animation clip playback
//! - **Notifications**: Toast lifetime and queue size
//! - **Assets**: In-memory asset cache capacity

// ==========================================================================
// Zoom Defaults
// ==========================================================================

/// Zoom factor a viewer starts with and returns to on reset (1.0 = native size).
pub const DEFAULT_ZOOM_FACTOR: f32 = 1.0;

/// Minimum allowed zoom factor.
pub const MIN_ZOOM_FACTOR: f32 = 0.5;

/// Maximum allowed zoom factor.
pub const MAX_ZOOM_FACTOR: f32 = 3.0;

/// Zoom factor added or removed by one zoom button press.
pub const ZOOM_STEP: f32 = 0.2;

// ==========================================================================
// Motion Defaults
// ==========================================================================

/// Auto-rotate yaw speed in radians per second.
pub const DEFAULT_AUTO_ROTATE_SPEED: f32 = 0.5;

/// Minimum auto-rotate speed (radians per second).
pub const MIN_AUTO_ROTATE_SPEED: f32 = 0.05;

/// Maximum auto-rotate speed (radians per second).
pub const MAX_AUTO_ROTATE_SPEED: f32 = 4.0;

/// Largest frame delta fed into animation state, in seconds.
///
/// A window that was hidden or suspended resumes with a huge delta; it is
/// capped so the model does not jump.
pub const MAX_FRAME_DELTA_SECS: f32 = 0.1;

/// Radians of orbit per pixel dragged inside a viewport.
pub const ORBIT_DRAG_SENSITIVITY: f32 = 0.01;

/// Pitch limit for the orbit camera (radians, symmetric).
pub const MAX_ORBIT_PITCH: f32 = std::f32::consts::FRAC_PI_3;

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Seconds a toast stays on screen before dismissing itself.
pub const DEFAULT_TOAST_DURATION_SECS: u32 = 4;

/// Minimum toast duration (seconds).
pub const MIN_TOAST_DURATION_SECS: u32 = 1;

/// Maximum toast duration (seconds).
pub const MAX_TOAST_DURATION_SECS: u32 = 30;

// ==========================================================================
// Asset Defaults
// ==========================================================================

/// Number of decoded assets kept in memory and shared between viewers.
pub const ASSET_CACHE_CAPACITY: usize = 16;

/// Timeout for downloading a remote asset, in seconds.
pub const ASSET_DOWNLOAD_TIMEOUT_SECS: u64 = 30;
