//! Shared gesture constants for touch/pointer handling.
//!
//! Values are in logical pixels (dp); [`DrawerConfig::with_density`] scales
//! them for the device.
//!
//! [`DrawerConfig::with_density`]: crate::drawer::DrawerConfig::with_density

use gallery_ui_graphics::Dp;

/// Touch slop in logical pixels.
///
/// Pointer motion shorter than this from the press position is jitter, not a
/// drag. Matches Android's ViewConfiguration.TOUCH_SLOP on a baseline density.
pub const TOUCH_SLOP: f32 = 8.0;

/// Maximum fling velocity in logical pixels per second.
///
/// Matches Android's default maximum fling velocity (ViewConfiguration) on a
/// baseline density.
pub const MAX_FLING_VELOCITY: f32 = 8_000.0;

/// Fraction of the release velocity handed to the fling.
///
/// Drawer flings travel with half the finger's release velocity.
pub const FLING_VELOCITY_DAMPING: f32 = 0.5;

/// Height of the drawer still on screen when it rests at its lowest position.
pub const DEFAULT_BOTTOM_OFFSET: Dp = Dp(200.0);
