// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracker configuration: behavior flags and debug outline styling.

use peniko::Color;

bitflags::bitflags! {
    /// Flags controlling optional tracker behavior.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct HoverFlags: u8 {
        /// Suspend hover while a sibling of the tracker's root is stacked above it.
        ///
        /// For example, a popup added next to a layer pauses hovers on that
        /// layer until it is closed.
        const RESPECT_Z_ORDER = 0b0000_0001;
        /// Draw the outline of every evaluated hit rect to the debug canvas.
        const DEBUG_DRAW      = 0b0000_0010;
    }
}

impl Default for HoverFlags {
    fn default() -> Self {
        Self::empty()
    }
}

/// Default border color for debug outlines (opaque cyan).
pub const DEFAULT_DEBUG_COLOR: Color = Color::new([0.0, 1.0, 1.0, 1.0]);

/// Default border width for debug outlines.
pub const DEFAULT_DEBUG_BORDER_WIDTH: f64 = 0.4;

/// Configuration for a [`HoverTracker`](crate::HoverTracker).
#[derive(Clone, Copy, Debug)]
pub struct HoverConfig {
    /// Behavior flags. Empty by default.
    pub flags: HoverFlags,
    /// Border color of debug outlines.
    pub debug_color: Color,
    /// Border width of debug outlines.
    pub debug_border_width: f64,
}

impl Default for HoverConfig {
    fn default() -> Self {
        Self {
            flags: HoverFlags::default(),
            debug_color: DEFAULT_DEBUG_COLOR,
            debug_border_width: DEFAULT_DEBUG_BORDER_WIDTH,
        }
    }
}

impl HoverConfig {
    /// Returns `true` if z-order blocking is enabled.
    pub fn respects_z_order(&self) -> bool {
        self.flags.contains(HoverFlags::RESPECT_Z_ORDER)
    }

    /// Returns `true` if debug outlines are drawn.
    pub fn debug_draw(&self) -> bool {
        self.flags.contains(HoverFlags::DEBUG_DRAW)
    }
}
