// SPDX-License-Identifier: GPL-3.0-only

use crate::{config::BridgeConfig, utils::geometry::OutputGeometry};

/// Everything the event loop mutates, owned exclusively by its thread.
///
/// Producer threads never see this; they talk to the loop through
/// [`crate::channel::BridgeHandle`] only.
pub struct BridgeContext {
    pub geometry: OutputGeometry,
    pub focused: bool,
    pub shown: bool,
    /// Keyboard grab, toggled by the local shortcut.
    pub grabbed: bool,
    pub fullscreen: bool,
    /// Relative-pointer ("mouse grab") mode, driven by external requests.
    pub relative_pointer: bool,
    /// Refresh target to restore when focus comes back.
    pub restore_refresh: i32,
    timestamp: u32,
}

impl BridgeContext {
    pub fn new(config: &BridgeConfig) -> BridgeContext {
        BridgeContext {
            geometry: OutputGeometry::default(),
            focused: true,
            shown: false,
            grabbed: config.keyboard_grab,
            fullscreen: config.fullscreen,
            relative_pointer: false,
            restore_refresh: config.refresh,
            timestamp: 0,
        }
    }

    /// Fake timestamp, bumped once per host event. The input server only
    /// needs relative ordering.
    pub fn next_timestamp(&mut self) -> u32 {
        self.timestamp = self.timestamp.wrapping_add(1);
        self.timestamp
    }
}
