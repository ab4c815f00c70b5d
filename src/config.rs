// SPDX-License-Identifier: GPL-3.0-only

use serde::{Deserialize, Serialize};

/// Title applied whenever no client title has been requested.
pub const DEFAULT_TITLE: &str = "nestbridge";

/// Appended to the applied title while the keyboard grab is held.
pub const GRABBED_SUFFIX: &str = " (grabbed)";

/// Startup configuration for the nested bridge.
///
/// These map to command line switches of the embedding compositor; the
/// bridge only consumes them. Window creation itself happens in the host
/// backend, which receives this struct from `initialize`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    /// Fallback window title.
    pub default_title: String,
    /// Create the host window without decorations.
    pub borderless: bool,
    /// Start in (desktop-)fullscreen.
    pub fullscreen: bool,
    /// One host window per host display instead of a single window.
    pub multi_window: bool,
    /// Start with the keyboard grabbed.
    pub keyboard_grab: bool,
    /// Put the pointer into relative mode at startup and ignore external
    /// grab/cursor requests from then on.
    pub force_relative_pointer: bool,
    /// Show the window as soon as a first frame has been presented, even
    /// without an explicit visibility request.
    pub show_after_first_frame: bool,
    /// Refresh target while the host window has focus.
    pub refresh: i32,
    /// Reduced refresh target while the host window is unfocused.
    pub unfocused_refresh: i32,
}

impl Default for BridgeConfig {
    fn default() -> BridgeConfig {
        BridgeConfig {
            default_title: DEFAULT_TITLE.to_string(),
            borderless: false,
            fullscreen: false,
            multi_window: false,
            keyboard_grab: false,
            force_relative_pointer: false,
            show_after_first_frame: false,
            refresh: 60,
            unfocused_refresh: 30,
        }
    }
}
