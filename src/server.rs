// SPDX-License-Identifier: GPL-3.0-only

//! Seams towards the rest of the compositor.
//!
//! The bridge is the only code path feeding host input into the input
//! server, but it never owns the server: it holds it behind
//! `Arc<Mutex<dyn InputSink>>` and takes the lock for exactly one event's
//! worth of calls, mirroring the input server's scoped lock discipline.

/// Which selection slot a piece of text belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionTarget {
    Clipboard,
    Primary,
}

/// The compositor input server, as far as the bridge is concerned.
///
/// Timestamps are the bridge's fake per-event counter; the input server only
/// uses them for relative ordering.
pub trait InputSink: Send {
    fn pointer_motion(&mut self, dx: f64, dy: f64, time: u32);
    fn pointer_button(&mut self, button: u32, pressed: bool, time: u32);
    fn pointer_wheel(&mut self, dx: f64, dy: f64, time: u32);
    fn touch_motion(&mut self, u: f64, v: f64, finger: u64, time: u32);
    fn touch_down(&mut self, u: f64, v: f64, finger: u64, time: u32);
    fn touch_up(&mut self, finger: u64, time: u32);
    fn key(&mut self, keycode: u32, pressed: bool, time: u32);
    fn set_selection(&mut self, text: String, target: SelectionTarget);
}

/// Upscale filter selected via the local shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UpscaleFilter {
    Nearest,
    #[default]
    Linear,
    Fsr,
    Nis,
}

/// Renderer/compositor-core surface the shortcut side effects and window
/// lifecycle notifications land on.
///
/// All methods must be callable from the bridge thread without blocking on
/// the render path.
pub trait CompositorControl: Send + Sync {
    fn upscale_filter(&self) -> UpscaleFilter;
    fn set_upscale_filter(&self, filter: UpscaleFilter);
    fn upscale_sharpness(&self) -> i32;
    fn set_upscale_sharpness(&self, sharpness: i32);
    fn take_screenshot(&self);
    fn request_repaint(&self);
    /// Publishes the minimum refresh rate across all host windows.
    fn set_output_refresh(&self, refresh: i32);
    /// Switches the nested refresh target on focus changes.
    fn set_refresh_target(&self, refresh: i32);
    /// The host window was asked to close; the compositor owns process
    /// termination.
    fn request_shutdown(&self);
    /// Whether a first frame has been presented, for
    /// `BridgeConfig::show_after_first_frame`.
    fn first_frame_presented(&self) -> bool {
        true
    }
}
