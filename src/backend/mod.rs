// SPDX-License-Identifier: GPL-3.0-only

pub mod nested;

use std::sync::Arc;

use anyhow::Result;
use bitflags::bitflags;

use crate::{config::BridgeConfig, utils::geometry::WindowGeometry};

bitflags! {
    /// Modifier state carried on every key event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Modifiers: u8 {
        const SHIFT = 0b0001;
        const CTRL = 0b0010;
        const ALT = 0b0100;
        const LOGO = 0b1000;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
    Side,
    Extra,
    Other(u8),
}

/// Wake signals other threads post into the host event queue.
///
/// Title and cursor payloads travel through the coalescing slots in
/// [`crate::channel::UpdateChannel`]; the boolean requests are small enough
/// to ride the signal itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserSignal {
    Title,
    Visible(bool),
    RelativePointer(bool),
    Cursor,
    Shutdown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowEvent {
    CloseRequested,
    Moved,
    Shown,
    Resized,
    FocusLost,
    FocusGained,
    Exposed,
}

/// A single event read from the host windowing system.
///
/// Touch coordinates arrive already normalized by the host; absolute pointer
/// coordinates arrive in logical points and are normalized by the bridge
/// against the current output geometry.
#[derive(Debug, Clone, PartialEq)]
pub enum HostEvent {
    PointerMotion { x: f64, y: f64, dx: f64, dy: f64 },
    PointerButton { button: MouseButton, pressed: bool },
    PointerWheel { dx: f64, dy: f64 },
    TouchMotion { finger: u64, u: f64, v: f64 },
    TouchDown { finger: u64, u: f64, v: f64 },
    TouchUp { finger: u64 },
    Key { scancode: u32, pressed: bool, repeat: bool, modifiers: Modifiers },
    Window(WindowEvent),
    ClipboardUpdated,
    User(UserSignal),
}

/// Shared ARGB8888 pixel buffer for icons and cursor images.
///
/// The producer and the bridge thread hold references concurrently; the
/// buffer lives as long as the longest holder.
#[derive(Debug, Clone)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub data: Arc<Vec<u32>>,
}

impl ImageBuffer {
    pub fn new(width: u32, height: u32, data: Vec<u32>) -> ImageBuffer {
        ImageBuffer {
            width,
            height,
            data: Arc::new(data),
        }
    }
}

impl PartialEq for ImageBuffer {
    // Identity of the shared buffer, not pixel contents.
    fn eq(&self, other: &ImageBuffer) -> bool {
        self.width == other.width
            && self.height == other.height
            && Arc::ptr_eq(&self.data, &other.data)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CursorImage {
    pub image: ImageBuffer,
    pub xhot: u32,
    pub yhot: u32,
}

/// Cloneable, thread-safe wake handle into the host event queue.
///
/// Posting must make a concurrent [`HostBackend::wait_event`] return
/// promptly; it never blocks the caller.
pub trait HostSignal: Clone + Send + Sync + 'static {
    fn post(&self, signal: UserSignal);
}

/// The host windowing system.
///
/// Apart from [`HostBackend::signal`], every method is only ever called from
/// the bridge's event loop thread, which owns the backend exclusively.
pub trait HostBackend: Send + 'static {
    type Signal: HostSignal;

    /// Wake handle usable from any thread.
    fn signal(&self) -> Self::Signal;

    /// Creates the host window(s). Failure here is fatal for the bridge.
    fn initialize(&mut self, config: &BridgeConfig) -> Result<()>;

    /// Blocks until the next host event. `None` means the host event source
    /// has shut down.
    fn wait_event(&mut self) -> Option<HostEvent>;

    fn set_title(&mut self, title: &str);
    /// `None` restores the default icon. Surface construction may fail;
    /// the caller keeps the previous icon in that case.
    fn set_icon(&mut self, icon: Option<&ImageBuffer>) -> Result<()>;
    fn set_visible(&mut self, visible: bool);
    fn set_fullscreen(&mut self, fullscreen: bool);
    fn set_keyboard_grab(&mut self, grab: bool);
    fn set_relative_pointer(&mut self, relative: bool);
    fn set_cursor(&mut self, cursor: &CursorImage) -> Result<()>;

    /// Current geometry and refresh rate of every host window.
    fn window_geometries(&self) -> Vec<WindowGeometry>;

    fn clipboard_text(&mut self) -> Option<String>;
    fn primary_selection_text(&mut self) -> Option<String>;
}
