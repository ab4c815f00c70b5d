// SPDX-License-Identifier: GPL-3.0-only

//! Host-window input bridge for the nested compositor mode.
//!
//! When the compositor runs inside another windowing environment instead of
//! owning the display, this crate owns the host window on a dedicated
//! thread: it translates the host's native event stream into compositor
//! input server calls and applies window side effects (title, icon,
//! visibility, pointer grab, cursor image) requested from other compositor
//! threads through a coalescing, non-blocking update channel.

pub mod backend;
pub mod channel;
pub mod clipboard;
pub mod config;
pub mod input;
pub mod logger;
pub mod server;
pub mod state;
pub mod utils;

pub use backend::{
    nested::{NestedBridge, StartError},
    CursorImage, HostBackend, HostEvent, HostSignal, ImageBuffer, Modifiers, MouseButton,
    UserSignal, WindowEvent,
};
pub use channel::BridgeHandle;
pub use config::BridgeConfig;
pub use server::{CompositorControl, InputSink, SelectionTarget, UpscaleFilter};
