// SPDX-License-Identifier: GPL-3.0-only

//! The input bridge event loop.
//!
//! One dedicated thread owns the host window(s): it blocks on the host
//! event stream, translates input events for the compositor input server
//! and drains the cross-thread update channel whenever a wake signal
//! arrives. Producer threads only ever touch the [`BridgeHandle`].

use std::{
    ops::ControlFlow,
    sync::{mpsc, Arc},
    thread::{self, JoinHandle},
};

use anyhow::Context;
use parking_lot::Mutex;
use tracing::{debug, info, warn};

use crate::{
    backend::{HostBackend, HostEvent, UserSignal, WindowEvent},
    channel::{BridgeHandle, UpdateChannel},
    config::BridgeConfig,
    server::{CompositorControl, InputSink},
    state::BridgeContext,
    utils::geometry::{self, OutputGeometry},
};

#[derive(Debug, thiserror::Error)]
pub enum StartError {
    #[error("failed to spawn the input bridge thread")]
    Spawn(#[source] std::io::Error),
    #[error("host window initialization failed")]
    HostInit(#[source] anyhow::Error),
    #[error("input bridge thread exited before reporting readiness")]
    ThreadExited,
}

/// A running bridge. Dropping it (or calling [`NestedBridge::stop`]) posts a
/// shutdown signal and joins the event loop thread.
pub struct NestedBridge<H: HostBackend> {
    handle: BridgeHandle<H::Signal>,
    thread: Option<JoinHandle<()>>,
}

impl<H: HostBackend> NestedBridge<H> {
    /// Spawns the event loop thread and blocks until the host windows are
    /// up. Window creation failure never leaves a half-started bridge: the
    /// thread is gone by the time the error is returned.
    pub fn start<S, C>(
        host: H,
        input: Arc<Mutex<S>>,
        control: Arc<C>,
        config: BridgeConfig,
    ) -> Result<NestedBridge<H>, StartError>
    where
        S: InputSink + 'static,
        C: CompositorControl + 'static,
    {
        let channel = Arc::new(UpdateChannel::default());
        let handle = BridgeHandle::new(
            channel.clone(),
            host.signal(),
            config.force_relative_pointer,
        );

        let (ready_tx, ready_rx) = mpsc::channel();
        let thread = thread::Builder::new()
            .name("nestbridge-input".to_string())
            .spawn(move || {
                let mut bridge = BridgeLoop::new(host, input, control, channel, config);
                match bridge
                    .host
                    .initialize(&bridge.config)
                    .context("creating host windows")
                {
                    Ok(()) => {
                        let _ = ready_tx.send(Ok(()));
                    }
                    Err(err) => {
                        let _ = ready_tx.send(Err(err));
                        return;
                    }
                }
                bridge.run();
            })
            .map_err(StartError::Spawn)?;

        match ready_rx.recv() {
            Ok(Ok(())) => Ok(NestedBridge {
                handle,
                thread: Some(thread),
            }),
            Ok(Err(err)) => {
                let _ = thread.join();
                Err(StartError::HostInit(err))
            }
            Err(_) => {
                let _ = thread.join();
                Err(StartError::ThreadExited)
            }
        }
    }

    pub fn handle(&self) -> BridgeHandle<H::Signal> {
        self.handle.clone()
    }

    pub fn stop(mut self) {
        self.shutdown_and_join();
    }

    fn shutdown_and_join(&mut self) {
        if let Some(thread) = self.thread.take() {
            self.handle.shutdown();
            let _ = thread.join();
        }
    }
}

impl<H: HostBackend> Drop for NestedBridge<H> {
    fn drop(&mut self) {
        self.shutdown_and_join();
    }
}

/// State of the running loop, confined to its thread.
pub(crate) struct BridgeLoop<H, S, C>
where
    H: HostBackend,
    S: InputSink,
    C: CompositorControl,
{
    pub(crate) host: H,
    pub(crate) input: Arc<Mutex<S>>,
    pub(crate) control: Arc<C>,
    pub(crate) channel: Arc<UpdateChannel>,
    pub(crate) config: BridgeConfig,
    pub(crate) ctx: BridgeContext,
}

impl<H, S, C> BridgeLoop<H, S, C>
where
    H: HostBackend,
    S: InputSink,
    C: CompositorControl,
{
    pub(crate) fn new(
        host: H,
        input: Arc<Mutex<S>>,
        control: Arc<C>,
        channel: Arc<UpdateChannel>,
        config: BridgeConfig,
    ) -> BridgeLoop<H, S, C> {
        let ctx = BridgeContext::new(&config);
        BridgeLoop {
            host,
            input,
            control,
            channel,
            config,
            ctx,
        }
    }

    pub(crate) fn run(&mut self) {
        self.refresh_outputs();

        if self.config.force_relative_pointer {
            self.host.set_relative_pointer(true);
            self.ctx.relative_pointer = true;
        }

        info!("Input bridge running");
        while let Some(event) = self.host.wait_event() {
            let time = self.ctx.next_timestamp();
            match event {
                HostEvent::PointerMotion { x, y, dx, dy } => {
                    self.on_pointer_motion(x, y, dx, dy, time)
                }
                HostEvent::PointerButton { button, pressed } => {
                    self.on_pointer_button(button, pressed, time)
                }
                HostEvent::PointerWheel { dx, dy } => self.on_pointer_wheel(dx, dy, time),
                HostEvent::TouchMotion { finger, u, v } => self.on_touch_motion(finger, u, v, time),
                HostEvent::TouchDown { finger, u, v } => self.on_touch_down(finger, u, v, time),
                HostEvent::TouchUp { finger } => self.on_touch_up(finger, time),
                HostEvent::Key {
                    scancode,
                    pressed,
                    repeat,
                    modifiers,
                } => self.on_key(scancode, pressed, repeat, modifiers, time),
                HostEvent::Window(event) => self.on_window_event(event),
                HostEvent::ClipboardUpdated => self.sync_selections(),
                HostEvent::User(signal) => {
                    if self.on_user_signal(signal).is_break() {
                        break;
                    }
                }
            }
        }
        info!("Host event stream ended, stopping input bridge");
    }

    fn on_window_event(&mut self, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                info!("Host window close requested");
                self.control.request_shutdown();
            }
            WindowEvent::Moved | WindowEvent::Shown | WindowEvent::Resized => {
                self.refresh_outputs();
            }
            WindowEvent::FocusLost => {
                self.control
                    .set_refresh_target(self.config.unfocused_refresh);
                self.ctx.focused = false;
            }
            WindowEvent::FocusGained => {
                self.control.set_refresh_target(self.ctx.restore_refresh);
                self.ctx.focused = true;
            }
            WindowEvent::Exposed => self.control.request_repaint(),
        }
    }

    fn on_user_signal(&mut self, signal: UserSignal) -> ControlFlow<()> {
        match signal {
            UserSignal::Title => self.apply_pending_title(),
            UserSignal::Visible(visible) => self.apply_visibility(visible),
            UserSignal::RelativePointer(relative) => self.apply_relative_pointer(relative),
            UserSignal::Cursor => self.apply_pending_cursor(),
            UserSignal::Shutdown => return ControlFlow::Break(()),
        }
        ControlFlow::Continue(())
    }

    /// Recomputes the bounding geometry over all host windows and publishes
    /// the minimum refresh rate across them.
    pub(crate) fn refresh_outputs(&mut self) {
        let windows = self.host.window_geometries();
        self.ctx.geometry = OutputGeometry::bounding(&windows);
        if let Some(refresh) = geometry::min_refresh(&windows) {
            self.control.set_output_refresh(refresh);
        }
        debug!(geometry = ?self.ctx.geometry, "recomputed output geometry");
    }

    fn apply_pending_title(&mut self) {
        if let Some(title) = self.channel.title.take() {
            let mut applied = title.unwrap_or_else(|| self.config.default_title.clone());
            if self.ctx.grabbed {
                applied.push_str(crate::config::GRABBED_SUFFIX);
            }
            self.host.set_title(&applied);
        }
        if let Some(icon) = self.channel.icon.take() {
            if let Err(err) = self.host.set_icon(icon.as_ref()) {
                warn!(?err, "Failed to apply window icon, keeping the previous one");
            }
        }
    }

    fn apply_visibility(&mut self, visible: bool) {
        let mut should_show = visible;
        if self.config.show_after_first_frame {
            should_show |= self.control.first_frame_presented();
        }
        if self.ctx.shown != should_show {
            self.ctx.shown = should_show;
            self.host.set_visible(should_show);
        }
    }

    fn apply_relative_pointer(&mut self, relative: bool) {
        if relative != self.ctx.relative_pointer {
            self.host.set_relative_pointer(relative);
            self.ctx.relative_pointer = relative;
        }
    }

    fn apply_pending_cursor(&mut self) {
        if let Some(Some(cursor)) = self.channel.cursor.take() {
            if let Err(err) = self.host.set_cursor(&cursor) {
                warn!(?err, "Failed to apply cursor image, keeping the previous one");
            }
        }
    }
}
