// SPDX-License-Identifier: GPL-3.0-only

pub mod actions;
pub mod codes;

use tracing::trace;

use crate::{
    backend::{nested::BridgeLoop, HostBackend, Modifiers, MouseButton},
    input::actions::ShortcutAction,
    server::{CompositorControl, InputSink},
};

impl<H, S, C> BridgeLoop<H, S, C>
where
    H: HostBackend,
    S: InputSink,
    C: CompositorControl,
{
    /// Pointer motion routing: relative deltas while relative mode is
    /// active (dropped when focus is elsewhere so stale input never leaks
    /// to the guest), absolute coordinates as normalized touch otherwise.
    pub(crate) fn on_pointer_motion(&mut self, x: f64, y: f64, dx: f64, dy: f64, time: u32) {
        if self.ctx.relative_pointer {
            if self.ctx.focused {
                self.input.lock().pointer_motion(dx, dy, time);
            }
        } else {
            let (u, v) = self.ctx.geometry.to_normalized(x, y);
            self.input.lock().touch_motion(u, v, 0, time);
        }
    }

    pub(crate) fn on_pointer_button(&mut self, button: MouseButton, pressed: bool, time: u32) {
        let Some(code) = codes::button_to_code(button) else {
            trace!(?button, "unmapped button, dropping");
            return;
        };
        self.input.lock().pointer_button(code, pressed, time);
    }

    /// The host's wheel sign convention is inverted relative to the input
    /// server's axis convention.
    pub(crate) fn on_pointer_wheel(&mut self, dx: f64, dy: f64, time: u32) {
        self.input.lock().pointer_wheel(-dx, -dy, time);
    }

    pub(crate) fn on_touch_motion(&mut self, finger: u64, u: f64, v: f64, time: u32) {
        self.input.lock().touch_motion(u, v, finger, time);
    }

    pub(crate) fn on_touch_down(&mut self, finger: u64, u: f64, v: f64, time: u32) {
        self.input.lock().touch_down(u, v, finger, time);
    }

    pub(crate) fn on_touch_up(&mut self, finger: u64, time: u32) {
        self.input.lock().touch_up(finger, time);
    }

    /// The shortcut interceptor.
    ///
    /// A shortcut chord's key-down is swallowed so the guest never sees a
    /// stray press; the side effect fires on key-up, which keeps it from
    /// refiring under key-repeat. Whether the key-up counts as a shortcut is
    /// decided by the modifier state at release time, not at press time.
    pub(crate) fn on_key(
        &mut self,
        scancode: u32,
        pressed: bool,
        repeat: bool,
        modifiers: Modifiers,
        time: u32,
    ) {
        let keycode = codes::scancode_to_keycode(scancode);

        if modifiers.contains(Modifiers::LOGO) {
            if let Some(action) = ShortcutAction::from_keycode(keycode) {
                if !pressed {
                    self.handle_shortcut(action);
                }
                return;
            }
        }

        // Guests run their own key repeat.
        if repeat {
            return;
        }

        if keycode == codes::KEY_RESERVED {
            trace!(scancode, "unmapped scancode, dropping");
            return;
        }

        self.input.lock().key(keycode, pressed, time);
    }
}
