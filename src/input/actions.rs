// SPDX-License-Identifier: GPL-3.0-only

use tracing::debug;

use crate::{
    backend::{nested::BridgeLoop, HostBackend, HostSignal, UserSignal},
    input::codes,
    server::{CompositorControl, InputSink, UpscaleFilter},
};

pub const MAX_SHARPNESS: i32 = 20;

/// Local shortcuts, triggered by logo + key and never forwarded to the
/// guest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    ToggleFullscreen,
    FilterNearest,
    FilterLinear,
    ToggleFsr,
    ToggleNis,
    SharpnessUp,
    SharpnessDown,
    Screenshot,
    ToggleGrab,
}

impl ShortcutAction {
    pub fn from_keycode(keycode: u32) -> Option<ShortcutAction> {
        match keycode {
            codes::KEY_F => Some(ShortcutAction::ToggleFullscreen),
            codes::KEY_N => Some(ShortcutAction::FilterNearest),
            codes::KEY_B => Some(ShortcutAction::FilterLinear),
            codes::KEY_U => Some(ShortcutAction::ToggleFsr),
            codes::KEY_Y => Some(ShortcutAction::ToggleNis),
            codes::KEY_I => Some(ShortcutAction::SharpnessUp),
            codes::KEY_O => Some(ShortcutAction::SharpnessDown),
            codes::KEY_S => Some(ShortcutAction::Screenshot),
            codes::KEY_G => Some(ShortcutAction::ToggleGrab),
            _ => None,
        }
    }
}

impl<H, S, C> BridgeLoop<H, S, C>
where
    H: HostBackend,
    S: InputSink,
    C: CompositorControl,
{
    pub(crate) fn handle_shortcut(&mut self, action: ShortcutAction) {
        debug!(?action, "shortcut");
        match action {
            ShortcutAction::ToggleFullscreen => {
                self.ctx.fullscreen = !self.ctx.fullscreen;
                self.host.set_fullscreen(self.ctx.fullscreen);
            }
            ShortcutAction::FilterNearest => {
                self.control.set_upscale_filter(UpscaleFilter::Nearest);
            }
            ShortcutAction::FilterLinear => {
                self.control.set_upscale_filter(UpscaleFilter::Linear);
            }
            ShortcutAction::ToggleFsr => {
                let filter = if self.control.upscale_filter() == UpscaleFilter::Fsr {
                    UpscaleFilter::Linear
                } else {
                    UpscaleFilter::Fsr
                };
                self.control.set_upscale_filter(filter);
            }
            ShortcutAction::ToggleNis => {
                let filter = if self.control.upscale_filter() == UpscaleFilter::Nis {
                    UpscaleFilter::Linear
                } else {
                    UpscaleFilter::Nis
                };
                self.control.set_upscale_filter(filter);
            }
            ShortcutAction::SharpnessUp => {
                let sharpness = (self.control.upscale_sharpness() + 1).min(MAX_SHARPNESS);
                self.control.set_upscale_sharpness(sharpness);
            }
            ShortcutAction::SharpnessDown => {
                let sharpness = (self.control.upscale_sharpness() - 1).max(0);
                self.control.set_upscale_sharpness(sharpness);
            }
            ShortcutAction::Screenshot => self.control.take_screenshot(),
            ShortcutAction::ToggleGrab => {
                self.ctx.grabbed = !self.ctx.grabbed;
                self.host.set_keyboard_grab(self.ctx.grabbed);
                // Re-request title application so the grab suffix updates.
                self.channel.title.mark_dirty();
                self.host.signal().post(UserSignal::Title);
            }
        }
    }
}
