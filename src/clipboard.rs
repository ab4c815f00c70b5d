// SPDX-License-Identifier: GPL-3.0-only

//! Host to compositor selection mirroring.
//!
//! One-directional: the reverse path (compositor selections out to the
//! host) is owned by the compositor's selection handlers, not the bridge.

use crate::{
    backend::{nested::BridgeLoop, HostBackend},
    server::{CompositorControl, InputSink, SelectionTarget},
};

impl<H, S, C> BridgeLoop<H, S, C>
where
    H: HostBackend,
    S: InputSink,
    C: CompositorControl,
{
    /// Mirrors both host selections into the input server. An unreadable
    /// selection counts as empty, and empty text is pushed regardless so a
    /// cleared host selection clears the compositor side too.
    pub(crate) fn sync_selections(&mut self) {
        let clipboard = self.host.clipboard_text().unwrap_or_default();
        let primary = self.host.primary_selection_text().unwrap_or_default();

        let mut input = self.input.lock();
        input.set_selection(clipboard, SelectionTarget::Clipboard);
        input.set_selection(primary, SelectionTarget::Primary);
    }
}
