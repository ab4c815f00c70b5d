// SPDX-License-Identifier: GPL-3.0-only

//! Cross-thread update channel.
//!
//! Producers stash a value into a per-resource slot and post a wake signal
//! into the host event queue; the event loop is the only consumer. Slots
//! coalesce: a second `set` before the loop drains overwrites the first, so
//! there is never a backlog and producers never wait on the loop.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use parking_lot::Mutex;

use crate::backend::{CursorImage, HostSignal, ImageBuffer, UserSignal};

struct Slot<T> {
    value: T,
    dirty: bool,
}

/// At-most-one in-flight pending value.
///
/// The last stored value survives a drain, so `mark_dirty` can re-request
/// application of the current value and `set_if_changed` can short-circuit
/// redundant updates.
pub struct Pending<T> {
    inner: Mutex<Slot<T>>,
}

impl<T: Clone> Pending<T> {
    pub fn new(value: T) -> Pending<T> {
        Pending {
            inner: Mutex::new(Slot {
                value,
                dirty: false,
            }),
        }
    }

    /// Stores unconditionally, last write wins.
    pub fn set(&self, value: T) {
        let mut slot = self.inner.lock();
        slot.value = value;
        slot.dirty = true;
    }

    /// Re-requests application of the currently stored value.
    pub fn mark_dirty(&self) {
        self.inner.lock().dirty = true;
    }

    /// Drains the slot. The clone happens under the lock, the (possibly
    /// expensive) application is the caller's business and runs outside it.
    pub fn take(&self) -> Option<T> {
        let mut slot = self.inner.lock();
        if !slot.dirty {
            return None;
        }
        slot.dirty = false;
        Some(slot.value.clone())
    }
}

impl<T: Clone + PartialEq> Pending<T> {
    /// Stores only when the value differs from the stored one; returns
    /// whether the slot became dirty. Not needed for correctness, only to
    /// avoid reapplying identical titles/icons.
    pub fn set_if_changed(&self, value: T) -> bool {
        let mut slot = self.inner.lock();
        if slot.value == value {
            return false;
        }
        slot.value = value;
        slot.dirty = true;
        true
    }
}

/// One slot per managed resource, each behind its own lock: a producer
/// updating the cursor never contends with one updating the title.
pub struct UpdateChannel {
    pub title: Pending<Option<String>>,
    pub icon: Pending<Option<ImageBuffer>>,
    pub cursor: Pending<Option<CursorImage>>,
    /// Producer-side dedup for relative-pointer requests.
    pub(crate) grab_requested: AtomicBool,
}

impl Default for UpdateChannel {
    fn default() -> UpdateChannel {
        UpdateChannel {
            title: Pending::new(None),
            icon: Pending::new(None),
            cursor: Pending::new(None),
            grab_requested: AtomicBool::new(false),
        }
    }
}

/// Producer-facing API of the bridge. Cloneable and callable from any
/// thread; every request is non-blocking.
pub struct BridgeHandle<S: HostSignal> {
    channel: Arc<UpdateChannel>,
    signal: S,
    force_relative_pointer: bool,
}

impl<S: HostSignal> Clone for BridgeHandle<S> {
    fn clone(&self) -> Self {
        BridgeHandle {
            channel: self.channel.clone(),
            signal: self.signal.clone(),
            force_relative_pointer: self.force_relative_pointer,
        }
    }
}

impl<S: HostSignal> BridgeHandle<S> {
    pub(crate) fn new(
        channel: Arc<UpdateChannel>,
        signal: S,
        force_relative_pointer: bool,
    ) -> BridgeHandle<S> {
        BridgeHandle {
            channel,
            signal,
            force_relative_pointer,
        }
    }

    /// Requests a new window title and icon. `None` falls back to the
    /// configured default title / host default icon.
    pub fn request_title(&self, title: Option<String>, icon: Option<ImageBuffer>) {
        let title_changed = self.channel.title.set_if_changed(title);
        let icon_changed = self.channel.icon.set_if_changed(icon);
        if title_changed || icon_changed {
            self.signal.post(UserSignal::Title);
        }
    }

    pub fn request_visible(&self, visible: bool) {
        self.signal.post(UserSignal::Visible(visible));
    }

    /// Requests relative-pointer ("mouse grab") mode. Ignored when the
    /// bridge was configured to force relative mode.
    pub fn request_grab(&self, grab: bool) {
        if self.force_relative_pointer {
            return;
        }
        if self.channel.grab_requested.swap(grab, Ordering::AcqRel) == grab {
            return;
        }
        self.signal.post(UserSignal::RelativePointer(grab));
    }

    /// Requests a new cursor image. Ignored when relative mode is forced
    /// (the cursor is never shown then).
    pub fn request_cursor(&self, image: ImageBuffer, xhot: u32, yhot: u32) {
        if self.force_relative_pointer {
            return;
        }
        self.channel
            .cursor
            .set(Some(CursorImage { image, xhot, yhot }));
        self.signal.post(UserSignal::Cursor);
    }

    /// Asks the event loop to exit.
    pub fn shutdown(&self) {
        self.signal.post(UserSignal::Shutdown);
    }
}
