// SPDX-License-Identifier: GPL-3.0-only

/// Position and size of one host window, in logical points and device
/// pixels, plus the refresh rate of the display it currently sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowGeometry {
    pub x: i32,
    pub y: i32,
    pub width_pts: i32,
    pub height_pts: i32,
    pub width_px: i32,
    pub height_px: i32,
    pub refresh: Option<i32>,
}

/// Bounding box over all host windows.
///
/// Recomputed by the event loop on every window move/show/resize and read
/// when mapping absolute pointer coordinates into the compositor's
/// normalized touch space.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct OutputGeometry {
    pub x: i32,
    pub y: i32,
    pub width_pts: i32,
    pub height_pts: i32,
    pub width_px: i32,
    pub height_px: i32,
}

impl OutputGeometry {
    pub fn bounding(windows: &[WindowGeometry]) -> OutputGeometry {
        if windows.is_empty() {
            return OutputGeometry::default();
        }

        let mut lowest_x = i32::MAX;
        let mut lowest_y = i32::MAX;
        let mut highest_x = i32::MIN;
        let mut highest_y = i32::MIN;
        let mut highest_x_px = i32::MIN;
        let mut highest_y_px = i32::MIN;

        for window in windows {
            lowest_x = lowest_x.min(window.x);
            lowest_y = lowest_y.min(window.y);
            highest_x = highest_x.max(window.x + window.width_pts);
            highest_y = highest_y.max(window.y + window.height_pts);
            highest_x_px = highest_x_px.max(window.x + window.width_px);
            highest_y_px = highest_y_px.max(window.y + window.height_px);
        }

        OutputGeometry {
            x: lowest_x,
            y: lowest_y,
            width_pts: highest_x - lowest_x,
            height_pts: highest_y - lowest_y,
            width_px: highest_x_px - lowest_x,
            height_px: highest_y_px - lowest_y,
        }
    }

    /// Maps absolute window coordinates (logical points) into the
    /// compositor's normalized touch space.
    ///
    /// No clamping: events racing a resize may land outside [0, 1], which the
    /// input server tolerates.
    pub fn to_normalized(&self, x: f64, y: f64) -> (f64, f64) {
        if self.width_pts <= 0 || self.height_pts <= 0 {
            return (0.0, 0.0);
        }
        (x / self.width_pts as f64, y / self.height_pts as f64)
    }
}

/// Lowest refresh rate across all host windows, `None` when no window
/// reports a display mode.
pub fn min_refresh(windows: &[WindowGeometry]) -> Option<i32> {
    windows.iter().filter_map(|window| window.refresh).min()
}
