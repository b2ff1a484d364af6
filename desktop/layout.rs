/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Placement of the chrome strip and the content webviews inside the window.

use dpi::{LogicalPosition, LogicalSize, PhysicalSize};

/// Height of the title strip, toolbar, favorites bar and tab strip together.
/// Must match the CSS grid in `resources/chrome.html`.
pub const CHROME_HEIGHT: f64 = 164.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn to_rect(self) -> wry::Rect {
        wry::Rect {
            position: LogicalPosition::new(self.x, self.y).into(),
            size: LogicalSize::new(self.width, self.height).into(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShellLayout {
    pub chrome: Bounds,
    pub content: Bounds,
}

impl ShellLayout {
    /// `modal_open` stretches the chrome over the whole window so dialogs
    /// can be drawn on top of the page area.
    pub fn compute(inner_size: PhysicalSize<u32>, scale_factor: f64, modal_open: bool) -> Self {
        let scale = if scale_factor > 0.0 { scale_factor } else { 1.0 };
        let width = f64::from(inner_size.width) / scale;
        let height = f64::from(inner_size.height) / scale;
        let chrome_height = if modal_open {
            height
        } else {
            CHROME_HEIGHT.min(height)
        };
        let content_top = CHROME_HEIGHT.min(height);

        Self {
            chrome: Bounds {
                x: 0.0,
                y: 0.0,
                width,
                height: chrome_height,
            },
            content: Bounds {
                x: 0.0,
                y: content_top,
                width,
                height: (height - content_top).max(0.0),
            },
        }
    }
}
