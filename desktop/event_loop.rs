/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Event loop and the user events webview callbacks feed back into it.

use winit::error::EventLoopError;
use winit::event_loop::{EventLoop, EventLoopProxy};

use crate::desktop::app::App;
use crate::desktop::tabs::TabId;

/// Events raised from webview callbacks and marshalled onto the UI thread.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// IPC body posted by the chrome page.
    ChromeIpc(String),
    /// IPC body posted by a content page.
    ContentIpc { tab: TabId, body: String },
    UrlChanged { tab: TabId, url: String },
    TitleChanged { tab: TabId, title: String },
}

pub struct AppEventLoop {
    event_loop: EventLoop<AppEvent>,
}

impl AppEventLoop {
    pub fn new() -> Result<Self, EventLoopError> {
        let event_loop = EventLoop::<AppEvent>::with_user_event().build()?;
        Ok(Self { event_loop })
    }

    pub fn event_loop_proxy(&self) -> EventLoopProxy<AppEvent> {
        self.event_loop.create_proxy()
    }

    pub fn run_app(self, app: &mut App) -> Result<(), EventLoopError> {
        self.event_loop.run_app(app)
    }
}
