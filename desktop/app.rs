/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! winit application handler: owns the window, the webviews and the
//! browser state, and routes every event through [`BrowserApp`].

use log::{debug, error, info, warn};
use url::Url;
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, Modifiers, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoopProxy};
use winit::window::{Window, WindowId};

use crate::app::{BrowserApp, BrowserIntent};
use crate::desktop::chrome::{ChromeMessage, ChromeSnapshot};
use crate::desktop::event_loop::AppEvent;
use crate::desktop::layout::ShellLayout;
use crate::desktop::shortcuts;
use crate::desktop::webview_controller::WebViewController;
use crate::prefs::AppPreferences;

pub const WINDOW_TITLE: &str = "LostGPT";

struct RunningAppState {
    window: Window,
    webviews: WebViewController,
    modal_open: bool,
}

enum AppState {
    Initializing,
    Running(RunningAppState),
    ShuttingDown,
}

pub struct App {
    preferences: AppPreferences,
    browser: BrowserApp,
    initial_url: Option<Url>,
    proxy: EventLoopProxy<AppEvent>,
    modifiers: Modifiers,
    state: AppState,
    exit_error: Option<String>,
}

impl App {
    pub fn new(
        preferences: AppPreferences,
        browser: BrowserApp,
        initial_url: Option<Url>,
        proxy: EventLoopProxy<AppEvent>,
    ) -> Self {
        Self {
            preferences,
            browser,
            initial_url,
            proxy,
            modifiers: Modifiers::default(),
            state: AppState::Initializing,
            exit_error: None,
        }
    }

    /// Set when the window or its webviews could not be created.
    pub fn exit_error(&self) -> Option<&str> {
        self.exit_error.as_deref()
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<(), String> {
        let attributes = Window::default_attributes()
            .with_title(WINDOW_TITLE)
            .with_inner_size(LogicalSize::new(
                self.preferences.window_width,
                self.preferences.window_height,
            ));
        let window = event_loop
            .create_window(attributes)
            .map_err(|e| format!("Failed to create window: {e}"))?;
        let layout = ShellLayout::compute(window.inner_size(), window.scale_factor(), false);
        let webviews = WebViewController::new(&window, self.proxy.clone(), layout)
            .map_err(|e| format!("Failed to create chrome webview: {e}"))?;

        self.state = AppState::Running(RunningAppState {
            window,
            webviews,
            modal_open: false,
        });
        self.browser.open_initial_tab(self.initial_url.take());
        self.flush();
        info!("Window ready");
        Ok(())
    }

    fn apply(&mut self, intents: impl IntoIterator<Item = BrowserIntent>) {
        if let Err(e) = self.browser.apply_intents(intents) {
            error!("Favorites update failed: {e}");
        }
        self.flush();
    }

    /// Execute queued webview work, then relayout and redraw the chrome if
    /// the state changed.
    fn flush(&mut self) {
        let AppState::Running(running) = &mut self.state else {
            return;
        };
        for command in self.browser.take_pending_commands() {
            if let Err(e) = running.webviews.execute(&running.window, command) {
                warn!("Webview command failed: {e}");
            }
        }

        let modal_open = self.browser.is_modal_open();
        if modal_open != running.modal_open {
            running.modal_open = modal_open;
            relayout(running);
        }

        if self.browser.take_chrome_dirty() {
            running
                .webviews
                .render_chrome(&ChromeSnapshot::from_app(&self.browser));
        }
    }

    fn handle_ipc(&mut self, body: &str, from_content: bool) {
        let message = match ChromeMessage::parse(body) {
            Ok(message) => message,
            Err(e) => {
                debug!("Ignoring IPC message {body}: {e}");
                return;
            },
        };
        if from_content && !message.allowed_from_content() {
            warn!("Ignoring {message:?} posted by page content");
            return;
        }
        if message == ChromeMessage::Ready {
            if let AppState::Running(running) = &self.state {
                running
                    .webviews
                    .render_chrome(&ChromeSnapshot::from_app(&self.browser));
            }
            return;
        }
        if let Some(intent) = message.into_intent() {
            self.apply([intent]);
        }
    }
}

fn relayout(running: &mut RunningAppState) {
    let layout = ShellLayout::compute(
        running.window.inner_size(),
        running.window.scale_factor(),
        running.modal_open,
    );
    if let Err(e) = running.webviews.apply_layout(layout, running.modal_open) {
        warn!("Failed to lay out webviews: {e}");
    }
}

impl ApplicationHandler<AppEvent> for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if !matches!(self.state, AppState::Initializing) {
            return;
        }
        if let Err(e) = self.init(event_loop) {
            error!("{e}");
            self.exit_error = Some(e);
            self.state = AppState::ShuttingDown;
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        let AppState::Running(running) = &mut self.state else {
            return;
        };
        if running.window.id() != window_id {
            return;
        }
        match event {
            WindowEvent::CloseRequested => {
                info!("Window close requested, shutting down");
                self.state = AppState::ShuttingDown;
                event_loop.exit();
            },
            WindowEvent::Resized(_) | WindowEvent::ScaleFactorChanged { .. } => relayout(running),
            WindowEvent::ModifiersChanged(modifiers) => self.modifiers = modifiers,
            WindowEvent::KeyboardInput { event, .. } if event.state == ElementState::Pressed => {
                if let Some(intent) =
                    shortcuts::intent_for_winit_key(&event.logical_key, &self.modifiers)
                {
                    self.apply([intent]);
                }
            },
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button,
                ..
            } => {
                if let Some(intent) = shortcuts::intent_for_mouse_button(button) {
                    self.apply([intent]);
                }
            },
            _ => {},
        }
    }

    fn user_event(&mut self, _event_loop: &ActiveEventLoop, event: AppEvent) {
        match event {
            AppEvent::ChromeIpc(body) => self.handle_ipc(&body, false),
            AppEvent::ContentIpc { tab, body } => {
                debug!("IPC from {tab}: {body}");
                self.handle_ipc(&body, true);
            },
            AppEvent::UrlChanged { tab, url } => {
                self.apply([BrowserIntent::TabUrlChanged { tab, url }]);
            },
            AppEvent::TitleChanged { tab, title } => {
                self.apply([BrowserIntent::TabTitleChanged { tab, title }]);
            },
        }
    }
}
