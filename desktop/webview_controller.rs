/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Owns the wry webviews: one for the chrome and one per tab, all children
//! of the main winit window.

use std::collections::HashMap;

use log::{debug, warn};
use winit::event_loop::EventLoopProxy;
use winit::window::Window;
use wry::{PageLoadEvent, WebView, WebViewBuilder};

use crate::app::ShellCommand;
use crate::desktop::chrome::{CHROME_HTML, ChromeSnapshot};
use crate::desktop::event_loop::AppEvent;
use crate::desktop::layout::ShellLayout;
use crate::desktop::shortcuts::SHORTCUT_LISTENER_SCRIPT;
use crate::desktop::tabs::TabId;

pub struct WebViewController {
    chrome: WebView,
    content: HashMap<TabId, WebView>,
    visible: Option<TabId>,
    modal_open: bool,
    layout: ShellLayout,
    proxy: EventLoopProxy<AppEvent>,
}

impl WebViewController {
    pub fn new(
        window: &Window,
        proxy: EventLoopProxy<AppEvent>,
        layout: ShellLayout,
    ) -> wry::Result<Self> {
        let ipc_proxy = proxy.clone();
        let chrome = WebViewBuilder::new()
            .with_html(CHROME_HTML)
            .with_devtools(cfg!(debug_assertions))
            .with_initialization_script(SHORTCUT_LISTENER_SCRIPT)
            .with_bounds(layout.chrome.to_rect())
            .with_ipc_handler(move |request| {
                let _ = ipc_proxy.send_event(AppEvent::ChromeIpc(request.body().clone()));
            })
            .build_as_child(window)?;

        Ok(Self {
            chrome,
            content: HashMap::new(),
            visible: None,
            modal_open: false,
            layout,
            proxy,
        })
    }

    pub fn execute(&mut self, window: &Window, command: ShellCommand) -> wry::Result<()> {
        debug!("Executing {command:?}");
        match command {
            ShellCommand::CreateWebView { tab, url } => {
                let webview = self.build_content_webview(window, tab, url.as_str())?;
                self.content.insert(tab, webview);
            },
            ShellCommand::CloseWebView { tab } => {
                if self.content.remove(&tab).is_none() {
                    warn!("No webview to close for {tab}");
                }
                if self.visible == Some(tab) {
                    self.visible = None;
                }
            },
            ShellCommand::ShowWebView { tab } => self.show(tab)?,
            ShellCommand::Load { tab, url } => {
                if let Some(webview) = self.content.get(&tab) {
                    webview.load_url(url.as_str())?;
                }
            },
            ShellCommand::Reload { tab } => {
                if let Some(webview) = self.content.get(&tab) {
                    webview.reload()?;
                }
            },
            ShellCommand::GoBack { tab } => {
                // `history.back()` is a no-op when there is nothing to go back to.
                if let Some(webview) = self.content.get(&tab) {
                    webview.evaluate_script("history.back();")?;
                }
            },
        }
        Ok(())
    }

    fn build_content_webview(&self, window: &Window, tab: TabId, url: &str) -> wry::Result<WebView> {
        let ipc_proxy = self.proxy.clone();
        let title_proxy = self.proxy.clone();
        let load_proxy = self.proxy.clone();
        WebViewBuilder::new()
            .with_url(url)
            .with_devtools(cfg!(debug_assertions))
            .with_visible(false)
            .with_bounds(self.layout.content.to_rect())
            .with_initialization_script(SHORTCUT_LISTENER_SCRIPT)
            .with_ipc_handler(move |request| {
                let _ = ipc_proxy.send_event(AppEvent::ContentIpc {
                    tab,
                    body: request.body().clone(),
                });
            })
            .with_document_title_changed_handler(move |title| {
                let _ = title_proxy.send_event(AppEvent::TitleChanged { tab, title });
            })
            .with_on_page_load_handler(move |event, url| {
                if matches!(event, PageLoadEvent::Started | PageLoadEvent::Finished) {
                    let _ = load_proxy.send_event(AppEvent::UrlChanged { tab, url });
                }
            })
            .build_as_child(window)
    }

    fn show(&mut self, tab: TabId) -> wry::Result<()> {
        if let Some(previous) = self.visible.take()
            && previous != tab
            && let Some(webview) = self.content.get(&previous)
        {
            webview.set_visible(false)?;
        }
        if let Some(webview) = self.content.get(&tab) {
            webview.set_visible(!self.modal_open)?;
            self.visible = Some(tab);
        }
        Ok(())
    }

    /// Resize every webview and hide page content behind an open dialog.
    pub fn apply_layout(&mut self, layout: ShellLayout, modal_open: bool) -> wry::Result<()> {
        self.layout = layout;
        self.chrome.set_bounds(layout.chrome.to_rect())?;
        for webview in self.content.values() {
            webview.set_bounds(layout.content.to_rect())?;
        }
        if self.modal_open != modal_open {
            self.modal_open = modal_open;
            if let Some(webview) = self.visible.and_then(|tab| self.content.get(&tab)) {
                webview.set_visible(!modal_open)?;
            }
        }
        Ok(())
    }

    pub fn render_chrome(&self, snapshot: &ChromeSnapshot) {
        match snapshot.render_script() {
            Ok(script) => {
                if let Err(e) = self.chrome.evaluate_script(&script) {
                    warn!("Failed to update chrome: {e}");
                }
            },
            Err(e) => warn!("Failed to serialize chrome snapshot: {e}"),
        }
    }
}
