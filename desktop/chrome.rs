/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! IPC between the chrome webview (toolbar, tab strip, favorites bar,
//! dialogs) and the shell.
//!
//! The chrome posts [`ChromeMessage`]s as JSON. The shell answers by pushing
//! a full [`ChromeSnapshot`] into `window.__lostgpt.render`.

use serde::{Deserialize, Serialize};

use crate::app::{BrowserApp, BrowserIntent};
use crate::desktop::shortcuts;
use crate::desktop::tabs::TabId;

pub const CHROME_HTML: &str = include_str!("../resources/chrome.html");

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChromeMessage {
    /// The page finished loading and wants its first snapshot.
    Ready,
    NewTab,
    CloseTab { index: usize },
    ActivateTab { index: usize },
    MoveTab { from: usize, to: usize },
    Navigate { input: String },
    Back,
    Reload,
    Home,
    OpenFavorite { index: usize },
    AddFavorite,
    DeleteFavorite { index: usize },
    /// Drop of the favorite at `dragged` onto the one at `target`.
    ReorderFavorite { dragged: usize, target: usize },
    Confirm,
    Cancel,
    Shortcut { key: String, ctrl: bool },
}

impl ChromeMessage {
    pub fn parse(body: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(body)
    }

    /// `Ready` carries no intent; the caller just redraws.
    pub fn into_intent(self) -> Option<BrowserIntent> {
        Some(match self {
            ChromeMessage::Ready => return None,
            ChromeMessage::NewTab => BrowserIntent::NewTab,
            ChromeMessage::CloseTab { index } => BrowserIntent::CloseTab { index },
            ChromeMessage::ActivateTab { index } => BrowserIntent::ActivateTab { index },
            ChromeMessage::MoveTab { from, to } => BrowserIntent::MoveTab { from, to },
            ChromeMessage::Navigate { input } => BrowserIntent::SubmitLocation { input },
            ChromeMessage::Back => BrowserIntent::NavigateBack,
            ChromeMessage::Reload => BrowserIntent::Reload,
            ChromeMessage::Home => BrowserIntent::GoHome,
            ChromeMessage::OpenFavorite { index } => BrowserIntent::OpenFavorite { index },
            ChromeMessage::AddFavorite => BrowserIntent::RequestAddFavorite,
            ChromeMessage::DeleteFavorite { index } => {
                BrowserIntent::RequestDeleteFavorite { index }
            },
            ChromeMessage::ReorderFavorite { dragged, target } => {
                BrowserIntent::ReorderFavorite { dragged, target }
            },
            ChromeMessage::Confirm => BrowserIntent::ConfirmPending,
            ChromeMessage::Cancel => BrowserIntent::CancelPending,
            ChromeMessage::Shortcut { key, ctrl } => return shortcuts::intent_for_key(&key, ctrl),
        })
    }

    /// Content pages get `window.ipc` too; only shortcut forwarding is
    /// honoured from them.
    pub fn allowed_from_content(&self) -> bool {
        matches!(self, ChromeMessage::Shortcut { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChromeSnapshot {
    pub location: String,
    pub tabs: Vec<TabSnapshot>,
    pub active_tab: Option<usize>,
    pub favorites: Vec<FavoriteSnapshot>,
    pub dialog: Option<DialogSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TabSnapshot {
    pub id: TabId,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FavoriteSnapshot {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DialogSnapshot {
    pub title: String,
    pub message: String,
}

impl ChromeSnapshot {
    pub fn from_app(app: &BrowserApp) -> Self {
        Self {
            location: app.location().to_string(),
            tabs: app
                .tabs()
                .tabs()
                .iter()
                .map(|tab| TabSnapshot {
                    id: tab.id,
                    title: tab.title.clone(),
                })
                .collect(),
            active_tab: app.tabs().active_index(),
            favorites: app
                .favorites()
                .iter()
                .map(|favorite| FavoriteSnapshot {
                    label: favorite.label(),
                    url: favorite.url.clone(),
                })
                .collect(),
            dialog: app.pending_confirmation().map(|pending| DialogSnapshot {
                title: pending.title().to_string(),
                message: pending.message(),
            }),
        }
    }

    /// Script that hands this snapshot to the chrome page.
    pub fn render_script(&self) -> Result<String, serde_json::Error> {
        let json = serde_json::to_string(self)?;
        Ok(format!(
            "window.__lostgpt && window.__lostgpt.render({json});"
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_reorder_by_position() {
        let message =
            ChromeMessage::parse(r#"{"type":"reorder_favorite","dragged":3,"target":0}"#).unwrap();
        assert_eq!(
            message.into_intent(),
            Some(BrowserIntent::ReorderFavorite {
                dragged: 3,
                target: 0
            })
        );
    }

    #[test]
    fn test_parse_navigate() {
        let message = ChromeMessage::parse(r#"{"type":"navigate","input":"openai.com"}"#).unwrap();
        assert_eq!(
            message.into_intent(),
            Some(BrowserIntent::SubmitLocation {
                input: "openai.com".to_string()
            })
        );
    }

    #[test]
    fn test_ready_has_no_intent() {
        assert_eq!(ChromeMessage::parse(r#"{"type":"ready"}"#).unwrap().into_intent(), None);
    }

    #[test]
    fn test_unknown_message_is_rejected() {
        assert!(ChromeMessage::parse(r#"{"type":"format_disk"}"#).is_err());
    }

    #[test]
    fn test_only_shortcuts_are_accepted_from_content() {
        let shortcut = ChromeMessage::Shortcut {
            key: "F5".to_string(),
            ctrl: false,
        };
        assert!(shortcut.allowed_from_content());
        assert!(!ChromeMessage::AddFavorite.allowed_from_content());
        assert!(!ChromeMessage::DeleteFavorite { index: 0 }.allowed_from_content());
    }
}
