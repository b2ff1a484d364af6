/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Keyboard and mouse shortcuts.
//!
//! Webviews swallow key events while they hold focus, so the same bindings
//! are resolved from two sources: winit keyboard input on the window and
//! key events forwarded over IPC by the injected listener script.

use winit::event::{MouseButton, Modifiers};
use winit::keyboard::{Key, NamedKey};

use crate::app::BrowserIntent;

/// Key as reported by the DOM `KeyboardEvent.key` or derived from winit.
pub fn intent_for_key(key: &str, ctrl: bool) -> Option<BrowserIntent> {
    match (key, ctrl) {
        ("n" | "N", true) => Some(BrowserIntent::NewTab),
        ("Tab", true) => Some(BrowserIntent::ActivateNextTab),
        ("F5", _) => Some(BrowserIntent::Reload),
        ("BrowserBack", _) => Some(BrowserIntent::NavigateBack),
        _ => None,
    }
}

pub fn intent_for_winit_key(key: &Key, modifiers: &Modifiers) -> Option<BrowserIntent> {
    let ctrl = modifiers.state().control_key();
    match key {
        Key::Character(text) => intent_for_key(text.as_str(), ctrl),
        Key::Named(NamedKey::Tab) => intent_for_key("Tab", ctrl),
        Key::Named(NamedKey::F5) => intent_for_key("F5", ctrl),
        Key::Named(NamedKey::BrowserBack) => intent_for_key("BrowserBack", ctrl),
        _ => None,
    }
}

pub fn intent_for_mouse_button(button: MouseButton) -> Option<BrowserIntent> {
    match button {
        MouseButton::Back => Some(BrowserIntent::NavigateBack),
        _ => None,
    }
}

/// Injected into every webview. Forwards shortcut keys and the mouse back
/// button to the shell.
pub const SHORTCUT_LISTENER_SCRIPT: &str = r#"
(() => {
  if (window.__lostgptShortcuts) { return; }
  window.__lostgptShortcuts = true;
  const post = (msg) => window.ipc && window.ipc.postMessage(JSON.stringify(msg));
  window.addEventListener('keydown', (e) => {
    const bound = (e.ctrlKey && (e.key === 'n' || e.key === 'N' || e.key === 'Tab')) || e.key === 'F5';
    if (!bound) { return; }
    e.preventDefault();
    e.stopPropagation();
    post({ type: 'shortcut', key: e.key, ctrl: e.ctrlKey });
  }, true);
  window.addEventListener('mouseup', (e) => {
    if (e.button === 3) {
      e.preventDefault();
      post({ type: 'shortcut', key: 'BrowserBack', ctrl: false });
    }
  }, true);
})();
"#;
