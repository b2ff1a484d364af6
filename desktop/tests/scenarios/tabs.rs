/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

use super::super::harness::{TEST_HOME, TestHarness};
use crate::app::{BrowserIntent, ShellCommand};
use url::Url;

#[test]
fn ctrl_n_opens_home_page_in_new_active_tab() {
    let mut harness = TestHarness::new();
    let first = harness.active_tab();
    harness.chrome_ipc(r#"{"type":"shortcut","key":"n","ctrl":true}"#);
    let second = harness.active_tab();
    assert_ne!(first, second);
    assert_eq!(
        harness.commands(),
        vec![
            ShellCommand::CreateWebView {
                tab: second,
                url: Url::parse(TEST_HOME).unwrap(),
            },
            ShellCommand::ShowWebView { tab: second },
        ]
    );
    assert_eq!(harness.snapshot().tabs.len(), 2);
    assert_eq!(harness.snapshot().active_tab, Some(1));
}

#[test]
fn ctrl_tab_cycles_and_wraps() {
    let mut harness = TestHarness::new();
    let first = harness.active_tab();
    harness.apply([BrowserIntent::NewTab]);
    harness.commands();

    harness.chrome_ipc(r#"{"type":"shortcut","key":"Tab","ctrl":true}"#);
    assert_eq!(harness.active_tab(), first);
    assert_eq!(harness.commands(), vec![ShellCommand::ShowWebView { tab: first }]);
}

#[test]
fn closing_last_tab_is_refused() {
    let mut harness = TestHarness::new();
    harness.chrome_ipc(r#"{"type":"close_tab","index":0}"#);
    assert_eq!(harness.app.tabs().len(), 1);
    assert!(harness.commands().is_empty());
}

#[test]
fn closing_tab_drops_its_webview_and_shows_neighbour() {
    let mut harness = TestHarness::new();
    let first = harness.active_tab();
    harness.apply([BrowserIntent::NewTab]);
    let second = harness.active_tab();
    harness.commands();

    harness.chrome_ipc(r#"{"type":"close_tab","index":1}"#);
    assert_eq!(
        harness.commands(),
        vec![
            ShellCommand::CloseWebView { tab: second },
            ShellCommand::ShowWebView { tab: first },
        ]
    );
}

#[test]
fn switching_tabs_restores_that_tabs_address() {
    let mut harness = TestHarness::new();
    harness.visit("https://chat.openai.com/", "ChatGPT");
    harness.apply([BrowserIntent::NewTab]);
    assert_eq!(harness.app.location(), "");

    harness.chrome_ipc(r#"{"type":"activate_tab","index":0}"#);
    assert_eq!(harness.app.location(), "https://chat.openai.com/");
}

#[test]
fn dragging_tab_reorders_strip() {
    let mut harness = TestHarness::new();
    harness.visit("https://www.youtube.com/", "YouTube");
    harness.apply([BrowserIntent::NewTab]);
    harness.visit("https://www.twitch.tv/", "Twitch");

    harness.chrome_ipc(r#"{"type":"move_tab","from":1,"to":0}"#);
    let titles: Vec<_> = harness
        .snapshot()
        .tabs
        .into_iter()
        .map(|t| t.title)
        .collect();
    assert_eq!(titles, ["Twitch", "YouTube"]);
    assert_eq!(harness.snapshot().active_tab, Some(0));
}
