/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

use super::super::harness::{TEST_HOME, TestHarness};
use crate::app::{BrowserIntent, ShellCommand};
use url::Url;

#[test]
fn scheme_less_input_is_redirected_to_search() {
    let mut harness = TestHarness::new();
    let tab = harness.active_tab();
    harness.chrome_ipc(r#"{"type":"navigate","input":"openai.com"}"#);
    assert_eq!(
        harness.commands(),
        vec![ShellCommand::Load {
            tab,
            url: Url::parse("https://www.google.com/search?q=openai.com").unwrap(),
        }]
    );
}

#[test]
fn absolute_url_is_loaded_as_is() {
    let mut harness = TestHarness::new();
    let tab = harness.active_tab();
    harness.chrome_ipc(r#"{"type":"navigate","input":"https://www.kick.com"}"#);
    assert_eq!(
        harness.commands(),
        vec![ShellCommand::Load {
            tab,
            url: Url::parse("https://www.kick.com/").unwrap(),
        }]
    );
    assert_eq!(harness.app.location(), "https://www.kick.com/");
}

#[test]
fn blank_input_does_nothing() {
    let mut harness = TestHarness::new();
    harness.chrome_ipc(r#"{"type":"navigate","input":"   "}"#);
    assert!(harness.commands().is_empty());
}

#[test]
fn address_bar_follows_active_tab_and_hides_home_page() {
    let mut harness = TestHarness::new();
    assert_eq!(harness.snapshot().location, "");

    harness.visit("https://www.youtube.com/", "YouTube");
    assert_eq!(harness.snapshot().location, "https://www.youtube.com/");

    harness.visit(TEST_HOME, "LostGPT");
    assert_eq!(harness.snapshot().location, "");
}

#[test]
fn back_reload_and_home_target_active_tab() {
    let mut harness = TestHarness::new();
    let tab = harness.active_tab();
    harness.chrome_ipc(r#"{"type":"back"}"#);
    harness.chrome_ipc(r#"{"type":"reload"}"#);
    harness.chrome_ipc(r#"{"type":"home"}"#);
    assert_eq!(
        harness.commands(),
        vec![
            ShellCommand::GoBack { tab },
            ShellCommand::Reload { tab },
            ShellCommand::Load {
                tab,
                url: Url::parse(TEST_HOME).unwrap(),
            },
        ]
    );
}

#[test]
fn f5_forwarded_from_page_reloads() {
    let mut harness = TestHarness::new();
    let tab = harness.active_tab();
    harness.chrome_ipc(r#"{"type":"shortcut","key":"F5","ctrl":false}"#);
    assert_eq!(harness.commands(), vec![ShellCommand::Reload { tab }]);
}

#[test]
fn title_change_renames_tab() {
    let mut harness = TestHarness::new();
    harness.visit("https://www.twitch.tv/", "Twitch");
    assert_eq!(harness.snapshot().tabs[0].title, "Twitch");

    let tab = harness.active_tab();
    harness.apply([BrowserIntent::TabTitleChanged {
        tab,
        title: "   ".to_string(),
    }]);
    assert_eq!(harness.snapshot().tabs[0].title, "Twitch");
}
