/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

use super::super::harness::TestHarness;
use crate::app::{BrowserIntent, PendingConfirmation, ShellCommand};
use crate::persistence::types::{Favorite, default_favorites};
use url::Url;

#[test]
fn confirmed_add_appends_current_page_and_persists() {
    let mut harness = TestHarness::new();
    harness.visit("https://example.com", "Example");

    harness.chrome_ipc(r#"{"type":"add_favorite"}"#);
    assert_eq!(harness.reload_favorites_from_disk().len(), 5);
    assert_eq!(
        harness.snapshot().dialog.map(|d| d.message),
        Some("Add 'Example' to your favorites?".to_string())
    );

    harness.chrome_ipc(r#"{"type":"confirm"}"#);
    let expected = Favorite::new("Example", "https://example.com");
    assert_eq!(harness.app.favorites().last(), Some(&expected));
    let on_disk = harness.reload_favorites_from_disk();
    assert_eq!(on_disk.len(), 6);
    assert_eq!(on_disk.last(), Some(&expected));
    assert!(harness.snapshot().dialog.is_none());
}

#[test]
fn add_before_page_title_arrives_uses_tab_label() {
    let mut harness = TestHarness::new();
    let tab = harness.active_tab();
    harness.apply([
        BrowserIntent::TabUrlChanged {
            tab,
            url: "https://www.optijuegos.net/".to_string(),
        },
        BrowserIntent::RequestAddFavorite,
    ]);
    assert!(matches!(
        harness.app.pending_confirmation(),
        Some(PendingConfirmation::AddFavorite(f)) if f.name == "New Tab"
    ));
}

#[test]
fn declined_add_changes_nothing() {
    let mut harness = TestHarness::new();
    harness.visit("https://example.com", "Example");
    harness.chrome_ipc(r#"{"type":"add_favorite"}"#);
    harness.chrome_ipc(r#"{"type":"cancel"}"#);
    assert_eq!(harness.app.favorites(), default_favorites().as_slice());
    assert_eq!(harness.reload_favorites_from_disk(), default_favorites());
}

#[test]
fn confirmed_delete_removes_exactly_one_record() {
    let mut harness = TestHarness::new();
    harness.chrome_ipc(r#"{"type":"delete_favorite","index":2}"#);
    assert_eq!(
        harness.snapshot().dialog.map(|d| d.title),
        Some("Delete Favorite".to_string())
    );
    harness.chrome_ipc(r#"{"type":"confirm"}"#);

    assert_eq!(
        harness.favorite_names(),
        ["YouTube", "Twitch", "Optijuegos", "ChatGPT"]
    );
    assert_eq!(harness.reload_favorites_from_disk().len(), 4);
}

#[test]
fn delete_of_duplicate_removes_only_the_chosen_position() {
    let mut harness = TestHarness::new();
    harness.visit("https://www.kick.com", "Kick");
    harness.apply([BrowserIntent::RequestAddFavorite, BrowserIntent::ConfirmPending]);
    assert_eq!(harness.favorite_names().iter().filter(|n| *n == "Kick").count(), 2);

    harness.apply([
        BrowserIntent::RequestDeleteFavorite { index: 5 },
        BrowserIntent::ConfirmPending,
    ]);
    assert_eq!(
        harness.favorite_names(),
        ["YouTube", "Twitch", "Kick", "Optijuegos", "ChatGPT"]
    );
}

#[test]
fn drag_reorder_moves_dragged_to_target_index() {
    let mut harness = TestHarness::new();
    harness.chrome_ipc(r#"{"type":"reorder_favorite","dragged":4,"target":1}"#);
    let expected = ["YouTube", "ChatGPT", "Twitch", "Kick", "Optijuegos"];
    assert_eq!(harness.favorite_names(), expected);
    let on_disk: Vec<_> = harness
        .reload_favorites_from_disk()
        .into_iter()
        .map(|f| f.name)
        .collect();
    assert_eq!(on_disk, expected);
}

#[test]
fn drag_onto_itself_is_noop() {
    let mut harness = TestHarness::new();
    harness.chrome_ipc(r#"{"type":"reorder_favorite","dragged":3,"target":3}"#);
    assert_eq!(harness.app.favorites(), default_favorites().as_slice());
    assert!(!harness.app.take_chrome_dirty());
}

#[test]
fn clicking_favorite_loads_it_in_active_tab() {
    let mut harness = TestHarness::new();
    let tab = harness.active_tab();
    harness.chrome_ipc(r#"{"type":"open_favorite","index":1}"#);
    assert_eq!(
        harness.commands(),
        vec![ShellCommand::Load {
            tab,
            url: Url::parse("https://www.twitch.tv").unwrap(),
        }]
    );
}

#[test]
fn favorites_bar_labels_follow_list_order() {
    let harness = TestHarness::new();
    let labels: Vec<_> = harness
        .snapshot()
        .favorites
        .into_iter()
        .map(|f| f.label)
        .collect();
    assert_eq!(labels[0], "🌐 YouTube");
    assert_eq!(labels[4], "🌐 ChatGPT");
}
