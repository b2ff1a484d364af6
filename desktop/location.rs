/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Address bar input handling.

use url::Url;
use url::form_urlencoded::byte_serialize;

pub const DEFAULT_SEARCHPAGE: &str = "https://www.google.com/search?q=%s";

/// Turn address bar text into a URL to load.
///
/// Only text starting with `http://` or `https://` is loaded literally.
/// Anything else is a search query substituted into `searchpage` at `%s`.
pub fn location_bar_input_to_url(input: &str, searchpage: &str) -> Option<Url> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    if has_web_scheme(input) {
        return Url::parse(input).ok();
    }
    search_url(input, searchpage)
}

fn has_web_scheme(input: &str) -> bool {
    let lower = input.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

fn search_url(query: &str, searchpage: &str) -> Option<Url> {
    let encoded: String = byte_serialize(query.as_bytes()).collect();
    let url = if searchpage.contains("%s") {
        searchpage.replacen("%s", &encoded, 1)
    } else {
        format!("{searchpage}{encoded}")
    };
    Url::parse(&url).ok()
}

/// Text the address bar shows for a tab at `url`. The home page shows as an
/// empty field so the placeholder is visible.
pub fn display_location(url: Option<&str>, home: &Url) -> String {
    let Some(url) = url else {
        return String::new();
    };
    match Url::parse(url) {
        Ok(parsed) if parsed == *home => String::new(),
        _ => url.to_string(),
    }
}
