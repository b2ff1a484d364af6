/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

use std::{env, process};

use log::{error, info};
use url::Url;

use crate::app::BrowserApp;
use crate::desktop::app::App;
use crate::desktop::event_loop::AppEventLoop;
use crate::desktop::location::location_bar_input_to_url;
use crate::persistence::FavoritesStore;
use crate::prefs::{AppPreferences, ArgumentParsingResult, parse_command_line_arguments};

pub fn main() {
    // Skip the first argument, which is the binary name.
    let args: Vec<String> = env::args().skip(1).collect();
    let preferences = match parse_command_line_arguments(&args[..]) {
        ArgumentParsingResult::Run(preferences) => preferences,
        ArgumentParsingResult::Exit => process::exit(0),
        ArgumentParsingResult::ErrorParsing => process::exit(1),
    };

    crate::init_tracing(preferences.log_filter.as_deref());

    if let Err(e) = run(preferences) {
        error!("{e}");
        process::exit(1);
    }
}

fn run(preferences: AppPreferences) -> Result<(), String> {
    let favorites = FavoritesStore::open(&preferences.favorites_path)
        .map_err(|e| format!("Failed to load favorites: {e}"))?;
    let home_url = crate::resources::ensure_home_page(&preferences.homepage_path)
        .map_err(|e| format!("Failed to prepare home page: {e}"))?;
    let initial_url = initial_url(&preferences);
    info!(
        "Starting with {} favorites from {}",
        favorites.len(),
        favorites.path().display()
    );

    let browser = BrowserApp::new(favorites, home_url, preferences.searchpage.clone());
    let event_loop = AppEventLoop::new().map_err(|e| format!("Failed to start event loop: {e}"))?;
    let mut app = App::new(preferences, browser, initial_url, event_loop.event_loop_proxy());
    event_loop
        .run_app(&mut app)
        .map_err(|e| format!("Event loop error: {e}"))?;

    match app.exit_error() {
        Some(e) => Err(e.to_string()),
        None => Ok(()),
    }
}

fn initial_url(preferences: &AppPreferences) -> Option<Url> {
    let raw = preferences.url.as_deref()?;
    location_bar_input_to_url(raw, &preferences.searchpage)
}
