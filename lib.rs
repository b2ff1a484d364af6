/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! LostGPT: a tabbed browser shell around the platform webview with a
//! favorites bar persisted to JSON.

pub mod app;
pub mod desktop;
pub mod persistence;
pub mod prefs;
pub mod resources;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Install the log sink. `filter` takes precedence over `RUST_LOG`; the
/// default is `info`.
pub fn init_tracing(filter: Option<&str>) {
    use tracing_subscriber::EnvFilter;

    let env_filter = match filter {
        Some(directives) => EnvFilter::new(directives),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };
    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .try_init()
    {
        eprintln!("Failed to install log subscriber: {e}");
    }
}
