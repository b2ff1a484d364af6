/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Serializable types for favorites persistence.

use serde::{Deserialize, Serialize};

/// Icon given to favorites added from the address bar.
pub const DEFAULT_FAVORITE_ICON: &str = "🌐";

/// A bookmark shown in the favorites bar.
///
/// Field names on disk are kept as written by earlier releases of the shell.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Favorite {
    #[serde(rename = "nombre")]
    pub name: String,
    pub url: String,
    #[serde(rename = "icono")]
    pub icon: String,
}

impl Favorite {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            icon: DEFAULT_FAVORITE_ICON.to_string(),
        }
    }

    /// Text shown on the favorites bar button.
    pub fn label(&self) -> String {
        format!("{} {}", self.icon, self.name)
    }
}

/// Seed list written on first run.
pub fn default_favorites() -> Vec<Favorite> {
    [
        ("YouTube", "https://www.youtube.com"),
        ("Twitch", "https://www.twitch.tv"),
        ("Kick", "https://www.kick.com"),
        ("Optijuegos", "https://www.optijuegos.net"),
        ("ChatGPT", "https://chat.openai.com"),
    ]
    .into_iter()
    .map(|(name, url)| Favorite::new(name, url))
    .collect()
}
