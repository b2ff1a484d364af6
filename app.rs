/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Application state for the browser shell.
//!
//! UI events arrive as [`BrowserIntent`]s. Applying them mutates the tab
//! strip, the favorites list and the address bar, and queues
//! [`ShellCommand`]s that the host executes against the webviews.

use log::{debug, info, warn};
use url::Url;

use crate::desktop::location::{display_location, location_bar_input_to_url};
use crate::desktop::tabs::{TabId, TabStrip};
use crate::persistence::types::Favorite;
use crate::persistence::{FavoritesError, FavoritesStore};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowserIntent {
    NewTab,
    CloseTab {
        index: usize,
    },
    ActivateTab {
        index: usize,
    },
    ActivateNextTab,
    MoveTab {
        from: usize,
        to: usize,
    },
    SubmitLocation {
        input: String,
    },
    NavigateBack,
    Reload,
    GoHome,
    OpenFavorite {
        index: usize,
    },
    RequestAddFavorite,
    RequestDeleteFavorite {
        index: usize,
    },
    ConfirmPending,
    CancelPending,
    ReorderFavorite {
        dragged: usize,
        target: usize,
    },
    TabUrlChanged {
        tab: TabId,
        url: String,
    },
    TabTitleChanged {
        tab: TabId,
        title: String,
    },
}

/// Work for the host's webview layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    CreateWebView { tab: TabId, url: Url },
    CloseWebView { tab: TabId },
    /// Show `tab`'s webview and hide every other one.
    ShowWebView { tab: TabId },
    Load { tab: TabId, url: Url },
    Reload { tab: TabId },
    GoBack { tab: TabId },
}

/// A favorites mutation waiting for the user to confirm it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PendingConfirmation {
    AddFavorite(Favorite),
    DeleteFavorite { index: usize, favorite: Favorite },
}

impl PendingConfirmation {
    pub fn title(&self) -> &'static str {
        match self {
            Self::AddFavorite(_) => "Add to Favorites",
            Self::DeleteFavorite { .. } => "Delete Favorite",
        }
    }

    pub fn message(&self) -> String {
        match self {
            Self::AddFavorite(favorite) => {
                format!("Add '{}' to your favorites?", favorite.name)
            },
            Self::DeleteFavorite { favorite, .. } => {
                format!("Are you sure you want to remove '{}' from your favorites?", favorite.name)
            },
        }
    }
}

pub struct BrowserApp {
    tabs: TabStrip,
    favorites: FavoritesStore,
    location: String,
    home_url: Url,
    searchpage: String,
    pending_confirmation: Option<PendingConfirmation>,
    pending_commands: Vec<ShellCommand>,
    chrome_dirty: bool,
}

impl BrowserApp {
    pub fn new(favorites: FavoritesStore, home_url: Url, searchpage: impl Into<String>) -> Self {
        Self {
            tabs: TabStrip::new(),
            favorites,
            location: String::new(),
            home_url,
            searchpage: searchpage.into(),
            pending_confirmation: None,
            pending_commands: Vec::new(),
            chrome_dirty: true,
        }
    }

    pub fn tabs(&self) -> &TabStrip {
        &self.tabs
    }

    pub fn favorites(&self) -> &[Favorite] {
        self.favorites.favorites()
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn home_url(&self) -> &Url {
        &self.home_url
    }

    pub fn pending_confirmation(&self) -> Option<&PendingConfirmation> {
        self.pending_confirmation.as_ref()
    }

    pub fn is_modal_open(&self) -> bool {
        self.pending_confirmation.is_some()
    }

    pub fn take_pending_commands(&mut self) -> Vec<ShellCommand> {
        std::mem::take(&mut self.pending_commands)
    }

    /// Returns whether the chrome needs a redraw, clearing the flag.
    pub fn take_chrome_dirty(&mut self) -> bool {
        std::mem::take(&mut self.chrome_dirty)
    }

    /// Open the first tab, at `url` when given, otherwise at the home page.
    pub fn open_initial_tab(&mut self, url: Option<Url>) {
        let url = url.unwrap_or_else(|| self.home_url.clone());
        self.open_tab_at(url);
    }

    /// Apply intents in order. A favorites I/O failure stops the batch and is
    /// returned to the caller; commands queued before it stay queued and the
    /// failed favorites change is not kept.
    pub fn apply_intents<I>(&mut self, intents: I) -> Result<(), FavoritesError>
    where
        I: IntoIterator<Item = BrowserIntent>,
    {
        for intent in intents {
            self.apply_intent(intent)?;
        }
        Ok(())
    }

    fn apply_intent(&mut self, intent: BrowserIntent) -> Result<(), FavoritesError> {
        debug!("Applying {intent:?}");
        match intent {
            BrowserIntent::NewTab => {
                let home = self.home_url.clone();
                self.open_tab_at(home);
            },
            BrowserIntent::CloseTab { index } => self.close_tab(index),
            BrowserIntent::ActivateTab { index } => {
                if self.tabs.activate(index).is_some() {
                    self.show_active_tab();
                }
            },
            BrowserIntent::ActivateNextTab => {
                if self.tabs.activate_next().is_some() {
                    self.show_active_tab();
                }
            },
            BrowserIntent::MoveTab { from, to } => {
                if self.tabs.move_tab(from, to) {
                    self.chrome_dirty = true;
                }
            },
            BrowserIntent::SubmitLocation { input } => self.submit_location(&input),
            BrowserIntent::NavigateBack => {
                if let Some(tab) = self.tabs.active_id() {
                    self.pending_commands.push(ShellCommand::GoBack { tab });
                }
            },
            BrowserIntent::Reload => {
                if let Some(tab) = self.tabs.active_id() {
                    self.pending_commands.push(ShellCommand::Reload { tab });
                }
            },
            BrowserIntent::GoHome => {
                let home = self.home_url.clone();
                self.load_in_active_tab(home);
            },
            BrowserIntent::OpenFavorite { index } => self.open_favorite(index),
            BrowserIntent::RequestAddFavorite => self.request_add_favorite(),
            BrowserIntent::RequestDeleteFavorite { index } => {
                if let Some(favorite) = self.favorites.get(index).cloned() {
                    self.pending_confirmation =
                        Some(PendingConfirmation::DeleteFavorite { index, favorite });
                    self.chrome_dirty = true;
                }
            },
            BrowserIntent::ConfirmPending => self.confirm_pending()?,
            BrowserIntent::CancelPending => {
                if self.pending_confirmation.take().is_some() {
                    self.chrome_dirty = true;
                }
            },
            BrowserIntent::ReorderFavorite { dragged, target } => {
                if self.favorites.reorder(dragged, target)? {
                    self.chrome_dirty = true;
                }
            },
            BrowserIntent::TabUrlChanged { tab, url } => self.tab_url_changed(tab, url),
            BrowserIntent::TabTitleChanged { tab, title } => {
                if let Some(entry) = self.tabs.get_mut(tab)
                    && !title.trim().is_empty()
                    && entry.title != title
                {
                    entry.title = title;
                    self.chrome_dirty = true;
                }
            },
        }
        Ok(())
    }

    fn open_tab_at(&mut self, url: Url) {
        let tab = self.tabs.open();
        info!("Opening {tab} at {url}");
        self.pending_commands
            .push(ShellCommand::CreateWebView { tab, url });
        self.show_active_tab();
    }

    fn close_tab(&mut self, index: usize) {
        let Some(closed) = self.tabs.close(index) else {
            debug!("Refusing to close tab at {index}");
            return;
        };
        self.pending_commands
            .push(ShellCommand::CloseWebView { tab: closed.id });
        self.show_active_tab();
    }

    fn show_active_tab(&mut self) {
        let Some(active) = self.tabs.active() else {
            return;
        };
        let tab = active.id;
        self.location = display_location(active.url.as_deref(), &self.home_url);
        self.pending_commands.push(ShellCommand::ShowWebView { tab });
        self.chrome_dirty = true;
    }

    fn load_in_active_tab(&mut self, url: Url) {
        let Some(tab) = self.tabs.active_id() else {
            return;
        };
        self.location = display_location(Some(url.as_str()), &self.home_url);
        self.pending_commands.push(ShellCommand::Load { tab, url });
        self.chrome_dirty = true;
    }

    fn submit_location(&mut self, input: &str) {
        let Some(url) = location_bar_input_to_url(input, &self.searchpage) else {
            warn!("Failed to parse location: {input}");
            return;
        };
        self.load_in_active_tab(url);
    }

    fn open_favorite(&mut self, index: usize) {
        let Some(favorite) = self.favorites.get(index) else {
            return;
        };
        match Url::parse(&favorite.url) {
            Ok(url) => self.load_in_active_tab(url),
            Err(e) => warn!("Favorite '{}' has an invalid URL: {e}", favorite.name),
        }
    }

    fn request_add_favorite(&mut self) {
        let Some(active) = self.tabs.active() else {
            return;
        };
        let url = display_location(active.url.as_deref(), &self.home_url);
        if url.is_empty() {
            return;
        }
        let name = if active.title.trim().is_empty() {
            url.clone()
        } else {
            active.title.clone()
        };
        self.pending_confirmation = Some(PendingConfirmation::AddFavorite(Favorite::new(name, url)));
        self.chrome_dirty = true;
    }

    fn confirm_pending(&mut self) -> Result<(), FavoritesError> {
        let Some(pending) = self.pending_confirmation.take() else {
            return Ok(());
        };
        self.chrome_dirty = true;
        match pending {
            PendingConfirmation::AddFavorite(favorite) => {
                info!("Adding favorite '{}'", favorite.name);
                self.favorites.add(favorite)
            },
            PendingConfirmation::DeleteFavorite { index, favorite } => {
                if self.favorites.get(index) != Some(&favorite) {
                    warn!("Favorite '{}' moved before deletion was confirmed", favorite.name);
                    return Ok(());
                }
                info!("Removing favorite '{}'", favorite.name);
                self.favorites.remove(index).map(|_| ())
            },
        }
    }

    fn tab_url_changed(&mut self, tab: TabId, url: String) {
        let is_active = self.tabs.active_id() == Some(tab);
        let Some(entry) = self.tabs.get_mut(tab) else {
            return;
        };
        if entry.url.as_deref() == Some(url.as_str()) {
            return;
        }
        entry.url = Some(url);
        if is_active {
            self.location = display_location(entry.url.as_deref(), &self.home_url);
            self.chrome_dirty = true;
        }
    }
}
