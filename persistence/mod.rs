/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Favorites persistence.
//!
//! The JSON file is rewritten in full after every mutation. A mutation whose
//! write fails is rolled back, so the list in memory always matches the
//! last successful write.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};
use types::{Favorite, default_favorites};

/// Default location of the favorites file, relative to the working directory.
pub const DEFAULT_FAVORITES_PATH: &str = "assets/favoritos.json";

/// Ordered favorites list backed by a JSON file.
#[derive(Debug)]
pub struct FavoritesStore {
    path: PathBuf,
    favorites: Vec<Favorite>,
}

impl FavoritesStore {
    /// Load favorites from `path`, seeding the default list when the file
    /// does not exist yet.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, FavoritesError> {
        let path = path.into();
        if path.exists() {
            let favorites = read_favorites(&path)?;
            debug!(
                "Loaded {} favorites from {}",
                favorites.len(),
                path.display()
            );
            return Ok(Self { path, favorites });
        }

        info!("No favorites at {}, writing defaults", path.display());
        let store = Self {
            path,
            favorites: default_favorites(),
        };
        store.save()?;
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn favorites(&self) -> &[Favorite] {
        &self.favorites
    }

    pub fn len(&self) -> usize {
        self.favorites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.favorites.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Favorite> {
        self.favorites.get(index)
    }

    /// Append `favorite` and persist.
    pub fn add(&mut self, favorite: Favorite) -> Result<(), FavoritesError> {
        self.favorites.push(favorite);
        if let Err(e) = self.save() {
            self.favorites.pop();
            return Err(e);
        }
        Ok(())
    }

    /// Remove the favorite at `index` and persist. Returns `None` without
    /// touching the file when `index` is out of range.
    pub fn remove(&mut self, index: usize) -> Result<Option<Favorite>, FavoritesError> {
        if index >= self.favorites.len() {
            return Ok(None);
        }
        let removed = self.favorites.remove(index);
        if let Err(e) = self.save() {
            self.favorites.insert(index, removed);
            return Err(e);
        }
        Ok(Some(removed))
    }

    /// Move the favorite at `dragged` to the position held by `target`.
    ///
    /// Dropping a favorite on itself (or on a stale position) leaves the list
    /// and the file untouched and returns `false`.
    pub fn reorder(&mut self, dragged: usize, target: usize) -> Result<bool, FavoritesError> {
        let len = self.favorites.len();
        if dragged == target || dragged >= len || target >= len {
            return Ok(false);
        }
        let favorite = self.favorites.remove(dragged);
        self.favorites.insert(target, favorite);
        if let Err(e) = self.save() {
            let favorite = self.favorites.remove(target);
            self.favorites.insert(dragged, favorite);
            return Err(e);
        }
        Ok(true)
    }

    /// Rewrite the whole file from the in-memory list.
    pub fn save(&self) -> Result<(), FavoritesError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| FavoritesError::Io {
                path: parent.to_path_buf(),
                message: e.to_string(),
            })?;
        }
        // `to_string_pretty` indents with two spaces and leaves non-ASCII unescaped.
        let json = serde_json::to_string_pretty(&self.favorites).map_err(|e| {
            FavoritesError::Json {
                path: self.path.clone(),
                message: e.to_string(),
            }
        })?;
        fs::write(&self.path, json).map_err(|e| FavoritesError::Io {
            path: self.path.clone(),
            message: e.to_string(),
        })
    }
}

fn read_favorites(path: &Path) -> Result<Vec<Favorite>, FavoritesError> {
    let contents = fs::read_to_string(path).map_err(|e| FavoritesError::Io {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    serde_json::from_str(&contents).map_err(|e| FavoritesError::Json {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Errors from the favorites store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FavoritesError {
    Io { path: PathBuf, message: String },
    Json { path: PathBuf, message: String },
}

impl std::fmt::Display for FavoritesError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FavoritesError::Io { path, message } => {
                write!(f, "IO error on {}: {message}", path.display())
            },
            FavoritesError::Json { path, message } => {
                write!(f, "Malformed favorites in {}: {message}", path.display())
            },
        }
    }
}

impl std::error::Error for FavoritesError {}
