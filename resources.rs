/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Bundled documents.

use std::path::Path;
use std::{fs, io};

use log::info;
use url::Url;

pub const HOME_PAGE_HTML: &str = include_str!("resources/inicio.html");

/// Resolve the home page to a `file://` URL, writing the bundled copy first
/// when `path` does not exist.
pub fn ensure_home_page(path: &Path) -> io::Result<Url> {
    let path = std::path::absolute(path)?;
    if !path.exists() {
        info!("Writing bundled home page to {}", path.display());
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, HOME_PAGE_HTML)?;
    }
    Url::from_file_path(&path).map_err(|()| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{} cannot be expressed as a file URL", path.display()),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_home_page_is_written() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("assets").join("inicio.html");
        let url = ensure_home_page(&path).unwrap();
        assert_eq!(url.scheme(), "file");
        assert_eq!(fs::read_to_string(&path).unwrap(), HOME_PAGE_HTML);
    }

    #[test]
    fn test_existing_home_page_is_kept() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("inicio.html");
        fs::write(&path, "<p>mine</p>").unwrap();
        let url = ensure_home_page(&path).unwrap();
        assert_eq!(url.to_file_path().unwrap(), path);
        assert_eq!(fs::read_to_string(&path).unwrap(), "<p>mine</p>");
    }
}
