/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Preferences: built-in defaults, overlaid by an optional TOML file,
//! overlaid by command-line flags.

use std::fs;
use std::path::{Path, PathBuf};

use bpaf::{Bpaf, ParseFailure};
use serde::Deserialize;

use crate::desktop::location::DEFAULT_SEARCHPAGE;
use crate::persistence::DEFAULT_FAVORITES_PATH;

pub const DEFAULT_HOMEPAGE_PATH: &str = "assets/inicio.html";
const CONFIG_FILE_NAME: &str = "lostgpt.toml";

#[derive(Clone, Debug, PartialEq)]
pub struct AppPreferences {
    pub favorites_path: PathBuf,
    pub homepage_path: PathBuf,
    /// Search URL template; `%s` is replaced by the encoded query.
    pub searchpage: String,
    pub window_width: f64,
    pub window_height: f64,
    pub log_filter: Option<String>,
    /// Loaded in the first tab instead of the home page.
    pub url: Option<String>,
}

impl Default for AppPreferences {
    fn default() -> Self {
        Self {
            favorites_path: PathBuf::from(DEFAULT_FAVORITES_PATH),
            homepage_path: PathBuf::from(DEFAULT_HOMEPAGE_PATH),
            searchpage: DEFAULT_SEARCHPAGE.to_string(),
            window_width: 1200.0,
            window_height: 800.0,
            log_filter: None,
            url: None,
        }
    }
}

/// Shape of `lostgpt.toml`. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct ConfigFile {
    favorites_path: Option<PathBuf>,
    homepage_path: Option<PathBuf>,
    searchpage: Option<String>,
    window_width: Option<f64>,
    window_height: Option<f64>,
    log_filter: Option<String>,
    url: Option<String>,
}

impl AppPreferences {
    fn apply_config_file(&mut self, config: ConfigFile) {
        if let Some(path) = config.favorites_path {
            self.favorites_path = path;
        }
        if let Some(path) = config.homepage_path {
            self.homepage_path = path;
        }
        if let Some(searchpage) = config.searchpage {
            self.searchpage = searchpage;
        }
        if let Some(width) = config.window_width {
            self.window_width = width;
        }
        if let Some(height) = config.window_height {
            self.window_height = height;
        }
        if config.log_filter.is_some() {
            self.log_filter = config.log_filter;
        }
        if config.url.is_some() {
            self.url = config.url;
        }
    }

    fn apply_cmd_args(&mut self, args: CmdArgs) {
        if let Some(path) = args.favorites {
            self.favorites_path = path;
        }
        if let Some(path) = args.homepage {
            self.homepage_path = path;
        }
        if let Some(searchpage) = args.searchpage {
            self.searchpage = searchpage;
        }
        if let Some((width, height)) = args.window_size {
            self.window_width = width;
            self.window_height = height;
        }
        if args.log_filter.is_some() {
            self.log_filter = args.log_filter;
        }
        if args.url.is_some() {
            self.url = args.url;
        }
    }
}

#[derive(Bpaf, Clone, Debug)]
#[bpaf(options, version(crate::VERSION))]
struct CmdArgs {
    /// Path of a TOML preferences file
    #[bpaf(long, argument("PATH"))]
    config: Option<PathBuf>,

    /// Favorites JSON file
    #[bpaf(long, argument("PATH"))]
    favorites: Option<PathBuf>,

    /// Local HTML document loaded into new tabs
    #[bpaf(long, argument("PATH"))]
    homepage: Option<PathBuf>,

    /// Search URL template, `%s` is replaced by the query
    #[bpaf(long, argument("URL"))]
    searchpage: Option<String>,

    /// Initial window size in logical pixels, e.g. 1280x720
    #[bpaf(long, argument::<String>("WxH"), parse(parse_window_size), optional)]
    window_size: Option<(f64, f64)>,

    /// Log filter directives, e.g. `lostgpt=debug`
    #[bpaf(long, argument("FILTER"))]
    log_filter: Option<String>,

    /// URL to open in the first tab
    #[bpaf(positional("URL"))]
    url: Option<String>,
}

fn parse_window_size(raw: String) -> Result<(f64, f64), String> {
    let (width, height) = raw
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{raw}'"))?;
    let width: f64 = width
        .trim()
        .parse()
        .map_err(|_| format!("invalid width '{width}'"))?;
    let height: f64 = height
        .trim()
        .parse()
        .map_err(|_| format!("invalid height '{height}'"))?;
    if width <= 0.0 || height <= 0.0 {
        return Err(format!("window size must be positive, got '{raw}'"));
    }
    Ok((width, height))
}

pub enum ArgumentParsingResult {
    Run(AppPreferences),
    Exit,
    ErrorParsing,
}

pub fn default_config_path() -> Option<PathBuf> {
    let mut dir = dirs::config_dir()?;
    dir.push("lostgpt");
    dir.push(CONFIG_FILE_NAME);
    Some(dir)
}

fn read_config_file(path: &Path) -> Result<ConfigFile, String> {
    let raw = fs::read_to_string(path).map_err(|e| format!("{}: {e}", path.display()))?;
    toml::from_str(&raw).map_err(|e| format!("{}: {e}", path.display()))
}

pub fn parse_command_line_arguments<S: AsRef<str>>(args: &[S]) -> ArgumentParsingResult {
    let args: Vec<&str> = args.iter().map(AsRef::as_ref).collect();
    let cmd_args = match cmd_args().run_inner(&*args) {
        Ok(cmd_args) => cmd_args,
        Err(ParseFailure::Stdout(doc, full)) => {
            println!("{}", doc.monochrome(full));
            return ArgumentParsingResult::Exit;
        },
        Err(ParseFailure::Completion(completion)) => {
            print!("{completion}");
            return ArgumentParsingResult::Exit;
        },
        Err(ParseFailure::Stderr(doc)) => {
            eprintln!("{}", doc.monochrome(true));
            return ArgumentParsingResult::ErrorParsing;
        },
    };

    let mut preferences = AppPreferences::default();

    // An explicit --config must exist; the default location is optional.
    let config_path = cmd_args.config.clone().or_else(default_config_path);
    if let Some(path) = config_path {
        if path.exists() {
            match read_config_file(&path) {
                Ok(config) => preferences.apply_config_file(config),
                Err(e) => {
                    eprintln!("Invalid preferences file {e}");
                    return ArgumentParsingResult::ErrorParsing;
                },
            }
        } else if cmd_args.config.is_some() {
            eprintln!("Preferences file {} does not exist", path.display());
            return ArgumentParsingResult::ErrorParsing;
        }
    }

    preferences.apply_cmd_args(cmd_args);
    ArgumentParsingResult::Run(preferences)
}
