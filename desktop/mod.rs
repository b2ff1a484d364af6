/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Contains files specific to the desktop shell and its webviews.

pub mod app;
pub mod chrome;
pub mod cli;
pub mod event_loop;
pub mod layout;
pub mod location;
pub mod shortcuts;
pub mod tabs;
pub mod webview_controller;

#[cfg(test)]
mod tests;
