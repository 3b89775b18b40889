// SPDX-License-Identifier: MPL-2.0
//! `muvi` is a small movie catalog browser built with the Iced GUI framework.
//!
//! It loads a static catalog of movies (bundled, from a file, or over HTTP),
//! renders them as a card grid, and lets the user filter by title, genre, and
//! rating bucket and keep a session watchlist.

#![doc(html_root_url = "https://docs.rs/muvi/0.2.0")]

pub mod app;
pub mod catalog;
pub mod domain;
pub mod error;
pub mod ui;
