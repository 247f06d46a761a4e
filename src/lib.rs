// SPDX-License-Identifier: MPL-2.0
//! `mars_gallery` is a small photo gallery built with the Iced GUI framework.
//!
//! It fetches a manifest of Mars rover photographs from a public HTTP endpoint
//! and renders them in a scrollable grid, with localized loading and error
//! states and a manual retry control.

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod media;
pub mod ui;
