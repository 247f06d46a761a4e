// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based
//! architecture with the Elm-style "state down, messages up" pattern.
//!
//! - [`gallery`] - The photo gallery screen and its fetch lifecycle
//! - [`components`] - Reusable UI components (error display)
//! - [`widgets`] - Custom Iced widgets (animated spinner)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`icons`] - Embedded PNG icons (placeholder, broken image)

pub mod components;
pub mod design_tokens;
pub mod gallery;
pub mod icons;
pub mod styles;
pub mod widgets;
