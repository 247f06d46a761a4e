// SPDX-License-Identifier: MPL-2.0
//! Photo gallery screen.
//!
//! The [`component`] owns the fetch lifecycle; [`loading`], [`grid`], and
//! [`error_state`] render its three phases.

pub mod component;
pub mod error_state;
pub mod grid;
pub mod loading;

pub use component::{Message, Phase, State, ViewEnv};
