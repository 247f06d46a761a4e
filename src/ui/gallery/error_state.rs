// SPDX-License-Identifier: MPL-2.0
//! Failure panel shown when the manifest fetch fails.

use crate::i18n::fluent::I18n;
use crate::ui::components::error_display::{DetailLabels, FailurePanel};
use crate::ui::gallery::component::Message;
use iced::Element;

/// State of the failure panel: the technical details of the collapsed fetch
/// failure and whether they are expanded.
#[derive(Debug, Clone)]
pub struct State {
    details: String,
    show_details: bool,
}

impl State {
    #[must_use]
    pub fn new(details: String) -> Self {
        Self {
            details,
            show_details: false,
        }
    }

    pub fn toggle_details(&mut self) {
        self.show_details = !self.show_details;
    }

    #[must_use]
    pub fn details(&self) -> &str {
        &self.details
    }

    #[must_use]
    pub fn show_details(&self) -> bool {
        self.show_details
    }
}

/// Renders the failure message with the retry control.
pub fn view<'a>(state: &State, i18n: &I18n) -> Element<'a, Message> {
    FailurePanel::new(
        i18n.tr("gallery-load-failed"),
        i18n.tr("gallery-load-failed-hint"),
        i18n.tr("gallery-retry"),
        Message::Retry,
    )
    .details(
        state.details(),
        state.show_details(),
        Message::ToggleErrorDetails,
        DetailLabels {
            show: i18n.tr("error-show-details"),
            hide: i18n.tr("error-hide-details"),
            heading: i18n.tr("error-details-heading"),
        },
    )
    .view()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_details_flips_state() {
        let mut state = State::new("HTTP status: 500".into());
        assert!(!state.show_details());
        state.toggle_details();
        assert!(state.show_details());
        state.toggle_details();
        assert!(!state.show_details());
    }

    #[test]
    fn details_are_preserved_verbatim() {
        let state = State::new("connection refused".into());
        assert_eq!(state.details(), "connection refused");
    }
}
