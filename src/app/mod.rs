// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires together localization, persisted preferences, and
//! the gallery component, and translates top-level messages into component
//! updates. Startup policy (window sizing, preference clamping, the initial
//! fetch) lives here so user-facing behavior is easy to audit in one place.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::api::PhotoApi;
use crate::config;
use crate::i18n::fluent::I18n;
use crate::ui::gallery;
use iced::{Element, Subscription, Task, Theme};
use std::fmt;

pub const WINDOW_DEFAULT_HEIGHT: u32 = 650;
pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const MIN_WINDOW_HEIGHT: u32 = 360;
pub const MIN_WINDOW_WIDTH: u32 = 480;

/// Root Iced application state bridging the gallery, localization, and
/// persisted preferences.
pub struct App {
    pub i18n: I18n,
    gallery: gallery::State,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("is_loading", &self.gallery.is_loading())
            .field("photo_count", &self.gallery.photo_count())
            .finish()
    }
}

/// Ensures the grid-column preference stays inside the supported range so
/// persisted configs cannot request nonsensical layouts.
fn clamp_grid_columns(value: u16) -> u16 {
    value.clamp(config::MIN_GRID_COLUMNS, config::MAX_GRID_COLUMNS)
}

/// Builds the window settings.
pub fn window_settings() -> iced::window::Settings {
    iced::window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..iced::window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            gallery: gallery::State::new(PhotoApi::new(), config::DEFAULT_GRID_COLUMNS),
        }
    }
}

impl App {
    /// Initializes application state and kicks off the initial manifest
    /// fetch, so the first frame already renders the loading phase.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();
        let i18n = I18n::new(flags.lang, &config);

        let columns = clamp_grid_columns(
            config.grid_columns.unwrap_or(config::DEFAULT_GRID_COLUMNS),
        );
        let gallery = gallery::State::new(PhotoApi::new(), columns);
        let task = gallery.fetch_task().map(Message::Gallery);

        (App { i18n, gallery }, task)
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.gallery.is_loading())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Gallery(gallery_message) => {
                update::handle_gallery_message(&mut self.gallery, gallery_message)
            }
            Message::Tick(_instant) => update::handle_tick(&mut self.gallery),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            gallery: &self.gallery,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Photo;
    use crate::error::Error;
    use std::fs;
    use std::sync::{Mutex, OnceLock};
    use tempfile::tempdir;

    fn config_env_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }

    fn with_temp_config_dir<F>(test: F)
    where
        F: FnOnce(&std::path::Path),
    {
        let _guard = config_env_lock().lock().expect("failed to lock mutex");
        let temp_dir = tempdir().expect("failed to create temp dir");
        let previous = std::env::var("XDG_CONFIG_HOME").ok();
        std::env::set_var("XDG_CONFIG_HOME", temp_dir.path());

        test(temp_dir.path());

        if let Some(value) = previous {
            std::env::set_var("XDG_CONFIG_HOME", value);
        } else {
            std::env::remove_var("XDG_CONFIG_HOME");
        }
    }

    fn sample_photos() -> Vec<Photo> {
        vec![
            Photo {
                id: "1".to_string(),
                img_src: "http://x/a.jpg".to_string(),
            },
            Photo {
                id: "2".to_string(),
                img_src: "http://x/b.jpg".to_string(),
            },
        ]
    }

    #[test]
    fn new_starts_loading() {
        with_temp_config_dir(|_| {
            let (app, _task) = App::new(Flags::default());
            assert!(app.gallery.is_loading());
            assert_eq!(app.gallery.photo_count(), 0);
        });
    }

    #[test]
    fn update_photos_fetched_ok_reaches_ready() {
        let mut app = App::default();

        let _ = app.update(Message::Gallery(gallery::Message::PhotosFetched(Ok(
            sample_photos(),
        ))));

        assert!(!app.gallery.is_loading());
        let photos = app.gallery.photos().expect("photos should be present");
        assert_eq!(photos[0].id, "1");
        assert_eq!(photos[1].id, "2");
    }

    #[test]
    fn update_photos_fetched_err_reaches_failed() {
        let mut app = App::default();

        let _ = app.update(Message::Gallery(gallery::Message::PhotosFetched(Err(
            Error::Fetch("HTTP status: 500".into()),
        ))));

        assert!(app.gallery.error().is_some());
        assert!(app.gallery.photos().is_none());
    }

    #[test]
    fn retry_cycles_back_to_loading() {
        let mut app = App::default();
        let _ = app.update(Message::Gallery(gallery::Message::PhotosFetched(Err(
            Error::Fetch("boom".into()),
        ))));

        let _ = app.update(Message::Gallery(gallery::Message::Retry));

        assert!(app.gallery.is_loading());
    }

    #[test]
    fn tick_advances_spinner_while_loading() {
        let mut app = App::default();
        let before = app.gallery.spinner_rotation();

        let _ = app.update(Message::Tick(std::time::Instant::now()));

        assert!(app.gallery.spinner_rotation() > before);
    }

    #[test]
    fn grid_columns_preference_is_clamped() {
        with_temp_config_dir(|config_root| {
            let settings_dir = config_root.join("MarsGallery");
            fs::create_dir_all(&settings_dir).expect("dir");
            fs::write(settings_dir.join("settings.toml"), "grid_columns = 99\n")
                .expect("write config");

            let (app, _task) = App::new(Flags::default());

            assert_eq!(app.gallery.grid_columns(), config::MAX_GRID_COLUMNS);
        });
    }

    #[test]
    fn lang_flag_overrides_config_language() {
        with_temp_config_dir(|config_root| {
            let settings_dir = config_root.join("MarsGallery");
            fs::create_dir_all(&settings_dir).expect("dir");
            fs::write(settings_dir.join("settings.toml"), "language = \"en-US\"\n")
                .expect("write config");

            let (app, _task) = App::new(Flags {
                lang: Some("fr".to_string()),
            });

            assert_eq!(app.i18n.current_locale().to_string(), "fr");
            assert_eq!(app.title(), "Photos de Mars");
        });
    }

    #[test]
    fn title_is_localized_app_name() {
        with_temp_config_dir(|_| {
            let (app, _task) = App::new(Flags {
                lang: Some("en-US".to_string()),
            });
            assert_eq!(app.title(), "Mars Photos");
        });
    }

    #[test]
    fn subscription_is_idle_once_ready() {
        let mut app = App::default();
        assert!(app.gallery.is_loading());

        let _ = app.update(Message::Gallery(gallery::Message::PhotosFetched(Ok(
            Vec::new(),
        ))));

        // The gating input to the tick subscription is the loading flag.
        assert!(!app.gallery.is_loading());
    }
}
