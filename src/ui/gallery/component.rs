// SPDX-License-Identifier: MPL-2.0
//! Gallery state machine.
//!
//! Owns the manifest fetch lifecycle (`Loading` → `Ready` | `Failed`), the
//! thumbnail cache, and the retry transition. The fetch error is absorbed
//! here and turned into the `Failed` phase; nothing below this component ever
//! sees a raw error.

use crate::api::{Photo, PhotoApi};
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::media::{remote, ThumbnailCache};
use crate::ui::gallery::{error_state, grid, loading};
use iced::{Element, Task};

/// Spinner advance per animation tick, in radians.
const SPINNER_SPEED: f32 = 0.1;

/// Messages handled by the gallery component.
#[derive(Debug, Clone)]
pub enum Message {
    /// Result of the manifest fetch (initial or retry).
    PhotosFetched(Result<Vec<Photo>, Error>),
    /// Retry control pressed on the failure panel.
    Retry,
    /// Result of a single photo image download.
    ThumbnailFetched {
        id: String,
        result: Result<Vec<u8>, Error>,
    },
    /// Toggle the technical details on the failure panel.
    ToggleErrorDetails,
}

/// Where the gallery currently is in its fetch lifecycle.
///
/// There are no intermediate states: the component moves from `Loading` to
/// exactly one of `Ready` or `Failed`, and only `Failed` can re-enter
/// `Loading` (via retry). The cycle can repeat indefinitely.
#[derive(Debug)]
pub enum Phase {
    /// Manifest fetch in flight.
    Loading,
    /// Manifest received; photos are kept in server order.
    Ready(Vec<Photo>),
    /// Manifest fetch failed. Any previously fetched photos are gone.
    Failed(error_state::State),
}

/// Gallery component state.
#[derive(Debug)]
pub struct State {
    api: PhotoApi,
    phase: Phase,
    thumbnails: ThumbnailCache,
    spinner_rotation: f32,
    grid_columns: u16,
}

/// Environment required to render the gallery.
pub struct ViewEnv<'a> {
    pub i18n: &'a I18n,
}

impl State {
    /// Creates the gallery in its `Loading` phase. The caller is expected to
    /// run [`State::fetch_task`] right away.
    #[must_use]
    pub fn new(api: PhotoApi, grid_columns: u16) -> Self {
        Self {
            api,
            phase: Phase::Loading,
            thumbnails: ThumbnailCache::with_defaults(),
            spinner_rotation: 0.0,
            grid_columns,
        }
    }

    /// Task performing the manifest fetch.
    ///
    /// Issued once at startup and again on every retry; never more than one
    /// in flight, since retry is only reachable from the `Failed` phase.
    pub fn fetch_task(&self) -> Task<Message> {
        let api = self.api.clone();
        Task::perform(
            async move { api.fetch_photos().await },
            Message::PhotosFetched,
        )
    }

    pub fn handle_message(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::PhotosFetched(Ok(photos)) => {
                let task = self.thumbnail_tasks(&photos);
                self.phase = Phase::Ready(photos);
                self.spinner_rotation = 0.0;
                task
            }
            Message::PhotosFetched(Err(error)) => {
                self.phase = Phase::Failed(error_state::State::new(error.to_string()));
                self.spinner_rotation = 0.0;
                Task::none()
            }
            Message::Retry => {
                if matches!(self.phase, Phase::Failed(_)) {
                    self.phase = Phase::Loading;
                    self.fetch_task()
                } else {
                    Task::none()
                }
            }
            Message::ThumbnailFetched { id, result } => {
                match result {
                    Ok(bytes) => self.thumbnails.insert_ready(&id, bytes),
                    Err(_) => self.thumbnails.mark_failed(&id),
                }
                Task::none()
            }
            Message::ToggleErrorDetails => {
                if let Phase::Failed(error) = &mut self.phase {
                    error.toggle_details();
                }
                Task::none()
            }
        }
    }

    /// Advances the spinner animation. Driven by a tick subscription that is
    /// only active while loading.
    pub fn tick(&mut self) {
        if matches!(self.phase, Phase::Loading) {
            self.spinner_rotation += SPINNER_SPEED;
            if self.spinner_rotation > std::f32::consts::TAU {
                self.spinner_rotation -= std::f32::consts::TAU;
            }
        }
    }

    pub fn view<'a>(&'a self, env: ViewEnv<'a>) -> Element<'a, Message> {
        match &self.phase {
            Phase::Loading => loading::view(env.i18n, self.spinner_rotation),
            Phase::Ready(photos) => {
                grid::view(photos, &self.thumbnails, self.grid_columns, env.i18n)
            }
            Phase::Failed(error) => error_state::view(error, env.i18n),
        }
    }

    #[must_use]
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Loading)
    }

    /// The fetched photos, in server order, if the last fetch succeeded.
    #[must_use]
    pub fn photos(&self) -> Option<&[Photo]> {
        match &self.phase {
            Phase::Ready(photos) => Some(photos),
            _ => None,
        }
    }

    #[must_use]
    pub fn photo_count(&self) -> usize {
        self.photos().map_or(0, <[Photo]>::len)
    }

    #[must_use]
    pub fn error(&self) -> Option<&error_state::State> {
        match &self.phase {
            Phase::Failed(error) => Some(error),
            _ => None,
        }
    }

    #[must_use]
    pub fn grid_columns(&self) -> u16 {
        self.grid_columns
    }

    #[must_use]
    pub fn spinner_rotation(&self) -> f32 {
        self.spinner_rotation
    }

    #[must_use]
    pub fn thumbnails(&self) -> &ThumbnailCache {
        &self.thumbnails
    }

    /// One download task per photo that is not already tracked by the cache.
    fn thumbnail_tasks(&mut self, photos: &[Photo]) -> Task<Message> {
        let client = self.api.client();
        let mut tasks = Vec::new();

        for photo in photos {
            if !self.thumbnails.begin(&photo.id) {
                continue;
            }
            let id = photo.id.clone();
            let url = photo.img_src.clone();
            tasks.push(Task::perform(
                remote::fetch_image(client.clone(), url),
                move |result| Message::ThumbnailFetched {
                    id: id.clone(),
                    result,
                },
            ));
        }

        Task::batch(tasks)
    }
}
