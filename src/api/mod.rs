// SPDX-License-Identifier: MPL-2.0
//! HTTP client for the photo manifest endpoint.
//!
//! The application makes exactly one kind of request: an unconditional GET
//! against a fixed base URL, returning a JSON array of photo records. There
//! is no pagination, no authentication, and no retry policy here; a retry is
//! always an explicit re-invocation by the caller.

pub mod photo;

pub use photo::Photo;

use crate::error::{Error, Result};
use tracing::{debug, warn};

/// Base URL of the photo service.
pub const DEFAULT_BASE_URL: &str = "https://android-kotlin-fun-mars-server.appspot.com";

/// Path of the manifest listing every available photo.
const PHOTOS_PATH: &str = "/photos";

const USER_AGENT: &str = concat!("MarsGallery/", env!("CARGO_PKG_VERSION"));

/// Client for the photo service.
///
/// Cheap to clone; the underlying HTTP client is reference-counted and its
/// connection pool is shared between clones, including the thumbnail loader.
#[derive(Debug, Clone)]
pub struct PhotoApi {
    client: reqwest::Client,
    base_url: String,
}

impl Default for PhotoApi {
    fn default() -> Self {
        Self::new()
    }
}

impl PhotoApi {
    /// Creates a client against the production photo service.
    #[must_use]
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Creates a client against a custom base URL (used by tests).
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(USER_AGENT)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// The HTTP client shared with the thumbnail loader.
    #[must_use]
    pub fn client(&self) -> reqwest::Client {
        self.client.clone()
    }

    /// Fetches the photo manifest.
    ///
    /// Returns the parsed records in server order. Any connection error,
    /// non-2xx status, or deserialization failure is reported as
    /// [`Error::Fetch`].
    pub async fn fetch_photos(&self) -> Result<Vec<Photo>> {
        let url = format!("{}{}", self.base_url, PHOTOS_PATH);
        debug!(%url, "requesting photo manifest");

        let response = self.client.get(&url).send().await.map_err(|e| {
            warn!(error = %e, "photo manifest request failed");
            Error::Fetch(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "photo manifest request rejected");
            return Err(Error::Fetch(format!("HTTP status: {status}")));
        }

        let photos: Vec<Photo> = response.json().await.map_err(|e| {
            warn!(error = %e, "photo manifest body is not a valid photo list");
            Error::Fetch(e.to_string())
        })?;

        debug!(%status, count = photos.len(), "photo manifest received");
        Ok(photos)
    }
}
