// SPDX-License-Identifier: MPL-2.0
//! Downloads individual photo images.

use crate::error::{Error, Result};
use tracing::{debug, warn};

/// Fetches the image bytes behind a photo URL.
///
/// Only transfers the encoded bytes; decoding happens in the image widget.
/// Failures are reported per photo, so one broken image never takes down the
/// rest of the grid.
pub async fn fetch_image(client: reqwest::Client, url: String) -> Result<Vec<u8>> {
    debug!(%url, "requesting photo image");

    let response = client.get(&url).send().await.map_err(|e| {
        warn!(%url, error = %e, "photo image request failed");
        Error::Fetch(e.to_string())
    })?;

    let status = response.status();
    if !status.is_success() {
        warn!(%url, %status, "photo image request rejected");
        return Err(Error::Fetch(format!("HTTP status: {status}")));
    }

    let bytes = response.bytes().await.map_err(|e| {
        warn!(%url, error = %e, "photo image body could not be read");
        Error::Fetch(e.to_string())
    })?;

    debug!(%url, len = bytes.len(), "photo image received");
    Ok(bytes.to_vec())
}
