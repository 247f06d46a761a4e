// SPDX-License-Identifier: MPL-2.0
//! End-to-end tests for the fetch-and-display flow.
//!
//! These drive the real HTTP client against a local mock server and feed its
//! results through the gallery state machine, the same wiring `App::update`
//! performs in production.

#[cfg(test)]
mod tests {
    use mars_gallery::api::PhotoApi;
    use mars_gallery::config::DEFAULT_GRID_COLUMNS;
    use mars_gallery::ui::gallery::{Message, State};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const MANIFEST: &str = concat!(
        r#"[{"id":"1","img_src":"http://x/a.jpg"},"#,
        r#"{"id":"2","img_src":"http://x/b.jpg"}]"#
    );

    async fn mock_photos(server: &MockServer, status: u16, body: &str) {
        Mock::given(method("GET"))
            .and(path("/photos"))
            .respond_with(ResponseTemplate::new(status).set_body_raw(body, "application/json"))
            .expect(1)
            .mount(server)
            .await;
    }

    /// Performs one fetch and feeds the outcome to the state machine, the way
    /// the task spawned by `State::fetch_task` does.
    async fn complete_fetch(api: &PhotoApi, state: &mut State) {
        let result = api.fetch_photos().await;
        let _ = state.handle_message(Message::PhotosFetched(result));
    }

    #[tokio::test]
    async fn successful_fetch_ends_in_ready_with_server_order() {
        let server = MockServer::start().await;
        mock_photos(&server, 200, MANIFEST).await;

        let api = PhotoApi::with_base_url(server.uri());
        let mut state = State::new(api.clone(), DEFAULT_GRID_COLUMNS);
        assert!(state.is_loading());

        complete_fetch(&api, &mut state).await;

        let photos = state.photos().expect("manifest should load");
        assert_eq!(photos.len(), 2);
        assert_eq!(photos[0].id, "1");
        assert_eq!(photos[0].img_src, "http://x/a.jpg");
        assert_eq!(photos[1].id, "2");
        assert_eq!(photos[1].img_src, "http://x/b.jpg");
    }

    #[tokio::test]
    async fn server_error_ends_in_failed_not_ready() {
        let server = MockServer::start().await;
        mock_photos(&server, 500, "Internal Server Error").await;

        let api = PhotoApi::with_base_url(server.uri());
        let mut state = State::new(api.clone(), DEFAULT_GRID_COLUMNS);

        complete_fetch(&api, &mut state).await;

        assert!(state.photos().is_none());
        let error = state.error().expect("state should be failed");
        assert!(error.details().contains("500"));
    }

    #[tokio::test]
    async fn retry_after_failure_recovers_when_server_does() {
        let server = MockServer::start().await;
        // First attempt fails, the mock is then replaced for the retry.
        mock_photos(&server, 503, "Service Unavailable").await;

        let api = PhotoApi::with_base_url(server.uri());
        let mut state = State::new(api.clone(), DEFAULT_GRID_COLUMNS);

        complete_fetch(&api, &mut state).await;
        assert!(state.error().is_some());

        server.reset().await;
        mock_photos(&server, 200, MANIFEST).await;

        let _ = state.handle_message(Message::Retry);
        assert!(state.is_loading());

        complete_fetch(&api, &mut state).await;
        assert_eq!(state.photo_count(), 2);
        assert!(state.error().is_none());
    }

    #[tokio::test]
    async fn malformed_manifest_ends_in_failed() {
        let server = MockServer::start().await;
        mock_photos(&server, 200, r#"{"unexpected":"object"}"#).await;

        let api = PhotoApi::with_base_url(server.uri());
        let mut state = State::new(api.clone(), DEFAULT_GRID_COLUMNS);

        complete_fetch(&api, &mut state).await;

        assert!(state.photos().is_none());
        assert!(state.error().is_some());
    }

    #[tokio::test]
    async fn empty_manifest_ends_in_ready_with_no_cards() {
        let server = MockServer::start().await;
        mock_photos(&server, 200, "[]").await;

        let api = PhotoApi::with_base_url(server.uri());
        let mut state = State::new(api.clone(), DEFAULT_GRID_COLUMNS);

        complete_fetch(&api, &mut state).await;

        assert_eq!(state.photo_count(), 0);
        assert!(state.error().is_none());
        assert!(!state.is_loading());
    }
}
