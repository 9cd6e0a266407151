use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use axum::Router;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use super::handlers;
use super::handlers::probes::{healthz, livez};
use super::state::AppState;
use crate::conf::settings;
use crate::prelude::Result;

pub async fn build_routes() -> Result<Router> {
    let state = AppState::new().await?;
    Ok(routes(state, settings.max_upload_bytes))
}

pub fn routes(state: AppState, max_upload_bytes: usize) -> Router {
    let media = ServeDir::new(state.media.root());
    Router::new()
        .route(
            "/test/",
            get(handlers::items::page).post(handlers::items::create),
        )
        .route(
            "/delete/{id}/",
            get(handlers::items::delete).post(handlers::items::delete),
        )
        .route("/api/jobs/", get(handlers::jobs::list))
        .route("/healthz", get(healthz))
        .route("/livez", get(livez))
        .nest_service("/media", media)
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
pub(crate) mod testing {
    use std::{path::PathBuf, sync::Arc};

    use axum::{
        body::{to_bytes, Body},
        http::{Request, Response},
        Router,
    };
    use tempfile::TempDir;

    use crate::pkg::{
        internal::{
            adaptors::items::spec::ItemEntry,
            store::{memory::MemoryStore, ItemRepo},
            uploads::MediaStorage,
        },
        server::state::AppState,
    };

    pub(crate) struct TestApp {
        pub store: Arc<MemoryStore>,
        pub media_root: TempDir,
        body_limit: usize,
    }

    impl TestApp {
        pub fn new() -> Self {
            Self::with_body_limit(10 * 1024 * 1024)
        }

        pub fn with_body_limit(body_limit: usize) -> Self {
            TestApp {
                store: Arc::new(MemoryStore::new()),
                media_root: tempfile::tempdir().unwrap(),
                body_limit,
            }
        }

        /// A fresh router over the same store and media root.
        pub fn router(&self) -> Router {
            let state = AppState::from_parts(
                self.store.clone(),
                self.store.clone(),
                MediaStorage::new(self.media_root.path()),
            );
            super::routes(state, self.body_limit)
        }

        pub async fn items(&self) -> Vec<ItemEntry> {
            ItemRepo::list(self.store.as_ref()).await.unwrap()
        }

        pub fn media_path(&self, reference: &str) -> PathBuf {
            self.media_root.path().join(reference)
        }

        pub fn get(uri: &str) -> Request<Body> {
            Request::builder().uri(uri).body(Body::empty()).unwrap()
        }
    }

    pub(crate) async fn body_text(response: Response<Body>) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    const BOUNDARY: &str = "jobboard-test-boundary";

    /// Builds a `multipart/form-data` body with an optional description
    /// field and an optional `(file name, bytes)` image part.
    pub(crate) fn multipart(
        description: Option<&str>,
        image: Option<(&str, &[u8])>,
    ) -> (String, Vec<u8>) {
        let mut body = Vec::new();
        if let Some(description) = description {
            body.extend_from_slice(
                format!(
                    "--{}\r\nContent-Disposition: form-data; name=\"description\"\r\n\r\n{}\r\n",
                    BOUNDARY, description
                )
                .as_bytes(),
            );
        }
        if let Some((file_name, data)) = image {
            body.extend_from_slice(
                format!(
                    "--{}\r\nContent-Disposition: form-data; name=\"image\"; filename=\"{}\"\r\nContent-Type: application/octet-stream\r\n\r\n",
                    BOUNDARY, file_name
                )
                .as_bytes(),
            );
            body.extend_from_slice(data);
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());
        (
            format!("multipart/form-data; boundary={}", BOUNDARY),
            body,
        )
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use tower::ServiceExt;

    use super::testing::{body_text, multipart, TestApp};
    use crate::pkg::internal::forms::tests::png_bytes;

    #[tokio::test]
    async fn uploaded_images_are_served_from_media() {
        let app = TestApp::new();
        let png = png_bytes();
        let (content_type, body) = multipart(Some("served"), Some(("served.png", &png)));
        let request = axum::http::Request::builder()
            .method("POST")
            .uri("/test/")
            .header("content-type", content_type)
            .body(axum::body::Body::from(body))
            .unwrap();
        app.router().oneshot(request).await.unwrap();

        let response = app
            .router()
            .oneshot(TestApp::get("/media/uploads/served.png"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(bytes.to_vec(), png);
    }

    #[tokio::test]
    async fn unknown_media_is_not_found() {
        let app = TestApp::new();
        let response = app
            .router()
            .oneshot(TestApp::get("/media/uploads/missing.png"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn not_found_page_is_html() {
        let app = TestApp::new();
        let response = app
            .router()
            .oneshot(TestApp::get("/delete/5/"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(body_text(response).await.contains("No item matches id 5."));
    }
}
