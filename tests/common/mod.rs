//! Shared harness: a real router over a throwaway SQLite file, with the
//! session cookie carried between requests like a browser would.

#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{HeaderMap, Request, StatusCode, header},
};
use http_body_util::BodyExt;
use std::sync::Arc;
use tower::ServiceExt;
use watchlist::api::AppState;
use watchlist::config::{Config, generate_secret_key};
use watchlist::services::bootstrap;

pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_PASSWORD: &str = "x";

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    pub fn location(&self) -> Option<&str> {
        self.headers
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
    }

    pub fn assert_redirect(&self, to: &str) {
        assert_eq!(self.status, StatusCode::SEE_OTHER, "body: {}", self.body);
        assert_eq!(self.location(), Some(to));
    }
}

pub struct TestApp {
    pub state: Arc<AppState>,
    router: Router,
    cookie: Option<String>,
}

pub fn test_config() -> Config {
    let db_path =
        std::env::temp_dir().join(format!("watchlist-test-{}.db", uuid::Uuid::new_v4()));

    let mut config = Config::default();
    config.general.database_path = format!("sqlite:{}", db_path.display());
    config.security.secret_key = generate_secret_key();
    config.security.argon2_memory_cost_kib = 1024;
    config.security.argon2_time_cost = 1;
    config
}

/// App with no site owner and an empty catalog.
pub async fn spawn_empty_app() -> TestApp {
    let config = test_config();
    let state = watchlist::api::create_app_state_from_config(config, None)
        .await
        .expect("failed to create app state");
    let router = watchlist::api::router(state.clone()).expect("failed to build router");

    TestApp {
        state,
        router,
        cookie: None,
    }
}

/// App bootstrapped with the admin account and the seed catalog.
pub async fn spawn_app() -> TestApp {
    let app = spawn_empty_app().await;
    bootstrap::create_or_update_admin(
        app.state.store(),
        &app.state.config().security,
        ADMIN_USERNAME,
        ADMIN_PASSWORD,
    )
    .await
    .expect("failed to bootstrap admin");
    app
}

impl TestApp {
    async fn send(&mut self, mut request: Request<Body>) -> TestResponse {
        if let Some(cookie) = &self.cookie {
            request
                .headers_mut()
                .insert(header::COOKIE, cookie.parse().unwrap());
        }

        let response = self.router.clone().oneshot(request).await.unwrap();

        if let Some(set_cookie) = response.headers().get(header::SET_COOKIE) {
            let pair = set_cookie
                .to_str()
                .unwrap()
                .split(';')
                .next()
                .unwrap()
                .to_string();
            self.cookie = Some(pair);
        }

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();

        TestResponse {
            status,
            headers,
            body: String::from_utf8(bytes.to_vec()).unwrap(),
        }
    }

    pub async fn get(&mut self, uri: &str) -> TestResponse {
        self.send(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
    }

    /// `form` must already be urlencoded.
    pub async fn post(&mut self, uri: &str, form: &str) -> TestResponse {
        self.send(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(
                    header::CONTENT_TYPE,
                    mime::APPLICATION_WWW_FORM_URLENCODED.as_ref(),
                )
                .body(Body::from(form.to_string()))
                .unwrap(),
        )
        .await
    }

    pub async fn login(&mut self, username: &str, password: &str) -> TestResponse {
        self.post("/login", &format!("username={username}&password={password}"))
            .await
    }

    pub async fn login_as_admin(&mut self) {
        self.login(ADMIN_USERNAME, ADMIN_PASSWORD)
            .await
            .assert_redirect("/");
    }

    /// The `name=value` pair of the current session cookie.
    pub fn cookie(&self) -> Option<&str> {
        self.cookie.as_deref()
    }

    pub async fn movie_count(&self) -> u64 {
        self.state.store().count_movies().await.unwrap()
    }
}
