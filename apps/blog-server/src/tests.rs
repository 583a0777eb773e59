use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use async_trait::async_trait;
use serde_json::{Value, json};

use inkzenith_core::domain::{AdminAccount, Post, PostDraft, PostId};
use inkzenith_core::ports::{PasswordService, PostQuery, PostStore};
use inkzenith_core::{StoreError, UiConfig};
use inkzenith_infra::{
    Argon2PasswordService, InMemoryPostStore, JwtConfig, JwtTokenService, LocalIdentityService,
};

use crate::handlers;
use crate::state::AppState;

const ADMIN_EMAIL: &str = "admin@inkzenith.dev";
const ADMIN_PASSWORD: &str = "open-sesame";

async fn state_with_posts(count: usize) -> (AppState, Arc<InMemoryPostStore>) {
    let store = Arc::new(InMemoryPostStore::new());
    for i in 1..=count {
        store
            .insert(PostDraft::new(format!("Post {i}"), format!("<p>Body {i}</p>")))
            .await
            .unwrap();
    }

    let passwords = Arc::new(Argon2PasswordService::new());
    let hash = passwords.hash(ADMIN_PASSWORD).unwrap();
    let identity = LocalIdentityService::new(
        passwords,
        Arc::new(JwtTokenService::new(JwtConfig::default())),
    )
    .with_account(AdminAccount::new(ADMIN_EMAIL.to_string(), hash));

    let state = AppState::from_parts(store.clone(), Arc::new(identity), UiConfig::default());
    (state, store)
}

/// In-memory store that can be switched into a connection outage.
#[derive(Default)]
struct OutageStore {
    inner: InMemoryPostStore,
    down: AtomicBool,
    queries: AtomicUsize,
}

impl OutageStore {
    fn check(&self) -> Result<(), StoreError> {
        if self.down.load(Ordering::SeqCst) {
            Err(StoreError::Connection("connection refused".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl PostStore for OutageStore {
    async fn query(&self, query: &PostQuery) -> Result<Vec<Post>, StoreError> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        self.inner.query(query).await
    }

    async fn find_by_title(&self, title: &str) -> Result<Vec<Post>, StoreError> {
        self.check()?;
        self.inner.find_by_title(title).await
    }

    async fn get(&self, id: &PostId) -> Result<Option<Post>, StoreError> {
        self.check()?;
        self.inner.get(id).await
    }

    async fn insert(&self, draft: PostDraft) -> Result<Post, StoreError> {
        self.check()?;
        self.inner.insert(draft).await
    }

    async fn update(&self, id: &PostId, draft: PostDraft) -> Result<Post, StoreError> {
        self.check()?;
        self.inner.update(id, draft).await
    }

    async fn delete(&self, id: &PostId) -> Result<(), StoreError> {
        self.check()?;
        self.inner.delete(id).await
    }
}

macro_rules! app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($state.clone()))
                .configure(handlers::configure_routes),
        )
        .await
    };
}

macro_rules! call_json {
    ($app:expr, $req:expr) => {{
        let body: Value = test::call_and_read_body_json(&$app, $req.to_request()).await;
        body
    }};
}

fn titles(body: &Value) -> Vec<String> {
    body["data"]["posts"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["title"].as_str().unwrap().to_string())
        .collect()
}

#[actix_rt::test]
async fn test_health_check() {
    let (state, _) = state_with_posts(0).await;
    let app = app!(state);

    let body = call_json!(app, test::TestRequest::get().uri("/api/health"));
    assert_eq!(body["status"], "ok");
    assert_eq!(body["mounted_views"], 0);

    let resp = test::call_service(&app, test::TestRequest::get().uri("/api/health/ready").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_rt::test]
async fn test_home_pages_forward_and_back() {
    let (state, _) = state_with_posts(7).await;
    let app = app!(state);

    let view = call_json!(app, test::TestRequest::post().uri("/api/views"));
    assert_eq!(view["theme"], "light");
    let view_id = view["view_id"].as_str().unwrap().to_string();

    let first = call_json!(app, test::TestRequest::get().uri(&format!("/api/views/{view_id}/home")));
    assert_eq!(titles(&first).len(), 6);
    assert_eq!(titles(&first)[0], "Post 7");
    assert_eq!(first["data"]["is_first_page"], true);
    assert_eq!(first["data"]["is_last_page"], false);

    let second = call_json!(app, test::TestRequest::post().uri(&format!("/api/views/{view_id}/home/next")));
    assert_eq!(titles(&second), vec!["Post 1"]);
    assert_eq!(second["data"]["page"], 2);
    assert_eq!(second["data"]["is_last_page"], true);

    let stuck = call_json!(app, test::TestRequest::post().uri(&format!("/api/views/{view_id}/home/next")));
    assert_eq!(stuck["message"], "skipped");
    assert_eq!(titles(&stuck), vec!["Post 1"]);

    let back = call_json!(app, test::TestRequest::post().uri(&format!("/api/views/{view_id}/home/previous")));
    assert_eq!(titles(&back), titles(&first));
    assert_eq!(back["data"]["is_first_page"], true);
}

#[actix_rt::test]
async fn test_read_post_by_encoded_title() {
    let (state, store) = state_with_posts(0).await;
    store
        .insert(PostDraft::new("Hello World", "<p>hi</p>"))
        .await
        .unwrap();
    let app = app!(state);

    let view = call_json!(app, test::TestRequest::post().uri("/api/views"));
    let view_id = view["view_id"].as_str().unwrap().to_string();

    let found = call_json!(
        app,
        test::TestRequest::get().uri(&format!("/api/views/{view_id}/posts/Hello%20World"))
    );
    assert_eq!(found["found"], true);
    assert_eq!(found["post"]["reader_path"], "/blog/Hello%20World");

    let missing = call_json!(
        app,
        test::TestRequest::get().uri(&format!("/api/views/{view_id}/posts/Nope"))
    );
    assert_eq!(missing["found"], false);

    // Not found by title is a page state, not an error toast.
    let toasts = call_json!(app, test::TestRequest::get().uri(&format!("/api/views/{view_id}/toasts")));
    assert!(toasts.as_array().unwrap().is_empty());
}

#[actix_rt::test]
async fn test_unknown_view_is_not_found() {
    let (state, _) = state_with_posts(0).await;
    let app = app!(state);

    let uri = format!("/api/views/{}/home", uuid::Uuid::new_v4());
    let resp = test::call_service(&app, test::TestRequest::get().uri(&uri).to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_rt::test]
async fn test_admin_routes_require_session() {
    let (state, _) = state_with_posts(1).await;
    let app = app!(state);

    let view = call_json!(app, test::TestRequest::post().uri("/api/views"));
    let view_id = view["view_id"].as_str().unwrap().to_string();

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri(&format!("/api/views/{view_id}/dashboard"))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri(&format!("/api/views/{view_id}/dashboard"))
            .insert_header(("Authorization", "Bearer not-a-token"))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_rt::test]
async fn test_login_failure_raises_toast() {
    let (state, _) = state_with_posts(0).await;
    let app = app!(state);

    let view = call_json!(app, test::TestRequest::post().uri("/api/views"));
    let view_id = view["view_id"].as_str().unwrap().to_string();

    let resp = test::call_service(
        &app,
        test::TestRequest::post()
            .uri(&format!("/api/auth/login?view={view_id}"))
            .set_json(json!({ "email": ADMIN_EMAIL, "password": "wrong" }))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let toasts = call_json!(app, test::TestRequest::get().uri(&format!("/api/views/{view_id}/toasts")));
    assert_eq!(toasts[0]["kind"], "error");
    assert_eq!(toasts[0]["message"], "Failed to login. Please check your credentials.");

    let toast_id = toasts[0]["id"].as_u64().unwrap();
    let uri = format!("/api/views/{view_id}/toasts/{toast_id}");
    let resp = test::call_service(&app, test::TestRequest::delete().uri(&uri).to_request()).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    let resp = test::call_service(&app, test::TestRequest::delete().uri(&uri).to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

macro_rules! sign_in {
    ($app:expr) => {{
        let body = call_json!(
            $app,
            test::TestRequest::post()
                .uri("/api/auth/login")
                .set_json(json!({ "email": ADMIN_EMAIL, "password": ADMIN_PASSWORD }))
        );
        assert_eq!(body["token_type"], "Bearer");
        format!("Bearer {}", body["access_token"].as_str().unwrap())
    }};
}

#[actix_rt::test]
async fn test_dashboard_search_and_delete() {
    let (state, store) = state_with_posts(12).await;
    let app = app!(state);
    let bearer = sign_in!(app);

    let view = call_json!(app, test::TestRequest::post().uri("/api/views"));
    let view_id = view["view_id"].as_str().unwrap().to_string();
    let admin = |req: test::TestRequest| req.insert_header(("Authorization", bearer.clone()));

    let me = call_json!(app, admin(test::TestRequest::get().uri("/api/auth/me")));
    assert_eq!(me["email"], ADMIN_EMAIL);

    let board = call_json!(
        app,
        admin(test::TestRequest::post().uri(&format!("/api/views/{view_id}/dashboard")))
    );
    assert_eq!(titles(&board).len(), 10);
    assert_eq!(board["data"]["searching"], false);

    let blank = call_json!(
        app,
        admin(test::TestRequest::post().uri(&format!("/api/views/{view_id}/dashboard/search")))
            .set_json(json!({ "query": "   " }))
    );
    assert_eq!(blank["message"], "skipped");
    assert_eq!(blank["data"]["searching"], false);

    let found = call_json!(
        app,
        admin(test::TestRequest::post().uri(&format!("/api/views/{view_id}/dashboard/search")))
            .set_json(json!({ "query": "body 11" }))
    );
    assert_eq!(found["data"]["query"], "body 11");
    assert_eq!(titles(&found), vec!["Post 11"]);
    let target = found["data"]["posts"][0]["id"].as_str().unwrap().to_string();

    let prompt = call_json!(
        app,
        admin(test::TestRequest::post().uri(&format!(
            "/api/views/{view_id}/dashboard/delete/{target}"
        )))
    );
    assert_eq!(prompt["data"]["delete_prompt"]["post_id"], target.as_str());
    assert_eq!(prompt["data"]["delete_prompt"]["title"], "Delete Blog Post");

    let deleted = call_json!(
        app,
        admin(test::TestRequest::post().uri(&format!("/api/views/{view_id}/dashboard/delete/confirm")))
    );
    assert_eq!(deleted["success"], true);
    assert!(titles(&deleted).is_empty());
    assert!(deleted["data"].get("delete_prompt").is_none());
    assert_eq!(store.len().await, 11);

    let cleared = call_json!(
        app,
        admin(test::TestRequest::delete().uri(&format!("/api/views/{view_id}/dashboard/search")))
    );
    assert_eq!(cleared["data"]["searching"], false);
    assert!(!titles(&cleared).contains(&"Post 11".to_string()));
}

#[actix_rt::test]
async fn test_editor_create_flow() {
    let (state, store) = state_with_posts(0).await;
    let app = app!(state);
    let bearer = sign_in!(app);

    let view = call_json!(app, test::TestRequest::post().uri("/api/views"));
    let view_id = view["view_id"].as_str().unwrap().to_string();
    let admin = |req: test::TestRequest| req.insert_header(("Authorization", bearer.clone()));

    let opened = call_json!(
        app,
        admin(test::TestRequest::post().uri(&format!("/api/views/{view_id}/editor")))
    );
    assert_eq!(opened["data"]["mode"], "create");
    assert_eq!(opened["data"]["loaded"], true);

    let rejected = call_json!(
        app,
        admin(test::TestRequest::post().uri(&format!("/api/views/{view_id}/editor/submit")))
    );
    assert_eq!(rejected["success"], false);
    assert!(store.is_empty().await);

    call_json!(
        app,
        admin(test::TestRequest::put().uri(&format!("/api/views/{view_id}/editor/draft")))
            .set_json(json!({ "title": "", "content": "<p>First!</p>" }))
    );
    let saved = call_json!(
        app,
        admin(test::TestRequest::post().uri(&format!("/api/views/{view_id}/editor/submit")))
    );
    assert_eq!(saved["success"], true);
    assert_eq!(saved["data"]["navigate_to"], "/admin/dashboard");
    assert_eq!(store.len().await, 1);

    let toasts = call_json!(app, test::TestRequest::get().uri(&format!("/api/views/{view_id}/toasts")));
    let messages: Vec<_> = toasts
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["message"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(messages, vec!["Content is required.", "New blog post created!"]);

    let resp = test::call_service(
        &app,
        admin(test::TestRequest::post().uri(&format!("/api/views/{view_id}/editor/submit"))).to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
}

#[actix_rt::test]
async fn test_editor_missing_post_returns_to_dashboard() {
    let (state, _) = state_with_posts(0).await;
    let app = app!(state);
    let bearer = sign_in!(app);

    let view = call_json!(app, test::TestRequest::post().uri("/api/views"));
    let view_id = view["view_id"].as_str().unwrap().to_string();

    let body = call_json!(
        app,
        test::TestRequest::post()
            .uri(&format!("/api/views/{view_id}/editor/gone"))
            .insert_header(("Authorization", bearer.clone()))
    );
    assert_eq!(body["data"]["mode"], "edit");
    assert_eq!(body["data"]["navigate_to"], "/admin/dashboard");
}

#[actix_rt::test]
async fn test_home_reports_store_outage_and_recovers() {
    let store = Arc::new(OutageStore::default());
    store
        .inner
        .insert(PostDraft::new("Survivor", "<p>still here</p>"))
        .await
        .unwrap();
    store.down.store(true, Ordering::SeqCst);

    let (base, _) = state_with_posts(0).await;
    let state = AppState::from_parts(store.clone(), base.identity.clone(), UiConfig::default());
    let app = app!(state);

    let view = call_json!(app, test::TestRequest::post().uri("/api/views"));
    let view_id = view["view_id"].as_str().unwrap().to_string();
    let home = format!("/api/views/{view_id}/home");

    let failed = call_json!(app, test::TestRequest::get().uri(&home));
    assert_eq!(failed["success"], false);
    assert_eq!(failed["message"], "failed");
    assert!(titles(&failed).is_empty());

    let next = call_json!(app, test::TestRequest::post().uri(&format!("{home}/next")));
    assert_eq!(next["success"], false);

    let toasts = call_json!(app, test::TestRequest::get().uri(&format!("/api/views/{view_id}/toasts")));
    assert_eq!(toasts[0]["kind"], "error");

    // The failed list is not kept: the next visit asks the store again.
    store.down.store(false, Ordering::SeqCst);
    let before = store.queries.load(Ordering::SeqCst);
    let recovered = call_json!(app, test::TestRequest::get().uri(&home));
    assert!(store.queries.load(Ordering::SeqCst) > before);
    assert_eq!(recovered["success"], true);
    assert_eq!(titles(&recovered), vec!["Survivor"]);
}
