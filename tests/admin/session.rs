use crate::site_harness::site_harness;
use sdherbs::admin::GuardView;
use sdherbs::api::CredentialStore;
use sdherbs::navigation::Route;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn login_then_open_uses_the_stored_token() {
    let mut h = site_harness().await;
    Mock::given(method("POST"))
        .and(path("/api/admin/login"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"token": "jwt-abc"})),
        )
        .mount(&h.server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/admin/me"))
        .and(header("authorization", "Bearer jwt-abc"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&h.server)
        .await;

    let router = h.site.router();
    let landing = h
        .site
        .admin_auth()
        .login("admin@sdherbs.com", "s3cret", router.as_ref())
        .await
        .unwrap();
    assert_eq!(landing, "/admin/dashboard");

    h.site.refresh_session();
    assert!(h.site.client().has_token());

    let page = h.site.render_current().await;
    assert_eq!(page.view, GuardView::Content);
    assert_eq!(router.entries(), vec!["/", "/admin/dashboard"]);

    let stored = CredentialStore::new(h.site.config().credentials_path());
    assert_eq!(stored.token().as_deref(), Some("jwt-abc"));
}

#[tokio::test]
async fn logout_forgets_the_session_and_lands_on_login() {
    let mut h = site_harness().await;
    Mock::given(method("POST"))
        .and(path("/api/admin/login"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"token": "jwt-abc"})),
        )
        .mount(&h.server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/admin/logout"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&h.server)
        .await;

    let router = h.site.router();
    let mut auth = h.site.admin_auth();
    auth.login("admin@sdherbs.com", "s3cret", router.as_ref())
        .await
        .unwrap();
    auth.logout(router.as_ref()).await.unwrap();
    h.site.refresh_session();

    assert!(!h.site.client().has_token());
    assert_eq!(router.current(), Route::AdminLogin);
    assert_eq!(router.entries(), vec!["/", "/admin/login"]);
    let stored = CredentialStore::new(h.site.config().credentials_path());
    assert!(stored.token().is_none());
}
