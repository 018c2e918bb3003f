use crate::site_harness::site_harness;
use sdherbs::admin::{GuardView, HttpIdentityProbe, SessionGuard, SessionStatus};
use sdherbs::navigation::{AdminPage, Route};
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn confirmed_session_renders_the_page() {
    let h = site_harness().await;
    Mock::given(method("GET"))
        .and(path("/api/admin/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"email": "admin@sdherbs.com"})))
        .expect(1)
        .mount(&h.server)
        .await;

    let page = h.site.visit("/admin/products").await;

    assert_eq!(page.requested, Route::Admin(AdminPage::Products));
    assert_eq!(page.view, GuardView::Content);
    assert_eq!(h.site.router().current_path(), "/admin/products");
}

#[tokio::test]
async fn missing_session_replaces_history_with_login() {
    let h = site_harness().await;
    Mock::given(method("GET"))
        .and(path("/api/admin/me"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&h.server)
        .await;

    let page = h.site.visit("/admin/settings").await;

    assert_eq!(page.view, GuardView::Redirect("/admin/login".into()));
    let router = h.site.router();
    assert_eq!(router.current(), Route::AdminLogin);
    assert_eq!(router.entries(), vec!["/", "/admin/login"]);
    // Back skips the protected page entirely.
    assert_eq!(router.back(), Some(Route::Home));
}

#[tokio::test]
async fn unreachable_identity_endpoint_counts_as_logged_out() {
    let h = site_harness().await;
    Mock::given(method("GET"))
        .and(path("/api/admin/me"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&h.server)
        .await;

    let page = h.site.visit("/admin/enquiries").await;
    assert_eq!(page.view, GuardView::Redirect("/admin/login".into()));
}

#[tokio::test]
async fn public_routes_do_not_probe() {
    let h = site_harness().await;
    Mock::given(method("GET"))
        .and(path("/api/admin/me"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&h.server)
        .await;

    for route in ["/", "/products/42", "/contact", "/admin/login", "/nowhere"] {
        let page = h.site.visit(route).await;
        assert_eq!(page.view, GuardView::Content, "for {route}");
    }
}

#[tokio::test]
async fn slow_probe_after_unmount_is_discarded() {
    let h = site_harness().await;
    Mock::given(method("GET"))
        .and(path("/api/admin/me"))
        .respond_with(ResponseTemplate::new(401).set_delay(Duration::from_millis(200)))
        .mount(&h.server)
        .await;

    let router = h.site.router();
    router.push("/admin/dashboard");
    let guard = SessionGuard::mount(router.clone(), "/admin/login");
    let writes = guard.subscribe();
    let liveness = guard.liveness();
    let probe = HttpIdentityProbe::new(h.site.client().clone(), "/admin/me");

    let (status, ()) = tokio::join!(guard.check_session(&probe), async move {
        tokio::time::sleep(Duration::from_millis(20)).await;
        liveness.revoke();
    });

    assert_eq!(status, None);
    assert_eq!(guard.status(), SessionStatus::Checking);
    assert!(!writes.has_changed().unwrap());
    assert_eq!(router.current_path(), "/admin/dashboard");
}
