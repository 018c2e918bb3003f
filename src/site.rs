//! The running client: one router, one theme cell, one REST client, shared
//! by the chat widget and the admin pages.

use crate::admin::{AdminAuth, GuardView, HttpIdentityProbe, SessionGuard};
use crate::api::{ApiClient, CredentialStore, HttpCatalog};
use crate::chat::{ChatWidget, HttpChatBackend};
use crate::config::Config;
use crate::error::Result;
use crate::navigation::{Route, RouteTable, Router};
use crate::theme::ThemeStore;
use crate::voice::build_speaker;
use std::sync::Arc;
use tracing::debug;

/// A rendered route: where the client ended up and what it shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// The route that was asked for.
    pub requested: Route,
    pub view: GuardView,
}

pub struct Site {
    config: Config,
    client: ApiClient,
    router: Arc<Router>,
    theme: ThemeStore,
    credentials: CredentialStore,
}

impl Site {
    pub fn new(config: Config) -> Result<Self> {
        let credentials = CredentialStore::new(config.credentials_path());
        let client = ApiClient::new(&config.api)?.with_token(credentials.token());
        let router = Arc::new(Router::new(RouteTable::new(&config.admin.login_path)));
        Ok(Self {
            config,
            client,
            router,
            theme: ThemeStore::default(),
            credentials,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    pub fn router(&self) -> Arc<Router> {
        Arc::clone(&self.router)
    }

    pub fn theme(&self) -> &ThemeStore {
        &self.theme
    }

    pub fn chat_widget(&self) -> ChatWidget {
        let chatbot = &self.config.chatbot;
        ChatWidget::new(
            Arc::new(HttpChatBackend::new(self.client.clone(), &chatbot.endpoint)),
            Arc::new(HttpCatalog::new(
                self.client.clone(),
                &chatbot.products_endpoint,
            )),
            self.router(),
            self.theme.clone(),
            chatbot.clone(),
        )
        .with_speaker(build_speaker(&self.config, &self.client))
    }

    pub fn admin_auth(&self) -> AdminAuth {
        AdminAuth::new(
            self.client.clone(),
            self.credentials.clone(),
            &self.config.admin.login_path,
            &self.config.admin.landing_path,
        )
    }

    /// Pick up a token stored by a login since this site was built. The
    /// session cookie is already shared through the client.
    pub fn refresh_session(&mut self) {
        self.client.set_token(self.credentials.token());
    }

    /// Push `path` and render it.
    pub async fn visit(&self, path: &str) -> Page {
        self.router.push(path);
        self.render_current().await
    }

    /// Render whatever the router points at. Protected routes mount a fresh
    /// session guard and wait for it to resolve.
    pub async fn render_current(&self) -> Page {
        let requested = self.router.current();
        if !requested.is_protected() {
            return Page {
                requested,
                view: GuardView::Content,
            };
        }

        let guard = SessionGuard::mount(self.router(), &self.config.admin.login_path);
        let probe = HttpIdentityProbe::new(
            self.client.clone(),
            &self.config.admin.identity_endpoint,
        );
        debug!(route = %requested, "checking admin session");
        guard.check_session(&probe).await;

        Page {
            requested,
            view: guard.view(),
        }
    }
}
