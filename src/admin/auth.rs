use crate::api::{ApiClient, CredentialStore, Credentials};
use crate::error::{ApiError, AuthError};
use crate::navigation::{NavigateMode, Navigator};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

const LOGIN_ENDPOINT: &str = "/admin/login";
const LOGOUT_ENDPOINT: &str = "/admin/logout";
const GENERIC_LOGIN_FAILURE: &str = "Invalid credentials or server error.";

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    #[serde(default)]
    token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Admin login/logout against the backend, keeping the token on disk.
pub struct AdminAuth {
    client: ApiClient,
    store: CredentialStore,
    login_path: String,
    landing_path: String,
}

impl AdminAuth {
    pub fn new(
        client: ApiClient,
        store: CredentialStore,
        login_path: impl Into<String>,
        landing_path: impl Into<String>,
    ) -> Self {
        Self {
            client,
            store,
            login_path: login_path.into(),
            landing_path: landing_path.into(),
        }
    }

    /// Client carrying whatever token the last login produced.
    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Log in and move to the landing page. Returns the landing path.
    pub async fn login(
        &mut self,
        email: &str,
        password: &str,
        navigator: &dyn Navigator,
    ) -> Result<String, AuthError> {
        let request = LoginRequest { email, password };
        let (status, body) = match self.client.post_json_raw(LOGIN_ENDPOINT, &request).await {
            Ok(reply) => reply,
            Err(ApiError::Decode { .. }) => return Err(AuthError::InvalidResponse),
            Err(e) => {
                debug!("login request failed: {e}");
                return Err(AuthError::Rejected(GENERIC_LOGIN_FAILURE.to_string()));
            }
        };
        if !(200..300).contains(&status) {
            debug!(status, "login rejected by backend");
            return Err(AuthError::Rejected(rejection_message(&body)));
        }
        let response: LoginResponse =
            serde_json::from_str(&body).map_err(|_| AuthError::InvalidResponse)?;

        // Cookie-only backends omit the token; the session cookie suffices then.
        if let Some(token) = response.token.filter(|t| !t.is_empty()) {
            self.store
                .save(&Credentials {
                    token: token.clone(),
                    email: Some(email.to_string()),
                })
                .map_err(|e| AuthError::Credentials(format!("{e:#}")))?;
            self.client.set_token(Some(token));
        }

        info!(email, "admin logged in");
        navigator.navigate(&self.landing_path, NavigateMode::Push);
        Ok(self.landing_path.clone())
    }

    /// Log out. Backend failures are ignored; local credentials are always
    /// dropped and the login view replaces the current entry.
    pub async fn logout(&mut self, navigator: &dyn Navigator) -> Result<(), AuthError> {
        if let Err(e) = self.client.post_empty(LOGOUT_ENDPOINT).await {
            debug!("logout request failed, continuing: {e}");
        }
        self.client.set_token(None);
        self.store
            .clear()
            .map_err(|e| AuthError::Credentials(format!("{e:#}")))?;
        navigator.navigate(&self.login_path, NavigateMode::Replace);
        Ok(())
    }
}

/// The backend's `message` field, read from the unscrubbed body so long
/// messages survive intact.
fn rejection_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .map(|b| b.message)
        .unwrap_or_else(|_| GENERIC_LOGIN_FAILURE.to_string())
}
