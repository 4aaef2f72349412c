//! Session Management
//!
//! Owns the bearer token and the authenticated flag. The flag is only set
//! after the server has confirmed the token; any doubt degrades to the
//! unauthenticated state. Every transition repaints the auth controls.

mod store;

pub use store::{MemoryTokenStore, StoreError, TokenStore};
#[cfg(feature = "native")]
pub use store::FileTokenStore;

use std::cell::RefCell;
use std::rc::Rc;
use thiserror::Error;

use crate::api::{ActivitiesClient, ApiError};
use crate::surface::Surface;

/// Fallback shown when a rejected login carries no detail
pub const LOGIN_REJECTED: &str = "Login failed";

/// The page's single session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    token: Option<String>,
    authenticated: bool,
}

impl Session {
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Hold a restored token without trusting it yet
    fn hold(&mut self, token: String) {
        self.token = Some(token);
        self.authenticated = false;
    }

    /// Hold a freshly issued token
    fn set(&mut self, token: String) {
        self.token = Some(token);
        self.authenticated = true;
    }

    fn confirm(&mut self) {
        self.authenticated = self.token.is_some();
    }

    fn clear(&mut self) {
        self.token = None;
        self.authenticated = false;
    }
}

/// Login failures. `Display` is the text shown to the user.
#[derive(Error, Debug)]
pub enum LoginError {
    /// Server refused the credentials
    #[error("{0}")]
    Rejected(String),

    /// Server could not be reached or answered nonsense
    #[error("Login failed. Please try again.")]
    Unreachable(#[source] ApiError),
}

/// Token lifecycle and authenticated-UI gating
pub struct SessionManager {
    session: RefCell<Session>,
    store: Box<dyn TokenStore>,
    client: Rc<ActivitiesClient>,
    surface: Rc<dyn Surface>,
}

impl SessionManager {
    pub fn new(
        client: Rc<ActivitiesClient>,
        store: Box<dyn TokenStore>,
        surface: Rc<dyn Surface>,
    ) -> Self {
        Self {
            session: RefCell::new(Session::default()),
            store,
            client,
            surface,
        }
    }

    /// Snapshot of the current session
    pub fn session(&self) -> Session {
        self.session.borrow().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.borrow().is_authenticated()
    }

    /// `Bearer <token>` when a token is held
    pub fn auth_header(&self) -> Option<String> {
        self.session
            .borrow()
            .token()
            .map(|token| format!("Bearer {}", token))
    }

    /// Read a persisted token into memory. Does not touch `authenticated`.
    pub fn restore(&self) {
        match self.store.load() {
            Ok(Some(token)) if !token.is_empty() => {
                tracing::debug!("Restored persisted session token");
                self.session.borrow_mut().hold(token);
            }
            Ok(_) => {}
            Err(e) => tracing::warn!("Failed to read persisted token: {}", e),
        }
    }

    /// Confirm the held token with the server.
    ///
    /// Without a token no request is made. A negative answer, a non-2xx
    /// status, a malformed body or a network failure all discard the token.
    pub async fn validate(&self) -> bool {
        let Some(header) = self.auth_header() else {
            self.session.borrow_mut().clear();
            self.surface.paint_auth(false);
            return false;
        };

        match self.client.auth_status(Some(header)).await {
            Ok(true) => {
                self.session.borrow_mut().confirm();
                tracing::info!("Session token validated");
                self.surface.paint_auth(true);
                true
            }
            Ok(false) => {
                tracing::warn!("Server reports session token is no longer valid");
                self.discard();
                false
            }
            Err(e) => {
                tracing::warn!("Session validation failed: {}", e);
                self.discard();
                false
            }
        }
    }

    /// Exchange credentials for a token. A failed login leaves any held token alone.
    pub async fn login(&self, username: &str, password: &str) -> Result<(), LoginError> {
        match self.client.login(username, password).await {
            Ok(token) => {
                if let Err(e) = self.store.save(&token) {
                    tracing::warn!("Failed to persist session token: {}", e);
                }
                self.session.borrow_mut().set(token);
                tracing::info!("Logged in as {}", username);
                self.surface.paint_auth(true);
                Ok(())
            }
            Err(e) if e.is_rejection() => {
                tracing::info!("Login rejected for {}: {}", username, e);
                Err(LoginError::Rejected(
                    e.detail().unwrap_or(LOGIN_REJECTED).to_string(),
                ))
            }
            Err(e) => {
                tracing::error!("Login request failed: {}", e);
                Err(LoginError::Unreachable(e))
            }
        }
    }

    /// Best-effort server notification, then an unconditional local clear
    pub async fn logout(&self) {
        if let Some(header) = self.auth_header() {
            if let Err(e) = self.client.logout(Some(header)).await {
                tracing::warn!("Logout notification failed: {}", e);
            }
        }

        self.discard();
        tracing::info!("Logged out");
    }

    /// Drop the token from memory and storage and repaint as logged out
    fn discard(&self) {
        self.session.borrow_mut().clear();
        if let Err(e) = self.store.clear() {
            tracing::warn!("Failed to clear persisted token: {}", e);
        }
        self.surface.paint_auth(false);
    }
}
