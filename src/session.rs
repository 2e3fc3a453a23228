use std::sync::{Arc, RwLock};
use tracing::info;

/// Credentials shared by the components that talk to the backend
///
/// Clones share the same underlying state, so signing out through any
/// handle clears the token for every holder.
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    token: Arc<RwLock<Option<String>>>,
}

impl SessionContext {
    /// Creates a signed-out session
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session already holding `token`
    pub fn with_token(token: impl Into<String>) -> Self {
        let session = Self::new();
        session.sign_in(token);
        session
    }

    pub fn sign_in(&self, token: impl Into<String>) {
        let mut guard = self.token.write().unwrap_or_else(|e| e.into_inner());
        *guard = Some(token.into());
    }

    /// Clears the stored credentials
    pub fn sign_out(&self) {
        let mut guard = self.token.write().unwrap_or_else(|e| e.into_inner());
        if guard.take().is_some() {
            info!("session signed out");
        }
    }

    pub fn is_signed_in(&self) -> bool {
        self.bearer_token().is_some()
    }

    /// Current token, if any
    pub fn bearer_token(&self) -> Option<String> {
        self.token
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }
}
