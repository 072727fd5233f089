//! Session context abstraction
//!
//! The engine depends on an injected capability for the bearer credential
//! rather than a concrete storage mechanism. A `401` anywhere is treated
//! as session expiry: the in-flight flow clears the session and redirects
//! to sign-in instead of retrying.

use std::sync::RwLock;

/// Where the UI must navigate after a terminal failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Redirect {
    /// Session expired; go to the sign-in screen
    SignIn,
    /// Recoverable load failure; go back to the reservation list
    ReservationList,
}

/// Injected session capability
pub trait SessionContext: Send + Sync {
    /// Current bearer token, if signed in
    fn token(&self) -> Option<String>;

    /// Drop the stored credential (called on 401)
    fn clear(&self);
}

/// In-memory session, used by tests and examples
#[derive(Debug, Default)]
pub struct MemorySession {
    token: RwLock<Option<String>>,
}

impl MemorySession {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(token.into())),
        }
    }

    /// Replace the stored token (e.g., after sign-in)
    pub fn set_token(&self, token: impl Into<String>) {
        if let Ok(mut guard) = self.token.write() {
            *guard = Some(token.into());
        }
    }
}

impl SessionContext for MemorySession {
    fn token(&self) -> Option<String> {
        self.token.read().ok().and_then(|guard| guard.clone())
    }

    fn clear(&self) {
        if let Ok(mut guard) = self.token.write() {
            *guard = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_session_clear() {
        let session = MemorySession::new("token-1");
        assert_eq!(session.token().as_deref(), Some("token-1"));

        session.clear();
        assert_eq!(session.token(), None);

        session.set_token("token-2");
        assert_eq!(session.token().as_deref(), Some("token-2"));
    }
}
