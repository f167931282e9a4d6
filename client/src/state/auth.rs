//! Session-gate state for the current browser.
//!
//! SYSTEM CONTEXT
//! ==============
//! Read by the route gate to decide between the collection browser and the
//! sign-in surface. The flag is resolved from browser storage after
//! hydration, so server renders always start in the loading state.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

/// Whether the local token flag was found.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub authenticated: bool,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { authenticated: false, loading: true }
    }
}

impl AuthState {
    /// State after the storage lookup has completed.
    pub fn resolved(authenticated: bool) -> Self {
        Self { authenticated, loading: false }
    }

    /// True once loading finished without a token.
    pub fn needs_sign_in(&self) -> bool {
        !self.loading && !self.authenticated
    }
}
