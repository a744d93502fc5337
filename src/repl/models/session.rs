//! # Session Model
//!
//! Credentials typed into the login form plus the in-memory authentication
//! state. Nothing here is ever persisted; the token dies with the process.

/// Authentication session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    email: String,
    password: String,
    is_logged_in: bool,
    access_token: String,
}

impl Session {
    /// Create an empty, logged-out session
    pub fn new() -> Self {
        Self::default()
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn email_mut(&mut self) -> &mut String {
        &mut self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn password_mut(&mut self) -> &mut String {
        &mut self.password
    }

    pub fn is_logged_in(&self) -> bool {
        self.is_logged_in
    }

    /// Raw access token, empty until a login succeeds
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    /// Record a successful login
    ///
    /// There is no inverse: once authenticated the session lasts until exit.
    pub fn establish(&mut self, access_token: String) {
        self.access_token = access_token;
        self.is_logged_in = true;
    }
}
