//! # Core Event Types
//!
//! Small enums shared by commands, the view model and the renderer.

/// Which top-level view is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    /// Credential form, shown until a login succeeds
    Login,
    /// Maker and model lists
    Catalog,
    /// Catalog with the model dialog on top
    ModelDialog,
}

/// Focused input on the login form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LoginField {
    #[default]
    Email,
    Password,
}

impl LoginField {
    pub fn next(self) -> Self {
        match self {
            LoginField::Email => LoginField::Password,
            LoginField::Password => LoginField::Email,
        }
    }
}

/// Focused input inside the model dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DialogField {
    #[default]
    Maker,
    Name,
}

impl DialogField {
    pub fn next(self) -> Self {
        match self {
            DialogField::Maker => DialogField::Name,
            DialogField::Name => DialogField::Maker,
        }
    }
}
