//! # Command Events
//!
//! Events produced by commands that describe what should happen.
//! Commands produce these events, and the controller applies them to the ViewModel.

/// Events that commands can produce to request changes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandEvent {
    /// Append a character to the focused login field
    LoginCharRequested { ch: char },

    /// Remove the last character of the focused login field
    LoginBackspaceRequested,

    /// Move focus between email and password
    LoginFieldSwitchRequested,

    /// Submit the credentials to `/login`
    LoginRequested,

    /// Submit the credentials to `/signup`
    SignupRequested,

    /// Create a placeholder maker
    CreateMakerRequested,

    /// Open the model dialog in create mode
    CreateModelDialogRequested,

    /// Move the model row selection
    ModelSelectionMoveRequested { delta: isize },

    /// Open the model dialog on the selected row
    EditModelDialogRequested,

    /// Append a character to the draft model name
    DialogCharRequested { ch: char },

    /// Remove the last character of the draft model name
    DialogBackspaceRequested,

    /// Move focus between the maker and name inputs
    DialogFieldSwitchRequested,

    /// Step the maker selection
    DialogMakerCycleRequested { forward: bool },

    /// Create or update the model from the draft
    DialogSubmitRequested,

    /// Close the dialog and drop the draft
    DialogCloseRequested,

    /// Request to quit application
    QuitRequested,

    /// No action needed
    NoAction,
}
