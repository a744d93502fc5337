//! # Models Module
//!
//! Plain data owned by the ViewModel: the session, the cached catalog
//! records, the model dialog and notifications.

pub mod catalog;
pub mod dialog;
pub mod notification;
pub mod session;

pub use catalog::{CarMaker, CarModel, RecordId};
pub use dialog::{DialogState, ModelDraft};
pub use notification::{Notification, NotificationLevel, NOTIFICATION_DURATION};
pub use session::Session;
