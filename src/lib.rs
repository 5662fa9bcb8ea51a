//! Infinity library

pub mod backend;
pub mod gui;
pub mod session;
pub mod store;
pub mod transfer;
pub mod utils;

// Re-export main types for easier use
pub use backend::{BackendActor, WidgetCommand, WidgetEvent};
pub use gui::{InfinityApp, Message, WidgetBridge};
pub use session::{Action, Phase, Session, SessionView, StatusLog};
pub use store::{initialize_store, PersistedSnapshot, SnapshotStore};
pub use transfer::{TransferConfig, TransferEngine, TransferUpdate};
pub use utils::{AppSettings, InfinityError};
