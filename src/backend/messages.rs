use crate::session::SessionView;

/// Commands sent from GUI to Backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetCommand {
    /// Start a fresh session, or resume a paused one
    Start,
    Pause,
    Cancel,
    // System
    Shutdown,
}

/// Events sent from Backend to GUI
#[derive(Debug, Clone)]
pub enum WidgetEvent {
    /// Session state changed; carries the full displayed state
    SessionChanged(SessionView),
}
