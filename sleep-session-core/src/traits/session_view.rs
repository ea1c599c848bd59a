use crate::models::display::DisplayModel;
use crate::models::state::SessionState;

/// Presentation layer notified by the controller.
///
/// All methods are called from the session thread, not the UI thread.
/// Implementations should marshal to the UI thread if needed. Nothing
/// returned from here influences the session.
pub trait SessionView: Send + Sync {
    /// Called on every state transition.
    fn set_state(&self, state: SessionState);

    /// Called whenever any displayed value may have changed.
    fn update_display(&self, display: &DisplayModel);

    /// Called when the alarm starts ringing; the dialog should offer a
    /// stop action wired to `on_stop_button_pressed`.
    fn present_alarm_dialog(&self);

    /// Called for user-facing prompts and failures.
    fn present_alert(&self, text: &str, action_label: &str);
}
