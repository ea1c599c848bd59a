use parking_lot::Mutex;

use sleep_session_core::{DisplayModel, SessionState, SessionView};

/// Prints session updates to the terminal.
#[derive(Default)]
pub struct ConsoleView {
    last_display: Mutex<Option<DisplayModel>>,
}

impl SessionView for ConsoleView {
    fn set_state(&self, state: SessionState) {
        println!("state: {}", state.label());
    }

    fn update_display(&self, display: &DisplayModel) {
        let mut last = self.last_display.lock();
        if last.as_ref() == Some(display) {
            return;
        }
        match serde_json::to_string(display) {
            Ok(json) => println!("display: {}", json),
            Err(e) => log::error!("failed to serialize display: {}", e),
        }
        *last = Some(display.clone());
    }

    fn present_alarm_dialog(&self) {
        println!("*** ALARM *** type `stop` to dismiss");
    }

    fn present_alert(&self, text: &str, action_label: &str) {
        println!("alert: {} [{}]", text, action_label);
    }
}
