pub mod alarm_scheduler;
pub mod ambient_player;
pub mod audio_session;
pub mod clock;
pub mod recorder;
pub mod session_view;
pub mod timer_scheduler;
