pub mod alarm;
pub mod thread_timer;
