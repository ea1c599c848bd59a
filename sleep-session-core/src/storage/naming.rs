use chrono::NaiveDateTime;

/// File name for a capture started at `started_at`, e.g.
/// `sleep_20261016_231000.m4a`.
pub fn recording_file_name(started_at: NaiveDateTime, extension: &str) -> String {
    format!("sleep_{}.{}", started_at.format("%Y%m%d_%H%M%S"), extension)
}
