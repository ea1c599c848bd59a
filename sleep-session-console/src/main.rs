mod backends;
mod commands;
mod console_view;

use std::io::{self, BufRead};
use std::path::PathBuf;
use std::sync::Arc;

use sleep_session_core::session::events;
use sleep_session_core::{
    sleep_timer_options, SessionController, SessionError, SessionRuntime, SessionServices,
    SystemClock, ThreadTimerScheduler,
};

use backends::{LogAudioSession, LogNotifications, LogPlayer, LogRecorder};
use commands::{Command, HELP};
use console_view::ConsoleView;

fn recordings_dir() -> PathBuf {
    dirs_next::document_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("Sleep Recordings")
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), SessionError> {
    let (events, receiver) = events::channel();

    let services = SessionServices {
        audio_session: Box::new(LogAudioSession::default()),
        notifications: Box::new(LogNotifications::new(events.clone())),
        timers: Box::new(ThreadTimerScheduler::new(events.clone())),
        clock: Box::new(SystemClock),
    };
    let mut controller = SessionController::new(
        LogPlayer::new("rain"),
        LogPlayer::new("alarm"),
        LogRecorder::new(recordings_dir(), events.clone()),
        services,
    );
    controller.set_view(Arc::new(ConsoleView::default()));

    let runtime = SessionRuntime::spawn(controller, events, receiver)?;
    let sender = runtime.sender();
    sender.on_view_ready()?;
    println!("{}", HELP);

    for line in io::stdin().lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                log::error!("failed to read input: {}", e);
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        match line.parse::<Command>() {
            Ok(Command::Quit) => break,
            Ok(Command::Help) => println!("{}", HELP),
            Ok(Command::Options) => {
                for option in sleep_timer_options() {
                    println!("  timer {:<3} {}", option.minutes, option.label);
                }
            }
            Ok(command) => {
                if let Some(event) = command.event() {
                    sender.post(event)?;
                }
            }
            Err(message) => println!("{}", message),
        }
    }

    runtime.shutdown();
    Ok(())
}
