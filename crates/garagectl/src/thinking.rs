//! "Thinking" indicator shown while a deferred reply is pending.
//!
//! Animates on a tokio task alongside the session's reply task. When stdout
//! is not a terminal it prints one line instead.

use owo_colors::OwoColorize;
use std::io::{self, IsTerminal, Write};
use std::time::{Duration, Instant};
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

/// Speaker tag for bot lines
pub const PREFIX: &str = "[garagiste]";

const TICK: Duration = Duration::from_millis(120);

const DOTS: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const BAR: &[&str] = &["|", "/", "-", "\\"];

pub fn frames(ascii: bool) -> &'static [&'static str] {
    if ascii {
        BAR
    } else {
        DOTS
    }
}

/// Short "(1.3s)" tag printed after a reply
pub fn format_elapsed(elapsed: Duration) -> String {
    format!("({:.1}s)", elapsed.as_secs_f64())
}

pub struct Thinking {
    stop: Option<oneshot::Sender<()>>,
    task: Option<JoinHandle<()>>,
    started: Instant,
}

impl Thinking {
    pub fn start(label: &str, ascii: bool) -> Self {
        let started = Instant::now();
        if !io::stdout().is_terminal() {
            println!("{}  ... {}", PREFIX, label);
            return Self {
                stop: None,
                task: None,
                started,
            };
        }

        let (stop, mut stopped) = oneshot::channel::<()>();
        let label = label.to_string();
        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(TICK);
            for frame in frames(ascii).iter().cycle() {
                tokio::select! {
                    _ = &mut stopped => break,
                    _ = ticker.tick() => {
                        print!("\r{}  {} {}", PREFIX.bright_cyan(), frame.bright_yellow(), label.dimmed());
                        let _ = io::stdout().flush();
                    }
                }
            }
            // Erase the animation line
            print!("\r\x1b[2K");
            let _ = io::stdout().flush();
        });

        Self {
            stop: Some(stop),
            task: Some(task),
            started,
        }
    }

    /// Stop the animation and report how long the wait lasted
    pub async fn finish(mut self) -> Duration {
        if let Some(stop) = self.stop.take() {
            let _ = stop.send(());
        }
        if let Some(task) = self.task.take() {
            let _ = task.await;
        }
        self.started.elapsed()
    }
}

impl Drop for Thinking {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
