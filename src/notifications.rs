//! Best-effort completion cues.
//! The desktop notification is only implemented on macOS.

#[cfg(target_os = "macos")]
use std::process::Command;
use std::io::Write;

/// Reacts to a finished countdown. Implementations must never fail.
pub trait CompletionCue {
    fn signal(&mut self);
}

/// Rings the terminal bell and posts a desktop notification
#[derive(Debug, Clone, Copy)]
pub struct TerminalCue {
    pub bell: bool,
}

impl TerminalCue {
    pub fn new(bell: bool) -> Self {
        Self { bell }
    }
}

impl CompletionCue for TerminalCue {
    fn signal(&mut self) {
        if self.bell {
            ring_bell();
        }
        notify_timer_done();
    }
}

/// Write BEL to the terminal, ignoring failures
pub fn ring_bell() {
    let mut stdout = std::io::stdout();
    let _ = stdout.write_all(b"\x07");
    let _ = stdout.flush();
}

/// Send a notification when the countdown reaches zero
pub fn notify_timer_done() {
    #[cfg(target_os = "macos")]
    {
        let script = r#"display notification "Focus session complete" with title "Stargaze Focus""#;

        let _ = Command::new("osascript")
            .arg("-e")
            .arg(script)
            .output();
    }
}

/// Counts signals instead of making noise
#[cfg(test)]
#[derive(Debug, Default, Clone)]
pub struct CountingCue {
    pub count: std::rc::Rc<std::cell::Cell<u32>>,
}

#[cfg(test)]
impl CompletionCue for CountingCue {
    fn signal(&mut self) {
        self.count.set(self.count.get() + 1);
    }
}
