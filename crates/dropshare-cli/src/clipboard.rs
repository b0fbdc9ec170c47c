//! System clipboard backed by `arboard`.
//!
//! On X11 and Wayland the selection belongs to the process that set it and
//! is gone once that process exits, so each write is served from a
//! background thread until the hold window passes or another program takes
//! the selection. Commands call [`ArboardClipboard::finish`] before exiting.

use std::sync::Mutex;
use std::thread::JoinHandle;
use std::time::Duration;

use tracing::{debug, warn};

use dropshare_core::error::{AppError, ErrorKind};
use dropshare_core::result::AppResult;
use dropshare_core::traits::Clipboard;

/// Writes share links to the desktop clipboard.
#[derive(Debug, Default)]
pub struct ArboardClipboard {
    /// How long a written link stays on a selection-owning desktop.
    hold: Duration,
    /// Threads still serving a written link.
    serving: Mutex<Vec<JoinHandle<()>>>,
}

impl ArboardClipboard {
    /// Clipboard that keeps each written link available for `hold`.
    pub fn new(hold: Duration) -> Self {
        Self {
            hold,
            serving: Mutex::new(Vec::new()),
        }
    }

    /// Block until every written link has been handed off or has expired.
    pub fn finish(&self) {
        let handles: Vec<JoinHandle<()>> = match self.serving.lock() {
            Ok(mut serving) => serving.drain(..).collect(),
            Err(poisoned) => poisoned.into_inner().drain(..).collect(),
        };
        if !handles.is_empty() {
            debug!(hold_ms = self.hold.as_millis() as u64, "Serving clipboard until handed off");
        }
        for handle in handles {
            if handle.join().is_err() {
                warn!("Clipboard thread panicked");
            }
        }
    }

    /// Number of writes still being served.
    pub fn serving(&self) -> usize {
        match self.serving.lock() {
            Ok(serving) => serving.iter().filter(|h| !h.is_finished()).count(),
            Err(poisoned) => poisoned.into_inner().iter().filter(|h| !h.is_finished()).count(),
        }
    }

    #[cfg(all(
        unix,
        not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))
    ))]
    fn write_owned(&self, text: String) -> AppResult<()> {
        use std::sync::mpsc;
        use std::time::Instant;

        use arboard::SetExtLinux;

        let deadline = Instant::now() + self.hold;
        let (opened_tx, opened_rx) = mpsc::channel();
        let handle = std::thread::spawn(move || {
            let mut clipboard = match arboard::Clipboard::new() {
                Ok(clipboard) => {
                    let _ = opened_tx.send(Ok(()));
                    clipboard
                }
                Err(e) => {
                    let _ = opened_tx.send(Err(e));
                    return;
                }
            };
            if let Err(e) = clipboard.set().wait_until(deadline).text(text) {
                warn!(error = %e, "Failed to write clipboard");
            }
        });

        match opened_rx.recv() {
            Ok(Ok(())) => {}
            Ok(Err(e)) => return Err(unavailable(e)),
            Err(_) => return Err(AppError::new(ErrorKind::Clipboard, "Clipboard unavailable")),
        }

        match self.serving.lock() {
            Ok(mut serving) => serving.push(handle),
            Err(poisoned) => poisoned.into_inner().push(handle),
        }
        Ok(())
    }

    #[cfg(not(all(
        unix,
        not(any(target_os = "macos", target_os = "android", target_os = "emscripten"))
    )))]
    fn write_owned(&self, text: String) -> AppResult<()> {
        let mut clipboard = arboard::Clipboard::new().map_err(unavailable)?;
        clipboard.set_text(text).map_err(|e| {
            AppError::with_source(
                ErrorKind::Clipboard,
                format!("Failed to write clipboard: {e}"),
                e,
            )
        })
    }
}

impl Clipboard for ArboardClipboard {
    fn write_text(&self, text: &str) -> AppResult<()> {
        self.write_owned(text.to_owned())?;
        debug!(chars = text.len(), "Clipboard updated");
        Ok(())
    }
}

fn unavailable(e: arboard::Error) -> AppError {
    AppError::with_source(
        ErrorKind::Clipboard,
        format!("Clipboard unavailable: {e}"),
        e,
    )
}
