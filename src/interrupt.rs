// src/interrupt.rs
//! Ctrl-C at a credential prompt.
//!
//! dialoguer reads the terminal itself, so SIGINT never reaches a prompt as
//! an error and would otherwise kill the process with echo still switched
//! off. The handler puts the terminal back as it was when the handler was
//! installed and ends the run with the interrupt status. It stays in place
//! for the rest of the run once the first prompt is shown.

use std::sync::Once;

use console::Term;
use tracing::warn;

use crate::error::ExportError;

#[cfg(unix)]
mod tty {
    use std::mem::MaybeUninit;

    /// Attributes of the controlling terminal on stdin, if there is one.
    pub struct Saved(Option<libc::termios>);

    impl Saved {
        pub fn capture() -> Self {
            let mut attrs = MaybeUninit::<libc::termios>::uninit();
            // SAFETY: tcgetattr only writes into `attrs`; it is read back
            // only when the call reports success.
            let ok = unsafe { libc::tcgetattr(libc::STDIN_FILENO, attrs.as_mut_ptr()) } == 0;
            Saved(ok.then(|| unsafe { attrs.assume_init() }))
        }

        pub fn restore(&self) {
            if let Some(attrs) = &self.0 {
                // SAFETY: `attrs` came from tcgetattr on the same descriptor.
                unsafe {
                    libc::tcsetattr(libc::STDIN_FILENO, libc::TCSANOW, attrs);
                }
            }
        }
    }
}

#[cfg(not(unix))]
mod tty {
    pub struct Saved;

    impl Saved {
        pub fn capture() -> Self {
            Saved
        }

        pub fn restore(&self) {}
    }
}

pub use tty::Saved;

/// Undo what a half-finished prompt left behind and report the interrupt
/// on `term`. Returns the status to exit with.
pub fn finish(saved: &Saved, term: &Term) -> i32 {
    saved.restore();
    let _ = term.show_cursor();
    // The prompt line is still open.
    let _ = term.write_line("");
    let _ = term.write_line(&format!("Error: {}", ExportError::Interrupted));
    ExportError::Interrupted.exit_code()
}

static INSTALL: Once = Once::new();

/// Install the process-wide SIGINT handler, capturing the terminal state
/// as it is now. Later calls do nothing; failing to install is logged, not
/// fatal.
pub fn install() {
    INSTALL.call_once(|| {
        let saved = Saved::capture();
        if let Err(e) = ctrlc::set_handler(move || std::process::exit(finish(&saved, &Term::stderr()))) {
            warn!("Could not install Ctrl-C handler: {e}");
        }
    });
}
