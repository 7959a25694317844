//! `TerminalSession`: RAII ownership of raw mode and the alternate screen.

use crossterm::{cursor, execute, terminal};
use std::io::{self, Write};
use tracing::debug;

/// What a [`TerminalSession`] switches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Draw on the alternate screen, leaving the scrollback untouched.
    pub alternate_screen: bool,
    /// Hide the cursor while the session is active.
    pub hide_cursor: bool,
    /// Disable line buffering and echo.
    pub raw_mode: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            alternate_screen: true,
            hide_cursor: true,
            raw_mode: true,
        }
    }
}

/// Puts the real terminal into dashboard mode and restores it on drop.
///
/// Restoration runs on every exit path, including early returns and
/// unwinding panics.
///
/// ```rust,no_run
/// use tilewall::terminal::{AnsiTerminal, TerminalSession};
/// use tilewall::tile::Tile;
///
/// # fn main() -> tilewall::error::Result<()> {
/// let _session = TerminalSession::new()?;
/// let mut terminal = AnsiTerminal::stdout();
/// Tile::text("hello").display(&mut terminal)?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct TerminalSession {
    config: SessionConfig,
    raw_mode_enabled: bool,
    alternate_screen_enabled: bool,
    cursor_hidden: bool,
}

impl TerminalSession {
    /// Enter a session with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal setup fails (raw mode, alternate screen, etc.).
    pub fn new() -> io::Result<Self> {
        Self::with_config(SessionConfig::default())
    }

    /// Enter a session with a custom configuration.
    ///
    /// Anything already switched on is switched back off if a later step
    /// fails.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal setup fails.
    pub fn with_config(config: SessionConfig) -> io::Result<Self> {
        let mut session = Self {
            config,
            raw_mode_enabled: false,
            alternate_screen_enabled: false,
            cursor_hidden: false,
        };
        let mut stdout = io::stdout();

        if config.raw_mode {
            terminal::enable_raw_mode()?;
            session.raw_mode_enabled = true;
            debug!("raw mode enabled");
        }
        if config.alternate_screen {
            execute!(stdout, terminal::EnterAlternateScreen)?;
            session.alternate_screen_enabled = true;
            debug!("alternate screen enabled");
        }
        if config.hide_cursor {
            execute!(stdout, cursor::Hide)?;
            session.cursor_hidden = true;
        }

        Ok(session)
    }

    /// The configuration this session was entered with.
    pub const fn config(&self) -> &SessionConfig {
        &self.config
    }

    fn restore(&mut self) {
        let mut stdout = io::stdout();

        // Reverse order of enabling.
        if self.cursor_hidden {
            let _ = execute!(stdout, cursor::Show);
            self.cursor_hidden = false;
        }
        if self.alternate_screen_enabled {
            let _ = execute!(stdout, terminal::LeaveAlternateScreen);
            self.alternate_screen_enabled = false;
            debug!("alternate screen disabled");
        }
        if self.raw_mode_enabled {
            let _ = terminal::disable_raw_mode();
            self.raw_mode_enabled = false;
            debug!("raw mode disabled");
        }
        let _ = stdout.flush();
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        self.restore();
    }
}
