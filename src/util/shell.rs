//! Status output for the build banners.
//!
//! All user-facing lines go through [`Shell`] so formatting stays in one
//! place. Lines are written as `{status:>12} {message}`, with the status
//! word coloured when the sink is a terminal.

use std::fmt::Display;
use std::io::{self, IsTerminal, Write};

/// Color output mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorChoice {
    /// Detect TTY and use colors if available.
    #[default]
    Auto,
    /// Always use ANSI colors.
    Always,
    /// Never use ANSI colors.
    Never,
}

/// Status types for output messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    // In-progress statuses (cyan)
    Building,
    Analyzing,

    // Success status (green)
    Finished,

    // Error status (red)
    Error,
}

impl Status {
    /// Get the display text for this status.
    fn as_str(&self) -> &'static str {
        match self {
            Status::Building => "Building",
            Status::Analyzing => "Analyzing",
            Status::Finished => "Finished",
            Status::Error => "error",
        }
    }

    /// Get the ANSI color code for this status.
    fn color_code(&self) -> &'static str {
        match self {
            Status::Building | Status::Analyzing => "\x1b[1;36m",
            Status::Finished => "\x1b[1;32m",
            Status::Error => "\x1b[1;31m",
        }
    }
}

const STATUS_WIDTH: usize = 12;

/// Shell writing status lines to a sink (stderr by default).
pub struct Shell<W: Write = io::Stderr> {
    out: W,
    use_color: bool,
}

impl Shell<io::Stderr> {
    /// Shell on stderr. `NO_COLOR` disables colour in auto mode.
    pub fn stderr(color: ColorChoice) -> Self {
        let use_color = match color {
            ColorChoice::Auto => {
                io::stderr().is_terminal() && std::env::var_os("NO_COLOR").is_none()
            }
            ColorChoice::Always => true,
            ColorChoice::Never => false,
        };
        Shell {
            out: io::stderr(),
            use_color,
        }
    }
}

impl<W: Write> Shell<W> {
    /// Shell on an arbitrary writer, without colour.
    pub fn from_writer(out: W) -> Self {
        Shell {
            out,
            use_color: false,
        }
    }

    /// Check if colors are enabled.
    pub fn use_color(&self) -> bool {
        self.use_color
    }

    /// Print a status message.
    ///
    /// Write failures are ignored.
    pub fn status(&mut self, status: Status, msg: impl Display) {
        let prefix = self.format_status(status);
        let _ = writeln!(self.out, "{} {}", prefix, msg);
        let _ = self.out.flush();
    }

    /// Print an error message.
    pub fn error(&mut self, msg: impl Display) {
        self.status(Status::Error, msg);
    }

    /// Consume the shell, returning the sink.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn format_status(&self, status: Status) -> String {
        let text = status.as_str();

        if self.use_color {
            format!("{}{:>width$}\x1b[0m", status.color_code(), text, width = STATUS_WIDTH)
        } else {
            format!("{:>width$}", text, width = STATUS_WIDTH)
        }
    }
}
