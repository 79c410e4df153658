//! CLI output levels

/// How much the CLI prints.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    /// Errors only
    Quiet,
    /// Results and headline messages
    Normal,
    /// Everything, including per-row detail
    Verbose,
}

impl LogLevel {
    /// Print `msg` if this level permits output at `required`.
    pub fn log(self, required: LogLevel, msg: &str) {
        if self == LogLevel::Quiet {
            return;
        }
        if required == LogLevel::Normal || self == LogLevel::Verbose {
            println!("{msg}");
        }
    }

    /// Print a warning to stderr; suppressed only when quiet.
    pub fn warn(self, msg: &str) {
        if self != LogLevel::Quiet {
            eprintln!("Warning: {msg}");
        }
    }
}
