//! Exit codes for the type map CLI.
//!
//! Distinct codes let scripts tell a schema that was never deployed apart
//! from a broken remote or a malformed schema.

/// Exit codes used by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - no errors
    Success = 0,
    /// I/O error (file read/write failure)
    IoError = 1,
    /// Configuration error (missing or invalid config file)
    ConfigError = 2,
    /// The remote schema is not deployed yet
    SchemaWarning = 3,
    /// Unexpected failure talking to the remote API
    RemoteError = 4,
    /// Parse error (invalid GraphQL syntax in the schema)
    ParseError = 5,
}

impl ExitCode {
    /// Exit the process with this exit code.
    pub fn exit(self) -> ! {
        std::process::exit(self as i32)
    }

    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

impl std::fmt::Display for ExitCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::IoError => write!(f, "I/O error"),
            Self::ConfigError => write!(f, "configuration error"),
            Self::SchemaWarning => write!(f, "schema not deployed"),
            Self::RemoteError => write!(f, "remote error"),
            Self::ParseError => write!(f, "parse error"),
        }
    }
}
