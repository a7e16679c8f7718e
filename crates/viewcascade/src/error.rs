use thiserror::Error;

/// Error codes prefixed by area: C = configuration, M = matching, X = external store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // Configuration
    C001, // identifier outside the configured root namespace
    C002, // malformed collection type descriptor
    C003, // invalid filename pattern
    C004, // configuration file unreadable or unparsable

    // Matching
    M001, // no candidate (including the dynamic fallback) exists
    M002, // no template found for a single base path

    // External
    X001, // template store failed an existence check
}

impl ErrorCode {
    /// Matching failures are avoidable by asking `has_match` / `found_path`
    /// first; everything else means the call itself could not complete.
    pub fn is_avoidable(&self) -> bool {
        matches!(self, Self::M001 | Self::M002)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::C001 => "C001",
            Self::C002 => "C002",
            Self::C003 => "C003",
            Self::C004 => "C004",
            Self::M001 => "M001",
            Self::M002 => "M002",
            Self::X001 => "X001",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─── Error ────────────────────────────────────────────────────────────────────

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("[C001] identifier `{identifier}` does not start with root namespace `{root}`")]
    Configuration { identifier: String, root: String },

    #[error("[C002] collection type `{type_name}` is malformed: {reason}")]
    MalformedType { type_name: String, reason: &'static str },

    #[error("[C003] invalid filename pattern `{pattern}`: {reason}")]
    InvalidPattern { pattern: String, reason: &'static str },

    #[error("[C004] cannot load configuration from {origin}: {message}")]
    ConfigLoad { origin: String, message: String },

    #[error("[M001] no view matched; checked:\n{}", .checked.join("\n"))]
    NoMatch { checked: Vec<String> },

    #[error("[M002] no views found in the following paths:\n{}", .checked.join("\n"))]
    NoTemplateFound { checked: Vec<String> },

    #[error("[X001] existence check failed for `{path}`")]
    Store {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Configuration { .. }   => ErrorCode::C001,
            Self::MalformedType { .. }   => ErrorCode::C002,
            Self::InvalidPattern { .. }  => ErrorCode::C003,
            Self::ConfigLoad { .. }      => ErrorCode::C004,
            Self::NoMatch { .. }         => ErrorCode::M001,
            Self::NoTemplateFound { .. } => ErrorCode::M002,
            Self::Store { .. }           => ErrorCode::X001,
        }
    }

    /// Paths that were checked before the failure, for matching errors.
    pub fn checked_paths(&self) -> &[String] {
        match self {
            Self::NoMatch { checked } | Self::NoTemplateFound { checked } => checked,
            _ => &[],
        }
    }
}
