//! Error types for the graph dataset generator.
//!
//! Every variant carries a stable machine-readable code so the CLI can log
//! failures without matching on message text.

use std::{fmt, io, path::PathBuf};

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Error type produced when configuring or running the generator.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// A probability parameter was not a finite value in `[0, 1]`.
    #[error("{parameter} must be a finite value in [0, 1] (got {value})")]
    InvalidProbability {
        /// Name of the offending parameter.
        parameter: &'static str,
        /// Value supplied by the caller.
        value: f64,
    },
    /// A batch node-count range had its bounds reversed.
    #[error("min_nodes ({min}) must not exceed max_nodes ({max})")]
    InvalidNodeRange {
        /// Lower bound supplied by the caller.
        min: usize,
        /// Upper bound supplied by the caller.
        max: usize,
    },
    /// A batch was requested with zero files.
    #[error("batch count must be at least 1")]
    ZeroBatchCount,
    /// The destination file could not be created or truncated.
    #[error("failed to create `{path}`: {source}")]
    Create {
        /// Destination path.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The batch output directory could not be created.
    #[error("failed to create directory `{path}`: {source}")]
    CreateDirectory {
        /// Directory path.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Writing a row to the sink failed.
    #[error("failed to write edge row: {source}")]
    Write {
        /// Error raised by the CSV writer.
        #[source]
        source: csv::Error,
    },
    /// Flushing buffered rows to the sink failed.
    #[error("failed to flush output: {source}")]
    Flush {
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
}

define_error_codes! {
    /// Stable codes describing [`GeneratorError`] variants.
    enum GeneratorErrorCode for GeneratorError {
        /// A probability parameter was out of range.
        InvalidProbability => InvalidProbability { .. } => "GRAPHGEN_INVALID_PROBABILITY",
        /// A batch node-count range had its bounds reversed.
        InvalidNodeRange => InvalidNodeRange { .. } => "GRAPHGEN_INVALID_NODE_RANGE",
        /// A batch was requested with zero files.
        ZeroBatchCount => ZeroBatchCount => "GRAPHGEN_ZERO_BATCH_COUNT",
        /// The destination file could not be created.
        Create => Create { .. } => "GRAPHGEN_CREATE_FAILED",
        /// The batch output directory could not be created.
        CreateDirectory => CreateDirectory { .. } => "GRAPHGEN_CREATE_DIRECTORY_FAILED",
        /// Writing a row failed.
        Write => Write { .. } => "GRAPHGEN_WRITE_FAILED",
        /// Flushing the sink failed.
        Flush => Flush { .. } => "GRAPHGEN_FLUSH_FAILED",
    }
}

impl GeneratorError {
    /// Returns `true` when the error stems from rejected configuration
    /// rather than from the output sink.
    #[must_use]
    pub const fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::InvalidProbability { .. } | Self::InvalidNodeRange { .. } | Self::ZeroBatchCount
        )
    }
}

impl From<csv::Error> for GeneratorError {
    fn from(source: csv::Error) -> Self {
        Self::Write { source }
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, GeneratorError>;
