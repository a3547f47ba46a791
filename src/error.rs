//! Sprayer-level error types shared across the bundle loader, CLI, and transport.
//!
//! The taxonomy has exactly two tiers. Everything here is the fatal, pre-dispatch tier:
//! a bad bundle file or configuration aborts the run before any request leaves the
//! process. The second tier—per-request network, TLS, and timeout failures—never becomes
//! an [`Error`] at all; those are swallowed inside [`crate::http::SprayHttpClient::fire`]
//! by design.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Canonical sprayer error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Token bundle could not be loaded.
	#[error(transparent)]
	Bundle(#[from] BundleError),
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
}

/// Bundle-file failures raised before any request is scheduled.
#[derive(Debug, ThisError)]
pub enum BundleError {
	/// Bundle file is missing or unreadable.
	#[error("Failed to read token bundle at {}.", path.display())]
	Read {
		/// Bundle path as resolved from flags/environment.
		path: PathBuf,
		/// Underlying filesystem failure.
		#[source]
		source: std::io::Error,
	},
	/// Bundle file is not a valid token-bundle JSON document.
	#[error("Failed to parse token bundle at {}.", path.display())]
	Parse {
		/// Bundle path as resolved from flags/environment.
		path: PathBuf,
		/// Structured parsing failure, including the JSON path to the offending value.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
}

/// Configuration and validation failures raised at startup.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: ReqwestError,
	},
	/// Proxy URL was rejected by the transport.
	#[error("Proxy URL is invalid.")]
	InvalidProxy {
		/// Underlying proxy-scheme failure.
		#[source]
		source: ReqwestError,
	},
	/// Per-request timeout must be a positive number of seconds.
	#[error("The timeout value must be positive.")]
	NonPositiveTimeout,
}
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::HttpClientBuild { source: e }
	}
}
