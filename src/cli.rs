//! Command-line surface and the resolved run configuration.

// crates.io
use clap::Parser;
// self
use crate::{_prelude::*, error::ConfigError};

/// Fire a burst of fire-and-forget HTTP requests using tokens from a JSON bundle.
///
/// Tokens are read once from the bundle file, expanded into every request variant their
/// kind supports, and dispatched through a bounded worker pool. Responses are discarded;
/// point the proxy flag at an intercepting proxy to observe the traffic.
#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Args {
	/// Path to the JSON token bundle.
	#[arg(short = 'j', long, env = "JSON_FILE", default_value = "./tokens.json")]
	pub json_file: PathBuf,
	/// Proxy used for both http and https requests.
	#[arg(short = 'p', long, env = "PROXY", default_value = "http://127.0.0.1:8080")]
	pub proxy: Url,
	/// Target URL to send requests to.
	#[arg(short = 't', long)]
	pub target: Url,
	/// Number of concurrent workers in the dispatch pool.
	#[arg(short = 'w', long, default_value_t = 50, value_parser = clap::value_parser!(u32).range(1..))]
	pub max_workers: u32,
	/// Per-request timeout in seconds.
	#[arg(long, default_value_t = 10.0)]
	pub timeout: f64,
	/// Do not verify TLS certificates (useful behind an intercepting proxy).
	#[arg(long)]
	pub no_verify_proxy: bool,
	/// Also inject each SAML value as a raw SAMLRequest/SAMLResponse header variant.
	#[arg(long)]
	pub saml_header: bool,
	/// Suppress informational output.
	#[arg(short = 'q', long)]
	pub quiet: bool,
}
impl Args {
	/// Resolves the parsed arguments into an immutable [`RunConfig`].
	pub fn resolve(&self) -> Result<RunConfig, ConfigError> {
		if !self.timeout.is_finite() || self.timeout <= 0. {
			return Err(ConfigError::NonPositiveTimeout);
		}

		Ok(RunConfig {
			target: self.target.clone(),
			proxy: Some(self.proxy.clone()),
			workers: self.max_workers as usize,
			timeout: Duration::from_secs_f64(self.timeout),
			verify_tls: !self.no_verify_proxy,
			saml_header: self.saml_header,
		})
	}
}

/// Immutable configuration resolved once at startup; run-scoped, never mutated.
#[derive(Clone, Debug)]
pub struct RunConfig {
	/// Destination URL every job targets.
	pub target: Url,
	/// Proxy for both schemes; `None` dispatches directly.
	pub proxy: Option<Url>,
	/// Worker-pool size; must be at least 1.
	pub workers: usize,
	/// Per-request timeout, enforced by the transport.
	pub timeout: Duration,
	/// Whether TLS certificates are verified.
	pub verify_tls: bool,
	/// Whether the SAML header-injection variant is emitted.
	pub saml_header: bool,
}
impl RunConfig {
	/// Builds a direct-dispatch configuration (no proxy) with the standard defaults, for
	/// library callers and tests.
	pub fn direct(target: Url) -> Self {
		Self {
			target,
			proxy: None,
			workers: 50,
			timeout: Duration::from_secs(10),
			verify_tls: true,
			saml_header: false,
		}
	}

	/// Overrides the worker-pool size.
	pub fn with_workers(mut self, workers: usize) -> Self {
		self.workers = workers;

		self
	}

	/// Enables or disables the SAML header-injection variant.
	pub fn with_saml_header(mut self, enabled: bool) -> Self {
		self.saml_header = enabled;

		self
	}
}
