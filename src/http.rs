//! Shared transport: one pooled reqwest client reused by every dispatched job.
//!
//! The module exposes [`SprayHttpClient`], a thin wrapper around [`ReqwestClient`] so
//! shared HTTP behavior lives in one place. Proxy routing, the per-request timeout, and
//! the TLS-verify toggle are baked in when the client is built from [`RunConfig`]; jobs
//! only read the client, so connection reuse needs no synchronization.

// std
use std::ops::Deref;
// crates.io
use reqwest::Proxy;
// self
use crate::{
	_prelude::*,
	cli::RunConfig,
	error::ConfigError,
	job::{JobBody, RequestJob},
};

/// Shared, read-only HTTP client captured by every dispatched job.
#[derive(Clone, Debug)]
pub struct SprayHttpClient(ReqwestClient);
impl SprayHttpClient {
	/// Builds the shared client from the resolved run configuration.
	///
	/// When a proxy is configured it routes both `http` and `https` requests; disabling
	/// TLS verification maps to [`reqwest::ClientBuilder::danger_accept_invalid_certs`],
	/// which is the usual setup behind an intercepting proxy.
	pub fn from_config(config: &RunConfig) -> Result<Self, ConfigError> {
		let mut builder = ReqwestClient::builder()
			.timeout(config.timeout)
			.danger_accept_invalid_certs(!config.verify_tls);

		if let Some(proxy) = &config.proxy {
			builder = builder.proxy(
				Proxy::all(proxy.clone()).map_err(|e| ConfigError::InvalidProxy { source: e })?,
			);
		}

		Ok(Self(builder.build()?))
	}

	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}

	/// Fires one job and discards the outcome.
	///
	/// Any transport failure—connection refused, DNS, TLS, timeout—is swallowed here and
	/// surfaces at `trace!` only. Responses are dropped unread; the proxy in the middle
	/// is the observer.
	pub async fn fire(&self, job: RequestJob) {
		if let Err(e) = self.execute(job).await {
			tracing::trace!("Swallowed request error: {e}.");
		}
	}

	async fn execute(&self, job: RequestJob) -> Result<(), ReqwestError> {
		let mut request = self.0.request(job.method, job.url);

		for (name, value) in &job.headers {
			request = request.header(*name, value);
		}

		match &job.body {
			Some(JobBody::Json(payload)) => request = request.json(payload),
			Some(JobBody::Form(fields)) => request = request.form(fields),
			None => {},
		}

		request.send().await?;

		Ok(())
	}
}
impl AsRef<ReqwestClient> for SprayHttpClient {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
impl Deref for SprayHttpClient {
	type Target = ReqwestClient;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
