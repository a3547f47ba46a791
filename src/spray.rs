//! Job planning and bounded fan-out dispatch.
//!
//! The run is a single linear phase: build every job for the bundle in insertion order
//! (jwt, ltpa2, paseto, saml), push them through a semaphore-bounded set of tokio tasks,
//! and wait for the whole set to drain. Nothing branches on a request's outcome, and no
//! request is abandoned mid-flight by a normal exit.

// crates.io
use tokio::{sync::Semaphore, task::JoinSet};
// self
use crate::{
	_prelude::*,
	bundle::{TokenBundle, TokenKind},
	cli::RunConfig,
	detect,
	http::SprayHttpClient,
	job::{self, RequestJob},
};

/// Plans and dispatches every request variant for a bundle.
#[derive(Clone, Debug)]
pub struct Sprayer {
	client: SprayHttpClient,
	config: RunConfig,
}
impl Sprayer {
	/// Builds a sprayer with a fresh shared client derived from `config`.
	pub fn new(config: RunConfig) -> Result<Self> {
		let client = SprayHttpClient::from_config(&config)?;

		Ok(Self { client, config })
	}

	/// Builds a sprayer around an existing client; the client must already carry the
	/// proxy/timeout/TLS settings the run expects.
	pub fn with_client(client: SprayHttpClient, config: RunConfig) -> Self {
		Self { client, config }
	}

	/// Builds every job for `bundle` in insertion order, flagging shape mismatches as a
	/// side effect.
	pub fn plan(&self, bundle: &TokenBundle) -> Vec<RequestJob> {
		let mut jobs = Vec::new();

		for kind in TokenKind::ALL {
			for token in bundle.usable(kind) {
				detect::warn_on_mismatch(kind, token);

				jobs.extend(job::build_jobs(
					kind,
					token,
					&self.config.target,
					self.config.saml_header,
				));
			}
		}

		jobs
	}

	/// Dispatches every job for `bundle` through the bounded pool and waits for all of
	/// them to finish, then returns the number of jobs scheduled.
	///
	/// At most `workers` requests are in flight at once; the rest queue at the
	/// semaphore. Individual request failures are swallowed inside the pool and never
	/// surface here, so the returned count is purely informational.
	pub async fn spray(&self, bundle: &TokenBundle) -> usize {
		let jobs = self.plan(bundle);
		let scheduled = jobs.len();
		let limiter = Arc::new(Semaphore::new(self.config.workers));
		let mut inflight = JoinSet::new();

		for job in jobs {
			let limiter = limiter.clone();
			let client = self.client.clone();

			tracing::debug!(method = %job.method, url = %job.url, "Scheduling request.");

			inflight.spawn(async move {
				// Acquisition only fails if the semaphore is closed, which cannot
				// happen while this task holds a clone of it.
				let Ok(_permit) = limiter.acquire_owned().await else {
					return;
				};

				client.fire(job).await;
			});
		}

		while inflight.join_next().await.is_some() {}

		scheduled
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn sprayer(saml_header: bool) -> Sprayer {
		let target = Url::parse("http://target.local/protected")
			.expect("Failed to parse target fixture.");
		let config = RunConfig::direct(target).with_saml_header(saml_header);

		Sprayer::new(config).expect("Failed to build sprayer fixture.")
	}

	fn bundle_from(json: &str) -> TokenBundle {
		serde_json::from_str(json).expect("Failed to parse bundle fixture.")
	}

	#[test]
	fn plan_orders_jobs_by_kind_and_counts_two_per_token() {
		let bundle = bundle_from(
			r#"{
				"jwt": ["j1", "j2"],
				"ltpa2": ["l1"],
				"paseto": ["p1"],
				"saml": ["SAMLRequest: s1"]
			}"#,
		);
		let jobs = sprayer(false).plan(&bundle);

		assert_eq!(jobs.len(), 10);
		// jwt pairs first, then ltpa2, paseto, saml.
		assert_eq!(jobs[0].headers, [("Authorization", "Bearer j1".to_owned())]);
		assert_eq!(jobs[4].headers, [("Cookie", "LtpaToken2=l1".to_owned())]);
		assert_eq!(jobs[6].headers, [("Authorization", "Bearer p1".to_owned())]);
		assert_eq!(jobs[8].url.query(), Some("SAMLRequest=s1"));
	}

	#[test]
	fn plan_skips_empty_and_null_entries() {
		let bundle = bundle_from(r#"{ "jwt": [" tok1 ", "", null, "   "] }"#);
		let jobs = sprayer(false).plan(&bundle);

		assert_eq!(jobs.len(), 2);
		assert_eq!(jobs[0].headers, [("Authorization", "Bearer tok1".to_owned())]);
	}

	#[test]
	fn saml_header_injection_adds_one_job_per_entry() {
		let bundle = bundle_from(r#"{ "saml": ["SAMLRequest: r1"] }"#);

		assert_eq!(sprayer(false).plan(&bundle).len(), 2);
		assert_eq!(sprayer(true).plan(&bundle).len(), 3);
	}
}
