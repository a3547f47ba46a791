//! Request variants: the pure builders that turn one token into its HTTP placements.
//!
//! Every builder here is a deterministic function of a trimmed token string, its kind,
//! and the target URL. The returned [`RequestJob`]s are never mutated after
//! construction; the dispatcher submits them to the pool and forgets them.

// crates.io
use serde_json::{Map, Value};
// self
use crate::{
	_prelude::*,
	bundle::{SamlEntry, TokenKind},
};

/// Body payload attached to a [`RequestJob`].
#[derive(Clone, Debug, PartialEq)]
pub enum JobBody {
	/// JSON object body, sent as `application/json`.
	Json(Value),
	/// Form body, sent as `application/x-www-form-urlencoded`.
	Form(Vec<(String, String)>),
}

/// Fully-constructed request descriptor.
///
/// Proxy, per-request timeout, and TLS verification are not part of the job; they are
/// baked into the shared [`crate::http::SprayHttpClient`] every job runs on.
#[derive(Clone, Debug)]
pub struct RequestJob {
	/// HTTP method.
	pub method: Method,
	/// Absolute request URL; the SAML query variant bakes its parameter in here.
	pub url: Url,
	/// Headers carrying the token placement.
	pub headers: Vec<(&'static str, String)>,
	/// Optional body payload.
	pub body: Option<JobBody>,
}

/// Builds every request variant for one trimmed token of `kind`.
///
/// `jwt`, `ltpa2`, and `paseto` tokens each yield a header GET plus a JSON-body POST.
/// SAML entries yield a query-string GET plus a form-body POST, and a third raw-header
/// GET when `saml_header` is enabled. SAML entries whose payload is empty after prefix
/// stripping yield nothing.
pub fn build_jobs(kind: TokenKind, token: &str, target: &Url, saml_header: bool) -> Vec<RequestJob> {
	match kind {
		TokenKind::Jwt => bearer_pair(token, target, "token"),
		TokenKind::Ltpa2 => ltpa2_pair(token, target),
		TokenKind::Paseto => bearer_pair(token, target, "paseto"),
		TokenKind::Saml => saml_variants(token, target, saml_header),
	}
}

fn json_object(field: &str, value: String) -> Value {
	let mut map = Map::new();

	map.insert(field.to_owned(), Value::String(value));

	Value::Object(map)
}

fn bearer_pair(token: &str, target: &Url, body_field: &str) -> Vec<RequestJob> {
	vec![
		RequestJob {
			method: Method::GET,
			url: target.clone(),
			headers: vec![("Authorization", format!("Bearer {token}"))],
			body: None,
		},
		RequestJob {
			method: Method::POST,
			url: target.clone(),
			headers: Vec::new(),
			body: Some(JobBody::Json(json_object(body_field, token.to_owned()))),
		},
	]
}

fn ltpa2_pair(token: &str, target: &Url) -> Vec<RequestJob> {
	vec![
		RequestJob {
			method: Method::GET,
			url: target.clone(),
			headers: vec![("Cookie", format!("LtpaToken2={token}"))],
			body: None,
		},
		RequestJob {
			method: Method::POST,
			url: target.clone(),
			headers: Vec::new(),
			body: Some(JobBody::Json(json_object("cookie", format!("LtpaToken2={token}")))),
		},
	]
}

fn saml_variants(entry: &str, target: &Url, include_header: bool) -> Vec<RequestJob> {
	let parsed = SamlEntry::parse(entry);

	if parsed.value.is_empty() {
		return Vec::new();
	}

	let query_url = {
		let mut url = target.clone();

		url.query_pairs_mut().append_pair(parsed.param.as_str(), parsed.value);

		url
	};
	let mut jobs = vec![
		RequestJob { method: Method::GET, url: query_url, headers: Vec::new(), body: None },
		RequestJob {
			method: Method::POST,
			url: target.clone(),
			headers: Vec::new(),
			body: Some(JobBody::Form(vec![(
				parsed.param.as_str().to_owned(),
				parsed.value.to_owned(),
			)])),
		},
	];

	if include_header {
		jobs.push(RequestJob {
			method: Method::GET,
			url: target.clone(),
			headers: vec![(parsed.param.as_str(), parsed.value.to_owned())],
			body: None,
		});
	}

	jobs
}
