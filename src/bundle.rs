//! Token-bundle loading and normalization.
//!
//! A bundle is a single JSON object mapping token kinds to ordered lists of raw entries:
//!
//! ```json
//! { "jwt": ["eyJ..."], "ltpa2": ["AAEC..."], "paseto": ["v2.local..."], "saml": ["SAMLResponse: PHNh..."] }
//! ```
//!
//! Every key is optional. `null` entries are skipped silently, non-string scalars are
//! coerced to their JSON text, and each surviving entry is trimmed before use; entries
//! that are empty after trimming produce no jobs and are never counted.

// std
use std::fs;
// crates.io
use serde_json::Value;
// self
use crate::{_prelude::*, error::BundleError};

/// Token kinds understood by the sprayer, in bundle insertion order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
	/// JSON Web Token.
	Jwt,
	/// WebSphere LTPA2 cookie token.
	Ltpa2,
	/// Platform-Agnostic Security Token.
	Paseto,
	/// SAML request/response payload.
	Saml,
}
impl TokenKind {
	/// All kinds, in the order their entries are scheduled.
	pub const ALL: [Self; 4] = [Self::Jwt, Self::Ltpa2, Self::Paseto, Self::Saml];

	/// Returns the bundle key for this kind, also used as a stable log label.
	pub const fn as_str(self) -> &'static str {
		match self {
			TokenKind::Jwt => "jwt",
			TokenKind::Ltpa2 => "ltpa2",
			TokenKind::Paseto => "paseto",
			TokenKind::Saml => "saml",
		}
	}
}
impl Display for TokenKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Raw bundle entry.
///
/// Deserialization coerces non-string scalars (numbers, booleans) to their JSON text
/// instead of rejecting them; `null` never reaches this type because bundle lists hold
/// `Option<RawEntry>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawEntry(String);
impl RawEntry {
	/// Returns the entry trimmed of surrounding whitespace, or `None` when nothing remains.
	pub fn trimmed(&self) -> Option<&str> {
		let view = self.0.trim();

		(!view.is_empty()).then_some(view)
	}
}
impl<'de> Deserialize<'de> for RawEntry {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		let raw = match Value::deserialize(deserializer)? {
			Value::String(s) => s,
			other => other.to_string(),
		};

		Ok(Self(raw))
	}
}
/// Immutable token bundle, loaded once per run.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct TokenBundle {
	/// JWT entries.
	#[serde(default)]
	pub jwt: Vec<Option<RawEntry>>,
	/// LTPA2 entries (raw cookie values, without the `LtpaToken2=` prefix).
	#[serde(default)]
	pub ltpa2: Vec<Option<RawEntry>>,
	/// PASETO entries.
	#[serde(default)]
	pub paseto: Vec<Option<RawEntry>>,
	/// SAML entries, optionally prefixed `SAMLRequest:` / `SAMLResponse:`.
	#[serde(default)]
	pub saml: Vec<Option<RawEntry>>,
}
impl TokenBundle {
	/// Loads a bundle from a JSON file.
	///
	/// Failures here are the fatal tier: the caller must abort before scheduling any job.
	pub fn load(path: impl AsRef<Path>) -> Result<Self, BundleError> {
		let path = path.as_ref();
		let bytes = fs::read(path)
			.map_err(|e| BundleError::Read { path: path.to_owned(), source: e })?;
		let mut deserializer = serde_json::Deserializer::from_slice(&bytes);

		serde_path_to_error::deserialize(&mut deserializer)
			.map_err(|e| BundleError::Parse { path: path.to_owned(), source: e })
	}

	/// Returns the raw entry list filed under `kind`.
	pub fn entries(&self, kind: TokenKind) -> &[Option<RawEntry>] {
		match kind {
			TokenKind::Jwt => &self.jwt,
			TokenKind::Ltpa2 => &self.ltpa2,
			TokenKind::Paseto => &self.paseto,
			TokenKind::Saml => &self.saml,
		}
	}

	/// Iterates the usable entries for `kind`: nulls skipped, whitespace trimmed,
	/// empty-after-trim entries dropped.
	pub fn usable(&self, kind: TokenKind) -> impl Iterator<Item = &str> {
		self.entries(kind).iter().flatten().filter_map(RawEntry::trimmed)
	}
}

/// SAML parameter selected by a bundle entry's prefix.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SamlParam {
	/// `SAMLRequest` parameter/header name. The default when no prefix is present.
	Request,
	/// `SAMLResponse` parameter/header name.
	Response,
}
impl SamlParam {
	/// Returns the wire-level parameter (and header) name.
	pub const fn as_str(self) -> &'static str {
		match self {
			SamlParam::Request => "SAMLRequest",
			SamlParam::Response => "SAMLResponse",
		}
	}
}
impl Display for SamlParam {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// A SAML bundle entry split into its parameter name and payload value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SamlEntry<'a> {
	/// Parameter name selected by the entry's prefix.
	pub param: SamlParam,
	/// Payload value with the prefix and surrounding whitespace stripped.
	pub value: &'a str,
}
impl<'a> SamlEntry<'a> {
	/// Splits a trimmed bundle entry into its parameter name and value.
	///
	/// A `SAMLRequest:` or `SAMLResponse:` prefix selects the parameter and is stripped
	/// (the remainder is trimmed again); anything else is taken whole as a `SAMLRequest`
	/// value.
	pub fn parse(entry: &'a str) -> Self {
		if let Some(rest) = entry.strip_prefix("SAMLRequest:") {
			return Self { param: SamlParam::Request, value: rest.trim() };
		}
		if let Some(rest) = entry.strip_prefix("SAMLResponse:") {
			return Self { param: SamlParam::Response, value: rest.trim() };
		}

		Self { param: SamlParam::Request, value: entry }
	}
}
