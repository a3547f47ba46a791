//! Heuristic token-shape checks.
//!
//! The spray run never rejects an entry based on its shape; these checks only raise a
//! `warn!` when an entry looks like one kind but is filed under another (a PASETO string
//! in the `jwt` list, say), which almost always means a mis-assembled bundle.

// std
use std::sync::LazyLock;
// crates.io
use regex::Regex;
// self
use crate::bundle::TokenKind;

static JWT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"eyJ[A-Za-z0-9_-]+\.[A-Za-z0-9_-]+\.[A-Za-z0-9_-]+").expect("Invalid JWT pattern.")
});
static PASETO_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"v[0-9]\.(local|public)\.[A-Za-z0-9_-]+(?:\.[A-Za-z0-9_-]+)?")
		.expect("Invalid PASETO pattern.")
});
static LTPA2_PATTERN: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"(?i)LtpaToken2=").expect("Invalid LTPA2 pattern."));

/// Best-effort classification of a raw entry's shape.
///
/// Checks PASETO first, then the LTPA2 cookie marker, then JWT; a PASETO body is
/// base64url and can embed a JWT-looking `eyJ` run, so the more specific shapes win.
pub fn classify(entry: &str) -> Option<TokenKind> {
	if PASETO_PATTERN.is_match(entry) {
		return Some(TokenKind::Paseto);
	}
	if LTPA2_PATTERN.is_match(entry) {
		return Some(TokenKind::Ltpa2);
	}
	if JWT_PATTERN.is_match(entry) {
		return Some(TokenKind::Jwt);
	}

	None
}

/// Warns when an entry's shape disagrees with its declared bundle kind.
///
/// SAML entries carry arbitrary (usually base64/deflate) payloads and are never
/// shape-checked. Entries that match no known shape are reported at `debug!` only;
/// raw LTPA2 cookie values intentionally fall in that bucket.
pub fn warn_on_mismatch(kind: TokenKind, entry: &str) {
	if kind == TokenKind::Saml {
		return;
	}

	match classify(entry) {
		Some(detected) if detected != kind => tracing::warn!(
			declared = %kind,
			detected = %detected,
			"Token shape disagrees with its bundle kind."
		),
		None => tracing::debug!(declared = %kind, "Token matches no known shape."),
		_ => {},
	}
}
