//! Bundle-file loading behavior exercised through real files on disk.

// std
use std::{
	env, fs,
	path::PathBuf,
	process,
	time::{SystemTime, UNIX_EPOCH},
};
// self
use token_sprayer::{
	bundle::{TokenBundle, TokenKind},
	error::BundleError,
};

fn temp_path() -> PathBuf {
	let nanos = SystemTime::now()
		.duration_since(UNIX_EPOCH)
		.expect("Failed to read the system clock.")
		.as_nanos();
	let unique = format!("token_sprayer_bundle_{}_{nanos}.json", process::id());

	env::temp_dir().join(unique)
}

#[test]
fn loads_a_bundle_and_normalizes_its_entries() {
	let path = temp_path();

	fs::write(&path, r#"{ "jwt": [" tok1 ", "", null, 42], "saml": ["SAMLRequest: r1"] }"#)
		.expect("Failed to write bundle fixture.");

	let bundle = TokenBundle::load(&path).expect("Failed to load bundle fixture.");
	let jwt: Vec<_> = bundle.usable(TokenKind::Jwt).collect();
	let saml: Vec<_> = bundle.usable(TokenKind::Saml).collect();

	assert_eq!(jwt, ["tok1", "42"]);
	assert_eq!(saml, ["SAMLRequest: r1"]);
	assert_eq!(bundle.usable(TokenKind::Ltpa2).count(), 0);

	fs::remove_file(&path).expect("Failed to remove bundle fixture.");
}

#[test]
fn missing_bundle_file_is_a_read_error() {
	let path = temp_path();
	let result = TokenBundle::load(&path);

	assert!(matches!(result, Err(BundleError::Read { path: reported, .. }) if reported == path));
}

#[test]
fn malformed_bundle_file_is_a_parse_error() {
	let path = temp_path();

	fs::write(&path, r#"{ "jwt": "not-a-list" }"#).expect("Failed to write bundle fixture.");

	let result = TokenBundle::load(&path);

	assert!(matches!(result, Err(BundleError::Parse { .. })));

	fs::remove_file(&path).expect("Failed to remove bundle fixture.");
}

#[test]
fn truncated_json_is_a_parse_error() {
	let path = temp_path();

	fs::write(&path, r#"{ "jwt": ["tok1""#).expect("Failed to write bundle fixture.");

	let result = TokenBundle::load(&path);

	assert!(matches!(result, Err(BundleError::Parse { .. })));

	fs::remove_file(&path).expect("Failed to remove bundle fixture.");
}
