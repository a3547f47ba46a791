//! Token sprayer—load a bundle of JWT/LTPA2/PASETO/SAML tokens and blast them at a target
//! in every placement an auth layer might read, through your intercepting proxy.
//!
//! The crate is deliberately linear: load the bundle once, build every request variant as
//! an immutable [`job::RequestJob`], push them all through a bounded worker pool, and wait
//! for the pool to drain. Responses are never inspected; the interesting signal shows up
//! in the proxy sitting between the sprayer and the target.

#![deny(clippy::all, missing_docs)]

pub mod bundle;
pub mod cli;
pub mod detect;
pub mod error;
pub mod http;
pub mod job;
pub mod spray;

mod _prelude {
	pub use std::{
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		path::{Path, PathBuf},
		sync::Arc,
		time::Duration,
	};

	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError, Method};
	pub use serde::Deserialize;
	pub use thiserror::Error as ThisError;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

pub use reqwest;
pub use url;
