use std::io;

use crate::config;
use crate::json;
use crate::registry;

/// A catch-all error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	// A defaults error.
	#[error(transparent)]
	Config(#[from] config::Error),

	// A registry error.
	#[error(transparent)]
	Registry(#[from] registry::Error),

	// An IO error.
	#[error(transparent)]
	Io(#[from] io::Error),

	// A JSON error.
	#[error(transparent)]
	Json(#[from] json::Error),
}

/// A catch-all result.
pub type Result<T> = std::result::Result<T, Error>;
