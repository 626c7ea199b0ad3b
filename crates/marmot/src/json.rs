use std::fs;
use std::io;
use std::path::Path;

use serde::de;

/// A JSON (de)serialization error.
pub type Error = serde_path_to_error::Error<serde_json::Error>;

/// Deserialize a type `T` from a reader as JSON.
/// The reader is wrapped in a buffered reader.
///
/// # Arguments
///
/// * `reader` - The reader to deserialize from.
///
/// # Errors
///
/// Errors from `serde_path_to_error` are returned verbatim.
pub fn from_reader<R, T>(reader: R) -> Result<T, Error>
where
	R: io::Read,
	T: de::DeserializeOwned,
{
	let reader = io::BufReader::new(reader);
	let de = &mut serde_json::Deserializer::from_reader(reader);

	serde_path_to_error::deserialize(de)
}

/// Deserialize a type `T` from a JSON file.
///
/// # Arguments
///
/// * `path` - The path to the file.
///
/// # Errors
///
/// If the file cannot be opened, [`Error::Io`] is returned.
/// Otherwise, errors from `serde_path_to_error` are returned as [`Error::Json`].
///
/// [`Error::Io`]: crate::Error::Io
/// [`Error::Json`]: crate::Error::Json
pub fn from_file<P, T>(path: P) -> crate::Result<T>
where
	P: AsRef<Path>,
	T: de::DeserializeOwned,
{
	let file = fs::File::open(path)?;

	Ok(from_reader(file)?)
}

/// Macro for generating a JSON struct.
macro_rules! json_struct {
	($item:item) => {
		#[serde_with::serde_as]
		#[serde_with::skip_serializing_none]
		#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
		$item
	};
}

/// Macro for generating a serialize-only JSON struct.
/// Used for views over static data, which cannot be deserialized into.
macro_rules! json_view {
	($item:item) => {
		#[serde_with::skip_serializing_none]
		#[derive(serde::Serialize, Debug, Clone, PartialEq, Eq)]
		$item
	};
}

pub(crate) use json_struct;
pub(crate) use json_view;
