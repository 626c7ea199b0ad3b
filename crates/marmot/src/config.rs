use std::path::Path;

use crate::icon;
use crate::json;

/// The default manifest name.
pub const DEFAULT_NAME: &str = "Killer Marmot";

/// The default manifest short name.
pub const DEFAULT_SHORT_NAME: &str = "Marmot";

/// The default manifest start URL.
pub const DEFAULT_START_URL: &str = "index.html";

/// The default manifest display mode.
pub const DEFAULT_DISPLAY: &str = "standalone";

/// A defaults error related to validation.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	/// A member is empty.
	#[error("Default {0} is empty")]
	EmptyMember(&'static str),
}

/// A defaults result.
pub type Result<T> = std::result::Result<T, Error>;

json::json_struct! {
	/// The manifest values used by apps that do not override them.
	/// Use `Default::default` for the defaults; members missing from a file also take their default.
	#[serde(default)]
	pub struct Defaults {
		/// The app name.
		pub name: String,

		/// The short app name, shown where space is limited.
		pub short_name: String,

		/// The asset base name of the icon set.
		pub icon_name: String,

		/// The display mode.
		pub display: String,

		/// The URL opened when the app is launched.
		pub start_url: String,
	}
}

impl Defaults {
	/// Reads defaults from a JSON file.
	///
	/// # Arguments
	///
	/// * `path` - The path to the file.
	///
	/// # Errors
	///
	/// If the file cannot be read, [`Error::Io`] is returned.
	/// If the file is not valid, [`Error::Json`] is returned with the path to the offending member.
	/// If a member is empty, [`Error::Config`] is returned.
	///
	/// [`Error::Io`]: crate::Error::Io
	/// [`Error::Json`]: crate::Error::Json
	/// [`Error::Config`]: crate::Error::Config
	pub fn from_file<P>(path: P) -> crate::Result<Self>
	where
		P: AsRef<Path>,
	{
		let path = path.as_ref();
		let defaults: Self = json::from_file(path)?;

		defaults.validate()?;

		tracing::debug!(path = %path.display(), "read manifest defaults");

		Ok(defaults)
	}

	/// Checks that every member is non-empty.
	///
	/// # Errors
	///
	/// The first empty member is returned as [`Error::EmptyMember`].
	pub fn validate(&self) -> Result<()> {
		let members = [
			("name", &self.name),
			("short_name", &self.short_name),
			("icon_name", &self.icon_name),
			("display", &self.display),
			("start_url", &self.start_url),
		];

		match members.iter().find(|(_, value)| value.trim().is_empty()) {
			Some(&(member, _)) => Err(Error::EmptyMember(member)),
			None => Ok(()),
		}
	}

	/// Returns the icon set built from `icon_name`.
	#[must_use]
	pub fn icons(&self) -> Vec<icon::Icon> {
		icon::build_default_icons(&self.icon_name)
	}
}

impl Default for Defaults {
	fn default() -> Self {
		Self {
			name: DEFAULT_NAME.to_owned(),
			short_name: DEFAULT_SHORT_NAME.to_owned(),
			icon_name: icon::DEFAULT_ICON_NAME.to_owned(),
			display: DEFAULT_DISPLAY.to_owned(),
			start_url: DEFAULT_START_URL.to_owned(),
		}
	}
}
