use crate::config::Defaults;
use crate::icon;
use crate::icon::Icon;
use crate::manifest::Manifest;
use crate::related::Platform;
use crate::related::RelatedApp;

/// The viewport used by most demo pages.
pub const DEFAULT_VIEWPORT: &str = "width=device-width, initial-scale=1";

/// An app descriptor error related to validation.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	/// An app has no description.
	#[error("App description is empty")]
	EmptyDescription,

	/// An app prefers related applications, but has none.
	#[error("App prefers related applications, but none are listed")]
	PreferWithoutRelated,

	/// An app overrides its icons with an empty asset name.
	#[error("App icon asset name is empty")]
	EmptyIconName,

	/// A related application has no store identifier.
	#[error("Related {platform} application has an empty id")]
	EmptyId { platform: Platform },

	/// A related application's URL is invalid.
	#[error("Related application URL {url:?} is invalid")]
	InvalidUrl {
		url: &'static str,
		#[source]
		source: url::ParseError,
	},
}

/// An app descriptor result.
pub type Result<T> = std::result::Result<T, Error>;

/// A field that may fall back to a default, be set, or be left out entirely.
#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone, Default)]
pub enum Override<T> {
	/// Use the default value, if there is one.
	#[default]
	Default,

	/// Use this value.
	Value(T),

	/// Leave the field out, even if there is a default.
	Omit,
}

impl<T> Override<T> {
	/// Applies the override on top of `current`.
	///
	/// # Arguments
	///
	/// * `current` - The value the field would have without this override.
	#[must_use]
	pub fn apply(self, current: Option<T>) -> Option<T> {
		match self {
			Self::Default => current,
			Self::Value(value) => Some(value),
			Self::Omit => None,
		}
	}

	/// Maps an overridden value with `f`, keeping `Default` and `Omit` as is.
	#[must_use]
	pub fn map<U, F>(self, f: F) -> Override<U>
	where
		F: FnOnce(T) -> U,
	{
		match self {
			Self::Default => Override::Default,
			Self::Value(value) => Override::Value(f(value)),
			Self::Omit => Override::Omit,
		}
	}

	/// Returns the overridden value, if any.
	#[must_use]
	pub fn value(self) -> Option<T> {
		match self {
			Self::Value(value) => Some(value),
			Self::Default | Self::Omit => None,
		}
	}

	/// Checks if the field is left to its default.
	#[must_use]
	pub fn is_default(&self) -> bool {
		matches!(self, Self::Default)
	}

	/// Checks if the field is left out.
	#[must_use]
	pub fn is_omit(&self) -> bool {
		matches!(self, Self::Omit)
	}
}

/// A demo app, describing how its page and manifest are templated.
///
/// Fields that are not set fall back to their defaults when the app is resolved, one field at a time.
/// Use [`App::new`] with struct update syntax to define one:
///
/// ```
/// use marmot::App;
///
/// static APP: App = App {
/// 	link_manifest: true,
/// 	..App::new("Site with a manifest.")
/// };
/// # assert!(APP.validate().is_ok());
/// ```
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
#[allow(clippy::struct_excessive_bools)]
pub struct App {
	/// What the app demonstrates.
	pub description: &'static str,

	/// Whether the page loads `index.js`.
	pub load_index_script: bool,

	/// Whether the page links to `manifest.json`.
	pub link_manifest: bool,

	/// The content of the page's viewport meta tag. If None, there is no tag.
	pub viewport_content: Option<&'static str>,

	/// Whether the page includes a referrer meta tag.
	pub include_referrer_meta: bool,

	/// Whether the manifest carries a name, short name, icons, display mode and start URL.
	/// Each can still be overridden below.
	pub web_app_defaults: bool,

	/// The asset base name of the manifest icons, expanded with [`icon::build_default_icons`].
	/// Only icon sets of that shape can be expressed; use [`App::icon_list`] for the icons themselves.
	pub icons: Override<&'static str>,

	/// The manifest display mode.
	pub display_mode: Override<&'static str>,

	/// The manifest name.
	pub app_name: Override<&'static str>,

	/// The manifest short name.
	pub app_short_name: Override<&'static str>,

	/// The manifest start URL.
	pub start_url: Override<&'static str>,

	/// Whether the related applications are preferred over the web app.
	pub prefer_related_applications: bool,

	/// Native apps linked from the manifest, in order.
	pub related_applications: &'static [RelatedApp],
}

impl App {
	/// Returns an app with only a description, and every other field left to its default.
	#[must_use]
	pub const fn new(description: &'static str) -> Self {
		Self {
			description,
			load_index_script: false,
			link_manifest: false,
			viewport_content: None,
			include_referrer_meta: false,
			web_app_defaults: false,
			icons: Override::Default,
			display_mode: Override::Default,
			app_name: Override::Default,
			app_short_name: Override::Default,
			start_url: Override::Default,
			prefer_related_applications: false,
			related_applications: &[],
		}
	}

	/// Returns the icon override, expanded into a full icon set.
	#[must_use]
	pub fn icon_list(&self) -> Override<Vec<Icon>> {
		self.icons.map(icon::build_default_icons)
	}

	/// Resolves the app's manifest members against `defaults`.
	///
	/// # Arguments
	///
	/// * `defaults` - The values used for fields that are not overridden.
	#[must_use]
	pub fn manifest(&self, defaults: &Defaults) -> Manifest {
		Manifest::resolve(self, defaults)
	}

	/// Checks that the app is well-formed.
	///
	/// # Errors
	///
	/// The first violated constraint is returned as an [`Error`].
	pub fn validate(&self) -> Result<()> {
		if self.description.trim().is_empty() {
			return Err(Error::EmptyDescription);
		}

		if self.prefer_related_applications && self.related_applications.is_empty() {
			return Err(Error::PreferWithoutRelated);
		}

		if let Override::Value(name) = self.icons {
			if name.is_empty() {
				return Err(Error::EmptyIconName);
			}
		}

		for related in self.related_applications {
			if related.id.is_empty() {
				return Err(Error::EmptyId {
					platform: related.platform,
				});
			}

			if let Some(url) = related.url {
				url::Url::parse(url).map_err(|source| Error::InvalidUrl { url, source })?;
			}
		}

		Ok(())
	}
}
