use std::sync::OnceLock;

use crate::app;
use crate::app::App;
use crate::apps::APPS;
use crate::config;
use crate::config::Defaults;
use crate::manifest::Manifest;

/// A registry error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	/// An app does not exist.
	#[error("No such app: {name}")]
	NotFound { name: String },

	/// An app is malformed.
	#[error("App {name} is invalid")]
	Invalid {
		name: &'static str,
		#[source]
		source: app::Error,
	},

	/// The defaults are malformed.
	#[error(transparent)]
	Defaults(#[from] config::Error),
}

/// A registry result.
pub type Result<T> = std::result::Result<T, Error>;

/// The registry of demo apps, keyed by name.
///
/// The apps themselves are fixed at compile time; a registry only adds the defaults they resolve against.
pub struct Registry {
	apps: &'static phf::OrderedMap<&'static str, App>,
	defaults: Defaults,
}

impl Registry {
	/// Validates every app and returns a registry over them.
	///
	/// # Arguments
	///
	/// * `defaults` - The manifest values used by apps that do not override them.
	///
	/// # Errors
	///
	/// If the defaults are malformed, [`Error::Defaults`] is returned.
	///
	/// If any app is malformed, [`Error::Invalid`] is returned for the first one.
	pub fn load(defaults: Defaults) -> Result<Self> {
		Self::from_apps(&APPS, defaults)
	}

	pub(crate) fn from_apps(
		apps: &'static phf::OrderedMap<&'static str, App>,
		defaults: Defaults,
	) -> Result<Self> {
		defaults.validate()?;

		for (&name, app) in apps.entries() {
			app.validate().map_err(|source| {
				tracing::warn!(app = name, error = %source, "invalid app");

				Error::Invalid { name, source }
			})?;
		}

		tracing::debug!(apps = apps.len(), "loaded app registry");

		Ok(Self { apps, defaults })
	}

	/// Returns the defaults apps are resolved against.
	#[must_use]
	pub fn defaults(&self) -> &Defaults {
		&self.defaults
	}

	/// Returns an app by name.
	///
	/// # Arguments
	///
	/// * `name` - The name of the app.
	///
	/// # Errors
	///
	/// If the app does not exist, [`Error::NotFound`] is returned.
	pub fn get(&self, name: &str) -> Result<&'static App> {
		let apps = self.apps;

		apps.get(name).ok_or_else(|| Error::NotFound {
			name: name.to_owned(),
		})
	}

	/// Checks if an app exists.
	#[must_use]
	pub fn contains(&self, name: &str) -> bool {
		self.apps.contains_key(name)
	}

	/// Resolves the manifest members of an app by name.
	///
	/// # Arguments
	///
	/// * `name` - The name of the app.
	///
	/// # Errors
	///
	/// If the app does not exist, [`Error::NotFound`] is returned.
	pub fn manifest(&self, name: &str) -> Result<Manifest> {
		Ok(self.get(name)?.manifest(&self.defaults))
	}

	/// Yields each app with its name, in name order.
	pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static App)> {
		let apps = self.apps;

		apps.entries().map(|(&name, app)| (name, app))
	}

	/// Yields each app name, in order.
	pub fn names(&self) -> impl Iterator<Item = &'static str> {
		let apps = self.apps;

		apps.keys().copied()
	}

	/// Returns the number of apps.
	#[must_use]
	pub fn len(&self) -> usize {
		self.apps.len()
	}

	/// Checks if there are no apps.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.apps.is_empty()
	}
}

/// Returns the registry with the default manifest values.
///
/// The registry is validated on first use.
#[must_use]
#[allow(clippy::missing_panics_doc)]
pub fn registry() -> &'static Registry {
	static REGISTRY: OnceLock<Registry> = OnceLock::new();

	REGISTRY.get_or_init(|| Registry::load(Defaults::default()).expect("built-in apps should be valid"))
}

/// Returns an app by name from [`registry`].
///
/// # Arguments
///
/// * `name` - The name of the app.
///
/// # Errors
///
/// If the app does not exist, [`Error::NotFound`] is returned.
pub fn lookup(name: &str) -> Result<&'static App> {
	registry().get(name)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::app::Override;
	use crate::app::DEFAULT_VIEWPORT;
	use crate::icon;
	use crate::related;

	const NAMES: [&str; 15] = [
		"ios",
		"ios_and_play",
		"ios_and_web",
		"none",
		"play",
		"play_and_ios",
		"play_and_web",
		"play_non_google_link_referrer",
		"play_referrer",
		"web",
		"web_and_ios",
		"web_and_play",
		"web_broken",
		"web_no_meta_viewport",
		"web_redispatch",
	];

	#[test]
	fn registry_loads() {
		assert!(Registry::load(Defaults::default()).is_ok());
	}

	#[test]
	fn registry_rejects_invalid_app() {
		static APPS: phf::OrderedMap<&'static str, App> = phf::phf_ordered_map! {
			"good" => App::new("Site with no manifest."),
			"bad" => App {
				prefer_related_applications: true,
				..App::new("Site preferring nothing.")
			},
		};

		let result = Registry::from_apps(&APPS, Defaults::default());

		assert!(matches!(
			result,
			Err(Error::Invalid {
				name: "bad",
				source: app::Error::PreferWithoutRelated,
			})
		));
	}

	#[test]
	fn registry_rejects_invalid_defaults() {
		let defaults: Defaults =
			serde_json::from_str(r#"{"icon_name": "", "name": ""}"#).unwrap();

		assert!(matches!(
			Registry::load(defaults),
			Err(Error::Defaults(config::Error::EmptyMember("name")))
		));

		let defaults = Defaults {
			icon_name: String::new(),
			..Defaults::default()
		};

		assert!(matches!(
			Registry::load(defaults),
			Err(Error::Defaults(config::Error::EmptyMember("icon_name")))
		));
	}

	#[test]
	fn registry_names() {
		let names: Vec<_> = registry().names().collect();

		assert_eq!(names, NAMES);
		assert_eq!(registry().len(), NAMES.len());
		assert!(!registry().is_empty());
	}

	#[test]
	fn registry_descriptions() {
		for (name, app) in registry().iter() {
			assert!(!app.description.trim().is_empty(), "{name} has no description");
			assert!(registry().contains(name));
		}
	}

	#[test]
	fn lookup_not_found() {
		let err = lookup("nonexistent-key").unwrap_err();

		assert!(matches!(&err, Error::NotFound { name } if name == "nonexistent-key"));
		assert_eq!(err.to_string(), "No such app: nonexistent-key");
		assert!(!registry().contains("nonexistent-key"));
	}

	#[test]
	fn lookup_idempotent() {
		let first = lookup("web").unwrap();
		let second = lookup("web").unwrap();

		assert!(std::ptr::eq(first, second));
	}

	#[test]
	fn lookup_web() {
		let app = lookup("web").unwrap();

		assert!(app.load_index_script);
		assert!(app.link_manifest);
		assert_eq!(app.viewport_content, Some(DEFAULT_VIEWPORT));
		assert!(app.web_app_defaults);
		assert!(app.related_applications.is_empty());
		assert!(!app.prefer_related_applications);
		assert!(!app.include_referrer_meta);
	}

	#[test]
	fn lookup_ios_and_play() {
		let app = lookup("ios_and_play").unwrap();

		assert!(app.prefer_related_applications);
		assert_eq!(app.related_applications, [related::IOS, related::PLAY]);

		let app = lookup("play_and_ios").unwrap();
		assert_eq!(app.related_applications, [related::PLAY, related::IOS]);
	}

	#[test]
	fn lookup_web_broken() {
		let app = lookup("web_broken").unwrap();

		assert_eq!(app.icons, Override::Value("missing"));
		assert_eq!(app.display_mode, Override::Omit);

		let icons = app.icon_list().value().unwrap();
		assert_eq!(icons.len(), 6);
		assert!(icons.iter().all(|i| i.src.starts_with("../missing")));

		// Other web apps leave the display mode to its default.
		assert_eq!(lookup("web").unwrap().display_mode, Override::Default);
	}

	#[test]
	fn lookup_referrers() {
		for name in ["play_referrer", "play_non_google_link_referrer"] {
			let app = lookup(name).unwrap();

			assert!(app.include_referrer_meta);
			assert!(app.related_applications.iter().all(|r| r.url.is_some()));
		}
	}

	#[test]
	fn prefer_implies_related() {
		for (name, app) in registry().iter() {
			if app.prefer_related_applications {
				assert!(!app.related_applications.is_empty(), "{name}");
			}
		}
	}

	#[test]
	fn web_defaults_use_default_icons() {
		let default_icons = icon::build_default_icons("marmot");

		for (name, app) in registry().iter() {
			if app.web_app_defaults && app.icons.is_default() {
				let manifest = registry().manifest(name).unwrap();

				assert_eq!(manifest.icons.as_ref(), Some(&default_icons), "{name}");
			}
		}
	}

	#[test]
	fn manifest_web_broken() {
		let manifest = registry().manifest("web_broken").unwrap();

		assert_eq!(manifest.display, None);
		assert_eq!(manifest.icons, Some(icon::build_default_icons("missing")));
		assert_eq!(manifest.name.as_deref(), Some("Killer Marmot"));
	}

	#[test]
	fn manifest_related_only() {
		let manifest = registry().manifest("play").unwrap();

		assert_eq!(manifest.name, None);
		assert_eq!(manifest.icons, None);
		assert_eq!(manifest.display, None);
		assert_eq!(manifest.related_applications, Some(vec![related::PLAY]));
		assert_eq!(manifest.prefer_related_applications, Some(true));
	}

	#[test]
	fn manifest_none() {
		assert!(registry().manifest("none").unwrap().is_empty());
		assert!(matches!(
			registry().manifest("nonexistent-key"),
			Err(Error::NotFound { .. })
		));
	}

	#[test]
	fn manifest_custom_defaults() {
		let defaults = Defaults {
			name: "Friendly Marmot".to_owned(),
			..Defaults::default()
		};
		let registry = Registry::load(defaults).unwrap();

		let manifest = registry.manifest("web").unwrap();

		assert_eq!(manifest.name.as_deref(), Some("Friendly Marmot"));
		assert_eq!(registry.defaults().short_name, "Marmot");
	}
}
