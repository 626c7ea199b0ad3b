use crate::app::App;
use crate::config::Defaults;
use crate::icon::Icon;
use crate::json::json_view;
use crate::related::RelatedApp;

json_view! {
	/// The members of an app's web app manifest, with defaults filled in.
	///
	/// Members are declared in the order they are documented in the Web App Manifest specification,
	/// and are named after their manifest counterparts. Absent members are skipped when serialized.
	#[derive(Default)]
	pub struct Manifest {
		pub name: Option<String>,
		pub short_name: Option<String>,
		pub icons: Option<Vec<Icon>>,
		pub display: Option<String>,
		pub start_url: Option<String>,
		pub related_applications: Option<Vec<RelatedApp>>,
		pub prefer_related_applications: Option<bool>,
	}
}

impl Manifest {
	/// Resolves the manifest members of `app`.
	///
	/// If the app uses web app defaults, the name, short name, icons, display and start URL are taken from `defaults`.
	/// Each of the app's overrides is then applied on its own, so an override can add a member without web app defaults,
	/// or remove one that has a default.
	///
	/// # Arguments
	///
	/// * `app` - The app to resolve.
	/// * `defaults` - The values used for members the app does not override.
	#[must_use]
	pub fn resolve(app: &App, defaults: &Defaults) -> Self {
		let web = app.web_app_defaults;
		let default = |value: &str| web.then(|| value.to_owned());

		let related = app.related_applications;

		Self {
			name: app.app_name.map(str::to_owned).apply(default(&defaults.name)),
			short_name: app
				.app_short_name
				.map(str::to_owned)
				.apply(default(&defaults.short_name)),
			icons: app.icon_list().apply(web.then(|| defaults.icons())),
			display: app
				.display_mode
				.map(str::to_owned)
				.apply(default(&defaults.display)),
			start_url: app
				.start_url
				.map(str::to_owned)
				.apply(default(&defaults.start_url)),
			related_applications: (!related.is_empty()).then(|| related.to_vec()),
			prefer_related_applications: app.prefer_related_applications.then_some(true),
		}
	}

	/// Checks if the manifest has no members.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		*self == Self::default()
	}
}
