use crate::app::App;
use crate::app::Override;
use crate::app::DEFAULT_VIEWPORT;
use crate::related::IOS;
use crate::related::PLAY;
use crate::related::PLAY_NON_GOOGLE_REFERRER;
use crate::related::PLAY_REAL;
use crate::related::PLAY_REFERRER;

/// Map of app names to their descriptors, in name order.
pub(crate) static APPS: phf::OrderedMap<&'static str, App> = phf::phf_ordered_map! {
	"ios" => App {
		link_manifest: true,
		prefer_related_applications: true,
		related_applications: &[IOS],
		..App::new("Site with a related iOS app in the manifest.")
	},

	"ios_and_play" => App {
		link_manifest: true,
		prefer_related_applications: true,
		related_applications: &[IOS, PLAY],
		..App::new("Site with a related iOS and play app in the manifest.")
	},

	"ios_and_web" => App {
		load_index_script: true,
		link_manifest: true,
		web_app_defaults: true,
		prefer_related_applications: true,
		related_applications: &[IOS],
		..App::new("Site which is a valid web app, but has a preferred iOS app in its manifest.")
	},

	"none" => App {
		load_index_script: true,
		..App::new("Site with no manifest.")
	},

	"play" => App {
		link_manifest: true,
		prefer_related_applications: true,
		related_applications: &[PLAY],
		..App::new("Site with a related play app in the manifest.")
	},

	"play_and_ios" => App {
		link_manifest: true,
		prefer_related_applications: true,
		related_applications: &[PLAY, IOS],
		..App::new("Site with a related play app, and iOS app, in its manifest.")
	},

	"play_and_web" => App {
		load_index_script: true,
		link_manifest: true,
		web_app_defaults: true,
		prefer_related_applications: true,
		related_applications: &[PLAY],
		..App::new("Site which is a valid web app, but has a preferred play app in its manifest.")
	},

	"play_non_google_link_referrer" => App {
		link_manifest: true,
		include_referrer_meta: true,
		prefer_related_applications: true,
		related_applications: &[PLAY_NON_GOOGLE_REFERRER],
		..App::new("Site with a related play app (non-Play-Store referrer) in the manifest.")
	},

	"play_referrer" => App {
		link_manifest: true,
		include_referrer_meta: true,
		prefer_related_applications: true,
		related_applications: &[PLAY_REFERRER],
		..App::new("Site with a related play app (Play Store referrer) in the manifest.")
	},

	"web" => App {
		load_index_script: true,
		link_manifest: true,
		viewport_content: Some(DEFAULT_VIEWPORT),
		web_app_defaults: true,
		..App::new("Site which is a valid web app.")
	},

	"web_and_ios" => App {
		load_index_script: true,
		link_manifest: true,
		viewport_content: Some(DEFAULT_VIEWPORT),
		web_app_defaults: true,
		related_applications: &[IOS],
		..App::new("Site which is a valid web app, and also with a non-preferred iOS app in its manifest.")
	},

	"web_and_play" => App {
		load_index_script: true,
		link_manifest: true,
		viewport_content: Some(DEFAULT_VIEWPORT),
		web_app_defaults: true,
		related_applications: &[PLAY, PLAY_REAL],
		..App::new("Site which is a valid web, and also with a non-preferred play app in its manifest.")
	},

	"web_broken" => App {
		load_index_script: true,
		link_manifest: true,
		viewport_content: Some(
			"minimum-scale=0.6, maximum-scale=5.0, user-scalable=fixed, INITIAL-SCALE=1.0, width=device-width",
		),
		web_app_defaults: true,
		icons: Override::Value("missing"),
		display_mode: Override::Omit,
		..App::new("Site which is a broken web app.")
	},

	"web_no_meta_viewport" => App {
		load_index_script: true,
		link_manifest: true,
		web_app_defaults: true,
		..App::new("Site which is missing a viewport.")
	},

	"web_redispatch" => App {
		load_index_script: true,
		link_manifest: true,
		viewport_content: Some(DEFAULT_VIEWPORT),
		web_app_defaults: true,
		..App::new("Site which is a valid web app.")
	},
};
