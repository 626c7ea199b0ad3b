use std::fmt;

use crate::json::json_view;

/// The store a related application is published on.
#[derive(serde::Serialize, Debug, PartialEq, Eq, Hash, Copy, Clone)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
	/// The Google Play store.
	Play,

	/// The Apple App Store.
	Ios,
}

impl fmt::Display for Platform {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Play => write!(f, "play"),
			Self::Ios => write!(f, "ios"),
		}
	}
}

json_view! {
	/// A native app linked from a manifest's `related_applications`.
	#[derive(Copy)]
	pub struct RelatedApp {
		/// The store the app is published on.
		pub platform: Platform,

		/// The app's identifier in the store.
		pub id: &'static str,

		/// A link to the app's store page, possibly carrying a referrer.
		pub url: Option<&'static str>,
	}
}

/// A Play app.
pub const PLAY: RelatedApp = RelatedApp {
	platform: Platform::Play,
	id: "com.sbg.crappybird",
	url: None,
};

/// The Play build of Killer Marmot itself.
pub const PLAY_REAL: RelatedApp = RelatedApp {
	platform: Platform::Play,
	id: "io.github.benfredwells.killermarmot",
	url: None,
};

/// [`PLAY`], linked through a Play Store referrer.
pub const PLAY_REFERRER: RelatedApp = RelatedApp {
	platform: Platform::Play,
	id: "com.sbg.crappybird",
	url: Some(concat!(
		"https://play.google.com/store/apps/details?id=com.sbg.crappybird&",
		"referrer=utm_source%3Dgoogle%26utm_medium%3Dcpc%26utm_term%3D",
		"podcast%252Bapps%26utm_content%3DdisplayAd1%26utm_campaign%3D",
		"podcast%252Bgeneralkeywords",
	)),
};

/// A Play app linked through a referrer outside the Play Store.
pub const PLAY_NON_GOOGLE_REFERRER: RelatedApp = RelatedApp {
	platform: Platform::Play,
	id: "com.google.samples.apps.iosched",
	url: Some(concat!(
		"http://a.localytics.com/android?id=com.google.samples.apps.iosched&",
		"referrer=utm_source%3Dother_app_banners_local%26utm_campaign%3D",
		"AppBanners%2520Local",
	)),
};

/// An iOS app.
pub const IOS: RelatedApp = RelatedApp {
	platform: Platform::Ios,
	id: "basdfasdf",
	url: None,
};
