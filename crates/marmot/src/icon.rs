use std::fmt;
use std::num::NonZeroU32;
use std::num::ParseIntError;
use std::str::FromStr;

use crate::json::json_struct;

/// The asset base name of the default icon set.
pub const DEFAULT_ICON_NAME: &str = "marmot";

/// The MIME type of every generated icon.
pub const ICON_TYPE: &str = "image/png";

/// The size classes of a generated icon set, in manifest order.
/// `None` is the scalable variant.
pub const ICON_SIZES: [Option<u32>; 6] = [None, Some(48), Some(96), Some(128), Some(200), Some(480)];

/// An error from parsing icon sizes.
#[derive(Debug, thiserror::Error)]
pub enum SizesError {
	/// The sizes are not of the form `WxH`.
	#[error("Icon sizes {0:?} must be \"any\" or of the form WxH")]
	Malformed(String),

	/// The width and height differ.
	#[error("Icon sizes {0:?} must be square")]
	NotSquare(String),

	/// A dimension is not a positive integer.
	#[error("Icon sizes {sizes:?} have an invalid dimension")]
	InvalidDimension {
		sizes: String,
		#[source]
		source: ParseIntError,
	},
}

/// The `sizes` member of a manifest icon.
///
/// This is represented as either the literal `any` or `WxH`.
#[derive(
	Debug,
	Clone,
	Copy,
	PartialEq,
	Eq,
	Hash,
	serde_with::SerializeDisplay,
	serde_with::DeserializeFromStr,
)]
pub enum Sizes {
	/// A vector icon that scales to any size.
	Any,

	/// A square icon with the given width and height, in pixels.
	Square(u32),
}

impl fmt::Display for Sizes {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Any => write!(f, "any"),
			Self::Square(size) => write!(f, "{size}x{size}"),
		}
	}
}

impl FromStr for Sizes {
	type Err = SizesError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		if s == "any" {
			return Ok(Self::Any);
		}

		let (width, height) = s
			.split_once('x')
			.ok_or_else(|| SizesError::Malformed(s.to_owned()))?;

		let dimension = |d: &str| {
			d.parse::<NonZeroU32>()
				.map(NonZeroU32::get)
				.map_err(|source| SizesError::InvalidDimension {
					sizes: s.to_owned(),
					source,
				})
		};

		let width = dimension(width)?;
		let height = dimension(height)?;

		if width == height {
			Ok(Self::Square(width))
		} else {
			Err(SizesError::NotSquare(s.to_owned()))
		}
	}
}

json_struct! {
	/// An image asset in a web app manifest.
	pub struct Icon {
		/// The path to the icon, relative to the app page.
		pub src: String,

		/// The sizes the icon can be displayed at.
		pub sizes: Sizes,

		/// The MIME type of the icon.
		#[serde(rename = "type")]
		pub mime_type: String,

		/// The pixel density the icon is intended for.
		pub density: u32,
	}
}

impl Icon {
	/// Creates an icon for the asset `name` at a size class.
	///
	/// # Arguments
	///
	/// * `name` - The asset base name, without extension.
	/// * `size` - The width and height of the icon, or None for the scalable variant.
	#[must_use]
	pub fn new(name: &str, size: Option<u32>) -> Self {
		let (src, sizes) = match size {
			Some(size) => (format!("../{name}_{size}.png"), Sizes::Square(size)),
			None => (format!("../{name}.png"), Sizes::Any),
		};

		Self {
			src,
			sizes,
			mime_type: ICON_TYPE.to_owned(),
			density: 1,
		}
	}
}

/// Builds the icon set for the asset `name`, one icon per entry in [`ICON_SIZES`].
///
/// The first icon is always the scalable one.
///
/// # Arguments
///
/// * `name` - The asset base name, without extension.
#[must_use]
pub fn build_default_icons(name: &str) -> Vec<Icon> {
	ICON_SIZES.iter().map(|&size| Icon::new(name, size)).collect()
}

/// Builds the icon set for [`DEFAULT_ICON_NAME`].
#[must_use]
pub fn default_icons() -> Vec<Icon> {
	build_default_icons(DEFAULT_ICON_NAME)
}
