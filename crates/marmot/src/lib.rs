//! Metadata for the Killer Marmot demo apps.
//!
//! Each app is a fixed combination of page flags and web app manifest members, used to template its demo page and manifest.
//! Look apps up by name with [`lookup`], or resolve their manifest members with [`Registry::manifest`].

pub mod app;
mod apps;
pub mod config;
pub mod error;
pub mod icon;
pub mod json;
pub mod manifest;
pub mod registry;
pub mod related;

#[cfg(test)]
mod test;

pub use app::App;
pub use app::Override;
pub use config::Defaults;
pub use error::Error;
pub use error::Result;
pub use icon::build_default_icons;
pub use icon::Icon;
pub use manifest::Manifest;
pub use registry::lookup;
pub use registry::registry;
pub use registry::Registry;
pub use related::RelatedApp;
