//! Application settings resolved when the crate is compiled.
//!
//! The only setting is the base URL of the TastyForms API. Debug builds point
//! at the development server; release builds carry [`API_URL_PLACEHOLDER`],
//! which the packaging step replaces with the production URL (see
//! [`placeholder`]).

mod build_mode;
pub mod placeholder;

pub use build_mode::{BuildMode, ParseBuildModeError};
pub use placeholder::{Substitution, SubstitutionError, API_URL_PLACEHOLDER};

/// Development API endpoint, used by debug builds
pub const DEV_API_URL: &str = "https://dev.tastyformsapp.com";

/// API base URL of this build
///
/// Equal to [`DEV_API_URL`] when built with `debug_assertions`, and to
/// [`API_URL_PLACEHOLDER`] otherwise. No check is made that the placeholder
/// was substituted before distribution.
pub const API_URL: &str = BuildMode::CURRENT.api_url();

/// Returns [`API_URL`]
pub const fn api_url() -> &'static str {
    API_URL
}

/// Returns the build mode this crate was compiled with
pub const fn build_mode() -> BuildMode {
    BuildMode::CURRENT
}
