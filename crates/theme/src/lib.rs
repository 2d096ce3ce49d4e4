//! Widget theming: recognized branding options, defaults, and a JSON file
//! store with explicit load-at-startup / save-on-update lifecycle. Consumers
//! get the resolved [`ThemeConfig`] passed to them; there is no ambient
//! theme global.

mod error;
mod fs;
mod state;
mod types;

pub use error::{Error, Result};
pub use state::ThemeStore;
pub use types::ThemeConfig;
