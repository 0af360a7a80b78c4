//! reduxify CLI library
//!
//! Wires Redux state management into an existing front-end project: detects
//! the project flavor, generates store boilerplate, installs dependencies,
//! and wraps the root component in a `<Provider>`.

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

pub mod commands;
pub mod inject;
pub mod install;
pub mod project;
pub mod templates;

pub use commands::SetupCommand;
pub use inject::{inject_provider, InjectOutcome};
pub use project::{classify, locate_entry_file, ProjectType};
pub use templates::{MaterializeReport, TemplateBundle};

/// Redux wiring flavor chosen by the user at the setup prompt
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SetupMode {
    /// RTK Query - API-driven data fetching layer (default)
    #[default]
    RtkQuery,
    /// Plain reducer store with a `createSlice` auth slice
    NormalReducer,
}

impl SetupMode {
    /// Human-readable name, as shown in the setup prompt
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::RtkQuery => "RTK Query",
            Self::NormalReducer => "Normal Reducer",
        }
    }
}
