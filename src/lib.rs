//! designkit: export design-system components as a standalone package.
//!
//! The engine takes a selection of component identifiers and a corpus of
//! component source texts, computes the transitive closure of internal
//! dependencies, classifies external ones, and assembles a deterministic
//! bundle: component sources, theme stylesheet, build config, dependency
//! manifest, setup guide, and an AI-assistant reference document.

pub mod bundle;
pub mod classify;
pub mod cli;
pub mod config;
pub mod corpus;
pub mod error;
pub mod generate;
pub mod registry;
pub mod resolve;
pub mod sink;
pub mod theme;
pub mod types;

pub use bundle::{assemble, Bundle};
pub use classify::{classify, DependencyFacts};
pub use error::{Error, Result};
pub use resolve::{estimate, resolve, Resolution, SizeEstimate};
pub use theme::{hex_to_hsl, Accent, Hsl, ThemeSelection};
pub use types::Corpus;
