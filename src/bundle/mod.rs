//! Bundle assembly: orchestrates resolution, generation, and synthesis into
//! one flat path -> content tree, ready for the sink.

use std::collections::BTreeMap;

use crate::generate::{
    generate_assistant_guide, generate_build_config, generate_manifest, generate_setup_guide,
    generate_stylesheet, generate_utility_module,
};
use crate::resolve::{estimate, resolve, Resolution, SizeEstimate};
use crate::theme::ThemeSelection;
use crate::types::Corpus;

/// Logical paths of the generated artifacts within the bundle.
pub const COMPONENTS_DIR: &str = "components/ui";
pub const UTILITY_PATH: &str = "lib/utils.ts";
pub const STYLESHEET_PATH: &str = "styles/globals.css";
pub const BUILD_CONFIG_PATH: &str = "tailwind.config.js";
pub const MANIFEST_PATH: &str = "package.json";
pub const SETUP_GUIDE_PATH: &str = "README.md";
pub const ASSISTANT_GUIDE_PATH: &str = "PROMPT.md";

/// One export's complete logical file tree. Constructed fresh per export and
/// discarded after the sink consumes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bundle {
    /// Relative path -> text content, in deterministic path order.
    pub files: BTreeMap<String, String>,
    pub resolution: Resolution,
    pub estimate: SizeEstimate,
}

impl Bundle {
    pub fn file_count(&self) -> usize {
        self.files.len()
    }
}

/// Assemble the full export bundle for a selection.
///
/// Resolves once, then generates every artifact from the same resolution so
/// the manifest, stylesheet, and docs stay mutually consistent. Component
/// sources are copied verbatim; seeds without a corpus entry contribute no
/// file.
pub fn assemble<S: AsRef<str>>(
    selected: &[S],
    corpus: &Corpus,
    theme: &ThemeSelection,
    source_url: &str,
) -> Bundle {
    let resolution = resolve(selected, corpus);
    let size = estimate(selected, corpus);

    let mut files = BTreeMap::new();
    for id in &resolution.resolved {
        if let Some(source) = corpus.get(id) {
            files.insert(format!("{COMPONENTS_DIR}/{id}"), source.to_string());
        }
    }

    files.insert(UTILITY_PATH.to_string(), generate_utility_module());
    files.insert(STYLESHEET_PATH.to_string(), generate_stylesheet(theme));
    files.insert(BUILD_CONFIG_PATH.to_string(), generate_build_config());
    files.insert(MANIFEST_PATH.to_string(), generate_manifest(&resolution));
    files.insert(
        SETUP_GUIDE_PATH.to_string(),
        generate_setup_guide(resolution.resolved.len(), theme.accent, source_url),
    );
    files.insert(
        ASSISTANT_GUIDE_PATH.to_string(),
        generate_assistant_guide(&resolution.resolved, theme),
    );

    Bundle {
        files,
        resolution,
        estimate: size,
    }
}
