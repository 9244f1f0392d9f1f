//! Export sink: writes an assembled bundle into an output directory whose
//! internal structure mirrors the bundle's logical paths exactly.

use std::path::{Path, PathBuf};

use crate::bundle::Bundle;
use crate::error::{Error, Result};
use crate::theme::Accent;

/// Directory name for one export, derived from the accent.
pub fn export_dir_name(accent: Accent) -> String {
    format!("design-system-{accent}")
}

/// Write every bundle file under `out_dir/<export_dir_name>`, creating parent
/// directories as needed. Returns the export root.
pub fn write_bundle(bundle: &Bundle, out_dir: &Path, accent: Accent) -> Result<PathBuf> {
    let root = out_dir.join(export_dir_name(accent));

    for (rel_path, content) in &bundle.files {
        let dest = root.join(rel_path);
        if let Some(parent) = dest.parent() {
            std::fs::create_dir_all(parent).map_err(|source| Error::SinkWrite {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        std::fs::write(&dest, content).map_err(|source| Error::SinkWrite {
            path: dest.clone(),
            source,
        })?;
    }

    Ok(root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundle::assemble;
    use crate::theme::ThemeSelection;
    use crate::types::Corpus;

    #[test]
    fn test_export_dir_name() {
        assert_eq!(export_dir_name(Accent::Teal), "design-system-teal");
        assert_eq!(export_dir_name(Accent::Custom), "design-system-custom");
    }

    #[test]
    fn test_written_tree_mirrors_bundle_paths() {
        let corpus: Corpus = [("button.tsx", "export const B = 1")].into_iter().collect();
        let theme = ThemeSelection::default();
        let bundle = assemble(&["button.tsx"], &corpus, &theme, "https://example.com");

        let out = tempfile::tempdir().unwrap();
        let root = write_bundle(&bundle, out.path(), theme.accent).unwrap();

        assert_eq!(root, out.path().join("design-system-blue"));
        for (rel_path, content) in &bundle.files {
            let written = std::fs::read_to_string(root.join(rel_path)).unwrap();
            assert_eq!(&written, content);
        }
    }
}
