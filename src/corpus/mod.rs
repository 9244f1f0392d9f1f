//! Corpus loading: reads a directory of component source files into the
//! in-memory corpus before the engine runs.
//!
//! Identifiers are paths relative to the component root with `/` separators,
//! e.g. `button.tsx` or `charts/bar-chart.tsx`.

use ignore::WalkBuilder;
use std::path::Path;

use crate::error::{Error, Result};
use crate::types::Corpus;

const SOURCE_EXTENSIONS: &[&str] = &["tsx", "ts"];

/// Load every component source under `dir`. Respects .gitignore files, skips
/// non-source files, and fails only on unreadable entries.
pub fn load_corpus(dir: &Path) -> Result<Corpus> {
    if !dir.is_dir() {
        return Err(Error::CorpusDirMissing(dir.to_path_buf()));
    }

    let mut corpus = Corpus::new();
    for entry in WalkBuilder::new(dir).build() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(_) => continue,
        };
        let path = entry.path();
        if !path.is_file() || !is_component_source(path) {
            continue;
        }

        let source = std::fs::read_to_string(path).map_err(|source| Error::CorpusRead {
            path: path.to_path_buf(),
            source,
        })?;
        let id = identifier_for(dir, path);
        corpus.insert(id, source);
    }

    Ok(corpus)
}

fn is_component_source(path: &Path) -> bool {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    if !SOURCE_EXTENSIONS.contains(&ext) {
        return false;
    }
    // declaration files are build output, not components
    !path
        .file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|name| name.ends_with(".d.ts"))
}

fn identifier_for(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loads_nested_components() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("button.tsx"), "export const B = 1").unwrap();
        std::fs::create_dir(dir.path().join("charts")).unwrap();
        std::fs::write(dir.path().join("charts/bar-chart.tsx"), "export const C = 1").unwrap();
        std::fs::write(dir.path().join("notes.md"), "not a component").unwrap();
        std::fs::write(dir.path().join("types.d.ts"), "declare module x").unwrap();

        let corpus = load_corpus(dir.path()).unwrap();
        assert_eq!(corpus.len(), 2);
        assert!(corpus.contains("button.tsx"));
        assert!(corpus.contains("charts/bar-chart.tsx"));
    }

    #[test]
    fn test_missing_directory_errors() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_corpus(&dir.path().join("nope")).unwrap_err();
        assert!(matches!(err, Error::CorpusDirMissing(_)));
    }
}
