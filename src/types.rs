//! Core data types shared across the crate.

use std::collections::BTreeMap;

/// In-memory component corpus: identifier -> raw source text.
///
/// Populated once by the loader before any resolution runs; the engine only
/// ever reads from it. Backed by a `BTreeMap` so iteration order is stable.
#[derive(Debug, Default, Clone)]
pub struct Corpus {
    components: BTreeMap<String, String>,
}

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<String>, source: impl Into<String>) {
        self.components.insert(id.into(), source.into());
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.components.get(id).map(String::as_str)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.components.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Identifiers in sorted order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.components.keys().map(String::as_str)
    }
}

impl FromIterator<(String, String)> for Corpus {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self {
            components: iter.into_iter().collect(),
        }
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for Corpus {
    fn from_iter<T: IntoIterator<Item = (&'a str, &'a str)>>(iter: T) -> Self {
        Self {
            components: iter
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

/// Human-readable display name for a component identifier.
/// "menu-button.tsx" -> "Menu Button", "charts/bar-chart.tsx" -> "Bar Chart"
pub fn display_name(id: &str) -> String {
    let name = id.rsplit('/').next().unwrap_or(id);
    let name = name.strip_suffix(".tsx").unwrap_or(name);
    name.split('-')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name() {
        assert_eq!(display_name("button.tsx"), "Button");
        assert_eq!(display_name("menu-button.tsx"), "Menu Button");
        assert_eq!(display_name("charts/bar-chart.tsx"), "Bar Chart");
        assert_eq!(display_name("input-otp.tsx"), "Input Otp");
    }

    #[test]
    fn test_corpus_ids_sorted() {
        let corpus: Corpus = [("b.tsx", ""), ("a.tsx", ""), ("c.tsx", "")]
            .into_iter()
            .collect();
        let ids: Vec<&str> = corpus.ids().collect();
        assert_eq!(ids, vec!["a.tsx", "b.tsx", "c.tsx"]);
    }
}
