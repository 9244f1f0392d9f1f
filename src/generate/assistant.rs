//! PROMPT.md generation: a bounded reference document that orients an AI
//! coding assistant working inside the exported package.
//!
//! Enumerates the included components grouped by category and states the
//! active theme and usage conventions. Never embeds component source, so the
//! document stays a fixed order of magnitude regardless of selection size.

use std::collections::BTreeMap;
use std::fmt::Write;

use crate::registry::{category_for, Category};
use crate::theme::ThemeSelection;
use crate::types::display_name;

pub fn generate_assistant_guide<S: AsRef<str>>(
    resolved: &[S],
    theme: &ThemeSelection,
) -> String {
    let mut by_category: BTreeMap<Category, Vec<&str>> = BTreeMap::new();
    for id in resolved {
        by_category
            .entry(category_for(id.as_ref()))
            .or_default()
            .push(id.as_ref());
    }

    let mut doc = String::new();
    doc.push_str("# Design System Reference\n\n");
    doc.push_str(
        "This document orients an AI coding assistant working with the \
         components in this export. Read it before writing UI code.\n\n",
    );

    doc.push_str("## Active Theme\n\n");
    let _ = writeln!(doc, "- Accent: **{}**", theme.accent);
    let _ = writeln!(doc, "- Primary (light): `hsl({})`", theme.light());
    let _ = writeln!(doc, "- Primary (dark): `hsl({})`", theme.dark());
    doc.push_str(
        "- All colors flow through CSS variables in `styles/globals.css`; \
         never hard-code color values in components.\n\n",
    );

    let _ = writeln!(doc, "## Included Components ({})\n", resolved.len());
    if by_category.is_empty() {
        doc.push_str("*No components included.*\n\n");
    }
    for (category, ids) in &by_category {
        let _ = writeln!(doc, "### {}", category.name());
        let _ = writeln!(doc, "\n{}\n", category.description());
        for id in ids {
            let _ = writeln!(doc, "- **{}** (`components/ui/{}`)", display_name(id), id);
        }
        doc.push('\n');
    }

    doc.push_str("## Usage Conventions\n\n");
    doc.push_str(
        "- Import components through the path alias: \
         `import { Button } from \"@/components/ui/button\"`.\n\
         - Merge class names with the `cn` helper from `@/lib/utils`; never \
         concatenate class strings by hand.\n\
         - Variants are defined with `class-variance-authority`; extend \
         variants rather than overriding classes at call sites.\n\
         - Interactive primitives come from `@radix-ui/*` packages; keep \
         their accessibility props intact when wrapping.\n\
         - Icons come from `lucide-react` and inherit `currentColor`.\n\
         - Spacing uses the `ds-01`..`ds-10` scale; radii derive from the \
         `--radius` token.\n\
         - Dark mode is class-based (`.dark` on the document root); rely on \
         the token variables instead of `dark:` color overrides.\n",
    );

    doc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Accent;

    #[test]
    fn test_groups_by_category() {
        let theme = ThemeSelection::named(Accent::Blue);
        let doc = generate_assistant_guide(&["button.tsx", "input.tsx", "dialog.tsx"], &theme);

        assert!(doc.contains("### Actions"));
        assert!(doc.contains("### Forms"));
        assert!(doc.contains("### Overlays"));
        assert!(doc.contains("- **Button** (`components/ui/button.tsx`)"));
        assert!(doc.contains("## Included Components (3)"));
    }

    #[test]
    fn test_states_active_theme() {
        let doc = generate_assistant_guide(&["button.tsx"], &ThemeSelection::named(Accent::Green));
        assert!(doc.contains("Accent: **green**"));
        assert!(doc.contains("`hsl(152 69% 31%)`"));
        assert!(doc.contains("`hsl(149 62% 40%)`"));
    }

    #[test]
    fn test_never_embeds_source() {
        let doc = generate_assistant_guide(&["button.tsx"], &ThemeSelection::default());
        assert!(!doc.contains("import * as React"));
        assert!(!doc.contains("export function"));
    }

    #[test]
    fn test_bounded_size() {
        let many: Vec<String> = (0..500).map(|i| format!("component-{i}.tsx")).collect();
        let doc = generate_assistant_guide(&many, &ThemeSelection::default());
        // one line per component plus fixed sections, far below source size
        assert!(doc.len() < 40_000);
    }

    #[test]
    fn test_empty_selection() {
        let doc = generate_assistant_guide(&[] as &[&str], &ThemeSelection::default());
        assert!(doc.contains("No components included"));
    }
}
