use anyhow::{bail, Result};
use console::{style, Emoji};
use inquire::MultiSelect;
use std::path::Path;

use super::theme::{designkit_theme, print_export_summary};
use crate::bundle::assemble;
use crate::sink::write_bundle;
use crate::theme::ThemeSelection;
use crate::types::{display_name, Corpus};

static EXPORT: Emoji<'_, '_> = Emoji("📦 ", "");
static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "");

pub fn run_export(
    selected: Vec<String>,
    corpus: &Corpus,
    theme: &ThemeSelection,
    out_dir: &Path,
    source_url: &str,
) -> Result<()> {
    let selected = if selected.is_empty() {
        pick_components(corpus)?
    } else {
        selected
    };

    // the engine accepts an empty selection; the CLI refuses to export one
    if selected.is_empty() {
        bail!("nothing selected; pass component identifiers or pick some interactively");
    }

    println!(
        "\n{}Exporting {} selected components ({} accent)...",
        EXPORT,
        style(selected.len()).cyan(),
        style(theme.accent).cyan()
    );

    let bundle = assemble(&selected, corpus, theme, source_url);

    if !bundle.resolution.missing.is_empty() {
        println!(
            "{}skipped {} unresolved reference(s): {}",
            INFO,
            bundle.resolution.missing.len(),
            style(bundle.resolution.missing.join(", ")).dim()
        );
    }

    let root = write_bundle(&bundle, out_dir, theme.accent)?;
    print_export_summary(&root, bundle.file_count(), &bundle.estimate.formatted);

    Ok(())
}

fn pick_components(corpus: &Corpus) -> Result<Vec<String>> {
    if corpus.is_empty() {
        bail!("component catalog is empty");
    }

    let options: Vec<String> = corpus
        .ids()
        .map(|id| format!("{id}  ({})", display_name(id)))
        .collect();

    let picked = MultiSelect::new("Select components to export:", options)
        .with_render_config(designkit_theme())
        .with_help_message("space to toggle, enter to confirm")
        .prompt()?;

    Ok(picked
        .into_iter()
        .filter_map(|option| {
            option
                .split_whitespace()
                .next()
                .map(str::to_string)
        })
        .collect())
}
