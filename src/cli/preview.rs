use anyhow::Result;
use console::{style, Emoji};
use serde::Serialize;

use crate::resolve::{estimate, resolve, Resolution, SizeEstimate};
use crate::theme::ThemeSelection;
use crate::types::{display_name, Corpus};

static PREVIEW: Emoji<'_, '_> = Emoji("📦 ", "");
static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "");

/// Machine-readable preview, emitted with `--json`.
#[derive(Serialize)]
pub struct PreviewOutput {
    pub selected: Vec<String>,
    pub auto_included: Vec<String>,
    pub resolution: Resolution,
    pub estimate: SizeEstimate,
    pub accent: String,
    pub accent_hsl: String,
}

impl PreviewOutput {
    pub fn new(selected: &[String], corpus: &Corpus, theme: &ThemeSelection) -> Self {
        let resolution = resolve(selected, corpus);
        let size = estimate(selected, corpus);
        Self {
            selected: selected.to_vec(),
            auto_included: resolution.auto_included(selected),
            resolution,
            estimate: size,
            accent: theme.accent.to_string(),
            accent_hsl: theme.light().to_string(),
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

pub fn run_preview(
    selected: &[String],
    corpus: &Corpus,
    theme: &ThemeSelection,
    json: bool,
) -> Result<()> {
    let preview = PreviewOutput::new(selected, corpus, theme);

    if json {
        println!("{}", preview.to_json());
        return Ok(());
    }

    println!("\n{}Export Preview\n", PREVIEW);
    println!(
        "  Selected:   {} of {} components",
        style(selected.len()).cyan(),
        corpus.len()
    );
    println!(
        "  Resolved:   {} files, {}",
        style(preview.estimate.files).cyan(),
        style(&preview.estimate.formatted).cyan()
    );
    println!(
        "  Accent:     {} ({})",
        style(&preview.accent).cyan(),
        preview.accent_hsl
    );

    if !preview.auto_included.is_empty() {
        println!(
            "\n  {} auto-included as dependencies:",
            style(preview.auto_included.len()).yellow()
        );
        for id in &preview.auto_included {
            println!("    {} {}", style(id).dim(), display_name(id));
        }
    }

    let resolution = &preview.resolution;
    if !resolution.primitive_libs.is_empty()
        || !resolution.other_packages.is_empty()
        || resolution.uses_icons
        || resolution.uses_charts
    {
        println!("\n  Required dependencies:");
        for pkg in &resolution.primitive_libs {
            println!("    {}", style(pkg).blue());
        }
        for pkg in &resolution.other_packages {
            println!("    {}", style(pkg).blue());
        }
        if resolution.uses_icons {
            println!("    {}", style("lucide-react").magenta());
        }
        if resolution.uses_charts {
            println!("    {}", style("recharts").magenta());
        }
    }

    if !resolution.missing.is_empty() {
        println!(
            "\n{}{} referenced but not in the catalog: {}",
            INFO,
            resolution.missing.len(),
            style(resolution.missing.join(", ")).dim()
        );
    }

    println!();
    Ok(())
}
