//! Terminal styling for the CLI: inquire render config and print helpers.

use console::style;
use inquire::ui::{Attributes, Color, RenderConfig, StyleSheet, Styled};

pub fn designkit_theme() -> RenderConfig<'static> {
    RenderConfig {
        prompt_prefix: Styled::new("?").with_fg(Color::LightCyan),
        highlighted_option_prefix: Styled::new("❯").with_fg(Color::LightCyan),
        selected_checkbox: Styled::new("◉").with_fg(Color::LightGreen),
        unselected_checkbox: Styled::new("○").with_fg(Color::DarkGrey),
        answer: StyleSheet::new().with_fg(Color::LightCyan),
        help_message: StyleSheet::new()
            .with_fg(Color::DarkGrey)
            .with_attr(Attributes::ITALIC),
        ..Default::default()
    }
}

pub fn print_export_summary(root: &std::path::Path, file_count: usize, formatted_size: &str) {
    println!();
    println!("{}", style("─".repeat(50)).dim());
    println!();
    println!(
        "  {} {}",
        style("✅").green(),
        style("Export complete!").green().bold()
    );
    println!();
    println!(
        "  {} files written to {}",
        style(file_count).cyan(),
        style(root.display()).cyan()
    );
    println!("  Estimated size: {}", style(formatted_size).dim());
    println!();
    println!("  {}", style("Next steps:").bold());
    println!(
        "    {} Copy the bundle into your project",
        style("1.").dim()
    );
    println!(
        "    {} Run {} inside it",
        style("2.").dim(),
        style("npm install").cyan()
    );
    println!(
        "    {} Read {} for setup, {} for AI assistants",
        style("3.").dim(),
        style("README.md").cyan(),
        style("PROMPT.md").cyan()
    );
    println!();
}
