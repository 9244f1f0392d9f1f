mod args;
mod export;
mod list;
mod preview;
mod theme;

pub use args::{Args, Command};
pub use export::run_export;
pub use list::run_list;
pub use preview::{run_preview, PreviewOutput};

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};

use crate::config::{Config, CONFIG_FILE};
use crate::corpus::load_corpus;
use crate::theme::{Accent, ThemeSelection};
use crate::types::Corpus;

pub fn run(args: Args) -> Result<()> {
    let config_path = args
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE));
    let config = Config::load(&config_path)?;

    let components_dir = args
        .components
        .clone()
        .unwrap_or_else(|| config.components.clone());
    let corpus = load_with_spinner(&components_dir)?;

    match args.command {
        Command::List { category } => run_list(&corpus, category.as_deref()),
        Command::Preview { ids, json } => {
            let theme = theme_from(&config, None, None);
            run_preview(&ids, &corpus, &theme, json)
        }
        Command::Export {
            ids,
            accent,
            custom_color,
            out,
            source_url,
        } => {
            let theme = theme_from(&config, accent, custom_color.as_deref());
            let out_dir = out.unwrap_or_else(|| config.output.clone());
            let source_url = source_url.unwrap_or_else(|| config.source_url.clone());
            run_export(ids, &corpus, &theme, &out_dir, &source_url)
        }
    }
}

/// Resolve the theme snapshot: CLI flags win over config, a custom color
/// implies the custom accent.
fn theme_from(config: &Config, accent: Option<Accent>, custom_color: Option<&str>) -> ThemeSelection {
    if let Some(hex) = custom_color {
        return ThemeSelection::custom(hex);
    }
    if let Some(accent) = accent {
        if accent == Accent::Custom {
            if let Some(hex) = &config.custom_color {
                return ThemeSelection::custom(hex);
            }
        }
        return ThemeSelection::named(accent);
    }
    if let Some(hex) = &config.custom_color {
        return ThemeSelection::custom(hex);
    }
    ThemeSelection::named(Accent::from_name(&config.accent))
}

fn load_with_spinner(dir: &Path) -> Result<Corpus> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.set_message(format!("Loading components from {}...", dir.display()));
    pb.enable_steady_tick(std::time::Duration::from_millis(100));

    let corpus = load_corpus(dir);
    pb.finish_and_clear();

    Ok(corpus?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_precedence() {
        let mut config = Config::default();
        config.accent = "green".to_string();

        // config accent when nothing else given
        let theme = theme_from(&config, None, None);
        assert_eq!(theme.accent, Accent::Green);

        // flag accent wins over config
        let theme = theme_from(&config, Some(Accent::Teal), None);
        assert_eq!(theme.accent, Accent::Teal);

        // custom color wins over everything
        let theme = theme_from(&config, Some(Accent::Teal), Some("#ff0000"));
        assert_eq!(theme.accent, Accent::Custom);
        assert!(theme.custom.is_some());
    }

    #[test]
    fn test_config_custom_color_applies() {
        let mut config = Config::default();
        config.custom_color = Some("#00ff00".to_string());

        let theme = theme_from(&config, None, None);
        assert_eq!(theme.accent, Accent::Custom);
    }
}
