use anyhow::Result;
use console::style;
use std::collections::BTreeMap;

use crate::registry::{category_for, Category};
use crate::types::{display_name, Corpus};

pub fn run_list(corpus: &Corpus, only_category: Option<&str>) -> Result<()> {
    let mut by_category: BTreeMap<Category, Vec<&str>> = BTreeMap::new();
    for id in corpus.ids() {
        by_category.entry(category_for(id)).or_default().push(id);
    }

    println!();
    for category in Category::ALL {
        if only_category.is_some_and(|wanted| wanted != category.id()) {
            continue;
        }
        let Some(ids) = by_category.get(&category) else {
            continue;
        };

        println!(
            "  {} {}",
            style(category.name()).cyan().bold(),
            style(format!("({})", ids.len())).dim()
        );
        println!("  {}", style(category.description()).dim());
        for id in ids {
            println!("    {}  {}", style(id).green(), display_name(id));
        }
        println!();
    }

    println!(
        "  {} components total",
        style(corpus.len()).cyan()
    );
    Ok(())
}
