//! `strata templates`: list the templates generators can use.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;
use strata_adapters::LayeredTemplateStore;
use strata_core::application::TemplateStore;

use crate::{
    cli::{ListFormat, TemplatesArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// One row of the listing.
#[derive(Debug, Serialize)]
struct TemplateEntry {
    path: String,
    /// `true` when a file in `templates.dir` replaces the built-in one.
    overridden: bool,
}

pub fn execute(args: TemplatesArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let store = LayeredTemplateStore::standard(config.template_dir());
    let entries = collect(&store)?;

    match args.format {
        ListFormat::Json => output.json(&entries)?,
        ListFormat::List => {
            for entry in &entries {
                output.print(&entry.path)?;
            }
        }
        ListFormat::Table => {
            output.header("Available Templates:")?;
            for (group, rows) in group_by_generator(&entries) {
                output.print("")?;
                output.print(&format!("  {group}"))?;
                for entry in rows {
                    let marker = if entry.overridden { "  (override)" } else { "" };
                    output.print(&format!("    {}{marker}", entry.path))?;
                }
            }
            if let Some(dir) = config.template_dir() {
                output.print("")?;
                output.info(&format!("Overrides read from {}", dir.display()))?;
            }
        }
    }

    Ok(())
}

fn collect(store: &LayeredTemplateStore) -> CliResult<Vec<TemplateEntry>> {
    let overridden: BTreeSet<String> = store.overridden()?.into_iter().collect();
    Ok(store
        .list()?
        .into_iter()
        .map(|path| TemplateEntry {
            overridden: overridden.contains(&path),
            path,
        })
        .collect())
}

/// Group by the first path segment, which names the generator.
fn group_by_generator(entries: &[TemplateEntry]) -> BTreeMap<&str, Vec<&TemplateEntry>> {
    let mut groups: BTreeMap<&str, Vec<&TemplateEntry>> = BTreeMap::new();
    for entry in entries {
        let group = entry.path.split('/').next().unwrap_or_default();
        groups.entry(group).or_default().push(entry);
    }
    groups
}
