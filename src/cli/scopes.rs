//! Scopes command implementation

use anyhow::Result;
use std::path::Path;
use tracing::info;

use scope_cheatsheet::cheatsheet::Cheatsheet;
use scope_cheatsheet::config::ListsConfig;
use scope_cheatsheet::lists::ListRegistry;

/// Render the cheatsheet for the lists configured in `work_dir`
pub fn render(work_dir: &Path, config_path: Option<&Path>, json: bool) -> Result<String> {
    let config = ListsConfig::load(config_path, work_dir)?;
    let registry = ListRegistry::from_config(&config);
    let sheet = Cheatsheet::build(&registry)?;

    let items: usize = sheet.sections.iter().map(|s| s.items.len()).sum();
    info!(sections = sheet.sections.len(), items, "Built cheatsheet");

    if json { sheet.to_json() } else { Ok(sheet.to_markdown()) }
}

/// Print the scopes cheatsheet to stdout
pub fn scopes_command(work_dir: &Path, config_path: Option<&Path>, json: bool) -> Result<()> {
    let output = render(work_dir, config_path, json)?;
    print!("{}", output);
    if json {
        println!();
    }
    Ok(())
}
