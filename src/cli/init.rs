//! Init command implementation

use anyhow::{bail, Result};
use std::path::{Path, PathBuf};
use tracing::info;

use scope_cheatsheet::config::{write_config, ListsConfig};

/// Default lists file content for init
pub const DEFAULT_LISTS_TOML: &str = r#"# Scope Cheatsheet - spoken-form lists
# ====================================
#
# Each table replaces the built-in list of the same name. Keys are what you
# say, values are scope identifiers. Identifiers are shown in the cheatsheet
# as sentence-case text ("namedFunction" -> "Named function").
#
# Lists that are not defined here keep their built-in spoken forms.

# [lists.scope_type]
# "funk" = "namedFunction"
# "arg" = "argumentOrParameter"
# "class" = "class"
# "state" = "statement"

# [lists.subtoken_scope_type]
# "word" = "word"
# "char" = "character"
"#;

/// Write the default lists file, refusing to clobber an existing one unless forced
pub fn init_command(work_dir: &Path, config_path: Option<PathBuf>, force: bool) -> Result<()> {
    let path = config_path.unwrap_or_else(|| ListsConfig::project_config_path(work_dir));

    if path.exists() && !force {
        bail!(
            "Lists file already exists at {}. Use --force to overwrite.",
            path.display()
        );
    }

    write_config(&path, DEFAULT_LISTS_TOML)?;
    info!("Created lists file at {}", path.display());

    Ok(())
}
