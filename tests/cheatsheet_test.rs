//! End-to-end tests: lists file on disk -> registry -> cheatsheet

mod common;

use common::{create_test_project, write_lists_file};
use scope_cheatsheet::cheatsheet::Cheatsheet;
use scope_cheatsheet::config::ListsConfig;
use scope_cheatsheet::lists::{ListRegistry, ListSource};
use scope_cheatsheet::{get_scopes, get_scopes_from};
use tempfile::TempDir;

const CUSTOM_SCOPES: &str = r#"
[lists.scope_type]
"fun" = "namedFunction"
"param" = "argumentOrParameter"
"#;

#[test]
fn project_lists_replace_builtin_scope_types() {
    let project = create_test_project(CUSTOM_SCOPES);
    let config = ListsConfig::from_dir(project.path()).unwrap();
    let registry = ListRegistry::from_config(&config);

    let scopes = get_scopes_from(&registry).unwrap();

    assert_eq!(scopes["fun"], "Named function");
    assert_eq!(scopes["param"], "Argument");
    assert!(!scopes.contains_key("funk"));
    // subtoken list still comes from the built-ins
    assert_eq!(scopes["word"], "Word");
    assert_eq!(scopes["<P>"], "Paired delimiter");
    assert_eq!(scopes.len(), 2 + 2 + 1);
}

#[test]
fn explicit_path_takes_precedence_over_project() {
    let project = create_test_project(CUSTOM_SCOPES);
    let explicit = write_lists_file(
        &project,
        "other.toml",
        "[lists.subtoken_scope_type]\n\"letter\" = \"character\"\n",
    );

    let config = ListsConfig::load(Some(&explicit), project.path()).unwrap();
    let scopes = get_scopes_from(&ListRegistry::from_config(&config)).unwrap();

    assert_eq!(scopes["letter"], "Character");
    assert!(!scopes.contains_key("char"));
    // the project file was ignored, so builtin scope types are back
    assert_eq!(scopes["funk"], "Named function");
}

#[test]
fn dir_without_lists_file_uses_builtins() {
    let dir = TempDir::new().unwrap();
    let config = ListsConfig::from_dir(dir.path()).unwrap();
    assert!(config.lists.is_empty());

    let scopes = get_scopes_from(&ListRegistry::from_config(&config)).unwrap();
    assert_eq!(scopes, get_scopes().unwrap());
}

#[test]
fn malformed_lists_file_reports_path() {
    let project = create_test_project("[lists.scope_type\n");
    let err = ListsConfig::from_dir(project.path()).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config file"));
    assert!(err.to_string().contains("lists.toml"));
}

#[test]
fn missing_explicit_file_reports_path() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("nope.toml");
    let err = ListsConfig::load(Some(&missing), dir.path()).unwrap_err();
    assert!(err.to_string().contains("Failed to read config file"));
}

#[test]
fn saved_config_loads_back() {
    let dir = TempDir::new().unwrap();
    let source = ListsConfig::from_file(&write_lists_file(&dir, "in.toml", CUSTOM_SCOPES)).unwrap();

    let out = dir.path().join("nested/out.toml");
    source.save_to_file(&out).unwrap();

    let loaded = ListsConfig::from_file(&out).unwrap();
    assert_eq!(loaded.lists, source.lists);
}

#[test]
fn cheatsheet_markdown_lists_every_scope() {
    let registry = ListRegistry::builtin();
    let sheet = Cheatsheet::build(registry).unwrap();
    let markdown = sheet.to_markdown();

    assert!(markdown.starts_with("## Scopes\n"));
    assert!(markdown.contains("| arg | Argument |"));
    assert!(markdown.contains("| <P> | Paired delimiter |"));

    let rows = markdown.lines().filter(|l| l.starts_with("| ")).count();
    // header and separator rows plus one row per scope
    assert_eq!(rows, 2 + get_scopes().unwrap().len());
}

#[test]
fn cheatsheet_build_surfaces_lookup_errors() {
    let err = Cheatsheet::build(&ListRegistry::default()).unwrap_err();
    assert!(err.to_string().contains("Failed to build scopes section"));
    assert_eq!(err.root_cause().to_string(), "Unknown list: scope_type");
    assert!(ListRegistry::default().get_raw_list("scope_type").is_err());
}
