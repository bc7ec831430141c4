//! Cheatsheet assembly and rendering

pub mod sections;

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::lists::ListSource;

/// One row of a section: what to say and what it means
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionItem {
    pub spoken_form: String,
    pub description: String,
}

/// A titled table of spoken forms
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub name: String,
    pub id: String,
    pub items: Vec<SectionItem>,
}

impl Section {
    /// Build a section from a label mapping, one item per entry
    pub fn from_labels(name: &str, id: &str, labels: &BTreeMap<String, String>) -> Self {
        Self {
            name: name.to_string(),
            id: id.to_string(),
            items: labels
                .iter()
                .map(|(spoken_form, description)| SectionItem {
                    spoken_form: spoken_form.clone(),
                    description: description.clone(),
                })
                .collect(),
        }
    }

    fn write_markdown(&self, out: &mut String) {
        out.push_str(&format!("## {}\n\n", self.name));
        out.push_str("| Spoken form | Meaning |\n");
        out.push_str("| --- | --- |\n");
        for item in &self.items {
            out.push_str(&format!(
                "| {} | {} |\n",
                escape_cell(&item.spoken_form),
                escape_cell(&item.description)
            ));
        }
    }
}

/// A full cheatsheet document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cheatsheet {
    pub sections: Vec<Section>,
}

impl Cheatsheet {
    /// Assemble every section from the given lists
    pub fn build(lists: &impl ListSource) -> Result<Self> {
        let scopes = sections::scopes::get_scopes_from(lists)
            .context("Failed to build scopes section")?;

        Ok(Self {
            sections: vec![Section::from_labels("Scopes", "scopes", &scopes)],
        })
    }

    /// Pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize cheatsheet")
    }

    /// Markdown with one table per section
    pub fn to_markdown(&self) -> String {
        let mut out = String::new();
        for (i, section) in self.sections.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            section.write_markdown(&mut out);
        }
        out
    }
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}
