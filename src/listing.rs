use colored::*;
use serde::Serialize;

use crate::catalog::{CommandRecord, GameVersion, Language};
use crate::i18n::I18n;
use crate::state::Selection;

/// One record as exported by `cch list --json`.
#[derive(Debug, Serialize)]
pub struct ListedCommand<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub command: &'a str,
    pub description: &'a str,
    pub category: &'a str,
    pub versions: &'a [GameVersion],
}

impl<'a> ListedCommand<'a> {
    pub fn new(record: &'a CommandRecord, lang: Language) -> Self {
        let text = record.text(lang);
        Self {
            id: &record.id,
            name: &text.name,
            command: &text.command,
            description: &text.description,
            category: &record.category,
            versions: &record.versions,
        }
    }
}

pub fn render_json(records: &[&CommandRecord], lang: Language) -> serde_json::Result<String> {
    let listed: Vec<ListedCommand> = records.iter().map(|r| ListedCommand::new(r, lang)).collect();
    serde_json::to_string_pretty(&listed)
}

/// Plain-text rendition of the filtered list, used by `cch list` and simple mode.
pub fn render_text(
    records: &[&CommandRecord],
    selection: &Selection,
    total: usize,
    i18n: &I18n,
) -> String {
    let mut output = String::new();
    let lang = selection.language;

    output.push_str(&format!("{}\n", i18n.t("app_title").bold().cyan()));
    output.push_str(&format!("{}\n", i18n.t("tagline").dimmed()));
    output.push_str(&format!(
        "{}\n",
        i18n.t_format(
            "listing_header",
            &[selection.version.label(), selection.category.label(), selection.query.as_str()]
        )
        .yellow()
    ));
    output.push_str(&format!(
        "{}\n\n",
        i18n.t_format("results_count", &[&records.len().to_string(), &total.to_string()])
    ));

    if records.is_empty() {
        output.push_str(&format!("{}\n", i18n.t("no_commands").red()));
    }

    for record in records {
        let text = record.text(lang);
        let id = format!("[{}]", record.id);
        output.push_str(&format!("{}  {}\n", text.name.bold(), id.dimmed()));
        output.push_str(&format!("  {} • {}\n", record.category, record.versions_label()));
        output.push_str(&format!("    {}\n", text.command.green()));
        output.push_str(&format!("  {}\n\n", text.description));
    }

    output.push_str(&format!("{}\n", i18n.t("how_to_use").bold()));
    output.push_str(&format!("  1. {}\n", i18n.t("how_to_step_console")));
    output.push_str(&format!("  2. {}\n", i18n.t("how_to_step_cheats")));
    output.push_str(&format!("{}\n", i18n.t("footer_note").dimmed()));
    output
}
