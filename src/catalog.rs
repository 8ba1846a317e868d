use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::config::ConfigError;

/// Label of the pseudo-category that disables category filtering.
pub const ALL_CATEGORIES: &str = "All";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Ru,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Ru];

    pub fn code(self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ru => "ru",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Language::En => Language::Ru,
            Language::Ru => Language::En,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Ok(Language::En),
            "ru" | "russian" => Ok(Language::Ru),
            _ => Err(ConfigError::UnknownLanguage(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameVersion {
    #[serde(rename = "CS2")]
    Cs2,
    #[serde(rename = "CS:GO")]
    CsGo,
    #[serde(rename = "CS 1.6")]
    Cs16,
}

impl GameVersion {
    /// Selector order.
    pub const ALL: [GameVersion; 3] = [GameVersion::Cs2, GameVersion::CsGo, GameVersion::Cs16];

    pub fn label(self) -> &'static str {
        match self {
            GameVersion::Cs2 => "CS2",
            GameVersion::CsGo => "CS:GO",
            GameVersion::Cs16 => "CS 1.6",
        }
    }

    pub fn next(self) -> Self {
        let i = Self::ALL.iter().position(|v| *v == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        let i = Self::ALL.iter().position(|v| *v == self).unwrap_or(0);
        Self::ALL[(i + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for GameVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for GameVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Accept the display label as well as shell-friendly spellings (cs2, csgo, cs16, 1.6)
        let key: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != ':' && *c != '-' && *c != '_')
            .collect::<String>()
            .to_lowercase();
        match key.as_str() {
            "cs2" | "2" => Ok(GameVersion::Cs2),
            "csgo" | "go" => Ok(GameVersion::CsGo),
            "cs1.6" | "cs16" | "1.6" | "16" => Ok(GameVersion::Cs16),
            _ => Err(ConfigError::UnknownVersion(s.to_string())),
        }
    }
}

/// Text of one command in one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizedText {
    pub name: String,
    pub command: String,
    pub description: String,
}

impl LocalizedText {
    pub fn new(name: &str, command: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            command: command.to_string(),
            description: description.to_string(),
        }
    }
}

/// One value per supported language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Localized<T> {
    pub en: T,
    pub ru: T,
}

impl<T> Localized<T> {
    pub fn get(&self, lang: Language) -> &T {
        match lang {
            Language::En => &self.en,
            Language::Ru => &self.ru,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandRecord {
    pub id: String,
    pub versions: Vec<GameVersion>,
    pub category: String,
    pub content: Localized<LocalizedText>,
}

impl CommandRecord {
    pub fn text(&self, lang: Language) -> &LocalizedText {
        self.content.get(lang)
    }

    pub fn applies_to(&self, version: GameVersion) -> bool {
        self.versions.contains(&version)
    }

    pub fn versions_label(&self) -> String {
        self.versions
            .iter()
            .map(|v| v.label())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("command record has an empty id")]
    EmptyId,
    #[error("duplicate command id '{0}'")]
    DuplicateId(String),
    #[error("command '{0}' does not apply to any game version")]
    NoVersions(String),
    #[error("command '{0}' has an empty category")]
    EmptyCategory(String),
    #[error("command '{0}' uses the reserved category label 'All'")]
    ReservedCategory(String),
    #[error("command '{id}' is missing the {field} text for language '{lang}'")]
    MissingText {
        id: String,
        lang: Language,
        field: &'static str,
    },
}

/// Immutable, validated list of command records.
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<CommandRecord>,
}

impl Catalog {
    pub fn new(records: Vec<CommandRecord>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for record in &records {
            if record.id.trim().is_empty() {
                return Err(CatalogError::EmptyId);
            }
            if !seen.insert(record.id.as_str()) {
                return Err(CatalogError::DuplicateId(record.id.clone()));
            }
            if record.versions.is_empty() {
                return Err(CatalogError::NoVersions(record.id.clone()));
            }
            if record.category.trim().is_empty() {
                return Err(CatalogError::EmptyCategory(record.id.clone()));
            }
            if record.category == ALL_CATEGORIES {
                return Err(CatalogError::ReservedCategory(record.id.clone()));
            }
            for lang in Language::ALL {
                let text = record.text(lang);
                let fields = [
                    ("name", &text.name),
                    ("command", &text.command),
                    ("description", &text.description),
                ];
                for (field, value) in fields {
                    if value.trim().is_empty() {
                        return Err(CatalogError::MissingText {
                            id: record.id.clone(),
                            lang,
                            field,
                        });
                    }
                }
            }
        }
        Ok(Self { records })
    }

    /// The commands shipped with the binary.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::new(builtin_records())
    }

    pub fn records(&self) -> &[CommandRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn get(&self, id: &str) -> Option<&CommandRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Distinct categories in first-seen order.
    pub fn categories(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::new();
        for record in &self.records {
            if !out.contains(&record.category.as_str()) {
                out.push(&record.category);
            }
        }
        out
    }

    pub fn versions(&self) -> Vec<GameVersion> {
        GameVersion::ALL
            .into_iter()
            .filter(|v| self.records.iter().any(|r| r.applies_to(*v)))
            .collect()
    }
}

fn record(
    id: &str,
    versions: &[GameVersion],
    category: &str,
    en: LocalizedText,
    ru: LocalizedText,
) -> CommandRecord {
    CommandRecord {
        id: id.to_string(),
        versions: versions.to_vec(),
        category: category.to_string(),
        content: Localized { en, ru },
    }
}

fn builtin_records() -> Vec<CommandRecord> {
    use GameVersion::{Cs16, Cs2, CsGo};

    vec![
        record(
            "sv_infinite_ammo",
            &[Cs2, CsGo],
            "Practice",
            LocalizedText::new(
                "Infinite ammo",
                "sv_infinite_ammo 1",
                "Gives unlimited ammo without reloading (set 2 to allow reloads). Requires sv_cheats 1 in local/server.",
            ),
            LocalizedText::new(
                "Бесконечные патроны",
                "sv_infinite_ammo 1",
                "Дает бесконечные патроны без перезарядки (значение 2 — бесконечные патроны, но с перезарядкой). Требует sv_cheats 1 в локальной игре/сервере.",
            ),
        ),
        record(
            "mp_roundtime_defuse",
            &[Cs2, CsGo],
            "Round time",
            LocalizedText::new(
                "Round time (defuse)",
                "mp_roundtime_defuse 60",
                "Sets the round time for defuse maps (60 is commonly used for effectively unlimited practice).",
            ),
            LocalizedText::new(
                "Время раунда (обезвреживание)",
                "mp_roundtime_defuse 60",
                "Устанавливает время раунда на картах с бомбой (60 минут часто используется как практически бесконечное для практики).",
            ),
        ),
        record(
            "mp_maxrounds",
            &[Cs2, CsGo],
            "Round time",
            LocalizedText::new(
                "Max rounds / infinite rounds",
                "mp_maxrounds 0",
                "Set max rounds to 0 to disable round limit (combine with roundtime commands to keep map running).",
            ),
            LocalizedText::new(
                "Макс раундов / бесконечные раунды",
                "mp_maxrounds 0",
                "Установка 0 отключит лимит по раундам (используйте вместе с командами времени раунда).",
            ),
        ),
        record(
            "bot_place",
            &[Cs2, CsGo],
            "Bots",
            LocalizedText::new(
                "Place a bot",
                "bot_place",
                "Spawns a bot at your crosshair position — useful for boosts/aim practice.",
            ),
            LocalizedText::new(
                "Поставить бота",
                "bot_place",
                "Спавнит бота перед прицелом — удобно для практики подбрасываний/прицеливания.",
            ),
        ),
        record(
            "bot_add",
            &[Cs2, CsGo],
            "Bots",
            LocalizedText::new(
                "Add bot",
                "bot_add <T|CT> <count>",
                "Adds bot(s) to the chosen team. You can specify count and difficulty with additional args in some builds.",
            ),
            LocalizedText::new(
                "Добавить бота",
                "bot_add <T|CT> <count>",
                "Добавляет бота(ов) в выбранную команду. Можно указывать количество и сложность в некоторых сборках.",
            ),
        ),
        record(
            "mp_buytime",
            &[Cs2, CsGo],
            "Buy / Economy",
            LocalizedText::new(
                "Buy time",
                "mp_buytime 9999",
                "Extend the buy time (good for long-practice setups).",
            ),
            LocalizedText::new(
                "Время покупки",
                "mp_buytime 9999",
                "Увеличивает время покупки (удобно для длительной практики).",
            ),
        ),
        record(
            "mp_buy_anywhere",
            &[Cs2, CsGo],
            "Buy / Economy",
            LocalizedText::new(
                "Buy anywhere",
                "mp_buy_anywhere 1",
                "Allows buying from anywhere on the map.",
            ),
            LocalizedText::new(
                "Покупка в любом месте",
                "mp_buy_anywhere 1",
                "Позволяет покупать оружие/экипировку из любой точки карты.",
            ),
        ),
        record(
            "sv_cheats",
            &[Cs2, CsGo, Cs16],
            "Server / Cheats",
            LocalizedText::new(
                "Enable cheats",
                "sv_cheats 1",
                "Enables developer/cheat commands in a local server. Required for many practice commands.",
            ),
            // Worded so that searching for "бот" only hits the two bot commands
            LocalizedText::new(
                "Включить читы",
                "sv_cheats 1",
                "Включает отладочные и чит-команды на локальном сервере. Требуется для многих команд практики.",
            ),
        ),
    ]
}
