use crate::catalog::{Catalog, CommandRecord, GameVersion, Language};
use crate::filter::{filter, CategoryFilter};

/// The four user-controlled filter values. Never mutated in place: every change yields a new value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub language: Language,
    pub version: GameVersion,
    pub category: CategoryFilter,
    pub query: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionChange {
    ToggleLanguage,
    NextVersion,
    PreviousVersion,
    NextCategory,
    PreviousCategory,
    PushChar(char),
    PopChar,
    ClearQuery,
    SetQuery(String),
}

impl Selection {
    pub fn new(language: Language, version: GameVersion, category: CategoryFilter) -> Self {
        Self {
            language,
            version,
            category,
            query: String::new(),
        }
    }

    /// `options` is the category option list (`All` first) used for cycling.
    #[must_use]
    pub fn apply(&self, change: SelectionChange, options: &[CategoryFilter]) -> Selection {
        let mut next = self.clone();
        match change {
            SelectionChange::ToggleLanguage => next.language = self.language.toggled(),
            SelectionChange::NextVersion => next.version = self.version.next(),
            SelectionChange::PreviousVersion => next.version = self.version.previous(),
            SelectionChange::NextCategory => next.category = self.cycle_category(options, 1),
            SelectionChange::PreviousCategory => {
                next.category = self.cycle_category(options, options.len().saturating_sub(1))
            }
            SelectionChange::PushChar(c) => next.query.push(c),
            SelectionChange::PopChar => {
                next.query.pop();
            }
            SelectionChange::ClearQuery => next.query.clear(),
            SelectionChange::SetQuery(query) => next.query = query,
        }
        next
    }

    fn cycle_category(&self, options: &[CategoryFilter], step: usize) -> CategoryFilter {
        if options.is_empty() {
            return self.category.clone();
        }
        let current = options.iter().position(|o| *o == self.category).unwrap_or(0);
        options[(current + step) % options.len()].clone()
    }

    pub fn visible<'a>(&self, catalog: &'a Catalog) -> Vec<&'a CommandRecord> {
        filter(catalog, self.version, &self.category, &self.query, self.language)
    }
}
