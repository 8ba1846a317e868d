use crate::catalog::{Catalog, CommandRecord, GameVersion, Language, ALL_CATEGORIES};
use std::fmt;

/// Category constraint; `All` is a distinct variant so it can never clash with a real label.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    All,
    Only(String),
}

impl CategoryFilter {
    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Only(category) => category,
        }
    }

    pub fn accepts(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => wanted == category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// `All` followed by the catalog's categories in first-seen order.
pub fn category_options(catalog: &Catalog) -> Vec<CategoryFilter> {
    std::iter::once(CategoryFilter::All)
        .chain(
            catalog
                .categories()
                .into_iter()
                .map(|c| CategoryFilter::Only(c.to_string())),
        )
        .collect()
}

/// Lowercased searchable text of a record in one language.
pub fn haystack(record: &CommandRecord, lang: Language) -> String {
    let text = record.text(lang);
    format!("{} {} {}", text.name, text.command, text.description).to_lowercase()
}

/// Records matching version, category and query, in catalog order.
pub fn filter<'a>(
    catalog: &'a Catalog,
    version: GameVersion,
    category: &CategoryFilter,
    query: &str,
    lang: Language,
) -> Vec<&'a CommandRecord> {
    let needle = query.to_lowercase();
    catalog
        .records()
        .iter()
        .filter(|r| r.applies_to(version))
        .filter(|r| category.accepts(&r.category))
        .filter(|r| haystack(r, lang).contains(&needle))
        .collect()
}
