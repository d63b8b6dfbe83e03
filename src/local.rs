//! Local Catalog
//!
//! Fixed in-memory table of well-known (title, author) pairs, checked before
//! any network call. Matching is a case-insensitive substring test in both
//! directions, so a short query like "cien años" matches the full title and
//! a long query containing a known title also matches. Iteration follows
//! table-definition order and the first matching entry wins.

use tracing::debug;

use crate::types::{CatalogEntry, LookupResult, Source, UNKNOWN_YEAR};

// Table-definition order is load-bearing: lookup returns the first match.
const LOCAL_TABLE: [(&str, &str); 20] = [
    ("Cien años de soledad", "Gabriel García Márquez"),
    ("Don Quijote de la Mancha", "Miguel de Cervantes"),
    ("1984", "George Orwell"),
    ("Orgullo y prejuicio", "Jane Austen"),
    ("El principito", "Antoine de Saint-Exupéry"),
    ("Crimen y castigo", "Fiódor Dostoyevski"),
    ("El gran Gatsby", "F. Scott Fitzgerald"),
    ("Matar a un ruiseñor", "Harper Lee"),
    ("El señor de los anillos", "J.R.R. Tolkien"),
    ("Harry Potter y la piedra filosofal", "J.K. Rowling"),
    ("El código Da Vinci", "Dan Brown"),
    ("Los juegos del hambre", "Suzanne Collins"),
    ("It", "Stephen King"),
    ("Juego de tronos", "George R.R. Martin"),
    ("El alquimista", "Paulo Coelho"),
    ("La sombra del viento", "Carlos Ruiz Zafón"),
    ("Rayuela", "Julio Cortázar"),
    ("Ficciones", "Jorge Luis Borges"),
    ("La casa de los espíritus", "Isabel Allende"),
    ("Pedro Páramo", "Juan Rulfo"),
];

/// The fixed local table. Built once, never mutated.
pub struct LocalCatalog {
    entries: Vec<CatalogEntry>,
}

impl LocalCatalog {
    pub fn new() -> Self {
        let entries = LOCAL_TABLE
            .iter()
            .map(|&(title, author)| CatalogEntry {
                title: title.to_string(),
                author: author.to_string(),
            })
            .collect();
        Self { entries }
    }

    /// Case-insensitive bidirectional substring match, first entry wins.
    ///
    /// Pure and infallible: local misses never carry an error. Year is
    /// always "Unknown" because the table stores no publication dates.
    pub fn lookup(&self, query: &str) -> LookupResult {
        let query_lower = query.to_lowercase();

        for entry in &self.entries {
            let title_lower = entry.title.to_lowercase();
            if title_lower.contains(&query_lower) || query_lower.contains(&title_lower) {
                debug!(query = %query, matched = %entry.title, "local table hit");
                return LookupResult::hit(
                    Source::Local,
                    entry.author.clone(),
                    entry.title.clone(),
                    UNKNOWN_YEAR,
                );
            }
        }

        LookupResult::miss(Source::Local)
    }

    /// The first `n` entries in table order, for the "popular books" panel.
    pub fn popular(&self, n: usize) -> &[CatalogEntry] {
        &self.entries[..n.min(self.entries.len())]
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for LocalCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_title_matches() {
        let catalog = LocalCatalog::new();
        let result = catalog.lookup("1984");
        assert!(result.found);
        assert_eq!(result.author.as_deref(), Some("George Orwell"));
        assert_eq!(result.matched_title.as_deref(), Some("1984"));
        assert_eq!(result.year.as_deref(), Some("Unknown"));
        assert_eq!(result.source, Source::Local);
    }

    #[test]
    fn partial_query_matches_full_title() {
        let catalog = LocalCatalog::new();
        let result = catalog.lookup("cien años");
        assert!(result.found);
        assert_eq!(result.author.as_deref(), Some("Gabriel García Márquez"));
        assert_eq!(result.matched_title.as_deref(), Some("Cien años de soledad"));
    }

    #[test]
    fn query_containing_a_title_matches() {
        // Bidirectional containment: a verbose query that includes a known
        // title as a substring still hits that entry.
        let catalog = LocalCatalog::new();
        let result = catalog.lookup("me gustó mucho Pedro Páramo cuando lo leí");
        assert!(result.found);
        assert_eq!(result.author.as_deref(), Some("Juan Rulfo"));
    }

    #[test]
    fn matching_is_case_insensitive() {
        let catalog = LocalCatalog::new();
        assert!(catalog.lookup("EL PRINCIPITO").found);
        assert!(catalog.lookup("el gran gatsby").found);
    }

    #[test]
    fn first_entry_in_table_order_wins() {
        // "o" is a substring of many titles; the first table entry that
        // contains it must be the one returned.
        let catalog = LocalCatalog::new();
        let result = catalog.lookup("o");
        assert!(result.found);
        assert_eq!(result.matched_title.as_deref(), Some("Cien años de soledad"));
    }

    #[test]
    fn garbage_query_misses() {
        let catalog = LocalCatalog::new();
        let result = catalog.lookup("asdfghjkl");
        assert!(!result.found);
        assert!(result.author.is_none());
        assert!(result.error.is_none());
        assert_eq!(result.source, Source::Local);
    }

    #[test]
    fn popular_clamps_to_table_size() {
        let catalog = LocalCatalog::new();
        assert_eq!(catalog.len(), 20);
        assert_eq!(catalog.popular(9).len(), 9);
        assert_eq!(catalog.popular(9)[0].title, "Cien años de soledad");
        assert_eq!(catalog.popular(100).len(), 20);
        assert!(catalog.popular(0).is_empty());
    }
}
