/// Mapping from recognized source file stems to their target stems.
///
/// The table is explicit configuration handed to the mapper rather than a
/// module-level constant, so alternate target conventions (and tests) can
/// swap it out wholesale.
#[derive(Debug, Clone)]
pub struct RouteNameTable {
    entries: Vec<(String, String)>,
}

impl Default for RouteNameTable {
    /// The reference convention: `page` → `index`, `layout` → `_layout`,
    /// `not-found` → `+not-found`.
    fn default() -> Self {
        Self::from_entries([
            ("page", "index"),
            ("layout", "_layout"),
            ("not-found", "+not-found"),
        ])
    }
}

impl RouteNameTable {
    pub fn from_entries<I, S, T>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, T)>,
        S: Into<String>,
        T: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(from, to)| (from.into(), to.into()))
                .collect(),
        }
    }

    /// Looks up the target stem for a recognized source stem.
    pub fn target_stem(&self, source_stem: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(from, _)| from == source_stem)
            .map(|(_, to)| to.as_str())
    }

    /// All `"<stem><ext>"` filename combinations for the given extensions
    /// (extensions carry the leading dot).
    pub fn patterns(&self, extensions: &[String]) -> Vec<String> {
        self.entries
            .iter()
            .flat_map(|(from, _)| extensions.iter().map(move |ext| format!("{}{}", from, ext)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_lookups() {
        let table = RouteNameTable::default();
        assert_eq!(table.target_stem("page"), Some("index"));
        assert_eq!(table.target_stem("layout"), Some("_layout"));
        assert_eq!(table.target_stem("not-found"), Some("+not-found"));
        assert_eq!(table.target_stem("component"), None);
    }

    #[test]
    fn test_patterns_cross_product() {
        let table = RouteNameTable::default();
        let patterns = table.patterns(&[".ts".to_string(), ".tsx".to_string()]);

        assert_eq!(patterns.len(), 6);
        assert!(patterns.contains(&"page.ts".to_string()));
        assert!(patterns.contains(&"page.tsx".to_string()));
        assert!(patterns.contains(&"not-found.tsx".to_string()));
    }

    #[test]
    fn test_custom_table() {
        let table = RouteNameTable::from_entries([("page", "page"), ("layout", "layout")]);
        assert_eq!(table.target_stem("page"), Some("page"));
        assert_eq!(table.target_stem("not-found"), None);
    }
}
