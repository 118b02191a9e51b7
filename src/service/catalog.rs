use crate::model::champion::Champion;

/// The fixed role filter the catalog offers; an empty selection means
/// "All Roles".
pub const ROLE_TAGS: [&str; 6] = ["Fighter", "Tank", "Mage", "Assassin", "Marksman", "Support"];

pub struct CatalogService<'a> {
    champions: &'a [Champion],
}

impl<'a> CatalogService<'a> {
    pub fn new(champions: &'a [Champion]) -> Self {
        Self { champions }
    }

    pub fn total(&self) -> usize {
        self.champions.len()
    }

    pub fn all(&self) -> Vec<&'a Champion> {
        self.champions.iter().collect()
    }

    /// Case-insensitive substring search over name and title, combined with
    /// an exact tag filter. Empty search and `None` tag are no-ops.
    pub fn filtered(&self, search: &str, tag: Option<&str>) -> Vec<&'a Champion> {
        let needle = search.trim().to_lowercase();
        self.champions
            .iter()
            .filter(|c| {
                needle.is_empty()
                    || c.name.to_lowercase().contains(&needle)
                    || c.title.to_lowercase().contains(&needle)
            })
            .filter(|c| match tag {
                Some(tag) => c.tags.iter().any(|t| t == tag),
                None => true,
            })
            .collect()
    }

    pub fn search(&self, query: &str) -> Vec<&'a Champion> {
        self.filtered(query, None)
    }

    pub fn with_tag(&self, tag: &str) -> Vec<&'a Champion> {
        self.filtered("", Some(tag))
    }
}
