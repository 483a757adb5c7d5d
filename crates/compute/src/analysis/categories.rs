use std::collections::BTreeSet;

/// Informal category names and the POI categories they stand for.
const ALIASES: &[(&str, &[&str])] = &[
    ("restaurant", &["Restaurant", "Fast Food", "Cafe"]),
    ("bar", &["Bar", "Pub"]),
    ("nightclub", &["Nightclub", "Club"]),
];

/// Lower-cased POI categories to match against.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategorySet {
    names: BTreeSet<String>,
}

impl CategorySet {
    pub fn matches(&self, category: &str) -> bool {
        self.names.contains(&category.to_lowercase())
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.names.iter().map(String::as_str)
    }
}

/// Expands requested names through the alias table.
///
/// Lookup is case-insensitive; names without an alias pass through. The
/// result is flattened, lower-cased and de-duplicated.
pub fn expand_categories<S: AsRef<str>>(requested: &[S]) -> CategorySet {
    let mut names = BTreeSet::new();
    for name in requested {
        let lower = name.as_ref().trim().to_lowercase();
        if lower.is_empty() {
            continue;
        }
        match ALIASES.iter().find(|(alias, _)| *alias == lower) {
            Some((_, expanded)) => {
                names.extend(expanded.iter().map(|c| c.to_lowercase()));
            }
            None => {
                names.insert(lower);
            }
        }
    }
    CategorySet { names }
}
