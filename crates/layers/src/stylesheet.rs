/// Named stylesheets registered once per document.
///
/// Registering a name that is already present is a no-op, so view setup can
/// call [`StyleSheetRegistry::register`] on every mount without stacking
/// duplicate `<style>` blocks.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StyleSheetRegistry {
    sheets: Vec<(String, String)>,
}

impl StyleSheetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the sheet was newly added.
    pub fn register(&mut self, name: impl Into<String>, css: impl Into<String>) -> bool {
        let name = name.into();
        if self.contains(&name) {
            return false;
        }
        self.sheets.push((name, css.into()));
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.sheets.iter().any(|(n, _)| n == name)
    }

    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }

    /// Concatenates sheets in registration order, one `<style>` block each.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (name, css) in &self.sheets {
            out.push_str(&format!("<style data-sheet=\"{name}\">\n{css}\n</style>\n"));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::StyleSheetRegistry;

    #[test]
    fn register_is_idempotent_per_name() {
        let mut reg = StyleSheetRegistry::new();
        assert!(reg.register("popup", ".popup { color: #fff; }"));
        assert!(!reg.register("popup", ".popup { color: #000; }"));
        assert!(reg.register("chat", ".chat {}"));
        assert_eq!(reg.len(), 2);

        let html = reg.render();
        assert_eq!(html.matches("<style").count(), 2);
        assert!(html.contains("#fff"));
        assert!(!html.contains("#000"));
        assert!(html.find("popup").unwrap() < html.find("chat").unwrap());
    }
}
