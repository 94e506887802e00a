use regex::Regex;

/// Recovers the post-rename path from numstat path fields.
///
/// Git writes partial moves as `dir/{old => new}/file` and full renames as
/// `old/path => new/path`. Nested or malformed arrows are not validated; each
/// substitution is applied once and the result is taken as is.
#[derive(Debug, Clone)]
pub struct PathResolver {
    braced: Regex,
    whole: Regex,
}

impl Default for PathResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl PathResolver {
    #[must_use]
    pub fn new() -> Self {
        Self {
            braced: Regex::new(r"\{.*? => (.*?)\}").expect("Invalid regex"),
            whole: Regex::new(r"^.* => ").expect("Invalid regex"),
        }
    }

    /// Canonical (new-side) path for a raw numstat path field.
    #[must_use]
    pub fn resolve(&self, raw: &str) -> String {
        let raw = raw.trim_end();
        let partial = self.braced.replace_all(raw, "$1");
        self.whole.replace(&partial, "").into_owned()
    }

    /// Final `/`-separated component of a resolved path.
    #[must_use]
    pub fn file_name(path: &str) -> &str {
        path.rsplit('/').next().unwrap_or(path)
    }

    /// Resolve and strip to the filename in one step.
    #[must_use]
    pub fn resolve_file_name(&self, raw: &str) -> String {
        Self::file_name(&self.resolve(raw)).to_string()
    }
}

#[cfg(test)]
#[path = "rename_tests.rs"]
mod tests;
