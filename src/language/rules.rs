//! Filename patterns that must be decided before the generic extension lookup.

/// A `(predicate, label)` pair over the `(base, extension)` split of a filename.
#[derive(Debug, Clone, Copy)]
pub struct SpecialRule {
    pub name: &'static str,
    pub matches: fn(base: &str, extension: &str) -> bool,
    pub label: &'static str,
}

fn is_cmake_listfile(base: &str, extension: &str) -> bool {
    base.to_lowercase().starts_with("cmake") && extension.eq_ignore_ascii_case("txt")
}

/// `.bash_profile`, `.bash_aliases`, ...: the leading dot leaves an empty base.
fn is_bash_dotfile(base: &str, extension: &str) -> bool {
    base.is_empty() && extension.to_lowercase().starts_with("bash_")
}

/// Checked in order; the first match wins.
pub const SPECIAL_RULES: &[SpecialRule] = &[
    SpecialRule {
        name: "cmake-listfile",
        matches: is_cmake_listfile,
        label: "CMake",
    },
    SpecialRule {
        name: "bash-dotfile",
        matches: is_bash_dotfile,
        label: "Shell",
    },
];

/// First rule matching `(base, extension)`, if any.
#[must_use]
pub fn match_special(rules: &[SpecialRule], base: &str, extension: &str) -> Option<&'static str> {
    rules
        .iter()
        .find(|rule| (rule.matches)(base, extension))
        .map(|rule| rule.label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cmake_listfiles_match_case_insensitively() {
        assert_eq!(match_special(SPECIAL_RULES, "CMakeLists", "txt"), Some("CMake"));
        assert_eq!(match_special(SPECIAL_RULES, "cmake_modules", "TXT"), Some("CMake"));
        assert_eq!(match_special(SPECIAL_RULES, "notes", "txt"), None);
        assert_eq!(match_special(SPECIAL_RULES, "CMakeLists", "cmake"), None);
    }

    #[test]
    fn bash_dotfiles_need_empty_base() {
        assert_eq!(match_special(SPECIAL_RULES, "", "bash_profile"), Some("Shell"));
        assert_eq!(match_special(SPECIAL_RULES, "", "BASH_aliases"), Some("Shell"));
        assert_eq!(match_special(SPECIAL_RULES, "x", "bash_profile"), None);
    }

    #[test]
    fn custom_rule_list_is_respected() {
        let rules = [SpecialRule {
            name: "dockerfile-variant",
            matches: |base, _| base.eq_ignore_ascii_case("dockerfile"),
            label: "Dockerfile",
        }];
        assert_eq!(match_special(&rules, "Dockerfile", "dev"), Some("Dockerfile"));
        assert_eq!(match_special(&rules, "CMakeLists", "txt"), None);
    }
}
