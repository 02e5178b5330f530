// Shared enums

use std::fmt;

/// The three suffix families, in the order the stemmer applies them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Nominal verb (copula, person and tense) suffixes.
    NominalVerb,
    /// Noun (plural, possessive and case) suffixes.
    Noun,
    /// Derivational suffixes.
    Derivational,
}

impl Category {
    /// All categories in stripping order.
    pub const ALL: [Category; 3] = [
        Category::NominalVerb,
        Category::Noun,
        Category::Derivational,
    ];

    /// Machine name used in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            Category::NominalVerb => "NominalVerb",
            Category::Noun => "Noun",
            Category::Derivational => "Derivational",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stripping_order() {
        let names = Category::ALL.map(Category::name);
        assert_eq!(names, ["NominalVerb", "Noun", "Derivational"]);
    }

    #[test]
    fn display_matches_name() {
        assert_eq!(Category::Noun.to_string(), "Noun");
        let category = Category::NominalVerb;
        assert_eq!(category.to_string(), category.name());
    }
}
