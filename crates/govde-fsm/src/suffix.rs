// Suffix rules matched at the end of a word.

/// Category-local suffix identifier. Transition tables are keyed by it.
pub type SuffixId = u8;

/// A suffix removal rule.
///
/// A rule matches when the word ends with one of its `forms`. All forms of a
/// rule have the same length, so at most one of them can match a given word.
/// After the form is removed, the last letter of the remainder may also be
/// dropped if it belongs to `optional_letters` (a buffer consonant such as
/// the `y` of `-(y)Um`, or a buffer vowel such as the `ı` of `-(U)m`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Suffix {
    id: SuffixId,
    name: &'static str,
    forms: &'static [&'static str],
    optional_letters: &'static [char],
    check_harmony: bool,
}

impl Suffix {
    pub const fn new(
        id: SuffixId,
        name: &'static str,
        forms: &'static [&'static str],
        optional_letters: &'static [char],
        check_harmony: bool,
    ) -> Self {
        Self {
            id,
            name,
            forms,
            optional_letters,
            check_harmony,
        }
    }

    #[inline]
    pub fn id(&self) -> SuffixId {
        self.id
    }

    /// Conventional morphophonemic name, e.g. `-(y)Um`.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn forms(&self) -> &'static [&'static str] {
        self.forms
    }

    /// Whether removing this suffix requires the word to pass vowel harmony.
    #[inline]
    pub fn check_harmony(&self) -> bool {
        self.check_harmony
    }

    /// Check whether `word` ends with one of the suffix forms.
    pub fn matches(&self, word: &str) -> bool {
        self.forms.iter().any(|form| word.ends_with(form))
    }

    /// Remove the matching form from the end of `word`.
    ///
    /// Returns `None` if no form matches.
    pub fn strip<'w>(&self, word: &'w str) -> Option<&'w str> {
        self.forms.iter().find_map(|form| word.strip_suffix(form))
    }

    /// The last letter of `word` if the suffix allows it as an optional letter.
    pub fn optional_letter(&self, word: &str) -> Option<char> {
        if self.optional_letters.is_empty() {
            return None;
        }
        word.chars()
            .next_back()
            .filter(|c| self.optional_letters.contains(c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLURAL: Suffix = Suffix::new(1, "-lAr", &["lar", "ler"], &[], true);
    const FIRST_PERSON: Suffix = Suffix::new(
        2,
        "-(U)m",
        &["m"],
        &['\u{0131}', 'i', 'u', '\u{00FC}'],
        true,
    );
    const KI: Suffix = Suffix::new(18, "-ki", &["ki"], &[], false);

    #[test]
    fn accessors() {
        assert_eq!(PLURAL.id(), 1);
        assert_eq!(PLURAL.name(), "-lAr");
        assert_eq!(PLURAL.forms(), &["lar", "ler"]);
        assert!(PLURAL.check_harmony());
        assert!(!KI.check_harmony());
    }

    #[test]
    fn matches_only_at_end() {
        assert!(PLURAL.matches("kitaplar"));
        assert!(PLURAL.matches("evler"));
        assert!(!PLURAL.matches("larva"));
        assert!(!PLURAL.matches("ev"));
    }

    #[test]
    fn strip_removes_matching_form() {
        assert_eq!(PLURAL.strip("kitaplar"), Some("kitap"));
        assert_eq!(PLURAL.strip("evler"), Some("ev"));
        assert_eq!(PLURAL.strip("ler"), Some(""));
        assert_eq!(PLURAL.strip("kitap"), None);
    }

    #[test]
    fn strip_handles_multibyte_forms() {
        let forms = &["s\u{0131}n\u{0131}z", "siniz"];
        let s = Suffix::new(4, "-sUnUz", forms, &[], true);
        assert_eq!(s.strip("gelsiniz"), Some("gel"));
        assert_eq!(s.strip("al\u{0131}rs\u{0131}n\u{0131}z"), Some("al\u{0131}r"));
    }

    #[test]
    fn optional_letter_lookup() {
        assert_eq!(FIRST_PERSON.optional_letter("evi"), Some('i'));
        assert_eq!(FIRST_PERSON.optional_letter("ev"), None);
        assert_eq!(FIRST_PERSON.optional_letter(""), None);
        assert_eq!(PLURAL.optional_letter("evi"), None);
    }
}
