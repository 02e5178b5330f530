// Turkish alphabet classification and phonological predicates.
//
// All sets are fixed lowercase character classes. Callers are expected to
// lowercase their input (see `turkish_lower`) before using the predicates.

// ---------------------------------------------------------------------------
// Character classes
// ---------------------------------------------------------------------------

/// The Turkish alphabet (lowercase). Words containing any other character
/// are not stemmed.
pub const ALPHABET: &[char] = &[
    'a', 'b', 'c', '\u{00E7}', 'd', 'e', 'f', 'g', '\u{011F}', 'h', '\u{0131}', 'i', 'j', 'k', 'l',
    'm', 'n', 'o', '\u{00F6}', 'p', 'r', 's', '\u{015F}', 't', 'u', '\u{00FC}', 'v', 'y', 'z',
];

/// Turkish vowels: a e ı i o ö u ü
pub const VOWELS: &[char] = &['\u{00FC}', 'i', '\u{0131}', 'u', 'e', '\u{00F6}', 'a', 'o'];

/// Turkish consonants: b c ç d f g ğ h j k l m n p r s ş t v y z
pub const CONSONANTS: &[char] = &[
    'b', 'c', '\u{00E7}', 'd', 'f', 'g', '\u{011F}', 'h', 'j', 'k', 'l', 'm', 'n', 'p', 'r', 's',
    '\u{015F}', 't', 'v', 'y', 'z',
];

/// Rounded vowels: o ö u ü
pub const ROUNDED_VOWELS: &[char] = &['o', '\u{00F6}', 'u', '\u{00FC}'];

/// Vowels allowed after a rounded vowel: a e u ü
pub const FOLLOWING_ROUNDED_VOWELS: &[char] = &['a', 'e', 'u', '\u{00FC}'];

/// Unrounded vowels: i ı e a
pub const UNROUNDED_VOWELS: &[char] = &['i', '\u{0131}', 'e', 'a'];

/// Front vowels: e i ö ü
pub const FRONT_VOWELS: &[char] = &['e', 'i', '\u{00F6}', '\u{00FC}'];

/// Back vowels: ı u a o
pub const BACK_VOWELS: &[char] = &['\u{0131}', 'u', 'a', 'o'];

// ---------------------------------------------------------------------------
// Alphabet membership
// ---------------------------------------------------------------------------

/// Check whether a character belongs to the (lowercase) Turkish alphabet.
pub fn is_turkish_letter(c: char) -> bool {
    ALPHABET.contains(&c)
}

/// Check whether every character of `word` belongs to the Turkish alphabet.
///
/// The empty word is vacuously Turkish; emptiness is gated separately by
/// the stemmer.
pub fn is_turkish_word(word: &str) -> bool {
    word.chars().all(is_turkish_letter)
}

/// Check whether a character is a Turkish vowel.
pub fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c)
}

/// Check whether a character is a Turkish consonant.
pub fn is_consonant(c: char) -> bool {
    CONSONANTS.contains(&c)
}

/// The vowels of a word, in order.
pub fn vowels(word: &str) -> String {
    word.chars().filter(|&c| is_vowel(c)).collect()
}

/// Number of syllables in a word, which in Turkish equals its vowel count.
pub fn count_syllables(word: &str) -> usize {
    word.chars().filter(|&c| is_vowel(c)).count()
}

// ---------------------------------------------------------------------------
// Vowel harmony
// ---------------------------------------------------------------------------

/// Frontness harmony: both vowels front, or both back.
pub fn has_frontness(vowel: char, candidate: char) -> bool {
    (FRONT_VOWELS.contains(&vowel) && FRONT_VOWELS.contains(&candidate))
        || (BACK_VOWELS.contains(&vowel) && BACK_VOWELS.contains(&candidate))
}

/// Roundness harmony: both unrounded, or a rounded vowel followed by one of
/// [`FOLLOWING_ROUNDED_VOWELS`].
pub fn has_roundness(vowel: char, candidate: char) -> bool {
    (UNROUNDED_VOWELS.contains(&vowel) && UNROUNDED_VOWELS.contains(&candidate))
        || (ROUNDED_VOWELS.contains(&vowel) && FOLLOWING_ROUNDED_VOWELS.contains(&candidate))
}

/// Vowel harmony between two consecutive vowels.
pub fn has_vowel_harmony(vowel: char, candidate: char) -> bool {
    has_roundness(vowel, candidate) && has_frontness(vowel, candidate)
}

/// Check the vowel harmony of a word by comparing its last two vowels.
///
/// Words with fewer than two vowels pass vacuously.
pub fn word_has_vowel_harmony(word: &str) -> bool {
    let mut rev = word.chars().rev().filter(|&c| is_vowel(c));
    match (rev.next(), rev.next()) {
        (Some(candidate), Some(vowel)) => has_vowel_harmony(vowel, candidate),
        _ => true,
    }
}

// ---------------------------------------------------------------------------
// Consonant rules
// ---------------------------------------------------------------------------

/// Check whether `candidate`, the last character of `word`, may be dropped as
/// an optional (buffer) letter.
///
/// A vowel must follow a consonant and a consonant must follow a vowel. A
/// word with no character before the candidate is never valid.
pub fn is_valid_optional_letter(word: &str, candidate: char) -> bool {
    let Some(previous) = word.chars().rev().nth(1) else {
        return false;
    };
    if is_vowel(candidate) {
        is_consonant(previous)
    } else {
        is_vowel(previous)
    }
}

/// The voiceless counterpart of a softened final consonant
/// (b→p, c→ç, d→t, ğ→k), or `None` if `c` is not one of them.
pub fn unvoiced(c: char) -> Option<char> {
    match c {
        'b' => Some('p'),
        'c' => Some('\u{00E7}'),
        'd' => Some('t'),
        '\u{011F}' => Some('k'),
        _ => None,
    }
}

/// Replace a voiced final stop with its voiceless counterpart.
///
/// Words ending in any other character are returned unchanged.
pub fn harden_last_consonant(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next_back().and_then(unvoiced) {
        Some(replacement) => {
            let mut result = String::with_capacity(word.len());
            result.push_str(chars.as_str());
            result.push(replacement);
            result
        }
        None => word.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Case conversion
// ---------------------------------------------------------------------------

/// Lowercase a character using Turkish rules.
///
/// Dotless capital I maps to dotless ı and dotted capital İ maps to i;
/// everything else uses the simple one-to-one Unicode mapping.
pub fn turkish_lower(c: char) -> char {
    match c {
        'I' => '\u{0131}',
        '\u{0130}' => 'i',
        _ => c.to_lowercase().next().unwrap_or(c),
    }
}

/// Lowercase a whole word using [`turkish_lower`].
pub fn turkish_lowercase(word: &str) -> String {
    word.chars().map(turkish_lower).collect()
}
