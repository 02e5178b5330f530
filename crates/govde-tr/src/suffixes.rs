// Turkish suffix catalogs.
// Origin: Suffixes/NominalVerbSuffix.cs, NounSuffix.cs, DerivationalSuffix.cs
//
// Each catalog lists its rules in trial order: a state offering the whole
// catalog enqueues matching suffixes in this order, so earlier rules win
// pruning races against later ones (-(y)ken is tried before -n, -nU before
// -(s)U). Identifiers follow the conventional suffix numbering of each
// category and are only unique within it.

use govde_fsm::{Suffix, SuffixId};

/// High vowels, the buffer vowel of -(U)m, -(U)mUz and -(U)nUz.
const HIGH_VOWELS: &[char] = &['ı', 'i', 'u', 'ü'];

const Y: &[char] = &['y'];
const N: &[char] = &['n'];
const S: &[char] = &['s'];
const NONE: &[char] = &[];

/// Nominal verb suffixes (predicate markers: person, copula, tense).
pub mod nominal_verb {
    use super::*;

    pub const S1: SuffixId = 1;
    pub const S2: SuffixId = 2;
    pub const S3: SuffixId = 3;
    pub const S4: SuffixId = 4;
    pub const S5: SuffixId = 5;
    pub const S6: SuffixId = 6;
    pub const S7: SuffixId = 7;
    pub const S8: SuffixId = 8;
    pub const S9: SuffixId = 9;
    pub const S10: SuffixId = 10;
    pub const S11: SuffixId = 11;
    pub const S12: SuffixId = 12;
    pub const S13: SuffixId = 13;
    pub const S14: SuffixId = 14;
    pub const S15: SuffixId = 15;

    pub static SUFFIXES: &[Suffix] = &[
        Suffix::new(
            S11,
            "-cAsInA",
            &["casına", "çasına", "cesine", "çesine"],
            NONE,
            true,
        ),
        Suffix::new(
            S4,
            "-sUnUz",
            &["sınız", "siniz", "sunuz", "sünüz"],
            NONE,
            true,
        ),
        Suffix::new(S14, "-(y)mUş", &["muş", "miş", "müş", "mış"], Y, true),
        Suffix::new(S15, "-(y)ken", &["ken"], Y, true),
        Suffix::new(S2, "-sUn", &["sın", "sin", "sun", "sün"], NONE, true),
        Suffix::new(S5, "-lAr", &["lar", "ler"], NONE, true),
        Suffix::new(S9, "-nUz", &["nız", "niz", "nuz", "nüz"], NONE, true),
        Suffix::new(
            S10,
            "-DUr",
            &["tır", "tir", "tur", "tür", "dır", "dir", "dur", "dür"],
            NONE,
            true,
        ),
        Suffix::new(S3, "-(y)Uz", &["ız", "iz", "uz", "üz"], Y, true),
        Suffix::new(S1, "-(y)Um", &["ım", "im", "um", "üm"], Y, true),
        Suffix::new(
            S12,
            "-(y)DU",
            &["dı", "di", "du", "dü", "tı", "ti", "tu", "tü"],
            Y,
            true,
        ),
        Suffix::new(S13, "-(y)sA", &["sa", "se"], Y, true),
        Suffix::new(S6, "-m", &["m"], NONE, true),
        Suffix::new(S7, "-n", &["n"], NONE, true),
        Suffix::new(S8, "-k", &["k"], NONE, true),
    ];
}

/// Noun suffixes (plural, possessive, case).
pub mod noun {
    use super::*;

    pub const S1: SuffixId = 1;
    pub const S2: SuffixId = 2;
    pub const S3: SuffixId = 3;
    pub const S4: SuffixId = 4;
    pub const S5: SuffixId = 5;
    pub const S6: SuffixId = 6;
    pub const S7: SuffixId = 7;
    pub const S8: SuffixId = 8;
    pub const S9: SuffixId = 9;
    pub const S10: SuffixId = 10;
    pub const S11: SuffixId = 11;
    pub const S12: SuffixId = 12;
    pub const S13: SuffixId = 13;
    pub const S14: SuffixId = 14;
    pub const S15: SuffixId = 15;
    pub const S16: SuffixId = 16;
    pub const S17: SuffixId = 17;
    pub const S18: SuffixId = 18;
    pub const S19: SuffixId = 19;

    pub static SUFFIXES: &[Suffix] = &[
        Suffix::new(S16, "-nDAn", &["ndan", "ntan", "nden", "nten"], NONE, true),
        Suffix::new(S7, "-lArI", &["ları", "leri"], NONE, true),
        Suffix::new(
            S3,
            "-(U)mUz",
            &["mız", "miz", "muz", "müz"],
            HIGH_VOWELS,
            true,
        ),
        Suffix::new(
            S5,
            "-(U)nUz",
            &["nız", "niz", "nuz", "nüz"],
            HIGH_VOWELS,
            true,
        ),
        Suffix::new(S1, "-lAr", &["lar", "ler"], NONE, true),
        Suffix::new(S14, "-nDA", &["nta", "nte", "nda", "nde"], NONE, true),
        Suffix::new(S15, "-DAn", &["dan", "tan", "den", "ten"], NONE, true),
        Suffix::new(S17, "-(y)lA", &["la", "le"], Y, true),
        Suffix::new(S10, "-(n)Un", &["ın", "in", "un", "ün"], N, true),
        Suffix::new(S19, "-(n)cA", &["ca", "ce"], N, true),
        Suffix::new(S4, "-Un", &["ın", "in", "un", "ün"], NONE, true),
        Suffix::new(S9, "-nU", &["nı", "ni", "nu", "nü"], NONE, true),
        Suffix::new(S12, "-nA", &["na", "ne"], NONE, true),
        Suffix::new(S13, "-DA", &["da", "de", "ta", "te"], NONE, true),
        Suffix::new(S18, "-ki", &["ki"], NONE, false),
        Suffix::new(S2, "-(U)m", &["m"], HIGH_VOWELS, true),
        Suffix::new(S6, "-(s)U", &["ı", "i", "u", "ü"], S, true),
        Suffix::new(S8, "-(y)U", &["ı", "i", "u", "ü"], Y, true),
        Suffix::new(S11, "-(y)A", &["a", "e"], Y, true),
    ];
}

/// Derivational suffixes.
pub mod derivational {
    use super::*;

    pub const S1: SuffixId = 1;

    const LU: Suffix = Suffix::new(S1, "-lU", &["lı", "li", "lu", "lü"], NONE, true);

    pub static SUFFIXES: &[Suffix] = &[LU];
}
