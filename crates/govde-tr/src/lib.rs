//! Turkish stemmer.
//!
//! Reduces a lowercase Turkish word to its stem by running three suffix
//! automata in sequence (nominal verb, noun, derivational), pooling every
//! stem they reach, softening final consonants, and picking the candidate
//! closest to the average Turkish stem length.
//!
//! ```
//! use govde_tr::TurkishStemmer;
//!
//! let stemmer = TurkishStemmer::default();
//! assert_eq!(stemmer.stem("kitaplar"), "kitap");
//! ```
//!
//! The default stemmer has empty word lists, and the ranking then prefers
//! the candidate closest to four letters: `evlerde` gives `evler`, not `ev`.
//! Short stems win once they are listed as average stem size exceptions:
//!
//! ```
//! use govde_tr::{TurkishStemmer, WordLists};
//!
//! assert_eq!(TurkishStemmer::default().stem("evlerde"), "evler");
//!
//! let lists = WordLists {
//!     average_stem_size_exceptions: WordLists::parse_list("ev"),
//!     ..WordLists::default()
//! };
//! assert_eq!(TurkishStemmer::new(lists).stem("evlerde"), "ev");
//! ```

pub mod states;
pub mod stemmer;
pub mod suffixes;
pub mod wordlists;

pub use states::Automata;
pub use stemmer::TurkishStemmer;
pub use wordlists::{WordListError, WordLists, WordSet};
