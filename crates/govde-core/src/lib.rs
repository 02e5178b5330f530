//! Shared types and phonological utilities for the govde Turkish stemmer.
//!
//! - [`character`] -- Turkish alphabet classification, vowel harmony and
//!   the consonant rules used while stripping suffixes
//! - [`enums`] -- Suffix categories shared by the automaton and language crates

pub mod character;
pub mod enums;
