// WASM bindings for the govde Turkish stemmer.
//
// Provides a `WasmStemmer` class exported via wasm-bindgen that wraps
// `TurkishStemmer` from govde-tr. Word lists are passed in as
// newline-separated strings; list results are converted to JavaScript
// values using serde-wasm-bindgen.
//
// Usage from JavaScript:
//
//   const stemmer = new WasmStemmer(protectedWords, "", "", "ev\nat");
//   stemmer.stem("kitaplar");              // => "kitap"
//   stemmer.candidates("evlerde");         // => ["ev", "evler"]
//   stemmer.stemWords(["evlerde", "ve"]);  // => [{ word: "evlerde", stem: "ev" }, ...]

use serde::Serialize;
use wasm_bindgen::prelude::*;

use govde_tr::{TurkishStemmer, WordLists};

/// Serializable word/stem pair.
#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsStem {
    word: String,
    stem: String,
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsError::new(&e.to_string()))
}

fn word_lists(
    protected_words: &str,
    vowel_harmony_exceptions: &str,
    last_consonant_exceptions: &str,
    average_stem_size_exceptions: &str,
) -> WordLists {
    WordLists {
        protected_words: WordLists::parse_list(protected_words),
        vowel_harmony_exceptions: WordLists::parse_list(vowel_harmony_exceptions),
        last_consonant_exceptions: WordLists::parse_list(last_consonant_exceptions),
        average_stem_size_exceptions: WordLists::parse_list(average_stem_size_exceptions),
    }
}

fn stem_all<I>(stemmer: &TurkishStemmer, words: I) -> Vec<JsStem>
where
    I: IntoIterator<Item = String>,
{
    words
        .into_iter()
        .map(|word| {
            let stem = stemmer.stem(&word);
            JsStem { word, stem }
        })
        .collect()
}

/// Turkish stemmer for WebAssembly.
#[wasm_bindgen]
pub struct WasmStemmer {
    stemmer: TurkishStemmer,
}

#[wasm_bindgen]
impl WasmStemmer {
    /// Create a stemmer from four word lists, one word per line. Pass an
    /// empty string for a list that is not needed.
    #[wasm_bindgen(constructor)]
    pub fn new(
        protected_words: &str,
        vowel_harmony_exceptions: &str,
        last_consonant_exceptions: &str,
        average_stem_size_exceptions: &str,
    ) -> WasmStemmer {
        let lists = word_lists(
            protected_words,
            vowel_harmony_exceptions,
            last_consonant_exceptions,
            average_stem_size_exceptions,
        );
        WasmStemmer {
            stemmer: TurkishStemmer::new(lists),
        }
    }

    /// Stem a lowercase word.
    pub fn stem(&self, word: &str) -> String {
        self.stemmer.stem(word)
    }

    /// All candidate stems of a word, best first.
    pub fn candidates(&self, word: &str) -> Result<JsValue, JsError> {
        to_js(&self.stemmer.candidates(word))
    }

    /// Stem an array of words.
    ///
    /// Returns a JavaScript array of `{ word, stem }` objects. Non-string
    /// array elements are skipped.
    #[wasm_bindgen(js_name = "stemWords")]
    pub fn stem_words(&self, words: js_sys::Array) -> Result<JsValue, JsError> {
        let words = words.iter().filter_map(|v| v.as_string());
        to_js(&stem_all(&self.stemmer, words))
    }

    /// Get the library version string.
    #[wasm_bindgen(js_name = "getVersion")]
    pub fn get_version() -> String {
        env!("CARGO_PKG_VERSION").to_string()
    }
}
