//! Part-of-speech tagger
//!
//! Assigns Penn Treebank tags to tokens. Lookup order:
//! 1. tagged lexicon (exact token, then lowercased)
//! 2. closed-class words (determiners, pronouns, prepositions, ...)
//! 3. shape and suffix rules, defaulting to `NN`

use crate::lexicon::TagLexicon;

/// Closed-class English words and their tags
const CLOSED_CLASS: &[(&str, &str)] = &[
  ("a", "DT"),
  ("an", "DT"),
  ("the", "DT"),
  ("this", "DT"),
  ("that", "DT"),
  ("these", "DT"),
  ("those", "DT"),
  ("every", "DT"),
  ("some", "DT"),
  ("i", "PRP"),
  ("you", "PRP"),
  ("he", "PRP"),
  ("she", "PRP"),
  ("it", "PRP"),
  ("we", "PRP"),
  ("they", "PRP"),
  ("me", "PRP"),
  ("him", "PRP"),
  ("us", "PRP"),
  ("them", "PRP"),
  ("my", "PRP$"),
  ("your", "PRP$"),
  ("his", "PRP$"),
  ("her", "PRP$"),
  ("its", "PRP$"),
  ("our", "PRP$"),
  ("their", "PRP$"),
  ("and", "CC"),
  ("or", "CC"),
  ("but", "CC"),
  ("nor", "CC"),
  ("in", "IN"),
  ("on", "IN"),
  ("at", "IN"),
  ("of", "IN"),
  ("for", "IN"),
  ("with", "IN"),
  ("from", "IN"),
  ("by", "IN"),
  ("about", "IN"),
  ("into", "IN"),
  ("over", "IN"),
  ("under", "IN"),
  ("if", "IN"),
  ("because", "IN"),
  ("to", "TO"),
  ("can", "MD"),
  ("could", "MD"),
  ("may", "MD"),
  ("might", "MD"),
  ("must", "MD"),
  ("shall", "MD"),
  ("should", "MD"),
  ("will", "MD"),
  ("would", "MD"),
  ("is", "VBZ"),
  ("are", "VBP"),
  ("was", "VBD"),
  ("were", "VBD"),
  ("be", "VB"),
  ("been", "VBN"),
  ("not", "RB"),
  ("very", "RB"),
  ("who", "WP"),
  ("what", "WP"),
  ("which", "WDT"),
  ("where", "WRB"),
  ("when", "WRB"),
  ("why", "WRB"),
  ("how", "WRB"),
  ("there", "EX"),
];

/// Suffix rules checked in order, first match wins
const SUFFIX_RULES: &[(&str, &str)] = &[
  ("ness", "NN"),
  ("ment", "NN"),
  ("tion", "NN"),
  ("sion", "NN"),
  ("ity", "NN"),
  ("ship", "NN"),
  ("ing", "VBG"),
  ("ed", "VBD"),
  ("ly", "RB"),
  ("ous", "JJ"),
  ("ful", "JJ"),
  ("able", "JJ"),
  ("ible", "JJ"),
  ("less", "JJ"),
  ("ive", "JJ"),
  ("ic", "JJ"),
  ("est", "JJS"),
  ("ss", "NN"),
  ("us", "NN"),
  ("s", "NNS"),
];

/// Tagger over a (possibly empty) tagged lexicon
#[derive(Debug, Clone)]
pub struct PosTagger {
  lexicon: TagLexicon,
}

impl PosTagger {
  /// Builds a tagger from a loaded lexicon
  pub fn new(lexicon: TagLexicon) -> Self {
    Self { lexicon }
  }

  /// Tags every token, returning `(token, tag)` pairs in input order
  pub fn tag(&self, tokens: &[String]) -> Vec<(String, String)> {
    tokens
      .iter()
      .map(|token| (token.clone(), self.tag_token(token)))
      .collect()
  }

  /// Tag of a single token
  pub fn tag_token(&self, token: &str) -> String {
    if let Some(tag) = self.lexicon.get(token) {
      return tag.clone();
    }

    let lower = token.to_lowercase();
    if let Some(tag) = self.lexicon.get(&lower) {
      return tag.clone();
    }

    if let Some((_, tag)) = CLOSED_CLASS.iter().find(|(word, _)| *word == lower) {
      return (*tag).to_string();
    }

    guess_tag(token, &lower).to_string()
  }
}

/// Shape and suffix based guess for unknown tokens
fn guess_tag(token: &str, lower: &str) -> &'static str {
  if token.chars().all(|c| c.is_ascii_digit()) {
    return "CD";
  }

  if token.chars().next().is_some_and(char::is_uppercase) {
    return if lower.len() > 3 && lower.ends_with('s') && !lower.ends_with("ss") {
      "NNPS"
    } else {
      "NNP"
    };
  }

  // Short words keep their letters to themselves ("is", "bus", "bed")
  SUFFIX_RULES
    .iter()
    .find(|(suffix, _)| lower.len() > suffix.len() + 1 && lower.ends_with(suffix))
    .map(|(_, tag)| *tag)
    .unwrap_or("NN")
}
