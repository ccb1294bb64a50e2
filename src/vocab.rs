//! Vocabulary construction and the bidirectional token/id mapping.

use std::collections::BTreeSet;

use rustc_hash::FxHashMap;

use crate::config::VocabConfig;
use crate::error::{MinitokError, Result};
use crate::splitter::split;

/// Token identifier used throughout the crate.
pub type TokenId = u32;

/// Immutable bidirectional mapping between token strings and dense integer ids.
///
/// Construction sorts the distinct tokens lexicographically, assigns ids
/// `0..N-1` in that order, and finally inserts the unknown token with id `N`.
/// When the unknown token's spelling also occurred naturally in the corpus,
/// the final insert wins: the string keeps only its new id, the id it held
/// from sorted assignment is absent from the reverse mapping, and decoding
/// that orphaned id fails. This mirrors the last-write-wins dictionary
/// semantics the format is defined against and is deliberately not papered
/// over.
#[must_use]
#[derive(Debug, Clone)]
pub struct Vocabulary {
    token_to_id: FxHashMap<String, TokenId>,
    id_to_token: FxHashMap<TokenId, String>,
    unk_token: String,
    unk_id: TokenId,
}

impl Vocabulary {
    /// Builds a vocabulary from an iterator of tokens.
    ///
    /// Duplicates are collapsed and input order is discarded; ids follow
    /// lexicographic (code point) order of the distinct tokens. Building
    /// never fails: an empty iterator yields a vocabulary holding only the
    /// unknown token at id 0.
    pub fn from_tokens<I, S>(tokens: I, unk_token: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let distinct: BTreeSet<String> = tokens
            .into_iter()
            .map(|token| token.as_ref().to_owned())
            .collect();

        let mut token_to_id: FxHashMap<String, TokenId> = FxHashMap::default();
        for (id, token) in distinct.into_iter().enumerate() {
            token_to_id.insert(token, id as TokenId);
        }
        let unk_id = token_to_id.len() as TokenId;
        token_to_id.insert(unk_token.to_owned(), unk_id);

        Self::from_map(token_to_id, unk_token.to_owned(), unk_id)
    }

    /// Reconstructs a vocabulary from a previously persisted token/id mapping.
    ///
    /// The mapping is taken verbatim; this is the deserialization path, so the
    /// usual invariants are validated rather than assumed: ids must be unique
    /// and the unknown token must be present.
    pub fn from_parts(token_to_id: FxHashMap<String, TokenId>, unk_token: String) -> Result<Self> {
        let unk_id = *token_to_id.get(&unk_token).ok_or_else(|| {
            MinitokError::Serialization(format!(
                "unknown token {unk_token:?} is missing from the mapping"
            ))
        })?;
        let mut seen: FxHashMap<TokenId, &str> = FxHashMap::default();
        for (token, &id) in &token_to_id {
            if let Some(previous) = seen.insert(id, token) {
                return Err(MinitokError::Serialization(format!(
                    "tokens {previous:?} and {token:?} share id {id}"
                )));
            }
        }
        Ok(Self::from_map(token_to_id, unk_token, unk_id))
    }

    fn from_map(token_to_id: FxHashMap<String, TokenId>, unk_token: String, unk_id: TokenId) -> Self {
        let id_to_token = token_to_id
            .iter()
            .map(|(token, &id)| (id, token.clone()))
            .collect();
        Self {
            token_to_id,
            id_to_token,
            unk_token,
            unk_id,
        }
    }

    /// Returns the id assigned to `token`, if present.
    #[must_use]
    pub fn id_of(&self, token: &str) -> Option<TokenId> {
        self.token_to_id.get(token).copied()
    }

    /// Returns the token assigned to `id`, if present.
    #[must_use]
    pub fn token_of(&self, id: TokenId) -> Option<&str> {
        self.id_to_token.get(&id).map(String::as_str)
    }

    /// Returns `true` when `token` has an entry.
    #[must_use]
    pub fn contains(&self, token: &str) -> bool {
        self.token_to_id.contains_key(token)
    }

    /// Returns the total number of entries, including the unknown token.
    #[must_use]
    pub fn len(&self) -> usize {
        self.token_to_id.len()
    }

    /// Returns `true` when the vocabulary has no entries.
    ///
    /// Construction always inserts the unknown token, so this is only
    /// reachable through generic code holding a default-like value.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.token_to_id.is_empty()
    }

    /// Returns the spelling of the unknown token.
    #[must_use]
    pub fn unk_token(&self) -> &str {
        &self.unk_token
    }

    /// Returns the id substituted for out-of-vocabulary tokens during encoding.
    #[must_use]
    pub fn unk_id(&self) -> TokenId {
        self.unk_id
    }

    /// Iterates over `(token, id)` entries in unspecified order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, TokenId)> {
        self.token_to_id
            .iter()
            .map(|(token, &id)| (token.as_str(), id))
    }
}

/// Splits `corpus_text` and builds a [`Vocabulary`] from the resulting tokens.
///
/// This is the composition of the splitter and the vocabulary builder; the
/// corpus is expected to be fully assembled (see [`crate::corpus`] for the
/// file-joining front end).
pub fn build_vocabulary(corpus_text: &str, config: &VocabConfig) -> Vocabulary {
    Vocabulary::from_tokens(split(corpus_text), &config.unk_token)
}

#[cfg(test)]
mod tests {
    use super::*;

    const UNK: &str = "<UNK>";

    #[test]
    fn ids_follow_lexicographic_order() {
        let vocab = Vocabulary::from_tokens(["b", "a", ",", "a"], UNK);
        assert_eq!(vocab.id_of(","), Some(0));
        assert_eq!(vocab.id_of("a"), Some(1));
        assert_eq!(vocab.id_of("b"), Some(2));
        assert_eq!(vocab.id_of(UNK), Some(3));
        assert_eq!(vocab.unk_id(), 3);
        assert_eq!(vocab.len(), 4);
    }

    #[test]
    fn ids_form_a_dense_range() {
        let corpus = "the quick (brown) fox, the lazy dog.";
        let vocab = build_vocabulary(corpus, &VocabConfig::default());
        let mut ids: Vec<TokenId> = vocab.entries().map(|(_, id)| id).collect();
        ids.sort_unstable();
        let expected: Vec<TokenId> = (0..vocab.len() as TokenId).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn empty_corpus_yields_unk_only() {
        let vocab = Vocabulary::from_tokens(std::iter::empty::<&str>(), UNK);
        assert_eq!(vocab.len(), 1);
        assert_eq!(vocab.unk_id(), 0);
        assert_eq!(vocab.token_of(0), Some(UNK));
    }

    #[test]
    fn natural_unk_occurrence_is_reassigned_last_write_wins() {
        // Sorted order would give "<UNK>" id 0 (before "a" and "b"); the
        // final insert moves it to one past the last assigned id, orphaning
        // id 0 in the reverse mapping.
        let vocab = Vocabulary::from_tokens([UNK, "a", "b"], UNK);
        assert_eq!(vocab.id_of(UNK), Some(3));
        assert_eq!(vocab.unk_id(), 3);
        assert_eq!(vocab.token_of(0), None);
        assert_eq!(vocab.token_of(3), Some(UNK));
        assert_eq!(vocab.len(), 3);
    }

    #[test]
    fn from_parts_rejects_duplicate_ids() {
        let mut map = FxHashMap::default();
        map.insert("a".to_owned(), 0);
        map.insert("b".to_owned(), 0);
        map.insert(UNK.to_owned(), 1);
        let err = Vocabulary::from_parts(map, UNK.to_owned())
            .expect_err("duplicate ids must be rejected");
        assert!(matches!(err, MinitokError::Serialization(_)));
    }

    #[test]
    fn from_parts_rejects_missing_unk() {
        let mut map = FxHashMap::default();
        map.insert("a".to_owned(), 0);
        let err = Vocabulary::from_parts(map, UNK.to_owned())
            .expect_err("missing unknown token must be rejected");
        assert!(matches!(err, MinitokError::Serialization(_)));
    }

    #[test]
    fn build_vocabulary_includes_delimiter_tokens() {
        let vocab = build_vocabulary("a, b.", &VocabConfig::default());
        for token in ["a", "b", ",", ".", " ", ""] {
            assert!(vocab.contains(token), "missing token {token:?}");
        }
        assert!(vocab.contains(UNK));
    }
}
