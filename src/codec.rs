//! The encode/decode codec wrapping a built vocabulary.

use crate::error::{MinitokError, Result};
use crate::splitter::split;
use crate::vocab::{TokenId, Vocabulary};

/// Codec converting text to and from token id sequences against one
/// immutable [`Vocabulary`].
///
/// Encoding and decoding are pure reads over the mapping, so a constructed
/// `MiniTokenizer` can be shared freely across threads.
#[must_use]
#[derive(Debug, Clone)]
pub struct MiniTokenizer {
    vocab: Vocabulary,
}

impl MiniTokenizer {
    /// Wraps a vocabulary in a codec.
    pub fn new(vocab: Vocabulary) -> Self {
        Self { vocab }
    }

    /// Provides immutable access to the underlying vocabulary.
    #[must_use]
    pub fn vocab(&self) -> &Vocabulary {
        &self.vocab
    }

    /// Encodes `text` into token ids.
    ///
    /// Tokens absent from the vocabulary map to the unknown-token id; no
    /// span is ever dropped, so the output length always equals the number
    /// of tokens the splitter produces for `text`.
    #[must_use]
    pub fn encode(&self, text: &str) -> Vec<TokenId> {
        let unk_id = self.vocab.unk_id();
        split(text)
            .into_iter()
            .map(|token| self.vocab.id_of(token).unwrap_or(unk_id))
            .collect()
    }

    /// Decodes `ids` back into text by straight concatenation of the mapped
    /// tokens, with no separators reinserted.
    ///
    /// Fails with [`MinitokError::UnknownId`] on the first id that has no
    /// vocabulary entry; unknown ids are never replaced with a placeholder.
    pub fn decode(&self, ids: &[TokenId]) -> Result<String> {
        let mut text = String::new();
        for &id in ids {
            let token = self.vocab.token_of(id).ok_or(MinitokError::UnknownId {
                id,
                vocab_size: self.vocab.len(),
            })?;
            text.push_str(token);
        }
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::VocabConfig;
    use crate::vocab::build_vocabulary;

    fn codec_for(corpus: &str) -> MiniTokenizer {
        MiniTokenizer::new(build_vocabulary(corpus, &VocabConfig::default()))
    }

    #[test]
    fn encode_maps_known_tokens_to_their_ids() {
        let vocab = Vocabulary::from_tokens(["a", "b", ","], "<UNK>");
        let codec = MiniTokenizer::new(vocab);
        // Sorted assignment: "," -> 0, "a" -> 1, "b" -> 2, "<UNK>" -> 3.
        assert_eq!(codec.decode(&[0, 1, 2]).expect("ids are in range"), ",ab");
    }

    #[test]
    fn encode_substitutes_unk_for_out_of_vocab_tokens() {
        let codec = codec_for("a, b.");
        let vocab = codec.vocab();
        let ids = codec.encode("a, z");
        let expected = vec![
            vocab.id_of("a").unwrap(),
            vocab.id_of(",").unwrap(),
            vocab.id_of("").unwrap(),
            vocab.id_of(" ").unwrap(),
            vocab.unk_id(),
        ];
        assert_eq!(ids, expected);
    }

    #[test]
    fn encode_never_drops_spans() {
        let codec = codec_for("a, b.");
        let text = "zed!! unseen--tokens";
        assert_eq!(codec.encode(text).len(), split(text).len());
    }

    #[test]
    fn decode_rejects_out_of_range_ids() {
        let vocab = Vocabulary::from_tokens(["a", "b", ","], "<UNK>");
        let codec = MiniTokenizer::new(vocab);
        let err = codec.decode(&[99]).expect_err("id 99 is out of range");
        assert!(matches!(
            err,
            MinitokError::UnknownId { id: 99, vocab_size: 4 }
        ));
    }

    #[test]
    fn decode_fails_fast_without_partial_output() {
        let codec = codec_for("a b");
        let mut ids = codec.encode("a b");
        ids.push(codec.vocab().len() as TokenId + 7);
        assert!(codec.decode(&ids).is_err());
    }

    #[test]
    fn round_trips_in_vocabulary_text() {
        let corpus = "The cat sat -- then (quietly) left; \"done\", it said.";
        let codec = codec_for(corpus);
        for text in [corpus, "The cat said.", "(quietly) -- left", ""] {
            // Every token of `text` also occurs in the corpus split.
            let ids = codec.encode(text);
            assert_eq!(codec.decode(&ids).expect("all ids known"), text);
        }
    }

    #[test]
    fn unknown_tokens_collapse_and_decode_as_unk_literal() {
        let codec = codec_for("a b");
        let ids = codec.encode("a z");
        let decoded = codec.decode(&ids).expect("unk id is a real entry");
        assert_eq!(decoded, "a <UNK>");
    }
}
