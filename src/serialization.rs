//! Helpers for (de)serialising vocabularies as JSON.
//!
//! The on-disk form is a flat object holding the exact string→id mapping plus
//! the unknown-token spelling, so a reloaded vocabulary reproduces every id —
//! including the unknown token's final id from the last-write-wins append.

use std::fs;
use std::path::Path;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::{MinitokError, Result};
use crate::vocab::{TokenId, Vocabulary};

#[derive(Serialize, Deserialize)]
struct VocabularyFile {
    unk_token: String,
    token_to_id: FxHashMap<String, TokenId>,
}

impl VocabularyFile {
    fn from_vocabulary(vocab: &Vocabulary) -> Self {
        Self {
            unk_token: vocab.unk_token().to_owned(),
            token_to_id: vocab
                .entries()
                .map(|(token, id)| (token.to_owned(), id))
                .collect(),
        }
    }
}

/// Serialises a vocabulary to a JSON string.
pub fn vocabulary_json(vocab: &Vocabulary, pretty: bool) -> Result<String> {
    let file = VocabularyFile::from_vocabulary(vocab);
    let json = if pretty {
        serde_json::to_string_pretty(&file)?
    } else {
        serde_json::to_string(&file)?
    };
    Ok(json)
}

/// Writes a vocabulary to `path` in JSON format.
pub fn save_vocabulary<P: AsRef<Path>>(vocab: &Vocabulary, path: P, pretty: bool) -> Result<()> {
    let path = path.as_ref();
    let json = vocabulary_json(vocab, pretty)?;
    fs::write(path, json).map_err(|err| MinitokError::io(err, Some(path.to_path_buf())))
}

/// Loads a vocabulary previously written by [`save_vocabulary`].
///
/// The mapping is validated on the way in: ids must be unique and the
/// recorded unknown token must be present.
pub fn load_vocabulary<P: AsRef<Path>>(path: P) -> Result<Vocabulary> {
    let path = path.as_ref();
    let data =
        fs::read_to_string(path).map_err(|err| MinitokError::io(err, Some(path.to_path_buf())))?;
    let file: VocabularyFile = serde_json::from_str(&data)?;
    Vocabulary::from_parts(file.token_to_id, file.unk_token)
}
