//! Minimal word-level tokenizer library and CLI.
//!
//! The crate exposes both a library API and a `minitok` command line interface
//! for deriving fixed vocabularies from text corpora and converting text
//! to/from integer token sequences.  Splitting is a capturing partition on
//! punctuation, double hyphens, and whitespace runs; ids are assigned in
//! sorted token order with a reserved unknown token appended last.  Typical
//! usage assembles a corpus, builds a [`Vocabulary`], and wraps it in a
//! [`MiniTokenizer`]:
//!
//! ```
//! use minitok::{build_vocabulary, MiniTokenizer, VocabConfig};
//!
//! # fn main() -> minitok::Result<()> {
//! let config = VocabConfig::default();
//! let vocab = build_vocabulary("the cat sat, the dog didn't.", &config);
//! let codec = MiniTokenizer::new(vocab);
//! let ids = codec.encode("the cat sat.");
//! assert_eq!(codec.decode(&ids)?, "the cat sat.");
//! # Ok(())
//! # }
//! ```
//!
//! The CLI is enabled by default through the `cli` feature.  Users targeting
//! the library portion only can disable default features to avoid the CLI
//! dependencies: `minitok = { version = "...", default-features = false }`.

#![forbid(unsafe_code)]
#![warn(
    missing_docs,
    clippy::all,
    rust_2018_idioms,
    future_incompatible,
    unused_lifetimes,
    unreachable_pub
)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]

pub mod codec;
pub mod config;
pub mod corpus;
pub mod error;
pub mod serialization;
pub mod splitter;
pub mod vocab;

pub use codec::MiniTokenizer;
pub use config::{CorpusConfig, VocabConfig, DEFAULT_SEPARATOR, DEFAULT_UNK_TOKEN};
pub use error::{MinitokError, Result};
pub use splitter::split;
pub use vocab::{build_vocabulary, TokenId, Vocabulary};
