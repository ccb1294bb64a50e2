//! Configuration builders controlling vocabulary construction and corpus assembly.

use serde::{Deserialize, Serialize};

use crate::error::{MinitokError, Result};

/// Default spelling of the unknown token appended to every vocabulary.
pub const DEFAULT_UNK_TOKEN: &str = "<UNK>";

/// Default separator inserted between documents during corpus assembly.
pub const DEFAULT_SEPARATOR: &str = "<EOS>";

/// Configuration for vocabulary construction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VocabConfig {
    /// Spelling of the unknown token appended after sorted id assignment.
    pub unk_token: String,
}

impl VocabConfig {
    /// Returns a builder initialised with [`VocabConfig::default`].
    #[must_use]
    pub fn builder() -> VocabBuilder {
        VocabBuilder::default()
    }

    /// Validates the invariants required for vocabulary construction.
    pub fn validate(&self) -> Result<()> {
        if self.unk_token.is_empty() {
            return Err(MinitokError::InvalidConfig(
                "unk_token must not be empty; the empty string is a legitimate corpus token"
                    .into(),
            ));
        }
        Ok(())
    }
}

impl Default for VocabConfig {
    fn default() -> Self {
        Self {
            unk_token: DEFAULT_UNK_TOKEN.into(),
        }
    }
}

/// Builder for [`VocabConfig`].
#[derive(Debug, Default, Clone)]
pub struct VocabBuilder {
    cfg: VocabConfig,
}

impl VocabBuilder {
    /// Creates a builder with [`VocabConfig::default`] settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the unknown-token spelling.
    #[must_use]
    pub fn unk_token<S: Into<String>>(mut self, token: S) -> Self {
        self.cfg.unk_token = token.into();
        self
    }

    /// Finalises the builder, returning a validated [`VocabConfig`].
    pub fn build(self) -> Result<VocabConfig> {
        self.cfg.validate()?;
        Ok(self.cfg)
    }
}

/// Configuration controlling how text corpora are assembled from disk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CorpusConfig {
    /// Enables recursive directory traversal.
    pub recursive: bool,
    /// Follows symlinks encountered during traversal.
    pub follow_symlinks: bool,
    /// Separator token inserted between documents.
    pub separator: String,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            recursive: true,
            follow_symlinks: false,
            separator: DEFAULT_SEPARATOR.into(),
        }
    }
}

impl CorpusConfig {
    /// Returns a builder initialised with [`CorpusConfig::default`].
    #[must_use]
    pub fn builder() -> CorpusBuilder {
        CorpusBuilder::default()
    }

    /// Validates the invariants required for corpus assembly.
    pub fn validate(&self) -> Result<()> {
        if self.separator.is_empty() {
            return Err(MinitokError::InvalidConfig(
                "separator must not be empty".into(),
            ));
        }
        Ok(())
    }
}

/// Builder for [`CorpusConfig`].
#[derive(Debug, Default, Clone)]
pub struct CorpusBuilder {
    cfg: CorpusConfig,
}

impl CorpusBuilder {
    /// Creates a new builder with [`CorpusConfig::default`] settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables recursive directory traversal.
    #[must_use]
    pub fn recursive(mut self, enabled: bool) -> Self {
        self.cfg.recursive = enabled;
        self
    }

    /// Enables or disables following of symlinks when traversing directories.
    #[must_use]
    pub fn follow_symlinks(mut self, enabled: bool) -> Self {
        self.cfg.follow_symlinks = enabled;
        self
    }

    /// Overrides the document separator token.
    #[must_use]
    pub fn separator<S: Into<String>>(mut self, separator: S) -> Self {
        self.cfg.separator = separator.into();
        self
    }

    /// Finalises the builder, returning a validated [`CorpusConfig`].
    pub fn build(self) -> Result<CorpusConfig> {
        self.cfg.validate()?;
        Ok(self.cfg)
    }
}
