//! Facilities for discovering input files and assembling text corpora.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::CorpusConfig;
use crate::error::{MinitokError, Result};

/// Discovers files rooted at the provided input paths according to the corpus configuration.
///
/// Directories are traversed recursively by default; set [`CorpusConfig::recursive`] to `false`
/// to limit discovery to the first level. Symlink traversal is controlled through
/// [`CorpusConfig::follow_symlinks`]. Files found under each root are sorted by path so the
/// assembled corpus, and therefore the resulting vocabulary, is deterministic.
pub fn collect_paths<P: AsRef<Path>>(inputs: &[P], cfg: &CorpusConfig) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for input in inputs {
        let path = input.as_ref();
        if !path.exists() {
            return Err(MinitokError::InvalidConfig(format!(
                "input path {path:?} does not exist"
            )));
        }
        let metadata = path
            .symlink_metadata()
            .map_err(|err| MinitokError::io(err, Some(path.to_path_buf())))?;
        if metadata.is_dir() {
            let mut discovered = Vec::new();
            if cfg.recursive {
                let walker = WalkDir::new(path).follow_links(cfg.follow_symlinks);
                for entry in walker {
                    let entry = entry.map_err(|err| {
                        MinitokError::InvalidConfig(format!("traversal failed: {err}"))
                    })?;
                    if entry.file_type().is_file() {
                        discovered.push(entry.path().to_path_buf());
                    }
                }
            } else {
                for entry in fs::read_dir(path)
                    .map_err(|err| MinitokError::io(err, Some(path.to_path_buf())))?
                {
                    let entry =
                        entry.map_err(|err| MinitokError::io(err, Some(path.to_path_buf())))?;
                    let entry_path = entry.path();
                    if entry_path.is_file() {
                        discovered.push(entry_path);
                    }
                }
            }
            discovered.sort();
            files.extend(discovered);
        } else if metadata.is_file() {
            files.push(path.to_path_buf());
        }
    }
    if files.is_empty() {
        return Err(MinitokError::InvalidConfig(
            "no files discovered in provided inputs".into(),
        ));
    }
    Ok(files)
}

/// Assembles a single corpus string from the discovered input files.
///
/// Files are read as UTF-8 in discovery order and joined with the configured
/// separator token, so document boundaries survive splitting as ordinary
/// tokens.
pub fn load_text_corpus<P: AsRef<Path>>(inputs: &[P], cfg: &CorpusConfig) -> Result<String> {
    let file_paths = collect_paths(inputs, cfg)?;
    let mut documents = Vec::with_capacity(file_paths.len());
    for file_path in file_paths {
        let text = fs::read_to_string(&file_path)
            .map_err(|err| MinitokError::io(err, Some(file_path.clone())))?;
        documents.push(text);
    }
    Ok(documents.join(&cfg.separator))
}
