//! CLI subcommands, one module per command.

pub mod init;
pub mod list;
pub mod render;
pub mod validate;

use std::path::{Path, PathBuf};

use anyhow::Result;

use paperforge_core::QuizPaper;

/// Loads one quiz file, or every quiz file under a directory.
pub(crate) fn load_papers(path: &Path) -> Result<Vec<(PathBuf, QuizPaper)>> {
    if path.is_dir() {
        Ok(paperforge_core::loader::load_quiz_directory(path)?)
    } else {
        let paper = paperforge_core::loader::parse_quiz_file(path)?;
        Ok(vec![(path.to_path_buf(), paper)])
    }
}
