//! Quiz paper loading and authoring validation.
//!
//! Papers are authored as TOML (`[paper]` header plus `[[blocks]]`) or
//! produced by tooling as the equivalent JSON. Validation is a lint pass:
//! it reports authoring mistakes the engine would otherwise degrade around
//! silently, and never blocks rendering.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::LoadError;
use crate::generators::replace_blanks;
use crate::model::{PaperStyle, QuizBlock, QuizPaper};

/// File-level structure of an authored quiz paper.
#[derive(Debug, Deserialize)]
struct QuizFile {
    paper: QuizHeader,
    #[serde(default)]
    blocks: Vec<QuizBlock>,
}

#[derive(Debug, Deserialize)]
struct QuizHeader {
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default = "default_start_number")]
    start_number: usize,
    #[serde(default)]
    style: Option<PaperStyle>,
}

fn default_start_number() -> usize {
    1
}

impl QuizFile {
    fn into_paper(self) -> QuizPaper {
        QuizPaper {
            name: self.paper.name,
            description: self.paper.description,
            start_number: self.paper.start_number,
            style: self.paper.style,
            blocks: self.blocks,
        }
    }
}

/// Parses one quiz file, dispatching on its extension.
pub fn parse_quiz_file(path: &Path) -> Result<QuizPaper, LoadError> {
    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => parse_quiz_toml_str(&content, path),
        Some("json") => parse_quiz_json_str(&content, path),
        _ => Err(LoadError::UnsupportedFormat {
            path: path.to_path_buf(),
        }),
    }
}

/// Parses a TOML quiz paper. The path is only used in error messages.
pub fn parse_quiz_toml_str(content: &str, source_path: &Path) -> Result<QuizPaper, LoadError> {
    let file: QuizFile = toml::from_str(content).map_err(|source| LoadError::Toml {
        path: source_path.to_path_buf(),
        source: Box::new(source),
    })?;
    Ok(file.into_paper())
}

/// Parses a JSON quiz paper. The path is only used in error messages.
pub fn parse_quiz_json_str(content: &str, source_path: &Path) -> Result<QuizPaper, LoadError> {
    let file: QuizFile = serde_json::from_str(content).map_err(|source| LoadError::Json {
        path: source_path.to_path_buf(),
        source,
    })?;
    Ok(file.into_paper())
}

/// Recursively loads every `.toml` and `.json` quiz file under `dir`,
/// sorted by path. Files that fail to parse are skipped with a warning so
/// one bad paper cannot block a batch.
pub fn load_quiz_directory(dir: &Path) -> Result<Vec<(PathBuf, QuizPaper)>, LoadError> {
    if !dir.is_dir() {
        return Err(LoadError::NotADirectory {
            path: dir.to_path_buf(),
        });
    }

    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)
        .map_err(|source| LoadError::Io {
            path: dir.to_path_buf(),
            source,
        })?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .collect();
    entries.sort();

    let mut papers = Vec::new();
    for path in entries {
        if path.is_dir() {
            papers.extend(load_quiz_directory(&path)?);
        } else if matches!(
            path.extension().and_then(|ext| ext.to_str()),
            Some("toml") | Some("json")
        ) {
            match parse_quiz_file(&path) {
                Ok(paper) => papers.push((path, paper)),
                Err(e) => {
                    tracing::warn!("skipping {}: {e}", path.display());
                }
            }
        }
    }

    Ok(papers)
}

/// A warning from quiz paper validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The block ID, when the warning is about one block.
    pub block_id: Option<String>,
    /// Warning message.
    pub message: String,
}

/// The blank contents of a text field, in document order.
fn blank_originals(text: &str) -> Vec<String> {
    let mut tree = paperforge_markup::parse(text);
    replace_blanks(&mut tree, 1, |_, _| Vec::new())
}

/// Checks a paper for common authoring mistakes.
///
/// Every warning here corresponds to something the engine renders
/// anyway, in degraded form. Rendering is never blocked.
pub fn validate_paper(paper: &QuizPaper) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();
    let mut warn = |block_id: &str, message: String| {
        warnings.push(ValidationWarning {
            block_id: (!block_id.is_empty()).then(|| block_id.to_string()),
            message,
        });
    };

    let mut seen_ids = std::collections::HashSet::new();
    for block in &paper.blocks {
        if !block.id().is_empty() && !seen_ids.insert(block.id()) {
            warn(block.id(), format!("duplicate block ID: {}", block.id()));
        }
    }

    for block in &paper.blocks {
        match block {
            QuizBlock::Fishing {
                id,
                text,
                distractors,
                marker_set,
            } => {
                let blanks = blank_originals(text);
                if blanks.is_empty() {
                    warn(id, "text contains no <code> blanks".into());
                }
                let pool = blanks.len() + distractors.len();
                if !marker_set.is_empty() && marker_set.len() < pool {
                    warn(
                        id,
                        format!(
                            "marker_set has {} markers for {pool} options; default letters fill the rest",
                            marker_set.len()
                        ),
                    );
                }
                check_pool_duplicates(&mut warn, id, &blanks, distractors);
            }
            QuizBlock::Cloze {
                id,
                text,
                questions,
            } => {
                let blanks = blank_originals(text);
                if blanks.is_empty() {
                    warn(id, "text contains no <code> blanks".into());
                }
                for blank in &blanks {
                    if !questions.iter().any(|q| &q.original == blank) {
                        warn(id, format!("blank \"{blank}\" has no matching question entry"));
                    }
                }
                for question in questions {
                    if !blanks.contains(&question.original) {
                        warn(
                            id,
                            format!("question \"{}\" matches no blank", question.original),
                        );
                    }
                }
            }
            QuizBlock::Grammar { id, text, .. } => {
                if blank_originals(text).is_empty() {
                    warn(id, "text contains no <code> blanks".into());
                }
            }
            QuizBlock::SentenceChoice {
                id,
                text,
                distractors,
            } => {
                let blanks = blank_originals(text);
                if blanks.is_empty() {
                    warn(id, "text contains no <code> blanks".into());
                }
                check_pool_duplicates(&mut warn, id, &blanks, distractors);
            }
            QuizBlock::Reading { id, questions, .. } => {
                check_choices(&mut warn, id, questions.iter().map(|q| (&q.q, &q.a, q.correct)));
            }
            QuizBlock::Listening { id, questions } => {
                check_choices(&mut warn, id, questions.iter().map(|q| (&q.q, &q.a, q.correct)));
            }
            QuizBlock::Custom { id, paper, key } => {
                if paper.trim().is_empty() {
                    warn(id, "custom block has empty paper markup".into());
                }
                if key.trim().is_empty() {
                    warn(id, "custom block has empty key markup".into());
                }
            }
            QuizBlock::Unknown => {
                warn("", "unrecognized block type will render nothing".into());
            }
        }
    }

    warnings
}

/// Warns once per literal that appears more than once across a shared
/// option pool. Duplicated literals all resolve to one key letter, so the
/// grader cannot tell the copies apart.
fn check_pool_duplicates(
    warn: &mut impl FnMut(&str, String),
    id: &str,
    blanks: &[String],
    distractors: &[String],
) {
    let mut seen = std::collections::HashSet::new();
    let mut reported = std::collections::HashSet::new();
    for option in blanks.iter().chain(distractors) {
        if !seen.insert(option.as_str()) && reported.insert(option.as_str()) {
            warn(
                id,
                format!("option \"{option}\" appears more than once in the pool; all copies share one key letter"),
            );
        }
    }
}

fn check_choices<'a>(
    warn: &mut impl FnMut(&str, String),
    id: &str,
    questions: impl Iterator<Item = (&'a String, &'a Vec<String>, usize)>,
) {
    for (q, a, correct) in questions {
        if a.len() != 4 {
            warn(id, format!("question \"{q}\" has {} options, expected 4", a.len()));
        }
        if correct >= a.len() {
            warn(
                id,
                format!("question \"{q}\" marks option {correct} correct but has {} options", a.len()),
            );
        }
    }
}
