//! Core data model types for paperforge.
//!
//! A quiz paper is an ordered list of typed question blocks. Blocks are
//! immutable input, authored upstream; the engine only reads them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One authored exam paper: metadata plus an ordered list of blocks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizPaper {
    /// Human-readable paper title.
    pub name: String,
    /// Description shown in listings, not on the paper itself.
    #[serde(default)]
    pub description: String,
    /// Number given to the first question.
    #[serde(default = "default_start_number")]
    pub start_number: usize,
    /// Layout overrides for this paper.
    #[serde(default)]
    pub style: Option<PaperStyle>,
    /// The question blocks, in paper order.
    #[serde(default)]
    pub blocks: Vec<QuizBlock>,
}

fn default_start_number() -> usize {
    1
}

/// Layout knobs that affect rendering but never numbering or answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaperStyle {
    /// Columns in a shared option table.
    #[serde(default = "default_options_per_row")]
    pub options_per_row: usize,
    /// Columns in the answer-key table. Zero means one entry per row.
    #[serde(default = "default_key_columns")]
    pub key_columns: usize,
}

fn default_options_per_row() -> usize {
    4
}

fn default_key_columns() -> usize {
    5
}

impl Default for PaperStyle {
    fn default() -> Self {
        Self {
            options_per_row: default_options_per_row(),
            key_columns: default_key_columns(),
        }
    }
}

/// One self-contained unit of question content for a single archetype.
///
/// In `text` fields, every `<code>` element marks exactly one blank and its
/// text content is that blank's correct answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum QuizBlock {
    /// Word bank: all blanks share one shuffled option pool.
    Fishing {
        #[serde(default)]
        id: String,
        text: String,
        #[serde(default)]
        distractors: Vec<String>,
        /// Optional custom option markers used before falling back to A, B, C…
        #[serde(default)]
        marker_set: Vec<String>,
    },
    /// Each blank gets its own short multiple-choice row.
    Cloze {
        #[serde(default)]
        id: String,
        text: String,
        #[serde(default)]
        questions: Vec<ClozeQuestion>,
    },
    /// Open-ended transformation: blanks render as write-in slots.
    Grammar {
        #[serde(default)]
        id: String,
        text: String,
        /// Hint per blank, looked up by the blank's exact original content.
        /// An explicit null means no hint.
        #[serde(default)]
        hints: BTreeMap<String, Option<String>>,
    },
    /// Like Fishing, but whole sentences, one option per row.
    SentenceChoice {
        #[serde(default)]
        id: String,
        text: String,
        #[serde(default)]
        distractors: Vec<String>,
    },
    /// Passage followed by fixed multiple-choice questions.
    Reading {
        #[serde(default)]
        id: String,
        text: String,
        #[serde(default)]
        questions: Vec<ChoiceQuestion>,
    },
    /// Fixed multiple-choice questions with read-aloud transcripts.
    Listening {
        #[serde(default)]
        id: String,
        #[serde(default)]
        questions: Vec<ListeningQuestion>,
    },
    /// Raw passthrough markup. Consumes no question numbers.
    Custom {
        #[serde(default)]
        id: String,
        #[serde(default)]
        paper: String,
        #[serde(default)]
        key: String,
    },
    /// Unrecognized block type. Loads without error, renders nothing.
    #[serde(other)]
    Unknown,
}

/// One cloze blank's options, matched to its blank by `original`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClozeQuestion {
    /// Exact original content of the blank this entry belongs to.
    pub original: String,
    #[serde(default)]
    pub distractors: Vec<String>,
}

/// One fixed multiple-choice question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChoiceQuestion {
    /// Question text.
    pub q: String,
    /// The options, in authored order.
    #[serde(default)]
    pub a: Vec<String>,
    /// Zero-based index into `a`.
    pub correct: usize,
}

/// A multiple-choice question plus the transcript read aloud for it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListeningQuestion {
    #[serde(default)]
    pub transcript: String,
    pub q: String,
    #[serde(default)]
    pub a: Vec<String>,
    pub correct: usize,
}

impl QuizBlock {
    /// The author-assigned block id, empty when absent.
    pub fn id(&self) -> &str {
        match self {
            QuizBlock::Fishing { id, .. }
            | QuizBlock::Cloze { id, .. }
            | QuizBlock::Grammar { id, .. }
            | QuizBlock::SentenceChoice { id, .. }
            | QuizBlock::Reading { id, .. }
            | QuizBlock::Listening { id, .. }
            | QuizBlock::Custom { id, .. } => id,
            QuizBlock::Unknown => "",
        }
    }

    /// The archetype name as it appears in quiz files.
    pub fn kind(&self) -> &'static str {
        match self {
            QuizBlock::Fishing { .. } => "fishing",
            QuizBlock::Cloze { .. } => "cloze",
            QuizBlock::Grammar { .. } => "grammar",
            QuizBlock::SentenceChoice { .. } => "sentence_choice",
            QuizBlock::Reading { .. } => "reading",
            QuizBlock::Listening { .. } => "listening",
            QuizBlock::Custom { .. } => "custom",
            QuizBlock::Unknown => "unknown",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paper_defaults_apply() {
        let paper: QuizPaper = toml::from_str(r#"name = "Midterm""#).unwrap();
        assert_eq!(paper.name, "Midterm");
        assert_eq!(paper.start_number, 1);
        assert!(paper.style.is_none());
        assert!(paper.blocks.is_empty());
    }

    #[test]
    fn style_defaults() {
        let style = PaperStyle::default();
        assert_eq!(style.options_per_row, 4);
        assert_eq!(style.key_columns, 5);
    }

    #[test]
    fn fishing_block_from_toml() {
        let toml_str = r#"
name = "Unit 1"

[[blocks]]
type = "fishing"
id = "vocab"
text = "<p>I <code>love</code> cats.</p>"
distractors = ["hate"]
"#;
        let paper: QuizPaper = toml::from_str(toml_str).unwrap();
        assert_eq!(paper.blocks.len(), 1);
        match &paper.blocks[0] {
            QuizBlock::Fishing {
                id,
                distractors,
                marker_set,
                ..
            } => {
                assert_eq!(id, "vocab");
                assert_eq!(distractors, &["hate".to_string()]);
                assert!(marker_set.is_empty());
            }
            other => panic!("wrong variant: {other:?}"),
        }
    }

    #[test]
    fn grammar_hints_allow_null() {
        let json = r#"{
            "type": "grammar",
            "id": "g1",
            "text": "<p><code>is meant</code></p>",
            "hints": {"is meant": "mean", "other": null}
        }"#;
        let block: QuizBlock = serde_json::from_str(json).unwrap();
        match block {
            QuizBlock::Grammar { hints, .. } => {
                assert_eq!(hints["is meant"], Some("mean".to_string()));
                assert_eq!(hints["other"], None);
            }
            other => panic!("wrong variant: {other:?}"),
        }
    }

    #[test]
    fn sentence_choice_uses_snake_case_tag() {
        let block: QuizBlock =
            serde_json::from_str(r#"{"type": "sentence_choice", "text": ""}"#).unwrap();
        assert_eq!(block.kind(), "sentence_choice");
    }

    #[test]
    fn unrecognized_type_becomes_unknown() {
        let block: QuizBlock =
            serde_json::from_str(r#"{"type": "essay", "text": "whatever"}"#).unwrap();
        assert!(matches!(block, QuizBlock::Unknown));
        assert_eq!(block.kind(), "unknown");
        assert_eq!(block.id(), "");
    }

    #[test]
    fn listening_question_shape() {
        let json = r#"{
            "type": "listening",
            "questions": [
                {"transcript": "W: hi", "q": "Who speaks?", "a": ["A man", "A woman", "A child", "Nobody"], "correct": 1}
            ]
        }"#;
        let block: QuizBlock = serde_json::from_str(json).unwrap();
        match block {
            QuizBlock::Listening { questions, .. } => {
                assert_eq!(questions[0].correct, 1);
                assert_eq!(questions[0].a.len(), 4);
            }
            other => panic!("wrong variant: {other:?}"),
        }
    }
}
