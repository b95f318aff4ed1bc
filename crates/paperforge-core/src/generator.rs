//! The generator protocol and the closed archetype dispatch.

use tracing::warn;

use paperforge_markup::Node;

use crate::generators::{Cloze, Custom, Fishing, Grammar, Listening, Reading, SentenceChoice};
use crate::model::{PaperStyle, QuizBlock};

/// One rendering pass over one quiz block.
///
/// A generator is built fresh per pass via [`for_block`], already holding
/// its rendered fragments: the constructor parses the block's text into a
/// private tree, replaces blank markers, and numbers questions from the
/// start number it was given. The paper pass and the key pass construct
/// separate instances over the same block; they agree because everything
/// they compute is derived deterministically from the block's content.
pub trait Generator {
    /// The student-facing fragment: blanks numbered, answers hidden.
    fn paper(&self) -> Vec<Node>;

    /// The grader-facing fragment: answers revealed by question number.
    fn key(&self) -> Vec<Node>;

    /// How many question numbers this block consumes. Custom and unknown
    /// blocks consume zero.
    fn question_count(&self) -> usize;
}

/// Builds the generator for a block. The archetype set is closed; adding
/// one means extending [`QuizBlock`], this match, and the validator.
pub fn for_block(block: &QuizBlock, start: usize, style: &PaperStyle) -> Box<dyn Generator> {
    match block {
        QuizBlock::Fishing {
            text,
            distractors,
            marker_set,
            ..
        } => Box::new(Fishing::new(text, distractors, marker_set, start, style)),
        QuizBlock::Cloze {
            id,
            text,
            questions,
        } => Box::new(Cloze::new(id, text, questions, start, style)),
        QuizBlock::Grammar { text, hints, .. } => Box::new(Grammar::new(text, hints, start, style)),
        QuizBlock::SentenceChoice {
            text, distractors, ..
        } => Box::new(SentenceChoice::new(text, distractors, start, style)),
        QuizBlock::Reading {
            id,
            text,
            questions,
        } => Box::new(Reading::new(id, text, questions, start, style)),
        QuizBlock::Listening { id, questions } => {
            Box::new(Listening::new(id, questions, start, style))
        }
        QuizBlock::Custom { paper, key, .. } => Box::new(Custom::new(paper, key)),
        QuizBlock::Unknown => {
            warn!("unrecognized block type; rendering nothing for it");
            Box::new(Empty)
        }
    }
}

/// Generator for unrecognized block types: empty fragments, zero questions.
struct Empty;

impl Generator for Empty {
    fn paper(&self) -> Vec<Node> {
        Vec::new()
    }

    fn key(&self) -> Vec<Node> {
        Vec::new()
    }

    fn question_count(&self) -> usize {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_block_renders_nothing() {
        let gen = for_block(&QuizBlock::Unknown, 1, &PaperStyle::default());
        assert!(gen.paper().is_empty());
        assert!(gen.key().is_empty());
        assert_eq!(gen.question_count(), 0);
    }

    #[test]
    fn factory_counts_come_from_the_block_content() {
        let block = QuizBlock::Fishing {
            id: String::new(),
            text: "<p><code>a</code> and <code>b</code></p>".into(),
            distractors: vec![],
            marker_set: vec![],
        };
        let gen = for_block(&block, 1, &PaperStyle::default());
        assert_eq!(gen.question_count(), 2);
    }
}
