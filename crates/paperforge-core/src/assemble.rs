//! Folds the running question number across a block list and concatenates
//! the per-block fragments.
//!
//! The paper pass and the key pass never share state. They stay in
//! lock-step because both iterate the same blocks in the same order and
//! every generator recomputes the same question count from the same
//! content.

use serde::{Deserialize, Serialize};

use paperforge_markup::Node;

use crate::generator::{for_block, Generator};
use crate::model::{PaperStyle, QuizBlock};

/// Per-block bookkeeping produced during assembly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockSummary {
    pub id: String,
    pub kind: String,
    /// Number of the block's first question. Blocks with no questions
    /// report the number the next block starts at.
    pub first_number: usize,
    pub question_count: usize,
}

/// Both renderings of one paper plus its per-block summaries.
#[derive(Debug, Clone)]
pub struct Paper {
    pub paper: Vec<Node>,
    pub key: Vec<Node>,
    pub summaries: Vec<BlockSummary>,
    pub question_count: usize,
}

fn fold_blocks(
    blocks: &[QuizBlock],
    start: usize,
    style: &PaperStyle,
    mut render: impl FnMut(&dyn Generator) -> Vec<Node>,
) -> (Vec<Node>, Vec<BlockSummary>) {
    let mut next = start;
    let mut nodes = Vec::new();
    let mut summaries = Vec::with_capacity(blocks.len());
    for block in blocks {
        let generator = for_block(block, next, style);
        let count = generator.question_count();
        nodes.extend(render(generator.as_ref()));
        summaries.push(BlockSummary {
            id: block.id().to_string(),
            kind: block.kind().to_string(),
            first_number: next,
            question_count: count,
        });
        next += count;
    }
    (nodes, summaries)
}

/// The student paper for `blocks`, numbered from `start`.
pub fn assemble_paper(blocks: &[QuizBlock], start: usize, style: &PaperStyle) -> Vec<Node> {
    fold_blocks(blocks, start, style, |generator| generator.paper()).0
}

/// The grading key for `blocks`, numbered from `start`.
pub fn assemble_key(blocks: &[QuizBlock], start: usize, style: &PaperStyle) -> Vec<Node> {
    fold_blocks(blocks, start, style, |generator| generator.key()).0
}

/// Runs both passes and returns the fragments with their summaries.
pub fn assemble(blocks: &[QuizBlock], start: usize, style: &PaperStyle) -> Paper {
    let (paper, summaries) = fold_blocks(blocks, start, style, |generator| generator.paper());
    let (key, _) = fold_blocks(blocks, start, style, |generator| generator.key());
    let question_count = summaries.iter().map(|s| s.question_count).sum();
    Paper {
        paper,
        key,
        summaries,
        question_count,
    }
}
