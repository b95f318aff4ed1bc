//! paperforge-core — Deterministic paper and answer-key generation.
//!
//! This crate turns authored quiz blocks into two synchronized documents:
//! a student paper with answers removed and a grading key with answers
//! revealed, numbered continuously across blocks. Generation never fails;
//! malformed content degrades to the closest renderable output.

pub mod assemble;
pub mod error;
pub mod generator;
pub mod generators;
pub mod layout;
pub mod loader;
pub mod model;
pub mod shuffle;

pub use assemble::{assemble, assemble_key, assemble_paper, BlockSummary, Paper};
pub use error::LoadError;
pub use generator::{for_block, Generator};
pub use model::{PaperStyle, QuizBlock, QuizPaper};
