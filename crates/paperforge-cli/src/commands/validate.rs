//! The `paperforge validate` command.

use std::path::PathBuf;

use anyhow::Result;

use paperforge_core::loader::validate_paper;

use crate::commands::load_papers;

pub fn execute(quiz: PathBuf) -> Result<()> {
    let papers = load_papers(&quiz)?;

    let mut total_warnings = 0;

    for (_, paper) in &papers {
        println!("Paper: {} ({} blocks)", paper.name, paper.blocks.len());

        let warnings = validate_paper(paper);
        for w in &warnings {
            let prefix = w
                .block_id
                .as_ref()
                .map(|id| format!("  [{id}]"))
                .unwrap_or_else(|| "  ".to_string());
            println!("{prefix} WARNING: {}", w.message);
        }
        total_warnings += warnings.len();
    }

    if total_warnings == 0 {
        println!("All quiz papers valid.");
    } else {
        println!("\n{total_warnings} warning(s) found.");
    }

    Ok(())
}
