//! The `paperforge init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    // Create paperforge.toml
    if std::path::Path::new("paperforge.toml").exists() {
        println!("paperforge.toml already exists, skipping.");
    } else {
        std::fs::write("paperforge.toml", SAMPLE_CONFIG)?;
        println!("Created paperforge.toml");
    }

    // Create example quiz paper
    std::fs::create_dir_all("quiz-sets")?;
    let example_path = std::path::Path::new("quiz-sets/example.toml");
    if example_path.exists() {
        println!("quiz-sets/example.toml already exists, skipping.");
    } else {
        std::fs::write(example_path, EXAMPLE_QUIZ)?;
        println!("Created quiz-sets/example.toml");
    }

    println!("\nNext steps:");
    println!("  1. Edit quiz-sets/example.toml with your own questions");
    println!("  2. Run: paperforge validate --quiz quiz-sets/example.toml");
    println!("  3. Run: paperforge render --quiz quiz-sets/example.toml");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# paperforge configuration

[render]
output_dir = "./rendered"

# Fallback layout for papers without a [paper.style] of their own.
# key_columns = 0 lists key entries one per line.
[style]
options_per_row = 4
key_columns = 5
"#;

const EXAMPLE_QUIZ: &str = r#"[paper]
name = "Example Paper"
description = "A small example covering the common question types"
start_number = 1

[[blocks]]
type = "fishing"
id = "vocabulary"
text = "<p>I <code>love</code> cats and <code>fear</code> dogs.</p>"
distractors = ["hate", "like"]

[[blocks]]
type = "cloze"
id = "fill-in"
text = "<p>She <code>runs</code> to school every day.</p>"

[[blocks.questions]]
original = "runs"
distractors = ["ran", "running", "run"]

[[blocks]]
type = "grammar"
id = "transform"
text = "<p>He <code>goes</code> home late.</p>"

[blocks.hints]
goes = "go"

[[blocks]]
type = "reading"
id = "comprehension"
text = "<p>The fox slept under the oak tree all afternoon.</p>"

[[blocks.questions]]
q = "Where did the fox sleep?"
a = ["In a den", "Under a tree", "By the river", "On a rock"]
correct = 1
"#;
