use anyhow::Result;
use cogito_types::Thought;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;

use crate::args::OutputFormat;

/// Print the current display window followed by a summary line.
pub fn render_list(
    visible: &[&Thought],
    filtered_len: usize,
    collection_len: usize,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(visible)?);
        }
        OutputFormat::Plain => {
            let colored = std::io::stdout().is_terminal();
            for thought in visible {
                print_thought(thought, colored);
                println!();
            }
            let summary = if filtered_len == collection_len {
                format!("showing {} of {} thoughts", visible.len(), filtered_len)
            } else {
                format!(
                    "showing {} of {} thoughts (filtered from {} total)",
                    visible.len(),
                    filtered_len,
                    collection_len
                )
            };
            if colored {
                println!("{}", summary.dimmed());
            } else {
                println!("{}", summary);
            }
        }
    }
    Ok(())
}

/// Print one thought on its own.
pub fn render_thought(thought: &Thought, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(thought)?);
        }
        OutputFormat::Plain => {
            print_thought(thought, std::io::stdout().is_terminal());
        }
    }
    Ok(())
}

pub fn render_categories(categories: &[String], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(categories)?);
        }
        OutputFormat::Plain => {
            for category in categories {
                println!("{}", category);
            }
        }
    }
    Ok(())
}

fn print_thought(thought: &Thought, colored: bool) {
    if colored {
        println!("\"{}\"", thought.text.bold());
        println!(
            "    — {}  [{}]",
            thought.author.cyan(),
            thought.category.dimmed()
        );
    } else {
        println!("\"{}\"", thought.text);
        println!("    — {}  [{}]", thought.author, thought.category);
    }
}
