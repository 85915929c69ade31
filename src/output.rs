//! Output formatting for the non-interactive CLI commands.

use crate::catalog::{self, CodeSample, ElementEntry};
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

fn stdout(color: bool) -> StandardStream {
    let choice = if color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    StandardStream::stdout(choice)
}

/// Print entries as cards: tag and category first, then description,
/// example and attribute list when present.
pub fn print_entries(entries: &[&ElementEntry], color: bool) -> io::Result<()> {
    let mut stdout = stdout(color);

    for (i, entry) in entries.iter().enumerate() {
        if i > 0 {
            // Blank line between cards
            writeln!(stdout)?;
        }

        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)).set_bold(true))?;
        write!(stdout, "{}", entry.tag)?;
        stdout.reset()?;

        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)))?;
        writeln!(stdout, "  [{}]", entry.category)?;
        stdout.reset()?;

        writeln!(stdout, "  {}", entry.description)?;

        if let Some(example) = entry.example {
            write!(stdout, "  Example: ")?;
            stdout.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)))?;
            writeln!(stdout, "{}", example)?;
            stdout.reset()?;
        }

        if !entry.attributes.is_empty() {
            write!(stdout, "  Attributes: ")?;
            stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
            writeln!(stdout, "{}", entry.attributes.join(", "))?;
            stdout.reset()?;
        }
    }

    Ok(())
}

/// Print category labels with entry counts, in first-occurrence order.
pub fn print_categories(color: bool) -> io::Result<()> {
    let mut stdout = stdout(color);

    for label in catalog::categories() {
        let count = catalog::entries()
            .iter()
            .filter(|e| e.category == *label)
            .count();

        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)))?;
        write!(stdout, "{}", label)?;
        stdout.reset()?;
        write!(stdout, ":")?;
        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        writeln!(stdout, "{}", count)?;
        stdout.reset()?;
    }

    Ok(())
}

/// Print one code sample verbatim, no decoration.
pub fn print_sample(sample: &CodeSample) -> io::Result<()> {
    let mut stdout = io::stdout();
    writeln!(stdout, "{}", sample.content)?;
    Ok(())
}
