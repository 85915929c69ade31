use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use htmlref::catalog::{self, CodeSample};
use htmlref::filter::{CategoryFilter, filter_entries};
use htmlref::output;

#[derive(Parser)]
#[command(name = "htmlref")]
#[command(about = "Terminal reference guide for HTML elements")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Initial search text (when no subcommand is given)
    #[arg(trailing_var_arg = true)]
    search: Vec<String>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the element catalog
    List {
        /// Only entries in this category
        #[arg(short, long)]
        category: Option<String>,

        /// Emit JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },
    /// Print the entries matching a search text
    Search {
        /// Text matched against tag and description, case-insensitively
        text: String,

        /// Only entries in this category
        #[arg(short, long)]
        category: Option<String>,

        /// Emit JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },
    /// Print category labels with entry counts
    Categories {
        /// Emit JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },
    /// Print a code sample verbatim
    Sample {
        /// Sample name (basic, css)
        name: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let color = !cli.no_color;

    match cli.command {
        Some(Commands::List { category, json }) => {
            print_filtered("", category, json, color)?;
        }
        Some(Commands::Search {
            text,
            category,
            json,
        }) => {
            print_filtered(&text, category, json, color)?;
        }
        Some(Commands::Categories { json }) => {
            if json {
                let labels: Vec<_> = catalog::categories()
                    .iter()
                    .map(|label| {
                        let count = catalog::entries()
                            .iter()
                            .filter(|e| e.category == *label)
                            .count();
                        serde_json::json!({ "category": label, "count": count })
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&labels)?);
            } else {
                output::print_categories(color)?;
            }
        }
        Some(Commands::Sample { name }) => match CodeSample::find(&name) {
            Some(sample) => output::print_sample(sample)?,
            None => {
                let names: Vec<_> = catalog::samples().iter().map(|s| s.name).collect();
                bail!("unknown sample '{}' (available: {})", name, names.join(", "));
            }
        },
        None => {
            let initial = if cli.search.is_empty() {
                None
            } else {
                Some(cli.search.join(" "))
            };

            #[cfg(feature = "interactive")]
            htmlref::tui::run(initial)?;

            #[cfg(not(feature = "interactive"))]
            print_filtered(initial.as_deref().unwrap_or(""), None, false, color)?;
        }
    }

    Ok(())
}

fn print_filtered(text: &str, category: Option<String>, json: bool, color: bool) -> Result<()> {
    let filter = CategoryFilter::from_option(category);
    let hits = filter_entries(catalog::entries(), text, &filter);

    if json {
        println!("{}", serde_json::to_string_pretty(&hits)?);
    } else {
        output::print_entries(&hits, color)?;
    }

    Ok(())
}
