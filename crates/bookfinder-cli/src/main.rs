use std::time::Instant;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use bookfinder_catalog::CatalogClient;
use bookfinder_core::{AppConfig, ExitCode, SearchRequest, SortKey, sort_books};
use bookfinder_tui::app::App;

// ─── CLI Definition ─────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "bookfinder",
    about = "Discover books through the Open Library catalog",
    version,
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Output in JSON format (for scripts).
    /// Also enabled by setting BOOKFINDER_JSON=1.
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Search the catalog.
    Search {
        /// Free-text query.
        query: Option<String>,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        author: Option<String>,
        #[arg(long)]
        subject: Option<String>,
        #[arg(long)]
        isbn: Option<String>,
        #[arg(long)]
        publisher: Option<String>,
        /// Page size (default 20).
        #[arg(long)]
        limit: Option<u32>,
        #[arg(long)]
        offset: Option<u32>,
        /// Ordering: relevance, title, year-desc, year-asc, rating.
        #[arg(long)]
        sort: Option<SortKey>,
    },

    /// Fetch one record by its catalog key, e.g. /works/OL45883W.
    Show { key: String },

    /// Config management.
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the config file location.
    Path,
    /// Show the active configuration.
    Show,
}

// ─── Main ────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let start = Instant::now();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("BOOKFINDER_LOG")
                .unwrap_or_else(|_| EnvFilter::from_default_env()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let json_output = cli.json || std::env::var("BOOKFINDER_JSON").as_deref() == Ok("1");

    let config = AppConfig::load()?;

    match cli.command {
        None => {
            let runtime = tokio::runtime::Runtime::new()?;
            let _guard = runtime.enter();
            let mut app = App::new(config);
            bookfinder_tui::run_tui(&mut app)?;
        }

        Some(Commands::Search {
            query,
            title,
            author,
            subject,
            isbn,
            publisher,
            limit,
            offset,
            sort,
        }) => {
            let request = SearchRequest {
                query,
                title,
                author,
                subject,
                isbn,
                publisher,
                limit,
                offset,
            };
            if !request.has_criteria() {
                eprintln!(
                    "Provide a query or at least one of --title, --author, --subject, --isbn, --publisher."
                );
                std::process::exit(ExitCode::InvalidArgs as i32);
            }

            let sort = sort.unwrap_or_else(|| config.ui.default_sort.parse().unwrap_or_default());

            let runtime = tokio::runtime::Runtime::new()?;
            let client = CatalogClient::from_config(&config.catalog);
            let response = match runtime.block_on(client.search(&request)) {
                Ok(response) => response,
                Err(e) => {
                    tracing::error!(error = %e, "search failed");
                    eprintln!("Failed to search books. Please try again.");
                    std::process::exit(ExitCode::NetworkError as i32);
                }
            };

            let books = sort_books(&response.docs, sort);
            let dur = start.elapsed().as_millis();

            if json_output {
                print_json(&serde_json::json!({
                    "status": "ok",
                    "data": { "items": books, "total": response.num_found },
                    "meta": { "duration_ms": dur }
                }))?;
            } else if books.is_empty() {
                println!("No books found. Try adjusting your search terms.");
            } else {
                println!("Found {} of {} results:", books.len(), response.num_found);
                for book in &books {
                    let rating = book
                        .rating_display()
                        .map(|r| format!("* {r}"))
                        .unwrap_or_default();
                    println!(
                        "  {title:<44.44}  {authors:<28.28}  {year:>4}  {rating}",
                        title = book.title,
                        authors = book.author_line(),
                        year = book.year_display(),
                    );
                }
            }
        }

        Some(Commands::Show { key }) => {
            let runtime = tokio::runtime::Runtime::new()?;
            let client = CatalogClient::from_config(&config.catalog);
            match runtime.block_on(client.fetch_by_key(&key)) {
                Ok(book) => {
                    let dur = start.elapsed().as_millis();
                    if json_output {
                        print_json(&serde_json::json!({
                            "status": "ok",
                            "data": book,
                            "meta": { "duration_ms": dur }
                        }))?;
                    } else {
                        println!("{}", serde_json::to_string_pretty(&book)?);
                    }
                }
                Err(e) => {
                    tracing::error!(error = %e, "detail fetch failed");
                    eprintln!("Failed to fetch book: {key}");
                    std::process::exit(ExitCode::NetworkError as i32);
                }
            }
        }

        Some(Commands::Config { action }) => match action {
            ConfigAction::Path => println!("{}", AppConfig::config_path().display()),
            ConfigAction::Show => println!("{}", toml::to_string_pretty(&config)?),
        },
    }

    Ok(())
}

fn print_json(value: &serde_json::Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
