use std::io::stdout;
use std::path::PathBuf;

use clap::Parser;
use color_eyre::Result;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event;

use payguide::app::App;
use payguide::catalog::{Catalog, SectionTab};
use payguide::config::{Config, load_config};
use payguide::error::GuideError;
use payguide::glossary::{annotate, to_markup};

/// Terminal reference guide for payment platform products
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Catalog JSON file to use instead of the built-in one
    #[arg(long, value_name = "PATH")]
    catalog: Option<PathBuf>,

    /// Product to open first (e.g. "billing")
    #[arg(long, value_name = "KEY")]
    product: Option<String>,

    /// Section to open first
    #[arg(long, value_enum)]
    tab: Option<SectionTab>,

    /// Print every glossary term and exit
    #[arg(long, conflicts_with_all = ["term", "annotate", "check"])]
    list_terms: bool,

    /// Print one glossary entry and exit
    #[arg(long, value_name = "KEY", conflicts_with_all = ["annotate", "check"])]
    term: Option<String>,

    /// Print TEXT with glossary terms marked as [Term] and exit
    #[arg(long, value_name = "TEXT", conflicts_with = "check")]
    annotate: Option<String>,

    /// Validate the catalog, print a summary and exit
    #[arg(long)]
    check: bool,
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    // Debug builds log to a file; stderr belongs to the terminal UI
    #[cfg(debug_assertions)]
    init_debug_log();

    let args = Args::parse();

    let config_result = load_config();
    if let Some(warning) = &config_result.warning {
        eprintln!("payguide: {}", warning);
    }
    let config = apply_args(config_result.config, &args);

    let catalog = match &config.guide.catalog {
        Some(path) => Catalog::from_path(path)?,
        None => Catalog::builtin()?,
    };

    if args.list_terms {
        for entry in catalog.glossary.iter() {
            println!("{:<22} {}", entry.key.as_str(), entry.title);
        }
        return Ok(());
    }

    if let Some(key) = &args.term {
        let entry = catalog
            .glossary
            .get(key)
            .ok_or_else(|| GuideError::UnknownTerm(key.clone()))?;
        println!("{}", entry.title);
        println!();
        println!("{}", entry.definition);
        println!();
        println!("Context: {}", entry.context);
        println!();
        println!("Why This Matters: {}", entry.importance);
        return Ok(());
    }

    if let Some(text) = &args.annotate {
        println!("{}", to_markup(&annotate(text, &catalog.glossary)));
        return Ok(());
    }

    if args.check {
        println!(
            "{}: {} products, {} glossary terms, {} architecture patterns, {} pro tips",
            catalog.title,
            catalog.products.len(),
            catalog.glossary.len(),
            catalog.architecture_patterns.len(),
            catalog.pro_tips.len()
        );
        return Ok(());
    }

    // An explicitly requested product must exist; the config one may be stale
    if let Some(key) = &args.product
        && catalog.product_index(key).is_none()
    {
        return Err(GuideError::UnknownProduct(key.clone()).into());
    }

    let terminal = ratatui::init();
    execute!(stdout(), EnableMouseCapture)?;

    let result = run(terminal, App::new(&catalog, &config));

    // Restore terminal even if the loop failed
    let _ = execute!(stdout(), DisableMouseCapture);
    ratatui::restore();

    result
}

/// Command line values take precedence over the config file
fn apply_args(mut config: Config, args: &Args) -> Config {
    if let Some(path) = &args.catalog {
        config.guide.catalog = Some(path.clone());
    }
    if let Some(product) = &args.product {
        config.guide.product = Some(product.clone());
    }
    if let Some(tab) = args.tab {
        config.guide.tab = tab;
    }
    config
}

fn run(mut terminal: DefaultTerminal, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|frame| app.render(frame))?;

        app.handle_event(event::read()?);

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}

#[cfg(debug_assertions)]
fn init_debug_log() {
    let path = std::env::temp_dir().join("payguide-debug.log");
    if let Ok(file) = std::fs::File::create(&path) {
        let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
            .target(env_logger::Target::Pipe(Box::new(file)))
            .try_init();
    }
}
