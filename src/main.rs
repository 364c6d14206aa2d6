use std::io::stdout;
use std::path::PathBuf;

use clap::Parser;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen};

use folio::content::{load_portfolio, MarkdownStore};
use folio::theme::Theme;

/// folio — terminal portfolio and project registry.
#[derive(Parser, Debug)]
#[command(name = "folio", version, about)]
struct Cli {
    /// Path to the content directory (content.json or content.yaml plus
    /// a projects/ markdown directory)
    #[arg(long, default_value = "./content")]
    content_dir: PathBuf,

    /// Initial fragment for deep-linking, e.g. "#jobs" or "#project-<id>"
    #[arg(long, default_value = "")]
    fragment: String,

    /// Colour theme ("ember" or "paper")
    #[arg(long, default_value = "ember")]
    theme: String,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    // Validate the content bundle before touching the terminal
    let portfolio = match load_portfolio(&cli.content_dir) {
        Ok(portfolio) => portfolio,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };
    let store = MarkdownStore::new(&cli.content_dir);

    // Set up logging to file (we own the terminal)
    let log_dir = std::env::var("FOLIO_LOG_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| std::env::temp_dir().join("folio"));
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = tracing_appender::rolling::daily(&log_dir, "folio.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("folio=info".parse()?),
        )
        .init();

    // Install panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = execute!(stdout(), LeaveAlternateScreen, DisableMouseCapture);
        ratatui::restore();
        original_hook(panic_info);
    }));

    // Set up terminal with mouse capture enabled
    execute!(stdout(), EnterAlternateScreen, EnableMouseCapture)?;
    let mut terminal = ratatui::init();

    // Run the app
    let mut app = folio::App::new(
        portfolio,
        store,
        cli.fragment,
        Theme::from_name(&cli.theme),
    );
    let result = app.run(&mut terminal).await;

    // Restore terminal — disable mouse capture before restoring
    execute!(stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
    ratatui::restore();

    result
}
