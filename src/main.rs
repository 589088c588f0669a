use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use std::io::stdout;

mod api;
mod app;
mod config;
mod error;
mod navigate;
mod overlay;
mod slider;
mod theme;
mod widgets;

use api::SearchClient;
use app::App;
use error::SiteseekError;
use overlay::worker;

/// Interactive site search
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Interactive site search with real-time results from the content API"
)]
struct Args {
    /// GraphQL endpoint of the content backend (overrides config)
    #[arg(long)]
    endpoint: Option<String>,
}

fn main() -> Result<()> {
    // Writes to /tmp/siteseek-debug.log at DEBUG level
    #[cfg(debug_assertions)]
    {
        use std::io::Write;

        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/siteseek-debug.log")
            .expect("Failed to open /tmp/siteseek-debug.log");

        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .target(env_logger::Target::Pipe(Box::new(log_file)))
            .format(|buf, record| {
                use std::time::SystemTime;
                let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
                writeln!(
                    buf,
                    "[{}] [{}] {}",
                    datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                    record.level(),
                    record.args()
                )
            })
            .init();

        log::debug!("=== SITESEEK DEBUG SESSION STARTED ===");
    }

    color_eyre::install()?;

    // Load config early to avoid defaults during app initialization
    let config_result = config::load_config();

    let args = Args::parse();

    let endpoint = args
        .endpoint
        .or_else(|| config_result.config.api.endpoint.clone())
        .ok_or(SiteseekError::EndpointMissing)?;

    let terminal = init_terminal()?;

    let mut app = App::new(&config_result.config);
    if let Some(warning) = config_result.warning {
        app.show_config_warning(warning);
    }

    // Wire the search worker to the session
    let (request_tx, request_rx) = std::sync::mpsc::channel();
    let (response_tx, response_rx) = std::sync::mpsc::channel();
    app.session.set_channels(request_tx, response_rx);
    worker::spawn_worker(SearchClient::new(endpoint), request_rx, response_tx);

    let result = run(terminal, app);

    restore_terminal()?;
    let app = result?;

    // Output after terminal restore to prevent corruption: hand the selected
    // destination to whatever launched us
    if let Some(path) = app.navigation() {
        println!("{}", path);
    }

    #[cfg(debug_assertions)]
    log::debug!("=== SITESEEK DEBUG SESSION ENDED ===");

    Ok(())
}

/// Initialize terminal with raw mode, alternate screen, and bracketed paste
fn init_terminal() -> Result<DefaultTerminal> {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = execute!(stdout(), DisableBracketedPaste, LeaveAlternateScreen);
        let _ = disable_raw_mode();
        hook(info);
    }));

    enable_raw_mode()?;

    // If any subsequent operations fail, ensure raw mode is disabled
    match execute!(stdout(), EnterAlternateScreen, EnableBracketedPaste) {
        Ok(_) => {}
        Err(e) => {
            let _ = disable_raw_mode();
            return Err(e.into());
        }
    }

    match ratatui::Terminal::new(ratatui::backend::CrosstermBackend::new(stdout())) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let _ = execute!(stdout(), DisableBracketedPaste, LeaveAlternateScreen);
            let _ = disable_raw_mode();
            Err(e.into())
        }
    }
}

/// Restore terminal to normal state
fn restore_terminal() -> Result<()> {
    let _ = execute!(stdout(), DisableBracketedPaste, LeaveAlternateScreen);
    disable_raw_mode()?;
    Ok(())
}

fn run(mut terminal: DefaultTerminal, mut app: App) -> Result<App> {
    loop {
        if app.should_render() {
            terminal.draw(|frame| app.render(frame))?;
            app.clear_dirty();
        }

        app.handle_events()?;

        if app.should_quit() {
            break;
        }
    }

    Ok(app)
}
