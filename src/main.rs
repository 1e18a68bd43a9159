use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;
use tracing::{error, info};

use admindash::app::App;
use admindash::{config, logging, ui};

#[derive(Debug, Parser)]
#[command(
    name = "admindash",
    version,
    about = "admindash: an analytics admin dashboard in the terminal"
)]
struct Args {
    /// View to open at startup (`/` or `/orders`)
    #[arg(long)]
    route: Option<String>,

    /// Config file to read instead of the default location
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log filter directive (e.g. admindash=debug)
    #[arg(long)]
    log_filter: Option<String>,

    /// Event-loop tick in milliseconds
    #[arg(long)]
    tick_rate_ms: Option<u64>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut config = config::load(args.config.as_deref());
    if let Some(ms) = args.tick_rate_ms {
        config.tick_rate_ms = Some(ms);
    }

    let env_filter = std::env::var("RUST_LOG").ok();
    let directive = logging::filter_directive(
        args.log_filter.as_deref(),
        env_filter.as_deref(),
        config.log_filter.as_deref(),
    );
    let _log_guard = logging::init(config::log_dir(), &directive)?;
    let tick_ms = config.tick_rate().as_millis() as u64;
    info!(tick_ms, "admindash starting");

    let mut app = App::new(config.transition());
    let start = args
        .route
        .as_deref()
        .map(str::trim)
        .filter(|route| !route.is_empty())
        .unwrap_or_else(|| config.start_route())
        .to_string();
    app.open_path(&start);

    let mut stdout = io::stdout();
    enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app, config.tick_rate());

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!(error = %err, "event loop failed");
        eprintln!("{err:?}");
    }
    info!("admindash stopped");

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    tick_rate: Duration,
) -> Result<()> {
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| ui::draw(f, &app))?;
        if app.should_quit {
            return Ok(());
        }

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                Event::Mouse(mouse) => {
                    if let Some(size) = terminal_rect() {
                        app.handle_mouse(mouse, size);
                    }
                }
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.on_tick(Instant::now());
            last_tick = Instant::now();
        }
    }
}

fn terminal_rect() -> Option<Rect> {
    let (width, height) = crossterm::terminal::size().ok()?;
    Some(Rect {
        x: 0,
        y: 0,
        width,
        height,
    })
}
