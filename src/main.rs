use rsvp_tui::app::action::Action;
use rsvp_tui::app::event::{AppEvent, ShareChannel};
use rsvp_tui::app::handler;
use rsvp_tui::app::state::AppState;
use rsvp_tui::config::{self, model::StorageConfig};
use rsvp_tui::share::{clipboard, launcher};
use rsvp_tui::store::{FileKvStore, KeyValueStore, MemoryKvStore, ResponseStore};
use rsvp_tui::{logging, ui};
use anyhow::Result;
use crossterm::{
    event::EventStream,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::prelude::*;
use std::io;
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> Result<()> {
    // Install panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    let cfg = config::load_config()?;
    logging::init(&cfg.logging)?;

    let store = ResponseStore::new(open_backend(&cfg.storage), cfg.storage.key.clone());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, AppState::new(cfg, store)).await;

    restore_terminal()?;

    if let Err(e) = result {
        tracing::error!(error = %e, "exiting after error");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn open_backend(storage: &StorageConfig) -> Box<dyn KeyValueStore> {
    if storage.in_memory {
        tracing::info!("responses kept in memory only");
        return Box::new(MemoryKvStore::new());
    }
    let kv = FileKvStore::in_dir(&storage.resolved_data_dir());
    tracing::info!(path = %kv.path().display(), key = %storage.key, "opening response storage");
    Box::new(kv)
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut state: AppState,
) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();

    // Spawn terminal input task
    let term_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut reader = EventStream::new();
        while let Some(Ok(event)) = reader.next().await {
            if term_tx.send(AppEvent::Terminal(event)).is_err() {
                break;
            }
        }
    });

    // Spawn tick task (20 FPS = 50ms)
    let tick_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(std::time::Duration::from_millis(50));
        loop {
            interval.tick().await;
            if tick_tx.send(AppEvent::Tick).is_err() {
                break;
            }
        }
    });

    terminal.draw(|f| ui::render(f, &state))?;

    // Main event loop
    loop {
        let Some(event) = event_rx.recv().await else { break };

        let actions = handler::handle_event(&mut state, event);

        for action in actions {
            match action {
                Action::CopyLink { url } => {
                    let result =
                        clipboard::copy_to_clipboard(&mut io::stdout(), &url).map_err(|e| e.to_string());
                    let _ = event_tx.send(AppEvent::CopyFinished { result });
                }
                Action::OpenIntent { platform, url } => {
                    let tx = event_tx.clone();
                    tokio::spawn(async move {
                        let outcome = launcher::open_url(&url).await;
                        let _ = tx.send(AppEvent::ShareFinished {
                            channel: ShareChannel::Intent(platform),
                            outcome,
                        });
                    });
                }
                Action::NativeShare { command, payload } => {
                    let tx = event_tx.clone();
                    tokio::spawn(async move {
                        let outcome = launcher::native_share(&command, &payload).await;
                        let _ = tx.send(AppEvent::ShareFinished {
                            channel: ShareChannel::Native,
                            outcome,
                        });
                    });
                }
                Action::Quit => state.should_quit = true,
            }
        }

        if state.should_quit {
            break;
        }

        // Conditional render (only if dirty)
        if state.dirty {
            terminal.draw(|f| ui::render(f, &state))?;
            state.dirty = false;
        }
    }

    Ok(())
}
