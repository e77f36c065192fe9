#![forbid(unsafe_code)]

//! Bookdeck demo binary.
//!
//! Browses the built-in library against a book-tracking server. The
//! server origin comes from `BOOKDECK_SERVER` (default
//! `http://localhost:5000`); session cookies, if the page session has
//! any, come from `BOOKDECK_COOKIES`.
//!
//! Run with `RUST_LOG=debug` for the action-by-action log.

use std::io;
use std::sync::Arc;

use anyhow::Context;
use bookdeck_demo::app::{AppConfig, BrowseApp};
use bookdeck_demo::library;
use bookdeck_demo::term::{CrlfWriter, CrosstermEvents};
use bookdeck_gateway::{GatewayConfig, HttpGateway};
use bookdeck_runtime::Program;
use bookdeck_view::TextPresenter;
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let base_url =
        std::env::var("BOOKDECK_SERVER").unwrap_or_else(|_| "http://localhost:5000".to_string());
    let config = AppConfig {
        base_url: base_url.clone(),
        ..AppConfig::default()
    };

    let mut gateway = HttpGateway::new(GatewayConfig::new(&base_url))
        .context("building the reading-list gateway")?;
    if let Ok(cookies) = std::env::var("BOOKDECK_COOKIES") {
        gateway = gateway.with_cookies(cookies);
    }

    let app = BrowseApp::new(
        config,
        library::library_cards(),
        library::showcase_books(),
        library::slide_captions(),
        Arc::new(gateway),
    );

    enable_raw_mode().context("entering raw mode")?;
    execute!(io::stdout(), crossterm::event::EnableMouseCapture)
        .context("enabling mouse capture")?;

    let mut source = CrosstermEvents;
    let mut presenter = TextPresenter::new(CrlfWriter(io::stdout())).clearing();
    let model = Program::new(app).run(&mut source, &mut presenter);

    execute!(io::stdout(), crossterm::event::DisableMouseCapture).ok();
    disable_raw_mode().ok();

    if let Some(url) = model.requested_navigation {
        println!("Open {url}");
    }
    Ok(())
}
