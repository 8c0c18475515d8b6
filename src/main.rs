//! `vitrina` - showcase application demo driver
//!
//! Wires the settings store to file storage and a presentation channel, loads
//! persisted preferences, fetches the product catalog (degrading gracefully
//! when offline), and walks the slideshow once. The presentation consumer
//! here is a plain console printer standing in for a UI shell.

use anyhow::{Context, Result};
use std::sync::mpsc;
use std::time::Duration;
use tracing::{info, warn};
use vitrina::catalog::{CatalogFetcher, ProductList, SortField};
use vitrina::error::get_user_friendly_error;
use vitrina::gallery::Slideshow;
use vitrina::presentation::{ChannelSink, PresentationState};
use vitrina::settings::{ColorScheme, FileStorage, SettingUpdate, SettingsStore};
use vitrina::utils;

fn main() -> Result<()> {
    utils::init_logging().context("Failed to initialize logging system")?;

    info!("vitrina v{} starting...", env!("CARGO_PKG_VERSION"));

    let (presentation_tx, presentation_rx) = mpsc::sync_channel::<PresentationState>(32);

    // Consumer thread standing in for the UI shell
    let presentation_thread = std::thread::spawn(move || {
        while let Ok(state) = presentation_rx.recv() {
            println!(
                "presentation: {}px, scheme {}, {}, background {}",
                state.base_text_size_px,
                state.scheme_marker.unwrap_or("(none)"),
                if state.dark { "dark" } else { "light" },
                state.background.unwrap_or("(scheme-owned)"),
            );
        }
    });

    let mut store = SettingsStore::new(
        Box::new(FileStorage::new()),
        Box::new(ChannelSink::new(presentation_tx)),
    );
    store.load();
    info!("Settings ready: {:?}", store.get());

    // A few sample updates, the way the settings panel would issue them
    store.update(SettingUpdate::ColorScheme(ColorScheme::Blue));
    store.update(SettingUpdate::DarkMode(true));
    store.update(SettingUpdate::TextSize(18));

    match CatalogFetcher::new().fetch() {
        Ok(products) => {
            let mut list = ProductList::new(products);
            list.toggle_sort(SortField::Price);
            println!("catalog: {} products, categories: {:?}", list.len(), list.categories());
            if let Some(cheapest) = list.view().first() {
                println!("cheapest: {} ({} EUR)", cheapest.title, cheapest.price);
            }
        }
        Err(e) => {
            warn!("Catalog unavailable: {e}");
            eprintln!("{}", get_user_friendly_error(&e));
        }
    }

    let mut slideshow = Slideshow::new();
    slideshow.toggle_playback();
    for _ in 0..slideshow.len() {
        let slide = slideshow.current_slide();
        println!("slide {}/{}: {}", slideshow.current_index() + 1, slideshow.len(), slide.title);
        slideshow.next();
        std::thread::sleep(Duration::from_millis(50));
    }

    // Dropping the store closes the presentation channel
    drop(store);
    presentation_thread
        .join()
        .map_err(|_| anyhow::anyhow!("presentation consumer panicked"))?;

    info!("vitrina shutting down");

    Ok(())
}
