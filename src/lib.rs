//! Sellberg site core crate.
//!
//! A small single-page site compiled to WASM: static portfolio pages plus two
//! kids games (alphabet flashcards and a hockey shootout). Game state machines
//! are plain Rust and run natively under `cargo test`; everything that touches
//! the browser sits behind the capability traits in [`platform`].

use wasm_bindgen::prelude::*;

pub mod alphabet;
pub mod app;
pub mod config;
pub mod content;
pub mod dom;
pub mod error;
pub mod hockey;
pub mod logging;
pub mod pages;
pub mod platform;
pub mod routes;

pub use alphabet::AlphabetGame;
pub use config::{HockeyConfig, SiteConfig, VoiceStyle};
pub use error::{Result, SiteError};
pub use hockey::{HockeyGame, HockeyTimer, Phase, ShotResult};
pub use routes::Route;

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Mount the site with the default configuration.
#[wasm_bindgen]
pub fn start_site() -> Result<(), JsValue> {
    run(SiteConfig::default())
}

/// Mount the site with a JSON `SiteConfig`; missing fields take their defaults.
#[cfg(feature = "serde_json")]
#[wasm_bindgen]
pub fn start_site_with_config(json: &str) -> Result<(), JsValue> {
    let config = SiteConfig::from_json(json)?;
    run(config)
}

fn run(config: SiteConfig) -> Result<(), JsValue> {
    logging::init(logging::parse_level(&config.log_level));
    config.validate()?;
    app::start(config)?;
    Ok(())
}
