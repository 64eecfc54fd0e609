//! GGG → BILOU conversion
//!
//! Turns a GGG underlying form (`f{oo>ee}t`) and its gloss (`foot{PL}`) into
//! one annotated record per grapheme: BILOU tag, edit operation, span index
//! and gloss label. The pipeline is parse → align → tag, see `convert`.
//!
//! The crate also builds as a WASM module exposing the conversion to JS.

pub mod align;
pub mod api;
pub mod convert;
pub mod error;
pub mod models;
pub mod parse;
pub mod tagger;
pub mod utils;

// Re-export commonly used types
pub use convert::{merged_form_gloss, merged_form_gloss_with};
pub use error::{AlignmentError, ConversionError, NotationError};
pub use models::*;

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    // A second init only fails because a logger is already installed
    #[cfg(feature = "console_log")]
    let _ = console_log::init_with_level(log::Level::Info);

    log::info!("GGG/BILOU WASM module initialized");
}
