//! Animated single-page portfolio compiled to WebAssembly.
//!
//! `core` and `markup` are platform independent and tested on the host; the
//! `web` module wires them to the DOM and only builds for `wasm32`.

pub mod core;
pub mod markup;

#[cfg(target_arch = "wasm32")]
mod web;
