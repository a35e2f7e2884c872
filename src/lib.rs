//! Graph search algorithms for Rust and WASM.
//!
//! - Breadth-first / depth-first traversal and shortest paths over an
//!   adjacency-list [`Graph`]
//! - Breadth-first search over a 2-D [`Grid`]
//! - Island counting by flood fill
//! - Top-k most frequent values by heap or bucket selection
//!
//! Every operation is a pure function of its input. The same code backs the
//! native API and the `wasm-bindgen` exports.

pub mod algorithms;
pub mod bindings;
pub mod error;
pub mod graph;
pub mod grid;
#[cfg(feature = "logging")]
pub mod logging;
pub mod strategy;

pub use error::{Result, SearchError};
pub use graph::Graph;
pub use grid::{Grid, Terrain};
pub use strategy::{DepthFirstStrategy, FloodFill, Selection};

use wasm_bindgen::prelude::*;

/// Module start hook: route Rust panics to the browser console.
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}
