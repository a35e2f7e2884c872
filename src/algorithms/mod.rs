//! Search algorithm implementations.

pub mod grid_search;
pub mod traversal;

#[cfg(feature = "islands")]
pub mod islands;
#[cfg(feature = "topk")]
pub mod topk;
