//! Core graph data structures

mod author;
mod collaboration;
mod edge;

#[cfg(test)]
mod tests;

pub use author::{Author, AuthorKey, KeyOrigin};
pub use collaboration::{CollaborationGraph, EdgeUpdate};
pub use edge::Edge;
