//! Graph rendering
pub mod plot;

pub use plot::draw_graph;
