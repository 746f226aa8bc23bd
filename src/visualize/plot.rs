use ahash::AHashMap;
use plotters::prelude::*;
use rand::Rng;
use std::path::Path;

use crate::graph::debruijn::{DeBruijnGraph, NodeId};
use crate::io::IoError;

/// Edges above this weight are drawn as heavy strokes
pub const HEAVY_EDGE_WEIGHT: u32 = 3;

/// Place every live node uniformly at random in the unit square
pub fn random_layout<R: Rng + ?Sized>(
    graph: &DeBruijnGraph,
    rng: &mut R,
) -> Vec<(NodeId, (f64, f64))> {
    graph
        .nodes()
        .map(|node| (node, (rng.gen::<f64>(), rng.gen::<f64>())))
        .collect()
}

fn render(
    graph: &DeBruijnGraph,
    layout: &[(NodeId, (f64, f64))],
    output: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let root = BitMapBackend::new(output, (1024, 768)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .build_cartesian_2d(0f64..1f64, 0f64..1f64)?;

    let positions: AHashMap<NodeId, (f64, f64)> = layout.iter().copied().collect();
    for (from, to, weight) in graph.edges() {
        let (Some(&a), Some(&b)) = (positions.get(&from), positions.get(&to)) else {
            continue;
        };
        let style = if weight > HEAVY_EDGE_WEIGHT {
            BLACK.stroke_width(3)
        } else {
            BLUE.mix(0.5).stroke_width(1)
        };
        chart.draw_series(std::iter::once(PathElement::new(vec![a, b], style)))?;
    }

    chart.draw_series(
        layout
            .iter()
            .map(|&(_, point)| Circle::new(point, 3, RED.filled())),
    )?;

    root.present()?;
    Ok(())
}

/// Render the graph to a PNG image. Node placement is random, drawn from `rng`.
pub fn draw_graph<R: Rng + ?Sized>(
    graph: &DeBruijnGraph,
    output: &Path,
    rng: &mut R,
) -> Result<(), IoError> {
    let layout = random_layout(graph, rng);
    render(graph, &layout, output).map_err(|e| IoError::Plot(e.to_string()))
}
