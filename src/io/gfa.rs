use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::graph::debruijn::DeBruijnGraph;
use crate::io::IoError;

pub struct GfaWriter<W: Write> {
    writer: W,
}

impl GfaWriter<BufWriter<File>> {
    pub fn create(path: &Path) -> Result<Self, IoError> {
        let file = File::create(path).map_err(|source| IoError::Create {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> GfaWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Write segments, one per live node, named by node id
    pub fn write_segments(&mut self, graph: &DeBruijnGraph) -> io::Result<()> {
        writeln!(self.writer, "H\tVN:Z:1.0")?;
        for node in graph.nodes() {
            if let Some(label) = graph.label(node) {
                writeln!(self.writer, "S\t{}\t{}", node.index(), label)?;
            }
        }
        Ok(())
    }

    /// Write one link per edge. Adjacent (k-1)-mers overlap by k-2
    /// characters; the k-mer count goes in the `RC` tag.
    pub fn write_links(&mut self, graph: &DeBruijnGraph) -> io::Result<()> {
        for (from, to, weight) in graph.edges() {
            let overlap = graph
                .label(from)
                .map_or(0, |label| label.len().saturating_sub(1));
            writeln!(
                self.writer,
                "L\t{}\t+\t{}\t+\t{}M\tRC:i:{}",
                from.index(),
                to.index(),
                overlap,
                weight
            )?;
        }
        Ok(())
    }

    pub fn write_graph(&mut self, graph: &DeBruijnGraph) -> io::Result<()> {
        self.write_segments(graph)?;
        self.write_links(graph)?;
        self.writer.flush()
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Save the graph to `path` in GFA 1.0
pub fn save_gfa(graph: &DeBruijnGraph, path: &Path) -> Result<(), IoError> {
    let mut writer = GfaWriter::create(path)?;
    writer.write_graph(graph)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_graph() {
        let mut graph = DeBruijnGraph::new();
        graph.add_edge("ACG", "CGT", 4);
        graph.add_edge("CGT", "GTT", 1);

        let mut writer = GfaWriter::new(Vec::new());
        writer.write_graph(&graph).unwrap();
        let text = String::from_utf8(writer.into_inner()).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            lines,
            vec![
                "H\tVN:Z:1.0",
                "S\t0\tACG",
                "S\t1\tCGT",
                "S\t2\tGTT",
                "L\t0\t+\t1\t+\t2M\tRC:i:4",
                "L\t1\t+\t2\t+\t2M\tRC:i:1",
            ]
        );
    }
}
