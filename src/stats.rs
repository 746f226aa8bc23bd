use serde::Serialize;

use crate::graph::contig::Contig;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Stats {
    pub total_contigs: usize,
    pub total_length: usize,
    pub average_length: f64,
    pub max_length: usize,
    pub n50: usize,
}

/// Length statistics of an assembly
pub fn calculate_stats(contigs: &[Contig]) -> Stats {
    let mut lengths: Vec<usize> = contigs.iter().map(|c| c.length).collect();
    lengths.sort_unstable();

    let total: usize = lengths.iter().sum();
    let total_contigs = lengths.len();
    let avg = if total_contigs > 0 {
        total as f64 / total_contigs as f64
    } else {
        0.0
    };

    // N50: longest-first, stop once half the bases are covered
    let mut acc = 0;
    let half_total = total / 2;
    let n50 = lengths
        .iter()
        .rev()
        .find(|&&len| {
            acc += len;
            acc >= half_total
        })
        .copied()
        .unwrap_or(0);

    Stats {
        total_contigs,
        total_length: total,
        average_length: avg,
        max_length: lengths.last().copied().unwrap_or(0),
        n50,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contig(len: usize) -> Contig {
        Contig {
            id: 0,
            sequence: "A".repeat(len),
            length: len,
            node_path: Vec::new(),
        }
    }

    #[test]
    fn test_calculate_stats() {
        let stats = calculate_stats(&[contig(20), contig(24), contig(4)]);

        assert_eq!(stats.total_contigs, 3);
        assert_eq!(stats.total_length, 48);
        assert_eq!(stats.average_length, 16.0);
        assert_eq!(stats.max_length, 24);
        assert_eq!(stats.n50, 24);
    }

    #[test]
    fn test_empty_assembly() {
        let stats = calculate_stats(&[]);
        assert_eq!(stats.total_contigs, 0);
        assert_eq!(stats.n50, 0);
        assert_eq!(stats.average_length, 0.0);
    }
}
