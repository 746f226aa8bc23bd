use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use tracing::{debug, info};

use crate::config::AssemblyConfig;
use crate::graph::bubble::{simplify_bubbles, BubbleReport};
use crate::graph::contig::{get_contigs, Contig};
use crate::graph::debruijn::{build_graph, DeBruijnGraph};
use crate::graph::stats::{degree_distribution, GraphSummary};
use crate::graph::tips::{resolve_tips, TipReport};
use crate::io::export::export_graph_json;
use crate::io::fasta::save_contigs;
use crate::io::fastq::{open_fastq, stream_sequences};
use crate::io::gfa::save_gfa;
use crate::io::IoError;
use crate::kmer::KmerCounts;
use crate::pipeline::PipelineError;
use crate::stats::{calculate_stats, Stats};
use crate::visualize::draw_graph;

/// What happened at each stage of a run
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct AssemblyReport {
    pub reads: usize,
    pub distinct_kmers: usize,
    pub built: GraphSummary,
    pub bubbles_collapsed: usize,
    pub bubble_nodes_removed: usize,
    pub entry_tip_nodes_removed: usize,
    pub exit_tip_nodes_removed: usize,
    pub simplified: GraphSummary,
    pub contigs: Stats,
}

/// Final graph and contigs of a run
#[derive(Debug, Clone)]
pub struct Assembly {
    pub graph: DeBruijnGraph,
    pub contigs: Vec<Contig>,
    pub report: AssemblyReport,
}

/// Build, simplify and walk the graph for already-counted k-mers.
///
/// Stages run in a fixed order: bubbles, entry tips over the sources at that
/// point, exit tips over the sinks left after that, then contig extraction
/// over the final sources and sinks. All tie-breaks draw from `rng`.
pub fn assemble_counts<R: Rng + ?Sized>(
    counts: &KmerCounts,
    reads: usize,
    rng: &mut R,
) -> Assembly {
    info!("Building de Bruijn graph from {} distinct k-mers", counts.len());
    let mut graph = build_graph(counts);
    let built = GraphSummary::of(&graph);
    info!("Graph built: {}", built);
    let (in_degrees, out_degrees) = degree_distribution(&graph);
    debug!("In-degree histogram {:?}, out-degree histogram {:?}", in_degrees, out_degrees);

    info!("Simplifying bubbles");
    let bubbles: BubbleReport = simplify_bubbles(&mut graph, rng);
    info!(
        "Collapsed {} bubbles, removed {} nodes",
        bubbles.bubbles_collapsed, bubbles.nodes_removed
    );

    info!("Resolving tips");
    let (entry, exit): (TipReport, TipReport) = resolve_tips(&mut graph, rng);
    info!("Entry tips: {} junctions, {} nodes removed", entry.junctions, entry.nodes_removed);
    info!("Exit tips: {} junctions, {} nodes removed", exit.junctions, exit.nodes_removed);

    let simplified = GraphSummary::of(&graph);
    info!("Simplified graph: {}", simplified);

    info!("Extracting contigs");
    let contigs = get_contigs(&graph, &graph.sources(), &graph.sinks());
    let stats = calculate_stats(&contigs);
    info!(
        "Extracted {} contigs ({} bp, N50 {})",
        stats.total_contigs, stats.total_length, stats.n50
    );

    let report = AssemblyReport {
        reads,
        distinct_kmers: counts.len(),
        built,
        bubbles_collapsed: bubbles.bubbles_collapsed,
        bubble_nodes_removed: bubbles.nodes_removed,
        entry_tip_nodes_removed: entry.nodes_removed,
        exit_tip_nodes_removed: exit.nodes_removed,
        simplified,
        contigs: stats,
    };
    Assembly { graph, contigs, report }
}

/// Assemble an in-memory batch of reads
pub fn assemble_reads<I, S, R>(reads: I, k: usize, rng: &mut R) -> Assembly
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    let mut counts = KmerCounts::new(k);
    let mut n_reads = 0;
    for read in reads {
        counts.add_read(read.as_ref());
        n_reads += 1;
    }
    assemble_counts(&counts, n_reads, rng)
}

#[derive(Serialize)]
struct RunSummary<'a> {
    config: &'a AssemblyConfig,
    report: &'a AssemblyReport,
}

/// Run a full assembly described by `config`: read the FASTQ input, write
/// the contigs and every optional graph output.
pub fn run(config: &AssemblyConfig) -> Result<AssemblyReport, PipelineError> {
    config.validate()?;
    info!("Starting assembly from: {}", config.input.display());
    info!("Using k-mer size {} and seed {}", config.kmer_size, config.seed);

    let reader = open_fastq(&config.input)?;
    let mut counts = KmerCounts::new(config.kmer_size);
    let mut reads = 0;
    for sequence in stream_sequences(reader) {
        counts.add_read(&sequence?);
        reads += 1;
    }
    info!("Read {} sequences, {} k-mer occurrences", reads, counts.total());

    let mut rng = StdRng::seed_from_u64(config.seed);
    let assembly = assemble_counts(&counts, reads, &mut rng);

    info!("Writing contigs to {}", config.output.display());
    save_contigs(&assembly.contigs, &config.output, config.line_width)?;

    if let Some(path) = &config.gfa {
        info!("Writing graph GFA to {}", path.display());
        save_gfa(&assembly.graph, path)?;
    }
    if let Some(path) = &config.graph_json {
        info!("Writing graph JSON to {}", path.display());
        export_graph_json(&assembly.graph, config.kmer_size, path)?;
    }
    if let Some(path) = &config.graph_image {
        info!("Rendering graph to {}", path.display());
        draw_graph(&assembly.graph, path, &mut rng)?;
    }
    if let Some(path) = &config.stats_json {
        info!("Writing run statistics to {}", path.display());
        write_run_summary(config, &assembly.report, path)?;
    }

    info!("Assembly finished");
    Ok(assembly.report)
}

fn write_run_summary(
    config: &AssemblyConfig,
    report: &AssemblyReport,
    path: &std::path::Path,
) -> Result<(), IoError> {
    let file = File::create(path).map_err(|source| IoError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::to_writer_pretty(BufWriter::new(file), &RunSummary { config, report })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assemble_reads_linear() {
        let mut rng = StdRng::seed_from_u64(9001);
        let assembly = assemble_reads(["AATCG", "ATCGT", "TCGTA"], 3, &mut rng);

        assert_eq!(assembly.report.reads, 3);
        assert_eq!(assembly.report.distinct_kmers, 5);
        assert_eq!(assembly.contigs.len(), 1);
        assert_eq!(assembly.contigs[0].sequence, "AATCGTA");
        assert_eq!(assembly.contigs[0].length, 7);
    }

    #[test]
    fn test_run_writes_outputs() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("reads.fq");
        std::fs::write(
            &input,
            "@r1\nAATCG\n+\nIIIII\n@r2\nATCGT\n+\nIIIII\n@r3\nTCGTA\n+\nIIIII\n",
        )
        .unwrap();

        let mut config = AssemblyConfig::new(&input);
        config.kmer_size = 3;
        config.output = dir.path().join("contigs.fasta");
        config.gfa = Some(dir.path().join("graph.gfa"));
        config.graph_json = Some(dir.path().join("graph.json"));
        config.stats_json = Some(dir.path().join("stats.json"));

        let report = run(&config).unwrap();
        assert_eq!(report.contigs.total_contigs, 1);

        let fasta = std::fs::read_to_string(&config.output).unwrap();
        assert_eq!(fasta, ">contig_0 len=7\nAATCGTA\n");

        let stats_text = std::fs::read_to_string(dir.path().join("stats.json")).unwrap();
        let stats: serde_json::Value = serde_json::from_str(&stats_text).unwrap();
        assert_eq!(stats["config"]["kmer_size"], 3);
        assert_eq!(stats["report"]["contigs"]["n50"], 7);
        assert!(dir.path().join("graph.gfa").exists());
        assert!(dir.path().join("graph.json").exists());
    }

    #[test]
    fn test_run_rejects_missing_input() {
        let config = AssemblyConfig::new("/nonexistent/reads.fq");
        assert!(matches!(run(&config), Err(PipelineError::Config(_))));
    }
}
