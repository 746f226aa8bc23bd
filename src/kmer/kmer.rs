use ahash::AHashMap;

pub type Kmer = String;

/// Overlapping length-`k` windows of a read, step 1.
///
/// Reads shorter than `k` yield nothing. Only ASCII windows are yielded, so
/// every k-mer can be sliced by byte.
#[derive(Debug, Clone)]
pub struct KmerWindows<'a> {
    read: &'a str,
    k: usize,
    pos: usize,
}

impl<'a> Iterator for KmerWindows<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.k == 0 {
            return None;
        }
        while self.pos + self.k <= self.read.len() {
            let start = self.pos;
            self.pos += 1;
            match self.read.get(start..start + self.k) {
                Some(window) if window.is_ascii() => return Some(window),
                _ => {}
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.read.len() + 1).saturating_sub(self.pos + self.k);
        (0, Some(remaining))
    }
}

/// Cut a read into its k-mers
pub fn cut_kmers(read: &str, k: usize) -> KmerWindows<'_> {
    KmerWindows { read, k, pos: 0 }
}

/// K-mer occurrence table.
///
/// Iteration follows the order in which each k-mer was first seen, so two
/// runs over the same reads build graphs with identical node order.
#[derive(Debug, Clone, Default)]
pub struct KmerCounts {
    k: usize,
    entries: Vec<(Kmer, u32)>,
    index: AHashMap<Kmer, usize>,
}

impl KmerCounts {
    pub fn new(k: usize) -> Self {
        Self {
            k,
            entries: Vec::new(),
            index: AHashMap::new(),
        }
    }

    pub fn k(&self) -> usize {
        self.k
    }

    /// Record one occurrence of `kmer`
    pub fn add(&mut self, kmer: &str) {
        match self.index.get(kmer) {
            Some(&slot) => self.entries[slot].1 += 1,
            None => {
                self.index.insert(kmer.to_string(), self.entries.len());
                self.entries.push((kmer.to_string(), 1));
            }
        }
    }

    /// Count every k-mer of one read
    pub fn add_read(&mut self, read: &str) {
        for kmer in cut_kmers(read, self.k) {
            self.add(kmer);
        }
    }

    pub fn get(&self, kmer: &str) -> Option<u32> {
        self.index.get(kmer).map(|&slot| self.entries[slot].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of k-mer occurrences counted
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, count)| *count as u64).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> + '_ {
        self.entries.iter().map(|(kmer, count)| (kmer.as_str(), *count))
    }
}

/// Count every k-mer of every read in a single pass over `reads`
pub fn build_kmer_counts<I, S>(reads: I, k: usize) -> KmerCounts
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut counts = KmerCounts::new(k);
    for read in reads {
        counts.add_read(read.as_ref());
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cut_kmers_sliding_window() {
        let kmers: Vec<&str> = cut_kmers("TCAGA", 3).collect();
        assert_eq!(kmers, vec!["TCA", "CAG", "AGA"]);
    }

    #[test]
    fn test_short_read_yields_nothing() {
        assert_eq!(cut_kmers("AC", 3).count(), 0);
        assert_eq!(cut_kmers("", 3).count(), 0);
        assert_eq!(cut_kmers("ACG", 3).count(), 1);
    }

    #[test]
    fn test_non_ascii_windows_are_skipped() {
        let kmers: Vec<&str> = cut_kmers("ACéGTA", 3).collect();
        assert_eq!(kmers, vec!["GTA"]);
        assert_eq!(cut_kmers("éé", 1).count(), 0);
    }

    #[test]
    fn test_kmer_counts_first_seen_order() {
        let reads = vec!["TCAGAGCTCAG", "CAGAT"];
        let counts = build_kmer_counts(&reads, 3);

        assert_eq!(counts.get("TCA"), Some(2));
        assert_eq!(counts.get("CAG"), Some(3));
        assert_eq!(counts.get("AGA"), Some(2));
        assert_eq!(counts.get("GAT"), Some(1));
        assert_eq!(counts.get("TTT"), None);

        let order: Vec<&str> = counts.iter().map(|(kmer, _)| kmer).take(3).collect();
        assert_eq!(order, vec!["TCA", "CAG", "AGA"]);
        assert_eq!(counts.total(), 9 + 3);
    }

    #[test]
    fn test_kmer_counts_deterministic() {
        let reads = ["ACGTTGCA", "GTTGCAAC", "TTGCAACG"];
        let a: Vec<(String, u32)> = build_kmer_counts(reads, 4)
            .iter()
            .map(|(k, c)| (k.to_string(), c))
            .collect();
        let b: Vec<(String, u32)> = build_kmer_counts(reads, 4)
            .iter()
            .map(|(k, c)| (k.to_string(), c))
            .collect();
        assert_eq!(a, b);
    }
}
