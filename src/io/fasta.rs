use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::graph::contig::Contig;
use crate::io::{is_gzip, IoError};

/// Default FASTA line width
pub const LINE_WIDTH: usize = 80;

pub enum FastaWriter {
    Plain(BufWriter<File>),
    Compressed(BufWriter<GzEncoder<File>>),
}

impl FastaWriter {
    /// Create a FASTA file, gzip-compressed when the path ends in `.gz`
    pub fn create(path: &Path) -> Result<Self, IoError> {
        let file = File::create(path).map_err(|source| IoError::Create {
            path: path.to_path_buf(),
            source,
        })?;
        if is_gzip(path) {
            let encoder = GzEncoder::new(file, Compression::default());
            Ok(FastaWriter::Compressed(BufWriter::new(encoder)))
        } else {
            Ok(FastaWriter::Plain(BufWriter::new(file)))
        }
    }

    fn writer(&mut self) -> &mut dyn Write {
        match self {
            FastaWriter::Plain(writer) => writer,
            FastaWriter::Compressed(writer) => writer,
        }
    }

    /// Write one contig as `>contig_{index} len={length}` plus wrapped sequence
    pub fn write_contig(&mut self, index: usize, contig: &Contig, width: usize) -> io::Result<()> {
        write_contig_record(self.writer(), index, contig, width)
    }

    /// Flush buffers and, for gzip output, write the trailer
    pub fn finish(self) -> io::Result<()> {
        match self {
            FastaWriter::Plain(mut writer) => writer.flush(),
            FastaWriter::Compressed(writer) => {
                let encoder = writer.into_inner().map_err(|e| e.into_error())?;
                encoder.finish()?.flush()
            }
        }
    }
}

/// Write `sequence` in lines of at most `width` characters
pub fn write_wrapped<W: Write + ?Sized>(
    writer: &mut W,
    sequence: &str,
    width: usize,
) -> io::Result<()> {
    let width = width.max(1);
    if sequence.is_empty() {
        return writeln!(writer);
    }
    for chunk in sequence.as_bytes().chunks(width) {
        writer.write_all(chunk)?;
        writer.write_all(b"\n")?;
    }
    Ok(())
}

pub fn write_contig_record<W: Write + ?Sized>(
    writer: &mut W,
    index: usize,
    contig: &Contig,
    width: usize,
) -> io::Result<()> {
    writeln!(writer, ">contig_{} len={}", index, contig.length)?;
    write_wrapped(writer, &contig.sequence, width)
}

/// Write every contig, numbered from 0 in list order
pub fn write_contigs<W: Write + ?Sized>(
    writer: &mut W,
    contigs: &[Contig],
    width: usize,
) -> io::Result<()> {
    for (i, contig) in contigs.iter().enumerate() {
        write_contig_record(writer, i, contig, width)?;
    }
    Ok(())
}

/// Save contigs to `path` as FASTA
pub fn save_contigs(contigs: &[Contig], path: &Path, width: usize) -> Result<(), IoError> {
    let mut writer = FastaWriter::create(path)?;
    for (i, contig) in contigs.iter().enumerate() {
        writer.write_contig(i, contig, width)?;
    }
    writer.finish()?;
    Ok(())
}
