use flate2::read::MultiGzDecoder;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::io::{is_gzip, IoError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastqRecord {
    pub header: String,
    pub sequence: String,
    pub plus: String,
    pub quality: String,
}

/// Open a FASTQ file for reading, decompressing `.gz` inputs
pub fn open_fastq(path: &Path) -> Result<Box<dyn BufRead>, IoError> {
    let file = File::open(path).map_err(|source| IoError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    if is_gzip(path) {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Stream FASTQ records one at a time.
///
/// Blank lines between records are skipped; a record cut short by the end
/// of input is reported as [`IoError::TruncatedRecord`] and a sequence line
/// with non-ASCII characters as [`IoError::NonAsciiSequence`].
pub fn stream_fastq_records<R: BufRead>(reader: R) -> FastqStreamParser<io::Lines<R>> {
    FastqStreamParser {
        lines: reader.lines(),
        record: 0,
        done: false,
    }
}

/// Stream only the read sequences of a FASTQ input
pub fn stream_sequences<R: BufRead>(reader: R) -> impl Iterator<Item = Result<String, IoError>> {
    stream_fastq_records(reader).map(|record| record.map(|r| r.sequence))
}

/// Iterator adaptor turning lines into FASTQ records
pub struct FastqStreamParser<I>
where
    I: Iterator<Item = io::Result<String>>,
{
    lines: I,
    record: usize,
    done: bool,
}

impl<I> FastqStreamParser<I>
where
    I: Iterator<Item = io::Result<String>>,
{
    fn next_line(&mut self) -> Result<Option<String>, IoError> {
        match self.lines.next() {
            Some(Ok(line)) => Ok(Some(line.trim_end_matches('\r').to_string())),
            Some(Err(e)) => Err(e.into()),
            None => Ok(None),
        }
    }

    fn read_record(&mut self) -> Result<Option<FastqRecord>, IoError> {
        let header = loop {
            match self.next_line()? {
                Some(line) if line.trim().is_empty() => continue,
                Some(line) => break line,
                None => return Ok(None),
            }
        };
        self.record += 1;

        let mut body = Vec::with_capacity(3);
        for _ in 0..3 {
            match self.next_line()? {
                Some(line) => body.push(line),
                None => return Err(IoError::TruncatedRecord { record: self.record }),
            }
        }
        let quality = body.pop().unwrap_or_default();
        let plus = body.pop().unwrap_or_default();
        let sequence = body.pop().unwrap_or_default();
        if !sequence.is_ascii() {
            return Err(IoError::NonAsciiSequence { record: self.record });
        }

        Ok(Some(FastqRecord {
            header,
            sequence,
            plus,
            quality,
        }))
    }
}

impl<I> Iterator for FastqStreamParser<I>
where
    I: Iterator<Item = io::Result<String>>,
{
    type Item = Result<FastqRecord, IoError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.read_record() {
            Ok(Some(record)) => Some(Ok(record)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}
