use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BioError {
    #[error("invalid character '{ch}' at position {pos}")]
    InvalidChar { ch: char, pos: usize },

    #[error("invalid strand '{value}' (expected '+' or '-')")]
    InvalidStrand { value: String },

    #[error("invalid codon '{codon}' at specification {index} (expected three of A, C, G, T)")]
    InvalidCodon { codon: String, index: usize },

    #[error("invalid offset {offset} at specification {index} (must be 1, 2, or 3)")]
    InvalidOffset { offset: usize, index: usize },

    #[error(
        "codon specification length mismatch (codons={codons}, offsets={offsets}, switch_strand={switch_strand})"
    )]
    CodonSpecLenMismatch {
        codons: usize,
        offsets: usize,
        switch_strand: usize,
    },

    #[error("invalid worker count: {workers} (must be at least 1)")]
    InvalidWorkers { workers: usize },

    #[error("chromosome '{chromosome}' is not present in the sequence source")]
    UnknownChromosome { chromosome: String },

    #[error("interval {start}..={end} is out of bounds for '{chromosome}' (length {len})")]
    IntervalOutOfBounds {
        chromosome: String,
        start: u64,
        end: u64,
        len: usize,
    },

    #[error("transcript '{transcript_id}': exon index spans {index} bases but sequence has {seq}")]
    IndexLengthMismatch {
        transcript_id: String,
        index: usize,
        seq: usize,
    },

    #[error("fasta format error at line {line}: {msg}")]
    FastaFormat { msg: &'static str, line: usize },

    #[error("fasta io error: {0}")]
    FastaIo(#[from] io::Error),

    #[error("csv missing column '{name}' in {path}. headers: {headers:?}")]
    CsvMissingColumn {
        name: String,
        headers: Vec<String>,
        path: String,
    },

    #[error("csv missing field at row {row} for column {column} in {path}")]
    CsvMissingField {
        row: usize,
        column: String,
        path: String,
    },

    #[error("csv invalid value '{value}' at row {row} for column {column} in {path}")]
    CsvInvalidField {
        row: usize,
        column: String,
        value: String,
        path: String,
    },

    #[error("csv invalid strand at row {row} in {path}: {source}")]
    CsvInvalidStrand {
        row: usize,
        path: String,
        #[source]
        source: Box<BioError>,
    },

    #[error("csv parse error in {path}: {source}")]
    CsvParse {
        path: String,
        #[source]
        source: csv::Error,
    },

    #[error("csv write error: {0}")]
    CsvWrite(#[from] csv::Error),
}

pub type BioResult<T> = Result<T, BioError>;
