use crate::error::{BioError, BioResult};
use crate::io::fasta;
use crate::seq::dna::DnaSeq;
use crate::seq::record::SeqRecord;
use crate::seq::strand::Strand;
use std::collections::HashMap;
use std::path::Path;

/// Read-only access to reference bases, shared across workers.
pub trait SequenceSource: Send + Sync {
    fn contains(&self, chromosome: &str) -> bool;

    /// Bases of the 1-based inclusive interval `[min(start,end), max(start,end)]`,
    /// reverse-complemented when `strand` is `Minus`.
    fn fetch(&self, chromosome: &str, strand: Strand, start: u64, end: u64) -> BioResult<DnaSeq>;
}

/// Whole reference held in memory, keyed by FASTA identifier.
#[derive(Clone, Debug, Default)]
pub struct Genome {
    chromosomes: HashMap<Box<str>, DnaSeq>,
}

impl Genome {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = SeqRecord>,
    {
        let mut genome = Self::new();
        for record in records {
            let (id, seq) = record.into_parts();
            genome.insert(id, seq);
        }
        genome
    }

    pub fn from_fasta_path(path: impl AsRef<Path>) -> BioResult<Self> {
        Ok(Self::from_records(fasta::read_fasta_records_from_path(
            path,
        )?))
    }

    pub fn from_fasta_bytes(data: &[u8]) -> BioResult<Self> {
        Ok(Self::from_records(fasta::read_fasta_records_from_bytes(
            data,
        )?))
    }

    /// Soft-masked (lower-case) bases are stored upper-case.
    pub fn insert(&mut self, chromosome: impl Into<Box<str>>, seq: DnaSeq) {
        self.chromosomes
            .insert(chromosome.into(), seq.to_ascii_uppercase());
    }

    pub fn chromosome_len(&self, chromosome: &str) -> Option<usize> {
        self.chromosomes.get(chromosome).map(DnaSeq::len)
    }

    pub fn len(&self) -> usize {
        self.chromosomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chromosomes.is_empty()
    }
}

impl SequenceSource for Genome {
    fn contains(&self, chromosome: &str) -> bool {
        self.chromosomes.contains_key(chromosome)
    }

    fn fetch(&self, chromosome: &str, strand: Strand, start: u64, end: u64) -> BioResult<DnaSeq> {
        let seq = self
            .chromosomes
            .get(chromosome)
            .ok_or_else(|| BioError::UnknownChromosome {
                chromosome: chromosome.to_string(),
            })?;
        let (lo, hi) = (start.min(end), start.max(end));
        if lo == 0 || hi > seq.len() as u64 {
            return Err(BioError::IntervalOutOfBounds {
                chromosome: chromosome.to_string(),
                start: lo,
                end: hi,
                len: seq.len(),
            });
        }
        let bases = seq.slice(lo as usize - 1, hi as usize);
        Ok(match strand {
            Strand::Plus => bases,
            Strand::Minus => bases.reverse_complement(),
        })
    }
}
