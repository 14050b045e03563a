pub mod codon;
pub mod dna;
pub mod record;
pub mod strand;

pub use dna::DnaSeq;
pub use record::SeqRecord;
pub use strand::Strand;
