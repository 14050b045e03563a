#[macro_use]
mod par;

pub mod alphabets;
pub mod error;
pub mod io;
pub mod locate;
pub mod seq;
pub mod source;

pub use error::{BioError, BioResult};
pub use locate::{locate_codons, CodonHit, CodonSpecs, Exon, LocateConfig, LocateReport};
pub use source::{Genome, SequenceSource};
