//! Per-transcript codon location: exon index, ORF assembly and validation,
//! codon scanning, and coordinate annotation, plus the batch orchestrator
//! that runs them over a whole exon table.

pub mod annotate;
pub mod batch;
pub mod exon;
pub mod index;
pub mod orf;
pub mod progress;
pub mod scan;

pub use annotate::{CodonHit, TranscriptContext, NMD_JUNCTION_DISTANCE};
pub use batch::{locate_codons, LocateConfig, LocateReport, EMPTY_RESULT_HINT};
pub use exon::Exon;
pub use index::ExonIndex;
pub use orf::OrfFailure;
pub use progress::{NoProgress, Progress, ProgressFn};
pub use scan::{CodonSpec, CodonSpecs};


use crate::error::{BioError, BioResult};
use crate::source::SequenceSource;

/// Result of running the pipeline on one transcript.
#[derive(Clone, Debug, PartialEq)]
pub enum TranscriptOutcome {
    /// At least one row; a single empty row when nothing matched.
    Rows(Vec<CodonHit>),
    /// Assembled sequence is not a valid ORF.
    Excluded(OrfFailure),
}

/// Run index building, assembly, validation, scanning and annotation for
/// the exons of a single transcript, given in any order.
pub fn locate_transcript<S>(
    exons: &[Exon],
    source: &S,
    specs: &CodonSpecs,
) -> BioResult<TranscriptOutcome>
where
    S: SequenceSource + ?Sized,
{
    let Some(first) = exons.first() else {
        return Ok(TranscriptOutcome::Excluded(OrfFailure::MissingStart));
    };
    let mut exons = exons.to_vec();
    exons.sort_by_key(|e| e.exon_rank);

    let index = ExonIndex::build(&exons);
    let cds = orf::assemble(&exons, source)?;
    cds.validate_coding()?;
    if cds.len() != index.len() {
        return Err(BioError::IndexLengthMismatch {
            transcript_id: first.transcript_id.to_string(),
            index: index.len(),
            seq: cds.len(),
        });
    }
    let cds = cds.to_ascii_uppercase();

    if let Err(failure) = orf::validate(&cds) {
        return Ok(TranscriptOutcome::Excluded(failure));
    }

    let ctx = TranscriptContext {
        transcript_id: first.transcript_id.clone(),
        gene_id: first.gene_id.clone(),
        cds_length: cds.len(),
    };
    let hits = scan::scan(&cds, specs);
    Ok(TranscriptOutcome::Rows(annotate::annotate(hits, &index, &ctx)?))
}
