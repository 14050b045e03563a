use crate::error::{BioError, BioResult};
use crate::locate::index::ExonIndex;
use crate::locate::scan::ScanHit;
use crate::seq::codon;
use crate::seq::strand::Strand;

/// Edits further than this many coding bases upstream of the last
/// exon-exon junction are predicted to trigger nonsense-mediated decay.
pub const NMD_JUNCTION_DISTANCE: i64 = 56;

/// Transcript-level values repeated on every output row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TranscriptContext {
    pub transcript_id: Box<str>,
    pub gene_id: Box<str>,
    pub cds_length: usize,
}

impl TranscriptContext {
    pub fn peptide_length(&self) -> usize {
        self.cds_length / 3
    }
}

/// One annotated codon hit. A searched transcript with no hits is reported
/// as a single row whose per-hit fields are all `None`.
#[derive(Clone, Debug, PartialEq)]
pub struct CodonHit {
    pub transcript_id: Box<str>,
    pub gene_id: Box<str>,
    pub exon_rank: Option<u32>,
    pub peptide_length: usize,
    pub cds_length: usize,
    pub chromosome: Option<Box<str>>,
    pub coding_strand: Option<Strand>,
    pub guide_strand: Option<Strand>,
    pub target_residue: Option<char>,
    pub codon: Option<Box<str>>,
    pub peptide_coordinate: Option<usize>,
    pub cds_coordinate: Option<usize>,
    pub genome_coordinate: Option<u64>,
    pub nmd_predicted: Option<bool>,
    pub relative_position: Option<f64>,
}

impl CodonHit {
    pub fn empty(ctx: &TranscriptContext) -> Self {
        Self {
            transcript_id: ctx.transcript_id.clone(),
            gene_id: ctx.gene_id.clone(),
            exon_rank: None,
            peptide_length: ctx.peptide_length(),
            cds_length: ctx.cds_length,
            chromosome: None,
            coding_strand: None,
            guide_strand: None,
            target_residue: None,
            codon: None,
            peptide_coordinate: None,
            cds_coordinate: None,
            genome_coordinate: None,
            nmd_predicted: None,
            relative_position: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cds_coordinate.is_none()
    }
}

#[inline]
pub fn peptide_coordinate(cds_coordinate: usize) -> usize {
    cds_coordinate.div_ceil(3)
}

/// First coding position at which a premature stop is no longer predicted
/// to trigger NMD. Negative when the final exon starts within the window.
pub fn nmd_boundary(index: &ExonIndex) -> i64 {
    index.final_exon_start().unwrap_or(1) as i64 - NMD_JUNCTION_DISTANCE
}

/// Annotate scanner hits against the transcript's exon index. Output is
/// sorted by CDS coordinate, ties in specification order.
pub fn annotate(
    mut hits: Vec<ScanHit>,
    index: &ExonIndex,
    ctx: &TranscriptContext,
) -> BioResult<Vec<CodonHit>> {
    if hits.is_empty() {
        return Ok(vec![CodonHit::empty(ctx)]);
    }
    hits.sort_by_key(|h| (h.cds_coordinate, h.spec_index));

    let boundary = nmd_boundary(index);
    let mut rows = Vec::with_capacity(hits.len());
    for hit in hits {
        let base = index
            .get(hit.cds_coordinate)
            .ok_or_else(|| BioError::IndexLengthMismatch {
                transcript_id: ctx.transcript_id.to_string(),
                index: index.len(),
                seq: ctx.cds_length,
            })?;
        let guide_strand = if hit.spec.switch_strand {
            base.strand.complement()
        } else {
            base.strand
        };
        rows.push(CodonHit {
            transcript_id: ctx.transcript_id.clone(),
            gene_id: ctx.gene_id.clone(),
            exon_rank: Some(base.exon_rank),
            peptide_length: ctx.peptide_length(),
            cds_length: ctx.cds_length,
            chromosome: Some(base.chromosome.into()),
            coding_strand: Some(base.strand),
            guide_strand: Some(guide_strand),
            target_residue: Some(codon::translate_codon(&hit.spec.codon) as char),
            codon: Some(hit.spec.codon_str().into()),
            peptide_coordinate: Some(peptide_coordinate(hit.cds_coordinate)),
            cds_coordinate: Some(hit.cds_coordinate),
            genome_coordinate: Some(base.genome_coordinate),
            nmd_predicted: Some((hit.cds_coordinate as i64) < boundary),
            relative_position: Some(hit.cds_coordinate as f64 / ctx.cds_length as f64),
        });
    }
    Ok(rows)
}
