use crate::seq::strand::Strand;

/// One coding exon of a transcript, in genomic (not coding) orientation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Exon {
    pub transcript_id: Box<str>,
    pub gene_id: Box<str>,
    /// 1-based position of this exon in coding order.
    pub exon_rank: u32,
    pub chromosome: Box<str>,
    pub strand: Strand,
    pub start: u64,
    pub end: u64,
}

impl Exon {
    /// Bounds are stored so that `start <= end`.
    pub fn new(
        transcript_id: impl Into<Box<str>>,
        gene_id: impl Into<Box<str>>,
        exon_rank: u32,
        chromosome: impl Into<Box<str>>,
        strand: Strand,
        start: u64,
        end: u64,
    ) -> Self {
        Self {
            transcript_id: transcript_id.into(),
            gene_id: gene_id.into(),
            exon_rank,
            chromosome: chromosome.into(),
            strand,
            start: start.min(end),
            end: start.max(end),
        }
    }

    /// Number of bases spanned, `|end - start| + 1`.
    pub fn span(&self) -> usize {
        (self.end.abs_diff(self.start) + 1) as usize
    }
}
