use crate::error::BioResult;
use crate::locate::exon::Exon;
use crate::seq::codon;
use crate::seq::dna::DnaSeq;
use crate::source::SequenceSource;
use std::fmt;

/// Why an assembled coding sequence is not a usable open reading frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrfFailure {
    /// First codon is not `ATG`.
    MissingStart,
    /// Length is not a multiple of three.
    OutOfFrame { len: usize },
    /// Last codon is not `TAA`, `TAG` or `TGA`.
    MissingStop,
    /// More than one in-frame stop codon.
    InternalStop { stops: usize },
}

impl fmt::Display for OrfFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrfFailure::MissingStart => write!(f, "does not start with ATG"),
            OrfFailure::OutOfFrame { len } => {
                write!(f, "length {len} is not a multiple of 3")
            }
            OrfFailure::MissingStop => write!(f, "does not end with a stop codon"),
            OrfFailure::InternalStop { stops } => {
                write!(f, "contains {stops} in-frame stop codons (expected 1)")
            }
        }
    }
}

/// Concatenate the strand-corrected bases of each exon in the given order.
pub fn assemble<S>(exons: &[Exon], source: &S) -> BioResult<DnaSeq>
where
    S: SequenceSource + ?Sized,
{
    let total = exons.iter().map(Exon::span).sum();
    let mut cds = DnaSeq::from_bytes_unchecked(Vec::with_capacity(total));
    for exon in exons {
        let bases = source.fetch(&exon.chromosome, exon.strand, exon.start, exon.end)?;
        cds.extend_from(&bases);
    }
    Ok(cds)
}

pub fn validate(cds: &DnaSeq) -> Result<(), OrfFailure> {
    let bytes = cds.as_bytes();
    let len = bytes.len();
    if len < 3 || !codon::is_start(&bytes[..3]) {
        return Err(OrfFailure::MissingStart);
    }
    if len % 3 != 0 {
        return Err(OrfFailure::OutOfFrame { len });
    }
    if !codon::is_stop(&bytes[len - 3..]) {
        return Err(OrfFailure::MissingStop);
    }
    let stops = cds.codons().filter(|c| codon::is_stop(c)).count();
    if stops != 1 {
        return Err(OrfFailure::InternalStop { stops });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seq::strand::Strand;
    use crate::source::Genome;

    fn orf(bases: &[u8]) -> Result<(), OrfFailure> {
        validate(&DnaSeq::new(bases.to_vec()).unwrap())
    }

    #[test]
    fn accepts_minimal_orfs() {
        assert_eq!(orf(b"ATGTAA"), Ok(()));
        assert_eq!(orf(b"ATGCAATAG"), Ok(()));
        assert_eq!(orf(b"atgcaatga"), Ok(()));
    }

    #[test]
    fn rejects_each_criterion() {
        assert_eq!(orf(b"GTGCAATAA"), Err(OrfFailure::MissingStart));
        assert_eq!(orf(b"AT"), Err(OrfFailure::MissingStart));
        assert_eq!(orf(b""), Err(OrfFailure::MissingStart));
        assert_eq!(orf(b"ATGCAATAAA"), Err(OrfFailure::OutOfFrame { len: 10 }));
        assert_eq!(orf(b"ATGCAACAA"), Err(OrfFailure::MissingStop));
        assert_eq!(
            orf(b"ATGTAACAATAA"),
            Err(OrfFailure::InternalStop { stops: 2 })
        );
    }

    #[test]
    fn out_of_frame_stop_is_not_internal() {
        // TAA straddles codons 2 and 3 and does not count
        assert_eq!(orf(b"ATGCTAACATAA"), Ok(()));
    }

    #[test]
    fn assemble_in_rank_order() {
        let genome = Genome::from_fasta_bytes(b">chr1\nATGCCCCCAATAA\n").unwrap();
        let exons = vec![
            Exon::new("T1", "G1", 1, "chr1", Strand::Plus, 1, 3),
            Exon::new("T1", "G1", 2, "chr1", Strand::Plus, 10, 13),
        ];
        let cds = assemble(&exons, &genome).unwrap();
        assert_eq!(cds.as_bytes(), b"ATGATAA");
    }

    #[test]
    fn assemble_propagates_fetch_errors() {
        let genome = Genome::from_fasta_bytes(b">chr1\nATGTAA\n").unwrap();
        let exons = vec![Exon::new("T1", "G1", 1, "chr1", Strand::Plus, 1, 60)];
        assert!(assemble(&exons, &genome).is_err());
    }
}
