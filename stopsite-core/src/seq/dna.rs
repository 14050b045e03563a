use crate::alphabets::dna;
use crate::error::{BioError, BioResult};

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DnaSeq {
    bytes: Vec<u8>,
}

impl DnaSeq {
    pub fn new(bytes: Vec<u8>) -> BioResult<Self> {
        if let Some((pos, b)) = dna::iupac_alphabet().first_invalid(&bytes) {
            return Err(BioError::InvalidChar { ch: b as char, pos });
        }
        Ok(Self { bytes })
    }

    #[inline]
    pub(crate) fn from_bytes_unchecked(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn reverse_complement(&self) -> Self {
        let out = dna::reverse_complement(self.as_bytes());
        Self { bytes: out }
    }

    pub fn to_ascii_uppercase(&self) -> Self {
        Self {
            bytes: self.bytes.to_ascii_uppercase(),
        }
    }

    /// Copy of the 0-based half-open range `start..end`.
    pub fn slice(&self, start: usize, end: usize) -> Self {
        Self {
            bytes: self.bytes[start..end].to_vec(),
        }
    }

    pub fn extend_from(&mut self, other: &DnaSeq) {
        self.bytes.extend_from_slice(other.as_bytes());
    }

    /// Non-overlapping codons in frame 1; a trailing partial codon is not yielded.
    pub fn codons(&self) -> std::slice::ChunksExact<'_, u8> {
        self.bytes.chunks_exact(3)
    }

    /// Reject anything outside `A/C/G/T/N` (either case).
    pub fn validate_coding(&self) -> BioResult<()> {
        match dna::n_alphabet().first_invalid(&self.bytes) {
            Some((pos, b)) => Err(BioError::InvalidChar { ch: b as char, pos }),
            None => Ok(()),
        }
    }
}

impl std::fmt::Display for DnaSeq {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_invalid_char() {
        let err = DnaSeq::new(b"AC#T".to_vec()).unwrap_err();
        match err {
            BioError::InvalidChar { ch, pos } => {
                assert_eq!(ch, '#');
                assert_eq!(pos, 2);
            }
            other => panic!("expected invalid char error, got {other:?}"),
        }
    }

    #[test]
    fn reverse_complement_basic() {
        let s = DnaSeq::new(b"ATGCAA".to_vec()).unwrap();
        assert_eq!(s.reverse_complement().as_bytes(), b"TTGCAT");
    }

    #[test]
    fn codons_drop_partial_tail() {
        let s = DnaSeq::new(b"ATGCAAT".to_vec()).unwrap();
        let codons: Vec<&[u8]> = s.codons().collect();
        assert_eq!(codons, vec![&b"ATG"[..], &b"CAA"[..]]);
    }

    #[test]
    fn coding_validation_allows_n_only() {
        assert!(DnaSeq::new(b"ACGTN".to_vec()).unwrap().validate_coding().is_ok());
        assert!(DnaSeq::new(b"ACRT".to_vec()).unwrap().validate_coding().is_err());
    }

    #[test]
    fn slice_and_extend() {
        let s = DnaSeq::new(b"AACCGGTT".to_vec()).unwrap();
        let mut head = s.slice(0, 2);
        head.extend_from(&s.slice(6, 8));
        assert_eq!(head.as_bytes(), b"AATT");
    }
}
