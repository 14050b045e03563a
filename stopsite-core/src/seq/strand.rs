use crate::error::BioError;
use std::fmt;
use std::str::FromStr;

/// Strand of a genomic interval relative to the reference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strand {
    Plus,
    Minus,
}

impl Strand {
    pub fn complement(self) -> Self {
        match self {
            Strand::Plus => Strand::Minus,
            Strand::Minus => Strand::Plus,
        }
    }

    /// Genomic positions of `[start, end]` read 5'->3' on this strand.
    pub fn positions(self, start: u64, end: u64) -> Box<dyn Iterator<Item = u64>> {
        let (lo, hi) = (start.min(end), start.max(end));
        match self {
            Strand::Plus => Box::new(lo..=hi),
            Strand::Minus => Box::new((lo..=hi).rev()),
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Strand::Plus => '+',
            Strand::Minus => '-',
        }
    }
}

impl FromStr for Strand {
    type Err = BioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "+" => Ok(Strand::Plus),
            "-" => Ok(Strand::Minus),
            other => Err(BioError::InvalidStrand {
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Strand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse() {
        assert_eq!("+".parse::<Strand>().unwrap(), Strand::Plus);
        assert_eq!(" - ".parse::<Strand>().unwrap(), Strand::Minus);
        assert!(".".parse::<Strand>().is_err());
        assert!("plus".parse::<Strand>().is_err());
    }

    #[test]
    fn complement_is_involution() {
        for strand in [Strand::Plus, Strand::Minus] {
            assert_ne!(strand.complement(), strand);
            assert_eq!(strand.complement().complement(), strand);
        }
    }

    #[test]
    fn positions_follow_strand() {
        let plus: Vec<u64> = Strand::Plus.positions(10, 13).collect();
        let minus: Vec<u64> = Strand::Minus.positions(10, 13).collect();
        assert_eq!(plus, vec![10, 11, 12, 13]);
        assert_eq!(minus, vec![13, 12, 11, 10]);
        // swapped bounds describe the same interval
        let swapped: Vec<u64> = Strand::Plus.positions(13, 10).collect();
        assert_eq!(swapped, plus);
    }

    #[test]
    fn display() {
        assert_eq!(Strand::Plus.to_string(), "+");
        assert_eq!(Strand::Minus.to_string(), "-");
    }
}
