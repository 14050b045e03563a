use crate::alphabets::dna;
use crate::error::{BioError, BioResult};
use crate::seq::dna::DnaSeq;

/// One codon to search for, and which of its bases is the edit target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CodonSpec {
    pub codon: [u8; 3],
    /// 1-based base within the codon, in `1..=3`.
    pub offset: u8,
    /// Guide acts on the strand opposite the coding strand.
    pub switch_strand: bool,
}

impl CodonSpec {
    pub fn codon_str(&self) -> &str {
        // always A/C/G/T, see CodonSpecs::new
        std::str::from_utf8(&self.codon).unwrap_or("NNN")
    }
}

/// Validated list of codon specifications, kept in caller order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodonSpecs {
    specs: Vec<CodonSpec>,
}

impl CodonSpecs {
    /// Build from three parallel lists. Codons are case-insensitive.
    pub fn new<C: AsRef<str>>(
        codons: &[C],
        offsets: &[usize],
        switch_strand: &[bool],
    ) -> BioResult<Self> {
        if codons.len() != offsets.len() || codons.len() != switch_strand.len() {
            return Err(BioError::CodonSpecLenMismatch {
                codons: codons.len(),
                offsets: offsets.len(),
                switch_strand: switch_strand.len(),
            });
        }

        let alphabet = dna::alphabet();
        let mut specs = Vec::with_capacity(codons.len());
        for (index, ((codon, &offset), &switch)) in codons
            .iter()
            .zip(offsets)
            .zip(switch_strand)
            .enumerate()
        {
            let raw = codon.as_ref().trim();
            if raw.len() != 3 || !alphabet.is_word(raw.as_bytes()) {
                return Err(BioError::InvalidCodon {
                    codon: raw.to_string(),
                    index,
                });
            }
            if !(1..=3).contains(&offset) {
                return Err(BioError::InvalidOffset { offset, index });
            }
            let mut bases = [0u8; 3];
            bases.copy_from_slice(&raw.as_bytes().to_ascii_uppercase());
            specs.push(CodonSpec {
                codon: bases,
                offset: offset as u8,
                switch_strand: switch,
            });
        }
        Ok(Self { specs })
    }

    pub fn as_slice(&self) -> &[CodonSpec] {
        &self.specs
    }

    pub fn iter(&self) -> impl Iterator<Item = &CodonSpec> {
        self.specs.iter()
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

impl Default for CodonSpecs {
    /// CAA/CAG/CGA at base 1 on the coding strand and TGG at bases 2 and 3
    /// on the opposite strand: the single-base edits that can create a stop.
    fn default() -> Self {
        let spec = |codon: &[u8; 3], offset: u8, switch_strand: bool| CodonSpec {
            codon: *codon,
            offset,
            switch_strand,
        };
        Self {
            specs: vec![
                spec(b"CAA", 1, false),
                spec(b"CAG", 1, false),
                spec(b"CGA", 1, false),
                spec(b"TGG", 2, true),
                spec(b"TGG", 3, true),
            ],
        }
    }
}

/// A codon match before coordinate annotation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScanHit {
    /// 1-based CDS coordinate of the targeted base.
    pub cds_coordinate: usize,
    /// Position of the matching specification in its `CodonSpecs`.
    pub spec_index: usize,
    pub spec: CodonSpec,
}

/// Every in-frame occurrence of every specification. Each specification is
/// matched independently, so a codon listed twice yields two hits per site.
pub fn scan(cds: &DnaSeq, specs: &CodonSpecs) -> Vec<ScanHit> {
    let mut hits = Vec::new();
    for (spec_index, spec) in specs.iter().enumerate() {
        for (i, codon) in cds.codons().enumerate() {
            if codon.eq_ignore_ascii_case(&spec.codon) {
                hits.push(ScanHit {
                    cds_coordinate: i * 3 + spec.offset as usize,
                    spec_index,
                    spec: *spec,
                });
            }
        }
    }
    hits
}
