//! Standard genetic code for DNA codons.

use std::sync::LazyLock;

pub const START_CODON: &[u8; 3] = b"ATG";
pub const STOP_CODONS: [&[u8; 3]; 3] = [b"TAA", b"TAG", b"TGA"];

/// Translate one codon to its single-letter residue; `*` for stop, `X` when
/// any base is ambiguous or the slice is not three bases long.
pub fn translate_codon(codon: &[u8]) -> u8 {
    if codon.len() != 3 {
        return b'X';
    }
    let i1 = BASE_INDEX[codon[0] as usize];
    let i2 = BASE_INDEX[codon[1] as usize];
    let i3 = BASE_INDEX[codon[2] as usize];
    if i1 < 4 && i2 < 4 && i3 < 4 {
        let idx = ((i1 as usize) << 4) | ((i2 as usize) << 2) | (i3 as usize);
        CODON_TABLE[idx]
    } else {
        b'X'
    }
}

#[inline]
pub fn is_start(codon: &[u8]) -> bool {
    codon.eq_ignore_ascii_case(START_CODON)
}

#[inline]
pub fn is_stop(codon: &[u8]) -> bool {
    STOP_CODONS.iter().any(|stop| codon.eq_ignore_ascii_case(*stop))
}

static BASE_INDEX: LazyLock<[u8; 256]> = LazyLock::new(|| {
    let mut map = [255u8; 256];
    for (i, (&upper, &lower)) in b"ACGT".iter().zip(b"acgt".iter()).enumerate() {
        map[upper as usize] = i as u8;
        map[lower as usize] = i as u8;
    }
    map
});

// A=0 C=1 G=2 T=3, index = first*16 + second*4 + third
const CODON_TABLE: [u8; 64] = *b"KNKNTTTTRSRSIIMIQHQHPPPPRRRRLLLLEDEDAAAAGGGGVVVV*Y*YSSSS*CWCLFLF";
