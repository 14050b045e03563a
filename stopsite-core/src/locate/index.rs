use crate::locate::exon::Exon;
use crate::seq::strand::Strand;

/// Per-exon context shared by every base the exon contributes.
#[derive(Clone, Debug, PartialEq, Eq)]
struct ExonSlot {
    rank: u32,
    chromosome: Box<str>,
    strand: Strand,
}

/// What the index knows about a single coding base.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IndexedBase<'a> {
    pub genome_coordinate: u64,
    pub chromosome: &'a str,
    pub strand: Strand,
    pub exon_rank: u32,
}

/// Maps 1-based CDS coordinates to genome coordinate, chromosome, strand
/// and exon rank. Built once per transcript and read-only afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExonIndex {
    positions: Vec<u64>,
    slots: Vec<u32>,
    exons: Vec<ExonSlot>,
}

impl ExonIndex {
    /// `exons` must already be in ascending `exon_rank` order.
    pub fn build(exons: &[Exon]) -> Self {
        let total: usize = exons.iter().map(Exon::span).sum();
        let mut positions = Vec::with_capacity(total);
        let mut slots = Vec::with_capacity(total);
        let mut slot_info = Vec::with_capacity(exons.len());

        for (slot, exon) in exons.iter().enumerate() {
            positions.extend(exon.strand.positions(exon.start, exon.end));
            slots.resize(positions.len(), slot as u32);
            slot_info.push(ExonSlot {
                rank: exon.exon_rank,
                chromosome: exon.chromosome.clone(),
                strand: exon.strand,
            });
        }
        debug_assert_eq!(positions.len(), total);

        Self {
            positions,
            slots,
            exons: slot_info,
        }
    }

    /// Total coding length covered by the index.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn get(&self, cds_coordinate: usize) -> Option<IndexedBase<'_>> {
        let i = cds_coordinate.checked_sub(1)?;
        let genome_coordinate = *self.positions.get(i)?;
        let slot = &self.exons[self.slots[i] as usize];
        Some(IndexedBase {
            genome_coordinate,
            chromosome: &slot.chromosome,
            strand: slot.strand,
            exon_rank: slot.rank,
        })
    }

    pub fn genome_coordinates(&self) -> &[u64] {
        &self.positions
    }

    /// CDS coordinate of the first base contributed by the highest-ranked exon.
    pub fn final_exon_start(&self) -> Option<usize> {
        let last_rank = self.exons.iter().map(|e| e.rank).max()?;
        self.slots
            .iter()
            .position(|&slot| self.exons[slot as usize].rank == last_rank)
            .map(|i| i + 1)
    }
}
