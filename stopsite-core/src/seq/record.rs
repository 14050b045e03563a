use crate::seq::dna::DnaSeq;

/// A named sequence, as read from one FASTA entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeqRecord {
    pub id: Box<str>,
    pub desc: Option<Box<str>>,
    pub seq: DnaSeq,
}

impl SeqRecord {
    pub fn new(id: impl Into<Box<str>>, seq: DnaSeq) -> Self {
        Self {
            id: id.into(),
            desc: None,
            seq,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn desc(&self) -> Option<&str> {
        self.desc.as_deref()
    }

    pub fn seq(&self) -> &DnaSeq {
        &self.seq
    }

    pub fn into_parts(self) -> (Box<str>, DnaSeq) {
        (self.id, self.seq)
    }
}
