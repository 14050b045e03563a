use crate::error::{BioError, BioResult};
use crate::locate::annotate::CodonHit;
use crate::locate::exon::Exon;
use crate::locate::orf::OrfFailure;
use crate::locate::progress::{Progress, ProgressScope};
use crate::locate::scan::CodonSpecs;
use crate::locate::{locate_transcript, TranscriptOutcome};
use crate::source::SequenceSource;
use indexmap::IndexMap;
use log::{debug, info, warn};

/// Logged when a run produces no rows at all.
pub const EMPTY_RESULT_HINT: &str = "no transcripts produced results. A transcript is only \
searched when its assembled coding sequence (1) starts with ATG, (2) ends with TAA, TAG or TGA, \
(3) has a length divisible by 3, and (4) contains no other in-frame stop codon. Check that the \
exon table and the reference use the same genome build and 1-based inclusive coordinates.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocateConfig {
    pub specs: CodonSpecs,
    /// Number of transcripts processed concurrently; 1 runs sequentially.
    pub workers: usize,
}

impl Default for LocateConfig {
    fn default() -> Self {
        Self {
            specs: CodonSpecs::default(),
            workers: 1,
        }
    }
}

impl LocateConfig {
    pub fn with_specs(mut self, specs: CodonSpecs) -> Self {
        self.specs = specs;
        self
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }
}

/// Rows of a run together with the transcripts that produced none.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LocateReport {
    /// Grouped by transcript in input order, each group sorted by CDS coordinate.
    pub rows: Vec<CodonHit>,
    /// Distinct transcripts in the input.
    pub transcripts: usize,
    pub orf_failures: Vec<(Box<str>, OrfFailure)>,
    pub fetch_failures: Vec<(Box<str>, String)>,
}

impl LocateReport {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Transcripts that contributed no rows.
    pub fn excluded(&self) -> usize {
        self.orf_failures.len() + self.fetch_failures.len()
    }
}

/// Exons grouped by transcript id, in order of first appearance.
pub fn group_by_transcript(exons: &[Exon]) -> IndexMap<Box<str>, Vec<Exon>> {
    let mut groups: IndexMap<Box<str>, Vec<Exon>> = IndexMap::new();
    for exon in exons {
        groups
            .entry(exon.transcript_id.clone())
            .or_default()
            .push(exon.clone());
    }
    groups
}

/// Fatal checks that must pass before any transcript is processed.
pub fn check_inputs<S>(exons: &[Exon], source: &S, config: &LocateConfig) -> BioResult<()>
where
    S: SequenceSource + ?Sized,
{
    if config.workers == 0 {
        return Err(BioError::InvalidWorkers {
            workers: config.workers,
        });
    }
    if let Some(exon) = exons.iter().find(|e| !source.contains(&e.chromosome)) {
        return Err(BioError::UnknownChromosome {
            chromosome: exon.chromosome.to_string(),
        });
    }
    Ok(())
}

/// Locate codon hits across every transcript of an exon table.
///
/// Input errors abort before any work starts. After that, a transcript that
/// fails ORF validation or whose sequence cannot be fetched is recorded in
/// the report and never affects the others.
pub fn locate_codons<S, P>(
    exons: &[Exon],
    source: &S,
    config: &LocateConfig,
    progress: &P,
) -> BioResult<LocateReport>
where
    S: SequenceSource + ?Sized,
    P: Progress + ?Sized,
{
    check_inputs(exons, source, config)?;

    let groups: Vec<(Box<str>, Vec<Exon>)> = group_by_transcript(exons).into_iter().collect();
    let scope = ProgressScope::start(progress, groups.len());
    let work = |(transcript_id, tx_exons): &(Box<str>, Vec<Exon>)| {
        let outcome = locate_transcript(tx_exons, source, &config.specs);
        scope.advance(transcript_id);
        (transcript_id.clone(), outcome)
    };

    let outcomes: Vec<(Box<str>, BioResult<TranscriptOutcome>)> = if config.workers > 1 {
        run_parallel(&groups, config.workers, &work)
    } else {
        seq_map!(groups, work)
    };
    drop(scope);

    let mut report = LocateReport {
        transcripts: groups.len(),
        ..LocateReport::default()
    };
    for (transcript_id, outcome) in outcomes {
        match outcome {
            Ok(TranscriptOutcome::Rows(rows)) => report.rows.extend(rows),
            Ok(TranscriptOutcome::Excluded(failure)) => {
                debug!("transcript {transcript_id} excluded: {failure}");
                report.orf_failures.push((transcript_id, failure));
            }
            Err(err) => {
                warn!("transcript {transcript_id} skipped: {err}");
                report.fetch_failures.push((transcript_id, err.to_string()));
            }
        }
    }

    info!(
        "located {} rows across {} transcripts ({} failed ORF checks, {} could not be fetched)",
        report.rows.len(),
        report.transcripts,
        report.orf_failures.len(),
        report.fetch_failures.len()
    );
    if report.is_empty() {
        warn!("{EMPTY_RESULT_HINT}");
    }
    Ok(report)
}

#[cfg(feature = "parallel")]
fn run_parallel<T, R, F>(items: &[T], workers: usize, work: &F) -> Vec<R>
where
    T: Sync,
    R: Send,
    F: Fn(&T) -> R + Sync,
{
    match rayon::ThreadPoolBuilder::new().num_threads(workers).build() {
        Ok(pool) => pool.install(|| par_map!(items, work)),
        Err(err) => {
            warn!("could not start {workers} workers ({err}); running sequentially");
            seq_map!(items, work)
        }
    }
}

#[cfg(not(feature = "parallel"))]
fn run_parallel<T, R, F>(items: &[T], _workers: usize, work: &F) -> Vec<R>
where
    F: Fn(&T) -> R,
{
    seq_map!(items, work)
}
