#![allow(clippy::useless_conversion)]

use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::{PyDict, PyModule};

use crate::utils::map_bio_err;
use stopsite_core::error::BioResult;
use stopsite_core::io::csv as core_csv;
use stopsite_core::locate::{
    self as core_locate, CodonHit, CodonSpecs, LocateConfig, LocateReport as CoreLocateReport,
    NoProgress, Progress,
};
use stopsite_core::source::Genome;

struct BarProgress {
    bar: ProgressBar,
}

impl BarProgress {
    fn new() -> Self {
        let bar = ProgressBar::new(0);
        let bar = match ProgressStyle::with_template(
            "[{elapsed}] {bar:40.cyan/blue} {human_pos:>7}/{human_len:7} transcripts (eta: {eta})",
        ) {
            Ok(style) => bar.with_style(style),
            Err(_) => bar,
        };
        Self { bar }
    }
}

impl Progress for BarProgress {
    fn start(&self, total: usize) {
        self.bar.set_length(total as u64);
    }

    fn advance(&self, _transcript_id: &str) {
        self.bar.inc(1);
    }

    fn finish(&self) {
        self.bar.finish();
    }
}

#[pyclass(frozen)]
pub struct LocateReport {
    inner: CoreLocateReport,
}

#[pymethods]
impl LocateReport {
    /// One dict per row, keyed by output column name.
    #[getter]
    fn rows(&self, py: Python<'_>) -> PyResult<Vec<PyObject>> {
        self.inner
            .rows
            .iter()
            .map(|row| hit_to_pydict(py, row))
            .collect()
    }

    #[getter]
    fn n_transcripts(&self) -> usize {
        self.inner.transcripts
    }

    /// `(transcript_id, reason)` for transcripts that are not valid ORFs.
    #[getter]
    fn orf_failures(&self) -> Vec<(String, String)> {
        self.inner
            .orf_failures
            .iter()
            .map(|(id, failure)| (id.to_string(), failure.to_string()))
            .collect()
    }

    /// `(transcript_id, error)` for transcripts whose sequence could not be read.
    #[getter]
    fn fetch_failures(&self) -> Vec<(String, String)> {
        self.inner
            .fetch_failures
            .iter()
            .map(|(id, err)| (id.to_string(), err.clone()))
            .collect()
    }

    fn write_csv(&self, py: Python<'_>, path: &str) -> PyResult<()> {
        py.allow_threads(|| core_csv::write_hits(path, &self.inner.rows))
            .map_err(map_bio_err)
    }

    fn __len__(&self) -> usize {
        self.inner.rows.len()
    }

    fn __repr__(&self) -> String {
        format!(
            "LocateReport(rows={}, n_transcripts={}, orf_failures={}, fetch_failures={})",
            self.inner.rows.len(),
            self.inner.transcripts,
            self.inner.orf_failures.len(),
            self.inner.fetch_failures.len()
        )
    }
}

fn hit_to_pydict(py: Python<'_>, row: &CodonHit) -> PyResult<PyObject> {
    let dict = PyDict::new_bound(py);
    dict.set_item("transcript_id", row.transcript_id.as_ref())?;
    dict.set_item("gene_id", row.gene_id.as_ref())?;
    dict.set_item("exon_rank", row.exon_rank)?;
    dict.set_item("peptide_length", row.peptide_length)?;
    dict.set_item("cds_length", row.cds_length)?;
    dict.set_item("chromosome", row.chromosome.as_deref())?;
    dict.set_item("coding_strand", row.coding_strand.map(|s| s.to_string()))?;
    dict.set_item("guide_strand", row.guide_strand.map(|s| s.to_string()))?;
    dict.set_item("target_residue", row.target_residue.map(String::from))?;
    dict.set_item("codon", row.codon.as_deref())?;
    dict.set_item("peptide_coordinate", row.peptide_coordinate)?;
    dict.set_item("cds_coordinate", row.cds_coordinate)?;
    dict.set_item("genome_coordinate", row.genome_coordinate)?;
    dict.set_item("nmd_predicted", row.nmd_predicted)?;
    dict.set_item("relative_position", row.relative_position)?;
    Ok(dict.to_object(py))
}

fn codon_specs(
    codons: Option<Vec<String>>,
    offsets: Option<Vec<usize>>,
    switch_strand: Option<Vec<bool>>,
) -> PyResult<CodonSpecs> {
    match (codons, offsets, switch_strand) {
        (None, None, None) => Ok(CodonSpecs::default()),
        (Some(codons), Some(offsets), Some(switch_strand)) => {
            CodonSpecs::new(codons.as_slice(), &offsets, &switch_strand).map_err(map_bio_err)
        }
        _ => Err(PyValueError::new_err(
            "codons, offsets and switch_strand must be given together",
        )),
    }
}

/// Read an exon table and a FASTA reference, then locate codon hits in
/// every transcript.
#[pyfunction]
#[pyo3(signature = (
    exons_path,
    genome_path,
    *,
    codons=None,
    offsets=None,
    switch_strand=None,
    workers=1,
    progress=false
))]
#[allow(clippy::too_many_arguments)]
fn locate_codons(
    py: Python<'_>,
    exons_path: &str,
    genome_path: &str,
    codons: Option<Vec<String>>,
    offsets: Option<Vec<usize>>,
    switch_strand: Option<Vec<bool>>,
    workers: usize,
    progress: bool,
) -> PyResult<LocateReport> {
    let config = LocateConfig::default()
        .with_specs(codon_specs(codons, offsets, switch_strand)?)
        .with_workers(workers);

    let inner = py
        .allow_threads(|| -> BioResult<CoreLocateReport> {
            let exons = core_csv::read_exon_table(exons_path)?;
            let genome = Genome::from_fasta_path(genome_path)?;
            info!(
                "loaded {} exons and {} reference sequences",
                exons.len(),
                genome.len()
            );
            if progress {
                core_locate::locate_codons(&exons, &genome, &config, &BarProgress::new())
            } else {
                core_locate::locate_codons(&exons, &genome, &config, &NoProgress)
            }
        })
        .map_err(map_bio_err)?;
    Ok(LocateReport { inner })
}

pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<LocateReport>()?;
    m.add_function(wrap_pyfunction!(locate_codons, m)?)?;
    Ok(())
}
