use crate::error::{BioError, BioResult};
use crate::locate::annotate::CodonHit;
use crate::locate::exon::Exon;
use crate::seq::strand::Strand;
use csv::{ReaderBuilder, StringRecord, Trim, WriterBuilder};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use std::str::FromStr;

/// Exon table columns with their accepted short aliases.
const EXON_COLUMNS: [(&str, Option<&str>); 7] = [
    ("transcript_id", Some("tx")),
    ("gene_id", Some("gene")),
    ("exon_rank", Some("exon")),
    ("chromosome", Some("chr")),
    ("strand", None),
    ("start", None),
    ("end", None),
];

/// Column order of the result table.
pub const HIT_COLUMNS: [&str; 15] = [
    "transcript_id",
    "gene_id",
    "exon_rank",
    "peptide_length",
    "cds_length",
    "chromosome",
    "coding_strand",
    "guide_strand",
    "target_residue",
    "codon",
    "peptide_coordinate",
    "cds_coordinate",
    "genome_coordinate",
    "nmd_predicted",
    "relative_position",
];

pub fn read_exon_table(path: impl AsRef<Path>) -> BioResult<Vec<Exon>> {
    let path_ref = path.as_ref();
    let path_str = path_ref.display().to_string();
    let file = File::open(path_ref).map_err(|e| BioError::CsvParse {
        path: path_str.clone(),
        source: csv::Error::from(e),
    })?;
    read_exon_table_from_reader(file, &path_str)
}

/// `label` names the source in error messages.
pub fn read_exon_table_from_reader<R: Read>(reader: R, label: &str) -> BioResult<Vec<Exon>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let headers = reader
        .headers()
        .map_err(|e| BioError::CsvParse {
            path: label.to_string(),
            source: e,
        })?
        .clone();
    let mut idx = [0usize; 7];
    for (slot, (name, alias)) in idx.iter_mut().zip(EXON_COLUMNS) {
        *slot = resolve_column(name, alias, &headers, label)?;
    }
    let [tx_idx, gene_idx, rank_idx, chr_idx, strand_idx, start_idx, end_idx] = idx;

    let mut exons = Vec::new();
    for (row_idx, result) in reader.records().enumerate() {
        let record = result.map_err(|e| BioError::CsvParse {
            path: label.to_string(),
            source: e,
        })?;
        let row = row_idx + 1;
        let field = |idx, column| get_field(&record, idx, column, row, label);

        let strand: Strand =
            field(strand_idx, "strand")?
                .parse()
                .map_err(|e| BioError::CsvInvalidStrand {
                    row,
                    path: label.to_string(),
                    source: Box::new(e),
                })?;
        exons.push(Exon::new(
            field(tx_idx, "transcript_id")?,
            field(gene_idx, "gene_id")?,
            parse_number(field(rank_idx, "exon_rank")?, row, "exon_rank", label)?,
            field(chr_idx, "chromosome")?,
            strand,
            parse_number(field(start_idx, "start")?, row, "start", label)?,
            parse_number(field(end_idx, "end")?, row, "end", label)?,
        ));
    }
    Ok(exons)
}

fn resolve_column(
    name: &str,
    alias: Option<&str>,
    headers: &StringRecord,
    path: &str,
) -> BioResult<usize> {
    headers
        .iter()
        .position(|h| h == name || Some(h) == alias)
        .ok_or_else(|| BioError::CsvMissingColumn {
            name: name.to_string(),
            headers: headers.iter().map(|s| s.to_string()).collect(),
            path: path.to_string(),
        })
}

fn get_field<'r>(
    record: &'r StringRecord,
    idx: usize,
    column: &str,
    row: usize,
    path: &str,
) -> BioResult<&'r str> {
    record.get(idx).ok_or_else(|| BioError::CsvMissingField {
        row,
        column: column.to_string(),
        path: path.to_string(),
    })
}

fn parse_number<T: FromStr>(value: &str, row: usize, column: &str, path: &str) -> BioResult<T> {
    value.parse().map_err(|_| BioError::CsvInvalidField {
        row,
        column: column.to_string(),
        value: value.to_string(),
        path: path.to_string(),
    })
}

pub fn write_hits(path: impl AsRef<Path>, rows: &[CodonHit]) -> BioResult<()> {
    let file = File::create(path.as_ref()).map_err(|e| BioError::CsvWrite(e.into()))?;
    write_hits_to_writer(file, rows)
}

/// Header plus one line per row; absent values are empty cells.
pub fn write_hits_to_writer<W: Write>(writer: W, rows: &[CodonHit]) -> BioResult<()> {
    let mut writer = WriterBuilder::new().from_writer(writer);
    writer.write_record(HIT_COLUMNS)?;
    for row in rows {
        writer.write_record(hit_fields(row))?;
    }
    writer.flush().map_err(|e| BioError::CsvWrite(e.into()))?;
    Ok(())
}

fn hit_fields(row: &CodonHit) -> [String; 15] {
    fn cell<T: ToString>(value: Option<T>) -> String {
        value.map(|v| v.to_string()).unwrap_or_default()
    }

    [
        row.transcript_id.to_string(),
        row.gene_id.to_string(),
        cell(row.exon_rank),
        row.peptide_length.to_string(),
        row.cds_length.to_string(),
        cell(row.chromosome.as_deref()),
        cell(row.coding_strand),
        cell(row.guide_strand),
        cell(row.target_residue),
        cell(row.codon.as_deref()),
        cell(row.peptide_coordinate),
        cell(row.cds_coordinate),
        cell(row.genome_coordinate),
        cell(row.nmd_predicted),
        cell(row.relative_position),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locate::annotate::TranscriptContext;
    use std::fs;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_path(name: &str) -> std::path::PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        std::env::temp_dir().join(format!("stopsite_{name}_{nanos}.csv"))
    }

    fn write_temp_csv(name: &str, contents: &str) -> std::path::PathBuf {
        let path = temp_path(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn read_exon_table_basic() {
        let path = write_temp_csv(
            "exons_basic",
            "transcript_id,gene_id,exon_rank,chromosome,strand,start,end\n\
             T1,G1,1,chr1,+,100,108\n\
             T2,G2,2,chr2,-,300,250\n",
        );
        let exons = read_exon_table(&path).unwrap();
        assert_eq!(
            exons,
            vec![
                Exon::new("T1", "G1", 1, "chr1", Strand::Plus, 100, 108),
                Exon::new("T2", "G2", 2, "chr2", Strand::Minus, 250, 300),
            ]
        );
        assert_eq!(exons[1].start, 250);
        fs::remove_file(path).ok();
    }

    #[test]
    fn aliases_and_extra_columns() {
        let data = "chr, strand ,tx,gene,exon,start,end,biotype\n\
                    chr3,+,T9,G9,4,1,9,protein_coding\n";
        let exons = read_exon_table_from_reader(data.as_bytes(), "inline").unwrap();
        assert_eq!(exons.len(), 1);
        assert_eq!(exons[0].transcript_id.as_ref(), "T9");
        assert_eq!(exons[0].chromosome.as_ref(), "chr3");
        assert_eq!(exons[0].exon_rank, 4);
    }

    #[test]
    fn missing_column_is_fatal() {
        let data = "transcript_id,gene_id,exon_rank,chromosome,start,end\nT1,G1,1,chr1,1,9\n";
        let err = read_exon_table_from_reader(data.as_bytes(), "inline").unwrap_err();
        match err {
            BioError::CsvMissingColumn { name, .. } => assert_eq!(name, "strand"),
            other => panic!("expected missing column error, got {other:?}"),
        }
    }

    #[test]
    fn invalid_integer() {
        let data = "tx,gene,exon,chr,strand,start,end\nT1,G1,1,chr1,+,abc,9\n";
        let err = read_exon_table_from_reader(data.as_bytes(), "inline").unwrap_err();
        match err {
            BioError::CsvInvalidField {
                row, column, value, ..
            } => {
                assert_eq!(row, 1);
                assert_eq!(column, "start");
                assert_eq!(value, "abc");
            }
            other => panic!("expected invalid field error, got {other:?}"),
        }
    }

    #[test]
    fn invalid_strand() {
        let data = "tx,gene,exon,chr,strand,start,end\nT1,G1,1,chr1,+,1,9\nT1,G1,2,chr1,.,20,29\n";
        let err = read_exon_table_from_reader(data.as_bytes(), "inline").unwrap_err();
        match err {
            BioError::CsvInvalidStrand { row, source, .. } => {
                assert_eq!(row, 2);
                assert!(matches!(*source, BioError::InvalidStrand { .. }));
            }
            other => panic!("expected invalid strand error, got {other:?}"),
        }
    }

    #[test]
    fn short_row_is_missing_field() {
        let data = "tx,gene,exon,chr,strand,start,end\nT1,G1,1,chr1,+,1\n";
        let err = read_exon_table_from_reader(data.as_bytes(), "inline").unwrap_err();
        assert!(matches!(err, BioError::CsvMissingField { row: 1, .. }));
    }

    #[test]
    fn missing_file_is_parse_error() {
        let err = read_exon_table(temp_path("absent")).unwrap_err();
        assert!(matches!(err, BioError::CsvParse { .. }));
    }

    fn sample_rows() -> Vec<CodonHit> {
        let ctx = TranscriptContext {
            transcript_id: "T1".into(),
            gene_id: "G1".into(),
            cds_length: 9,
        };
        let mut hit = CodonHit::empty(&ctx);
        hit.exon_rank = Some(1);
        hit.chromosome = Some("chr1".into());
        hit.coding_strand = Some(Strand::Plus);
        hit.guide_strand = Some(Strand::Minus);
        hit.target_residue = Some('W');
        hit.codon = Some("TGG".into());
        hit.peptide_coordinate = Some(2);
        hit.cds_coordinate = Some(5);
        hit.genome_coordinate = Some(104);
        hit.nmd_predicted = Some(false);
        hit.relative_position = Some(0.5);

        let mut empty_ctx = ctx.clone();
        empty_ctx.transcript_id = "T2".into();
        vec![hit, CodonHit::empty(&empty_ctx)]
    }

    #[test]
    fn write_hits_layout() {
        let mut out = Vec::new();
        write_hits_to_writer(&mut out, &sample_rows()).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], HIT_COLUMNS.join(","));
        assert_eq!(lines[1], "T1,G1,1,3,9,chr1,+,-,W,TGG,2,5,104,false,0.5");
        assert_eq!(lines[2], "T2,G1,,3,9,,,,,,,,,,");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn write_hits_to_path() {
        let path = temp_path("hits");
        write_hits(&path, &sample_rows()).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("transcript_id,gene_id,exon_rank,"));
        assert_eq!(text.lines().count(), 3);
        fs::remove_file(path).ok();
    }
}
