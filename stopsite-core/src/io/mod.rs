pub mod csv;
pub mod fasta;
