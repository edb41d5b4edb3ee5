use anyhow::Result;
use lib_msa::{AlignedSequence, Alignment, Cell};
use lib_seq::{
    Encoding, Letter, QLetter, QLinearSeq,
    alphabet::dna,
    consensus::default_consensus,
};

pub const EXAMPLE_ROWS: [&str; 3] = [
    "ACGCTGACTTGGTGCACGT",
    "ACGGTGACCTGGCGCGCAT",
    "ACGATGACGTGGCGCTCAT",
];

/// Transposes equally long rows into columns.
pub fn columns(rows: &[&str]) -> Vec<Vec<Letter>> {
    let len = rows.first().map_or(0, |row| row.len());
    (0..len)
        .map(|column| {
            rows.iter()
                .map(|row| Letter(row.as_bytes()[column]))
                .collect()
        })
        .collect()
}

pub fn example_alignment() -> Result<AlignedSequence> {
    Ok(AlignedSequence::new(
        "example alignment",
        &["seq 1", "seq 2", "seq 3"],
        columns(&EXAMPLE_ROWS),
        dna(),
        default_consensus,
    )?)
}

/// A short read with Sanger encoded qualities.
pub fn example_read() -> QLinearSeq {
    QLinearSeq::new(
        "example DNA",
        QLetter::from_encoded(b"acgCtg", b"IHIGD5", Encoding::Sanger),
        dna(),
        Encoding::Sanger,
    )
}

pub fn rows<C: Cell>(alignment: &Alignment<C>) -> Result<Vec<String>> {
    (0..alignment.rows())
        .map(|row| Ok(alignment.row(row)?.to_string()))
        .collect()
}
