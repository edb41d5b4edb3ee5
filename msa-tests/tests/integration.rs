use anyhow::Result;
use lib_msa::QualityAlignedSequence;
use lib_seq::{
    Encoding, Letter, QLetter, Qphred, Sequence, Strand,
    alphabet::dna,
    consensus::default_consensus,
};
use util::{EXAMPLE_ROWS, columns, example_alignment, example_read, rows};

mod util;

#[test]
fn test_example_construction() -> Result<()> {
    let alignment = example_alignment()?;
    assert_eq!(rows(&alignment)?, EXAMPLE_ROWS);
    assert_eq!(alignment.len(), 19);
    assert_eq!(alignment.rows(), 3);
    assert_eq!(alignment.to_string(), "acgntgacntggcgcncat");
    Ok(())
}

#[test]
fn test_example_add_read() -> Result<()> {
    let mut alignment = example_alignment()?;
    let read = example_read();
    alignment.add(&[&read as &dyn Sequence])?;

    assert_eq!(alignment.rows(), 4);
    assert_eq!(rows(&alignment)?[3], "acgCtg-------------");
    assert_eq!(alignment.row(3)?.name(), "example DNA");
    assert_eq!(alignment.to_string(), "acgctgacntggcgcncat");
    Ok(())
}

#[test]
fn test_example_copy() -> Result<()> {
    let mut alignment = example_alignment()?;
    alignment.add(&[&example_read() as &dyn Sequence])?;

    let mut copy = alignment.clone();
    copy.row_mut(2)?.set(3, Letter(b't'));

    assert_eq!(rows(&alignment)?[2], "ACGATGACGTGGCGCTCAT");
    assert_eq!(rows(&copy)?[2], "ACGtTGACGTGGCGCTCAT");
    assert_eq!(alignment.to_string(), "acgctgacntggcgcncat");
    assert_eq!(copy.to_string(), "acgctgacntggcgcncat");
    Ok(())
}

#[test]
fn test_example_rev_comp() -> Result<()> {
    let mut alignment = example_alignment()?;
    alignment.add(&[&example_read() as &dyn Sequence])?;
    alignment.set_strand(Strand::Forward);
    alignment.rev_comp()?;

    assert_eq!(
        rows(&alignment)?,
        [
            "ACGTGCACCAAGTCAGCGT",
            "ATGCGCGCCAGGTCACCGT",
            "ATGAGCGCCACGTCATCGT",
            "-------------caGcgt",
        ]
    );
    assert_eq!(alignment.to_string(), "atgngcgccangtcagcgt");
    assert_eq!(alignment.strand(), Strand::Reverse);
    Ok(())
}

#[test]
fn test_row_views_compose_as_sequences() -> Result<()> {
    let source = example_alignment()?;
    let mut target = example_alignment()?;
    let row = source.row(1)?;
    target.add(&[&row as &dyn Sequence])?;

    assert_eq!(target.rows(), 4);
    assert_eq!(rows(&target)?[3], EXAMPLE_ROWS[1]);
    assert_eq!(target.row(3)?.name(), "seq 2");
    Ok(())
}

#[test]
fn test_quality_alignment_takes_plain_rows() -> Result<()> {
    let letters = EXAMPLE_ROWS[0].as_bytes();
    let mut qualities = vec![b'I'; letters.len()];
    qualities[8] = b'#';
    let mut alignment = QualityAlignedSequence::new(
        "reads",
        &["read"],
        QLetter::from_encoded(letters, &qualities, Encoding::Sanger)
            .into_iter()
            .map(|letter| vec![letter])
            .collect(),
        dna(),
        Encoding::Sanger,
        default_consensus,
    )?;
    alignment.add(&[&example_alignment()? as &dyn Sequence])?;
    alignment.set_threshold(Qphred(10));

    assert_eq!(alignment.rows(), 4);
    assert_eq!(alignment.row(2)?.name(), "seq 2");
    assert_eq!(
        alignment.column(8, false).map(|column| column.into_owned()),
        Some(Letter::from_bytes(b"nTCG"))
    );
    let column = alignment.column_ql(8, false).map(|column| column.into_owned());
    assert_eq!(column.map(|column| column[0].quality), Some(Qphred(2)));
    assert_eq!(alignment.row(1)?.q_encode(0), b'I');
    Ok(())
}

#[test]
fn test_columns_round_trip_through_storage() -> Result<()> {
    let mut alignment = example_alignment()?;
    let mut storage = alignment.slice().clone();
    storage.map_row(0, Letter::to_ascii_lowercase);
    alignment.set_slice(storage)?;

    assert_eq!(rows(&alignment)?[0], "acgctgacttggtgcacgt");
    assert_eq!(
        alignment.slice().clone().into_inner(),
        columns(&["acgctgacttggtgcacgt", EXAMPLE_ROWS[1], EXAMPLE_ROWS[2]])
    );
    Ok(())
}
