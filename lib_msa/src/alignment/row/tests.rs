use lib_seq::{
    Encoding, Letter, QLetter, Qphred, Sequence, Strand, Topology,
    alphabet::{dna, protein},
    consensus::default_consensus,
};

use crate::{
    AlignedSequence, QualityAlignedSequence,
    columns::Columns,
    error::Error,
};

fn alignment() -> AlignedSequence {
    AlignedSequence::new(
        "aln",
        &["first", "second"],
        vec![
            Letter::from_bytes(b"AT"),
            Letter::from_bytes(b"CT"),
            Letter::from_bytes(b"GA"),
            Letter::from_bytes(b"TA"),
        ],
        dna(),
        default_consensus,
    )
    .unwrap()
}

fn quality_alignment() -> QualityAlignedSequence {
    QualityAlignedSequence::new(
        "qaln",
        &["reads"],
        vec![
            vec![QLetter::new(Letter(b'A'), Qphred(30))],
            vec![QLetter::new(Letter(b'C'), Qphred(10))],
            vec![QLetter::new(Letter(b'G'), Qphred(1))],
        ],
        dna(),
        Encoding::Illumina1_8,
        default_consensus,
    )
    .unwrap()
}

#[test]
fn test_row_reads_through_to_alignment() {
    let aligned = alignment();
    let row = aligned.row(1).unwrap();
    assert_eq!(row.index(), 1);
    assert_eq!(row.name(), "second");
    assert_eq!(row.len(), 4);
    assert_eq!(row.to_string(), "TTAA");
    assert_eq!(row.get(2), Some(Letter(b'A')));
    assert_eq!(row.get(4), None);
    assert_eq!(row.get(-1), None);
    assert_eq!(Sequence::at(&row, 0), QLetter::with_default_quality(Letter(b'T')));
}

#[test]
fn test_row_coordinates_follow_row_offset() {
    let mut aligned = alignment();
    aligned.set_offset(100);
    aligned.row_mut(0).unwrap().set_offset(-2);

    let row = aligned.row(0).unwrap();
    assert_eq!(row.start(), -2);
    assert_eq!(row.end(), 2);
    assert_eq!(row.at(-2), Letter(b'A'));
    assert_eq!(row.at(1), Letter(b'T'));
    assert_eq!(aligned.column(100, false).unwrap()[0], Letter(b'A'));
}

#[test]
#[should_panic]
fn test_row_at_panics_outside_of_row() {
    let aligned = alignment();
    aligned.row(0).unwrap().at(4);
}

#[test]
fn test_row_mut_writes_through() {
    let mut aligned = alignment();
    {
        let mut row = aligned.row_mut(0).unwrap();
        row.set(1, Letter(b'-'));
        row.set_strand(Strand::Forward);
        row.set_topology(Topology::Circular);
        row.set_description("edited");
        assert_eq!(row.at(1), Letter(b'-'));
    }

    let row = aligned.row(0).unwrap();
    assert_eq!(row.to_string(), "A-GT");
    assert_eq!(row.strand(), Strand::Forward);
    assert_eq!(row.topology(), Topology::Circular);
    assert_eq!(row.description(), "edited");
    assert_eq!(aligned.row(1).unwrap().to_string(), "TTAA");
}

#[test]
fn test_row_rev_comp_touches_only_that_row() {
    let mut aligned = alignment();
    let mut row = aligned.row_mut(0).unwrap();
    row.set_strand(Strand::Forward);
    row.rev_comp().unwrap();
    assert_eq!(row.as_row().to_string(), "ACGT");
    assert_eq!(row.as_row().strand(), Strand::Reverse);

    row.reverse();
    assert_eq!(row.as_row().to_string(), "TGCA");
    assert_eq!(row.as_row().strand(), Strand::None);

    assert_eq!(aligned.row(1).unwrap().to_string(), "TTAA");
    assert_eq!(aligned.strand(), Strand::None);
}

#[test]
fn test_row_rev_comp_requires_complement_table() {
    let mut aligned = AlignedSequence::new(
        "aln",
        &[],
        vec![Letter::from_bytes(b"M"), Letter::from_bytes(b"K")],
        protein(),
        default_consensus,
    )
    .unwrap();
    let mut row = aligned.row_mut(0).unwrap();
    assert!(matches!(
        row.rev_comp(),
        Err(Error::UnsupportedCapability { .. })
    ));
    assert_eq!(row.as_row().to_string(), "MK");
}

#[test]
fn test_row_storage_is_unsupported() {
    let mut aligned = alignment();
    assert!(matches!(
        aligned.row(0).unwrap().slice(),
        Err(Error::UnsupportedOperation(_))
    ));

    let mut row = aligned.row_mut(0).unwrap();
    assert!(matches!(row.slice(), Err(Error::UnsupportedOperation(_))));
    assert!(matches!(
        row.set_slice(Columns::new(1)),
        Err(Error::UnsupportedOperation(_))
    ));
}

#[test]
fn test_row_copy_is_detached() {
    let mut aligned = alignment();
    aligned.row_mut(1).unwrap().set_offset(3);
    let copy = aligned.row(1).unwrap().copy();
    aligned.row_mut(1).unwrap().set(3, Letter(b'G'));

    assert_eq!(copy.to_string(), "TTAA");
    assert_eq!(copy.id(), "second");
    assert_eq!(copy.start(), 3);
    assert_eq!(aligned.row(1).unwrap().to_string(), "GTAA");
}

#[test]
fn test_quality_row() {
    let mut aligned = quality_alignment();
    {
        let row = aligned.row(0).unwrap();
        assert_eq!(row.encoding(), Encoding::Illumina1_8);
        assert!((row.e_at(1) - 0.1).abs() < 1e-9);
        assert_eq!(row.q_encode(0), 30 + 33);
    }

    let mut row = aligned.row_mut(0).unwrap();
    row.set_e(2, 0.5);
    assert_eq!(row.at(2), QLetter::new(Letter(b'G'), Qphred(3)));
    assert_eq!(row.at(1).quality, Qphred(10));

    let copy = row.copy();
    assert_eq!(copy.encoding(), Encoding::Illumina1_8);
    assert_eq!(copy.threshold(), Qphred(2));
    assert_eq!(copy.to_string(), "ACG");
}

#[test]
fn test_quality_row_rev_comp_keeps_other_rows() {
    let mut aligned = QualityAlignedSequence::new(
        "qaln",
        &["forward", "other"],
        vec![
            vec![QLetter::from((b'A', 10)), QLetter::from((b'C', 1))],
            vec![QLetter::from((b'G', 20)), QLetter::from((b'T', 3))],
            vec![QLetter::from((b'T', 30)), QLetter::from((b'A', 4))],
        ],
        dna(),
        Encoding::Sanger,
        default_consensus,
    )
    .unwrap();
    aligned.row_mut(0).unwrap().rev_comp().unwrap();

    let reversed: Vec<_> = aligned.row(0).unwrap().iter().collect();
    assert_eq!(
        reversed,
        [
            QLetter::from((b'A', 30)),
            QLetter::from((b'C', 20)),
            QLetter::from((b'T', 10)),
        ]
    );
    let other: Vec<_> = aligned.row(1).unwrap().iter().collect();
    assert_eq!(
        other,
        [
            QLetter::from((b'C', 1)),
            QLetter::from((b'T', 3)),
            QLetter::from((b'A', 4)),
        ]
    );
}
