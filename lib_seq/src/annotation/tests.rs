use super::{Annotation, Strand, Topology};

#[test]
fn test_strand_negation() {
    assert_eq!(-Strand::Forward, Strand::Reverse);
    assert_eq!(-Strand::Reverse, Strand::Forward);
    assert_eq!(-Strand::None, Strand::None);
}

#[test]
fn test_annotation_builder() {
    let annotation = Annotation::new("seq")
        .with_offset(-3)
        .with_strand(Strand::Forward)
        .with_description("a test sequence");
    assert_eq!(annotation.id, "seq");
    assert_eq!(annotation.offset, -3);
    assert_eq!(annotation.strand, Strand::Forward);
    assert_eq!(annotation.topology, Topology::Linear);
    assert_eq!(annotation.description, "a test sequence");
}
