use lib_seq::{
    Encoding, Letter, QLetter, QLinearSeq, Qphred, alphabet::dna, consensus::DEFAULT_THRESHOLD,
};

use super::QualityConfig;

#[test]
fn test_defaults_match_quality_sequences() {
    let config = QualityConfig::new(Encoding::Solexa);
    let sequence = QLinearSeq::new("s", Vec::new(), dna(), Encoding::Solexa);

    assert_eq!(config.encoding, Encoding::Solexa);
    assert_eq!(config.threshold, DEFAULT_THRESHOLD);
    assert_eq!(sequence.threshold(), config.threshold);

    let alphabet = dna();
    let poor = QLetter::new(Letter(b'C'), Qphred(0));
    assert_eq!(
        (config.filter)(alphabet.as_ref(), config.threshold, poor),
        Letter(b'n')
    );
}
