use crate::error::ValidationError;

use super::{DNA, PROTEIN, RNA, SequenceType, UNKNOWN};

#[test]
fn test_dna_alphabet() {
    assert_eq!(DNA.find_invalid("GATTACA"), None);
    assert_eq!(DNA.find_invalid("GATTACAN"), None);
    assert_eq!(DNA.find_invalid("GATTACAX"), Some((7, 'X')));
    assert_eq!(DNA.find_invalid("TESTTEST"), Some((1, 'E')));
    assert_eq!(DNA.find_invalid("GAUTACA"), Some((2, 'U')));
}

#[test]
fn test_case_insensitive() {
    assert_eq!(DNA.find_invalid("gattacan"), None);
    assert_eq!(DNA.find_invalid("GaTtAcA"), None);
    assert_eq!(PROTEIN.find_invalid("testtest"), None);
    assert_eq!(RNA.find_invalid("gauuaca"), None);
}

#[test]
fn test_protein_alphabet() {
    assert_eq!(PROTEIN.find_invalid("TESTTEST"), None);
    assert_eq!(PROTEIN.find_invalid("ACDEFGHIKLMNPQRSTVWYX"), None);
    assert_eq!(PROTEIN.find_invalid("MKVB"), Some((3, 'B')));
    assert_eq!(PROTEIN.find_invalid("MKV*"), Some((3, '*')));
    assert_eq!(PROTEIN.find_invalid("MKV-"), Some((3, '-')));
}

#[test]
fn test_unknown_alphabet_is_union() {
    for alphabet in [&DNA, &RNA, &PROTEIN] {
        for &character in alphabet.characters() {
            assert!(UNKNOWN.contains(char::from(character)));
        }
    }
    assert!(!UNKNOWN.contains('B'));
    assert!(!UNKNOWN.contains('Z'));
}

#[test]
fn test_non_ascii() {
    assert!(!DNA.contains('Ä'));
    assert_eq!(DNA.find_invalid("GAT→ACA"), Some((3, '→')));
}

#[test]
fn test_sequence_type_codes() {
    for sequence_type in SequenceType::ALL {
        assert_eq!(
            SequenceType::try_from(sequence_type.code()),
            Ok(sequence_type)
        );
    }
    assert_eq!(SequenceType::Dna.code(), 1);
    assert_eq!(SequenceType::default(), SequenceType::Dna);
    assert_eq!(
        SequenceType::try_from(4),
        Err(ValidationError::UnknownSequenceType(4))
    );
    assert_eq!(
        SequenceType::try_from(-1),
        Err(ValidationError::UnknownSequenceType(-1))
    );
}
