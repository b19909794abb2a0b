/// A named sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SequenceRecord {
    pub name: String,
    pub sequence: String,
}

impl SequenceRecord {
    pub fn new(name: impl Into<String>, sequence: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sequence: sequence.into(),
        }
    }
}

impl<Name: Into<String>, Sequence: Into<String>> From<(Name, Sequence)> for SequenceRecord {
    fn from((name, sequence): (Name, Sequence)) -> Self {
        Self::new(name, sequence)
    }
}

/// Aligned sequences in input order.
///
/// All rows have the same width, with `-` as gap character.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Alignment {
    records: Vec<SequenceRecord>,
}

impl Alignment {
    pub const GAP: char = '-';

    /// The caller guarantees that all rows have the same width.
    pub(crate) fn new_unchecked(records: Vec<SequenceRecord>) -> Self {
        Self { records }
    }

    /// The number of columns.
    pub fn width(&self) -> usize {
        self.records
            .first()
            .map(|record| record.sequence.chars().count())
            .unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.records
            .iter()
            .find(|record| record.name == name)
            .map(|record| record.sequence.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &SequenceRecord> {
        self.records.iter()
    }

    pub fn into_records(self) -> Vec<SequenceRecord> {
        self.records
    }
}

impl IntoIterator for Alignment {
    type Item = SequenceRecord;
    type IntoIter = std::vec::IntoIter<SequenceRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}
