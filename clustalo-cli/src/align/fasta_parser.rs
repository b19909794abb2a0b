use anyhow::{Result, anyhow};
use log::debug;
use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};
use utf8_chars::BufReadCharsExt;


#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastaRecord {
    pub id: String,
    pub comment: String,
    pub sequence: String,
}

impl FastaRecord {
    fn empty() -> Self {
        Self {
            id: String::new(),
            comment: String::new(),
            sequence: String::new(),
        }
    }
}

pub fn parse_fasta_file(path: impl AsRef<Path>) -> Result<Vec<FastaRecord>> {
    let path = path.as_ref();
    debug!("Parsing fasta file {path:?}");

    let file =
        File::open(path).map_err(|error| anyhow!("Unable to open input file {path:?}: {error}"))?;
    let records = parse_fasta(file)?;
    debug!("Found {} records in {path:?}", records.len());
    Ok(records)
}

/// Parse all records of a fasta file.
///
/// Whitespace inside sequences is dropped, the case of the sequence characters is kept.
pub fn parse_fasta(reader: impl Read) -> Result<Vec<FastaRecord>> {
    enum State {
        FileStart,
        ParseId,
        ParseComment,
        ParseSequence,
    }

    let mut input = CharacterIterator::new(BufReader::new(reader));
    let mut state = State::FileStart;
    let mut current_record = FastaRecord::empty();
    let mut records = Vec::new();
    let mut newline = true;

    while let Some(character) = input.next().transpose()? {
        match state {
            State::FileStart => match character {
                Character::Newline => newline = true,
                Character::RecordStart if newline => state = State::ParseId,
                Character::RecordStart => {
                    return Err(anyhow!(
                        "First fasta record is not preceded by a newline character"
                    ));
                }
                Character::Other(c) if c.is_whitespace() => newline = false,
                Character::Other(c) => {
                    return Err(anyhow!(
                        "Found non-whitespace character before first fasta record: {c}"
                    ));
                }
            },
            State::ParseId => match character {
                Character::Newline => {
                    newline = true;
                    state = State::ParseSequence;
                }
                Character::RecordStart => current_record.id.push('>'),
                Character::Other(c) if c.is_whitespace() => state = State::ParseComment,
                Character::Other(c) => current_record.id.push(c),
            },
            State::ParseComment => match character {
                Character::Newline => {
                    newline = true;
                    state = State::ParseSequence;
                }
                Character::RecordStart => current_record.comment.push('>'),
                Character::Other(c) => current_record.comment.push(c),
            },
            State::ParseSequence => match character {
                Character::Newline => newline = true,
                Character::RecordStart if newline => {
                    records.push(std::mem::replace(
                        &mut current_record,
                        FastaRecord::empty(),
                    ));
                    state = State::ParseId;
                }
                Character::RecordStart => {
                    current_record.sequence.push('>');
                    newline = false;
                }
                Character::Other(c) => {
                    if !c.is_whitespace() {
                        current_record.sequence.push(c);
                    }
                    newline = false;
                }
            },
        }
    }

    if matches!(state, State::FileStart) {
        return Err(anyhow!("Input contains no fasta record"));
    }
    records.push(current_record);

    for record in &mut records {
        record.comment = record.comment.trim().to_string();
    }

    Ok(records)
}

enum Character {
    Newline,
    RecordStart,
    Other(char),
}

struct CharacterIterator<Reader: Read> {
    reader: BufReader<Reader>,
}

impl<Reader: Read> CharacterIterator<Reader> {
    fn new(reader: BufReader<Reader>) -> Self {
        Self { reader }
    }
}

impl<Reader: Read> Iterator for CharacterIterator<Reader> {
    type Item = Result<Character>;

    fn next(&mut self) -> Option<Self::Item> {
        self.reader
            .read_char_raw()
            .map(|result| {
                result.map(|c| match c {
                    '\n' | '\r' => Character::Newline,
                    '>' => Character::RecordStart,
                    c => Character::Other(c),
                })
            })
            .map_err(|error| anyhow!("Error reading character from fasta input: {error}"))
            .transpose()
    }
}
