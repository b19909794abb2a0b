use std::io::{Result, Write};

use lib_clustalo::Alignment;

/// Write `alignment` as fasta, wrapping rows after `line_width` characters.
///
/// A `line_width` of zero writes each row on a single line.
pub fn write_fasta(mut output: impl Write, alignment: &Alignment, line_width: usize) -> Result<()> {
    for record in alignment.iter() {
        writeln!(output, ">{}", record.name)?;

        if line_width == 0 {
            writeln!(output, "{}", record.sequence)?;
            continue;
        }

        // Aligned rows consist of ASCII residues and gaps.
        for line in record.sequence.as_bytes().chunks(line_width) {
            output.write_all(line)?;
            writeln!(output)?;
        }
    }

    Ok(())
}
