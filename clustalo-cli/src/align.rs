use std::{
    fs::File,
    io::{BufWriter, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use lib_clustalo::{Aligner, Alignment, AlignmentOptions, SequenceRecord, SequenceType};
use log::{LevelFilter, debug, info, warn};
use simplelog::{ColorChoice, TermLogger, TerminalMode};

use crate::align::{fasta_parser::parse_fasta_file, output::write_fasta};

mod fasta_parser;
mod output;

#[derive(Parser)]
pub struct Cli {
    #[clap(long, short = 'l', default_value = "info")]
    log_level: LevelFilter,

    /// The fasta file containing the sequences to align.
    ///
    /// Record ids are used as sequence names and must be unique.
    #[clap(long, short = 'i')]
    input: PathBuf,

    /// The file to write the alignment to.
    ///
    /// If not given, the alignment is written to stdout.
    #[clap(long, short = 'o')]
    output: Option<PathBuf>,

    #[clap(long, default_value = "fasta")]
    output_format: OutputFormat,

    /// Characters per line of fasta output. Zero disables wrapping.
    #[clap(long, default_value = "60")]
    line_width: usize,

    /// The type of the input sequences.
    ///
    /// Sequences are checked against the alphabet of this type, ignoring case.
    #[clap(long, short = 't', default_value = "dna")]
    seqtype: InputSequenceType,

    /// A toml file containing alignment options.
    ///
    /// Options given on the command line take precedence.
    #[clap(long, short = 'c')]
    config: Option<PathBuf>,

    /// The number of threads libclustalo may use.
    #[clap(long)]
    threads: Option<u32>,

    /// Use mBed-like clustering for the guide tree.
    #[clap(long)]
    mbed_guide_tree: Option<bool>,

    /// Use mBed-like clustering during iteration.
    #[clap(long)]
    mbed_iteration: Option<bool>,

    /// The number of combined guide tree and HMM iterations.
    #[clap(long)]
    num_combined_iterations: Option<u32>,

    #[clap(long)]
    max_guidetree_iterations: Option<u32>,

    #[clap(long)]
    max_hmm_iterations: Option<u32>,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, ValueEnum)]
enum InputSequenceType {
    Dna,
    Rna,
    Protein,
    /// Let libclustalo detect the type.
    Unknown,
}

impl From<InputSequenceType> for SequenceType {
    fn from(sequence_type: InputSequenceType) -> Self {
        match sequence_type {
            InputSequenceType::Dna => Self::Dna,
            InputSequenceType::Rna => Self::Rna,
            InputSequenceType::Protein => Self::Protein,
            InputSequenceType::Unknown => Self::Unknown,
        }
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, ValueEnum)]
enum OutputFormat {
    Fasta,
    Toml,
}

pub fn cli(cli: Cli) -> Result<()> {
    if let Err(error) = TermLogger::init(
        cli.log_level,
        Default::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    ) {
        // Happens when the cli is invoked repeatedly within one process.
        warn!("Logger was already initialised: {error}");
    }

    let options = load_options(&cli)?;
    debug!("Using alignment options {options:?}");

    info!("Loading input file {:?}", cli.input);
    let records = parse_fasta_file(&cli.input)?
        .into_iter()
        .map(|record| {
            if !record.comment.is_empty() {
                debug!("Dropping comment of record '{}': {}", record.id, record.comment);
            }
            SequenceRecord::new(record.id, record.sequence)
        });

    let sequence_type = SequenceType::from(cli.seqtype);
    info!("Aligning as {sequence_type}");
    let alignment = Aligner::clustalo()
        .with_options(options)
        .align(records, sequence_type)?;
    info!(
        "Aligned {} sequences to width {}",
        alignment.len(),
        alignment.width()
    );

    if let Some(path) = &cli.output {
        info!("Writing alignment to {path:?}");
        let file = File::create(path)
            .with_context(|| format!("Unable to create output file {path:?}"))?;
        write_alignment(BufWriter::new(file), &alignment, &cli)
    } else {
        write_alignment(std::io::stdout().lock(), &alignment, &cli)
    }
}

fn load_options(cli: &Cli) -> Result<AlignmentOptions> {
    let mut options = if let Some(path) = &cli.config {
        info!("Loading alignment options from {path:?}");
        let config = std::fs::read_to_string(path)
            .with_context(|| format!("Unable to read config file {path:?}"))?;
        toml::from_str(&config).with_context(|| format!("Malformed config file {path:?}"))?
    } else {
        AlignmentOptions::default()
    };

    if let Some(threads) = cli.threads {
        options.threads = threads;
    }
    options.mbed_guide_tree = cli.mbed_guide_tree.or(options.mbed_guide_tree);
    options.mbed_iteration = cli.mbed_iteration.or(options.mbed_iteration);
    options.num_combined_iterations = cli
        .num_combined_iterations
        .or(options.num_combined_iterations);
    options.max_guidetree_iterations = cli
        .max_guidetree_iterations
        .or(options.max_guidetree_iterations);
    options.max_hmm_iterations = cli.max_hmm_iterations.or(options.max_hmm_iterations);

    Ok(options)
}

fn write_alignment(mut output: impl Write, alignment: &Alignment, cli: &Cli) -> Result<()> {
    match cli.output_format {
        OutputFormat::Fasta => write_fasta(&mut output, alignment, cli.line_width)?,
        OutputFormat::Toml => write!(output, "{}", toml::to_string(alignment)?)?,
    }
    output.flush()?;
    Ok(())
}
