//! CLI tool to stream a text file through a line pipeline.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use pushpipe::{
    LineSource, LineWriter, enumerate, filter, hole, inspect, map, pipeline, print, skip, take,
};

/// Stream a text file through a skip/take/filter/transform pipeline.
///
/// Lines flow one at a time through every stage; absent options collapse
/// to pass-through stages.
#[derive(Parser)]
#[command(name = "linepipe")]
struct Cli {
    /// Input text file
    input: PathBuf,

    /// Suppress the first N lines
    #[arg(long, value_name = "N", default_value_t = 0)]
    skip: usize,

    /// Forward at most N lines, then end the stream
    #[arg(long, value_name = "N")]
    take: Option<usize>,

    /// Keep only lines containing the pattern
    #[arg(long, value_name = "PATTERN")]
    matching: Option<String>,

    /// Uppercase every line
    #[arg(long)]
    upper: bool,

    /// Prefix each surviving line with its position
    #[arg(long)]
    number: bool,

    /// Discard the first line of the input before streaming
    #[arg(long)]
    skip_header: bool,

    /// Write output lines to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Report line counts on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let opened = if cli.skip_header {
        LineSource::open_skip_header(&cli.input)
    } else {
        LineSource::open(&cli.input)
    };
    let mut source = match opened {
        Ok(source) => source,
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    };

    if cli.verbose {
        eprintln!("Input:  {}", cli.input.display());
        match &cli.output {
            Some(path) => eprintln!("Output: {}", path.display()),
            None => eprintln!("Output: (stdout)"),
        }
    }

    let keep = cli.matching.clone();
    let upper = cli.upper;
    let number = cli.number;
    let limit = cli.take.unwrap_or(usize::MAX);

    let mut read = 0usize;
    let mut written = 0usize;

    let body = pipeline()
        | &mut source
        | inspect(|_: &String| read += 1)
        | skip(cli.skip)
        | take(limit)
        | filter(move |line: &String| keep.as_deref().is_none_or(|pat| line.contains(pat)))
        | map(move |line: String| if upper { line.to_uppercase() } else { line })
        | enumerate()
        | map(move |(index, line): (usize, String)| {
            if number {
                format!("{:>6}  {line}", index + 1)
            } else {
                line
            }
        })
        | inspect(|_: &String| written += 1);

    if let Some(out_path) = &cli.output {
        let mut writer = match LineWriter::create(out_path) {
            Ok(writer) => writer,
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        };
        let mut chain = body | &mut writer | hole();
        chain.run();
        if let Err(e) = writer.finish() {
            eprintln!("{e}");
            process::exit(1);
        }
    } else {
        let mut chain = body | print();
        chain.run();
    }

    if let Some(e) = source.io_error() {
        eprintln!("Error reading '{}': {e}", cli.input.display());
        process::exit(1);
    }

    if cli.verbose {
        eprintln!("Lines:  {read} in -> {written} out");
    }
}
