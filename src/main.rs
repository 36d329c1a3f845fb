use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;

use structopt::StructOpt;

use compound_finder::wordlist::wordlist::{FileFormat, Wordlist};

/// Find the words in a word list that are concatenations of other words from
/// the same list, and report them longest first.
#[derive(StructOpt)]
struct Cli {
    /// The path to the word list, one lowercase word per line
    #[structopt(parse(from_os_str))]
    path: PathBuf,
    /// Write every compound word found to this file, longest first
    #[structopt(short, long, parse(from_os_str))]
    output: Option<PathBuf>,
    /// Check words one at a time instead of in parallel
    #[structopt(long)]
    sequential: bool,
}

fn main() {
    let args = Cli::from_args();

    let wl = Wordlist::new();
    let count = wl.load_file(args.path.as_path().to_str().unwrap(),
                             FileFormat::builder().build());
    println!("Input words: {}", count);

    let start = Instant::now();
    let compounds = if args.sequential {
        wl.find_compounds_sequential()
    } else {
        wl.find_compounds()
    };

    match compounds.get(0) {
        Some(c) => println!("Longest compound: {} ({} pieces)", c.word, c.pieces),
        None => println!("No compound words found"),
    }
    if let Some(c) = compounds.get(1) {
        println!("Second longest compound: {} ({} pieces)", c.word, c.pieces);
    }
    println!("Seconds to execute: {}", start.elapsed().as_millis() as f64 / 1000.0);
    println!("Total compound words: {}", compounds.len());

    if let Some(path) = args.output {
        let mut out = BufWriter::new(File::create(&path).unwrap());
        for c in &compounds {
            writeln!(out, "{}", c.word).unwrap();
        }
        println!("Wrote {} words to {:#?}", compounds.len(), &path);
    }
}
