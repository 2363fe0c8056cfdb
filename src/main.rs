use std::io::Read;

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use unbot::{AnalysisResult, Readability, Tone, Verdict};

#[derive(Parser)]
#[command(
    name = "unbot",
    about = "Humanize AI-flavored prose or score text for AI origin",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Rewrite text to strip machine-prose fingerprints
    Humanize {
        /// File paths to rewrite (reads stdin if none provided)
        files: Vec<String>,
        #[arg(long, value_enum, default_value_t = ToneArg::Default)]
        tone: ToneArg,
        /// Reserved; accepted but not yet consulted by the pipeline
        #[arg(long, value_enum, default_value_t = ReadabilityArg::Standard)]
        readability: ReadabilityArg,
    },
    /// Score text on a 0-100 probability-of-AI-origin scale
    Detect {
        /// File paths to analyze (reads stdin if none provided)
        files: Vec<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ToneArg {
    Default,
    Casual,
}

impl From<ToneArg> for Tone {
    fn from(arg: ToneArg) -> Tone {
        match arg {
            ToneArg::Default => Tone::Default,
            ToneArg::Casual => Tone::Casual,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum ReadabilityArg {
    Standard,
    Simple,
    Advanced,
}

impl From<ReadabilityArg> for Readability {
    fn from(arg: ReadabilityArg) -> Readability {
        match arg {
            ReadabilityArg::Standard => Readability::Standard,
            ReadabilityArg::Simple => Readability::Simple,
            ReadabilityArg::Advanced => Readability::Advanced,
        }
    }
}

#[derive(Serialize)]
struct Report {
    #[serde(flatten)]
    result: AnalysisResult,
    verdict: Verdict,
    summary: &'static str,
    word_count: usize,
}

impl Report {
    fn new(text: &str) -> Report {
        let result = unbot::analyze(text);
        let verdict = result.verdict();
        Report {
            result,
            verdict,
            summary: verdict.description(),
            word_count: text.split_whitespace().count(),
        }
    }
}

fn main() {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Humanize {
            files,
            tone,
            readability,
        } => {
            for text in read_inputs(&files) {
                println!("{}", unbot::humanize(&text, tone.into(), readability.into()));
            }
        }
        Command::Detect { files } => {
            for text in read_inputs(&files) {
                let report = Report::new(&text);
                println!("{}", serde_json::to_string_pretty(&report).unwrap());
            }
        }
    }
}

fn read_inputs(files: &[String]) -> Vec<String> {
    if files.is_empty() {
        let mut input = String::new();
        std::io::stdin()
            .read_to_string(&mut input)
            .expect("Failed to read stdin");
        vec![input]
    } else {
        files
            .iter()
            .map(|path| {
                std::fs::read_to_string(path).unwrap_or_else(|e| {
                    eprintln!("Error reading {path}: {e}");
                    std::process::exit(1);
                })
            })
            .collect()
    }
}
