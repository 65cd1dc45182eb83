//! lookupgen CLI
//!
//! Command-line interface for emitting the generated string classifiers.

use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use std::io::{self, Write as _};
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "lookupgen")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Generate fast string classifiers for the bundled markup tables", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputLang {
    C,
    Rust,
}

impl From<OutputLang> for lookupgen::Lang {
    fn from(lang: OutputLang) -> Self {
        match lang {
            OutputLang::C => lookupgen::Lang::C,
            OutputLang::Rust => lookupgen::Lang::Rust,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Emit the generated classifier source
    Generate {
        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output language
        #[arg(long, value_enum, default_value = "c")]
        lang: OutputLang,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { output, lang } => {
            run_generate(output.as_deref(), lang.into());
        }
        Commands::Completions { shell } => {
            run_completions(shell);
        }
    }
}

fn run_generate(output: Option<&std::path::Path>, lang: lookupgen::Lang) {
    let result = match output {
        Some(path) => lookupgen::generate_to_file(path, lang),
        None => lookupgen::generate_source(lang).and_then(|text| {
            io::stdout()
                .write_all(text.as_bytes())
                .map_err(|e| format!("Failed to write to stdout: {}", e))
        }),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run_completions(shell: Shell) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, "lookupgen", &mut io::stdout());
}
