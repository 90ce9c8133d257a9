//! Wordly Helper - CLI
//!
//! Guess assistant for the Russian five-letter word game. Tracks which
//! dictionary words are still consistent with the feedback received and
//! suggests the most discriminating next guesses.

use anyhow::Result;
use clap::{Parser, Subcommand};
use wordly_helper::{
    commands::{SolveConfig, parse_turn, run_assist, run_suggest, solve_word},
    core::Word,
    output::{print_solve_result, print_suggest_result},
    solver::DEFAULT_SUGGESTIONS,
    wordlists::{WORDS, loader},
};

#[derive(Parser)]
#[command(
    name = "wordly_helper",
    about = "Guess assistant for the Russian five-letter word game",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file (one word per line)
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// How many suggestions to show
    #[arg(short = 't', long, global = true, default_value_t = DEFAULT_SUGGESTIONS)]
    top: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive assistant (default)
    Assist,

    /// Replay a history and print ranked suggestions
    Suggest {
        /// Played turns as WORD:PATTERN, e.g. 'сорта:01111', in order
        #[arg(short = 'g', long = "turn", value_name = "WORD:PATTERN")]
        turns: Vec<String>,
    },

    /// Simulate the heuristic against a known target word
    Solve {
        /// The target word
        word: String,

        /// Show candidate counts per turn
        #[arg(short, long)]
        verbose: bool,
    },
}

/// Load the dictionary based on the -w flag
fn load_dictionary(wordlist_mode: &str) -> Result<Vec<Word>> {
    match wordlist_mode {
        "embedded" => Ok(loader::words_from_slice(WORDS)),
        path => {
            let words = loader::load_from_file(path)?;
            anyhow::ensure!(!words.is_empty(), "Wordlist {path} contains no valid words");
            Ok(words)
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let dictionary = load_dictionary(&cli.wordlist)?;

    // Default to the interactive assistant if no command given
    let command = cli.command.unwrap_or(Commands::Assist);

    match command {
        Commands::Assist => run_assist(&dictionary, cli.top).map_err(|e| anyhow::anyhow!(e)),
        Commands::Suggest { turns } => {
            let history = turns
                .iter()
                .map(|arg| parse_turn(arg).map_err(|e| anyhow::anyhow!(e)))
                .collect::<Result<Vec<_>>>()?;

            let result =
                run_suggest(&dictionary, &history, cli.top).map_err(|e| anyhow::anyhow!(e))?;
            print_suggest_result(&result);
            Ok(())
        }
        Commands::Solve { word, verbose } => {
            let config = SolveConfig::new(word);
            let result = solve_word(&config, &dictionary).map_err(|e| anyhow::anyhow!(e))?;
            print_solve_result(&result, verbose);
            Ok(())
        }
    }
}
