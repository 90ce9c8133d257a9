//! Interactive assistant mode
//!
//! The conversational flow of the original game-chat helper, on stdin/stdout:
//! show ranked suggestions, ask for the word actually played, ask for the
//! game's feedback, filter, repeat.

use crate::core::{FeedbackPattern, Word};
use crate::output::formatters::{colorize_guess, format_suggestions};
use crate::solver::{Phase, Round, TurnOutcome};
use std::io::{self, Write as _};

/// Run the interactive assistant
///
/// # Errors
///
/// Returns an error if reading user input fails.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn run_assist(dictionary: &[Word], top_n: usize) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║              Wordly Helper - Interactive Mode                ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("I'll track which words are still possible and suggest good guesses.");
    println!("After each guess, enter the feedback the game showed:\n");
    println!("  - 1 or 🟩 for a letter in the correct position");
    println!("  - 2 or 🟨 for a letter in the word but elsewhere");
    println!("  - 0 or ⬜ for a letter not in the word\n");
    println!("Commands: 'win' when solved, 'new' for a new game, 'undo', 'quit'\n");

    let mut round = Round::new(dictionary);

    loop {
        // Turn number follows the recorded history
        let turn = round.history().len() + 1;

        if round.phase() == Phase::Contradiction {
            println!("\n❌ No candidates remain! Some feedback was probably mistyped.");
            println!("Type 'undo' to go back, or 'new' to start over.\n");

            match get_user_input("Command")?.as_str() {
                "undo" | "u" => {
                    if round.undo() {
                        println!("✓ Undone! Back to turn {}\n", round.history().len() + 1);
                    } else {
                        println!("Nothing to undo!\n");
                    }
                }
                "new" | "n" => {
                    round.reset();
                    println!("\n🔄 New game started!\n");
                }
                "quit" | "q" | "exit" => {
                    println!("\n👋 Good luck!\n");
                    return Ok(());
                }
                _ => {}
            }
            continue;
        }

        println!("────────────────────────────────────────────────────────────");
        println!("Turn {turn}: {} candidates remaining", round.remaining());
        println!("────────────────────────────────────────────────────────────");

        let suggestions = round.suggestions(top_n);
        println!("\n📊 Suggested guesses:");
        print!("{}", format_suggestions(&suggestions));
        println!();

        // The word the player actually played (may differ from any suggestion)
        let word = loop {
            let input = get_user_input("Word played (or command)")?;

            match input.as_str() {
                "quit" | "q" | "exit" => {
                    println!("\n👋 Good luck!\n");
                    return Ok(());
                }
                "new" | "n" => {
                    round.reset();
                    println!("\n🔄 New game started!\n");
                    break None;
                }
                "undo" | "u" => {
                    if round.undo() {
                        println!("✓ Undone! Back to turn {}\n", round.history().len() + 1);
                        break None;
                    }
                    println!("Nothing to undo!\n");
                }
                "win" | "угадано" => {
                    celebrate(&round);
                    round.reset();
                    break None;
                }
                text => match Word::new(text) {
                    Ok(word) => break Some(word),
                    Err(e) => println!("❌ {e}\n"),
                },
            }
        };

        let Some(word) = word else { continue };

        let choice = round
            .choose(word.clone())
            .map_err(|e| format!("Round error: {e}"))?;

        // The dictionary is incomplete; confirm before trusting an unknown word
        if choice.unknown_word {
            println!("⚠ '{word}' is not in my dictionary.");
            let confirmed = get_user_input("Was it really played? (yes/no)")?;
            if !matches!(confirmed.as_str(), "yes" | "y" | "да") {
                round.undo();
                continue;
            }
        }

        // Feedback for the pending word
        let pattern = loop {
            let input = get_user_input("Feedback (e.g. 01210 or ⬜🟩🟨🟩⬜)")?;

            match input.as_str() {
                "win" | "угадано" => break Some(FeedbackPattern::SOLVED),
                "undo" | "u" => {
                    round.undo();
                    break None;
                }
                text => match FeedbackPattern::parse(text) {
                    Ok(pattern) => break Some(pattern),
                    Err(e) => println!("❌ {e}\n"),
                },
            }
        };

        let Some(pattern) = pattern else { continue };

        println!("   {}\n", colorize_guess(&word, &pattern));

        match round
            .report(pattern)
            .map_err(|e| format!("Round error: {e}"))?
        {
            TurnOutcome::Solved => {
                celebrate(&round);
                round.reset();
            }
            TurnOutcome::Narrowed { remaining } => {
                println!("🔎 {remaining} candidates left after filtering.\n");
            }
            TurnOutcome::Contradiction => {
                // Handled at the top of the loop
            }
        }
    }
}

/// Print the victory banner with the guess history
fn celebrate(round: &Round<'_>) {
    use colored::Colorize;

    let turns = round.history().len().max(1);
    println!(
        "\n{}",
        format!("🎉 The word is found! Solved in {turns} guesses.")
            .green()
            .bold()
    );
    for (i, (played, fb)) in round.history().iter().enumerate() {
        println!("    {}. {}", i + 1, colorize_guess(played, fb));
    }
    println!("\nStarting a new game; type 'quit' to exit instead.\n");
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_lowercase())
}
