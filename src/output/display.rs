//! Display functions for command results

use super::formatters::{colorize_guess, format_suggestions};
use crate::commands::{SolveResult, SuggestResult};
use colored::Colorize;

/// Print the result of replaying a history
pub fn print_suggest_result(result: &SuggestResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "After {} turn(s): {} candidate(s) remaining",
        result.turns, result.remaining
    );
    println!("{}", "─".repeat(60).cyan());

    if result.contradiction {
        println!(
            "\n{}",
            "❌ No word fits this history. Check the feedback for typos."
                .red()
                .bold()
        );
        return;
    }

    println!("\nSuggested guesses:");
    print!("{}", format_suggestions(&result.suggestions));
    println!();
}

/// Print the path taken when simulating a target word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Simulating: {}",
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        println!(
            "\nTurn {}: {} {}",
            i + 1,
            colorize_guess(&step.word, &step.pattern),
            step.pattern.markers()
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.steps.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Not solved in {} guesses", result.steps.len())
                .red()
                .bold()
        );
    }
}
