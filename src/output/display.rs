//! Console presenter for the line-based modes

use super::formatters::{gallows, guessed_letters, leaderboard_row};
use crate::core::{GameState, GuessOutcome};
use crate::engine::{GuessRejection, HintGrant, HintRefusal, Presenter, RoundSummary, TurnReport};
use crate::players::Player;
use colored::Colorize;

/// Prints the round to stdout
#[derive(Debug, Default)]
pub struct ConsolePresenter;

impl ConsolePresenter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Presenter for ConsolePresenter {
    fn round_started(&mut self, player: &Player) {
        println!("\n{}", format!("{}'s turn!", player.name()).bright_cyan().bold());
    }

    fn show_state(&mut self, state: &GameState) {
        println!("\n{}", gallows(state));
        println!("\nWord: {}", state.render().bright_white().bold());
        if state.guessed().next().is_some() {
            println!("Guessed: {}", guessed_letters(state).bright_black());
        }
        println!(
            "Incorrect guesses remaining: {}",
            state.remaining_incorrect().to_string().yellow()
        );
    }

    fn show_leaderboard(&mut self, title: &str, ranked: &[&Player]) {
        println!("\n{}", title.bright_cyan().bold());
        for (i, player) in ranked.iter().enumerate() {
            println!("{}", leaderboard_row(i + 1, player));
        }
    }

    fn hint_given(&mut self, grant: &HintGrant, player: &Player) {
        println!("\n{} {}", "Hint:".bright_yellow().bold(), grant.hint);
        println!(
            "{} points deducted for using a hint. Current score: {}",
            grant.deducted, player.score
        );
    }

    fn hint_refused(&mut self, refusal: HintRefusal) {
        println!("{}", refusal.to_string().yellow());
    }

    fn guess_rejected(&mut self, rejection: &GuessRejection) {
        println!("{}", rejection.to_string().red());
    }

    fn guess_applied(&mut self, report: &TurnReport) {
        match report.outcome {
            GuessOutcome::Correct { .. } => {
                println!("{}", format!("Correct! +{} points!", report.points).green());
            }
            GuessOutcome::Incorrect => {
                println!("{}", format!("Sorry, '{}' is not in the word.", report.letter).red());
            }
            GuessOutcome::AlreadyGuessed => {
                println!("{}", GuessRejection::AlreadyGuessed(report.letter).to_string().red());
            }
        }
    }

    fn round_finished(&mut self, player: &Player, summary: &RoundSummary) {
        if summary.won {
            println!(
                "\n{}",
                format!("Congratulations {}! You've won!", player.name())
                    .bright_green()
                    .bold()
            );
        } else {
            println!(
                "\n{} {}",
                "Game Over! The word was:".red().bold(),
                summary.word.text().bright_white().bold()
            );
        }
        println!(
            "Round score: +{} points{}",
            summary.points_earned,
            if summary.hint_used {
                format!(" (hint cost {})", summary.penalty_paid)
            } else {
                String::new()
            }
        );
    }
}
