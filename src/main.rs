//! Hangman - CLI
//!
//! Line-based and full-screen hangman with scores, hints and a leaderboard.

use anyhow::Result;
use clap::{Parser, Subcommand};
use hangman::{
    commands::{FINAL_TITLE, LineInput, WordListChoice, run_classic, run_play},
    core::Word,
    engine::{GameRng, InputProvider, Presenter, ScoringEngine, SessionError},
    output::ConsolePresenter,
    players::PlayerRegistry,
    wordlists::WordSource,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Guess the word one letter at a time before the gallows is complete",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list: 'builtin' or a path to a file (asks when omitted)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<String>,

    /// Seed for word and hint selection (random when omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Points per occurrence of a correctly guessed letter
    #[arg(long, global = true, default_value_t = hangman::engine::POINTS_PER_CORRECT)]
    points: u32,

    /// Points deducted for a hint
    #[arg(long, global = true, default_value_t = hangman::engine::HINT_PENALTY)]
    hint_penalty: u32,
}

#[derive(Subcommand)]
enum Commands {
    /// Named players take turns, with a running leaderboard (default)
    Play,

    /// Single anonymous player with a replay prompt
    Classic,

    /// Full-screen terminal interface
    Tui,
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("hangman=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Resolve the word list from the -w flag, or by asking
///
/// Returns `None` after reporting why no words could be loaded.
fn load_words<I: InputProvider>(
    wordlist: Option<&str>,
    input: &mut I,
) -> Result<Option<Vec<Word>>> {
    let choice = match wordlist {
        Some(arg) => WordListChoice::from_arg(arg),
        None => match WordListChoice::prompt(input)? {
            Some(choice) => choice,
            None => return Ok(None),
        },
    };

    match choice.load() {
        Ok(words) => Ok(Some(words)),
        Err(e) => {
            println!("{e}");
            Ok(None)
        }
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut input = LineInput::stdio();
    let Some(words) = load_words(cli.wordlist.as_deref(), &mut input)? else {
        println!("Exiting the game.");
        return Ok(());
    };

    let rng = cli.seed.map_or_else(GameRng::from_entropy, GameRng::new);
    tracing::info!(seed = rng.seed(), words = words.len(), "starting");

    let scoring = ScoringEngine::new(cli.points, cli.hint_penalty);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    let outcome = match command {
        Commands::Play => run_play(&words, scoring, rng, input, ConsolePresenter::new()),
        Commands::Classic => run_classic(&words, scoring, rng, input, ConsolePresenter::new()),
        Commands::Tui => return run_tui_command(&words, scoring, rng),
    };

    match outcome {
        Ok(_) => {}
        Err(SessionError::EmptyWordSource) => {
            println!("No words available to play. Exiting the game.");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    }

    println!("Thanks for playing Hangman! Goodbye!");
    Ok(())
}

fn run_tui_command(words: &[Word], scoring: ScoringEngine, rng: GameRng) -> Result<()> {
    use hangman::interactive::{App, run_tui};

    let registry: PlayerRegistry = run_tui(App::new(words, scoring, rng))?;

    if !registry.is_empty() {
        ConsolePresenter::new().show_leaderboard(FINAL_TITLE, &registry.ranked_view());
    }
    println!("Thanks for playing Hangman! Goodbye!");
    Ok(())
}
