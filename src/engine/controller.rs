//! Blocking round driver
//!
//! [`SessionController`] runs a [`Session`] against an [`InputProvider`] and a
//! [`Presenter`], re-prompting until it has a fresh letter each turn.

use super::random::{RandomSource, choose};
use super::scoring::ScoringEngine;
use super::session::{
    HintGrant, HintRefusal, RoundFinished, RoundSummary, Session, TurnReport,
};
use crate::core::{GameState, GuessInputError, Letter, Word};
use crate::players::{Player, PlayerRegistry};
use std::fmt;
use std::io;
use thiserror::Error;

/// Heading used for the leaderboard shown between turns and rounds
pub const LEADERBOARD_TITLE: &str = "=== HIGHSCORES ===";

/// Line-oriented player input
pub trait InputProvider {
    /// Show `prompt` and read one line
    ///
    /// Returns `Ok(None)` when input is exhausted.
    ///
    /// # Errors
    /// Returns any I/O error from the underlying reader.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;

    /// Ask a yes/no question; anything but an affirmative answer is "no"
    ///
    /// # Errors
    /// Returns any I/O error from the underlying reader.
    fn read_yes_no(&mut self, prompt: &str) -> io::Result<bool> {
        Ok(self
            .read_line(prompt)?
            .is_some_and(|answer| is_affirmative(&answer)))
    }
}

impl<I: InputProvider + ?Sized> InputProvider for &mut I {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        (**self).read_line(prompt)
    }
}

/// `y` or `yes`, in any case
#[must_use]
pub fn is_affirmative(answer: &str) -> bool {
    let answer = answer.trim();
    answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
}

/// Everything a front end needs to show during a round
pub trait Presenter {
    fn round_started(&mut self, player: &Player);
    fn show_state(&mut self, state: &GameState);
    fn show_leaderboard(&mut self, title: &str, ranked: &[&Player]);
    fn hint_given(&mut self, grant: &HintGrant, player: &Player);
    fn hint_refused(&mut self, refusal: HintRefusal);
    fn guess_rejected(&mut self, rejection: &GuessRejection);
    fn guess_applied(&mut self, report: &TurnReport);
    fn round_finished(&mut self, player: &Player, summary: &RoundSummary);
}

impl<P: Presenter + ?Sized> Presenter for &mut P {
    fn round_started(&mut self, player: &Player) {
        (**self).round_started(player);
    }
    fn show_state(&mut self, state: &GameState) {
        (**self).show_state(state);
    }
    fn show_leaderboard(&mut self, title: &str, ranked: &[&Player]) {
        (**self).show_leaderboard(title, ranked);
    }
    fn hint_given(&mut self, grant: &HintGrant, player: &Player) {
        (**self).hint_given(grant, player);
    }
    fn hint_refused(&mut self, refusal: HintRefusal) {
        (**self).hint_refused(refusal);
    }
    fn guess_rejected(&mut self, rejection: &GuessRejection) {
        (**self).guess_rejected(rejection);
    }
    fn guess_applied(&mut self, report: &TurnReport) {
        (**self).guess_applied(report);
    }
    fn round_finished(&mut self, player: &Player, summary: &RoundSummary) {
        (**self).round_finished(player, summary);
    }
}

/// A guess that has to be asked for again
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessRejection {
    Invalid(GuessInputError),
    AlreadyGuessed(Letter),
}

impl fmt::Display for GuessRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invalid(e) => write!(f, "{e}"),
            Self::AlreadyGuessed(_) => {
                write!(f, "This letter has already been guessed. Try another one.")
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("No words available to play.")]
    EmptyWordSource,
    #[error(transparent)]
    RoundFinished(#[from] RoundFinished),
    #[error("input closed before the round finished")]
    InputClosed,
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Drives whole rounds for named players
pub struct SessionController<'a, R, I, P> {
    words: &'a [Word],
    registry: &'a mut PlayerRegistry,
    scoring: ScoringEngine,
    rng: R,
    input: I,
    presenter: P,
    turn_leaderboard: bool,
}

impl<'a, R, I, P> SessionController<'a, R, I, P>
where
    R: RandomSource,
    I: InputProvider,
    P: Presenter,
{
    pub fn new(
        words: &'a [Word],
        registry: &'a mut PlayerRegistry,
        scoring: ScoringEngine,
        rng: R,
        input: I,
        presenter: P,
    ) -> Self {
        Self {
            words,
            registry,
            scoring,
            rng,
            input,
            presenter,
            turn_leaderboard: true,
        }
    }

    /// Whether to show the leaderboard before every turn (on by default)
    #[must_use]
    pub fn with_turn_leaderboard(mut self, enabled: bool) -> Self {
        self.turn_leaderboard = enabled;
        self
    }

    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    #[must_use]
    pub fn registry(&self) -> &PlayerRegistry {
        &*self.registry
    }

    /// Show the current ranking under `title`
    pub fn show_leaderboard(&mut self, title: &str) {
        self.presenter
            .show_leaderboard(title, &self.registry.ranked_view());
    }

    /// Play one full round for `name`, creating the player if needed
    ///
    /// # Errors
    /// Returns [`SessionError::EmptyWordSource`] without starting a round when
    /// there are no words, [`SessionError::InputClosed`] if input runs out
    /// mid-round, and [`SessionError::Io`] on read failures.
    pub fn play_round(&mut self, name: &str) -> Result<RoundSummary, SessionError> {
        let word = choose(&mut self.rng, self.words)
            .cloned()
            .ok_or(SessionError::EmptyWordSource)?;

        tracing::info!(player = name, letters = word.len(), "round started");
        tracing::trace!(secret = word.text(), "secret word drawn");

        let mut session = Session::start(word, self.scoring);
        self.presenter
            .round_started(self.registry.get_or_create(name));
        self.presenter.show_state(session.state());

        let summary = loop {
            if let Some(summary) = session.summary() {
                break summary;
            }

            if self.turn_leaderboard {
                self.show_leaderboard(LEADERBOARD_TITLE);
            }
            self.offer_hint(&mut session, name)?;

            let letter = self.read_guess(name, session.state())?;
            let report = session.guess(self.registry.get_or_create(name), letter)?;
            self.presenter.guess_applied(&report);
            self.presenter.show_state(session.state());
        };

        self.registry.record_round_result(name, summary.won);
        tracing::info!(
            player = name,
            won = summary.won,
            word = summary.word.text(),
            points = summary.points_earned,
            "round finished"
        );
        self.presenter
            .round_finished(self.registry.get_or_create(name), &summary);
        Ok(summary)
    }

    fn offer_hint(&mut self, session: &mut Session, name: &str) -> Result<(), SessionError> {
        if !session.hint_eligible() || !self.input.read_yes_no("Would you like a hint? (Y/N)")? {
            return Ok(());
        }

        let player = self.registry.get_or_create(name);
        match session.take_hint(player, &mut self.rng) {
            Ok(grant) => self.presenter.hint_given(&grant, player),
            Err(refusal) => self.presenter.hint_refused(refusal),
        }
        Ok(())
    }

    fn read_guess(&mut self, name: &str, state: &GameState) -> Result<Letter, SessionError> {
        let prompt = format!("{name}, enter a letter");
        loop {
            let raw = self
                .input
                .read_line(&prompt)?
                .ok_or(SessionError::InputClosed)?;

            let rejection = match Letter::parse(&raw) {
                Ok(letter) if state.has_guessed(letter) => GuessRejection::AlreadyGuessed(letter),
                Ok(letter) => return Ok(letter),
                Err(e) => GuessRejection::Invalid(e),
            };
            tracing::debug!(input = raw.trim(), %rejection, "guess rejected");
            self.presenter.guess_rejected(&rejection);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::testing::{RecordingPresenter, ScriptedInput, ScriptedRandom};

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(*w).unwrap()).collect()
    }

    #[test]
    fn affirmative_answers() {
        assert!(is_affirmative("y"));
        assert!(is_affirmative(" YES \n"));
        assert!(!is_affirmative("n"));
        assert!(!is_affirmative("yep"));
        assert!(!is_affirmative(""));
    }

    #[test]
    fn cat_round_end_to_end() {
        let words = words(&["CAT"]);
        let mut registry = PlayerRegistry::new();
        let mut controller = SessionController::new(
            &words,
            &mut registry,
            ScoringEngine::default(),
            ScriptedRandom::new([0]),
            ScriptedInput::new(["C", "A", "T"]),
            RecordingPresenter::default(),
        );

        let summary = controller.play_round("Ann").unwrap();
        assert!(summary.won);
        assert_eq!(summary.points_earned, 30);
        assert_eq!(controller.presenter_mut().count("guess"), 3);
        assert_eq!(controller.presenter_mut().count("finished Ann won=true"), 1);

        let ann = controller.registry().get("Ann").unwrap();
        assert_eq!((ann.score, ann.games_played, ann.wins), (30, 1, 1));
    }

    #[test]
    fn dog_round_lost_and_revealed() {
        let words = words(&["DOG"]);
        let mut registry = PlayerRegistry::new();
        let mut controller = SessionController::new(
            &words,
            &mut registry,
            ScoringEngine::default(),
            ScriptedRandom::new([0]),
            // Declines every hint offer once two misses are in
            ScriptedInput::new(["Q", "X", "n", "Z", "n", "J", "n", "V", "n", "K"]),
            RecordingPresenter::default(),
        );

        let summary = controller.play_round("Bob").unwrap();
        assert!(!summary.won);
        assert_eq!(summary.word.text(), "DOG");
        assert_eq!(summary.incorrect, 6);
        assert_eq!(
            controller.presenter_mut().count("finished Bob won=false word=DOG"),
            1
        );

        let bob = controller.registry().get("Bob").unwrap();
        assert_eq!((bob.games_played, bob.wins, bob.hints_used), (1, 0, 0));
    }

    #[test]
    fn bad_input_is_reprompted() {
        let words = words(&["CAT"]);
        let mut registry = PlayerRegistry::new();
        let mut input = ScriptedInput::new(["ca", "7", "", "C", "c", "A", "T"]);
        let mut presenter = RecordingPresenter::default();
        let mut controller = SessionController::new(
            &words,
            &mut registry,
            ScoringEngine::default(),
            ScriptedRandom::new([0]),
            &mut input,
            &mut presenter,
        )
        .with_turn_leaderboard(false);

        controller.play_round("Ann").unwrap();
        drop(controller);

        assert_eq!(presenter.count("rejected Please enter a single letter."), 2);
        assert_eq!(presenter.count("rejected Please enter a valid alphabet letter."), 1);
        assert_eq!(presenter.count("rejected This letter has already been guessed."), 1);
        assert_eq!(presenter.count("board"), 0);
        assert_eq!(input.prompts.len(), 7);
        assert!(input.prompts.iter().all(|p| p == "Ann, enter a letter"));
        assert_eq!(registry.get("Ann").unwrap().score, 30);
    }

    #[test]
    fn hint_offered_only_after_two_misses() {
        let words = words(&["CAT"]);
        let mut registry = PlayerRegistry::new();
        let mut input = ScriptedInput::new(["X", "Y", "y", "C", "A", "T"]);
        let mut presenter = RecordingPresenter::default();
        let mut controller = SessionController::new(
            &words,
            &mut registry,
            ScoringEngine::default(),
            // Word draw, then hint draw over unguessed C, A, T
            ScriptedRandom::new([0, 2]),
            &mut input,
            &mut presenter,
        );

        let summary = controller.play_round("Ann").unwrap();
        drop(controller);

        assert!(summary.won && summary.hint_used);
        let hint_prompts = input
            .prompts
            .iter()
            .filter(|p| p.starts_with("Would you like a hint"))
            .count();
        assert_eq!(hint_prompts, 1);
        assert_eq!(presenter.count("hint T score=0"), 1);

        let ann = registry.get("Ann").unwrap();
        assert_eq!((ann.score, ann.hints_used), (30, 1));
    }

    #[test]
    fn empty_word_list_refuses_to_start() {
        let mut registry = PlayerRegistry::new();
        let mut controller = SessionController::new(
            &[],
            &mut registry,
            ScoringEngine::default(),
            ScriptedRandom::new([0]),
            ScriptedInput::default(),
            RecordingPresenter::default(),
        );

        assert!(matches!(
            controller.play_round("Ann"),
            Err(SessionError::EmptyWordSource)
        ));
        assert!(controller.registry().is_empty());
        assert!(controller.presenter_mut().events.is_empty());
    }

    #[test]
    fn closed_input_ends_round_without_result() {
        let words = words(&["CAT"]);
        let mut registry = PlayerRegistry::new();
        let mut controller = SessionController::new(
            &words,
            &mut registry,
            ScoringEngine::default(),
            ScriptedRandom::new([0]),
            ScriptedInput::new(["C"]),
            RecordingPresenter::default(),
        );

        assert!(matches!(
            controller.play_round("Ann"),
            Err(SessionError::InputClosed)
        ));
        assert_eq!(controller.registry().get("Ann").unwrap().games_played, 0);
    }

    #[test]
    fn leaderboard_shown_each_turn() {
        let words = words(&["AB"]);
        let mut registry = PlayerRegistry::new();
        registry.get_or_create("Zed").score = 100;
        let mut controller = SessionController::new(
            &words,
            &mut registry,
            ScoringEngine::default(),
            ScriptedRandom::new([0]),
            ScriptedInput::new(["A", "B"]),
            RecordingPresenter::default(),
        );

        controller.play_round("Ann").unwrap();
        assert_eq!(controller.presenter_mut().count("board Zed,Ann"), 2);
    }
}
