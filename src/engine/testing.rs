//! Test doubles for driving rounds without a terminal

use super::controller::{GuessRejection, InputProvider, Presenter};
use super::random::RandomSource;
use super::session::{HintGrant, HintRefusal, RoundSummary, TurnReport};
use crate::core::GameState;
use crate::players::Player;
use std::collections::VecDeque;
use std::io;

/// Replays a fixed list of indices, then repeats the last one
pub struct ScriptedRandom {
    draws: VecDeque<usize>,
    last: usize,
}

impl ScriptedRandom {
    pub fn new(draws: impl IntoIterator<Item = usize>) -> Self {
        Self {
            draws: draws.into_iter().collect(),
            last: 0,
        }
    }
}

impl RandomSource for ScriptedRandom {
    fn index(&mut self, len: usize) -> usize {
        if let Some(next) = self.draws.pop_front() {
            self.last = next;
        }
        self.last % len
    }
}

/// Answers prompts from a script; end of script is end of input
#[derive(Default)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
    pub prompts: Vec<String>,
}

impl ScriptedInput {
    pub fn new<'a>(lines: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            lines: lines.into_iter().map(str::to_string).collect(),
            prompts: Vec::new(),
        }
    }
}

impl InputProvider for ScriptedInput {
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.prompts.push(prompt.to_string());
        Ok(self.lines.pop_front())
    }
}

/// Records presenter calls as short strings
#[derive(Default)]
pub struct RecordingPresenter {
    pub events: Vec<String>,
}

impl RecordingPresenter {
    pub fn count(&self, prefix: &str) -> usize {
        self.events.iter().filter(|e| e.starts_with(prefix)).count()
    }
}

impl Presenter for RecordingPresenter {
    fn round_started(&mut self, player: &Player) {
        self.events.push(format!("start {}", player.name()));
    }

    fn show_state(&mut self, state: &GameState) {
        self.events
            .push(format!("state {} {}", state.render(), state.incorrect_count()));
    }

    fn show_leaderboard(&mut self, _title: &str, ranked: &[&Player]) {
        let names: Vec<&str> = ranked.iter().map(|p| p.name()).collect();
        self.events.push(format!("board {}", names.join(",")));
    }

    fn hint_given(&mut self, grant: &HintGrant, player: &Player) {
        self.events
            .push(format!("hint {} score={}", grant.hint.letter, player.score));
    }

    fn hint_refused(&mut self, refusal: HintRefusal) {
        self.events.push(format!("refused {refusal}"));
    }

    fn guess_rejected(&mut self, rejection: &GuessRejection) {
        self.events.push(format!("rejected {rejection}"));
    }

    fn guess_applied(&mut self, report: &TurnReport) {
        self.events
            .push(format!("guess {} {:?}", report.letter, report.outcome));
    }

    fn round_finished(&mut self, player: &Player, summary: &RoundSummary) {
        self.events.push(format!(
            "finished {} won={} word={}",
            player.name(),
            summary.won,
            summary.word
        ));
    }
}
