//! Per-player statistics kept for the lifetime of the process

use rustc_hash::FxHashMap;
use std::cmp::Ordering;

/// Cumulative statistics for one named player
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    pub score: u32,
    pub games_played: u32,
    pub wins: u32,
    pub hints_used: u32,
}

impl Player {
    /// Create a player with every counter at zero
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            score: 0,
            games_played: 0,
            wins: 0,
            hints_used: 0,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Count one finished round
    pub fn record_round(&mut self, won: bool) {
        self.games_played += 1;
        if won {
            self.wins += 1;
        }
    }

    /// Wins over games played, with at least 1 in the denominator
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        f64::from(self.wins) / f64::from(self.games_played.max(1))
    }

    /// Compare win rates exactly, without going through floats
    fn cmp_win_rate(&self, other: &Self) -> Ordering {
        let lhs = u64::from(self.wins) * u64::from(other.games_played.max(1));
        let rhs = u64::from(other.wins) * u64::from(self.games_played.max(1));
        lhs.cmp(&rhs)
    }
}

/// Players keyed by exact name, kept in order of first appearance
#[derive(Debug, Default)]
pub struct PlayerRegistry {
    players: Vec<Player>,
    index: FxHashMap<String, usize>,
}

impl PlayerRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch a player, creating a zeroed record the first time a name is seen
    ///
    /// Names match exactly: `"Ann"` and `"ann"` are different players.
    pub fn get_or_create(&mut self, name: &str) -> &mut Player {
        let slot = match self.index.get(name) {
            Some(&slot) => slot,
            None => {
                tracing::debug!(player = name, "registering new player");
                self.players.push(Player::new(name));
                let slot = self.players.len() - 1;
                self.index.insert(name.to_string(), slot);
                slot
            }
        };
        &mut self.players[slot]
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Player> {
        self.index.get(name).map(|&slot| &self.players[slot])
    }

    /// Record a finished round for `name`
    ///
    /// Returns `false` if no such player is registered.
    pub fn record_round_result(&mut self, name: &str, won: bool) -> bool {
        match self.index.get(name) {
            Some(&slot) => {
                self.players[slot].record_round(won);
                true
            }
            None => false,
        }
    }

    /// Players ranked by score, then win rate, both descending
    ///
    /// Ties keep registration order.
    #[must_use]
    pub fn ranked_view(&self) -> Vec<&Player> {
        let mut ranked: Vec<&Player> = self.players.iter().collect();
        // sort_by is stable
        ranked.sort_by(|a, b| {
            b.score
                .cmp(&a.score)
                .then_with(|| b.cmp_win_rate(a))
        });
        ranked
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn names(ranked: &[&Player]) -> Vec<String> {
        ranked.iter().map(|p| p.name().to_string()).collect()
    }

    #[test]
    fn get_or_create_zeroes_new_players() {
        let mut registry = PlayerRegistry::new();
        let player = registry.get_or_create("Ann");
        assert_eq!(player, &Player::new("Ann"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn get_or_create_returns_existing_record() {
        let mut registry = PlayerRegistry::new();
        registry.get_or_create("Ann").score = 40;
        assert_eq!(registry.get_or_create("Ann").score, 40);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn names_are_case_sensitive() {
        let mut registry = PlayerRegistry::new();
        registry.get_or_create("Ann");
        registry.get_or_create("ann");
        assert_eq!(registry.len(), 2);
        assert!(registry.get("ANN").is_none());
    }

    #[test]
    fn record_round_result_counts_games_and_wins() {
        let mut registry = PlayerRegistry::new();
        registry.get_or_create("Ann");
        assert!(registry.record_round_result("Ann", true));
        assert!(registry.record_round_result("Ann", false));
        assert!(!registry.record_round_result("Bob", true));

        let ann = registry.get("Ann").unwrap();
        assert_eq!(ann.games_played, 2);
        assert_eq!(ann.wins, 1);
        assert!((ann.win_rate() - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn win_rate_without_games_is_zero() {
        assert!(Player::new("Ann").win_rate().abs() < f64::EPSILON);
    }

    #[test]
    fn higher_win_rate_breaks_score_tie() {
        let mut registry = PlayerRegistry::new();
        let a = registry.get_or_create("A");
        a.score = 100;
        a.wins = 1;
        a.games_played = 2;
        let b = registry.get_or_create("B");
        b.score = 100;
        b.wins = 1;
        b.games_played = 1;

        assert_eq!(names(&registry.ranked_view()), ["B", "A"]);
    }

    #[test]
    fn score_dominates_win_rate() {
        let mut registry = PlayerRegistry::new();
        let a = registry.get_or_create("A");
        a.score = 10;
        a.record_round(true);
        registry.get_or_create("B").score = 20;

        assert_eq!(names(&registry.ranked_view()), ["B", "A"]);
    }

    #[test]
    fn full_ties_keep_registration_order() {
        let mut registry = PlayerRegistry::new();
        for name in ["Cy", "Ann", "Bob"] {
            registry.get_or_create(name);
        }
        assert_eq!(names(&registry.ranked_view()), ["Cy", "Ann", "Bob"]);
    }

    proptest! {
        #[test]
        fn wins_never_exceed_games(results in proptest::collection::vec(any::<bool>(), 0..50)) {
            let mut player = Player::new("P");
            for won in &results {
                player.record_round(*won);
            }
            prop_assert!(player.wins <= player.games_played);
            prop_assert_eq!(player.games_played as usize, results.len());
        }

        #[test]
        fn ranking_is_sorted(stats in proptest::collection::vec((0u32..50, 0u32..5, 0u32..5), 1..12)) {
            let mut registry = PlayerRegistry::new();
            for (i, (score, wins, extra)) in stats.iter().enumerate() {
                let p = registry.get_or_create(&format!("p{i}"));
                p.score = *score;
                p.wins = *wins;
                p.games_played = wins + extra;
            }
            let ranked = registry.ranked_view();
            for pair in ranked.windows(2) {
                prop_assert!(pair[0].score >= pair[1].score);
                if pair[0].score == pair[1].score {
                    prop_assert!(pair[0].cmp_win_rate(pair[1]) != Ordering::Less);
                }
            }
        }
    }
}
