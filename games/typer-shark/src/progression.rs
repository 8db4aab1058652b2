use serde::Serialize;

/// Score, lives, level and combo for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameStats {
    pub score: u64,
    pub lives: i32,
    pub level: u32,
    pub combo: u32,
}

impl GameStats {
    pub fn initial(max_lives: i32) -> Self {
        Self {
            score: 0,
            lives: max_lives,
            level: 1,
            combo: 0,
        }
    }
}

/// Result of a defeat transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefeatOutcome {
    pub gained: u64,
    pub leveled_up: bool,
}

/// Score/combo/level/lives state machine fed by defeat, escape and mismatch events.
#[derive(Debug, Clone)]
pub struct Progression {
    stats: GameStats,
    /// Cumulative defeats this run; drives level-ups.
    defeats: u32,
    max_lives: i32,
    defeats_per_level: u32,
}

impl Progression {
    pub fn new(max_lives: i32, defeats_per_level: u32) -> Self {
        Self {
            stats: GameStats::initial(max_lives),
            defeats: 0,
            max_lives,
            defeats_per_level: defeats_per_level.max(1),
        }
    }

    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    pub fn defeats(&self) -> u32 {
        self.defeats
    }

    pub fn level(&self) -> u32 {
        self.stats.level
    }

    /// Whether the run has run out of lives.
    pub fn is_exhausted(&self) -> bool {
        self.stats.lives <= 0
    }

    /// An enemy with a `word_len`-character word was typed out.
    pub fn defeat(&mut self, word_len: usize) -> DefeatOutcome {
        let s = &mut self.stats;
        let gained = 75 + word_len as u64 * 15 + s.level as u64 * 20 + s.combo as u64 * 10;
        s.score += gained;
        s.combo += 1;
        self.defeats += 1;
        let leveled_up = self.defeats % self.defeats_per_level == 0;
        if leveled_up {
            s.level += 1;
        }
        DefeatOutcome { gained, leveled_up }
    }

    /// An enemy reached the player.
    pub fn escape(&mut self) {
        self.stats.lives -= 1;
        self.stats.combo = 0;
    }

    /// A keystroke did not match the locked enemy.
    pub fn mismatch(&mut self) {
        self.stats.combo = 0;
    }

    /// Back to the initial values of a fresh run.
    pub fn reset(&mut self) {
        self.stats = GameStats::initial(self.max_lives);
        self.defeats = 0;
    }

    /// Change the limits applied at the next reset.
    pub fn set_limits(&mut self, max_lives: i32, defeats_per_level: u32) {
        self.max_lives = max_lives;
        self.defeats_per_level = defeats_per_level.max(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_defeat_of_six_letter_word() {
        let mut p = Progression::new(5, 6);
        let outcome = p.defeat(6);
        assert_eq!(outcome.gained, 185);
        assert!(!outcome.leveled_up);
        assert_eq!(p.stats().score, 185);
        assert_eq!(p.stats().combo, 1);
        assert_eq!(p.stats().lives, 5);
    }

    #[test]
    fn combo_and_level_feed_the_score() {
        let mut p = Progression::new(5, 6);
        p.defeat(3);
        // level 1, combo 1: 75 + 45 + 20 + 10
        assert_eq!(p.defeat(3).gained, 150);
    }

    #[test]
    fn level_increments_every_sixth_defeat() {
        let mut p = Progression::new(5, 6);
        for n in 1..=18 {
            let outcome = p.defeat(4);
            assert_eq!(outcome.leveled_up, n % 6 == 0, "defeat {}", n);
            assert_eq!(p.level(), 1 + n / 6);
        }
    }

    #[test]
    fn mismatch_and_escape_reset_combo() {
        let mut p = Progression::new(5, 6);
        p.defeat(4);
        p.defeat(4);
        p.mismatch();
        assert_eq!(p.stats().combo, 0);
        assert_eq!(p.stats().lives, 5);
        p.defeat(4);
        p.escape();
        assert_eq!(p.stats().combo, 0);
        assert_eq!(p.stats().lives, 4);
        // Level never drops.
        assert_eq!(p.level(), 1);
    }

    #[test]
    fn last_life_exhausts() {
        let mut p = Progression::new(1, 6);
        assert!(!p.is_exhausted());
        p.escape();
        assert_eq!(p.stats().lives, 0);
        assert!(p.is_exhausted());
    }

    #[test]
    fn reset_restores_initial_stats() {
        let mut p = Progression::new(5, 6);
        for _ in 0..7 {
            p.defeat(5);
        }
        p.escape();
        p.reset();
        assert_eq!(*p.stats(), GameStats::initial(5));
        assert_eq!(p.defeats(), 0);
    }
}
