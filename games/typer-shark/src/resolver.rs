use typer_engine::EntityId;

use crate::enemy::EnemyRegistry;
use crate::normalize;

/// What a keystroke did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Nothing matched; no state changed.
    Ignored,
    /// The locked enemy's next character matched.
    Hit { id: EntityId, typed: usize },
    /// The locked enemy was typed out and removed from the registry.
    Defeated { id: EntityId, word_len: usize },
    /// Wrong character: the locked enemy's typed progress was reset.
    Mismatch { id: EntityId },
}

/// Routes keystrokes to the locked enemy, choosing a new lock when there is none.
#[derive(Debug, Default)]
pub struct InputResolver {
    locked: Option<EntityId>,
}

impl InputResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn locked(&self) -> Option<EntityId> {
        self.locked
    }

    pub fn clear(&mut self) {
        self.locked = None;
    }

    /// Drop the lock if it points at `id`.
    pub fn release(&mut self, id: EntityId) {
        if self.locked == Some(id) {
            self.locked = None;
        }
    }

    /// Resolve one printable character.
    pub fn type_char(&mut self, c: char, registry: &mut EnemyRegistry) -> Resolution {
        let c = normalize::fold_char(c);

        // A lock whose enemy is gone counts as no lock.
        let id = match self.locked.filter(|id| registry.get(*id).is_some()) {
            Some(id) => id,
            None => match registry.nearest_starting_with(c) {
                Some(id) => id,
                None => {
                    self.locked = None;
                    return Resolution::Ignored;
                }
            },
        };
        self.locked = Some(id);

        let Some(enemy) = registry.get_mut(id) else {
            return Resolution::Ignored;
        };
        if enemy.expected_char() != Some(c) {
            enemy.reset_typed();
            return Resolution::Mismatch { id };
        }

        enemy.advance_typed();
        if !enemy.is_complete() {
            return Resolution::Hit { id, typed: enemy.typed_len() };
        }

        let word_len = enemy.len();
        registry.despawn(id);
        self.locked = None;
        Resolution::Defeated { id, word_len }
    }

    /// Remove the last typed character of the locked enemy. Returns whether
    /// anything was locked.
    pub fn backspace(&mut self, registry: &mut EnemyRegistry) -> bool {
        let Some(id) = self.locked else {
            return false;
        };
        match registry.get_mut(id) {
            Some(enemy) => {
                enemy.retract_typed();
                true
            }
            None => {
                self.locked = None;
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enemy::Enemy;

    fn registry(words: &[(&str, f32)]) -> EnemyRegistry {
        let mut reg = EnemyRegistry::new();
        for (i, (word, speed)) in words.iter().enumerate() {
            reg.spawn(Enemy::new(EntityId(i as u32 + 1), word, 0.0, *speed, 0.0));
        }
        reg.advance(1.0);
        reg
    }

    #[test]
    fn locks_nearest_matching_enemy() {
        let mut reg = registry(&[("xa", 0.3), ("xin", 0.7)]);
        let mut res = InputResolver::new();
        assert_eq!(res.type_char('x', &mut reg), Resolution::Hit { id: EntityId(2), typed: 1 });
        assert_eq!(res.locked(), Some(EntityId(2)));
    }

    #[test]
    fn unmatched_key_without_lock_is_ignored() {
        let mut reg = registry(&[("san hô", 0.1)]);
        let mut res = InputResolver::new();
        assert_eq!(res.type_char('q', &mut reg), Resolution::Ignored);
        assert_eq!(res.locked(), None);
        assert_eq!(reg.get(EntityId(1)).unwrap().typed_len(), 0);
    }

    #[test]
    fn full_word_defeats_and_unlocks() {
        let mut reg = registry(&[("vỏ sò", 0.1)]);
        let mut res = InputResolver::new();
        for c in "vỏ s".chars() {
            assert!(matches!(res.type_char(c, &mut reg), Resolution::Hit { .. }));
        }
        assert_eq!(
            res.type_char('Ò', &mut reg),
            Resolution::Defeated { id: EntityId(1), word_len: 5 }
        );
        assert!(reg.is_empty());
        assert_eq!(res.locked(), None);
    }

    #[test]
    fn mismatch_resets_but_keeps_lock() {
        let mut reg = registry(&[("bão tố", 0.1), ("tàu", 0.2)]);
        let mut res = InputResolver::new();
        res.type_char('b', &mut reg);
        res.type_char('ã', &mut reg);
        // 't' starts another word, but the lock holds.
        assert_eq!(res.type_char('t', &mut reg), Resolution::Mismatch { id: EntityId(1) });
        assert_eq!(reg.get(EntityId(1)).unwrap().typed_len(), 0);
        assert_eq!(res.locked(), Some(EntityId(1)));
        // Mismatching at zero stays at zero.
        assert_eq!(res.type_char('z', &mut reg), Resolution::Mismatch { id: EntityId(1) });
        assert_eq!(reg.get(EntityId(1)).unwrap().typed_len(), 0);
    }

    #[test]
    fn stale_lock_is_treated_as_cleared() {
        let mut reg = registry(&[("cát vàng", 0.1), ("cá mập", 0.2)]);
        let mut res = InputResolver::new();
        res.type_char('c', &mut reg);
        assert_eq!(res.locked(), Some(EntityId(2)));
        reg.despawn(EntityId(2));
        assert_eq!(res.type_char('c', &mut reg), Resolution::Hit { id: EntityId(1), typed: 1 });
        reg.despawn(EntityId(1));
        assert!(!res.backspace(&mut reg));
        assert_eq!(res.locked(), None);
    }

    #[test]
    fn backspace_retracts_one_char() {
        let mut reg = registry(&[("neo", 0.1)]);
        let mut res = InputResolver::new();
        assert!(!res.backspace(&mut reg));
        res.type_char('n', &mut reg);
        res.type_char('e', &mut reg);
        assert!(res.backspace(&mut reg));
        assert_eq!(reg.get(EntityId(1)).unwrap().typed_len(), 1);
        res.backspace(&mut reg);
        res.backspace(&mut reg);
        assert_eq!(reg.get(EntityId(1)).unwrap().typed_len(), 0);
        assert_eq!(res.locked(), Some(EntityId(1)));
    }

    #[test]
    fn single_letter_word_is_defeated_on_lock() {
        let mut reg = registry(&[("ô", 0.1)]);
        let mut res = InputResolver::new();
        assert_eq!(
            res.type_char('Ô', &mut reg),
            Resolution::Defeated { id: EntityId(1), word_len: 1 }
        );
    }
}
