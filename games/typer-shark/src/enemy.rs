use typer_engine::EntityId;

use crate::normalize;

/// One shark in flight: a word to type and how far it has swum toward the boat.
#[derive(Debug, Clone, PartialEq)]
pub struct Enemy {
    id: EntityId,
    /// Word as displayed, composed to NFC.
    word: String,
    /// Case-folded characters of `word`, same length as its char count.
    folded: Vec<char>,
    /// Count of correctly typed leading characters, `0..=folded.len()`.
    typed_len: usize,
    lane: f32,
    speed: f32,
    /// Normalized distance to the player, `0..=1`.
    progress: f32,
    wobble_seed: f32,
}

impl Enemy {
    pub fn new(id: EntityId, word: &str, lane: f32, speed: f32, wobble_seed: f32) -> Self {
        Self {
            id,
            word: normalize::compose(word),
            folded: normalize::fold_str(word),
            typed_len: 0,
            lane,
            speed,
            progress: 0.0,
            wobble_seed,
        }
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    /// Length of the word in characters.
    pub fn len(&self) -> usize {
        self.folded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.folded.is_empty()
    }

    pub fn typed_len(&self) -> usize {
        self.typed_len
    }

    pub fn lane(&self) -> f32 {
        self.lane
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn wobble_seed(&self) -> f32 {
        self.wobble_seed
    }

    /// Folded first character of the word.
    pub fn first_char(&self) -> Option<char> {
        self.folded.first().copied()
    }

    /// Folded character the player must type next. `None` once complete.
    pub fn expected_char(&self) -> Option<char> {
        self.folded.get(self.typed_len).copied()
    }

    pub fn is_complete(&self) -> bool {
        self.typed_len == self.folded.len()
    }

    /// The word split into its typed and remaining parts.
    pub fn typed_split(&self) -> (&str, &str) {
        let at = self
            .word
            .char_indices()
            .nth(self.typed_len)
            .map_or(self.word.len(), |(i, _)| i);
        self.word.split_at(at)
    }

    pub(crate) fn advance_typed(&mut self) {
        self.typed_len = (self.typed_len + 1).min(self.folded.len());
    }

    pub(crate) fn reset_typed(&mut self) {
        self.typed_len = 0;
    }

    pub(crate) fn retract_typed(&mut self) {
        self.typed_len = self.typed_len.saturating_sub(1);
    }

    /// Move toward the player by `speed * dt`. Returns true when the enemy has arrived.
    fn swim(&mut self, dt: f32) -> bool {
        self.progress = (self.progress + self.speed * dt.max(0.0)).min(1.0);
        self.progress >= 1.0
    }
}

/// Live enemies, stored in a flat Vec.
/// Designed for small counts (a screenful of sharks).
pub struct EnemyRegistry {
    enemies: Vec<Enemy>,
}

impl EnemyRegistry {
    pub fn new() -> Self {
        Self {
            enemies: Vec::with_capacity(16),
        }
    }

    /// Add an enemy to the registry.
    pub fn spawn(&mut self, enemy: Enemy) {
        self.enemies.push(enemy);
    }

    /// Remove an enemy by ID. Returns the removed enemy if found.
    pub fn despawn(&mut self, id: EntityId) -> Option<Enemy> {
        let idx = self.enemies.iter().position(|e| e.id == id)?;
        Some(self.enemies.swap_remove(idx))
    }

    pub fn get(&self, id: EntityId) -> Option<&Enemy> {
        self.enemies.iter().find(|e| e.id == id)
    }

    pub(crate) fn get_mut(&mut self, id: EntityId) -> Option<&mut Enemy> {
        self.enemies.iter_mut().find(|e| e.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Enemy> {
        self.enemies.iter()
    }

    pub fn len(&self) -> usize {
        self.enemies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.enemies.is_empty()
    }

    pub fn clear(&mut self) {
        self.enemies.clear();
    }

    /// Advance every enemy by `dt` seconds. Enemies that reach the player are
    /// removed and returned, in registry order.
    pub fn advance(&mut self, dt: f32) -> Vec<Enemy> {
        let mut escaped = Vec::new();
        let mut survivors = Vec::with_capacity(self.enemies.len());
        for mut enemy in self.enemies.drain(..) {
            if enemy.swim(dt) {
                escaped.push(enemy);
            } else {
                survivors.push(enemy);
            }
        }
        self.enemies = survivors;
        escaped
    }

    /// The enemy whose word starts with folded `c`, nearest to the player first.
    /// Equal progress goes to the earlier spawn.
    pub fn nearest_starting_with(&self, c: char) -> Option<EntityId> {
        self.enemies
            .iter()
            .filter(|e| e.first_char() == Some(c))
            .max_by(|a, b| {
                a.progress
                    .total_cmp(&b.progress)
                    .then_with(|| b.id.cmp(&a.id))
            })
            .map(|e| e.id)
    }
}

impl Default for EnemyRegistry {
    fn default() -> Self {
        Self::new()
    }
}
