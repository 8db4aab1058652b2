use serde::Deserialize;
use typer_engine::Rng;

use crate::error::ConfigError;

const EASY: &[&str] = &[
    "san hô", "cá mập", "thợ lặn", "biển sâu", "bong bóng", "đại dương", "vỏ sò", "tàu đắm",
    "ngọc trai", "sóng xanh", "mỏ neo", "cát vàng", "cánh buồm", "giáp xác", "bạch tuộc",
    "sứa biển",
];

const MEDIUM: &[&str] = &[
    "đầm phá", "lớp vảy", "định vị âm", "hải lưu", "cá mập đầu búa", "kho báu cổ",
    "truyền thuyết", "đảo san hô", "bão tố", "lấp lánh", "hơi thở cuối", "đoàn thuyền",
    "mũi giáo", "làn gió lạnh", "vùng nước xoáy",
];

const HARD: &[&str] = &[
    "bí ẩn đại dương", "khoang điều áp", "ánh trăng bạc", "hải tặc truyền kỳ",
    "trường sa ký ức", "vệt sáng phù du", "độ sâu nghìn trượng", "mỏ neo rỉ sét",
    "giai thoại thần long", "dòng chảy ngầm",
];

/// Difficulty band a level draws its words from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Easy,
    Medium,
    Hard,
}

impl Tier {
    /// Levels below 3 are easy, 3..6 medium, 6 and up hard. Level 0 clamps to easy.
    pub fn for_level(level: u32) -> Tier {
        match level {
            0..=2 => Tier::Easy,
            3..=5 => Tier::Medium,
            _ => Tier::Hard,
        }
    }
}

/// The word source: three tiers of words, drawn uniformly with replacement.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WordBank {
    easy: Vec<String>,
    medium: Vec<String>,
    hard: Vec<String>,
}

impl WordBank {
    /// Build a bank from explicit tiers, validating that every tier is usable.
    pub fn new(easy: Vec<String>, medium: Vec<String>, hard: Vec<String>) -> Result<Self, ConfigError> {
        let bank = WordBank { easy, medium, hard };
        bank.validate()?;
        Ok(bank)
    }

    /// Parse a bank from JSON: `{"easy": [...], "medium": [...], "hard": [...]}`.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let bank: WordBank = serde_json::from_str(json)?;
        bank.validate()?;
        Ok(bank)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for (name, words) in [("easy", &self.easy), ("medium", &self.medium), ("hard", &self.hard)] {
            if words.is_empty() {
                return Err(ConfigError::EmptyTier(name));
            }
            if words.iter().any(|w| w.is_empty()) {
                return Err(ConfigError::EmptyWord(name));
            }
        }
        Ok(())
    }

    pub fn tier(&self, tier: Tier) -> &[String] {
        match tier {
            Tier::Easy => &self.easy,
            Tier::Medium => &self.medium,
            Tier::Hard => &self.hard,
        }
    }

    /// Draw a word for `level`.
    pub fn pick(&self, level: u32, rng: &mut Rng) -> Option<&str> {
        rng.pick(self.tier(Tier::for_level(level))).map(String::as_str)
    }
}

impl Default for WordBank {
    fn default() -> Self {
        let owned = |words: &[&str]| -> Vec<String> { words.iter().map(|w| w.to_string()).collect() };
        WordBank {
            easy: owned(EASY),
            medium: owned(MEDIUM),
            hard: owned(HARD),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_bands() {
        assert_eq!(Tier::for_level(0), Tier::Easy);
        assert_eq!(Tier::for_level(1), Tier::Easy);
        assert_eq!(Tier::for_level(2), Tier::Easy);
        assert_eq!(Tier::for_level(3), Tier::Medium);
        assert_eq!(Tier::for_level(5), Tier::Medium);
        assert_eq!(Tier::for_level(6), Tier::Hard);
        assert_eq!(Tier::for_level(40), Tier::Hard);
    }

    #[test]
    fn picks_from_the_level_tier() {
        let bank = WordBank::default();
        let mut rng = Rng::new(3);
        for _ in 0..50 {
            let w = bank.pick(1, &mut rng).unwrap();
            assert!(bank.tier(Tier::Easy).iter().any(|e| e == w));
            let w = bank.pick(4, &mut rng).unwrap();
            assert!(bank.tier(Tier::Medium).iter().any(|e| e == w));
            let w = bank.pick(9, &mut rng).unwrap();
            assert!(bank.tier(Tier::Hard).iter().any(|e| e == w));
        }
    }

    #[test]
    fn default_bank_is_valid() {
        assert!(WordBank::default().validate().is_ok());
    }

    #[test]
    fn from_json_rejects_empty_tier() {
        let err = WordBank::from_json(r#"{"easy": ["a"], "medium": [], "hard": ["c"]}"#).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyTier("medium")));
    }

    #[test]
    fn from_json_rejects_empty_word() {
        let err = WordBank::from_json(r#"{"easy": ["a", ""], "medium": ["b"], "hard": ["c"]}"#).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyWord("easy")));
    }

    #[test]
    fn from_json_accepts_custom_bank() {
        let bank = WordBank::from_json(r#"{"easy": ["reef"], "medium": ["trench"], "hard": ["abyssal plain"]}"#).unwrap();
        let mut rng = Rng::new(1);
        assert_eq!(bank.pick(1, &mut rng), Some("reef"));
        assert_eq!(bank.pick(7, &mut rng), Some("abyssal plain"));
    }
}
