use bulls_core::{Difficulty, GameSummary};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Statistics file, relative to the working directory
pub const STATS_FILE: &str = "bulls_cows_stats.json";

/// Fewest attempts ever needed to win
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestScore {
    pub attempts: u32,
    pub difficulty: Difficulty,
    /// Date of the game, YYYY-MM-DD
    pub date: String,
}

/// Statistics for a specific difficulty level
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DifficultyStats {
    pub played: u32,
    pub won: u32,
    /// Sum of attempts over won games
    pub total_attempts: u32,
}

impl DifficultyStats {
    pub fn average_attempts(&self) -> Option<f64> {
        if self.won > 0 {
            Some(f64::from(self.total_attempts) / f64::from(self.won))
        } else {
            None
        }
    }
}

/// Aggregate statistics across sessions.
///
/// Counters only change through [`StatsRecord::record_win`] and
/// [`StatsRecord::record_loss`], which keeps `games_won <= games_played`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsRecord {
    pub games_played: u32,
    pub games_won: u32,
    /// Sum of attempts over won games
    pub total_attempts: u32,
    pub best_score: Option<BestScore>,
    pub difficulty_stats: BTreeMap<Difficulty, DifficultyStats>,
}

impl StatsRecord {
    /// Record a won game. Returns true when it sets a new best score.
    pub fn record_win(&mut self, summary: &GameSummary, date: &str) -> bool {
        // Counters come from an editable file, so never overflow
        self.games_played = self.games_played.saturating_add(1);
        self.games_won = self.games_won.saturating_add(1).min(self.games_played);
        self.total_attempts = self.total_attempts.saturating_add(summary.attempts);

        let bucket = self.difficulty_stats.entry(summary.difficulty).or_default();
        bucket.played = bucket.played.saturating_add(1);
        bucket.won = bucket.won.saturating_add(1).min(bucket.played);
        bucket.total_attempts = bucket.total_attempts.saturating_add(summary.attempts);

        let is_best = self
            .best_score
            .as_ref()
            .is_none_or(|best| summary.attempts < best.attempts);
        if is_best {
            self.best_score = Some(BestScore {
                attempts: summary.attempts,
                difficulty: summary.difficulty,
                date: date.to_string(),
            });
        }
        is_best
    }

    /// Record a lost game
    pub fn record_loss(&mut self, summary: &GameSummary) {
        self.games_played = self.games_played.saturating_add(1);
        let bucket = self.difficulty_stats.entry(summary.difficulty).or_default();
        bucket.played = bucket.played.saturating_add(1);
    }

    /// Percentage of games won
    pub fn win_rate(&self) -> Option<f64> {
        if self.games_played > 0 {
            Some(f64::from(self.games_won) / f64::from(self.games_played) * 100.0)
        } else {
            None
        }
    }

    pub fn average_attempts(&self) -> Option<f64> {
        if self.games_won > 0 {
            Some(f64::from(self.total_attempts) / f64::from(self.games_won))
        } else {
            None
        }
    }

    pub fn for_difficulty(&self, difficulty: Difficulty) -> DifficultyStats {
        self.difficulty_stats
            .get(&difficulty)
            .cloned()
            .unwrap_or_default()
    }
}

/// JSON file backing for [`StatsRecord`]
#[derive(Debug, Clone)]
pub struct StatsStore {
    path: PathBuf,
}

impl Default for StatsStore {
    fn default() -> Self {
        Self::new(STATS_FILE)
    }
}

impl StatsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load stats from file; missing or malformed files yield empty stats
    pub fn load(&self) -> StatsRecord {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) => {
                log::debug!("no stats loaded from {}: {}", self.path.display(), e);
                return StatsRecord::default();
            }
        };
        match serde_json::from_str::<StatsRecord>(&json) {
            Ok(stats) if stats.games_won <= stats.games_played => stats,
            Ok(_) => {
                log::warn!("{} has more wins than games; ignoring it", self.path.display());
                StatsRecord::default()
            }
            Err(e) => {
                log::warn!("ignoring malformed {}: {}", self.path.display(), e);
                StatsRecord::default()
            }
        }
    }

    /// Save stats to file. Failures are logged and otherwise ignored.
    pub fn save(&self, stats: &StatsRecord) {
        let json = match serde_json::to_string_pretty(stats) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("could not serialize stats: {}", e);
                return;
            }
        };
        match fs::write(&self.path, json) {
            Ok(()) => log::debug!("stats saved to {}", self.path.display()),
            Err(e) => log::warn!("could not write {}: {}", self.path.display(), e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bulls_core::validate;
    use std::time::Duration;

    fn summary(difficulty: Difficulty, attempts: u32) -> GameSummary {
        let digits = &"123456"[..difficulty.digit_count()];
        GameSummary {
            difficulty,
            secret: validate(digits, difficulty.digit_count()).unwrap(),
            attempts,
            max_tries: difficulty.max_tries(),
            elapsed: Duration::from_secs(30),
        }
    }

    #[test]
    fn test_record_win_sets_best_score() {
        let mut stats = StatsRecord::default();
        assert!(stats.record_win(&summary(Difficulty::Medium, 6), "2026-01-02"));
        assert_eq!(stats.games_played, 1);
        assert_eq!(stats.games_won, 1);
        assert_eq!(stats.total_attempts, 6);
        assert_eq!(
            stats.best_score,
            Some(BestScore {
                attempts: 6,
                difficulty: Difficulty::Medium,
                date: "2026-01-02".to_string(),
            })
        );

        // Equal is not better
        assert!(!stats.record_win(&summary(Difficulty::Easy, 6), "2026-01-03"));
        assert!(stats.record_win(&summary(Difficulty::Hard, 3), "2026-01-04"));
        assert_eq!(stats.best_score.as_ref().unwrap().difficulty, Difficulty::Hard);
        assert_eq!(stats.total_attempts, 15);
    }

    #[test]
    fn test_record_loss() {
        let mut stats = StatsRecord::default();
        stats.record_loss(&summary(Difficulty::Easy, 12));
        assert_eq!(stats.games_played, 1);
        assert_eq!(stats.games_won, 0);
        assert_eq!(stats.total_attempts, 0);
        assert_eq!(stats.best_score, None);
        assert_eq!(
            stats.for_difficulty(Difficulty::Easy),
            DifficultyStats { played: 1, won: 0, total_attempts: 0 }
        );
    }

    #[test]
    fn test_counters_saturate() {
        let mut stats = StatsRecord {
            games_played: u32::MAX,
            games_won: u32::MAX,
            total_attempts: u32::MAX - 1,
            ..Default::default()
        };
        stats.record_win(&summary(Difficulty::Easy, 5), "2026-01-01");
        stats.record_loss(&summary(Difficulty::Easy, 12));
        assert_eq!(stats.games_played, u32::MAX);
        assert_eq!(stats.games_won, u32::MAX);
        assert_eq!(stats.total_attempts, u32::MAX);
        assert!(stats.games_won <= stats.games_played);

        let dir = tempfile::tempdir().unwrap();
        let store = StatsStore::new(dir.path().join(STATS_FILE));
        store.save(&stats);
        assert_eq!(store.load(), stats);
    }

    #[test]
    fn test_rates() {
        let mut stats = StatsRecord::default();
        assert_eq!(stats.win_rate(), None);
        assert_eq!(stats.average_attempts(), None);
        stats.record_win(&summary(Difficulty::Easy, 4), "2026-01-01");
        stats.record_win(&summary(Difficulty::Easy, 7), "2026-01-01");
        stats.record_loss(&summary(Difficulty::Easy, 12));
        stats.record_loss(&summary(Difficulty::Easy, 12));
        assert_eq!(stats.win_rate(), Some(50.0));
        assert_eq!(stats.average_attempts(), Some(5.5));
        assert_eq!(stats.for_difficulty(Difficulty::Easy).average_attempts(), Some(5.5));
        assert_eq!(stats.for_difficulty(Difficulty::Expert).average_attempts(), None);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = StatsStore::new(dir.path().join("nope.json"));
        assert_eq!(store.load(), StatsRecord::default());
    }

    #[test]
    fn test_load_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(STATS_FILE);
        fs::write(&path, "{ not json").unwrap();
        assert_eq!(StatsStore::new(&path).load(), StatsRecord::default());

        fs::write(&path, r#"{"games_played": 1, "games_won": 3}"#).unwrap();
        assert_eq!(StatsStore::new(&path).load(), StatsRecord::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = StatsStore::new(dir.path().join(STATS_FILE));
        let mut stats = StatsRecord::default();
        stats.record_win(&summary(Difficulty::Expert, 5), "2026-10-18");
        stats.record_loss(&summary(Difficulty::Easy, 12));
        store.save(&stats);

        let reloaded = StatsStore::new(store.path()).load();
        assert_eq!(reloaded, stats);
    }

    #[test]
    fn test_file_format() {
        let dir = tempfile::tempdir().unwrap();
        let store = StatsStore::new(dir.path().join(STATS_FILE));
        let mut stats = StatsRecord::default();
        stats.record_win(&summary(Difficulty::Medium, 3), "2026-10-18");
        store.save(&stats);

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(store.path()).unwrap()).unwrap();
        assert_eq!(json["games_played"], 1);
        assert_eq!(json["games_won"], 1);
        assert_eq!(json["total_attempts"], 3);
        assert_eq!(json["best_score"]["difficulty"], "medium");
        assert_eq!(json["best_score"]["date"], "2026-10-18");
        assert_eq!(json["difficulty_stats"]["medium"]["won"], 1);
    }

    #[test]
    fn test_reads_legacy_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(STATS_FILE);
        let legacy = r#"{
  "games_played": 3,
  "games_won": 2,
  "total_attempts": 11,
  "best_score": {"attempts": 4, "difficulty": "easy", "date": "2024-05-01"},
  "average_attempts": 0,
  "difficulty_stats": {"easy": {"played": 3, "won": 2, "total_attempts": 11}}
}"#;
        fs::write(&path, legacy).unwrap();
        let stats = StatsStore::new(&path).load();
        assert_eq!(stats.games_played, 3);
        assert_eq!(stats.best_score.as_ref().unwrap().attempts, 4);
        assert_eq!(stats.for_difficulty(Difficulty::Easy).won, 2);
    }

    #[test]
    fn test_save_to_unwritable_path_is_silent() {
        let dir = tempfile::tempdir().unwrap();
        let store = StatsStore::new(dir.path().join("missing").join(STATS_FILE));
        store.save(&StatsRecord::default());
        assert_eq!(store.load(), StatsRecord::default());
    }
}
