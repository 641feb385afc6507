//! Aggregate player statistics.
//!
//! The aggregate math is pure and shared by everyone; persistence is a
//! local cache written synchronously plus a best-effort remote mirror.
//! Remote failures are logged and otherwise invisible, the cache always
//! wins locally.

use serde::{Deserialize, Serialize};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen_futures::spawn_local;

#[cfg(target_arch = "wasm32")]
use crate::platform::{net, storage};

/// Lifetime aggregates shown in the statistics scene.
///
/// Field names stay camelCase on the wire so existing saves keep loading.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlayerStats {
    pub best_score: u32,
    pub total_games: u32,
    pub total_points: u32,
    pub average_score: u32,
}

/// What a finished session did to the aggregates, for the game-over screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutcomeSummary {
    pub final_score: u32,
    pub previous_best: u32,
    pub new_record: bool,
}

impl PlayerStats {
    /// Fold one finished session into the aggregates. The caller guards
    /// against recording the same session twice.
    pub fn record_outcome(&mut self, final_score: u32) -> OutcomeSummary {
        let previous_best = self.best_score;
        let new_record = final_score > previous_best;
        if new_record {
            self.best_score = final_score;
        }
        self.total_games += 1;
        self.total_points += final_score;
        self.average_score = (self.total_points as f64 / self.total_games as f64).round() as u32;
        OutcomeSummary {
            final_score,
            previous_best,
            new_record,
        }
    }
}

#[cfg(target_arch = "wasm32")]
const STORAGE_KEY: &str = "catchItStats";

/// Remote key-value mirror. `None` disables sync and the game is purely
/// local; the endpoint serves GET/PUT at `{endpoint}/{key}` with an
/// optional `X-Api-Key` header.
#[cfg(target_arch = "wasm32")]
const REMOTE_ENDPOINT: Option<&str> = None;
#[cfg(target_arch = "wasm32")]
const REMOTE_API_KEY: Option<&str> = None;

/// Cached aggregates plus their persistence plumbing.
#[derive(Debug, Clone, Default)]
pub struct StatsStore {
    stats: PlayerStats,
}

impl StatsStore {
    pub fn stats(&self) -> PlayerStats {
        self.stats
    }

    /// Replace the cached aggregates, e.g. after a remote refresh.
    pub fn set(&mut self, stats: PlayerStats) {
        self.stats = stats;
    }

    /// Fold a finished session in and persist the result.
    pub fn record(&mut self, final_score: u32) -> OutcomeSummary {
        let summary = self.stats.record_outcome(final_score);
        self.persist();
        summary
    }
}

#[cfg(target_arch = "wasm32")]
impl StatsStore {
    /// Load the local cache. Remote state arrives later via
    /// [`StatsStore::refresh_remote`]; until then the cache is the truth.
    pub fn load() -> Self {
        let stats: PlayerStats = storage::read_json(STORAGE_KEY).unwrap_or_default();
        log::info!(
            "stats loaded: best {} over {} games",
            stats.best_score,
            stats.total_games
        );
        Self { stats }
    }

    fn persist(&self) {
        storage::write_json(STORAGE_KEY, &self.stats);

        if let Some(endpoint) = REMOTE_ENDPOINT {
            let stats = self.stats;
            spawn_local(async move {
                match net::put_json(endpoint, STORAGE_KEY, REMOTE_API_KEY, &stats).await {
                    Ok(()) => log::info!("stats synced to remote"),
                    Err(err) => log::warn!("remote stats sync failed: {err:?}"),
                }
            });
        }
    }

    /// Fetch the remote aggregate and hand it to `apply` if one exists.
    /// Fire-and-forget; the frame loop never waits on this.
    pub fn refresh_remote<F>(apply: F)
    where
        F: FnOnce(PlayerStats) + 'static,
    {
        let Some(endpoint) = REMOTE_ENDPOINT else {
            log::info!("remote stats disabled, local cache only");
            return;
        };
        spawn_local(async move {
            match net::get_json::<PlayerStats>(endpoint, STORAGE_KEY, REMOTE_API_KEY).await {
                Ok(Some(stats)) => {
                    storage::write_json(STORAGE_KEY, &stats);
                    log::info!("stats refreshed from remote: best {}", stats.best_score);
                    apply(stats);
                }
                Ok(None) => log::info!("no remote stats yet"),
                Err(err) => log::warn!("remote stats fetch failed: {err:?}"),
            }
        });
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl StatsStore {
    pub fn load() -> Self {
        Self::default()
    }

    fn persist(&self) {
        log::debug!("stats updated: {:?}", self.stats);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_game_sets_every_aggregate() {
        let mut stats = PlayerStats::default();
        let summary = stats.record_outcome(120);

        assert!(summary.new_record);
        assert_eq!(summary.previous_best, 0);
        assert_eq!(summary.final_score, 120);
        assert_eq!(
            stats,
            PlayerStats {
                best_score: 120,
                total_games: 1,
                total_points: 120,
                average_score: 120,
            }
        );
    }

    #[test]
    fn average_rounds_to_nearest() {
        let mut stats = PlayerStats::default();
        stats.record_outcome(10);
        stats.record_outcome(15);
        // 25 / 2 rounds up
        assert_eq!(stats.average_score, 13);

        stats.record_outcome(8);
        // 33 / 3 = 11 exactly
        assert_eq!(stats.average_score, 11);
    }

    #[test]
    fn lower_score_is_not_a_record() {
        let mut stats = PlayerStats::default();
        stats.record_outcome(100);
        let summary = stats.record_outcome(40);

        assert!(!summary.new_record);
        assert_eq!(summary.previous_best, 100);
        assert_eq!(stats.best_score, 100);
        assert_eq!(stats.total_games, 2);
        assert_eq!(stats.total_points, 140);
    }

    #[test]
    fn equal_score_keeps_old_best() {
        let mut stats = PlayerStats::default();
        stats.record_outcome(50);
        let summary = stats.record_outcome(50);
        assert!(!summary.new_record, "ties are not records");
        assert_eq!(stats.best_score, 50);
    }

    #[test]
    fn wire_format_is_camel_case_with_defaults() {
        let json = r#"{"bestScore":70,"totalGames":4,"totalPoints":200,"averageScore":50}"#;
        let stats: PlayerStats = serde_json::from_str(json).unwrap();
        assert_eq!(stats.best_score, 70);

        let back = serde_json::to_string(&stats).unwrap();
        assert_eq!(back, json);

        // Missing fields fall back to zero rather than failing the load
        let partial: PlayerStats = serde_json::from_str(r#"{"bestScore":9}"#).unwrap();
        assert_eq!(partial.best_score, 9);
        assert_eq!(partial.total_games, 0);
    }
}
