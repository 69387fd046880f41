use std::collections::HashMap;

use crate::clean::PlayerSeasonRecord;

/// A player's regular season and playoffs added together.
#[derive(Debug, Clone, PartialEq)]
pub struct SeasonAggregate {
    pub player: String,
    pub pos: String,
    pub edition: i32,
    pub age: u32,
    pub games: u32,
    pub games_started: u32,
    pub totals: Vec<f64>,
}

/// Adds every player's playoff numbers on top of their regular season ones.
///
/// Name, position, edition and age come from the regular season record, team is dropped.
/// A player without a playoff record keeps their regular season numbers. Players who only
/// show up in the playoffs have no regular season record to take those from and are dropped.
/// Output follows the order of `regular`.
pub fn merge_season(
    regular: Vec<PlayerSeasonRecord>,
    playoffs: Vec<PlayerSeasonRecord>,
) -> Vec<SeasonAggregate> {
    let mut playoffs_by_player = HashMap::with_capacity(playoffs.len());
    for record in playoffs {
        playoffs_by_player.entry(record.player.clone()).or_insert(record);
    }

    regular
        .into_iter()
        .map(|reg| {
            let mut merged = SeasonAggregate {
                player: reg.player,
                pos: reg.pos,
                edition: reg.edition,
                age: reg.age,
                games: reg.games,
                games_started: reg.games_started,
                totals: reg.totals,
            };
            if let Some(po) = playoffs_by_player.get(&merged.player) {
                merged.games += po.games;
                merged.games_started += po.games_started;
                for (total, extra) in merged.totals.iter_mut().zip(&po.totals) {
                    *total += extra;
                }
            }
            merged
        })
        .collect()
}
