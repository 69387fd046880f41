//! Turns one scraped season totals table into [`PlayerSeasonRecord`]s.
//!
//! The steps run in this order:
//! 1. [`drop_header_rows`]: basketball-reference repeats the header every 20 rows.
//! 2. [`dedup_players`]: a traded player has a combined row first, then one per team. Only the first is kept.
//! 3. [`TypedTable::cast`] with [`STATS_SCHEMA`].
//! 4. [`fill_missing`]: a missing number only ever means zero attempts.
//! 5. [`zero_unattempted_ratios`]
//! 6. [`into_records`]: drops the ratios, cleans up names and positions, attaches the edition.

use std::collections::HashSet;

use unicode_normalization::UnicodeNormalization;

use crate::schema::{self, count_names, FieldKind, STATS_SCHEMA};
use crate::table::{Cell, RawTable, TypedTable};
use crate::Result;

/// One player in one season table, regular season or playoffs.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerSeasonRecord {
    pub player: String,
    pub pos: String,
    /// Unvalidated, `TOT` for a player who played for several teams.
    pub team: String,
    pub age: u32,
    pub games: u32,
    pub games_started: u32,
    pub edition: i32,
    /// Accumulated totals in [`count_names`] order for [`STATS_SCHEMA`].
    pub totals: Vec<f64>,
}

pub fn clean_season(raw: RawTable, edition: i32) -> Result<Vec<PlayerSeasonRecord>> {
    let raw = dedup_players(drop_header_rows(raw)?)?;
    let mut table = TypedTable::cast(&raw, STATS_SCHEMA)?;
    fill_missing(&mut table);
    zero_unattempted_ratios(&mut table)?;
    into_records(table, edition)
}

pub fn drop_header_rows(mut raw: RawTable) -> Result<RawTable> {
    let player = raw.column(schema::PLAYER)?;
    raw.retain_by(player, |name| name != schema::PLAYER)?;
    Ok(raw)
}

pub fn dedup_players(mut raw: RawTable) -> Result<RawTable> {
    let player = raw.column(schema::PLAYER)?;
    let mut seen = HashSet::new();
    raw.retain_by(player, |name| seen.insert(name.to_string()))?;
    Ok(raw)
}

pub fn fill_missing(table: &mut TypedTable) {
    for cell in table.rows.iter_mut().flatten() {
        if let Cell::Float(value @ None) = cell {
            *value = Some(0.0);
        }
    }
}

/// A percentage with no attempts behind it is zero.
pub fn zero_unattempted_ratios(table: &mut TypedTable) -> Result<()> {
    let pairs = table
        .fields
        .iter()
        .enumerate()
        .filter_map(|(idx, field)| match field.kind {
            FieldKind::Ratio { attempts } => Some((idx, attempts)),
            _ => None,
        })
        .map(|(idx, attempts)| table.index_of(attempts).map(|attempts| (idx, attempts)))
        .collect::<Result<Vec<_>>>()?;

    for row in 0..table.rows.len() {
        for &(ratio, attempts) in &pairs {
            table.read(row, ratio, Cell::as_float)?;
            if table.read(row, attempts, Cell::as_float)? == 0.0 {
                table.rows[row][ratio] = Cell::Float(Some(0.0));
            }
        }
    }
    Ok(())
}

pub fn into_records(table: TypedTable, edition: i32) -> Result<Vec<PlayerSeasonRecord>> {
    let player = table.index_of(schema::PLAYER)?;
    let pos = table.index_of(schema::POSITION)?;
    let team = table.index_of(schema::TEAM)?;
    let age = table.index_of(schema::AGE)?;
    let games = table.index_of(schema::GAMES)?;
    let games_started = table.index_of(schema::GAMES_STARTED)?;
    let totals = count_names(table.fields)
        .map(|name| table.index_of(name))
        .collect::<Result<Vec<_>>>()?;

    (0..table.rows.len())
        .map(|row| -> Result<PlayerSeasonRecord> {
            Ok(PlayerSeasonRecord {
                player: normalize_name(table.read(row, player, Cell::as_text)?),
                pos: primary_position(table.read(row, pos, Cell::as_text)?).to_string(),
                team: table.read(row, team, Cell::as_text)?.to_string(),
                age: table.read(row, age, Cell::as_int)?,
                games: table.read(row, games, Cell::as_int)?,
                games_started: table.read(row, games_started, Cell::as_int)?,
                edition,
                totals: totals
                    .iter()
                    .map(|&idx| table.read(row, idx, Cell::as_float))
                    .collect::<Result<_>>()?,
            })
        })
        .collect()
}

/// Strips the all-star `*` and periods, then folds the name to ASCII.
/// Characters with no ASCII base letter are dropped.
pub fn normalize_name(name: &str) -> String {
    name.trim_end_matches('*')
        .replace('.', "")
        // Some names come through as `Nen'e` style renderings of an accented e.
        .replace("'e", "e")
        .nfkd()
        .filter(char::is_ascii)
        .collect()
}

/// `G-F` -> `G`
pub fn primary_position(pos: &str) -> &str {
    pos.split('-').next().unwrap_or(pos)
}
