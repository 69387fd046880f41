//! Column declarations for the scraped tables.
//!
//! Every column the crate reads is declared here once, with the type it is cast to.
//! Columns of a scraped table that aren't declared are ignored.

pub const PLAYER: &str = "Player";
pub const POSITION: &str = "Pos";
pub const TEAM: &str = "Tm";
pub const AGE: &str = "Age";
pub const GAMES: &str = "G";
pub const GAMES_STARTED: &str = "GS";
pub const RATING: &str = "Rating";
/// Added to every output row, not scraped.
pub const EDITION: &str = "2k";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Kept as scraped.
    Text,
    /// Small non-negative integer, an empty cell is a cast error.
    Integer,
    /// Accumulated total, an empty cell is a missing value.
    Count,
    /// Percentage derived from a count, forced to zero when `attempts` is zero.
    Ratio { attempts: &'static str },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub kind: FieldKind,
}

const fn field(name: &'static str, kind: FieldKind) -> Field {
    Field { name, kind }
}

const fn ratio(name: &'static str, attempts: &'static str) -> Field {
    field(name, FieldKind::Ratio { attempts })
}

use FieldKind::{Count, Integer, Text};

/// Season totals table on basketball-reference.
pub const STATS_SCHEMA: &[Field] = &[
    field(PLAYER, Text),
    field(POSITION, Text),
    field(AGE, Integer),
    field(TEAM, Text),
    field(GAMES, Integer),
    field(GAMES_STARTED, Integer),
    field("MP", Count),
    field("FG", Count),
    field("FGA", Count),
    ratio("FG%", "FGA"),
    field("3P", Count),
    field("3PA", Count),
    ratio("3P%", "3PA"),
    field("2P", Count),
    field("2PA", Count),
    ratio("2P%", "2PA"),
    ratio("eFG%", "FGA"),
    field("FT", Count),
    field("FTA", Count),
    ratio("FT%", "FTA"),
    field("ORB", Count),
    field("DRB", Count),
    field("TRB", Count),
    field("AST", Count),
    field("STL", Count),
    field("BLK", Count),
    field("TOV", Count),
    field("PF", Count),
    field("PTS", Count),
];

/// Ratings table on hoopshype, after the index column is dropped and the rest renamed.
pub const RATINGS_SCHEMA: &[Field] = &[field(PLAYER, Text), field(RATING, Integer)];

/// Names of the accumulated totals, in schema order.
pub fn count_names(schema: &[Field]) -> impl Iterator<Item = &'static str> + '_ {
    schema
        .iter()
        .filter(|field| field.kind == Count)
        .map(|field| field.name)
}
