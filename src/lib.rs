//! NBA 2K SCRAPER
//! Season totals from basketball-reference, player ratings from hoopshype.
//! Both end up in flat CSV files, joining them on (Player, 2k) is left to whoever reads them.

mod error;
mod macros;

pub mod clean;
pub mod links;
pub mod merge;
pub mod parse;
pub mod persist;
pub mod process;
pub mod ratings;
pub mod request;
pub mod schema;
pub mod table;

pub use error::{Error, Result};

const STATS_BASE_URL: &str = "https://basketball-reference.com";
const REGULAR_SEASON_START_URL: &str = "https://www.basketball-reference.com/leagues/NBA_2009.html";
const PLAYOFFS_START_URL: &str = "https://www.basketball-reference.com/playoffs/NBA_2009.html";
/// Links pointing to a season totals page contain this.
const TOTALS_LINK_MARKER: &str = "total";

const RATINGS_BASE_URL: &str = "https://hoopshype.com/nba2k";
/// 2K10 is rated off the 2009-2010 season.
const RATINGS_START_YEAR: i32 = 2009;
const RATINGS_END_YEAR: i32 = 2023;

/// Edition of the first scraped season, every following season adds one.
const BASE_EDITION: i32 = 2010;

const STATS_FILE_PATH: &str = "basketball.csv";
const RATINGS_FILE_PATH: &str = "ratings.csv";
