use chrono::Local;
use reqwest::Client;

use crate::clean::clean_season;
use crate::links::season_links;
use crate::merge::{merge_season, SeasonAggregate};
use crate::parse::parse_table;
use crate::persist::{ratings_csv, stats_csv, write_file};
use crate::ratings::fetch_ratings;
use crate::request::PageSource;
use crate::table::RawTable;
use crate::{
    info_time, Result, BASE_EDITION, PLAYOFFS_START_URL, RATINGS_END_YEAR, RATINGS_FILE_PATH,
    RATINGS_START_YEAR, REGULAR_SEASON_START_URL, STATS_FILE_PATH,
};

/// Scrapes both datasets and writes them to their files, statistics first.
pub async fn process_site() -> Result<()> {
    let start_time = Local::now();
    let client = Client::new();

    info_time!("Started scraping");

    let stats = collect_stats(&client, REGULAR_SEASON_START_URL, PLAYOFFS_START_URL).await?;
    info_time!(start_time, "Finished statistics: {} rows", stats.len());
    write_file(STATS_FILE_PATH, &stats_csv(&stats)?).await?;

    let ratings_time = Local::now();
    let ratings = fetch_ratings(&client, RATINGS_START_YEAR, RATINGS_END_YEAR).await?;
    info_time!(ratings_time, "Finished ratings: {} rows", ratings.len());
    write_file(RATINGS_FILE_PATH, &ratings_csv(&ratings)?).await?;

    Ok(())
}

/// Every season from the given start pages on, regular season and playoffs added together.
///
/// The regular season walk ends on the upcoming season, which has no playoffs yet, so its
/// last link is dropped. Seasons are then paired up in order, a season only one side has is skipped.
pub async fn collect_stats<S: PageSource>(
    source: &S,
    regular_season_url: &str,
    playoffs_url: &str,
) -> Result<Vec<SeasonAggregate>> {
    let mut regular_links = season_links(source, regular_season_url).await?;
    let playoff_links = season_links(source, playoffs_url).await?;
    regular_links.pop();

    let mut stats = Vec::new();
    for (edition, (regular_url, playoffs_url)) in (BASE_EDITION..).zip(regular_links.iter().zip(&playoff_links)) {
        let season_time = Local::now();
        let regular = clean_season(fetch_table(source, regular_url).await?, edition)?;
        let playoffs = clean_season(fetch_table(source, playoffs_url).await?, edition)?;
        let merged = merge_season(regular, playoffs);
        info_time!(season_time, "2K{:02}: merged {} players", edition % 100, merged.len());
        stats.extend(merged);
    }
    Ok(stats)
}

async fn fetch_table<S: PageSource>(source: &S, url: &str) -> Result<RawTable> {
    let html = source.fetch(url).await?;
    parse_table(url, html).await
}
