use serde::Serialize;

use crate::parse::parse_table;
use crate::request::PageSource;
use crate::schema::{self, RATINGS_SCHEMA};
use crate::table::{Cell, RawTable, TypedTable};
use crate::{info_time, Error, Result, RATINGS_BASE_URL};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RatingRecord {
    #[serde(rename = "Player")]
    pub player: String,
    #[serde(rename = "Rating")]
    pub rating: u32,
    #[serde(rename = "2k")]
    pub edition: i32,
}

/// Ratings page of the season starting in `year`.
pub fn ratings_url(year: i32) -> String {
    format!("{RATINGS_BASE_URL}/{year}-{}/", year + 1)
}

/// A 2K edition is named after the year its season ends: 2009-2010 is 2K10.
pub fn edition_of(season_start_year: i32) -> i32 {
    season_start_year + 1
}

/// Fetches and cleans the ratings of every season starting in `start_year..end_year`.
pub async fn fetch_ratings<S: PageSource>(source: &S, start_year: i32, end_year: i32) -> Result<Vec<RatingRecord>> {
    let mut ratings = Vec::new();
    for year in start_year..end_year {
        let url = ratings_url(year);
        let edition = edition_of(year);
        let html = source.fetch(&url).await?;
        let raw = parse_table(&url, html).await?;
        let season = clean_ratings(raw, edition)?;
        info_time!("2K{:02}: {} ratings", edition % 100, season.len());
        ratings.extend(season);
    }
    Ok(ratings)
}

/// Drops the unlabeled index column and reads the remaining two as (player, rating).
pub fn clean_ratings(raw: RawTable, edition: i32) -> Result<Vec<RatingRecord>> {
    let labeled = raw
        .headers
        .iter()
        .enumerate()
        .filter(|(_, header)| !header.trim().is_empty())
        .map(|(idx, _)| idx)
        .collect::<Vec<_>>();
    if labeled.len() != RATINGS_SCHEMA.len() {
        return Err(Error::RatingsShape(raw.headers));
    }

    let rows = raw
        .rows
        .iter()
        .enumerate()
        .map(|(row_num, row)| {
            labeled
                .iter()
                .map(|&idx| {
                    row.get(idx).cloned().ok_or_else(|| Error::MissingCell {
                        column: raw.headers[idx].clone(),
                        row: row_num,
                    })
                })
                .collect::<Result<Vec<_>>>()
        })
        .collect::<Result<Vec<_>>>()?;
    let renamed = RawTable {
        headers: RATINGS_SCHEMA.iter().map(|field| field.name.to_string()).collect(),
        rows,
    };

    let table = TypedTable::cast(&renamed, RATINGS_SCHEMA)?;
    let player = table.index_of(schema::PLAYER)?;
    let rating = table.index_of(schema::RATING)?;

    (0..table.rows.len())
        .map(|row| -> Result<RatingRecord> {
            Ok(RatingRecord {
                player: table.read(row, player, Cell::as_text)?.to_string(),
                rating: table.read(row, rating, Cell::as_int)?,
                edition,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::tests::StaticPages;

    fn raw(headers: &[&str], rows: &[&[&str]]) -> RawTable {
        RawTable {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: rows
                .iter()
                .map(|row| row.iter().map(|cell| cell.to_string()).collect())
                .collect(),
        }
    }

    #[test]
    fn index_column_dropped_and_columns_renamed() {
        let table = raw(
            &["", "Name", "Rating"],
            &[&["0", "LeBron James", "97"], &["1", "Kobe Bryant", "95"], &["2", "Dwight Howard", "93"]],
        );
        let ratings = clean_ratings(table, 2010).unwrap();
        assert_eq!(
            ratings,
            [
                RatingRecord { player: "LeBron James".into(), rating: 97, edition: 2010 },
                RatingRecord { player: "Kobe Bryant".into(), rating: 95, edition: 2010 },
                RatingRecord { player: "Dwight Howard".into(), rating: 93, edition: 2010 },
            ]
        );
    }

    #[test]
    fn unexpected_column_count_fails() {
        let table = raw(&["", "Name", "Team", "Rating"], &[]);
        assert!(matches!(clean_ratings(table, 2010), Err(Error::RatingsShape(_))));
    }

    #[test]
    fn empty_rating_fails() {
        let table = raw(&["", "Name", "Rating"], &[&["0", "Nobody", ""]]);
        assert!(matches!(clean_ratings(table, 2010), Err(Error::Cast { row: 0, .. })));
    }

    #[test]
    fn fractional_rating_fails() {
        let table = raw(&["", "Name", "Rating"], &[&["0", "Somebody", "87.5"]]);
        assert!(matches!(clean_ratings(table, 2010), Err(Error::Cast { row: 0, .. })));
    }

    #[test]
    fn short_row_fails_instead_of_panicking() {
        let table = raw(&["", "Name", "Rating"], &[&["0", "LeBron James", "97"], &["1", "Kobe Bryant"]]);
        assert!(matches!(
            clean_ratings(table, 2010),
            Err(Error::MissingCell { column, row: 1 }) if column == "Rating"
        ));
    }

    #[test]
    fn url_spans_the_season() {
        assert_eq!(ratings_url(2009), "https://hoopshype.com/nba2k/2009-2010/");
        assert_eq!(ratings_url(2022), "https://hoopshype.com/nba2k/2022-2023/");
    }

    fn page(name: &str, rating: &str) -> String {
        format!("<table><tr><th></th><th>Player</th><th>2K</th></tr><tr><td>1</td><td>{name}</td><td>{rating}</td></tr></table>")
    }

    #[tokio::test]
    async fn first_seasons_are_2k10_and_2k11() {
        let pages = StaticPages::default()
            .with("https://hoopshype.com/nba2k/2009-2010/", page("Tim Duncan", "90"))
            .with("https://hoopshype.com/nba2k/2010-2011/", page("Tim Duncan", "88"));

        let ratings = fetch_ratings(&pages, 2009, 2011).await.unwrap();
        assert_eq!(
            ratings.iter().map(|r| (r.rating, r.edition)).collect::<Vec<_>>(),
            [(90, 2010), (88, 2011)]
        );
    }

    #[tokio::test]
    async fn edition_follows_the_season_not_the_run_start() {
        let pages = StaticPages::default()
            .with("https://hoopshype.com/nba2k/2015-2016/", page("Stephen Curry", "94"))
            .with("https://hoopshype.com/nba2k/2016-2017/", page("Stephen Curry", "95"));

        let ratings = fetch_ratings(&pages, 2015, 2017).await.unwrap();
        assert_eq!(
            ratings.iter().map(|r| (r.rating, r.edition)).collect::<Vec<_>>(),
            [(94, 2016), (95, 2017)]
        );
        assert!(fetch_ratings(&pages, 2015, 2015).await.unwrap().is_empty());
    }
}
