use chrono::Local;
use tokio::{fs::File, io::AsyncWriteExt};

use crate::merge::SeasonAggregate;
use crate::ratings::RatingRecord;
use crate::schema::{self, count_names, STATS_SCHEMA};
use crate::{info_time, Result};

/// Statistics CSV: identifiers, games, then every accumulated total in schema order.
/// Totals are floats and always carry a decimal point, games and age are integers.
pub fn stats_csv(rows: &[SeasonAggregate]) -> Result<Vec<u8>> {
    let mut wtr = csv::Writer::from_writer(Vec::new());

    let header = [
        schema::PLAYER,
        schema::POSITION,
        schema::EDITION,
        schema::AGE,
        schema::GAMES,
        schema::GAMES_STARTED,
    ]
    .into_iter()
    .chain(count_names(STATS_SCHEMA));
    wtr.write_record(header)?;

    for row in rows {
        let record = [
            row.player.clone(),
            row.pos.clone(),
            row.edition.to_string(),
            row.age.to_string(),
            row.games.to_string(),
            row.games_started.to_string(),
        ]
        .into_iter()
        .chain(row.totals.iter().map(|total| format!("{total:?}")));
        wtr.write_record(record)?;
    }

    wtr.into_inner().map_err(|e| e.into_error().into())
}

/// Ratings CSV, header comes from [`RatingRecord`]'s field names.
pub fn ratings_csv(rows: &[RatingRecord]) -> Result<Vec<u8>> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.into_inner().map_err(|e| e.into_error().into())
}

pub async fn write_file(path: &str, bytes: &[u8]) -> Result<()> {
    let local_now = Local::now();
    let mut file = File::create(path).await?;
    file.write_all(bytes).await?;
    file.flush().await?;
    info_time!(local_now, "Wrote the results to file: {path}");
    Ok(())
}
