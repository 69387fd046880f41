use scraper::{ElementRef, Html, Selector};
use tokio::task::spawn_blocking;

use crate::table::RawTable;
use crate::{Error, Result};

/// Navigation found on a season page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeasonNav {
    /// Absolute URL of the season totals page.
    pub totals: String,
    /// Absolute URL of the following season, `None` on the most recent one.
    pub next: Option<String>,
}

/// Parses the first `<table>` of a page off the async runtime.
pub async fn parse_table(url: &str, html: String) -> Result<RawTable> {
    let url = url.to_string();
    spawn_blocking(move || first_table(&Html::parse_document(&html), &url)).await?
}

/// Parses the season navigation of a page off the async runtime.
/// `base` gets prepended to the site relative links.
pub async fn parse_season_nav(url: &str, html: String, base: &str, marker: &str) -> Result<SeasonNav> {
    let (url, base, marker) = (url.to_string(), base.to_string(), marker.to_string());
    spawn_blocking(move || season_nav(&Html::parse_document(&html), &url, &base, &marker)).await?
}

pub(crate) fn first_table(doc: &Html, url: &str) -> Result<RawTable> {
    let table_selector = create_selector("table")?;
    let row_selector = create_selector("tr")?;
    let cell_selector = create_selector("th, td")?;

    let table = doc
        .select(&table_selector)
        .next()
        .ok_or_else(|| missing(url, "table"))?;

    let mut head_rows = Vec::new();
    let mut body_rows = Vec::new();
    for row in table.select(&row_selector) {
        let cells = row.select(&cell_selector).map(cell_text).collect::<Vec<_>>();
        if cells.is_empty() {
            continue;
        }
        if in_thead(row) {
            head_rows.push(cells);
        } else {
            body_rows.push(cells);
        }
    }

    // Without a <thead> the first row is the header.
    let headers = match head_rows.pop() {
        Some(headers) => headers,
        None if !body_rows.is_empty() => body_rows.remove(0),
        None => return Err(missing(url, "table header")),
    };

    let rows = body_rows
        .into_iter()
        .map(|mut row| {
            row.resize(headers.len(), String::new());
            row
        })
        .collect();

    Ok(RawTable { headers, rows })
}

pub(crate) fn season_nav(doc: &Html, url: &str, base: &str, marker: &str) -> Result<SeasonNav> {
    let inner_nav_selector = create_selector(r#"div[id="inner_nav"] [href]"#)?;
    let next_selector = create_selector(r#"div[class="prevnext"] > a.button2.next"#)?;

    let totals = doc
        .select(&inner_nav_selector)
        .filter_map(|link| link.value().attr("href"))
        .find(|href| href.contains(marker))
        .map(|href| format!("{base}{href}"))
        .ok_or_else(|| missing(url, &format!("inner_nav link containing {marker:?}")))?;

    let next = doc
        .select(&next_selector)
        .next()
        .and_then(|link| link.value().attr("href"))
        .map(|href| format!("{base}{href}"));

    Ok(SeasonNav { totals, next })
}

#[inline]
fn create_selector(sel_str: &str) -> Result<Selector> {
    Selector::parse(sel_str).map_err(|_| Error::ParseMissingSelector(sel_str.into()))
}

fn missing(url: &str, what: &str) -> Error {
    Error::MissingElement {
        url: url.into(),
        what: what.into(),
    }
}

fn cell_text(cell: ElementRef) -> String {
    cell.text().collect::<String>().trim().to_string()
}

fn in_thead(row: ElementRef) -> bool {
    row.parent()
        .and_then(ElementRef::wrap)
        .is_some_and(|parent| parent.value().name() == "thead")
}
