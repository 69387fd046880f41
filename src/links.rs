use crate::parse::parse_season_nav;
use crate::request::PageSource;
use crate::{info_time, Result, STATS_BASE_URL, TOTALS_LINK_MARKER};

/// Returns the season totals links of the season at `start_url` and every season after it.
pub async fn season_links<S: PageSource>(source: &S, start_url: &str) -> Result<Vec<String>> {
    let mut links = Vec::new();
    discover_season_links(source, start_url, &mut links).await?;
    Ok(links)
}

/// Follows the "next season" links starting at `start_url`, pushing each season's totals link to `links`.
/// Stops at the first page without a next link.
pub async fn discover_season_links<S: PageSource>(
    source: &S,
    start_url: &str,
    links: &mut Vec<String>,
) -> Result<()> {
    let mut url = start_url.to_string();
    loop {
        let html = source.fetch(&url).await?;
        let nav = parse_season_nav(&url, html, STATS_BASE_URL, TOTALS_LINK_MARKER).await?;
        info_time!("Found season totals: {}", nav.totals);
        links.push(nav.totals);

        match nav.next {
            Some(next) => url = next,
            None => break,
        }
    }
    Ok(())
}
