use crate::classify::page::fetch_refs_page;
use crate::error::Result;
use crate::github::client::GraphQuery;
use crate::github::types::{Connection, RefNode};

/// Continuation pages fetched per fork, on top of the embedded first page.
pub const MAX_EXTRA_REF_PAGES: usize = 20;

/// Completes a fork's branch list starting from the page embedded in the
/// forks response. Pages are fetched one after another and concatenated in
/// page order; stops when GitHub reports no next page or after
/// [`MAX_EXTRA_REF_PAGES`] fetches.
pub async fn collect_refs(
    api: &dyn GraphQuery,
    owner: &str,
    name: &str,
    first_page: Connection<RefNode>,
) -> Result<Vec<RefNode>> {
    let mut refs = first_page.nodes;
    if !first_page.page_info.has_next_page {
        return Ok(refs);
    }

    let mut after = first_page.page_info.end_cursor;
    let mut fetched = 0;
    loop {
        if fetched == MAX_EXTRA_REF_PAGES {
            tracing::warn!(owner, name, refs = refs.len(), "ref page cap reached");
            break;
        }
        let page = fetch_refs_page(api, owner, name, after.as_deref()).await?;
        fetched += 1;
        refs.extend(page.nodes);
        if !page.page_info.has_next_page {
            break;
        }
        after = page.page_info.end_cursor;
    }

    tracing::debug!(owner, name, pages = fetched + 1, refs = refs.len(), "collected refs");
    Ok(refs)
}
