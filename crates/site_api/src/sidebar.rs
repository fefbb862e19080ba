use shared::view::SidebarData;
use tracing::warn;
use wp_client::{CategoryQuery, ContentSource, PostQuery};

pub const SIDEBAR_CATEGORY_LIMIT: u32 = 20;
pub const SIDEBAR_RECENT_POSTS: u32 = 5;

/// Fetches the category list and recent posts together. Any failure yields
/// empty lists for both; the sidebar never fails a page.
pub async fn get_sidebar_data(source: &dyn ContentSource) -> SidebarData {
    let category_query = CategoryQuery::non_empty(SIDEBAR_CATEGORY_LIMIT);
    let recent_query = PostQuery::recent(SIDEBAR_RECENT_POSTS);
    let (categories, recent) = futures::join!(
        source.categories(&category_query),
        source.posts(&recent_query)
    );

    match (categories, recent) {
        (Ok(categories), Ok(recent)) => SidebarData {
            categories,
            recent_posts: recent.items,
        },
        (Err(error), _) | (_, Err(error)) => {
            warn!(%error, "failed to fetch sidebar data");
            SidebarData::default()
        }
    }
}

#[cfg(test)]
#[path = "tests/sidebar_tests.rs"]
mod tests;
