use std::sync::Arc;

use shared::{
    domain::Post,
    error::{ApiError, ErrorCode, PageStatus},
    view::{SidebarData, ViewContext, ViewName},
};
use tracing::{error, info};
use wp_client::{CategoryQuery, ContentSource, PostQuery};

pub mod pagination;
pub mod sidebar;

use pagination::{page_links, parse_page_number, PageBase};
pub use sidebar::get_sidebar_data;

pub const POSTS_PER_PAGE: u32 = 10;

pub const LISTING_FAILED: &str = "Could not fetch posts. Please check the API connection.";
pub const POST_NOT_FOUND: &str = "The post you were looking for could not be found.";
pub const POST_FAILED: &str = "Could not fetch the post. Please check the API connection.";
pub const CATEGORY_NOT_FOUND: &str = "The category you were looking for could not be found.";
pub const CATEGORY_FAILED: &str =
    "Could not fetch category posts. Please check the API connection.";
pub const ROUTE_NOT_FOUND: &str = "The page you were looking for could not be found.";

#[derive(Clone)]
pub struct SiteContext {
    pub source: Arc<dyn ContentSource>,
}

impl SiteContext {
    pub fn new(source: Arc<dyn ContentSource>) -> Self {
        Self { source }
    }
}

/// A resolved page: which template to render, with what data, under which status.
#[derive(Debug, Clone, PartialEq)]
pub struct PageView {
    pub status: PageStatus,
    pub view: ViewName,
    pub context: ViewContext,
}

impl PageView {
    fn ok(view: ViewName, context: ViewContext) -> Self {
        Self {
            status: PageStatus::Ok,
            view,
            context,
        }
    }

    /// Not-found pages keep the sidebar; hard failures render without it.
    fn error(err: ApiError, sidebar: SidebarData) -> Self {
        let title = match err.code {
            ErrorCode::NotFound => "Not Found",
            ErrorCode::Upstream => "Error",
        };
        let sidebar = match err.code {
            ErrorCode::NotFound => sidebar,
            ErrorCode::Upstream => SidebarData::default(),
        };
        Self {
            status: err.status(),
            view: ViewName::Error,
            context: ViewContext {
                message: Some(err.message),
                ..ViewContext::new(title, sidebar)
            },
        }
    }
}

/// `/` and `/page/:n`.
pub async fn resolve_listing(ctx: &SiteContext, page: Option<&str>) -> PageView {
    let current_page = parse_page_number(page);
    let source = ctx.source.as_ref();
    let query = PostQuery::page(POSTS_PER_PAGE, current_page);
    let (posts, sidebar) = futures::join!(source.posts(&query), get_sidebar_data(source));

    let posts = match posts {
        Ok(posts) => posts,
        Err(error) => {
            error!(%error, page = current_page, "failed to fetch posts");
            return PageView::error(ApiError::upstream(LISTING_FAILED), sidebar);
        }
    };

    let total_pages = posts.total_pages;
    info!(
        page = current_page,
        total_pages,
        total_posts = posts.total_items,
        "resolved listing"
    );
    PageView::ok(
        ViewName::Listing,
        ViewContext {
            posts: Some(posts.items),
            current_page: Some(current_page),
            total_pages: Some(total_pages),
            pagination: Some(page_links(PageBase::Home, current_page, total_pages)),
            ..ViewContext::new("Home", sidebar)
        },
    )
}

/// `/post/:slug`.
pub async fn resolve_post(ctx: &SiteContext, slug: &str) -> PageView {
    let source = ctx.source.as_ref();
    let query = PostQuery::by_slug(slug);
    let (found, sidebar) = futures::join!(source.posts(&query), get_sidebar_data(source));

    let found = match found {
        Ok(found) => found,
        Err(error) => {
            error!(%error, slug, "failed to fetch post");
            return PageView::error(ApiError::upstream(POST_FAILED), sidebar);
        }
    };
    let Some(post) = found.items.into_iter().next() else {
        info!(slug, "post not found");
        return PageView::error(ApiError::not_found(POST_NOT_FOUND), sidebar);
    };

    single_item(post, sidebar)
}

fn single_item(post: Post, sidebar: SidebarData) -> PageView {
    let title = post.title.rendered.clone();
    PageView::ok(
        ViewName::SingleItem,
        ViewContext {
            post: Some(post),
            ..ViewContext::new(title, sidebar)
        },
    )
}

/// `/category/:slug` and `/category/:slug/page/:n`.
pub async fn resolve_category(ctx: &SiteContext, slug: &str, page: Option<&str>) -> PageView {
    let current_page = parse_page_number(page);
    let source = ctx.source.as_ref();
    let lookup = CategoryQuery::by_slug(slug);
    let (sidebar, categories) =
        futures::join!(get_sidebar_data(source), source.categories(&lookup));

    let category = match categories {
        Ok(categories) => categories.into_iter().next(),
        Err(error) => {
            error!(%error, slug, "failed to look up category");
            return PageView::error(ApiError::upstream(CATEGORY_FAILED), sidebar);
        }
    };
    let Some(category) = category else {
        info!(slug, "category not found");
        return PageView::error(ApiError::not_found(CATEGORY_NOT_FOUND), sidebar);
    };

    let query = PostQuery::in_category(category.id, POSTS_PER_PAGE, current_page);
    let posts = match source.posts(&query).await {
        Ok(posts) => posts,
        Err(error) => {
            error!(%error, slug, page = current_page, "failed to fetch category posts");
            return PageView::error(ApiError::upstream(CATEGORY_FAILED), sidebar);
        }
    };

    let total_pages = posts.total_pages;
    let title = format!("Category: {}", category.name);
    let pagination = page_links(PageBase::Category(&category.slug), current_page, total_pages);
    PageView::ok(
        ViewName::Archive,
        ViewContext {
            posts: Some(posts.items),
            category: Some(category),
            current_page: Some(current_page),
            total_pages: Some(total_pages),
            pagination: Some(pagination),
            ..ViewContext::new(title, sidebar)
        },
    )
}

/// Any path outside the route table.
pub async fn resolve_missing_route(ctx: &SiteContext) -> PageView {
    let sidebar = get_sidebar_data(ctx.source.as_ref()).await;
    PageView::error(ApiError::not_found(ROUTE_NOT_FOUND), sidebar)
}

#[cfg(test)]
#[path = "tests/fake_source.rs"]
pub(crate) mod fake_source;

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
