use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use shared::domain::{Category, CategoryId, Post, PostId, Rendered};
use tokio::sync::Barrier;
use wp_client::{CategoryQuery, ContentSource, Paged, PostQuery, UpstreamError};

/// The kinds of upstream call the resolvers make.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    SidebarCategories,
    CategoryLookup,
    RecentPosts,
    PostPage,
    PostBySlug,
}

impl Call {
    fn of_posts(query: &PostQuery) -> Self {
        if query.slug.is_some() {
            Call::PostBySlug
        } else if query.page.is_none() {
            Call::RecentPosts
        } else {
            Call::PostPage
        }
    }

    fn of_categories(query: &CategoryQuery) -> Self {
        if query.slug.is_some() {
            Call::CategoryLookup
        } else {
            Call::SidebarCategories
        }
    }
}

#[derive(Default)]
pub struct FakeSource {
    pub posts: Vec<Post>,
    pub categories: Vec<Category>,
    pub total_pages: u32,
    pub failing: Vec<Call>,
    /// Calls that block until every party of the barrier has arrived.
    pub rendezvous: Option<(Arc<Barrier>, Vec<Call>)>,
    pub post_queries: Mutex<Vec<PostQuery>>,
    pub category_queries: Mutex<Vec<CategoryQuery>>,
}

impl FakeSource {
    pub fn with_posts(count: usize) -> Self {
        Self {
            posts: (1..=count).map(|n| sample_post(n as i64, &[])).collect(),
            categories: vec![sample_category(3, "news", "News")],
            total_pages: 1,
            ..Self::default()
        }
    }

    pub fn failing(mut self, call: Call) -> Self {
        self.failing.push(call);
        self
    }

    pub fn post_queries(&self) -> Vec<PostQuery> {
        self.post_queries.lock().expect("lock").clone()
    }

    pub fn category_queries(&self) -> Vec<CategoryQuery> {
        self.category_queries.lock().expect("lock").clone()
    }

    async fn enter(&self, call: Call) -> Result<(), UpstreamError> {
        if let Some((barrier, calls)) = &self.rendezvous {
            if calls.contains(&call) {
                barrier.wait().await;
            }
        }
        if self.failing.contains(&call) {
            return Err(UpstreamError::Status {
                path: format!("{call:?}"),
                status: 502,
            });
        }
        Ok(())
    }
}

#[async_trait]
impl ContentSource for FakeSource {
    async fn categories(&self, query: &CategoryQuery) -> Result<Vec<Category>, UpstreamError> {
        self.category_queries
            .lock()
            .expect("lock")
            .push(query.clone());
        self.enter(Call::of_categories(query)).await?;

        Ok(self
            .categories
            .iter()
            .filter(|c| query.slug.as_deref().map_or(true, |slug| c.slug == slug))
            .cloned()
            .collect())
    }

    async fn posts(&self, query: &PostQuery) -> Result<Paged<Post>, UpstreamError> {
        self.post_queries.lock().expect("lock").push(query.clone());
        self.enter(Call::of_posts(query)).await?;

        let per_page = query.per_page.unwrap_or(10) as usize;
        let skip = (query.page.unwrap_or(1) as usize - 1) * per_page;
        let items = self
            .posts
            .iter()
            .filter(|p| query.slug.as_deref().map_or(true, |slug| p.slug == slug))
            .filter(|p| query.category.map_or(true, |id| p.categories.contains(&id)))
            .skip(skip)
            .take(per_page)
            .cloned()
            .collect();
        Ok(Paged {
            items,
            total_pages: self.total_pages,
            total_items: Some(self.posts.len() as u64),
        })
    }
}

pub fn sample_post(id: i64, categories: &[i64]) -> Post {
    Post {
        id: PostId(id),
        slug: format!("post-{id}"),
        title: Rendered::new(format!("Post {id}")),
        content: Rendered::new(format!("<p>Body of post {id}</p>")),
        categories: categories.iter().copied().map(CategoryId).collect(),
        ..Post::default()
    }
}

pub fn sample_category(id: i64, slug: &str, name: &str) -> Category {
    Category {
        id: CategoryId(id),
        slug: slug.to_string(),
        name: name.to_string(),
        count: 1,
        ..Category::default()
    }
}
