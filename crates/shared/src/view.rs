use serde::Serialize;

use crate::domain::{Category, Post};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViewName {
    Listing,
    SingleItem,
    Archive,
    Error,
}

impl ViewName {
    pub fn template_name(self) -> &'static str {
        match self {
            ViewName::Listing => "listing.html",
            ViewName::SingleItem => "single.html",
            ViewName::Archive => "archive.html",
            ViewName::Error => "error.html",
        }
    }
}

/// The category list and recent posts shown next to every page.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SidebarData {
    pub categories: Vec<Category>,
    pub recent_posts: Vec<Post>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PageLinks {
    pub previous: Option<String>,
    pub next: Option<String>,
}

/// Everything a template may read. Sidebar keys are always present, the
/// rest only when the view has them.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewContext {
    pub title: String,
    #[serde(flatten)]
    pub sidebar: SidebarData,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub posts: Option<Vec<Post>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub post: Option<Post>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_pages: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<PageLinks>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ViewContext {
    pub fn new(title: impl Into<String>, sidebar: SidebarData) -> Self {
        Self {
            title: title.into(),
            sidebar,
            posts: None,
            post: None,
            category: None,
            current_page: None,
            total_pages: None,
            pagination: None,
            message: None,
        }
    }
}

#[cfg(test)]
#[path = "tests/view_tests.rs"]
mod tests;
