use shared::domain::CategoryId;

pub type QueryParams = Vec<(&'static str, String)>;

/// Filters for `GET /posts`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostQuery {
    pub per_page: Option<u32>,
    pub page: Option<u32>,
    pub slug: Option<String>,
    pub category: Option<CategoryId>,
    pub embed: bool,
}

impl PostQuery {
    pub fn page(per_page: u32, page: u32) -> Self {
        Self {
            per_page: Some(per_page),
            page: Some(page),
            ..Self::default()
        }
    }

    pub fn recent(count: u32) -> Self {
        Self {
            per_page: Some(count),
            ..Self::default()
        }
    }

    /// Single-post lookup. Author and featured media are embedded only here.
    pub fn by_slug(slug: impl Into<String>) -> Self {
        Self {
            slug: Some(slug.into()),
            embed: true,
            ..Self::default()
        }
    }

    pub fn in_category(category: CategoryId, per_page: u32, page: u32) -> Self {
        Self {
            category: Some(category),
            ..Self::page(per_page, page)
        }
    }

    pub fn to_params(&self) -> QueryParams {
        let mut params = Vec::new();
        if let Some(category) = self.category {
            params.push(("categories", category.0.to_string()));
        }
        if let Some(slug) = &self.slug {
            params.push(("slug", slug.clone()));
        }
        if let Some(per_page) = self.per_page {
            params.push(("per_page", per_page.to_string()));
        }
        if let Some(page) = self.page {
            params.push(("page", page.to_string()));
        }
        if self.embed {
            params.push(("_embed", "true".to_string()));
        }
        params
    }
}

/// Filters for `GET /categories`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryQuery {
    pub per_page: Option<u32>,
    pub hide_empty: Option<bool>,
    pub slug: Option<String>,
}

impl CategoryQuery {
    pub fn non_empty(per_page: u32) -> Self {
        Self {
            per_page: Some(per_page),
            hide_empty: Some(true),
            slug: None,
        }
    }

    pub fn by_slug(slug: impl Into<String>) -> Self {
        Self {
            slug: Some(slug.into()),
            ..Self::default()
        }
    }

    pub fn to_params(&self) -> QueryParams {
        let mut params = Vec::new();
        if let Some(slug) = &self.slug {
            params.push(("slug", slug.clone()));
        }
        if let Some(per_page) = self.per_page {
            params.push(("per_page", per_page.to_string()));
        }
        if let Some(hide_empty) = self.hide_empty {
            params.push(("hide_empty", hide_empty.to_string()));
        }
        params
    }
}
