use shared::view::PageLinks;

/// Parses a page route segment. Anything but a positive integer means page 1.
pub fn parse_page_number(raw: Option<&str>) -> u32 {
    raw.and_then(|value| value.parse::<u32>().ok())
        .filter(|page| *page > 0)
        .unwrap_or(1)
}

/// Where the numbered pages of a collection live.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageBase<'a> {
    Home,
    Category(&'a str),
}

impl PageBase<'_> {
    pub fn url_for(&self, page: u32) -> String {
        match (self, page) {
            (PageBase::Home, 1) => "/".to_string(),
            (PageBase::Home, n) => format!("/page/{n}"),
            (PageBase::Category(slug), 1) => format!("/category/{slug}"),
            (PageBase::Category(slug), n) => format!("/category/{slug}/page/{n}"),
        }
    }
}

pub fn page_links(base: PageBase<'_>, current_page: u32, total_pages: u32) -> PageLinks {
    PageLinks {
        previous: (current_page > 1).then(|| base.url_for(current_page - 1)),
        next: (current_page < total_pages).then(|| base.url_for(current_page + 1)),
    }
}

#[cfg(test)]
#[path = "tests/pagination_tests.rs"]
mod tests;
