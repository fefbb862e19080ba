use super::*;

#[test]
fn invalid_page_numbers_fall_back_to_first_page() {
    for raw in [None, Some(""), Some("abc"), Some("0"), Some("-3"), Some("2.5"), Some("1e3")] {
        assert_eq!(parse_page_number(raw), 1, "input {raw:?}");
    }
}

#[test]
fn positive_page_numbers_are_kept() {
    assert_eq!(parse_page_number(Some("1")), 1);
    assert_eq!(parse_page_number(Some("7")), 7);
    assert_eq!(parse_page_number(Some("120")), 120);
}

#[test]
fn overflowing_page_number_falls_back_to_first_page() {
    assert_eq!(parse_page_number(Some("99999999999999999999")), 1);
}

#[test]
fn first_page_links_to_bare_collection_url() {
    assert_eq!(PageBase::Home.url_for(1), "/");
    assert_eq!(PageBase::Home.url_for(4), "/page/4");
    assert_eq!(PageBase::Category("news").url_for(1), "/category/news");
    assert_eq!(PageBase::Category("news").url_for(2), "/category/news/page/2");
}

#[test]
fn links_stop_at_collection_edges() {
    let only = page_links(PageBase::Home, 1, 1);
    assert_eq!(only, PageLinks::default());

    let first = page_links(PageBase::Home, 1, 3);
    assert_eq!(first.previous, None);
    assert_eq!(first.next.as_deref(), Some("/page/2"));

    let middle = page_links(PageBase::Category("news"), 2, 3);
    assert_eq!(middle.previous.as_deref(), Some("/category/news"));
    assert_eq!(middle.next.as_deref(), Some("/category/news/page/3"));

    let last = page_links(PageBase::Home, 3, 3);
    assert_eq!(last.previous.as_deref(), Some("/page/2"));
    assert_eq!(last.next, None);
}
