use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(
            Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        pub struct $name(pub i64);
    };
}

id_newtype!(PostId);
id_newtype!(CategoryId);
id_newtype!(AuthorId);

/// A server-rendered HTML fragment, as the backend emits it under `{ "rendered": ... }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rendered {
    #[serde(default)]
    pub rendered: String,
}

impl Rendered {
    pub fn new(rendered: impl Into<String>) -> Self {
        Self {
            rendered: rendered.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Post {
    pub id: PostId,
    pub slug: String,
    pub date: Option<NaiveDateTime>,
    pub link: String,
    pub title: Rendered,
    pub content: Rendered,
    pub excerpt: Rendered,
    pub categories: Vec<CategoryId>,
    /// Only populated when the post was requested with `_embed`.
    #[serde(rename(deserialize = "_embedded", serialize = "embedded"))]
    pub embedded: Option<Embedded>,
}

/// Entries the backend could not expose (private authors, restricted media)
/// arrive as `{ "code": ..., "message": ... }` objects and are dropped on decode.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Embedded {
    #[serde(deserialize_with = "named_authors")]
    pub author: Vec<Author>,
    #[serde(
        rename(deserialize = "wp:featuredmedia", serialize = "featured_media"),
        deserialize_with = "media_with_source"
    )]
    pub featured_media: Vec<Media>,
}

fn named_authors<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Author>, D::Error> {
    let mut authors = Vec::<Author>::deserialize(deserializer)?;
    authors.retain(|author| !author.name.trim().is_empty());
    Ok(authors)
}

fn media_with_source<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Media>, D::Error> {
    let mut media = Vec::<Media>::deserialize(deserializer)?;
    media.retain(|item| !item.source_url.trim().is_empty());
    Ok(media)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Author {
    pub id: AuthorId,
    pub name: String,
    pub link: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Media {
    pub source_url: String,
    pub alt_text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Category {
    pub id: CategoryId,
    pub slug: String,
    pub name: String,
    pub description: String,
    pub link: String,
    pub count: u32,
}

#[cfg(test)]
#[path = "tests/domain_tests.rs"]
mod tests;
