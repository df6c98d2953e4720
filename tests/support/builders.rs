// tests/support/builders.rs
use serde_json::{Value, json};

/// Builder for the JSON payload accepted by `POST /api/articles`.
pub struct ArticlePayload {
    title: String,
    slug: String,
    content: String,
    excerpt: String,
    author: String,
    category: String,
    featured_image: Option<String>,
    published: bool,
    published_at: Option<String>,
}

impl ArticlePayload {
    pub fn new(slug: &str) -> Self {
        Self {
            title: "Test Article".into(),
            slug: slug.into(),
            content: "<p>Test body</p>".into(),
            excerpt: "Test excerpt".into(),
            author: "Test Author".into(),
            category: "World".into(),
            featured_image: None,
            published: false,
            published_at: None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn excerpt(mut self, excerpt: impl Into<String>) -> Self {
        self.excerpt = excerpt.into();
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn featured_image(mut self, url: impl Into<String>) -> Self {
        self.featured_image = Some(url.into());
        self
    }

    pub fn published(mut self) -> Self {
        self.published = true;
        self
    }

    pub fn published_at(mut self, at: impl Into<String>) -> Self {
        self.published_at = Some(at.into());
        self
    }

    pub fn build(self) -> Value {
        let mut payload = json!({
            "title": self.title,
            "slug": self.slug,
            "content": self.content,
            "excerpt": self.excerpt,
            "author": self.author,
            "category": self.category,
            "published": self.published,
        });
        if let Some(url) = self.featured_image {
            payload["featuredImage"] = json!(url);
        }
        if let Some(at) = self.published_at {
            payload["publishedAt"] = json!(at);
        }
        payload
    }
}
