// src/domain/article/entity.rs
use crate::domain::article::value_objects::{
    ArticleContent, ArticleExcerpt, ArticleId, ArticleSlug, ArticleTitle, AuthorName, Category,
};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub slug: ArticleSlug,
    pub content: ArticleContent,
    pub excerpt: ArticleExcerpt,
    pub author: AuthorName,
    pub category: Category,
    pub featured_image: Option<String>,
    pub published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: ArticleTitle,
    pub slug: ArticleSlug,
    pub content: ArticleContent,
    pub excerpt: ArticleExcerpt,
    pub author: AuthorName,
    pub category: Category,
    pub featured_image: Option<String>,
    pub published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishStateUpdate {
    pub published: bool,
    pub published_at: Option<DateTime<Utc>>,
}

/// Field-by-field patch applied by the store. `None` leaves the stored value
/// untouched; `featured_image` carries a nested Option so a patch can clear
/// the image as well as replace it.
#[derive(Debug, Clone)]
pub struct ArticleUpdate {
    pub id: ArticleId,
    pub title: Option<ArticleTitle>,
    pub slug: Option<ArticleSlug>,
    pub content: Option<ArticleContent>,
    pub excerpt: Option<ArticleExcerpt>,
    pub author: Option<AuthorName>,
    pub category: Option<Category>,
    pub featured_image: Option<Option<String>>,
    pub publish_state: Option<PublishStateUpdate>,
    pub updated_at: DateTime<Utc>,
}

impl ArticleUpdate {
    pub fn new(id: ArticleId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: None,
            slug: None,
            content: None,
            excerpt: None,
            author: None,
            category: None,
            featured_image: None,
            publish_state: None,
            updated_at,
        }
    }

    pub fn with_title(mut self, title: ArticleTitle) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_slug(mut self, slug: ArticleSlug) -> Self {
        self.slug = Some(slug);
        self
    }

    pub fn with_content(mut self, content: ArticleContent) -> Self {
        self.content = Some(content);
        self
    }

    pub fn with_excerpt(mut self, excerpt: ArticleExcerpt) -> Self {
        self.excerpt = Some(excerpt);
        self
    }

    pub fn with_author(mut self, author: AuthorName) -> Self {
        self.author = Some(author);
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_featured_image(mut self, featured_image: Option<String>) -> Self {
        self.featured_image = Some(featured_image);
        self
    }

    pub fn with_publish_state(mut self, state: PublishStateUpdate) -> Self {
        self.publish_state = Some(state);
        self
    }
}
