use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::article::{
    Article, ArticleId, ArticleReadRepository, ArticleSlug, ArticleUpdate,
    ArticleWriteRepository, NewArticle,
};
use crate::domain::errors::{DomainError, DomainResult};

/// Process-local article store backing both repository traits. Contents live
/// for the lifetime of the process; nothing is written to disk.
pub struct InMemoryArticleStore {
    articles: RwLock<HashMap<ArticleId, Article>>,
}

impl InMemoryArticleStore {
    pub fn new() -> Self {
        Self {
            articles: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryArticleStore {
    fn default() -> Self {
        Self::new()
    }
}

fn lock_poisoned() -> DomainError {
    DomainError::Persistence("article store lock poisoned".into())
}

#[async_trait]
impl ArticleWriteRepository for InMemoryArticleStore {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            title,
            slug,
            content,
            excerpt,
            author,
            category,
            featured_image,
            published,
            published_at,
            created_at,
            updated_at,
        } = article;

        let record = Article {
            id: ArticleId::generate(),
            title,
            slug,
            content,
            excerpt,
            author,
            category,
            featured_image,
            published,
            published_at,
            created_at,
            updated_at,
        };

        let mut articles = self.articles.write().map_err(|_| lock_poisoned())?;
        articles.insert(record.id, record.clone());
        Ok(record)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Option<Article>> {
        let mut articles = self.articles.write().map_err(|_| lock_poisoned())?;
        let Some(article) = articles.get_mut(&update.id) else {
            return Ok(None);
        };

        if let Some(title) = update.title {
            article.title = title;
        }
        if let Some(slug) = update.slug {
            article.slug = slug;
        }
        if let Some(content) = update.content {
            article.content = content;
        }
        if let Some(excerpt) = update.excerpt {
            article.excerpt = excerpt;
        }
        if let Some(author) = update.author {
            article.author = author;
        }
        if let Some(category) = update.category {
            article.category = category;
        }
        if let Some(featured_image) = update.featured_image {
            article.featured_image = featured_image;
        }
        if let Some(state) = update.publish_state {
            article.published = state.published;
            article.published_at = state.published_at;
        }
        article.updated_at = update.updated_at;

        Ok(Some(article.clone()))
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<bool> {
        let mut articles = self.articles.write().map_err(|_| lock_poisoned())?;
        Ok(articles.remove(&id).is_some())
    }
}

#[async_trait]
impl ArticleReadRepository for InMemoryArticleStore {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let articles = self.articles.read().map_err(|_| lock_poisoned())?;
        Ok(articles.get(&id).cloned())
    }

    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        let articles = self.articles.read().map_err(|_| lock_poisoned())?;
        Ok(articles
            .values()
            .find(|article| &article.slug == slug)
            .cloned())
    }

    async fn list_all(&self) -> DomainResult<Vec<Article>> {
        let articles = self.articles.read().map_err(|_| lock_poisoned())?;
        let mut all: Vec<Article> = articles.values().cloned().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(all)
    }

    async fn list_published(&self) -> DomainResult<Vec<Article>> {
        let articles = self.articles.read().map_err(|_| lock_poisoned())?;
        let mut published: Vec<Article> = articles
            .values()
            .filter(|article| article.published)
            .cloned()
            .collect();
        // `None` sorts after every concrete timestamp here, matching the
        // feed's expectation that undated publications trail the list.
        published.sort_by(|a, b| b.published_at.cmp(&a.published_at));
        Ok(published)
    }
}
