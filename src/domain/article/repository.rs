use crate::domain::article::entity::{Article, ArticleUpdate, NewArticle};
use crate::domain::article::value_objects::{ArticleId, ArticleSlug};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    /// Persist a new article, allocating its identifier.
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
    /// Apply a patch to a stored article. Returns `None` when no article has
    /// the patched id.
    async fn update(&self, update: ArticleUpdate) -> DomainResult<Option<Article>>;
    /// Remove an article. Returns whether a record was actually deleted.
    async fn delete(&self, id: ArticleId) -> DomainResult<bool>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>>;
    /// Every article, drafts included, newest created first.
    async fn list_all(&self) -> DomainResult<Vec<Article>>;
    /// Published articles only, most recently published first.
    async fn list_published(&self) -> DomainResult<Vec<Article>>;
}
