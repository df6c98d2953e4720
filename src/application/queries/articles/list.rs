use super::ArticleQueryService;
use crate::application::{dto::ArticleDto, error::ApplicationResult};

impl ArticleQueryService {
    /// All articles, drafts included, newest created first. Serves the
    /// editorial dashboard.
    pub async fn list_articles(&self) -> ApplicationResult<Vec<ArticleDto>> {
        let articles = self.read_repo.list_all().await?;
        Ok(articles.into_iter().map(Into::into).collect())
    }

    /// Published articles only, most recently published first. Serves the
    /// reader front end and the syndication endpoints.
    pub async fn list_published_articles(&self) -> ApplicationResult<Vec<ArticleDto>> {
        let articles = self.read_repo.list_published().await?;
        Ok(articles.into_iter().map(Into::into).collect())
    }
}
