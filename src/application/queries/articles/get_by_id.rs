use super::ArticleQueryService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::ArticleId,
};

pub struct GetArticleByIdQuery {
    pub id: String,
}

impl ArticleQueryService {
    pub async fn get_article_by_id(
        &self,
        query: GetArticleByIdQuery,
    ) -> ApplicationResult<ArticleDto> {
        // A key that is not a UUID cannot name any article, so it reads as a
        // miss rather than a bad request.
        let id = ArticleId::parse(&query.id)
            .map_err(|_| ApplicationError::not_found("Article not found"))?;
        let article = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Article not found"))?;
        Ok(article.into())
    }
}
