// src/application/commands/articles/delete.rs
use super::ArticleCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::article::ArticleId,
};

pub struct DeleteArticleCommand {
    pub id: String,
}

impl ArticleCommandService {
    pub async fn delete_article(&self, command: DeleteArticleCommand) -> ApplicationResult<()> {
        let id = ArticleId::parse(&command.id)
            .map_err(|_| ApplicationError::not_found("Article not found"))?;

        let deleted = self.write_repo.delete(id).await?;
        if !deleted {
            return Err(ApplicationError::not_found("Article not found"));
        }
        Ok(())
    }
}
