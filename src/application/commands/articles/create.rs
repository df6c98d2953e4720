// src/application/commands/articles/create.rs
use super::{ArticleCommandService, service::publish_state_for};
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{
        ArticleContent, ArticleExcerpt, ArticleSlug, ArticleTitle, AuthorName, Category,
        NewArticle,
    },
};
use chrono::{DateTime, Utc};

/// Fields are optional so missing values surface as field-level validation
/// errors instead of deserialization failures.
pub struct CreateArticleCommand {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub author: Option<String>,
    pub category: Option<String>,
    pub featured_image: Option<String>,
    pub published: bool,
    pub published_at: Option<DateTime<Utc>>,
}

pub(super) fn required<T>(value: Option<T>, field: &'static str) -> ApplicationResult<T> {
    value.ok_or_else(|| ApplicationError::validation(format!("{field} is required")))
}

impl ArticleCommandService {
    pub async fn create_article(
        &self,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let title = ArticleTitle::new(required(command.title, "title")?)?;
        let slug = ArticleSlug::new(required(command.slug, "slug")?)?;
        let content = ArticleContent::new(required(command.content, "content")?)?;
        let excerpt = ArticleExcerpt::new(required(command.excerpt, "excerpt")?)?;
        let author = AuthorName::new(required(command.author, "author")?)?;
        let category = required(command.category, "category")?.parse::<Category>()?;

        let now = self.clock.now();
        let state = publish_state_for(command.published, command.published_at, now);

        let new_article = NewArticle {
            title,
            slug,
            content,
            excerpt,
            author,
            category,
            featured_image: command.featured_image,
            published: state.published,
            published_at: state.published_at,
            created_at: now,
            updated_at: now,
        };

        let created = self.write_repo.insert(new_article).await?;
        Ok(created.into())
    }
}
