// src/application/commands/articles/update.rs
use super::{ArticleCommandService, service::publish_state_for};
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{
        ArticleContent, ArticleExcerpt, ArticleId, ArticleSlug, ArticleTitle, ArticleUpdate,
        AuthorName, Category,
    },
};
use chrono::{DateTime, Utc};

/// Partial update. An absent field leaves the stored value alone; for
/// `featured_image` and `published_at` the nested Option distinguishes an
/// explicit `null` from an absent field.
pub struct UpdateArticleCommand {
    pub id: String,
    pub title: Option<String>,
    pub slug: Option<String>,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub author: Option<String>,
    pub category: Option<String>,
    pub featured_image: Option<Option<String>>,
    pub published: Option<bool>,
    pub published_at: Option<Option<DateTime<Utc>>>,
}

impl ArticleCommandService {
    pub async fn update_article(
        &self,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let UpdateArticleCommand {
            id,
            title,
            slug,
            content,
            excerpt,
            author,
            category,
            featured_image,
            published,
            published_at,
        } = command;

        // Validate supplied fields before touching the store so a bad payload
        // is reported as 400 even when the id would not match anything.
        let title = title.map(ArticleTitle::new).transpose()?;
        let slug = slug.map(ArticleSlug::new).transpose()?;
        let content = content.map(ArticleContent::new).transpose()?;
        let excerpt = excerpt.map(ArticleExcerpt::new).transpose()?;
        let author = author.map(AuthorName::new).transpose()?;
        let category = category.as_deref().map(str::parse::<Category>).transpose()?;

        let id = ArticleId::parse(&id)
            .map_err(|_| ApplicationError::not_found("Article not found"))?;
        let now = self.clock.now();

        let mut update = ArticleUpdate::new(id, now);
        if let Some(title) = title {
            update = update.with_title(title);
        }
        if let Some(slug) = slug {
            update = update.with_slug(slug);
        }
        if let Some(content) = content {
            update = update.with_content(content);
        }
        if let Some(excerpt) = excerpt {
            update = update.with_excerpt(excerpt);
        }
        if let Some(author) = author {
            update = update.with_author(author);
        }
        if let Some(category) = category {
            update = update.with_category(category);
        }
        if let Some(featured_image) = featured_image {
            update = update.with_featured_image(featured_image);
        }
        // A publishedAt supplied without the published flag is deliberately
        // ignored; the publication timestamp only moves together with the flag.
        if let Some(publish) = published {
            update = update.with_publish_state(publish_state_for(
                publish,
                published_at.flatten(),
                now,
            ));
        }

        let updated = self
            .write_repo
            .update(update)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Article not found"))?;
        Ok(updated.into())
    }
}
