// src/application/commands/articles/service.rs
use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::{
    application::ports::time::Clock,
    domain::article::{ArticleWriteRepository, PublishStateUpdate},
};

pub struct ArticleCommandService {
    pub(super) write_repo: Arc<dyn ArticleWriteRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl ArticleCommandService {
    pub fn new(write_repo: Arc<dyn ArticleWriteRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { write_repo, clock }
    }
}

/// Resolve the publication state for a write that sets the `published` flag.
/// Publishing stamps the explicitly supplied timestamp when there is one and
/// the current time otherwise; unpublishing always clears the timestamp.
pub(super) fn publish_state_for(
    publish: bool,
    explicit_at: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> PublishStateUpdate {
    if publish {
        PublishStateUpdate {
            published: true,
            published_at: Some(explicit_at.unwrap_or(now)),
        }
    } else {
        PublishStateUpdate {
            published: false,
            published_at: None,
        }
    }
}
