pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{Article, ArticleUpdate, NewArticle, PublishStateUpdate};
pub use repository::{ArticleReadRepository, ArticleWriteRepository};
pub use value_objects::{
    ArticleContent, ArticleExcerpt, ArticleId, ArticleSlug, ArticleTitle, AuthorName, Category,
};
