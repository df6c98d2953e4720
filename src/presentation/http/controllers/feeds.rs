// src/presentation/http/controllers/feeds.rs
use crate::application::dto::ArticleDto;
use crate::config::SiteConfig;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension,
    http::{HeaderMap, HeaderValue, header},
};
use chrono::{DateTime, Datelike, Utc};
use rss::{
    CategoryBuilder, Channel, ChannelBuilder, EnclosureBuilder, GuidBuilder, ImageBuilder, Item,
    ItemBuilder,
};
use std::fmt::Write as _;

#[utoipa::path(
    get,
    path = "/rss.xml",
    responses(
        (status = 200, description = "RSS 2.0 channel over the published articles.", body = String, content_type = "application/rss+xml"),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorBody)
    ),
    tag = "Feeds"
)]
pub async fn rss_feed(Extension(state): Extension<HttpState>) -> HttpResult<(HeaderMap, String)> {
    let articles = state
        .services
        .article_queries
        .list_published_articles()
        .await
        .into_http()?;

    let channel = build_channel(&state.site, &articles);

    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/rss+xml; charset=utf-8"),
    );
    if let Some(newest) = articles.iter().filter_map(|article| article.published_at).max() {
        if let Ok(value) = HeaderValue::from_str(&format_rfc1123(newest)) {
            headers.insert(header::LAST_MODIFIED, value);
        }
    }

    let mut body = String::from("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n");
    body.push_str(&channel.to_string());

    Ok((headers, body))
}

#[utoipa::path(
    get,
    path = "/sitemap.xml",
    responses(
        (status = 200, description = "Sitemap covering the home page, admin page and published articles.", body = String, content_type = "application/xml"),
        (status = 500, description = "Unexpected server error.", body = crate::presentation::http::error::ErrorBody)
    ),
    tag = "Feeds"
)]
pub async fn sitemap(Extension(state): Extension<HttpState>) -> HttpResult<(HeaderMap, String)> {
    let articles = state
        .services
        .article_queries
        .list_published_articles()
        .await
        .into_http()?;

    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/xml"),
    );

    Ok((headers, build_sitemap(&state.site, &articles)))
}

fn build_channel(site: &SiteConfig, articles: &[ArticleDto]) -> Channel {
    let now = Utc::now();
    let last_build = articles
        .first()
        .and_then(|article| article.published_at)
        .unwrap_or(now);

    let image = ImageBuilder::default()
        .url(format!("{}/favicon.png", site.base_url))
        .title(site.title.clone())
        .link(site.base_url.clone())
        .build();

    ChannelBuilder::default()
        .title(site.title.clone())
        .link(site.base_url.clone())
        .description(site.description.clone())
        .language("en".to_string())
        .copyright(format!("© {} {}", now.year(), site.title))
        .last_build_date(format_rfc1123(last_build))
        .image(image)
        .items(
            articles
                .iter()
                .map(|article| build_item(site, article))
                .collect::<Vec<_>>(),
        )
        .build()
}

fn build_item(site: &SiteConfig, article: &ArticleDto) -> Item {
    let url = format!("{}/article/{}", site.base_url, article.slug);
    let date = article.published_at.unwrap_or(article.created_at);

    let mut item = ItemBuilder::default();
    item.title(article.title.clone())
        .link(url.clone())
        .guid(GuidBuilder::default().value(url).permalink(true).build())
        .description(article.excerpt.clone())
        .content(ammonia::clean(&article.content))
        .author(article.author.clone())
        .categories(vec![
            CategoryBuilder::default()
                .name(article.category.to_string())
                .build(),
        ])
        .pub_date(format_rfc1123(date));

    if let Some(image_url) = article.featured_image.as_deref().filter(|url| !url.is_empty()) {
        item.enclosure(
            EnclosureBuilder::default()
                .url(image_url)
                .length("0")
                .mime_type(image_mime_type(image_url))
                .build(),
        );
    }

    item.build()
}

fn build_sitemap(site: &SiteConfig, articles: &[ArticleDto]) -> String {
    let mut doc = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    doc.push_str("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n");

    push_url(&mut doc, &format!("{}/", site.base_url), None, "daily", "1.0");
    push_url(&mut doc, &format!("{}/admin", site.base_url), None, "weekly", "0.5");

    for article in articles {
        let last_modified = article.published_at.unwrap_or(article.created_at);
        push_url(
            &mut doc,
            &format!("{}/article/{}", site.base_url, article.slug),
            Some(last_modified),
            "monthly",
            "0.8",
        );
    }

    doc.push_str("</urlset>");
    doc
}

fn push_url(
    doc: &mut String,
    loc: &str,
    last_modified: Option<DateTime<Utc>>,
    change_frequency: &str,
    priority: &str,
) {
    doc.push_str("  <url>\n");
    let _ = writeln!(doc, "    <loc>{}</loc>", xml_escape(loc));
    if let Some(at) = last_modified {
        let _ = writeln!(doc, "    <lastmod>{}</lastmod>", at.format("%Y-%m-%d"));
    }
    let _ = writeln!(doc, "    <changefreq>{change_frequency}</changefreq>");
    let _ = writeln!(doc, "    <priority>{priority}</priority>");
    doc.push_str("  </url>\n");
}

fn xml_escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn image_mime_type(url: &str) -> &'static str {
    let lowered = url.to_ascii_lowercase();
    if lowered.ends_with(".png") {
        "image/png"
    } else if lowered.ends_with(".gif") {
        "image/gif"
    } else if lowered.ends_with(".webp") {
        "image/webp"
    } else {
        "image/jpeg"
    }
}

fn format_rfc1123(at: DateTime<Utc>) -> String {
    httpdate::fmt_http_date(at.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::article::Category;
    use chrono::TimeZone;

    fn site() -> SiteConfig {
        SiteConfig {
            base_url: "https://news.example.org".to_string(),
            title: "Newsroom".to_string(),
            description: "Latest news and stories".to_string(),
        }
    }

    fn article(slug: &str) -> ArticleDto {
        ArticleDto {
            id: "5f0c1e3a-9b1d-4f6e-8a2b-3c4d5e6f7a8b".to_string(),
            title: "Harbour reopens".to_string(),
            slug: slug.to_string(),
            content: "<p>Ships are moving again.</p>".to_string(),
            excerpt: "The harbour is open.".to_string(),
            author: "Asha Yusuf".to_string(),
            category: Category::World,
            featured_image: None,
            published: true,
            published_at: Some(Utc.with_ymd_and_hms(2024, 5, 3, 12, 0, 0).unwrap()),
            created_at: Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2024, 5, 3, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn channel_carries_site_metadata() {
        let channel = build_channel(&site(), &[article("harbour-reopens")]);

        assert_eq!(channel.title(), "Newsroom");
        assert_eq!(channel.link(), "https://news.example.org");
        assert_eq!(channel.description(), "Latest news and stories");
        assert_eq!(channel.language(), Some("en"));
        assert_eq!(
            channel.copyright(),
            Some(format!("© {} Newsroom", Utc::now().year()).as_str())
        );
        assert_eq!(
            channel.last_build_date(),
            Some("Fri, 03 May 2024 12:00:00 GMT")
        );

        let image = channel.image().unwrap();
        assert_eq!(image.url(), "https://news.example.org/favicon.png");
        assert_eq!(image.link(), "https://news.example.org");
    }

    #[test]
    fn channel_last_build_date_defaults_to_now_for_an_empty_list() {
        let channel = build_channel(&site(), &[]);
        assert!(channel.last_build_date().is_some());
        assert!(channel.items().is_empty());
    }

    #[test]
    fn item_carries_article_fields() {
        let item = build_item(&site(), &article("harbour-reopens"));

        assert_eq!(item.title(), Some("Harbour reopens"));
        assert_eq!(
            item.link(),
            Some("https://news.example.org/article/harbour-reopens")
        );
        let guid = item.guid().unwrap();
        assert_eq!(guid.value(), "https://news.example.org/article/harbour-reopens");
        assert!(guid.is_permalink());
        assert_eq!(item.description(), Some("The harbour is open."));
        assert_eq!(item.author(), Some("Asha Yusuf"));
        assert_eq!(item.categories()[0].name(), "World");
        assert_eq!(item.pub_date(), Some("Fri, 03 May 2024 12:00:00 GMT"));
    }

    #[test]
    fn item_publication_date_falls_back_to_creation() {
        let mut draft = article("harbour-reopens");
        draft.published_at = None;

        let item = build_item(&site(), &draft);
        assert_eq!(item.pub_date(), Some("Wed, 01 May 2024 09:00:00 GMT"));
    }

    #[test]
    fn item_content_is_sanitized() {
        let mut dangerous = article("harbour-reopens");
        dangerous.content =
            "<h2>Update</h2><script>alert(1)</script><img src=\"/a.png\">".to_string();

        let item = build_item(&site(), &dangerous);
        let content = item.content().unwrap();
        assert!(content.contains("<h2>Update</h2>"));
        assert!(content.contains("<img"));
        assert!(!content.contains("script"));
    }

    #[test]
    fn enclosure_is_present_only_for_a_featured_image() {
        let mut with_image = article("harbour-reopens");
        with_image.featured_image = Some("https://cdn.example.org/harbour.png".to_string());

        let enclosure = build_item(&site(), &with_image).enclosure().cloned().unwrap();
        assert_eq!(enclosure.url(), "https://cdn.example.org/harbour.png");
        assert_eq!(enclosure.length(), "0");
        assert_eq!(enclosure.mime_type(), "image/png");

        assert!(build_item(&site(), &article("x")).enclosure().is_none());

        let mut blank = article("harbour-reopens");
        blank.featured_image = Some(String::new());
        assert!(build_item(&site(), &blank).enclosure().is_none());
    }

    #[test]
    fn image_mime_type_is_guessed_from_the_extension() {
        assert_eq!(image_mime_type("/a/photo.PNG"), "image/png");
        assert_eq!(image_mime_type("/a/anim.gif"), "image/gif");
        assert_eq!(image_mime_type("/a/pic.webp"), "image/webp");
        assert_eq!(image_mime_type("/a/shot.jpg"), "image/jpeg");
        assert_eq!(image_mime_type("/a/no-extension"), "image/jpeg");
    }

    #[test]
    fn sitemap_lists_fixed_pages_then_articles() {
        let doc = build_sitemap(&site(), &[article("harbour-reopens")]);

        let expected = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
            <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n  \
            <url>\n    \
            <loc>https://news.example.org/</loc>\n    \
            <changefreq>daily</changefreq>\n    \
            <priority>1.0</priority>\n  \
            </url>\n  \
            <url>\n    \
            <loc>https://news.example.org/admin</loc>\n    \
            <changefreq>weekly</changefreq>\n    \
            <priority>0.5</priority>\n  \
            </url>\n  \
            <url>\n    \
            <loc>https://news.example.org/article/harbour-reopens</loc>\n    \
            <lastmod>2024-05-03</lastmod>\n    \
            <changefreq>monthly</changefreq>\n    \
            <priority>0.8</priority>\n  \
            </url>\n\
            </urlset>";
        assert_eq!(doc, expected);
    }

    #[test]
    fn sitemap_uses_creation_date_for_undated_articles() {
        let mut undated = article("harbour-reopens");
        undated.published_at = None;

        let doc = build_sitemap(&site(), &[undated]);
        assert!(doc.contains("<lastmod>2024-05-01</lastmod>"));
    }

    #[test]
    fn sitemap_escapes_markup_in_locations() {
        let doc = build_sitemap(&site(), &[article("ports&harbours")]);
        assert!(doc.contains("<loc>https://news.example.org/article/ports&amp;harbours</loc>"));
    }
}
