//! Structured rendering for news-sentiment sources.
//!
//! News articles bypass the generic sources path: each article renders
//! as a link with a formatted date, a signed sentiment score (omitted
//! when zero) and an optional uppercase ticker badge.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use super::formatter::details_block;
use super::types::NewsSource;

/// Render a list of news articles as a collapsible markdown block.
///
/// An empty list renders nothing, not even the collapsible shell.
pub fn news_sources_markdown(articles: &[NewsSource]) -> String {
    if articles.is_empty() {
        return String::new();
    }

    let items: Vec<String> = articles.iter().map(news_item_markdown).collect();
    let summary = format!("Sources ({} articles)", articles.len());
    details_block(&summary, &items.join("\n"))
}

/// One article: title link plus a metadata line.
fn news_item_markdown(article: &NewsSource) -> String {
    let mut meta = vec![format_news_date(&article.date)];

    if article.sentiment_score != 0.0 {
        meta.push(format!(
            "Sentiment: {}",
            format_signed_score(article.sentiment_score)
        ));
    }

    if let Some(company) = &article.company {
        if !company.nse.is_empty() {
            meta.push(company.nse.to_uppercase());
        }
    }

    format!(
        "- [{}]({})  \n  {}",
        article.title,
        article.link,
        meta.join(" · ")
    )
}

/// Format an ISO-8601 date as a short locale date (`Jan 1, 2024`).
///
/// Unparsable input passes through unchanged.
pub(crate) fn format_news_date(raw: &str) -> String {
    if let Ok(date) = DateTime::parse_from_rfc3339(raw) {
        return date.format("%b %-d, %Y").to_string();
    }
    if let Ok(date) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return date.format("%b %-d, %Y").to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%b %-d, %Y").to_string();
    }
    raw.to_string()
}

/// Signed score display: explicit plus for positive values, whole
/// numbers without the trailing `.0`.
fn format_signed_score(score: f64) -> String {
    let magnitude = if score.fract() == 0.0 {
        format!("{}", score as i64)
    } else {
        format!("{}", score)
    };
    if score > 0.0 {
        format!("+{}", magnitude)
    } else {
        magnitude
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::types::NewsCompany;

    fn article(title: &str, score: f64) -> NewsSource {
        NewsSource {
            db_id: 1,
            title: title.to_string(),
            link: "https://news.example/1".to_string(),
            date: "2024-01-01".to_string(),
            sentiment_score: score,
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_list_renders_nothing() {
        assert_eq!(news_sources_markdown(&[]), "");
    }

    #[test]
    fn test_article_count_in_summary() {
        let rendered = news_sources_markdown(&[article("A", 0.0), article("B", 0.0)]);
        assert!(rendered.contains("<summary>Sources (2 articles)</summary>"));
    }

    #[test]
    fn test_zero_sentiment_omitted() {
        let rendered = news_sources_markdown(&[article("A", 0.0)]);
        assert!(rendered.contains("[A](https://news.example/1)"));
        assert!(rendered.contains("Jan 1, 2024"));
        assert!(!rendered.contains("Sentiment:"));
    }

    #[test]
    fn test_positive_sentiment_signed() {
        let rendered = news_sources_markdown(&[article("A", 0.8)]);
        assert!(rendered.contains("Sentiment: +0.8"));
    }

    #[test]
    fn test_negative_sentiment_signed() {
        let rendered = news_sources_markdown(&[article("A", -0.5)]);
        assert!(rendered.contains("Sentiment: -0.5"));
    }

    #[test]
    fn test_whole_score_without_decimal() {
        let rendered = news_sources_markdown(&[article("A", 1.0)]);
        assert!(rendered.contains("Sentiment: +1"));
        assert!(!rendered.contains("+1.0"));
    }

    #[test]
    fn test_ticker_badge_uppercase() {
        let mut item = article("A", 0.0);
        item.company = Some(NewsCompany {
            db_id: 2,
            nse: "tcs".to_string(),
            ..Default::default()
        });
        let rendered = news_sources_markdown(&[item]);
        assert!(rendered.contains("TCS"));
    }

    #[test]
    fn test_rfc3339_date_formatted() {
        assert_eq!(format_news_date("2024-03-31T10:30:00Z"), "Mar 31, 2024");
    }

    #[test]
    fn test_unparsable_date_passes_through() {
        assert_eq!(format_news_date("last week"), "last week");
    }
}
