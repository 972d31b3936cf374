//! Markdown formatting for a single report section.
//!
//! [`SectionFormatter`] turns one [`Section`] into the markdown
//! fragments the report views compose: a heading, the body, collapsible
//! in-depth analysis and sources blocks, and a stable anchor id usable
//! as an intra-document link target.
//!
//! Every operation is total: absent optional fields produce empty
//! output, never an error.

use super::types::{value_text, Section, Sources};

/// Markdown fragment builder for one section.
pub struct SectionFormatter<'a> {
    section: &'a Section,
}

impl<'a> SectionFormatter<'a> {
    /// Create a formatter over a section.
    pub fn new(section: &'a Section) -> Self {
        Self { section }
    }

    /// Derive a URL-fragment-safe anchor id from the title.
    ///
    /// Lowercase, hyphenated, deterministic for a given title. Never
    /// empty: a title with no alphanumeric characters falls back to
    /// `"section"`.
    pub fn anchor_id(&self) -> String {
        let mut slug = String::with_capacity(self.section.title.len());
        for c in self.section.title.chars() {
            if c.is_ascii_alphanumeric() {
                slug.push(c.to_ascii_lowercase());
            } else if !slug.is_empty() && !slug.ends_with('-') {
                slug.push('-');
            }
        }
        let slug = slug.trim_end_matches('-');
        if slug.is_empty() {
            "section".to_string()
        } else {
            slug.to_string()
        }
    }

    /// The title as a markdown heading.
    pub fn title_markdown(&self) -> String {
        format!("## {}", self.section.title)
    }

    /// The body, passed through verbatim (already markdown).
    pub fn content_markdown(&self) -> String {
        self.section.content.clone()
    }

    /// The in-depth analysis wrapped in a collapsible block, or empty.
    pub fn in_depth_analysis_markdown(&self) -> String {
        match self.section.in_depth_analysis.as_deref() {
            Some(text) if !text.is_empty() => details_block("In-depth Analysis", text),
            _ => String::new(),
        }
    }

    /// Normalize the sources into a single markdown string.
    ///
    /// News sources are not handled here: the caller dispatches them to
    /// the structured news renderer, so they yield an empty string.
    pub fn source(&self) -> String {
        match &self.section.sources {
            Sources::None | Sources::News(_) => String::new(),
            Sources::Text(text) => text.clone(),
            Sources::List(items) => items
                .iter()
                .map(|item| format!("- {}", item))
                .collect::<Vec<_>>()
                .join("\n"),
            Sources::Keyed(map) => map
                .iter()
                .map(|(key, value)| format!("- {}: {}", key, value_text(value)))
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }

    /// [`source`](Self::source) wrapped in a collapsible "Sources"
    /// block; empty when there is nothing to show.
    pub fn sources_markdown(&self) -> String {
        let source = self.source();
        if source.is_empty() {
            String::new()
        } else {
            details_block("Sources", &source)
        }
    }

    /// One-shot rendering: title, content, in-depth analysis and
    /// sources concatenated in order, empty fragments skipped.
    pub fn markdown(&self) -> String {
        [
            self.title_markdown(),
            self.content_markdown(),
            self.in_depth_analysis_markdown(),
            self.sources_markdown(),
        ]
        .into_iter()
        .filter(|fragment| !fragment.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
    }
}

/// A collapsible block in the `<details>` extension understood by the
/// markdown renderer.
pub fn details_block(summary: &str, body: &str) -> String {
    format!(
        "<details open><summary>{}</summary>\n\n{}\n</details>\n",
        summary, body
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::BTreeMap;

    fn section() -> Section {
        Section::new("Technical Analysis", "RSI is neutral.")
    }

    #[test]
    fn test_anchor_id_slug() {
        let section = section();
        let formatter = SectionFormatter::new(&section);
        assert_eq!(formatter.anchor_id(), "technical-analysis");
    }

    #[test]
    fn test_anchor_id_deterministic_across_instances() {
        let a = Section::new("News & Sentiment", "x");
        let b = Section::new("News & Sentiment", "y");
        let id_a = SectionFormatter::new(&a).anchor_id();
        assert_eq!(id_a, SectionFormatter::new(&a).anchor_id());
        assert_eq!(id_a, SectionFormatter::new(&b).anchor_id());
    }

    #[test]
    fn test_anchor_id_strips_punctuation() {
        let section = Section::new("P/E & Growth (FY24)", "x");
        assert_eq!(SectionFormatter::new(&section).anchor_id(), "p-e-growth-fy24");
    }

    #[test]
    fn test_anchor_id_never_empty() {
        let section = Section::new("???", "x");
        assert_eq!(SectionFormatter::new(&section).anchor_id(), "section");
    }

    #[test]
    fn test_anchor_ids_distinct_for_report_titles() {
        let titles = [
            "Business Overview",
            "Management Strategy",
            "Sector Outlook",
            "Technical Analysis",
            "Fundamental Analysis",
            "Peer Comparison",
            "Conference Call Analysis",
            "Shareholding Pattern",
            "Corporate Actions",
            "News Sentiment",
            "Red Flags",
            "Summary",
        ];
        let mut seen = std::collections::HashSet::new();
        for title in titles {
            let section = Section::new(title, "x");
            assert!(seen.insert(SectionFormatter::new(&section).anchor_id()));
        }
    }

    #[test]
    fn test_title_markdown_heading() {
        let section = section();
        assert_eq!(
            SectionFormatter::new(&section).title_markdown(),
            "## Technical Analysis"
        );
    }

    #[test]
    fn test_content_markdown_verbatim() {
        let section = Section::new("T", "**bold** and `code`\n\n- item");
        assert_eq!(
            SectionFormatter::new(&section).content_markdown(),
            "**bold** and `code`\n\n- item"
        );
    }

    #[test]
    fn test_in_depth_analysis_absent_is_empty() {
        let section = section();
        assert_eq!(SectionFormatter::new(&section).in_depth_analysis_markdown(), "");
    }

    #[test]
    fn test_in_depth_analysis_wrapped_in_details() {
        let section = section().with_in_depth_analysis("Deeper dive.");
        let markdown = SectionFormatter::new(&section).in_depth_analysis_markdown();
        assert_eq!(
            markdown,
            "<details open><summary>In-depth Analysis</summary>\n\nDeeper dive.\n</details>\n"
        );
    }

    #[test]
    fn test_source_absent_is_empty() {
        let section = section();
        let formatter = SectionFormatter::new(&section);
        assert_eq!(formatter.source(), "");
        assert_eq!(formatter.sources_markdown(), "");
    }

    #[test]
    fn test_source_list_bulleted_in_order() {
        let section = section().with_sources(Sources::List(vec![
            "NSE filings".to_string(),
            "Broker note".to_string(),
        ]));
        assert_eq!(
            SectionFormatter::new(&section).source(),
            "- NSE filings\n- Broker note"
        );
    }

    #[test]
    fn test_source_single_string_passthrough() {
        let section = section().with_sources(Sources::Text("Annual report".to_string()));
        assert_eq!(SectionFormatter::new(&section).source(), "Annual report");
    }

    #[test]
    fn test_source_keyed_mapping_bulleted_pairs() {
        let mut map = BTreeMap::new();
        map.insert("screener".to_string(), json!("https://screener.in"));
        map.insert("filings".to_string(), json!(3));
        let section = section().with_sources(Sources::Keyed(map));
        assert_eq!(
            SectionFormatter::new(&section).source(),
            "- filings: 3\n- screener: https://screener.in"
        );
    }

    #[test]
    fn test_source_news_not_handled_generically() {
        let section = section().with_sources(Sources::News(vec![Default::default()]));
        let formatter = SectionFormatter::new(&section);
        assert_eq!(formatter.source(), "");
        assert_eq!(formatter.sources_markdown(), "");
    }

    #[test]
    fn test_sources_markdown_wraps_in_details() {
        let section = section().with_sources(Sources::Text("Annual report".to_string()));
        assert_eq!(
            SectionFormatter::new(&section).sources_markdown(),
            "<details open><summary>Sources</summary>\n\nAnnual report\n</details>\n"
        );
    }

    #[test]
    fn test_markdown_is_ordered_concatenation() {
        let section = section()
            .with_in_depth_analysis("Deeper dive.")
            .with_sources(Sources::List(vec!["NSE filings".to_string()]));
        let formatter = SectionFormatter::new(&section);
        let expected = [
            formatter.title_markdown(),
            formatter.content_markdown(),
            formatter.in_depth_analysis_markdown(),
            formatter.sources_markdown(),
        ]
        .into_iter()
        .filter(|fragment| !fragment.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n");
        assert_eq!(formatter.markdown(), expected);
    }

    #[test]
    fn test_markdown_skips_empty_fragments() {
        let section = section();
        let formatter = SectionFormatter::new(&section);
        assert_eq!(
            formatter.markdown(),
            "## Technical Analysis\n\nRSI is neutral."
        );
    }
}
