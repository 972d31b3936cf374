//! Report assembly over section formatters.
//!
//! Two view variants consume [`SectionFormatter`] output:
//!
//! - the **chat view** renders every section in full, inline;
//! - the **report view** renders each section with an anchor and a
//!   forward link to a trailing "Data Sources" references block, where
//!   the deferred sources and in-depth analysis are collected.
//!
//! Both views apply the same optional section filter, keeping the
//! inline body and the references block in sync.

use super::formatter::{details_block, SectionFormatter};
use super::news::{format_news_date, news_sources_markdown};
use super::types::{Section, SectionKey, StockAnalysis};

/// Caller-supplied rendering options.
#[derive(Debug, Clone, Default)]
pub struct ReportOptions {
    /// Restrict rendering to these section keys. Empty means all.
    pub selected_sections: Vec<SectionKey>,

    /// Free-text comment appended after the report body.
    pub personal_comment: Option<String>,
}

impl ReportOptions {
    /// Whether a section passes the filter.
    pub fn includes(&self, key: SectionKey) -> bool {
        self.selected_sections.is_empty() || self.selected_sections.contains(&key)
    }
}

/// Renders a [`StockAnalysis`] into a markdown document.
#[derive(Debug, Clone, Default)]
pub struct ReportRenderer {
    options: ReportOptions,
}

impl ReportRenderer {
    /// Create a renderer with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a renderer with custom options.
    pub fn with_options(options: ReportOptions) -> Self {
        Self { options }
    }

    /// Chat view: each selected section rendered in full.
    ///
    /// The news-sentiment section substitutes the structured news
    /// renderer for its sources block.
    pub fn render_chat(&self, analysis: &StockAnalysis) -> String {
        let mut blocks = Vec::new();
        for (key, section) in analysis.data.sections() {
            if !self.options.includes(key) {
                continue;
            }
            let block = self.chat_section(key, section);
            if !block.is_empty() {
                blocks.push(block);
            }
        }
        tracing::debug!(sections = blocks.len(), "Rendered chat view");
        blocks.join("\n\n")
    }

    /// Report view: welcome header, anchored sections with deferred
    /// sources, optional personal comment, then the references block.
    pub fn render_report(&self, analysis: &StockAnalysis) -> String {
        let mut out = welcome_markdown(analysis);

        for (key, section) in analysis.data.sections() {
            if !self.options.includes(key) {
                continue;
            }
            out.push_str("\n\n");
            out.push_str(&self.report_section(key, section));
        }
        // The simulation chart is drawn by an external widget and has
        // no markdown projection.

        if let Some(comment) = self.options.personal_comment.as_deref() {
            if !comment.is_empty() {
                out.push_str("\n\n---\n\n## Personal Comment\n\n");
                out.push_str(comment);
            }
        }

        let references = self.references_block(analysis);
        if !references.is_empty() {
            out.push_str("\n\n---\n\n## Data Sources\n\n");
            out.push_str(&references);
        }

        out.push('\n');
        tracing::debug!(ticker = %analysis.ticker, "Rendered report view");
        out
    }

    fn chat_section(&self, key: SectionKey, section: &Section) -> String {
        let formatter = SectionFormatter::new(section);
        if key != SectionKey::NewsSentiment {
            return formatter.markdown();
        }

        let news = section
            .sources
            .as_news()
            .map(news_sources_markdown)
            .unwrap_or_else(|| formatter.sources_markdown());
        [
            formatter.title_markdown(),
            formatter.content_markdown(),
            formatter.in_depth_analysis_markdown(),
            news,
        ]
        .into_iter()
        .filter(|fragment| !fragment.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
    }

    /// One inline section: anchor target, heading, forward link to the
    /// references block (unless sources display inline), body.
    fn report_section(&self, key: SectionKey, section: &Section) -> String {
        let formatter = SectionFormatter::new(section);
        let anchor = formatter.anchor_id();
        let inline_sources = key.displays_sources_inline();

        let mut out = format!("<a id=\"{}\"></a>\n\n", anchor);
        out.push_str(&formatter.title_markdown());

        if section_has_refs(section) && !inline_sources {
            out.push_str(&format!(
                "\n\n[Sources & In-depth Analysis](#refs-{})",
                anchor
            ));
        }

        out.push_str("\n\n");
        out.push_str(&formatter.content_markdown());
        out.push_str("\n\n---");

        if inline_sources {
            let sources = formatter.sources_markdown();
            if !sources.is_empty() {
                out.push_str("\n\n");
                out.push_str(&sources);
            }
        }

        out
    }

    /// The trailing references block: one entry per eligible section
    /// that passes the filter and has anything to show.
    fn references_block(&self, analysis: &StockAnalysis) -> String {
        let mut entries = Vec::new();
        for key in SectionKey::REFERENCED {
            if !self.options.includes(key) {
                continue;
            }
            let section = analysis.data.section(key);
            let entry = if key == SectionKey::NewsSentiment {
                news_reference_entry(section)
            } else {
                reference_entry(section)
            };
            if !entry.is_empty() {
                entries.push(entry);
            }
        }
        entries.join("\n\n---\n\n")
    }
}

/// Report header: company, ticker and analysis date.
fn welcome_markdown(analysis: &StockAnalysis) -> String {
    let mut out = format!(
        "# {} ({})",
        analysis.company_name,
        analysis.ticker.to_uppercase()
    );
    if !analysis.date.is_empty() {
        out.push_str(&format!("\n\n*{}*", format_news_date(&analysis.date)));
    }
    out
}

/// Whether a section defers anything to the references block.
fn section_has_refs(section: &Section) -> bool {
    let has_in_depth = section
        .in_depth_analysis
        .as_deref()
        .is_some_and(|text| !text.is_empty());
    has_in_depth || !section.sources.is_empty()
}

/// Generic references entry: anchored back-link plus collapsible
/// in-depth analysis and sources.
fn reference_entry(section: &Section) -> String {
    let formatter = SectionFormatter::new(section);
    let source = formatter.source();
    let in_depth = section.in_depth_analysis.as_deref().unwrap_or("");
    if source.is_empty() && in_depth.is_empty() {
        return String::new();
    }

    let anchor = formatter.anchor_id();
    let mut out = reference_heading(&section.title, &anchor);
    if !in_depth.is_empty() {
        out.push_str("\n\n");
        out.push_str(&details_block("In-depth Analysis", in_depth));
    }
    if !source.is_empty() {
        out.push_str("\n\n");
        out.push_str(&details_block("Sources", &source));
    }
    out
}

/// News-sentiment references entry: the structured news renderer
/// replaces the generic sources block.
fn news_reference_entry(section: &Section) -> String {
    let formatter = SectionFormatter::new(section);
    let in_depth = section.in_depth_analysis.as_deref().unwrap_or("");
    let news = section
        .sources
        .as_news()
        .map(news_sources_markdown)
        .unwrap_or_default();
    if in_depth.is_empty() && news.is_empty() {
        return String::new();
    }

    let anchor = formatter.anchor_id();
    let mut out = reference_heading(&section.title, &anchor);
    if !in_depth.is_empty() {
        out.push_str("\n\n");
        out.push_str(&details_block("In-depth Analysis", in_depth));
    }
    if !news.is_empty() {
        out.push_str("\n\n");
        out.push_str(&news);
    }
    out
}

/// Anchored entry heading linking back to the inline section.
fn reference_heading(title: &str, anchor: &str) -> String {
    format!(
        "<a id=\"refs-{}\"></a>\n\n###### [{}](#{})",
        anchor, title, anchor
    )
}
