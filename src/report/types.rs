//! Data model for stock analysis reports.

use std::collections::BTreeMap;

use serde::de::Deserializer;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

/// One labeled unit of analytical content.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Section {
    /// Human-readable section name.
    pub title: String,

    /// Markdown body.
    pub content: String,

    /// Optional extended commentary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub in_depth_analysis: Option<String>,

    /// Attached sources, in whichever shape the analysis service sent.
    #[serde(default, skip_serializing_if = "Sources::is_none")]
    pub sources: Sources,
}

impl Section {
    /// Create a section with a title and markdown body.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            in_depth_analysis: None,
            sources: Sources::None,
        }
    }

    /// Attach an in-depth analysis block.
    pub fn with_in_depth_analysis(mut self, text: impl Into<String>) -> Self {
        self.in_depth_analysis = Some(text.into());
        self
    }

    /// Attach sources.
    pub fn with_sources(mut self, sources: Sources) -> Self {
        self.sources = sources;
        self
    }
}

/// Sources attached to a section.
///
/// The wire format is polymorphic (absent, plain string, list of
/// strings, news payload, or an arbitrary object), so the variants are
/// resolved once at deserialization time and rendering dispatch stays
/// exhaustive.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Sources {
    /// No sources attached.
    #[default]
    None,
    /// A single free-text source.
    Text(String),
    /// A plain list of source strings.
    List(Vec<String>),
    /// Ingested news articles with sentiment metadata.
    News(Vec<NewsSource>),
    /// An arbitrary key/value mapping.
    Keyed(BTreeMap<String, Value>),
}

impl Sources {
    /// True when no sources are attached.
    pub fn is_none(&self) -> bool {
        matches!(self, Sources::None)
    }

    /// True when there is nothing to render.
    pub fn is_empty(&self) -> bool {
        match self {
            Sources::None => true,
            Sources::Text(text) => text.is_empty(),
            Sources::List(items) => items.is_empty(),
            Sources::News(items) => items.is_empty(),
            Sources::Keyed(map) => map.is_empty(),
        }
    }

    /// The news articles, when sources carry the news payload.
    pub fn as_news(&self) -> Option<&[NewsSource]> {
        match self {
            Sources::News(items) => Some(items),
            _ => None,
        }
    }

    /// Resolve a raw JSON value into its sources shape.
    ///
    /// The news payload is probed structurally: an object whose
    /// `content` field is an array. An object that accidentally matches
    /// is rendered as news rather than rejected.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Null => Sources::None,
            Value::String(text) => Sources::Text(text),
            Value::Array(items) => {
                Sources::List(items.iter().map(value_text).collect())
            }
            Value::Object(map) => {
                if let Some(Value::Array(items)) = map.get("content") {
                    let articles = items
                        .iter()
                        .cloned()
                        .map(|item| serde_json::from_value(item).unwrap_or_default())
                        .collect();
                    return Sources::News(articles);
                }
                Sources::Keyed(map.into_iter().collect())
            }
            other => Sources::Text(value_text(&other)),
        }
    }
}

impl<'de> Deserialize<'de> for Sources {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        Ok(Sources::from_value(value.unwrap_or(Value::Null)))
    }
}

impl Serialize for Sources {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Sources::None => serializer.serialize_none(),
            Sources::Text(text) => text.serialize(serializer),
            Sources::List(items) => items.serialize(serializer),
            Sources::News(items) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("content", items)?;
                map.end()
            }
            Sources::Keyed(map) => map.serialize(serializer),
        }
    }
}

/// Render a JSON value as display text: strings bare, everything else
/// as compact JSON.
pub(crate) fn value_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// A single ingested news article with sentiment metadata.
///
/// Field names follow the analysis service wire format. Every field is
/// defaulted so malformed records degrade instead of failing a whole
/// report.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NewsSource {
    pub db_id: i64,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: Option<String>,
    pub guid: String,
    /// Publication date, ISO-8601.
    pub date: String,
    pub enclosure: i64,
    pub link: String,
    pub sentiment_score: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<NewsCompany>,
}

/// Company metadata attached to a news article.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NewsCompany {
    pub db_id: i64,
    /// NSE ticker symbol.
    pub nse: String,
    /// Extra wire fields, retained for round-tripping.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// The fixed section keys of a stock analysis report, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKey {
    BusinessOverview,
    ManagementStrategy,
    SectorOutlook,
    TechnicalAnalysis,
    FundamentalAnalysis,
    PeerComparison,
    ConferenceCallAnalysis,
    ShareholdingPattern,
    CorporateActions,
    NewsSentiment,
    RedFlags,
    Summary,
}

impl SectionKey {
    /// All section keys, in the order the report renders them.
    pub const ALL: [SectionKey; 12] = [
        SectionKey::BusinessOverview,
        SectionKey::ManagementStrategy,
        SectionKey::SectorOutlook,
        SectionKey::TechnicalAnalysis,
        SectionKey::FundamentalAnalysis,
        SectionKey::PeerComparison,
        SectionKey::ConferenceCallAnalysis,
        SectionKey::ShareholdingPattern,
        SectionKey::CorporateActions,
        SectionKey::NewsSentiment,
        SectionKey::RedFlags,
        SectionKey::Summary,
    ];

    /// Sections whose sources and in-depth analysis are collected in
    /// the trailing references block.
    pub const REFERENCED: [SectionKey; 5] = [
        SectionKey::TechnicalAnalysis,
        SectionKey::FundamentalAnalysis,
        SectionKey::PeerComparison,
        SectionKey::CorporateActions,
        SectionKey::NewsSentiment,
    ];

    /// Wire name of the key.
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKey::BusinessOverview => "business_overview",
            SectionKey::ManagementStrategy => "management_strategy",
            SectionKey::SectorOutlook => "sector_outlook",
            SectionKey::TechnicalAnalysis => "technical_analysis",
            SectionKey::FundamentalAnalysis => "fundamental_analysis",
            SectionKey::PeerComparison => "peer_comparison",
            SectionKey::ConferenceCallAnalysis => "conference_call_analysis",
            SectionKey::ShareholdingPattern => "shareholding_pattern",
            SectionKey::CorporateActions => "corporate_actions",
            SectionKey::NewsSentiment => "news_sentiment",
            SectionKey::RedFlags => "red_flags",
            SectionKey::Summary => "summary",
        }
    }

    /// Parse a wire name back into a key.
    pub fn parse(raw: &str) -> Option<SectionKey> {
        SectionKey::ALL.iter().copied().find(|key| key.as_str() == raw)
    }

    /// True for sections that render their sources inline instead of
    /// deferring to the references block.
    pub fn displays_sources_inline(&self) -> bool {
        matches!(
            self,
            SectionKey::ManagementStrategy
                | SectionKey::ConferenceCallAnalysis
                | SectionKey::ShareholdingPattern
        )
    }
}

/// The fixed mapping of section key to section content.
///
/// Missing sections default to empty so a partial document still
/// renders.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StockAnalysisReportData {
    pub business_overview: Section,
    pub management_strategy: Section,
    pub sector_outlook: Section,
    pub technical_analysis: Section,
    pub fundamental_analysis: Section,
    pub peer_comparison: Section,
    pub conference_call_analysis: Section,
    pub shareholding_pattern: Section,
    pub corporate_actions: Section,
    pub news_sentiment: Section,
    pub summary: Section,
    pub red_flags: Section,

    /// Opaque payload for the simulation chart widget.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub simulation_chart: Option<Value>,
}

impl StockAnalysisReportData {
    /// Look up a section by key.
    pub fn section(&self, key: SectionKey) -> &Section {
        match key {
            SectionKey::BusinessOverview => &self.business_overview,
            SectionKey::ManagementStrategy => &self.management_strategy,
            SectionKey::SectorOutlook => &self.sector_outlook,
            SectionKey::TechnicalAnalysis => &self.technical_analysis,
            SectionKey::FundamentalAnalysis => &self.fundamental_analysis,
            SectionKey::PeerComparison => &self.peer_comparison,
            SectionKey::ConferenceCallAnalysis => &self.conference_call_analysis,
            SectionKey::ShareholdingPattern => &self.shareholding_pattern,
            SectionKey::CorporateActions => &self.corporate_actions,
            SectionKey::NewsSentiment => &self.news_sentiment,
            SectionKey::RedFlags => &self.red_flags,
            SectionKey::Summary => &self.summary,
        }
    }

    /// Iterate sections in display order.
    pub fn sections(&self) -> impl Iterator<Item = (SectionKey, &Section)> {
        SectionKey::ALL.iter().map(move |key| (*key, self.section(*key)))
    }
}

/// A complete stock analysis document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockAnalysis {
    #[serde(default)]
    pub id: String,
    pub ticker: String,
    pub company_name: String,
    #[serde(default)]
    pub date: String,
    pub data: StockAnalysisReportData,
}
