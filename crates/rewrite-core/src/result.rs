//! The structured rewrite result.
//!
//! Field names serialize in camelCase so the same shapes double as the JSON
//! schema the model is asked to fill in.

use serde::{Deserialize, Serialize};

/// Fully populated output of one rewrite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewriteResult {
    /// Rewritten article body (HTML).
    pub rewritten_content: String,
    /// Heuristic SEO score, 1-100.
    pub seo_score: u32,
    pub helpfulness_score: u32,
    pub quality_score: u32,
    pub eat_score: u32,
    pub structure_score: u32,
    pub ai_optimization_score: u32,
    /// Whitespace-separated tokens in `rewritten_content`.
    pub word_count: usize,
    /// Keyword density such as `"2.5%"`.
    pub keyword_density: String,
    /// At most 155 characters.
    pub meta_description: String,
    pub featured_image: FeaturedImage,
    /// At most 8 entries.
    pub faq: Vec<FaqItem>,
    /// At most 3 entries.
    pub case_studies: Vec<CaseStudy>,
    pub rich_content: RichContent,
    pub citations: Vec<Citation>,
    pub internal_linking: Vec<InternalLink>,
    pub entities: Entities,
    pub schema_markup: SchemaMarkup,
    /// Present only when an author name was supplied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_bio: Option<AuthorBio>,
    /// Present only when a company name was supplied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cta_section: Option<CtaSection>,
}

/// Suggested primary image for the article.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturedImage {
    pub title: String,
    pub alt_text: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// A question and its answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
}

/// A real-world case study backing the article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseStudy {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub growth_metric: String,
    #[serde(default)]
    pub source_url: String,
}

/// Rich-content suggestions grouped by medium.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RichContent {
    pub graphics: Vec<GraphicSuggestion>,
    pub images: Vec<ImageSuggestion>,
    pub visual_elements: Vec<VisualElement>,
}

/// A chart or infographic idea.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphicSuggestion {
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// An image to place in the body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageSuggestion {
    pub description: String,
    #[serde(default)]
    pub alt_text: String,
    #[serde(default)]
    pub placement: String,
}

/// A callout, table, checklist or similar block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisualElement {
    #[serde(rename = "type")]
    pub kind: String,
    pub content: String,
}

/// A source supporting a claim in the text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Citation {
    pub claim: String,
    pub source: String,
    #[serde(default)]
    pub url: String,
}

/// A suggested link to another page of the same site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InternalLink {
    #[serde(alias = "anchorText")]
    pub text: String,
    pub url: String,
}

/// Named entities found in the rewritten text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entities {
    pub brands: Vec<String>,
    pub people: Vec<String>,
    pub locations: Vec<String>,
    pub concepts: Vec<String>,
}

/// Which structured-data markup types suit the content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaMarkup {
    pub article_schema: bool,
    pub faq_schema: bool,
    pub how_to_schema: bool,
    pub organization_schema: bool,
    pub person_schema: bool,
}

impl Default for SchemaMarkup {
    fn default() -> Self {
        Self {
            article_schema: true,
            faq_schema: false,
            how_to_schema: false,
            organization_schema: false,
            person_schema: false,
        }
    }
}

/// Short author presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorBio {
    pub name: String,
    pub description: String,
}

/// Closing call to action for the company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CtaSection {
    pub title: String,
    pub description: String,
    pub button_text: String,
    pub link: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_markup_default() {
        let markup = SchemaMarkup::default();
        assert!(markup.article_schema);
        assert!(!markup.faq_schema);
        assert!(!markup.how_to_schema);
        assert!(!markup.organization_schema);
        assert!(!markup.person_schema);
    }

    #[test]
    fn test_internal_link_accepts_anchor_text() {
        let link: InternalLink =
            serde_json::from_str(r#"{"anchorText":"Guia","url":"https://a.com.br/guia"}"#)
                .unwrap();
        assert_eq!(link.text, "Guia");
    }

    #[test]
    fn test_case_study_optional_fields() {
        let study: CaseStudy =
            serde_json::from_str(r#"{"title":"Loja X","description":"Cresceu"}"#).unwrap();
        assert!(study.growth_metric.is_empty());
        assert!(study.source_url.is_empty());
    }
}
