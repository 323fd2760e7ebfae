//! Coercion of the model's reply into a fully populated [`RewriteResult`].
//!
//! Defaults live in one place, [`RewriteResult::defaults`]. Both the parsed
//! and the unparseable reply paths start from it; the parsed path overlays
//! whatever well-typed fields the model returned.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::lookup::MAX_CASE_STUDIES;
use crate::metrics::ContentMetrics;
use crate::params::RewriteParams;
use crate::prompt::{MAX_FAQ_ITEMS, META_DESCRIPTION_MAX_CHARS};
use crate::result::{
    AuthorBio, CaseStudy, CtaSection, Entities, FaqItem, FeaturedImage, RewriteResult,
    RichContent, SchemaMarkup,
};

pub const DEFAULT_HELPFULNESS_SCORE: u32 = 85;
pub const DEFAULT_QUALITY_SCORE: u32 = 80;
pub const DEFAULT_EAT_SCORE: u32 = 75;
pub const DEFAULT_STRUCTURE_SCORE: u32 = 82;
pub const DEFAULT_AI_OPTIMIZATION_SCORE: u32 = 78;

/// Request details the defaults are derived from.
#[derive(Debug, Clone, Copy)]
pub struct ResultContext<'a> {
    pub keyword: &'a str,
    pub original_content: &'a str,
    pub params: &'a RewriteParams,
    pub case_studies: &'a [CaseStudy],
    pub domain: &'a str,
}

impl RewriteResult {
    /// The result used wherever the model gave nothing usable.
    ///
    /// Metrics are computed from the original content; `normalize_reply`
    /// recomputes them from the final text.
    pub fn defaults(ctx: &ResultContext<'_>) -> Self {
        let keyword = ctx.keyword;
        let metrics = ContentMetrics::measure(ctx.original_content, keyword);

        Self {
            rewritten_content: ctx.original_content.to_string(),
            seo_score: metrics.seo_score,
            helpfulness_score: DEFAULT_HELPFULNESS_SCORE,
            quality_score: DEFAULT_QUALITY_SCORE,
            eat_score: DEFAULT_EAT_SCORE,
            structure_score: DEFAULT_STRUCTURE_SCORE,
            ai_optimization_score: DEFAULT_AI_OPTIMIZATION_SCORE,
            word_count: metrics.word_count,
            keyword_density: metrics.keyword_density,
            meta_description: format!("{} - resumo otimizado para SEO", keyword),
            featured_image: FeaturedImage {
                title: format!("Guia completo sobre {}", keyword),
                alt_text: format!("Imagem ilustrativa sobre {}", keyword),
                keywords: vec![keyword.to_string()],
            },
            faq: vec![FaqItem {
                question: format!("O que é {}?", keyword),
                answer: format!(
                    "{} é o tema central deste artigo, que reúne informações práticas e atualizadas sobre o assunto.",
                    keyword
                ),
            }],
            case_studies: ctx
                .case_studies
                .iter()
                .take(MAX_CASE_STUDIES)
                .cloned()
                .collect(),
            rich_content: RichContent::default(),
            citations: Vec::new(),
            internal_linking: Vec::new(),
            entities: Entities::default(),
            schema_markup: SchemaMarkup::default(),
            author_bio: ctx.params.author().map(|name| AuthorBio {
                name: name.to_string(),
                description: ctx
                    .params
                    .author_bio_text()
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("{} escreve sobre {}.", name, keyword)),
            }),
            cta_section: ctx.params.company().map(|company| CtaSection {
                title: format!("Conheça a {}", company),
                description: format!(
                    "A {} pode ajudar você com {}. Entre em contato e saiba mais.",
                    company, keyword
                ),
                button_text: "Saiba mais".to_string(),
                link: ctx
                    .params
                    .link_value()
                    .map(str::to_string)
                    .unwrap_or_else(|| format!("https://{}", ctx.domain)),
            }),
        }
    }
}

/// Turn the model's raw reply into a result. Never fails.
pub fn normalize_reply(raw: &str, ctx: &ResultContext<'_>) -> RewriteResult {
    let mut result = RewriteResult::defaults(ctx);

    match parse_object(raw) {
        Some(reply) => {
            debug!("Model reply parsed with {} top-level fields", reply.len());
            overlay(&mut result, &reply);
        }
        None => {
            warn!(
                "Model reply is not a JSON object ({} chars), using raw text",
                raw.len()
            );
            result.rewritten_content = raw.to_string();
        }
    }

    finalize(&mut result, ctx.keyword);
    result
}

fn parse_object(raw: &str) -> Option<Map<String, Value>> {
    match serde_json::from_str::<Value>(strip_code_fence(raw)) {
        Ok(Value::Object(map)) => Some(map),
        _ => None,
    }
}

/// Remove a surrounding Markdown code fence, if any.
fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest
        .strip_prefix("json")
        .or_else(|| rest.strip_prefix("JSON"))
        .unwrap_or(rest);
    match rest.trim_end().strip_suffix("```") {
        Some(body) => body.trim(),
        None => trimmed,
    }
}

fn overlay(result: &mut RewriteResult, reply: &Map<String, Value>) {
    if let Some(text) = string_field(reply, "rewrittenContent") {
        result.rewritten_content = text;
    }

    overlay_score(&mut result.helpfulness_score, reply.get("helpfulnessScore"));
    overlay_score(&mut result.quality_score, reply.get("qualityScore"));
    overlay_score(&mut result.eat_score, reply.get("eatScore"));
    overlay_score(&mut result.structure_score, reply.get("structureScore"));
    overlay_score(
        &mut result.ai_optimization_score,
        reply.get("aiOptimizationScore"),
    );

    if let Some(meta) = string_field(reply, "metaDescription") {
        result.meta_description = meta;
    }

    if let Some(image) = reply.get("featuredImage").and_then(Value::as_object) {
        if let Some(title) = string_field(image, "title") {
            result.featured_image.title = title;
        }
        if let Some(alt) = string_field(image, "altText") {
            result.featured_image.alt_text = alt;
        }
        if let Some(keywords) = string_list(image.get("keywords")) {
            result.featured_image.keywords = keywords;
        }
    }

    if let Some(faq) = record_list(reply.get("faq")) {
        result.faq = faq;
    }
    if let Some(studies) = record_list(reply.get("caseStudies")) {
        result.case_studies = studies;
    }

    if let Some(rich) = reply.get("richContent").and_then(Value::as_object) {
        if let Some(graphics) = record_list(rich.get("graphics")) {
            result.rich_content.graphics = graphics;
        }
        if let Some(images) = record_list(rich.get("images")) {
            result.rich_content.images = images;
        }
        if let Some(elements) = record_list(rich.get("visualElements")) {
            result.rich_content.visual_elements = elements;
        }
    }

    if let Some(citations) = record_list(reply.get("citations")) {
        result.citations = citations;
    }
    if let Some(links) = record_list(reply.get("internalLinking")) {
        result.internal_linking = links;
    }

    if let Some(entities) = reply.get("entities").and_then(Value::as_object) {
        let target = &mut result.entities;
        for (key, slot) in [
            ("brands", &mut target.brands),
            ("people", &mut target.people),
            ("locations", &mut target.locations),
            ("concepts", &mut target.concepts),
        ] {
            if let Some(values) = string_list(entities.get(key)) {
                *slot = values;
            }
        }
    }

    if let Some(schema) = reply.get("schemaMarkup").and_then(Value::as_object) {
        let target = &mut result.schema_markup;
        for (key, slot) in [
            ("articleSchema", &mut target.article_schema),
            ("faqSchema", &mut target.faq_schema),
            ("howToSchema", &mut target.how_to_schema),
            ("organizationSchema", &mut target.organization_schema),
            ("personSchema", &mut target.person_schema),
        ] {
            if let Some(flag) = schema.get(key).and_then(Value::as_bool) {
                *slot = flag;
            }
        }
    }

    // Optional sections exist only when the request asked for them.
    if let Some(bio) = result.author_bio.as_mut() {
        let description = match reply.get("authorBio") {
            Some(Value::Object(obj)) => string_field(obj, "description"),
            Some(Value::String(text)) if !text.trim().is_empty() => Some(text.trim().to_string()),
            _ => None,
        };
        if let Some(description) = description {
            bio.description = description;
        }
    }

    if let Some(cta) = result.cta_section.as_mut() {
        if let Some(obj) = reply.get("ctaSection").and_then(Value::as_object) {
            if let Some(title) = string_field(obj, "title") {
                cta.title = title;
            }
            if let Some(description) = string_field(obj, "description") {
                cta.description = description;
            }
            if let Some(button) = string_field(obj, "buttonText") {
                cta.button_text = button;
            }
            if let Some(link) = string_field(obj, "link") {
                cta.link = link;
            }
        }
    }

    if result.author_bio.is_none() && reply.contains_key("authorBio") {
        debug!("Ignoring authorBio for request without author");
    }
    if result.cta_section.is_none() && reply.contains_key("ctaSection") {
        debug!("Ignoring ctaSection for request without company");
    }
}

/// Apply length caps and recompute the trusted metrics.
fn finalize(result: &mut RewriteResult, keyword: &str) {
    if result.meta_description.chars().count() > META_DESCRIPTION_MAX_CHARS {
        result.meta_description = result
            .meta_description
            .chars()
            .take(META_DESCRIPTION_MAX_CHARS)
            .collect();
    }
    result.faq.truncate(MAX_FAQ_ITEMS);
    result.case_studies.truncate(MAX_CASE_STUDIES);

    let metrics = ContentMetrics::measure(&result.rewritten_content, keyword);
    result.word_count = metrics.word_count;
    result.keyword_density = metrics.keyword_density;
    result.seo_score = metrics.seo_score;
}

fn string_field(obj: &Map<String, Value>, key: &str) -> Option<String> {
    obj.get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn overlay_score(slot: &mut u32, value: Option<&Value>) {
    let score = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    if let Some(score) = score.filter(|s| s.is_finite()) {
        *slot = score.round().clamp(0.0, 100.0) as u32;
    }
}

/// Array of records; elements that don't fit the shape are dropped.
fn record_list<T: DeserializeOwned>(value: Option<&Value>) -> Option<Vec<T>> {
    let items = value?.as_array()?;
    Some(
        items
            .iter()
            .filter_map(|item| serde_json::from_value(item.clone()).ok())
            .collect(),
    )
}

fn string_list(value: Option<&Value>) -> Option<Vec<String>> {
    let items = value?.as_array()?;
    Some(
        items
            .iter()
            .filter_map(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
    )
}
