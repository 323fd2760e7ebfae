//! End-to-end rewrite tests driven by mock collaborators.

use std::sync::Arc;

use mock_writer::{FailingCaseStudies, FailingWriter, StaticCaseStudies, StaticWriter};
use rewrite_core::{
    GeneratorError, InternalLink, InternalLinkGenerator, RewriteError, RewriteParams,
    SchemaMarkup, SeoRewriter, UpstreamKind,
};
use serde_json::json;

fn rich_reply() -> String {
    json!({
        "rewrittenContent": "<h1>SEO local</h1><p>SEO local ajuda lojas de bairro.</p>",
        "helpfulnessScore": 90,
        "metaDescription": "Guia de SEO local",
        "faq": [{"question": "O que é SEO local?", "answer": "Otimização para buscas locais."}],
        "citations": [{"claim": "46% das buscas são locais", "source": "Google", "url": "https://google.com"}],
        "internalLinking": [{"text": "SEO técnico", "url": "https://acme.com.br/blog/seo-tecnico"}],
        "entities": {"brands": ["Google"], "people": [], "locations": ["São Paulo"], "concepts": ["SEO"]},
        "schemaMarkup": {"articleSchema": true, "faqSchema": true}
    })
    .to_string()
}

#[tokio::test]
async fn test_minimal_reply_scenario() {
    let writer = Arc::new(StaticWriter::new(
        r#"{"rewrittenContent":"Teste teste teste.","metaDescription":"desc"}"#,
    ));
    let rewriter = SeoRewriter::new(writer.clone());

    let result = rewriter
        .rewrite("Teste.", "teste", &RewriteParams::new(), None)
        .await
        .unwrap();

    assert_eq!(result.word_count, 3);
    assert_eq!(result.keyword_density, "100.0%");
    assert_eq!(result.seo_score, 40);
    assert_eq!(result.meta_description, "desc");
    assert!(result.author_bio.is_none());
    assert!(result.cta_section.is_none());
    assert_eq!(writer.call_count().await, 1);
}

#[tokio::test]
async fn test_request_settings_and_prompt() {
    let writer = Arc::new(StaticWriter::new(rich_reply()));
    let rewriter = SeoRewriter::new(writer.clone());
    let params = RewriteParams::new()
        .company_name("Acme Digital")
        .author_name("Ana Souza")
        .link("https://acmedigital.com.br/contato");

    let result = rewriter
        .rewrite("Conteúdo original sobre SEO local.", "SEO local", &params, None)
        .await
        .unwrap();

    let request = writer.last_request().await.unwrap();
    assert_eq!(request.max_tokens, 4000);
    assert_eq!(request.temperature, 0.7);
    assert!(request.json_output);
    assert!(request.api_key.is_none());
    assert!(request.prompt.contains("Conteúdo original sobre SEO local."));
    assert!(request.prompt.contains("Acme Digital"));
    // Internal links are derived from the company domain.
    assert!(request
        .prompt
        .contains("https://acmedigital.com.br/blog/seo-local"));

    assert_eq!(result.helpfulness_score, 90);
    assert_eq!(result.citations.len(), 1);
    assert_eq!(result.internal_linking.len(), 1);
    assert_eq!(result.entities.locations, vec!["São Paulo".to_string()]);
    assert!(result.schema_markup.faq_schema);
    assert_eq!(result.author_bio.unwrap().name, "Ana Souza");
    assert_eq!(
        result.cta_section.unwrap().link,
        "https://acmedigital.com.br/contato"
    );
}

#[tokio::test]
async fn test_per_call_credential_forwarded() {
    let writer = Arc::new(StaticWriter::without_credential("{}"));
    let rewriter = SeoRewriter::new(writer.clone());
    let params = RewriteParams::new().api_key("sk-per-call");

    rewriter.rewrite("Texto.", "texto", &params, None).await.unwrap();

    let request = writer.last_request().await.unwrap();
    assert_eq!(request.api_key.as_deref(), Some("sk-per-call"));
}

#[tokio::test]
async fn test_missing_credential_is_configuration_error() {
    let writer = Arc::new(StaticWriter::without_credential("{}"));
    let rewriter = SeoRewriter::new(writer.clone());
    let lookup = StaticCaseStudies::new(StaticCaseStudies::numbered(2));
    let params = RewriteParams::new().api_key("   ");

    let err = rewriter
        .rewrite("Texto.", "texto", &params, Some(&lookup))
        .await
        .unwrap_err();

    assert!(matches!(err, RewriteError::Configuration(_)));
    assert_eq!(writer.call_count().await, 0);
    assert!(lookup.queries().await.is_empty());
}

#[tokio::test]
async fn test_generator_configuration_error() {
    let writer = Arc::new(FailingWriter::new(GeneratorError::Configuration(
        "OPENAI_API_KEY not set".to_string(),
    )));
    let rewriter = SeoRewriter::new(writer);

    let err = rewriter
        .rewrite("Texto.", "texto", &RewriteParams::new(), None)
        .await
        .unwrap_err();
    assert_eq!(
        err,
        RewriteError::Configuration("OPENAI_API_KEY not set".to_string())
    );
}

#[tokio::test]
async fn test_upstream_errors_classified() {
    let cases = [
        (
            FailingWriter::api(401, Some("invalid_api_key"), "Incorrect API key provided"),
            UpstreamKind::CredentialRejected,
        ),
        (
            FailingWriter::api(429, Some("insufficient_quota"), "You exceeded your current quota"),
            UpstreamKind::QuotaExceeded,
        ),
        (
            FailingWriter::api(429, None, "Rate limit reached"),
            UpstreamKind::RateLimited,
        ),
        (
            FailingWriter::new(GeneratorError::Network("connection refused".to_string())),
            UpstreamKind::Unknown,
        ),
    ];

    for (writer, expected) in cases {
        let writer = Arc::new(writer);
        let rewriter = SeoRewriter::new(writer.clone());
        let err = rewriter
            .rewrite("Texto.", "texto", &RewriteParams::new(), None)
            .await
            .unwrap_err();

        match err {
            RewriteError::Upstream(upstream) => assert_eq!(upstream.kind, expected),
            other => panic!("Expected Upstream error, got {:?}", other),
        }
        // Never retried.
        assert_eq!(writer.call_count().await, 1);
    }
}

#[tokio::test]
async fn test_case_studies_capped_and_inlined() {
    let writer = Arc::new(StaticWriter::new("isto não é json"));
    let rewriter = SeoRewriter::new(writer.clone());
    let lookup = StaticCaseStudies::new(StaticCaseStudies::numbered(6)).ignoring_limit();

    let result = rewriter
        .rewrite("Texto.", "json", &RewriteParams::new(), Some(&lookup))
        .await
        .unwrap();

    assert_eq!(lookup.queries().await, vec![("json".to_string(), 3)]);
    assert_eq!(result.case_studies.len(), 3);
    let prompt = writer.last_request().await.unwrap().prompt;
    assert!(prompt.contains("Caso 3"));
    assert!(!prompt.contains("Caso 4"));
}

#[tokio::test]
async fn test_case_study_failure_is_swallowed() {
    let writer = Arc::new(StaticWriter::new(r#"{"rewrittenContent": "texto novo"}"#));
    let rewriter = SeoRewriter::new(writer);
    let lookup = FailingCaseStudies::new("search unavailable");

    let result = rewriter
        .rewrite("Texto.", "texto", &RewriteParams::new(), Some(&lookup))
        .await
        .unwrap();

    assert!(result.case_studies.is_empty());
    assert_eq!(result.rewritten_content, "texto novo");
}

#[tokio::test]
async fn test_unparseable_reply_degrades() {
    let writer = Arc::new(StaticWriter::new("Resposta livre sobre vendas online."));
    let rewriter = SeoRewriter::new(writer);
    let params = RewriteParams::new().author_name("Ana").company_name("Acme");

    let result = rewriter
        .rewrite("Texto.", "vendas", &params, None)
        .await
        .unwrap();

    assert_eq!(result.rewritten_content, "Resposta livre sobre vendas online.");
    assert_eq!(result.word_count, 5);
    assert_eq!(result.keyword_density, "20.0%");
    assert_eq!(result.seo_score, 20);
    assert!(result.citations.is_empty());
    assert!(result.internal_linking.is_empty());
    assert!(result.rich_content.graphics.is_empty());
    assert!(result.rich_content.images.is_empty());
    assert!(result.rich_content.visual_elements.is_empty());
    assert_eq!(result.schema_markup, SchemaMarkup::default());
    assert!(result.author_bio.is_some());
    assert_eq!(
        result.cta_section.unwrap().link,
        "https://acme.com.br"
    );
}

#[tokio::test]
async fn test_seo_score_stays_in_range() {
    let long_text = "seo ".repeat(400);
    let reply = json!({ "rewrittenContent": long_text, "seoScore": 0 }).to_string();
    let rewriter = SeoRewriter::new(Arc::new(StaticWriter::new(reply)));

    let result = rewriter
        .rewrite("Texto.", "seo", &RewriteParams::new(), None)
        .await
        .unwrap();

    assert_eq!(result.word_count, 400);
    assert_eq!(result.seo_score, 100);
    assert_eq!(result.keyword_density, "100.0%");
}

struct FixedLinks;

impl InternalLinkGenerator for FixedLinks {
    fn generate(&self, keyword: &str, _content: &str, domain: &str) -> Vec<InternalLink> {
        vec![InternalLink {
            text: keyword.to_string(),
            url: format!("https://{}/fixo", domain),
        }]
    }
}

#[tokio::test]
async fn test_custom_link_generator() {
    let writer = Arc::new(StaticWriter::new("{}"));
    let rewriter = SeoRewriter::with_link_generator(writer.clone(), FixedLinks);

    rewriter
        .rewrite("Texto.", "seo", &RewriteParams::new(), None)
        .await
        .unwrap();

    let prompt = writer.last_request().await.unwrap().prompt;
    assert!(prompt.contains("https://seusite.com.br/fixo"));
    assert_eq!(rewriter.generator_name(), "StaticWriter");
}
