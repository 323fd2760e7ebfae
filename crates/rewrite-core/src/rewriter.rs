//! The rewrite operation.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::error::RewriteError;
use crate::generator::{GenerationRequest, TextGenerator};
use crate::lookup::{
    derive_domain, CaseStudyLookup, InternalLinkGenerator, KeywordLinkGenerator, MAX_CASE_STUDIES,
};
use crate::normalize::{normalize_reply, ResultContext};
use crate::params::RewriteParams;
use crate::prompt::{build_instruction, hash_prompt, PromptInput};
use crate::result::{CaseStudy, RewriteResult};

/// Rewrites articles for a target keyword through a [`TextGenerator`].
///
/// The rewriter holds no per-request state; every call is independent.
pub struct SeoRewriter {
    generator: Arc<dyn TextGenerator>,
    links: Box<dyn InternalLinkGenerator>,
}

impl SeoRewriter {
    /// Create a rewriter using the default [`KeywordLinkGenerator`].
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self::with_link_generator(generator, KeywordLinkGenerator::default())
    }

    /// Create a rewriter with a custom internal-link generator.
    pub fn with_link_generator(
        generator: Arc<dyn TextGenerator>,
        links: impl InternalLinkGenerator + 'static,
    ) -> Self {
        Self {
            generator,
            links: Box::new(links),
        }
    }

    /// Name of the underlying generator.
    pub fn generator_name(&self) -> &str {
        self.generator.name()
    }

    /// Rewrite `content` for `keyword`.
    ///
    /// Fails only when no credential is available or the model call fails.
    /// Malformed replies and case-study lookup failures degrade to defaults.
    pub async fn rewrite(
        &self,
        content: &str,
        keyword: &str,
        params: &RewriteParams,
        case_studies: Option<&dyn CaseStudyLookup>,
    ) -> Result<RewriteResult, RewriteError> {
        let credential = params.credential();
        if credential.is_none() && !self.generator.has_credential() {
            return Err(RewriteError::Configuration(
                "OpenAI API key not configured".to_string(),
            ));
        }

        let studies = match case_studies {
            Some(lookup) => fetch_case_studies(lookup, keyword, content).await,
            None => Vec::new(),
        };

        let domain = derive_domain(params.company());
        let internal_links = self.links.generate(keyword, content, &domain);

        let prompt = build_instruction(&PromptInput {
            keyword,
            content,
            params,
            case_studies: &studies,
            internal_links: &internal_links,
        });
        debug!(
            "Rewrite prompt built: {} chars, fingerprint {}",
            prompt.len(),
            hash_prompt(&prompt)
        );

        let request = GenerationRequest::json(prompt).with_api_key(credential.map(str::to_string));
        let raw = self.generator.generate(request).await.map_err(|e| {
            warn!("{} failed: {}", self.generator.name(), e);
            RewriteError::from(e)
        })?;

        let result = normalize_reply(
            &raw,
            &ResultContext {
                keyword,
                original_content: content,
                params,
                case_studies: &studies,
                domain: &domain,
            },
        );

        info!(
            "Rewrote content for \"{}\": {} words, density {}, SEO score {}",
            keyword, result.word_count, result.keyword_density, result.seo_score
        );

        Ok(result)
    }
}

async fn fetch_case_studies(
    lookup: &dyn CaseStudyLookup,
    keyword: &str,
    content: &str,
) -> Vec<CaseStudy> {
    match lookup.find(keyword, content, MAX_CASE_STUDIES).await {
        Ok(mut studies) => {
            studies.truncate(MAX_CASE_STUDIES);
            debug!("Found {} case studies for \"{}\"", studies.len(), keyword);
            studies
        }
        Err(e) => {
            warn!("Continuing without case studies: {}", e);
            Vec::new()
        }
    }
}
