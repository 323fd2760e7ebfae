//! Prompt assembly and response normalization for the SEO content rewriter.
//!
//! This crate provides:
//!
//! - [`SeoRewriter`] - builds the instruction, calls the model and normalizes the reply
//! - [`TextGenerator`] - the trait a language-model backend implements
//! - [`CaseStudyLookup`] / [`InternalLinkGenerator`] - collaborators consulted before the call
//! - [`RewriteResult`] - the always fully populated output
//! - [`RewriteError`] - configuration and upstream failures
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use rewrite_core::{
//!     async_trait, GenerationRequest, GeneratorError, RewriteParams, SeoRewriter, TextGenerator,
//! };
//!
//! struct CannedGenerator;
//!
//! #[async_trait]
//! impl TextGenerator for CannedGenerator {
//!     async fn generate(&self, _request: GenerationRequest) -> Result<String, GeneratorError> {
//!         Ok(r#"{"rewrittenContent": "<p>SEO para lojas</p>"}"#.to_string())
//!     }
//!
//!     fn name(&self) -> &str {
//!         "CannedGenerator"
//!     }
//! }
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), rewrite_core::RewriteError> {
//! let rewriter = SeoRewriter::new(Arc::new(CannedGenerator));
//! let result = rewriter
//!     .rewrite("Texto original.", "seo", &RewriteParams::new(), None)
//!     .await?;
//! assert_eq!(result.word_count, 3);
//! # Ok(())
//! # }
//! ```

mod error;
mod generator;
pub mod lookup;
pub mod metrics;
mod normalize;
mod params;
pub mod prompt;
mod result;
mod rewriter;

pub use error::{LookupError, RewriteError, UpstreamError, UpstreamKind};
pub use generator::{
    GenerationRequest, GeneratorError, TextGenerator, MAX_OUTPUT_TOKENS, TEMPERATURE,
};
pub use lookup::{derive_domain, CaseStudyLookup, InternalLinkGenerator, KeywordLinkGenerator};
pub use metrics::ContentMetrics;
pub use normalize::{normalize_reply, ResultContext};
pub use params::RewriteParams;
pub use prompt::{build_instruction, hash_prompt, PromptInput};
pub use result::{
    AuthorBio, CaseStudy, Citation, CtaSection, Entities, FaqItem, FeaturedImage,
    GraphicSuggestion, ImageSuggestion, InternalLink, RewriteResult, RichContent, SchemaMarkup,
    VisualElement,
};
pub use rewriter::SeoRewriter;

// Re-export async_trait for convenience
pub use async_trait::async_trait;
