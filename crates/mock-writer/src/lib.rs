//! Mock implementations of the rewriter's collaborators for testing:
//!
//! - `StaticWriter` - replies with canned text and records every request
//! - `FailingWriter` - fails every request with a fixed error
//! - `StaticCaseStudies` / `FailingCaseStudies` - case-study lookups
//!
//! For production use, see the `openai-writer` crate.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use mock_writer::{RewriteParams, SeoRewriter, StaticWriter};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), mock_writer::RewriteError> {
//!     let writer = Arc::new(StaticWriter::new(r#"{"rewrittenContent": "olá mundo"}"#));
//!     let rewriter = SeoRewriter::new(writer.clone());
//!
//!     let result = rewriter.rewrite("Oi.", "mundo", &RewriteParams::new(), None).await?;
//!     assert_eq!(result.rewritten_content, "olá mundo");
//!     assert_eq!(writer.call_count().await, 1);
//!     Ok(())
//! }
//! ```

mod case_studies;
mod failing;
mod static_writer;

// Re-export rewrite-core types for convenience
pub use rewrite_core::{
    async_trait, CaseStudy, CaseStudyLookup, GenerationRequest, GeneratorError, LookupError,
    RewriteError, RewriteParams, SeoRewriter, TextGenerator,
};

pub use case_studies::{FailingCaseStudies, StaticCaseStudies};
pub use failing::FailingWriter;
pub use static_writer::StaticWriter;
