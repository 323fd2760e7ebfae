//! OpenAI chat-completions backend for the SEO content rewriter.
//!
//! This crate provides a [`TextGenerator`] that sends the rewrite
//! instruction to the OpenAI API as a single user message and asks for a
//! strict JSON object in return.
//!
//! # Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use openai_writer::{OpenAiWriter, RewriteParams, SeoRewriter};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let writer = OpenAiWriter::from_env()?;
//!     let rewriter = SeoRewriter::new(Arc::new(writer));
//!     let result = rewriter
//!         .rewrite("Texto original...", "marketing digital", &RewriteParams::new(), None)
//!         .await?;
//!     println!("{}", result.rewritten_content);
//!     Ok(())
//! }
//! ```

mod api_types;
mod config;
mod writer;

pub use config::{OpenAiWriterConfig, OpenAiWriterConfigBuilder};
pub use writer::OpenAiWriter;

// Re-export rewrite-core types for convenience
pub use rewrite_core::{
    async_trait, GenerationRequest, GeneratorError, RewriteError, RewriteParams, RewriteResult,
    SeoRewriter, TextGenerator,
};
