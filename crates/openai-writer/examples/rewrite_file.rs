//! Rewrite an article file and print the JSON result.
//!
//! Run with: cargo run -p openai-writer --example rewrite_file -- article.html "palavra-chave"
//!
//! Make sure to set environment variables in .env:
//!   OPENAI_API_KEY - OpenAI API key for authentication
//!
//! Optional:
//!   REWRITE_COMPANY, REWRITE_LINK, REWRITE_AUTHOR, REWRITE_AUTHOR_BIO

use std::env;
use std::sync::Arc;

use openai_writer::{OpenAiWriter, RewriteParams, SeoRewriter};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        eprintln!("Usage: rewrite_file <article-file> <keyword>");
        std::process::exit(2);
    }
    let content = std::fs::read_to_string(&args[1])?;
    let keyword = args[2..].join(" ");

    let mut params = RewriteParams::new();
    params.company_name = env::var("REWRITE_COMPANY").ok();
    params.link = env::var("REWRITE_LINK").ok();
    params.author_name = env::var("REWRITE_AUTHOR").ok();
    params.author_description = env::var("REWRITE_AUTHOR_BIO").ok();

    println!("Initializing OpenAiWriter...");
    let writer = OpenAiWriter::from_env()?;
    println!("Model: {}", writer.config().model);
    println!();

    let rewriter = SeoRewriter::new(Arc::new(writer));
    match rewriter.rewrite(&content, &keyword, &params, None).await {
        Ok(result) => {
            println!("{}", serde_json::to_string_pretty(&result)?);
            Ok(())
        }
        Err(e) => {
            eprintln!("{}", e.user_message());
            Err(e.into())
        }
    }
}
