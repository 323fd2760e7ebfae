//! Collaborators consulted before the model is called.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::error::LookupError;
use crate::result::{CaseStudy, InternalLink};

/// Most case studies a rewrite will carry.
pub const MAX_CASE_STUDIES: usize = 3;

/// TLD appended to a company name to derive its domain.
pub const COMPANY_TLD: &str = ".com.br";

/// Domain used when no company name is known.
pub const PLACEHOLDER_DOMAIN: &str = "seusite.com.br";

/// Finds real-world case studies related to a keyword.
#[async_trait]
pub trait CaseStudyLookup: Send + Sync {
    /// Return up to `limit` case studies for the keyword and content.
    async fn find(
        &self,
        keyword: &str,
        content: &str,
        limit: usize,
    ) -> Result<Vec<CaseStudy>, LookupError>;
}

/// Suggests links to other pages of the publishing site.
pub trait InternalLinkGenerator: Send + Sync {
    fn generate(&self, keyword: &str, content: &str, domain: &str) -> Vec<InternalLink>;
}

/// Derive the site domain from a company name.
///
/// `"Acme Marketing"` becomes `"acmemarketing.com.br"`.
pub fn derive_domain(company_name: Option<&str>) -> String {
    let stripped: String = company_name
        .unwrap_or_default()
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();

    if stripped.is_empty() {
        PLACEHOLDER_DOMAIN.to_string()
    } else {
        format!("{}{}", stripped, COMPANY_TLD)
    }
}

/// Turn a phrase into a URL slug, transliterating non-ASCII letters.
pub fn slugify(text: &str) -> String {
    slug::slugify(text)
}

const STOPWORDS: &[&str] = &[
    "about", "again", "ainda", "antes", "aquela", "aquele", "assim", "being", "cada", "como",
    "could", "depois", "desde", "desta", "deste", "dessa", "desse", "entre", "essa", "esse",
    "esta", "este", "isso", "isto", "mais", "muito", "other", "outra", "outro", "para", "pela",
    "pelo", "pode", "podem", "porque", "quais", "qual", "quando", "sobre", "their", "there",
    "these", "those", "também", "tambem", "todas", "todos", "which", "where", "while", "would",
];

/// Default link generator: the keyword plus the most frequent significant
/// terms of the content, each pointing at `https://<domain>/blog/<slug>`.
#[derive(Debug, Clone)]
pub struct KeywordLinkGenerator {
    max_links: usize,
    min_term_len: usize,
}

impl Default for KeywordLinkGenerator {
    fn default() -> Self {
        Self {
            max_links: 5,
            min_term_len: 5,
        }
    }
}

impl KeywordLinkGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_links(mut self, max_links: usize) -> Self {
        self.max_links = max_links;
        self
    }

    fn link(domain: &str, text: &str) -> Option<InternalLink> {
        let slug = slugify(text);
        if slug.is_empty() {
            return None;
        }
        Some(InternalLink {
            text: text.to_string(),
            url: format!("https://{}/blog/{}", domain, slug),
        })
    }

    fn top_terms(&self, keyword: &str, content: &str) -> Vec<String> {
        let keyword_lower = keyword.to_lowercase();
        let mut counts: HashMap<String, usize> = HashMap::new();
        let mut first_seen: HashMap<String, usize> = HashMap::new();

        for (position, raw) in content.split_whitespace().enumerate() {
            let term: String = raw
                .trim_matches(|c: char| !c.is_alphanumeric())
                .to_lowercase();
            if term.chars().count() < self.min_term_len
                || STOPWORDS.contains(&term.as_str())
                || keyword_lower.split_whitespace().any(|k| k == term)
                || term.chars().all(|c| c.is_numeric())
            {
                continue;
            }
            *counts.entry(term.clone()).or_insert(0) += 1;
            first_seen.entry(term).or_insert(position);
        }

        let mut terms: Vec<(String, usize)> = counts.into_iter().collect();
        // Most frequent first; earliest occurrence breaks ties so output is stable.
        terms.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| first_seen[&a.0].cmp(&first_seen[&b.0])));
        terms.into_iter().map(|(term, _)| term).collect()
    }
}

impl InternalLinkGenerator for KeywordLinkGenerator {
    fn generate(&self, keyword: &str, content: &str, domain: &str) -> Vec<InternalLink> {
        if self.max_links == 0 {
            return Vec::new();
        }

        let mut links = Vec::new();
        if let Some(link) = Self::link(domain, keyword.trim()) {
            links.push(link);
        }

        for term in self.top_terms(keyword, content) {
            if links.len() >= self.max_links {
                break;
            }
            if let Some(link) = Self::link(domain, &term) {
                if links.iter().all(|l| l.url != link.url) {
                    links.push(link);
                }
            }
        }

        links
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_domain() {
        assert_eq!(derive_domain(Some("Acme Marketing")), "acmemarketing.com.br");
        assert_eq!(derive_domain(Some("  ")), PLACEHOLDER_DOMAIN);
        assert_eq!(derive_domain(None), PLACEHOLDER_DOMAIN);
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Marketing de Conteúdo"), "marketing-de-conteudo");
        assert_eq!(slugify("  SEO: guia 2024! "), "seo-guia-2024");
        assert_eq!(slugify("!!!"), "");
    }

    #[test]
    fn test_slugify_transliterates() {
        assert_eq!(slugify("Straße Ørsted"), "strasse-orsted");
        assert_eq!(slugify("Œuvre façade"), "oeuvre-facade");

        let links = KeywordLinkGenerator::new().generate("Ørsted", "", "x.com.br");
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].url, "https://x.com.br/blog/orsted");
    }

    #[test]
    fn test_keyword_link_first() {
        let generator = KeywordLinkGenerator::new();
        let links = generator.generate(
            "marketing digital",
            "Estratégias estratégias estratégias de conteúdo para conteúdo",
            "acme.com.br",
        );

        assert_eq!(links[0].text, "marketing digital");
        assert_eq!(links[0].url, "https://acme.com.br/blog/marketing-digital");
        assert_eq!(links[1].text, "estratégias");
        assert_eq!(links[1].url, "https://acme.com.br/blog/estrategias");
        assert_eq!(links[2].text, "conteúdo");
    }

    #[test]
    fn test_max_links_respected() {
        let generator = KeywordLinkGenerator::new().with_max_links(2);
        let links = generator.generate(
            "seo",
            "alpha1 bravo2 charlie delta1 echoes foxtrot golfing hotels",
            PLACEHOLDER_DOMAIN,
        );
        assert_eq!(links.len(), 2);

        let none = KeywordLinkGenerator::new().with_max_links(0);
        assert!(none.generate("seo", "conteúdo", PLACEHOLDER_DOMAIN).is_empty());
    }

    #[test]
    fn test_stopwords_and_keyword_skipped() {
        let generator = KeywordLinkGenerator::new();
        let links = generator.generate("vendas", "sobre sobre vendas vendas", "x.com.br");
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].text, "vendas");
    }
}
