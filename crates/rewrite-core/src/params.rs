//! Per-call rewrite parameters.

use serde::{Deserialize, Serialize};

/// Optional inputs that shape one rewrite.
///
/// Blank strings are treated the same as absent values.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewriteParams {
    /// Link the article should point readers to.
    pub link: Option<String>,
    /// Company publishing the article.
    pub company_name: Option<String>,
    /// Article author.
    pub author_name: Option<String>,
    /// Short author description.
    pub author_description: Option<String>,
    /// Per-call API credential.
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,
}

impl std::fmt::Debug for RewriteParams {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RewriteParams")
            .field("link", &self.link)
            .field("company_name", &self.company_name)
            .field("author_name", &self.author_name)
            .field("author_description", &self.author_description)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl RewriteParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    pub fn company_name(mut self, name: impl Into<String>) -> Self {
        self.company_name = Some(name.into());
        self
    }

    pub fn author_name(mut self, name: impl Into<String>) -> Self {
        self.author_name = Some(name.into());
        self
    }

    pub fn author_description(mut self, description: impl Into<String>) -> Self {
        self.author_description = Some(description.into());
        self
    }

    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn link_value(&self) -> Option<&str> {
        non_blank(self.link.as_deref())
    }

    pub fn company(&self) -> Option<&str> {
        non_blank(self.company_name.as_deref())
    }

    pub fn author(&self) -> Option<&str> {
        non_blank(self.author_name.as_deref())
    }

    pub fn author_bio_text(&self) -> Option<&str> {
        non_blank(self.author_description.as_deref())
    }

    pub fn credential(&self) -> Option<&str> {
        non_blank(self.api_key.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_values_are_absent() {
        let params = RewriteParams::new()
            .company_name("   ")
            .author_name("")
            .link(" https://acme.com.br ")
            .api_key("  ");

        assert!(params.company().is_none());
        assert!(params.author().is_none());
        assert!(params.credential().is_none());
        assert_eq!(params.link_value(), Some("https://acme.com.br"));
    }

    #[test]
    fn test_api_key_never_serialized() {
        let params = RewriteParams::new().api_key("sk-secret").company_name("Acme");
        let json = serde_json::to_string(&params).unwrap();
        assert!(!json.contains("sk-secret"));
        assert!(json.contains("companyName"));
        assert!(!format!("{:?}", params).contains("sk-secret"));
    }
}
