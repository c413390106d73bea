use std::time::Duration;

use tracing::debug;

use crate::config::LanesConfig;
use crate::error::{LanesError, Result};
use crate::parse;
use crate::types::{
    CorpusStatistics, DistributionalSimilarity, Interpretation, RankedPhrase, WeightingScheme,
};

/// Client for the remote language analysis service.
///
/// One method per servlet endpoint. Every call is a single blocking GET:
/// no retries, no caching, no shared state between calls. The client is
/// cheap to clone and safe to use from multiple threads.
#[derive(Debug, Clone)]
pub struct LanesClient {
    base_url: String,
    client: reqwest::blocking::Client,
}

/// Terms framed as `[term]` segments, in call order.
fn bracketed(terms: &[&str]) -> String {
    let mut out = String::new();
    for term in terms {
        out.push('[');
        out.push_str(&urlencoding::encode(term));
        out.push(']');
    }
    out
}

/// Terms framed as `[i:term]` segments with a 1-based position index.
fn indexed(terms: &[&str]) -> String {
    let mut out = String::new();
    for (i, term) in terms.iter().enumerate() {
        out.push_str(&format!("[{}:{}]", i + 1, urlencoding::encode(term)));
    }
    out
}

impl LanesClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::blocking::Client::new(),
        }
    }

    /// Builds a client from a [`LanesConfig`], applying the configured
    /// user agent and optional request timeout to the underlying transport.
    pub fn with_config(config: &LanesConfig) -> Result<Self> {
        let mut builder =
            reqwest::blocking::Client::builder().user_agent(config.user_agent.clone());
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client: builder.build()?,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Pairwise and group similarity for one or more terms.
    pub fn distributional_similarity(&self, terms: &[&str]) -> Result<DistributionalSimilarity> {
        if terms.is_empty() {
            return Err(LanesError::InvalidArgument(
                "at least one term is required".to_string(),
            ));
        }
        let url = format!(
            "{}/ai/servlet/DistributionalSimilarity?t={}",
            self.base_url,
            bracketed(terms)
        );
        let body = self.get_xml(&url)?;
        parse::distributional_similarity(&body)
    }

    /// Content-bearingness ranking for one or more terms, in server order.
    pub fn content_bearingness(&self, terms: &[&str]) -> Result<Vec<RankedPhrase>> {
        if terms.is_empty() {
            return Err(LanesError::InvalidArgument(
                "at least one term is required".to_string(),
            ));
        }
        let url = format!(
            "{}/ai/servlet/ContentBearingness?t={}",
            self.base_url,
            indexed(terms)
        );
        let body = self.get_xml(&url)?;
        parse::content_bearingness(&body)
    }

    /// Similarity score of two strings.
    pub fn string_similarity(&self, s1: &str, s2: &str) -> Result<f64> {
        let url = format!(
            "{}/ai/servlet/StringSimilarity?s1={}&s2={}",
            self.base_url,
            urlencoding::encode(s1),
            urlencoding::encode(s2)
        );
        let body = self.get_xml(&url)?;
        parse::string_similarity(&body)
    }

    /// Full interpretation of an input query under the given weighting
    /// scheme.
    pub fn interpret(&self, query: &str, scheme: WeightingScheme) -> Result<Interpretation> {
        let url = format!(
            "{}/ai/servlet/InputInterpreter?q={}&ws={}",
            self.base_url,
            urlencoding::encode(query),
            scheme.as_param()
        );
        let body = self.get_xml(&url)?;
        parse::interpretation(&body)
    }

    /// Collection statistics for a single term.
    pub fn corpus_statistics(&self, term: &str) -> Result<CorpusStatistics> {
        let url = format!(
            "{}/ai/servlet/CorpusStatistics?t={}",
            self.base_url,
            urlencoding::encode(term)
        );
        let body = self.get_xml(&url)?;
        parse::corpus_statistics(&body)
    }

    /// One GET, gated on a successful status before the body is read.
    fn get_xml(&self, url: &str) -> Result<String> {
        debug!(target: "client", "GET {}", url);
        let response = self.client.get(url).send()?;
        let status = response.status();
        if !status.is_success() {
            debug!(target: "client", "request failed with {}", status);
            return Err(LanesError::Status {
                status,
                url: url.to_string(),
            });
        }
        Ok(response.text()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bracketed_terms() {
        assert_eq!(bracketed(&["cat", "dog"]), "[cat][dog]");
    }

    #[test]
    fn test_bracketed_terms_are_encoded() {
        assert_eq!(bracketed(&["north wind"]), "[north%20wind]");
    }

    #[test]
    fn test_indexed_terms_are_one_based() {
        assert_eq!(indexed(&["cat", "dog house"]), "[1:cat][2:dog%20house]");
    }

    #[test]
    fn test_empty_terms_fail_before_network() {
        // An unroutable base URL: reaching the transport would error
        // differently than InvalidArgument
        let client = LanesClient::new("http://127.0.0.1:1");
        let err = client.distributional_similarity(&[]).unwrap_err();
        assert!(matches!(err, LanesError::InvalidArgument(_)));
        let err = client.content_bearingness(&[]).unwrap_err();
        assert!(matches!(err, LanesError::InvalidArgument(_)));
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = LanesClient::new("http://example.com:8080/");
        assert_eq!(client.base_url(), "http://example.com:8080");
    }
}
