//! # LANES service client
//!
//! Client bindings for a remote natural language analysis web service.
//! Each method on [`LanesClient`] maps onto one servlet endpoint:
//! distributional similarity, content-bearingness, string similarity,
//! input interpretation and corpus statistics.
//!
//! Every call is a single blocking HTTP GET whose XML response is parsed
//! into a typed result. The crate owns no retries, caching or concurrency;
//! clone the client and call from your own threads if you want parallel
//! requests.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use lanes_client::{LanesClient, WeightingScheme};
//!
//! fn main() -> Result<(), lanes_client::LanesError> {
//!     let client = LanesClient::new(lanes_client::DEFAULT_BASE_URL);
//!
//!     let sim = client.distributional_similarity(&["cat", "dog", "fish"])?;
//!     println!("group similarity: {}", sim.group_sim);
//!     println!("cat/dog: {:?}", sim.table.get("cat", "dog"));
//!
//!     let result = client.interpret("is it raining", WeightingScheme::Poisson)?;
//!     println!("question score: {}", result.analysis.question);
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod parse;
pub mod similarity;
pub mod types;

pub use client::LanesClient;
pub use config::LanesConfig;
pub use error::{LanesError, Result};
pub use similarity::SimilarityTable;
pub use types::{
    ArticleCount, CorpusMetadata, CorpusStatistics, DistributionalSimilarity, ExtractedPhrase,
    Interpretation, Keyphrase, KeyphraseAnalysis, PhraseExtraction, RankedPhrase,
    SentenceAnalysis, SentenceParsing, TaggedWord, WeightingScheme,
};

/// Base URL of the public service instance.
pub const DEFAULT_BASE_URL: &str = "http://research.wilsonwong.me:8080";

/// Default user agent string for requests.
pub const DEFAULT_USER_AGENT: &str = concat!("lanes-client/", env!("CARGO_PKG_VERSION"));

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert!(!DEFAULT_BASE_URL.ends_with('/'));
        assert!(DEFAULT_USER_AGENT.contains("lanes-client"));
    }
}
