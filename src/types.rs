use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::LanesError;
use crate::similarity::SimilarityTable;

/// Term-weighting strategy accepted by the input interpreter endpoint.
///
/// The service recognizes exactly these three schemes; the string boundary
/// lives in [`FromStr`], so anything else is rejected before a request is
/// built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightingScheme {
    Poisson,
    Tfidf,
    NoWeight,
}

impl WeightingScheme {
    /// Wire value for the `ws` query parameter.
    pub fn as_param(&self) -> &'static str {
        match self {
            WeightingScheme::Poisson => "poisson",
            WeightingScheme::Tfidf => "tfidf",
            WeightingScheme::NoWeight => "noweight",
        }
    }
}

impl FromStr for WeightingScheme {
    type Err = LanesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "poisson" => Ok(WeightingScheme::Poisson),
            "tfidf" => Ok(WeightingScheme::Tfidf),
            "noweight" => Ok(WeightingScheme::NoWeight),
            other => Err(LanesError::InvalidArgument(format!(
                "unknown weighting scheme '{}', expected poisson, tfidf or noweight",
                other
            ))),
        }
    }
}

impl fmt::Display for WeightingScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_param())
    }
}

/// Result of a distributional similarity query over a group of terms.
#[derive(Debug, Clone, Serialize)]
pub struct DistributionalSimilarity {
    /// Pairwise scores for every term pair the server compared.
    pub table: SimilarityTable,
    /// Average similarity across the whole term group.
    pub group_sim: f64,
    /// Terms the server flagged as outliers, empty when none were reported.
    pub outliers: Vec<String>,
}

/// One ranked phrase from a content-bearingness query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedPhrase {
    pub rank: u32,
    /// Position of the phrase in the submitted term list.
    pub order: u32,
    pub phrase: String,
    pub poisson_dev: f64,
}

/// A word of the interpreted input with its part-of-speech tag.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaggedWord {
    pub offset: u32,
    pub word: String,
    pub tag: String,
}

/// A phrase extracted from the interpreted input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtractedPhrase {
    pub ngram: String,
    /// Phrase category; the service sends the literal `NULL` when it has none.
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Associated topic with the surrounding delimiters stripped.
    pub topic: Option<String>,
}

/// A keyphrase with its weight under the requested weighting scheme.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Keyphrase {
    pub phrase: String,
    pub weight: f64,
}

/// Sentence-level scores from the interpreter.
#[derive(Debug, Clone, Serialize)]
pub struct SentenceAnalysis {
    pub sentiment: f64,
    pub affirmation: f64,
    pub greeting: f64,
    pub question: f64,
    /// Execution time reported by the service for this section.
    pub exe_time: u64,
}

/// Tokenized and tagged rendering of the input.
#[derive(Debug, Clone, Serialize)]
pub struct SentenceParsing {
    pub words: Vec<TaggedWord>,
    pub exe_time: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct PhraseExtraction {
    pub phrases: Vec<ExtractedPhrase>,
    pub exe_time: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct KeyphraseAnalysis {
    pub keyphrases: Vec<Keyphrase>,
    pub exe_time: u64,
}

/// Aggregate result of an input interpreter query.
///
/// Each section is produced by an independent stage of the remote pipeline
/// and carries its own execution time.
#[derive(Debug, Clone, Serialize)]
pub struct Interpretation {
    /// The input string as echoed back by the service.
    pub input: String,
    pub analysis: SentenceAnalysis,
    pub parsing: SentenceParsing,
    pub extraction: PhraseExtraction,
    pub keyphrases: KeyphraseAnalysis,
}

/// Collection-level counts for a corpus statistics query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorpusMetadata {
    pub total_docs: u64,
    pub docs_containing_term: u64,
    pub occurrences_in_collection: u64,
}

/// Occurrence count of the queried term in one article.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArticleCount {
    pub id: u64,
    pub occurrence: u64,
}

/// Result of a corpus statistics query.
#[derive(Debug, Clone, Serialize)]
pub struct CorpusStatistics {
    pub metadata: CorpusMetadata,
    /// Per-article counts in the order the server returned them.
    pub articles: Vec<ArticleCount>,
}
