//! Parsing of the XML response bodies returned by the service.
//!
//! Every lookup is by element name. A missing element or a value that does
//! not convert to its expected type fails the whole call with
//! [`LanesError::MalformedResponse`]; nothing is defaulted or skipped.

use std::str::FromStr;

use roxmltree::{Document, Node};

use crate::error::{LanesError, Result};
use crate::similarity::SimilarityTable;
use crate::types::{
    ArticleCount, CorpusMetadata, CorpusStatistics, DistributionalSimilarity, ExtractedPhrase,
    Interpretation, Keyphrase, KeyphraseAnalysis, PhraseExtraction, RankedPhrase,
    SentenceAnalysis, SentenceParsing, TaggedWord,
};

/// First child element with the given name, or `MalformedResponse`.
fn child<'a, 'input>(parent: Node<'a, 'input>, name: &'static str) -> Result<Node<'a, 'input>> {
    parent
        .children()
        .find(|n| n.has_tag_name(name))
        .ok_or_else(|| LanesError::MalformedResponse(format!("missing <{}> element", name)))
}

/// All child elements with the given name, in document order.
fn elements<'a, 'input: 'a>(
    parent: Node<'a, 'input>,
    name: &'static str,
) -> impl Iterator<Item = Node<'a, 'input>> + 'a {
    parent.children().filter(move |n| n.has_tag_name(name))
}

/// Text of a required child element; the element must exist, its text may
/// be empty.
fn text(parent: Node, name: &'static str) -> Result<String> {
    let node = child(parent, name)?;
    Ok(node.text().unwrap_or("").to_string())
}

/// Text of a required child element, with empty text mapped to `None`.
fn optional_text(parent: Node, name: &'static str) -> Result<Option<String>> {
    let node = child(parent, name)?;
    Ok(node
        .text()
        .filter(|t| !t.is_empty())
        .map(|t| t.to_string()))
}

/// Numeric value of a required child element.
fn num<T: FromStr>(parent: Node, name: &'static str) -> Result<T> {
    let node = child(parent, name)?;
    let raw = node.text().unwrap_or("").trim();
    raw.parse::<T>().map_err(|_| {
        LanesError::MalformedResponse(format!("non-numeric value '{}' in <{}>", raw, name))
    })
}

/// Per-section execution time; the service reports it inside the section's
/// `<error>/<text>` node.
fn exec_time(section: Node) -> Result<u64> {
    let error = child(section, "error")?;
    num(error, "text")
}

/// Strips the single leading and trailing delimiter character from a topic.
///
/// The service wraps topics in `[...]`; the wrapping is assumed to always
/// be present on non-empty topics, so the trim is unconditional. A
/// one-character topic degrades to the empty string.
fn strip_topic_delimiters(topic: &str) -> String {
    let mut chars = topic.chars();
    chars.next();
    chars.next_back();
    chars.as_str().to_string()
}

pub fn distributional_similarity(xml: &str) -> Result<DistributionalSimilarity> {
    let doc = Document::parse(xml)?;
    let root = doc.root_element();

    let comparison = child(root, "pairwisecomparison")?;
    let mut table = SimilarityTable::new();
    for pair in elements(comparison, "pairwisesim") {
        let first = text(pair, "term1")?;
        let second = text(pair, "term2")?;
        let score: f64 = num(pair, "similarity")?;
        table.insert(&first, &second, score);
    }

    let group_sim: f64 = num(root, "groupavesim")?;

    // The outliers element is the one part of the document the server may
    // leave out entirely; either way the caller sees an empty list.
    let outliers = match root
        .children()
        .find(|n| n.has_tag_name("outliers"))
        .and_then(|n| n.text())
    {
        Some(list) if !list.is_empty() => list.split(", ").map(str::to_string).collect(),
        _ => Vec::new(),
    };

    Ok(DistributionalSimilarity {
        table,
        group_sim,
        outliers,
    })
}

pub fn content_bearingness(xml: &str) -> Result<Vec<RankedPhrase>> {
    let doc = Document::parse(xml)?;
    let root = doc.root_element();

    let mut phrases = Vec::new();
    for entry in elements(root, "contentbearingness") {
        phrases.push(RankedPhrase {
            rank: num(entry, "rank")?,
            order: num(entry, "order")?,
            phrase: text(entry, "phrase")?,
            poisson_dev: num(entry, "poissondev")?,
        });
    }
    Ok(phrases)
}

pub fn string_similarity(xml: &str) -> Result<f64> {
    let doc = Document::parse(xml)?;
    num(doc.root_element(), "strsim")
}

pub fn interpretation(xml: &str) -> Result<Interpretation> {
    let doc = Document::parse(xml)?;
    let root = doc.root_element();

    let input = text(root, "input")?;

    let analysis_node = child(root, "sentence-analysis")?;
    let analysis = SentenceAnalysis {
        sentiment: num(analysis_node, "sentiment")?,
        affirmation: num(analysis_node, "affirmation")?,
        greeting: num(analysis_node, "greeting")?,
        question: num(analysis_node, "question")?,
        exe_time: exec_time(analysis_node)?,
    };

    let parsing_node = child(root, "sentence-parsing")?;
    let parsed_input = child(parsing_node, "parsedinput")?;
    let mut words = Vec::new();
    for word in elements(parsed_input, "taggedword") {
        words.push(TaggedWord {
            offset: num(word, "offset")?,
            word: text(word, "word")?,
            tag: text(word, "tag")?,
        });
    }
    let parsing = SentenceParsing {
        words,
        exe_time: exec_time(parsing_node)?,
    };

    let extraction_node = child(root, "phrase-extraction")?;
    let mut extracted = Vec::new();
    for phrase in elements(extraction_node, "phrase") {
        // "NULL" is the server's way of saying the phrase has no category
        let kind = optional_text(phrase, "type")?.filter(|k| k != "NULL");
        let topic = optional_text(phrase, "topic")?
            .map(|t| strip_topic_delimiters(&t));
        extracted.push(ExtractedPhrase {
            ngram: text(phrase, "ngram")?,
            kind,
            topic,
        });
    }
    let extraction = PhraseExtraction {
        phrases: extracted,
        exe_time: exec_time(extraction_node)?,
    };

    let keyphrase_node = child(root, "keyphrase-analysis")?;
    let mut keyphrases = Vec::new();
    for keyphrase in elements(keyphrase_node, "keyphrase") {
        keyphrases.push(Keyphrase {
            phrase: text(keyphrase, "phrase")?,
            weight: num(keyphrase, "weight")?,
        });
    }
    let keyphrases = KeyphraseAnalysis {
        keyphrases,
        exe_time: exec_time(keyphrase_node)?,
    };

    Ok(Interpretation {
        input,
        analysis,
        parsing,
        extraction,
        keyphrases,
    })
}

pub fn corpus_statistics(xml: &str) -> Result<CorpusStatistics> {
    let doc = Document::parse(xml)?;
    let root = doc.root_element();

    let metadata_node = child(root, "metadata")?;
    let metadata = CorpusMetadata {
        total_docs: num(metadata_node, "totaldocincollection")?,
        docs_containing_term: num(metadata_node, "totaldoccontainingterm")?,
        occurrences_in_collection: num(metadata_node, "totaloccurrencesincollection")?,
    };

    let articles_node = child(root, "articles")?;
    let mut articles = Vec::new();
    for article in articles_node.children().filter(|n| n.is_element()) {
        articles.push(ArticleCount {
            id: num(article, "id")?,
            occurrence: num(article, "occurrence")?,
        });
    }

    Ok(CorpusStatistics { metadata, articles })
}
