//! Sentiment classifier trait and the Google Cloud Natural Language client

use crate::error::{Error, Result};
use crate::label::SentimentLabel;
use crate::report::AnnotatedComment;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Google Cloud Natural Language API base URL
const GOOGLE_NL_BASE: &str = "https://language.googleapis.com";

/// Anything that can assign a sentiment label to a piece of text.
///
/// The pipeline only depends on this trait, so tests and offline runs
/// can substitute a local implementation for the real API client.
#[async_trait]
pub trait SentimentClassifier: Send + Sync {
    async fn classify(&self, text: &str) -> Result<SentimentLabel>;
}

/// Classify each comment in order, pairing it with its label.
///
/// One call per comment; output order equals input order so results can
/// be joined back to the filtered column.
pub async fn classify_all(
    classifier: &dyn SentimentClassifier,
    comments: &[String],
) -> Result<Vec<AnnotatedComment>> {
    let mut annotated = Vec::with_capacity(comments.len());
    for comment in comments {
        let label = classifier.classify(comment).await?;
        annotated.push(AnnotatedComment {
            comment: comment.clone(),
            label,
        });
    }
    Ok(annotated)
}

/// Client for the `documents:analyzeSentiment` endpoint
pub struct GoogleNlClassifier {
    client: Client,
    base_url: String,
    api_key: String,
    language: String,
}

#[derive(Serialize)]
struct AnalyzeSentimentRequest<'a> {
    document: Document<'a>,
}

#[derive(Serialize)]
struct Document<'a> {
    #[serde(rename = "type")]
    doc_type: &'static str,
    content: &'a str,
    language: &'a str,
}

#[derive(Deserialize)]
struct AnalyzeSentimentResponse {
    #[serde(rename = "documentSentiment")]
    document_sentiment: DocumentSentiment,
}

#[derive(Deserialize)]
struct DocumentSentiment {
    score: f64,
    #[serde(default)]
    #[allow(dead_code)]
    magnitude: f64,
}

impl GoogleNlClassifier {
    /// Create a classifier for Spanish-language comments
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: GOOGLE_NL_BASE.to_string(),
            api_key: api_key.into(),
            language: "es".to_string(),
        }
    }

    /// Override the base URL (for testing)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the document language hint
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    async fn analyze(&self, text: &str) -> Result<f64> {
        let url = format!(
            "{}/v1/documents:analyzeSentiment?key={}",
            self.base_url, self.api_key
        );

        let request = AnalyzeSentimentRequest {
            document: Document {
                doc_type: "PLAIN_TEXT",
                content: text,
                language: &self.language,
            },
        };

        let response = self.client.post(&url).json(&request).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Api(format!("{}: {}", status, body)));
        }

        let parsed: AnalyzeSentimentResponse = response.json().await?;
        debug!("Sentiment score {:.3} for {:?}", parsed.document_sentiment.score, text);
        Ok(parsed.document_sentiment.score)
    }
}

#[async_trait]
impl SentimentClassifier for GoogleNlClassifier {
    async fn classify(&self, text: &str) -> Result<SentimentLabel> {
        let score = self.analyze(text).await?;
        Ok(SentimentLabel::from_score(score))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let classifier = GoogleNlClassifier::new("key");
        assert_eq!(classifier.base_url, GOOGLE_NL_BASE);
        assert_eq!(classifier.language, "es");
    }

    #[test]
    fn test_custom_base_url_and_language() {
        let classifier = GoogleNlClassifier::new("key")
            .with_base_url("http://localhost:9090")
            .with_language("en");
        assert_eq!(classifier.base_url, "http://localhost:9090");
        assert_eq!(classifier.language, "en");
    }

    #[test]
    fn test_response_parsing() {
        let body = r#"{
            "documentSentiment": {"magnitude": 1.2, "score": 0.6},
            "language": "es",
            "sentences": []
        }"#;

        let parsed: AnalyzeSentimentResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.document_sentiment.score, 0.6);
        assert_eq!(
            SentimentLabel::from_score(parsed.document_sentiment.score),
            SentimentLabel::Positivo
        );
    }

    #[test]
    fn test_request_shape() {
        let request = AnalyzeSentimentRequest {
            document: Document {
                doc_type: "PLAIN_TEXT",
                content: "muy buena atencion",
                language: "es",
            },
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["document"]["type"], "PLAIN_TEXT");
        assert_eq!(json["document"]["content"], "muy buena atencion");
        assert_eq!(json["document"]["language"], "es");
    }

    /// Fixed-answer classifier for exercising the boundary without a network.
    struct Scripted(Vec<SentimentLabel>);

    #[async_trait]
    impl SentimentClassifier for Scripted {
        async fn classify(&self, text: &str) -> Result<SentimentLabel> {
            let idx = text.len() % self.0.len();
            Ok(self.0[idx])
        }
    }

    #[tokio::test]
    async fn test_classify_all_preserves_order() {
        let classifier = Scripted(vec![
            SentimentLabel::Positivo,
            SentimentLabel::Neutral,
            SentimentLabel::Negativo,
        ]);

        let comments = vec![
            "abc".to_string(),
            "abcd".to_string(),
            "abcde".to_string(),
        ];

        let annotated = classify_all(&classifier, &comments).await.unwrap();
        assert_eq!(annotated.len(), 3);
        assert_eq!(annotated[0].comment, "abc");
        assert_eq!(annotated[0].label, SentimentLabel::Positivo);
        assert_eq!(annotated[1].comment, "abcd");
        assert_eq!(annotated[1].label, SentimentLabel::Neutral);
        assert_eq!(annotated[2].comment, "abcde");
        assert_eq!(annotated[2].label, SentimentLabel::Negativo);
    }

    #[tokio::test]
    async fn test_classify_all_empty() {
        let classifier = Scripted(vec![SentimentLabel::Neutral]);
        let annotated = classify_all(&classifier, &[]).await.unwrap();
        assert!(annotated.is_empty());
    }
}
