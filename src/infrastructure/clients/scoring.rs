//! AI scoring client for candidate domains.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;

use crate::domain::entities::{DomainScores, ScoreSet};
use crate::infrastructure::clients::ClientError;

const SCORING_TEMPERATURE: f64 = 0.3;

/// Batch scoring of candidate domains on the four branding criteria.
///
/// One call scores the whole batch; per-domain failures come back as
/// `scores: None` so a single bad entry never blocks the rest.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ScoringClient: Send + Sync {
    /// Scores a batch of domains.
    ///
    /// The result has one entry per input domain, in input order.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure, non-success status, or
    /// an unparseable response body.
    async fn score_batch(&self, domains: &[String]) -> Result<Vec<DomainScores>, ClientError>;
}

/// OpenAI chat-completions implementation of [`ScoringClient`].
pub struct OpenAiScoringClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl OpenAiScoringClient {
    /// Builds a client with a bounded request timeout.
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            model: model.into(),
        })
    }
}

fn batch_prompt(domains: &[String]) -> String {
    let list = domains.join("\n");
    format!(
        "You are a branding expert. Evaluate each of the following candidate domains on four \
         criteria:\n\n\
         Memorability: How easy is it to remember the domain?\n\
         Pronunciation: How easily can it be pronounced?\n\
         Visual Appeal: How attractive is the domain when seen as text?\n\
         Brandability: How well can the domain serve as a strong, unique brand identity?\n\n\
         Domains:\n{list}\n\n\
         Provide your response as a raw JSON array with one object per domain, each with exactly \
         these keys: \"domain\", \"memorability\", \"pronunciation\", \"visual_appeal\", and \
         \"brandability\". Each score is a number from 1 (poor) to 10 (excellent).\n\n\
         IMPORTANT: Return ONLY the JSON array without any markdown formatting, code blocks, \
         explanations, or additional text."
    )
}

/// Strips a surrounding markdown code fence, with or without a language tag.
/// Models add these despite being told not to.
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_suffix("```").unwrap_or(rest);
    // Drop the language tag line (e.g. "json") if present.
    match rest.split_once('\n') {
        Some((first, body)) if !first.trim_start().starts_with(['[', '{']) => body.trim(),
        _ => rest.trim(),
    }
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: String,
}

#[derive(Debug, Deserialize)]
struct ScoredEntry {
    domain: String,
    #[serde(default)]
    memorability: Option<f64>,
    #[serde(default)]
    pronunciation: Option<f64>,
    #[serde(default)]
    visual_appeal: Option<f64>,
    #[serde(default)]
    brandability: Option<f64>,
}

/// Matches model output back to the requested batch, in input order.
///
/// Domains the model skipped, or entries missing any of the four scores,
/// yield `scores: None`.
fn parse_scores(content: &str, domains: &[String]) -> Result<Vec<DomainScores>, ClientError> {
    let entries: Vec<ScoredEntry> = serde_json::from_str(strip_code_fence(content))
        .map_err(|e| ClientError::InvalidResponse(format!("bad scoring JSON: {e}")))?;

    let mut by_domain = std::collections::HashMap::new();
    for entry in entries {
        let scores = ScoreSet::from_parts(
            entry.memorability,
            entry.pronunciation,
            entry.visual_appeal,
            entry.brandability,
        );
        by_domain.insert(entry.domain.trim().to_lowercase(), scores);
    }

    Ok(domains
        .iter()
        .map(|domain| DomainScores {
            domain: domain.clone(),
            scores: by_domain.get(&domain.to_lowercase()).copied().flatten(),
        })
        .collect())
}

#[async_trait]
impl ScoringClient for OpenAiScoringClient {
    async fn score_batch(&self, domains: &[String]) -> Result<Vec<DomainScores>, ClientError> {
        let url = format!("{}/chat/completions", self.base_url);

        let body = json!({
            "model": self.model,
            "messages": [{ "role": "user", "content": batch_prompt(domains) }],
            "temperature": SCORING_TEMPERATURE,
        });

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status(status.as_u16()));
        }

        let chat: ChatResponse = response.json().await?;
        let content = chat
            .choices
            .first()
            .map(|c| c.message.content.as_str())
            .ok_or_else(|| ClientError::InvalidResponse("empty choices".to_string()))?;

        parse_scores(content, domains)
    }
}
