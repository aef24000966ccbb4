//! Script generation against an LM Studio compatible endpoint.
//!
//! Retrieval matches become the example block of a strict system prompt;
//! the user request rides alongside as the user message. The endpoint
//! speaks the OpenAI chat-completions shape. Generated code gets a static
//! once-over ([`validate_script`]) so callers can surface obvious
//! guideline violations without parsing JavaScript.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::{FaceplateConfig, GenerationConfig};
use crate::corpus::EmbeddingCorpus;
use crate::retrieval::context::build_context;
use crate::retrieval::{find_similar, RetrievalOptions, SimilarityMatch};

// ── System prompt ─────────────────────────────────────────────────────────────

const SYSTEM_PROMPT: &str = r#"You are a Siemens WinCC Unified JavaScript expert. Generate ONLY valid WinCC JavaScript code.

CRITICAL REQUIREMENTS:
1. Use Tags(tagName).Read() or Tags(tagName).Write(value) for tag operations
2. Use HMIRuntime.Trace() for all logging (NEVER console.log, console.warn, etc.)
3. Always include try-catch blocks for error handling
4. NO web APIs (no console, document, window, alert, etc.)
5. NO TIA Portal references (no tia.tags)
6. Use proper WinCC syntax exactly as shown in examples

{context}

Generate only the JavaScript function code. No explanations, no markdown, just the code."#;

/// Insert the rendered example block into the system prompt.
pub fn render_system_prompt(context: &str) -> String {
    SYSTEM_PROMPT.replace("{context}", context)
}

// ── Wire types ────────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: AssistantMessage,
}

#[derive(Deserialize)]
struct AssistantMessage {
    content: String,
}

#[derive(Deserialize)]
struct ModelsResponse {
    data: Vec<ModelEntry>,
}

#[derive(Deserialize)]
struct ModelEntry {
    id: String,
}

// ── Client ────────────────────────────────────────────────────────────────────

/// Thin client for the LM Studio local server.
pub struct LmStudioClient {
    client: reqwest::Client,
    base_url: String,
    model: String,
    max_tokens: u32,
    temperature: f32,
}

impl LmStudioClient {
    pub fn new(config: &GenerationConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: config.base_url(),
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        })
    }

    /// POST a system + user exchange and return the assistant text.
    pub async fn complete(&self, system: &str, user: &str) -> Result<String> {
        let request = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        };

        let url = format!("{}/v1/chat/completions", self.base_url);
        let response = self.client.post(&url).json(&request).send().await.with_context(
            || format!("request to {url} failed; is the LM Studio server running?"),
        )?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("chat completion failed with HTTP {status}: {body}");
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .context("failed to decode chat completion response")?;
        let choice = parsed
            .choices
            .into_iter()
            .next()
            .context("chat completion response contained no choices")?;
        Ok(choice.message.content)
    }

    /// List model ids via `GET /v1/models`. Uses a short timeout — this is
    /// the `doctor` probe, not a generation call.
    pub async fn models(&self) -> Result<Vec<String>> {
        let url = format!("{}/v1/models", self.base_url);
        let response = self
            .client
            .get(&url)
            .timeout(std::time::Duration::from_secs(5))
            .send()
            .await
            .with_context(|| format!("request to {url} failed"))?;

        anyhow::ensure!(
            response.status().is_success(),
            "models listing failed with HTTP {}",
            response.status()
        );

        let parsed: ModelsResponse = response
            .json()
            .await
            .context("failed to decode models response")?;
        Ok(parsed.data.into_iter().map(|m| m.id).collect())
    }
}

// ── Validation ────────────────────────────────────────────────────────────────

/// Static checks over a generated script, one per house rule.
#[derive(Debug, Clone, Serialize)]
pub struct ScriptValidation {
    pub has_hmi_trace: bool,
    pub has_try_catch: bool,
    pub has_tags_function: bool,
    pub no_web_apis: bool,
    pub has_error_handling: bool,
    pub has_comments: bool,
}

impl ScriptValidation {
    /// Short labels for every failed check.
    pub fn issues(&self) -> Vec<&'static str> {
        let mut issues = Vec::new();
        if !self.has_hmi_trace {
            issues.push("no HMIRuntime.Trace logging");
        }
        if !self.has_try_catch {
            issues.push("no try/catch block");
        }
        if !self.has_tags_function {
            issues.push("no Tags() access");
        }
        if !self.no_web_apis {
            issues.push("uses web APIs");
        }
        if !self.has_error_handling {
            issues.push("no error handling");
        }
        if !self.has_comments {
            issues.push("no comments");
        }
        issues
    }

    pub fn is_clean(&self) -> bool {
        self.issues().is_empty()
    }
}

/// Check a generated script against the WinCC coding rules. Plain substring
/// probes, same spirit as the prompt they enforce.
pub fn validate_script(code: &str) -> ScriptValidation {
    ScriptValidation {
        has_hmi_trace: code.contains("HMIRuntime.Trace"),
        has_try_catch: code.contains("try") && code.contains("catch"),
        has_tags_function: code.contains("Tags("),
        no_web_apis: !code.contains("console.log")
            && !code.contains("document.")
            && !code.contains("window."),
        has_error_handling: code.contains("error") || code.contains("Error"),
        has_comments: code.contains("//") || code.contains("/*"),
    }
}

// ── Pipeline ──────────────────────────────────────────────────────────────────

/// Outcome of one generation request.
#[derive(Debug)]
pub struct GeneratedScript {
    pub code: String,
    pub validation: ScriptValidation,
    pub matches: Vec<SimilarityMatch>,
    pub context: String,
}

/// Full pipeline: retrieve examples, build the prompt, call the endpoint,
/// validate the result.
///
/// Zero retrieval matches is not an error: the prompt simply carries no
/// examples, and the empty `matches` list records the fallback.
pub async fn generate_script(
    prompt: &str,
    corpus: &EmbeddingCorpus,
    config: &FaceplateConfig,
) -> Result<GeneratedScript> {
    let options = RetrievalOptions::from(&config.retrieval);
    let matches = find_similar(prompt, corpus, &options);
    if matches.is_empty() {
        warn!("no templates above the similarity floor; generating from base instructions");
    }

    let context = build_context(&matches, config.retrieval.max_context_chars);
    let system = render_system_prompt(&context);

    let client = LmStudioClient::new(&config.generation)?;
    let code = client.complete(&system, prompt).await?;
    let validation = validate_script(&code);

    info!(
        matches = matches.len(),
        issues = validation.issues().len(),
        "script generated"
    );

    Ok(GeneratedScript {
        code,
        validation,
        matches,
        context,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLEAN_SCRIPT: &str = r#"// Read motor speed and log it
function readMotorSpeed() {
    try {
        var speed = Tags("Motor1_Speed").Read();
        HMIRuntime.Trace("Motor speed: " + speed);
        return speed;
    } catch (error) {
        HMIRuntime.Trace("Error reading motor speed: " + error.message);
        return null;
    }
}"#;

    #[test]
    fn test_render_system_prompt_embeds_context() {
        let system = render_system_prompt("EXAMPLES GO HERE");
        assert!(system.contains("EXAMPLES GO HERE"));
        assert!(!system.contains("{context}"));
        assert!(system.starts_with("You are a Siemens WinCC Unified JavaScript expert."));
    }

    #[test]
    fn test_validate_accepts_clean_script() {
        let validation = validate_script(CLEAN_SCRIPT);
        assert!(validation.is_clean(), "issues: {:?}", validation.issues());
    }

    #[test]
    fn test_validate_flags_web_api_use() {
        let code = "try { console.log('x'); } catch (error) { } // note";
        let validation = validate_script(code);
        assert!(!validation.no_web_apis);
        assert!(validation.issues().contains(&"uses web APIs"));
    }

    #[test]
    fn test_validate_requires_both_try_and_catch() {
        let validation = validate_script("try { Tags(\"a\").Read(); }");
        assert!(!validation.has_try_catch);
    }

    #[test]
    fn test_validate_flags_missing_everything() {
        let validation = validate_script("var x = 1;");
        assert_eq!(validation.issues().len(), 6);
    }

    #[test]
    fn test_chat_request_serializes_expected_shape() {
        let request = ChatRequest {
            model: "google/gemma-3-4b",
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: "sys",
                },
                ChatMessage {
                    role: "user",
                    content: "usr",
                },
            ],
            max_tokens: 500,
            temperature: 0.1,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["model"], "google/gemma-3-4b");
        assert_eq!(value["messages"][0]["role"], "system");
        assert_eq!(value["messages"][1]["content"], "usr");
        assert_eq!(value["max_tokens"], 500);
    }

    #[test]
    fn test_models_response_parses() {
        let body = r#"{"data":[{"id":"google/gemma-3-4b"},{"id":"qwen2.5-coder"}]}"#;
        let parsed: ModelsResponse = serde_json::from_str(body).unwrap();
        let ids: Vec<String> = parsed.data.into_iter().map(|m| m.id).collect();
        assert_eq!(ids, vec!["google/gemma-3-4b", "qwen2.5-coder"]);
    }

    #[tokio::test]
    #[ignore] // Requires a running LM Studio server — run with: cargo test -- --ignored
    async fn test_generate_against_local_server() {
        let docs = vec![crate::corpus::TemplateDocument {
            id: "read-tag".into(),
            title: "Read Tag Value".into(),
            category: "Tag Operations".into(),
            description: "Read a tag and trace it".into(),
            code: CLEAN_SCRIPT.into(),
        }];
        let corpus = crate::corpus::embed_corpus(&docs, "simple-tfidf-wincc").unwrap();
        let config = FaceplateConfig::default();

        let result = generate_script("read a motor speed tag", &corpus, &config)
            .await
            .unwrap();
        assert!(!result.code.is_empty());
    }
}
