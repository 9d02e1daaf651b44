//! Static dispatch tables mapping model aliases to Bedrock backends
//!
//! Each supported alias carries an immutable record of its backend model
//! identifier, a request-body builder, and a response extractor — a
//! strategy table rather than a provider class hierarchy. The tables are
//! process-wide constants; nothing mutates them after startup.

use serde_json::{Value, json};

/// Short alias selecting one of the supported Bedrock text models
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelAlias {
    /// Amazon Titan Text Express
    AmazonTitan,
    /// Anthropic Claude v2
    Anthropic,
    /// AI21 Labs Jurassic-2 Mid
    Ai21,
    /// Cohere Command
    Cohere,
}

impl ModelAlias {
    /// Parse a wire alias; `None` for anything outside the closed set
    pub fn parse(alias: &str) -> Option<Self> {
        match alias {
            "amazon-titan" => Some(Self::AmazonTitan),
            "anthropic" => Some(Self::Anthropic),
            "ai21" => Some(Self::Ai21),
            "cohere" => Some(Self::Cohere),
            _ => None,
        }
    }

    /// Wire name of this alias
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AmazonTitan => "amazon-titan",
            Self::Anthropic => "anthropic",
            Self::Ai21 => "ai21",
            Self::Cohere => "cohere",
        }
    }

    /// Dispatch record for this alias
    pub const fn spec(self) -> &'static ProviderSpec {
        match self {
            Self::AmazonTitan => &AMAZON_TITAN,
            Self::Anthropic => &ANTHROPIC,
            Self::Ai21 => &AI21,
            Self::Cohere => &COHERE,
        }
    }
}

/// Which invocation table a lookup goes through
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvocationKind {
    Completion,
    StreamingCompletion,
}

/// Immutable dispatch record for one backend model
pub struct ProviderSpec {
    /// Bedrock model identifier
    pub model_id: &'static str,
    /// Builds the backend's request body from the user message
    pub build_body: fn(&str) -> Value,
    /// Extracts the output text from the decoded response body
    pub extract: fn(&Value) -> Option<String>,
}

/// Dispatch record for the fixed embedding backend
pub struct EmbeddingSpec {
    pub model_id: &'static str,
    pub build_body: fn(&str) -> Value,
    pub extract: fn(&Value) -> Option<Vec<f64>>,
}

/// Aliases accepted by the buffered completion endpoint
pub const COMPLETION_ALIASES: &[ModelAlias] = &[
    ModelAlias::AmazonTitan,
    ModelAlias::Anthropic,
    ModelAlias::Ai21,
    ModelAlias::Cohere,
];

/// Aliases accepted by the streaming completion endpoint
///
/// Must stay a subset of [`COMPLETION_ALIASES`]; AI21 has no streaming
/// invocation support.
pub const STREAMING_ALIASES: &[ModelAlias] = &[ModelAlias::AmazonTitan, ModelAlias::Anthropic, ModelAlias::Cohere];

const AMAZON_TITAN: ProviderSpec = ProviderSpec {
    model_id: "amazon.titan-text-express-v1",
    build_body: titan_body,
    extract: titan_extract,
};

const ANTHROPIC: ProviderSpec = ProviderSpec {
    model_id: "anthropic.claude-v2",
    build_body: anthropic_body,
    extract: anthropic_extract,
};

const AI21: ProviderSpec = ProviderSpec {
    model_id: "ai21.j2-mid-v1",
    build_body: prompt_body,
    extract: ai21_extract,
};

const COHERE: ProviderSpec = ProviderSpec {
    model_id: "cohere.command-text-v14",
    build_body: prompt_body,
    extract: cohere_extract,
};

/// The single embedding backend; the request alias is ignored
pub const EMBED_TEXT: EmbeddingSpec = EmbeddingSpec {
    model_id: "amazon.titan-embed-text-v1",
    build_body: titan_body,
    extract: embedding_extract,
};

/// An alias resolved against one of the dispatch tables
pub struct ResolvedModel {
    pub alias: ModelAlias,
    pub spec: &'static ProviderSpec,
}

/// Resolve a wire alias against the table for `kind`
///
/// This is the sole validation performed before invocation; the user
/// message itself is passed through unchecked.
pub fn lookup(alias: &str, kind: InvocationKind) -> Option<ResolvedModel> {
    let alias = ModelAlias::parse(alias)?;

    let table = match kind {
        InvocationKind::Completion => COMPLETION_ALIASES,
        InvocationKind::StreamingCompletion => STREAMING_ALIASES,
    };

    if !table.contains(&alias) {
        return None;
    }

    Some(ResolvedModel {
        alias,
        spec: alias.spec(),
    })
}

fn titan_body(message: &str) -> Value {
    json!({ "inputText": message })
}

fn anthropic_body(message: &str) -> Value {
    json!({
        "prompt": format!("\n\nHuman: {message}\n\nAssistant:"),
        "max_tokens_to_sample": 200,
    })
}

fn prompt_body(message: &str) -> Value {
    json!({ "prompt": message })
}

fn titan_extract(body: &Value) -> Option<String> {
    body.pointer("/results/0/outputText")?.as_str().map(str::to_owned)
}

fn anthropic_extract(body: &Value) -> Option<String> {
    body.get("completion")?.as_str().map(str::to_owned)
}

fn ai21_extract(body: &Value) -> Option<String> {
    body.pointer("/completions/0/data/text")?.as_str().map(str::to_owned)
}

fn cohere_extract(body: &Value) -> Option<String> {
    body.pointer("/generations/0/text")?.as_str().map(str::to_owned)
}

fn embedding_extract(body: &Value) -> Option<Vec<f64>> {
    body.get("embedding")?.as_array()?.iter().map(Value::as_f64).collect()
}
