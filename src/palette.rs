//! Palette Suggestion - External Chat-Completion Collaborator
//!
//! Sends a fixed instruction plus a tiny JSON payload to a chat model and
//! expects a single-line JSON object back carrying three hex color fields.
//! Everything that can go wrong maps to one [`PaletteError`]; the caller's
//! colors are never partially updated.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;
use thiserror::Error;

use crate::validation::{ColorTriple, HexColor};

/// Chat model asked for palette suggestions.
pub const DEFAULT_MODEL: &str = "gpt-5";

/// Fixed instruction sent as the system message. Kept in its original
/// (Dutch) wording; the JSON contract it spells out is the interface.
pub const SYSTEM_PROMPT: &str = r##"Jij bent een slimme assistent die altijd een JSON-object als input krijgt in deze vorm:

json
{
  "name": "Michael",
  "flavor": "Appel Citroen",
}
Jouw taak:

Analyseer de waarde van het veld "flavor" (bijvoorbeeld: "Appel Citroen").

Bedenk op basis van de smaak drie bijpassende kleuren in hexwaarden:

"mainColor" (de dominante kleur)

"secondaryColor" (een goed passende tweede kleur)

"textColor" (een passende kleur voor tekst op de mainColor achtergrond)

Lever als antwoord altijd een nieuw JSON-object, met exact dezelfde velden als de input én de drie extra kleurvelden, bijvoorbeeld:
json
{
  "name": "Michael",
  "flavor": "Appel Citroen",
  "mainColor": "#FFFD4A",
  "secondaryColor": "#34EF29",
  "textColor": "#FF0000"
}
Geef geen enkele uitleg of extra tekst, alleen het JSON-object als output. Geef het JSON-object als één enkele regel, zonder extra spaties, enters, of uitleg. Dus bijvoorbeeld: {"name":"Michael","flavor":"Appel Citroen","contactId":"444525470","mainColor":"#FFFD4A","secondaryColor":"#34EF29","textColor":"#FF0000"}"##;

/// First `{...}` object in the raw model output. Greedy with dot matching
/// newline: spans the first `{` through the last `}`.
static JSON_OBJECT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)\{.*\}").unwrap());

#[derive(Debug, Error)]
pub enum PaletteError {
    #[error("API key is missing")]
    MissingApiKey,

    #[error("chat completion request failed: {0}")]
    Http(#[from] ureq::Error),

    #[error("failed to read chat completion response: {0}")]
    Response(#[from] std::io::Error),

    #[error("chat completion response had no message content")]
    EmptyCompletion,

    #[error("no JSON object found in model output")]
    NoJsonObject,

    #[error("malformed JSON in model output: {0}")]
    MalformedJson(#[from] serde_json::Error),

    #[error("model returned an invalid hex color: {0:?}")]
    InvalidColor(String),
}

/// Seam for the outbound chat call; tests substitute canned replies.
pub trait ChatCompletion {
    /// Send one system + user message pair, return the raw reply text.
    fn complete(&self, system: &str, user: &str) -> Result<String, PaletteError>;
}

/// OpenAI chat-completions client.
pub struct OpenAiChat {
    api_key: String,
    model: String,
}

impl OpenAiChat {
    const ENDPOINT: &'static str = "https://api.openai.com/v1/chat/completions";

    pub fn new(api_key: impl Into<String>) -> Result<Self, PaletteError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(PaletteError::MissingApiKey);
        }
        Ok(Self {
            api_key,
            model: DEFAULT_MODEL.to_string(),
        })
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

impl ChatCompletion for OpenAiChat {
    fn complete(&self, system: &str, user: &str) -> Result<String, PaletteError> {
        let body = serde_json::json!({
            "model": self.model,
            "temperature": 1,
            "messages": [
                {"role": "system", "content": system},
                {"role": "user", "content": user},
            ],
        });

        let response: Value = ureq::post(Self::ENDPOINT)
            .set("Authorization", &format!("Bearer {}", self.api_key))
            .send_json(body)?
            .into_json()?;

        let content = response["choices"][0]["message"]["content"]
            .as_str()
            .ok_or(PaletteError::EmptyCompletion)?;
        Ok(content.trim().to_string())
    }
}

/// Ask the model for a palette matching `flavor`.
///
/// Fields missing from the reply fall back to the caller's current colors;
/// any field that is present must be a valid hex color and is normalized to
/// a leading `#`. On error nothing is applied.
pub fn suggest_palette(
    client: &dyn ChatCompletion,
    flavor: &str,
    current: &ColorTriple,
) -> Result<ColorTriple, PaletteError> {
    let flavor = if flavor.trim().is_empty() {
        "Unknown"
    } else {
        flavor
    };
    let user = serde_json::json!({
        "name": "User",
        "flavor": flavor,
    })
    .to_string();

    let raw = client.complete(SYSTEM_PROMPT, &user)?;
    let reply = extract_json_object(&raw)?;

    Ok(ColorTriple {
        main: color_field(&reply, "mainColor", &current.main)?,
        secondary: color_field(&reply, "secondaryColor", &current.secondary)?,
        text: color_field(&reply, "textColor", &current.text)?,
    })
}

/// Pull the first `{...}` object out of the raw reply and parse it.
fn extract_json_object(raw: &str) -> Result<Value, PaletteError> {
    let found = JSON_OBJECT.find(raw).ok_or(PaletteError::NoJsonObject)?;
    Ok(serde_json::from_str(found.as_str())?)
}

fn color_field(reply: &Value, key: &str, fallback: &HexColor) -> Result<HexColor, PaletteError> {
    match reply.get(key) {
        None => Ok(fallback.clone()),
        Some(value) => {
            let text = value
                .as_str()
                .ok_or_else(|| PaletteError::InvalidColor(value.to_string()))?;
            HexColor::parse(text).map_err(|err| PaletteError::InvalidColor(err.0))
        }
    }
}
