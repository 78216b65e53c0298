//! Hero slideshow content and the remote override format.
//!
//! `GET {backend}/api/hero` returns
//!
//! ```json
//! { "images": [{ "full": "https://..." }], "text": { "heading": "..." } }
//! ```
//!
//! with every field optional. Parsing is lenient and per field: a malformed
//! `images` entry discards only `images`, an unknown or non-string text field
//! is skipped.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

/// One slide of the carousel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    pub full: String,
}

impl Slide {
    pub fn new(full: impl Into<String>) -> Self {
        Self { full: full.into() }
    }
}

/// Built-in slides shown until the remote config arrives
pub fn default_slides() -> Vec<Slide> {
    vec![
        Slide::new("/assets/banner/slider1.webp"),
        Slide::new("/assets/banner/slider2.webp"),
        Slide::new("/assets/banner/slider3.webp"),
    ]
}

/// Text and colors overlaid on the slideshow
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroText {
    pub heading: String,
    pub highlight: String,
    pub subheading: String,
    pub highlight_color: String,
    pub text_color: String,
    pub button_bg: String,
    pub button_text_color: String,
}

impl Default for HeroText {
    fn default() -> Self {
        Self {
            heading: "Autism Support & Therapy".to_string(),
            highlight: "Caring, Evidence-Based".to_string(),
            subheading: "Personalized therapy, parent training, and school support.".to_string(),
            highlight_color: "#F57C00".to_string(),
            text_color: "#FFFFFF".to_string(),
            button_bg: "#FFFFFF".to_string(),
            button_text_color: "#2E7D32".to_string(),
        }
    }
}

impl HeroText {
    /// Override fields present in `patch`, keeping the rest
    pub fn merge(&mut self, patch: HeroTextPatch) {
        let HeroTextPatch {
            heading,
            highlight,
            subheading,
            highlight_color,
            text_color,
            button_bg,
            button_text_color,
        } = patch;

        let fields = [
            (&mut self.heading, heading),
            (&mut self.highlight, highlight),
            (&mut self.subheading, subheading),
            (&mut self.highlight_color, highlight_color),
            (&mut self.text_color, text_color),
            (&mut self.button_bg, button_bg),
            (&mut self.button_text_color, button_text_color),
        ];
        for (field, value) in fields {
            if let Some(value) = value {
                *field = value;
            }
        }
    }
}

/// Subset of [`HeroText`] supplied remotely
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroTextPatch {
    pub heading: Option<String>,
    pub highlight: Option<String>,
    pub subheading: Option<String>,
    pub highlight_color: Option<String>,
    pub text_color: Option<String>,
    pub button_bg: Option<String>,
    pub button_text_color: Option<String>,
}

impl HeroTextPatch {
    fn from_object(object: &serde_json::Map<String, Value>) -> Self {
        let field = |name: &str| object.get(name).and_then(Value::as_str).map(str::to_string);
        Self {
            heading: field("heading"),
            highlight: field("highlight"),
            subheading: field("subheading"),
            highlight_color: field("highlightColor"),
            text_color: field("textColor"),
            button_bg: field("buttonBg"),
            button_text_color: field("buttonTextColor"),
        }
    }
}

/// Remote override for the hero
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeroConfig {
    /// Replacement slides; only ever `Some` with at least one slide
    pub images: Option<Vec<Slide>>,
    pub text: Option<HeroTextPatch>,
}

impl HeroConfig {
    /// Extract the usable parts of a response body
    pub fn from_value(body: &Value) -> Self {
        let images = match body.get("images") {
            Some(Value::Array(entries)) if !entries.is_empty() => {
                let slides: Option<Vec<Slide>> = entries
                    .iter()
                    .map(|entry| entry.get("full").and_then(Value::as_str).map(Slide::new))
                    .collect();
                if slides.is_none() {
                    debug!("Ignoring hero images with a missing or non-string `full`");
                }
                slides
            }
            Some(Value::Array(_)) => {
                debug!("Ignoring empty hero image list");
                None
            }
            Some(Value::Null) | None => None,
            Some(_) => {
                debug!("Ignoring non-array hero images");
                None
            }
        };

        let text = body
            .get("text")
            .and_then(Value::as_object)
            .map(HeroTextPatch::from_object);

        Self { images, text }
    }
}
