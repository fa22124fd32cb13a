//! JSON payloads exchanged with the ritual API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An affectionate word and what it means.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alint {
    pub word: String,
    #[serde(default)]
    pub meaning: String,
}

/// Output of alint generation.
///
/// The generator is asked for a structured reflection but may return free
/// text, which the API passes through as `raw`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GeneratedAlint {
    Reflection {
        title: String,
        origin: String,
        reflection: String,
        interaction: String,
    },
    Raw {
        raw: String,
    },
}

/// Streak counters and delivery schedule for a bond.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct StreakData {
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub last_delivery: Option<String>,
    #[serde(default)]
    pub delivery_time: Option<String>,
    #[serde(default)]
    pub heatmap_data: Vec<HeatmapEntry>,
}

/// Activity count for one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeatmapEntry {
    pub date: NaiveDate,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizData {
    pub questions: Vec<Question>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub question: String,
    pub answers: Vec<String>,
    pub correct_answer: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub icon: String,
}

/// Result of linking a bond code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BondLink {
    pub status: String,
    #[serde(default)]
    pub bond_id: Option<String>,
}

/// Tone the generator is asked to write in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StylePreset {
    Silly,
    #[default]
    Deep,
    Astro,
    Poetic,
    Scientific,
}

impl StylePreset {
    pub const ALL: [StylePreset; 5] = [
        StylePreset::Silly,
        StylePreset::Deep,
        StylePreset::Astro,
        StylePreset::Poetic,
        StylePreset::Scientific,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            StylePreset::Silly => "silly",
            StylePreset::Deep => "deep",
            StylePreset::Astro => "astro",
            StylePreset::Poetic => "poetic",
            StylePreset::Scientific => "scientific",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StylePreset::Silly => "Silly",
            StylePreset::Deep => "Deep",
            StylePreset::Astro => "Astro",
            StylePreset::Poetic => "Poetic",
            StylePreset::Scientific => "Scientific",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            StylePreset::Silly => "🎭",
            StylePreset::Deep => "🌊",
            StylePreset::Astro => "✨",
            StylePreset::Poetic => "📜",
            StylePreset::Scientific => "⚗️",
        }
    }

    /// Look a preset up by its wire id.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.id() == id)
    }
}

/// Everything the lab sends to the alint generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabRequest {
    pub style: StylePreset,
    /// Language code, e.g. "en" or "grc".
    pub language: String,
    pub catalysts: Vec<String>,
    pub vibe: String,
}

impl LabRequest {
    /// Free-text rendering of the request for generators that only read `prompt`.
    pub fn prompt(&self) -> String {
        let mut prompt = format!("Style: {}. Language: {}.", self.style.id(), self.language);
        if !self.catalysts.is_empty() {
            prompt.push_str(&format!(" Catalysts: {}.", self.catalysts.join(", ")));
        }
        let vibe = self.vibe.trim();
        if !vibe.is_empty() {
            prompt.push_str(&format!(" Vibe: {}.", vibe));
        }
        prompt
    }
}

/// An entry in the backend's error log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// ISO-8601 timestamp; also the entry's identity.
    pub timestamp: String,
    #[serde(default)]
    pub level: Option<String>,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub ignored: bool,
}

impl LogEntry {
    pub fn level(&self) -> &str {
        self.level.as_deref().unwrap_or("INFO")
    }
}

/// Backend resource usage.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ResourceFootprint {
    #[serde(default)]
    pub memory_mb: f64,
    #[serde(default)]
    pub estimated_tokens: u64,
    #[serde(default)]
    pub cpu_percent: Option<f64>,
    #[serde(default)]
    pub system: Option<String>,
}

/// The profile form sent with a ritual.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileForm {
    pub display_name: String,
    pub chemistry: String,
    pub art: String,
    pub music: String,
    pub astrology: String,
    pub notes: String,
}

// Envelopes

#[derive(Debug, Deserialize)]
pub(crate) struct HealthResponse {
    pub status: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ReflectedResponse {
    #[serde(default)]
    pub reflected_indices: Vec<usize>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct EchoResponse {
    #[serde(default)]
    pub alints: Vec<Alint>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct BadgesResponse {
    #[serde(default)]
    pub badges: Vec<Badge>,
}

#[derive(Debug, Serialize)]
pub(crate) struct GenerateRequest<'a> {
    pub prompt: String,
    #[serde(flatten)]
    pub lab: &'a LabRequest,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorLogsResponse {
    #[serde(default)]
    pub errors: Vec<LogEntry>,
}

#[derive(Debug, Serialize)]
pub(crate) struct RitualSubmission<'a> {
    #[serde(flatten)]
    pub form: &'a ProfileForm,
    #[serde(rename = "museContext")]
    pub muse_context: Option<&'a serde_json::Value>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RitualResponse {
    #[serde(default)]
    pub chemistry_result: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct BondLinkRequest<'a> {
    pub bond_code: &'a str,
    pub user_id: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct ReflectRequest<'a> {
    pub bond_id: &'a str,
    pub index: usize,
    pub reflected: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct DeliveryTimeRequest<'a> {
    pub bond_id: &'a str,
    pub delivery_time: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct UnlockBadgeRequest<'a> {
    pub bond_id: &'a str,
    pub badge_id: &'a str,
    pub badge_name: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct SaveResultsRequest<'a> {
    pub bond_id: &'a str,
    pub score: usize,
    pub total: usize,
}
