// src/models.rs
use serde::{Serialize, Deserialize};
use utoipa::ToSchema;

/// Outcome of scoring a single password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StrengthResult {
    /// Raw score, one point per satisfied heuristic (0-5)
    pub score: u8,
    /// Improvement hints, in the order the heuristics were checked
    pub suggestions: Vec<String>,
}

impl StrengthResult {
    // Score as shown to the user, never below 1
    pub fn display_score(&self) -> u8 {
        self.score.clamp(1, 5)
    }

    pub fn level(&self) -> StrengthLevel {
        StrengthLevel::from_score(self.display_score())
    }

    /// Fraction of the progress bar to fill (0.2 ..= 1.0).
    pub fn progress(&self) -> f32 {
        f32::from(self.display_score()) / 5.0
    }

    pub fn is_max(&self) -> bool {
        self.display_score() == 5
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum StrengthLevel {
    VeryWeak,
    Weak,
    Moderate,
    Strong,
    VeryStrong,
}

impl StrengthLevel {
    pub fn from_score(score: u8) -> Self {
        match score {
            0 | 1 => StrengthLevel::VeryWeak,
            2 => StrengthLevel::Weak,
            3 => StrengthLevel::Moderate,
            4 => StrengthLevel::Strong,
            _ => StrengthLevel::VeryStrong,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StrengthLevel::VeryWeak => "Very Weak ❌",
            StrengthLevel::Weak => "Weak ⚠️",
            StrengthLevel::Moderate => "Moderate ℹ️",
            StrengthLevel::Strong => "Strong ✅",
            StrengthLevel::VeryStrong => "Very Strong 💪",
        }
    }
}

impl std::fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

// Password generation options
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PasswordGenerationOptions {
    pub length: usize,
    pub include_numbers: bool,
    pub include_specials: bool,
}

impl Default for PasswordGenerationOptions {
    fn default() -> Self {
        Self {
            length: 12,
            include_numbers: false,
            include_specials: false,
        }
    }
}

/// The three pages of the web UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Check,
    Generate,
    Saved,
}

impl View {
    pub const ALL: [View; 3] = [View::Check, View::Generate, View::Saved];

    pub fn from_slug(slug: &str) -> Option<Self> {
        View::ALL.into_iter().find(|v| v.slug() == slug)
    }

    pub fn slug(&self) -> &'static str {
        match self {
            View::Check => "check",
            View::Generate => "generate",
            View::Saved => "saved",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            View::Check => "Check Password Strength",
            View::Generate => "Generate a Strong Password",
            View::Saved => "Saved Passwords",
        }
    }
}
