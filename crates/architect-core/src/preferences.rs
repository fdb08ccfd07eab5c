use std::fmt;

use serde::Serialize;

pub const FOCUS_OPTIONS: &[&str] = &[
    "Clarity",
    "Depth",
    "Creativity",
    "Brevity",
    "Immediate action",
];

pub const LANGUAGES: &[&str] = &["English", "Portuguese", "Spanish", "French", "German"];

/// The language that gets the shorthand instruction in the rendered prompt.
pub const DEFAULT_LANGUAGE: &str = "English";

pub const DEFAULT_FOCUS: &[&str] = &["Clarity", "Depth"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewMode {
    #[default]
    Structured,
    Mentor,
    Critical,
}

impl ReviewMode {
    pub const ALL: &[ReviewMode] = &[
        ReviewMode::Structured,
        ReviewMode::Mentor,
        ReviewMode::Critical,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ReviewMode::Structured => "structured",
            ReviewMode::Mentor => "mentor",
            ReviewMode::Critical => "critical",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ReviewMode::Structured => "Structured Summary",
            ReviewMode::Mentor => "Mentoring",
            ReviewMode::Critical => "Critical",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ReviewMode::Structured => "Organises the answer into named sections for easy reading.",
            ReviewMode::Mentor => {
                "Simulates an experienced mentor explaining the choices and next steps."
            }
            ReviewMode::Critical => {
                "Highlights flaws or risks before delivering the final answer."
            }
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "structured" => Some(ReviewMode::Structured),
            "mentor" => Some(ReviewMode::Mentor),
            "critical" => Some(ReviewMode::Critical),
            _ => None,
        }
    }

    /// Like [`ReviewMode::from_str`], but an unrecognised id selects the first mode.
    pub fn from_id(s: &str) -> Self {
        Self::from_str(s).unwrap_or_default()
    }

    pub fn next(&self) -> Self {
        let idx = Self::ALL.iter().position(|m| m == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

impl fmt::Display for ReviewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Auxiliary selections feeding the renderer. Independent of the question flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderPreferences {
    /// Selected focus tags, unique, in the order they were switched on.
    pub focus: Vec<String>,
    pub language: String,
    pub review_mode: ReviewMode,
}

impl Default for RenderPreferences {
    fn default() -> Self {
        Self {
            focus: DEFAULT_FOCUS.iter().map(|s| s.to_string()).collect(),
            language: DEFAULT_LANGUAGE.to_string(),
            review_mode: ReviewMode::default(),
        }
    }
}

impl RenderPreferences {
    /// Switch a focus tag on or off. Returns whether it is now selected.
    pub fn toggle_focus(&mut self, tag: &str) -> bool {
        if let Some(pos) = self.focus.iter().position(|t| t == tag) {
            self.focus.remove(pos);
            false
        } else {
            self.focus.push(tag.to_string());
            true
        }
    }

    pub fn is_focused(&self, tag: &str) -> bool {
        self.focus.iter().any(|t| t == tag)
    }

    /// Advance to the next entry of [`LANGUAGES`]. A custom label wraps to the first one.
    pub fn cycle_language(&mut self) {
        let next = LANGUAGES
            .iter()
            .position(|l| *l == self.language)
            .map(|i| (i + 1) % LANGUAGES.len())
            .unwrap_or(0);
        self.language = LANGUAGES[next].to_string();
    }

    pub fn cycle_review_mode(&mut self) {
        self.review_mode = self.review_mode.next();
    }
}
