//! Client mood/trigger entry form.
//!
//! The form is plain data; every user action is a [`FormEvent`] fed to
//! [`ClientForm::apply`]. Submitting is only possible once both a mood and a
//! trigger are selected, mirroring the disabled "Save Entry" control.

use crate::backend::{ApiResult, MoodTrackerApi};
use crate::models::{Trigger, DEFAULT_CLIENT_ID};

pub const TRIGGERS_FAILED: &str = "Failed to load triggers";

/// Numeric score stored for a mood button; unknown values count as neutral
pub fn convert_mood_to_number(mood: &str) -> i32 {
    match mood {
        "sad" => 1,
        "neutral" => 5,
        "happy" => 10,
        _ => 5,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoodChoice {
    Sad,
    Neutral,
    Happy,
}

impl MoodChoice {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "sad" => Some(Self::Sad),
            "neutral" => Some(Self::Neutral),
            "happy" => Some(Self::Happy),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sad => "sad",
            Self::Neutral => "neutral",
            Self::Happy => "happy",
        }
    }
}

/// Trigger strength on the 1-10 slider
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Intensity(u8);

impl Intensity {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    pub fn new(value: i32) -> Option<Self> {
        u8::try_from(value)
            .ok()
            .filter(|v| (Self::MIN..=Self::MAX).contains(v))
            .map(Self)
    }

    /// Slider semantics: out-of-range input snaps to the nearest end
    pub fn clamped(value: i32) -> Self {
        Self(value.clamp(i32::from(Self::MIN), i32::from(Self::MAX)) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl Default for Intensity {
    fn default() -> Self {
        Self(5)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Idle,
    MoodSelected,
    TriggerSelected,
    Submitting,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    TriggersLoaded(Vec<Trigger>),
    TriggersFailed,
    SelectMood(MoodChoice),
    /// Empty name is the "Select a trigger" placeholder
    SelectTrigger(String),
    SetIntensity(i32),
    Submit,
    SubmitSucceeded,
    SubmitFailed(String),
}

/// What gets recorded when the form is submitted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub client_id: i64,
    pub mood: i32,
    pub trigger_name: Option<String>,
    pub intensity: Intensity,
}

#[derive(Debug, Clone, Default)]
pub struct ClientForm {
    mood: Option<MoodChoice>,
    selected_trigger: Option<String>,
    intensity: Intensity,
    submitting: bool,
    error: Option<String>,
    triggers: Vec<Trigger>,
}

impl ClientForm {
    pub fn mood(&self) -> Option<MoodChoice> {
        self.mood
    }

    pub fn selected_trigger(&self) -> Option<&str> {
        self.selected_trigger.as_deref()
    }

    pub fn intensity(&self) -> Intensity {
        self.intensity
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn can_submit(&self) -> bool {
        self.mood.is_some() && self.selected_trigger.is_some() && !self.submitting
    }

    pub fn phase(&self) -> FormPhase {
        if self.submitting {
            FormPhase::Submitting
        } else if self.error.is_some() {
            FormPhase::Error
        } else if self.selected_trigger.is_some() {
            FormPhase::TriggerSelected
        } else if self.mood.is_some() {
            FormPhase::MoodSelected
        } else {
            FormPhase::Idle
        }
    }

    /// Apply one event. Returns the submission to perform when the event is
    /// an accepted `Submit`.
    pub fn apply(&mut self, event: FormEvent) -> Option<Submission> {
        match event {
            FormEvent::TriggersLoaded(triggers) => {
                self.triggers = triggers;
            }
            FormEvent::TriggersFailed => {
                self.error = Some(TRIGGERS_FAILED.to_string());
            }
            FormEvent::SelectMood(mood) => {
                self.mood = Some(mood);
            }
            FormEvent::SelectTrigger(name) => {
                // Only names offered by the picker can be selected
                self.selected_trigger = self
                    .triggers
                    .iter()
                    .find(|t| !name.is_empty() && t.name == name)
                    .map(|t| t.name.clone());
            }
            FormEvent::SetIntensity(value) => {
                self.intensity = Intensity::clamped(value);
            }
            FormEvent::Submit => {
                if !self.can_submit() {
                    return None;
                }
                let mood = self.mood?;
                self.submitting = true;
                self.error = None;
                return Some(Submission {
                    client_id: DEFAULT_CLIENT_ID,
                    mood: convert_mood_to_number(mood.as_str()),
                    trigger_name: self.selected_trigger.clone(),
                    intensity: self.intensity,
                });
            }
            FormEvent::SubmitSucceeded => {
                self.submitting = false;
                self.mood = None;
                self.selected_trigger = None;
                self.intensity = Intensity::default();
            }
            FormEvent::SubmitFailed(message) => {
                self.submitting = false;
                self.error = Some(message);
            }
        }
        None
    }
}

/// Record the mood, then the trigger if one was picked. Stops at the first
/// failure; an already recorded mood is not undone.
pub async fn submit(api: &dyn MoodTrackerApi, submission: &Submission) -> ApiResult<()> {
    api.record_mood(submission.client_id, submission.mood).await?;

    if let Some(trigger_name) = &submission.trigger_name {
        api.record_trigger(trigger_name, submission.intensity.value())
            .await?;
    }

    tracing::info!(
        client_id = submission.client_id,
        mood = submission.mood,
        trigger = ?submission.trigger_name,
        "Entry recorded"
    );

    Ok(())
}
