//! Psychiatrist dashboard: patient list, search and per-patient history.

use crate::backend::{ApiResult, MoodTrackerApi};
use crate::models::{
    ChartPoint, MoodHistoryEntry, MoodHistoryView, Patient, PatientDetails, TriggerHistoryEntry,
};

pub const PATIENTS_FAILED: &str = "Failed to load patients. Please try again later.";
pub const HISTORY_FAILED: &str = "Failed to load patient data";

/// Case-insensitive substring match on "First Last". An empty term keeps everyone.
pub fn filter_patients<'a>(patients: &'a [Patient], search_term: &str) -> Vec<&'a Patient> {
    let needle = search_term.to_lowercase();
    patients
        .iter()
        .filter(|p| p.full_name().to_lowercase().contains(&needle))
        .collect()
}

pub fn mood_emoji(mood: i32) -> &'static str {
    match mood {
        1 => "😢",
        5 => "😐",
        10 => "😊",
        _ => "❓",
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PatientHistory {
    pub trigger_history: Vec<TriggerHistoryEntry>,
    pub mood_history: Vec<MoodHistoryEntry>,
    pub chart_data: Vec<ChartPoint>,
}

#[derive(Debug, Clone)]
pub struct SelectedPatient {
    pub patient: Patient,
    pub history: Option<PatientHistory>,
}

impl SelectedPatient {
    pub fn details(&self) -> Option<PatientDetails> {
        let history = self.history.as_ref()?;
        Some(PatientDetails {
            patient: self.patient.clone(),
            full_name: self.patient.full_name(),
            trigger_history: history.trigger_history.clone(),
            mood_history: history
                .mood_history
                .iter()
                .map(|entry| MoodHistoryView {
                    date: entry.date,
                    mood: entry.mood,
                    emoji: mood_emoji(entry.mood).to_string(),
                })
                .collect(),
            chart_data: history.chart_data.clone(),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DashboardEvent {
    PatientsLoaded(Vec<Patient>),
    PatientsFailed,
    SearchChanged(String),
    SelectPatient(i64),
    HistoryLoaded {
        client_id: i64,
        history: PatientHistory,
    },
    HistoryFailed {
        client_id: i64,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub enum DashboardCommand {
    LoadHistory(Patient),
}

#[derive(Debug, Clone, Default)]
pub struct Dashboard {
    patients: Vec<Patient>,
    error: Option<String>,
    search_term: String,
    selected: Option<SelectedPatient>,
}

impl Dashboard {
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn selected(&self) -> Option<&SelectedPatient> {
        self.selected.as_ref()
    }

    pub fn filtered_patients(&self) -> Vec<&Patient> {
        filter_patients(&self.patients, &self.search_term)
    }

    pub fn apply(&mut self, event: DashboardEvent) -> Option<DashboardCommand> {
        match event {
            DashboardEvent::PatientsLoaded(patients) => {
                self.patients = patients;
            }
            DashboardEvent::PatientsFailed => {
                self.error = Some(PATIENTS_FAILED.to_string());
            }
            DashboardEvent::SearchChanged(term) => {
                self.search_term = term;
            }
            DashboardEvent::SelectPatient(client_id) => {
                if self.is_selected(client_id) {
                    return None;
                }
                let patient = self.patients.iter().find(|p| p.client_id == client_id)?.clone();
                self.selected = Some(SelectedPatient {
                    patient: patient.clone(),
                    history: None,
                });
                return Some(DashboardCommand::LoadHistory(patient));
            }
            DashboardEvent::HistoryLoaded { client_id, history } => {
                // Responses for a patient who is no longer selected are dropped
                if let Some(selected) = self.selected.as_mut() {
                    if selected.patient.client_id == client_id {
                        selected.history = Some(history);
                    }
                }
            }
            DashboardEvent::HistoryFailed { client_id } => {
                if self.is_selected(client_id) {
                    self.error = Some(HISTORY_FAILED.to_string());
                }
            }
        }
        None
    }

    fn is_selected(&self, client_id: i64) -> bool {
        self.selected
            .as_ref()
            .is_some_and(|s| s.patient.client_id == client_id)
    }
}

/// Fetch trigger history, mood history and chart series concurrently
pub async fn load_patient_history(
    api: &dyn MoodTrackerApi,
    patient: &Patient,
) -> ApiResult<PatientHistory> {
    let full_name = patient.full_name();

    let (trigger_history, mood_history, chart_data) = tokio::try_join!(
        api.get_trigger_history(&full_name),
        api.get_mood_history(&full_name),
        api.get_chart_data(&full_name),
    )?;

    tracing::debug!(
        full_name,
        triggers = trigger_history.len(),
        moods = mood_history.len(),
        points = chart_data.len(),
        "Patient history loaded"
    );

    Ok(PatientHistory {
        trigger_history,
        mood_history,
        chart_data,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::testing::{patient, Call, FakeApi};
    use chrono::NaiveDate;
    use reqwest::StatusCode;

    fn patients() -> Vec<Patient> {
        vec![
            patient(1, "Jane", "Doe"),
            patient(2, "John", "Smith"),
            patient(3, "Ada", "Lovelace"),
        ]
    }

    fn empty_history() -> PatientHistory {
        PatientHistory {
            trigger_history: vec![],
            mood_history: vec![],
            chart_data: vec![],
        }
    }

    #[test]
    fn test_filter_is_case_insensitive_substring() {
        let all = patients();

        let found: Vec<i64> = filter_patients(&all, "DOE").iter().map(|p| p.client_id).collect();
        assert_eq!(found, vec![1]);

        // Matches across the first/last name boundary
        let found: Vec<i64> = filter_patients(&all, "n s").iter().map(|p| p.client_id).collect();
        assert_eq!(found, vec![2]);

        assert!(filter_patients(&all, "zed").is_empty());
    }

    #[test]
    fn test_empty_search_returns_everyone() {
        let all = patients();
        assert_eq!(filter_patients(&all, "").len(), 3);
    }

    #[test]
    fn test_mood_emoji() {
        assert_eq!(mood_emoji(1), "😢");
        assert_eq!(mood_emoji(5), "😐");
        assert_eq!(mood_emoji(10), "😊");
        assert_eq!(mood_emoji(7), "❓");
    }

    #[test]
    fn test_select_issues_history_load_once() {
        let mut dashboard = Dashboard::default();
        dashboard.apply(DashboardEvent::PatientsLoaded(patients()));

        let command = dashboard.apply(DashboardEvent::SelectPatient(2));
        assert_eq!(
            command,
            Some(DashboardCommand::LoadHistory(patient(2, "John", "Smith")))
        );
        // Re-selecting the same patient does not refetch
        assert_eq!(dashboard.apply(DashboardEvent::SelectPatient(2)), None);
        // Unknown ids are ignored
        assert_eq!(dashboard.apply(DashboardEvent::SelectPatient(99)), None);
        assert_eq!(dashboard.selected().unwrap().patient.client_id, 2);
    }

    #[test]
    fn test_stale_history_is_discarded() {
        let mut dashboard = Dashboard::default();
        dashboard.apply(DashboardEvent::PatientsLoaded(patients()));
        dashboard.apply(DashboardEvent::SelectPatient(1));
        dashboard.apply(DashboardEvent::SelectPatient(3));

        dashboard.apply(DashboardEvent::HistoryLoaded {
            client_id: 1,
            history: empty_history(),
        });
        assert!(dashboard.selected().unwrap().history.is_none());

        dashboard.apply(DashboardEvent::HistoryFailed { client_id: 1 });
        assert_eq!(dashboard.error(), None);

        dashboard.apply(DashboardEvent::HistoryLoaded {
            client_id: 3,
            history: empty_history(),
        });
        assert!(dashboard.selected().unwrap().history.is_some());
    }

    #[test]
    fn test_failures_set_messages() {
        let mut dashboard = Dashboard::default();
        dashboard.apply(DashboardEvent::PatientsFailed);
        assert_eq!(dashboard.error(), Some(PATIENTS_FAILED));
        assert!(dashboard.filtered_patients().is_empty());

        let mut dashboard = Dashboard::default();
        dashboard.apply(DashboardEvent::PatientsLoaded(patients()));
        dashboard.apply(DashboardEvent::SelectPatient(1));
        dashboard.apply(DashboardEvent::HistoryFailed { client_id: 1 });
        assert_eq!(dashboard.error(), Some(HISTORY_FAILED));
    }

    #[test]
    fn test_details_attach_emoji() {
        let date = NaiveDate::from_ymd_opt(2024, 11, 16)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap();
        let selected = SelectedPatient {
            patient: patient(1, "Jane", "Doe"),
            history: Some(PatientHistory {
                mood_history: vec![MoodHistoryEntry { date, mood: 10 }],
                ..empty_history()
            }),
        };

        let details = selected.details().unwrap();

        assert_eq!(details.full_name, "Jane Doe");
        assert_eq!(details.mood_history[0].emoji, "😊");
    }

    #[tokio::test]
    async fn test_load_history_fetches_all_three() {
        let api = FakeApi::default();

        let history = load_patient_history(&api, &patient(1, "Jane", "Doe"))
            .await
            .unwrap();

        assert_eq!(history, empty_history());
        let calls = api.calls();
        assert_eq!(calls.len(), 3);
        assert!(calls.contains(&Call::GetTriggerHistory("Jane Doe".to_string())));
        assert!(calls.contains(&Call::GetMoodHistory("Jane Doe".to_string())));
        assert!(calls.contains(&Call::GetChartData("Jane Doe".to_string())));
    }

    #[tokio::test]
    async fn test_load_history_fails_as_a_whole() {
        let api = FakeApi::failing_reads(StatusCode::NOT_FOUND);

        let err = load_patient_history(&api, &patient(1, "Jane", "Doe"))
            .await
            .unwrap_err();

        assert_eq!(err.status(), Some(StatusCode::NOT_FOUND));
    }
}
