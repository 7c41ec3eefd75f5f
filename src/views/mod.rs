pub mod client_form;
pub mod dashboard;

pub use client_form::{ClientForm, FormEvent, Intensity, MoodChoice};
pub use dashboard::{Dashboard, DashboardCommand, DashboardEvent};
