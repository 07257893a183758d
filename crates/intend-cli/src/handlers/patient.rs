use super::patient_name;
use crate::presentation::Renderer;
use crate::presentation::views::{Notice, PatientListView, PatientSummaryView};
use anyhow::Result;
use chrono::NaiveDate;
use intend_runtime::Workspace;
use intend_types::{Demographics, Patient};

pub struct NewPatient {
    pub name: String,
    pub age: Option<u32>,
    pub gender: Option<String>,
    pub occupation: Option<String>,
    pub started_on: Option<NaiveDate>,
}

pub fn add(workspace: &Workspace, new: NewPatient, renderer: &Renderer) -> Result<()> {
    let name = patient_name(&new.name)?;
    let patient = Patient::new(name).with_demographics(Demographics {
        age: new.age,
        gender: new.gender,
        occupation: new.occupation,
        started_on: new.started_on,
    });

    let dashboard = workspace.dashboard();
    let existed = dashboard.patient(&patient.name)?.is_some();
    dashboard.add_patient(&patient)?;

    let verb = if existed { "Updated" } else { "Registered" };
    renderer.render(&Notice::new(format!("{} patient {}", verb, patient.name)))
}

pub fn list(workspace: &Workspace, renderer: &Renderer) -> Result<()> {
    let patients = workspace.dashboard().patients()?;
    renderer.render(&PatientListView::new(&patients))
}

pub fn show(workspace: &Workspace, name: &str, renderer: &Renderer) -> Result<()> {
    let name = patient_name(name)?;
    let summary = workspace.dashboard().patient_summary(&name)?;
    renderer.render(&PatientSummaryView::new(&summary))
}
