use crate::{
    decode_component, format_date, format_employment_status, format_employment_type, format_name,
    initials, EmployeeProfile,
};
use serde::{Deserialize, Serialize};

/// Display-ready projection of an [`EmployeeProfile`].
///
/// Built once per successful fetch; every field is already in the form the
/// profile page shows it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProfileView {
    pub id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    /// Avatar fallback, e.g. `"AM"`.
    pub initials: String,
    pub email: String,
    pub manager_name: String,
    pub job_title: String,
    pub department: String,
    pub employment_type: String,
    pub employment_status: String,
    pub start_date: String,
}

impl From<&EmployeeProfile> for ProfileView {
    fn from(p: &EmployeeProfile) -> Self {
        Self {
            id: p.id,
            first_name: decode_component(&p.first_name),
            last_name: decode_component(&p.last_name),
            full_name: format_name(Some(&p.first_name), Some(&p.last_name)),
            initials: initials(Some(&p.first_name), Some(&p.last_name)),
            email: p.email.clone(),
            manager_name: format_name(Some(&p.manager_first_name), Some(&p.manager_last_name)),
            job_title: p.job_title.clone(),
            department: p.department.clone(),
            employment_type: format_employment_type(Some(&p.employment_type)),
            employment_status: format_employment_status(Some(&p.employment_status)),
            start_date: format_date(Some(&p.start_date)),
        }
    }
}

impl From<EmployeeProfile> for ProfileView {
    fn from(p: EmployeeProfile) -> Self {
        Self::from(&p)
    }
}
