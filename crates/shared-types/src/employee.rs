use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Employee record as returned by `GET /api/employee/self`.
///
/// Field names are camelCase on the wire. Every field tolerates being
/// absent or `null`; text fields then decode to an empty string. Names may
/// arrive percent-encoded and are decoded only at display time (see
/// [`crate::format_name`]).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct EmployeeProfile {
    pub id: Option<i64>,
    #[serde(deserialize_with = "null_as_empty")]
    pub first_name: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub last_name: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub email: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub job_title: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub department: String,
    /// Raw machine code, e.g. `FULL_TIME`.
    #[serde(deserialize_with = "null_as_empty")]
    pub employment_type: String,
    /// Raw machine code, e.g. `ON_LEAVE`.
    #[serde(deserialize_with = "null_as_empty")]
    pub employment_status: String,
    /// Transport text, usually `YYYY-MM-DD`.
    #[serde(deserialize_with = "null_as_empty")]
    pub start_date: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub manager_first_name: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub manager_last_name: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Contract type of an employee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmploymentType {
    FullTime,
    PartTime,
    Intern,
    /// Any code the dashboard does not know; kept verbatim.
    Unknown(String),
}

impl EmploymentType {
    pub fn from_code(code: &str) -> Self {
        match code {
            "FULL_TIME" => EmploymentType::FullTime,
            "PART_TIME" => EmploymentType::PartTime,
            "INTERN" => EmploymentType::Intern,
            other => EmploymentType::Unknown(other.to_string()),
        }
    }

    /// German display label. Unknown codes are shown as-is.
    pub fn label(&self) -> &str {
        match self {
            EmploymentType::FullTime => "Vollzeit",
            EmploymentType::PartTime => "Teilzeit",
            EmploymentType::Intern => "Praktikant",
            EmploymentType::Unknown(raw) => raw,
        }
    }
}

impl fmt::Display for EmploymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Lifecycle status of an employment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmploymentStatus {
    Active,
    Terminated,
    Resigned,
    Retired,
    OnLeave,
    Suspended,
    Unknown(String),
}

impl EmploymentStatus {
    pub fn from_code(code: &str) -> Self {
        match code {
            "ACTIVE" => EmploymentStatus::Active,
            "TERMINATED" => EmploymentStatus::Terminated,
            "RESIGNED" => EmploymentStatus::Resigned,
            "RETIRED" => EmploymentStatus::Retired,
            "ON_LEAVE" => EmploymentStatus::OnLeave,
            "SUSPENDED" => EmploymentStatus::Suspended,
            other => EmploymentStatus::Unknown(other.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            EmploymentStatus::Active => "Aktiv",
            EmploymentStatus::Terminated => "Beendet",
            EmploymentStatus::Resigned => "Gekündigt",
            EmploymentStatus::Retired => "In Rente",
            EmploymentStatus::OnLeave => "Beurlaubt",
            EmploymentStatus::Suspended => "Suspendiert",
            EmploymentStatus::Unknown(raw) => raw,
        }
    }
}

impl fmt::Display for EmploymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
