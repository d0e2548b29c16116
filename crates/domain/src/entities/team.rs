use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Team selection criteria forwarded to the HR backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamsRequest {
    pub org_unit_id: String,
    pub include_sub_units: bool,
}

impl TeamsRequest {
    pub fn new(org_unit_id: impl Into<String>, include_sub_units: bool) -> Self {
        Self {
            org_unit_id: org_unit_id.into(),
            include_sub_units,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub person_id: String,
    pub first_name: String,
    pub last_name: String,
    pub org_unit_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamsResponse {
    pub members: Vec<TeamMember>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub person_id: String,
    pub display_name: String,
    pub org_unit_id: String,
    pub contract_end: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeesResponse {
    pub employees: Vec<Employee>,
}
