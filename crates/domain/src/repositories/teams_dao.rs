use crate::entities::{EmployeesResponse, TeamsRequest, TeamsResponse};
use crate::errors::DomainError;
use async_trait::async_trait;
use chrono::NaiveDate;

/// HR backend access for team membership queries
#[async_trait]
pub trait TeamsDao: Send + Sync {
    async fn get_team_members(
        &self,
        person_id: &str,
        requests: &[TeamsRequest],
        vsid: &str,
    ) -> Result<TeamsResponse, DomainError>;

    async fn get_sub_team_members(
        &self,
        person_id: &str,
        requests: &[TeamsRequest],
    ) -> Result<TeamsResponse, DomainError>;

    async fn get_members(&self, fields: &str, vsid: &str) -> Result<EmployeesResponse, DomainError>;

    async fn get_end_of_contract_team_members_by_uo(
        &self,
        field: &str,
        vsid: &str,
    ) -> Result<EmployeesResponse, DomainError>;

    async fn get_all_available_contract_team_members_by_uo(
        &self,
        field: &str,
    ) -> Result<EmployeesResponse, DomainError>;

    async fn get_team_members_in_probation_by_uo(
        &self,
        field: &str,
        vsid: &str,
    ) -> Result<EmployeesResponse, DomainError>;

    async fn get_team_members_in_probation_by_uo_count(
        &self,
        vsid: &str,
        result_limit: u32,
    ) -> Result<u64, DomainError>;

    async fn get_team_members_for_termination(
        &self,
        field: &str,
        vsid: &str,
        my_id: i64,
    ) -> Result<EmployeesResponse, DomainError>;

    async fn get_all_members_for_allowance(
        &self,
        field: &str,
        person_id: &str,
        requests: &[TeamsRequest],
    ) -> Result<TeamsResponse, DomainError>;

    async fn get_all_teams_members(
        &self,
        person_id: &str,
        requests: &[TeamsRequest],
        begin_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<TeamsResponse, DomainError>;
}
