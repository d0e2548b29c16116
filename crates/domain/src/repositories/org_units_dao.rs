use crate::entities::{OrgUnitResponse, OrgUnitsResponse, SubOrgUnitResponse};
use crate::errors::DomainError;
use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// HR backend access for organisational units
#[async_trait]
pub trait OrgUnitsDao: Send + Sync {
    async fn get_org_units_label(
        &self,
        id_uo: &str,
        person_id: &str,
        vsid: &str,
    ) -> Result<OrgUnitsResponse, DomainError>;

    /// Labels keyed by org unit code; unknown codes are left out.
    async fn get_org_units_label_by_code(
        &self,
        codes: &[String],
    ) -> Result<BTreeMap<String, String>, DomainError>;

    async fn get_manager_org_units(
        &self,
        person_id: &str,
        vsid: &str,
    ) -> Result<OrgUnitResponse, DomainError>;

    async fn get_managed_sub_org_units(&self, person_id: &str) -> Result<SubOrgUnitResponse, DomainError>;

    async fn get_org_units(
        &self,
        person_id: &str,
        begin_date: NaiveDate,
        end_date: NaiveDate,
        direct_only: bool,
    ) -> Result<OrgUnitResponse, DomainError>;
}
