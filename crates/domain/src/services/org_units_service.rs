use crate::entities::{OrgUnitResponse, OrgUnitsResponse, SubOrgUnitResponse};
use crate::errors::DomainError;
use crate::repositories::OrgUnitsDao;
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;

/// Forwards org unit queries to the HR backend
pub struct OrgUnitsService {
    org_units_dao: Arc<dyn OrgUnitsDao>,
}

impl OrgUnitsService {
    pub fn new(org_units_dao: Arc<dyn OrgUnitsDao>) -> Self {
        Self { org_units_dao }
    }

    pub fn identification(&self) -> &'static str {
        "OrgUnitsServiceImpl"
    }

    pub async fn get_org_units_label(
        &self,
        id_uo: &str,
        person_id: &str,
        vsid: &str,
    ) -> Result<OrgUnitsResponse, DomainError> {
        debug!(id_uo, person_id, "delegating get_org_units_label");
        self.org_units_dao.get_org_units_label(id_uo, person_id, vsid).await
    }

    pub async fn get_org_units_label_by_code(
        &self,
        codes: &[String],
    ) -> Result<BTreeMap<String, String>, DomainError> {
        debug!(codes = codes.len(), "delegating get_org_units_label_by_code");
        self.org_units_dao.get_org_units_label_by_code(codes).await
    }

    pub async fn get_manager_org_units(
        &self,
        person_id: &str,
        vsid: &str,
    ) -> Result<OrgUnitResponse, DomainError> {
        debug!(person_id, "delegating get_manager_org_units");
        self.org_units_dao.get_manager_org_units(person_id, vsid).await
    }

    pub async fn get_managed_sub_org_units(&self, person_id: &str) -> Result<SubOrgUnitResponse, DomainError> {
        debug!(person_id, "delegating get_managed_sub_org_units");
        self.org_units_dao.get_managed_sub_org_units(person_id).await
    }

    pub async fn get_org_units(
        &self,
        person_id: &str,
        begin_date: NaiveDate,
        end_date: NaiveDate,
        direct_only: bool,
    ) -> Result<OrgUnitResponse, DomainError> {
        debug!(person_id, %begin_date, %end_date, direct_only, "delegating get_org_units");
        self.org_units_dao
            .get_org_units(person_id, begin_date, end_date, direct_only)
            .await
    }
}
