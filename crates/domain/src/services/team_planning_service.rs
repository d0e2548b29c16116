use std::collections::BTreeMap;

/// Display flags for the team planning widget
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamPlanningSettings {
    pub display_school_holidays: Option<String>,
    pub display_sub_hierarchical_service: Option<String>,
    pub display_sub_hierarchical_service_default: Option<String>,
}

pub struct TeamPlanningService {
    settings: TeamPlanningSettings,
}

impl TeamPlanningService {
    pub fn new(settings: TeamPlanningSettings) -> Self {
        Self { settings }
    }

    /// Configured flags keyed by their widget names; unset flags map to `None`.
    pub fn retrieve_configuration(&self) -> BTreeMap<String, Option<String>> {
        let mut result = BTreeMap::new();
        result.insert(
            "displaySchoolHolidays".to_string(),
            self.settings.display_school_holidays.clone(),
        );
        result.insert(
            "displaySubHierarchicalService".to_string(),
            self.settings.display_sub_hierarchical_service.clone(),
        );
        result.insert(
            "displaySubHierarchicalServiceDefault".to_string(),
            self.settings.display_sub_hierarchical_service_default.clone(),
        );
        result
    }
}
