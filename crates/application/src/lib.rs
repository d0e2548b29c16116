use config::Config;
use domain::{
    CalculatorService, ColleaguesDao, ColleaguesService, OrgUnitsDao, OrgUnitsService,
    TeamPlanningService, TeamPlanningSettings, TeamsDao, TeamsService, UserRepository,
    UserService,
};
use infrastructure::InMemoryUserRepository;
use std::sync::Arc;
use tracing::info;

/// Utility Application - wires configuration, adapters and services
pub struct UtilityApp {
    pub calculator_service: CalculatorService,
    pub user_service: UserService,
    pub team_planning_service: TeamPlanningService,
}

impl UtilityApp {
    pub fn new(config: &Config) -> Self {
        // Infrastructure layer - registry storage
        let repository = InMemoryUserRepository::new(config.user_id_strategy);
        let user_id_strategy = repository.strategy();
        let user_repository: Arc<dyn UserRepository> = Arc::new(repository);

        // Domain services
        let calculator_service = CalculatorService::new();
        let user_service = UserService::new(user_repository);
        let team_planning_service = TeamPlanningService::new(TeamPlanningSettings {
            display_school_holidays: config.display_school_holidays.clone(),
            display_sub_hierarchical_service: config.display_sub_hierarchical_service.clone(),
            display_sub_hierarchical_service_default: config
                .display_sub_hierarchical_service_default
                .clone(),
        });

        info!(%user_id_strategy, "utility services initialized");

        Self {
            calculator_service,
            user_service,
            team_planning_service,
        }
    }
}

/// Team management services over HR data-access objects supplied by the host
pub struct TeamManagement {
    pub teams_service: TeamsService,
    pub colleagues_service: ColleaguesService,
    pub org_units_service: OrgUnitsService,
}

impl TeamManagement {
    pub fn new(
        teams_dao: Arc<dyn TeamsDao>,
        colleagues_dao: Arc<dyn ColleaguesDao>,
        org_units_dao: Arc<dyn OrgUnitsDao>,
    ) -> Self {
        let teams_service = TeamsService::new(teams_dao);
        let colleagues_service = ColleaguesService::new(colleagues_dao);
        let org_units_service = OrgUnitsService::new(org_units_dao);

        info!(
            services = ?[
                teams_service.identification(),
                org_units_service.identification(),
            ],
            "team management services initialized"
        );

        Self {
            teams_service,
            colleagues_service,
            org_units_service,
        }
    }
}
