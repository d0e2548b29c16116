pub mod calculator_service;
pub mod colleagues_service;
pub mod org_units_service;
pub mod team_planning_service;
pub mod teams_service;
pub mod user_service;

pub use calculator_service::CalculatorService;
pub use colleagues_service::ColleaguesService;
pub use org_units_service::OrgUnitsService;
pub use team_planning_service::{TeamPlanningService, TeamPlanningSettings};
pub use teams_service::TeamsService;
pub use user_service::UserService;
