pub mod colleagues_dao;
pub mod org_units_dao;
pub mod teams_dao;
pub mod user_repository;

pub use colleagues_dao::ColleaguesDao;
pub use org_units_dao::OrgUnitsDao;
pub use teams_dao::TeamsDao;
pub use user_repository::UserRepository;
