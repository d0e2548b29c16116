pub mod org_unit;
pub mod team;
pub mod user;

pub use org_unit::*;
pub use team::*;
pub use user::*;
