pub mod cpt;
pub mod roi;
pub mod workflow;

pub use cpt::cpt_code;
pub use roi::RoiProjection;
