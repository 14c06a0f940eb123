pub mod config;
pub mod error;
pub mod incline;
pub mod reach;
pub mod two_bone;

pub use config::SolverConfig;
pub use error::InputError;
pub use incline::{InclineInput, solve_incline, solve_incline_with};
pub use reach::Reach;
pub use two_bone::{TwoBoneInput, TwoBoneSolution, solve_two_bone, solve_two_bone_with};
