pub mod assignments;
pub mod classes;
pub mod materials;
pub mod missions;
pub mod reviews;
pub mod stats;
pub mod submissions;
pub mod users;

pub use assignments::AssignmentService;
pub use classes::ClassService;
pub use materials::MaterialService;
pub use missions::MissionService;
pub use reviews::ReviewService;
pub use stats::StatsService;
pub use submissions::SubmissionService;
pub use users::UserService;
