pub mod advisor;
pub mod auth;
pub mod candidate;
pub mod error;
pub mod establishment;
pub mod lab_director;
pub mod laboratory;
pub mod thesis;
pub mod user;

pub use advisor::AdvisorService;
pub use auth::{AuthService, LoginOutcome, LoginRequest, RegisterRequest};
pub use candidate::CandidateService;
pub use error::ServiceError;
pub use establishment::EstablishmentService;
pub use lab_director::LabDirectorService;
pub use laboratory::LaboratoryService;
pub use thesis::ThesisService;
pub use user::UserService;
