//! Persistence seams, one trait per table.
//!
//! Services hold `Arc<dyn ...Repository>` so handlers can be exercised
//! against in-memory implementations without a database.

pub mod advisor;
pub mod candidate;
pub mod establishment;
pub mod lab_director;
pub mod laboratory;
pub mod thesis;
pub mod user;

pub use advisor::{AdvisorRepository, PgAdvisorRepository};
pub use candidate::{CandidateRepository, PgCandidateRepository};
pub use establishment::{EstablishmentRepository, PgEstablishmentRepository};
pub use lab_director::{LabDirectorRepository, PgLabDirectorRepository};
pub use laboratory::{LaboratoryRepository, PgLaboratoryRepository};
pub use thesis::{PgThesisRepository, ThesisRepository};
pub use user::{PgUserRepository, UserRepository};
