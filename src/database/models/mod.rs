pub mod advisor;
pub mod candidate;
pub mod establishment;
pub mod lab_director;
pub mod laboratory;
pub mod thesis;
pub mod user;

pub use advisor::{Advisor, AdvisorInput, AdvisorListItem};
pub use candidate::{Candidate, CandidateInput, CandidateListItem};
pub use establishment::{Establishment, EstablishmentInput};
pub use lab_director::{DirectorDetails, LabDirector, LabDirectorInput};
pub use laboratory::{CreatedLaboratory, Laboratory, LaboratoryInput, LaboratoryListItem, NewLaboratory};
pub use thesis::{
    AnrtNumber, CandidateAssignment, JobVacancy, Thesis, ThesisInput, ThesisListItem, TopicValidation,
};
pub use user::{NewUser, User, UserInfo, UserUpdate};
