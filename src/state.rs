use std::sync::Arc;

use sqlx::PgPool;

use crate::database::repository::{
    AdvisorRepository, CandidateRepository, EstablishmentRepository, LabDirectorRepository, LaboratoryRepository,
    PgAdvisorRepository, PgCandidateRepository, PgEstablishmentRepository, PgLabDirectorRepository,
    PgLaboratoryRepository, PgThesisRepository, PgUserRepository, ThesisRepository, UserRepository,
};
use crate::services::{
    AdvisorService, AuthService, CandidateService, EstablishmentService, LabDirectorService, LaboratoryService,
    ThesisService, UserService,
};

/// One handle per table, shared by the services.
#[derive(Clone)]
pub struct Repositories {
    pub users: Arc<dyn UserRepository>,
    pub advisors: Arc<dyn AdvisorRepository>,
    pub establishments: Arc<dyn EstablishmentRepository>,
    pub laboratories: Arc<dyn LaboratoryRepository>,
    pub directors: Arc<dyn LabDirectorRepository>,
    pub candidates: Arc<dyn CandidateRepository>,
    pub theses: Arc<dyn ThesisRepository>,
}

impl Repositories {
    pub fn postgres(pool: &PgPool) -> Self {
        Self {
            users: Arc::new(PgUserRepository::new(pool.clone())),
            advisors: Arc::new(PgAdvisorRepository::new(pool.clone())),
            establishments: Arc::new(PgEstablishmentRepository::new(pool.clone())),
            laboratories: Arc::new(PgLaboratoryRepository::new(pool.clone())),
            directors: Arc::new(PgLabDirectorRepository::new(pool.clone())),
            candidates: Arc::new(PgCandidateRepository::new(pool.clone())),
            theses: Arc::new(PgThesisRepository::new(pool.clone())),
        }
    }
}

/// Router state. `pool` is absent when the app runs on in-memory repositories.
#[derive(Clone)]
pub struct AppState {
    pub pool: Option<PgPool>,
    pub auth: AuthService,
    pub users: UserService,
    pub advisors: AdvisorService,
    pub establishments: EstablishmentService,
    pub laboratories: LaboratoryService,
    pub directors: LabDirectorService,
    pub candidates: CandidateService,
    pub theses: ThesisService,
}

impl AppState {
    pub fn from_pool(pool: PgPool) -> Self {
        let repos = Repositories::postgres(&pool);
        Self::new(repos, Some(pool))
    }

    pub fn new(repos: Repositories, pool: Option<PgPool>) -> Self {
        Self {
            pool,
            auth: AuthService::new(repos.users.clone(), repos.advisors.clone()),
            users: UserService::new(repos.users),
            advisors: AdvisorService::new(repos.advisors),
            establishments: EstablishmentService::new(repos.establishments),
            laboratories: LaboratoryService::new(repos.laboratories.clone(), repos.directors.clone()),
            directors: LabDirectorService::new(repos.directors, repos.laboratories),
            candidates: CandidateService::new(repos.candidates.clone()),
            theses: ThesisService::new(repos.theses, repos.candidates),
        }
    }
}
