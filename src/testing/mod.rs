//! In-memory repositories for exercising services and the router without Postgres.

mod service_tests;

use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::Utc;
use serde::Serialize;
use serde_json::Value;

use crate::database::models::user::DEFAULT_ROLE;
use crate::database::models::*;
use crate::database::repository::*;
use crate::database::DatabaseError;
use crate::filter::{Columns, ThesisFilter};
use crate::state::{AppState, Repositories};

#[derive(Default)]
pub struct Tables {
    pub users: Vec<User>,
    pub advisors: Vec<Advisor>,
    pub establishments: Vec<Establishment>,
    pub laboratories: Vec<Laboratory>,
    pub directors: Vec<LabDirector>,
    pub candidates: Vec<Candidate>,
    pub theses: Vec<Thesis>,
    /// Every repository call, as `table.method`.
    pub calls: Vec<String>,
    /// Makes the next director insert fail.
    pub fail_director_insert: bool,
    next_id: i32,
}

impl Tables {
    fn next_id(&mut self) -> i32 {
        self.next_id += 1;
        self.next_id
    }

    pub fn called(&self, call: &str) -> bool {
        self.calls.iter().any(|c| c == call)
    }
}

/// One shared store implementing every repository trait.
#[derive(Clone, Default)]
pub struct MemoryStore {
    tables: Arc<Mutex<Tables>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tables(&self) -> MutexGuard<'_, Tables> {
        self.tables.lock().unwrap()
    }

    fn record(&self, call: &str) -> MutexGuard<'_, Tables> {
        let mut tables = self.tables();
        tables.calls.push(call.to_string());
        tables
    }

    pub fn repositories(&self) -> Repositories {
        let store = Arc::new(self.clone());
        Repositories {
            users: store.clone(),
            advisors: store.clone(),
            establishments: store.clone(),
            laboratories: store.clone(),
            directors: store.clone(),
            candidates: store.clone(),
            theses: store,
        }
    }

    pub fn app_state(&self) -> AppState {
        AppState::new(self.repositories(), None)
    }

    /// Inserts a user plus advisor row directly, bypassing password hashing.
    pub fn seed_advisor(&self, first_name: &str, last_name: &str, email: &str) -> i32 {
        let mut tables = self.tables();
        let id = tables.next_id();
        tables.users.push(User {
            id,
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: email.to_string(),
            password: String::new(),
            role: DEFAULT_ROLE.to_string(),
            created_at: Utc::now(),
        });
        tables.advisors.push(Advisor {
            id,
            establishment_id: None,
            department: None,
            research_area: None,
            cost_center: None,
            phone: None,
        });
        id
    }

    pub fn seed_thesis(&self, advisor_id: i32, topic: &str, year: i32, domain: &str, keywords: &str) -> i32 {
        let mut tables = self.tables();
        let id = tables.next_id();
        tables.theses.push(new_thesis(id, advisor_id, topic, year, domain, keywords));
        id
    }
}

fn new_thesis(id: i32, advisor_id: i32, topic: &str, year: i32, domain: &str, keywords: &str) -> Thesis {
    Thesis {
        id,
        advisor_id,
        candidate_id: None,
        laboratory_id: None,
        topic: topic.to_string(),
        year,
        domain: domain.to_string(),
        keywords: keywords.to_string(),
        description: None,
        topic_validation: false,
        refused_topic: None,
        job_vacancy: None,
        anrt_number: None,
        created_at: Utc::now(),
    }
}

fn project<T: Serialize>(row: Option<&T>, columns: &Columns) -> Result<Option<Value>, DatabaseError> {
    match row {
        Some(row) => {
            let value = serde_json::to_value(row).map_err(|e| DatabaseError::QueryError(e.to_string()))?;
            Ok(Some(columns.project(&value)))
        }
        None => Ok(None),
    }
}

/// Mirrors the schema's foreign keys so violations surface like Postgres reports them.
fn foreign_key(present: bool, constraint: &str) -> Result<(), DatabaseError> {
    if present {
        Ok(())
    } else {
        Err(DatabaseError::ForeignKeyViolation(constraint.to_string()))
    }
}

fn contains(haystack: &str, needle: &Option<String>) -> bool {
    match needle.as_deref().map(str::trim).filter(|n| !n.is_empty()) {
        Some(needle) => haystack.to_lowercase().contains(&needle.to_lowercase()),
        None => true,
    }
}

fn thesis_item(tables: &Tables, thesis: &Thesis) -> ThesisListItem {
    let advisor = tables.users.iter().find(|u| u.id == thesis.advisor_id);
    let candidate = thesis
        .candidate_id
        .and_then(|id| tables.candidates.iter().find(|c| c.id == id));
    let laboratory = thesis
        .laboratory_id
        .and_then(|id| tables.laboratories.iter().find(|l| l.id == id));

    ThesisListItem {
        thesis: thesis.clone(),
        advisor_first_name: advisor.map(|u| u.first_name.clone()).unwrap_or_default(),
        advisor_last_name: advisor.map(|u| u.last_name.clone()).unwrap_or_default(),
        candidate_first_name: candidate.map(|c| c.first_name.clone()),
        candidate_last_name: candidate.map(|c| c.last_name.clone()),
        laboratory_name: laboratory.map(|l| l.name.clone()),
    }
}

fn check_laboratory(tables: &Tables, laboratory_id: Option<i32>) -> Result<(), DatabaseError> {
    match laboratory_id {
        Some(id) => foreign_key(
            tables.laboratories.iter().any(|l| l.id == id),
            "theses_laboratory_id_fkey",
        ),
        None => Ok(()),
    }
}

fn candidate_item(tables: &Tables, candidate: &Candidate) -> CandidateListItem {
    let advisor = tables.users.iter().find(|u| u.id == candidate.advisor_id);
    CandidateListItem {
        candidate: candidate.clone(),
        advisor_first_name: advisor.map(|u| u.first_name.clone()).unwrap_or_default(),
        advisor_last_name: advisor.map(|u| u.last_name.clone()).unwrap_or_default(),
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn insert(&self, user: &NewUser) -> Result<i32, DatabaseError> {
        let mut tables = self.record("users.insert");
        if tables.users.iter().any(|u| u.email == user.email) {
            return Err(DatabaseError::UniqueViolation("users_email_key".to_string()));
        }
        let id = tables.next_id();
        tables.users.push(User {
            id,
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
            password: user.password.clone(),
            role: user.role.clone(),
            created_at: Utc::now(),
        });
        Ok(id)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DatabaseError> {
        let tables = self.record("users.find_by_email");
        Ok(tables.users.iter().find(|u| u.email == email).cloned())
    }

    async fn select_by_id(&self, id: i32, columns: &Columns) -> Result<Option<Value>, DatabaseError> {
        let tables = self.record("users.select_by_id");
        project(tables.users.iter().find(|u| u.id == id), columns)
    }

    async fn select_by_email(&self, email: &str, columns: &Columns) -> Result<Option<Value>, DatabaseError> {
        let tables = self.record("users.select_by_email");
        project(tables.users.iter().find(|u| u.email == email), columns)
    }

    async fn exists(&self, id: i32) -> Result<bool, DatabaseError> {
        let tables = self.record("users.exists");
        Ok(tables.users.iter().any(|u| u.id == id))
    }

    async fn update(&self, id: i32, update: &UserUpdate) -> Result<(), DatabaseError> {
        let mut tables = self.record("users.update");
        if let Some(user) = tables.users.iter_mut().find(|u| u.id == id) {
            user.first_name = update.first_name.clone();
            user.last_name = update.last_name.clone();
            user.email = update.email.clone();
        }
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<(), DatabaseError> {
        let mut tables = self.record("users.delete");
        tables.users.retain(|u| u.id != id);
        tables.advisors.retain(|a| a.id != id);
        tables.candidates.retain(|c| c.advisor_id != id);
        tables.theses.retain(|t| t.advisor_id != id);
        Ok(())
    }
}

#[async_trait]
impl AdvisorRepository for MemoryStore {
    async fn insert(&self, user_id: i32, input: &AdvisorInput) -> Result<i32, DatabaseError> {
        let mut tables = self.record("advisors.insert");
        tables.advisors.push(Advisor {
            id: user_id,
            establishment_id: input.establishment_id,
            department: input.department.clone(),
            research_area: input.research_area.clone(),
            cost_center: input.cost_center.clone(),
            phone: input.phone.clone(),
        });
        Ok(user_id)
    }

    async fn select_all(&self) -> Result<Vec<AdvisorListItem>, DatabaseError> {
        let tables = self.record("advisors.select_all");
        let items = tables
            .advisors
            .iter()
            .filter_map(|advisor| {
                let user = tables.users.iter().find(|u| u.id == advisor.id)?;
                let establishment_name = advisor
                    .establishment_id
                    .and_then(|id| tables.establishments.iter().find(|e| e.id == id))
                    .map(|e| e.name.clone());
                Some(AdvisorListItem {
                    advisor: advisor.clone(),
                    first_name: user.first_name.clone(),
                    last_name: user.last_name.clone(),
                    email: user.email.clone(),
                    establishment_name,
                })
            })
            .collect();
        Ok(items)
    }

    async fn select_by_id(&self, id: i32, columns: &Columns) -> Result<Option<Value>, DatabaseError> {
        let tables = self.record("advisors.select_by_id");
        project(tables.advisors.iter().find(|a| a.id == id), columns)
    }

    async fn exists(&self, id: i32) -> Result<bool, DatabaseError> {
        let tables = self.record("advisors.exists");
        Ok(tables.advisors.iter().any(|a| a.id == id))
    }

    async fn update(&self, id: i32, input: &AdvisorInput) -> Result<(), DatabaseError> {
        let mut tables = self.record("advisors.update");
        if let Some(establishment_id) = input.establishment_id {
            let present = tables.establishments.iter().any(|e| e.id == establishment_id);
            foreign_key(present, "advisors_establishment_id_fkey")?;
        }
        if let Some(advisor) = tables.advisors.iter_mut().find(|a| a.id == id) {
            advisor.establishment_id = input.establishment_id;
            advisor.department = input.department.clone();
            advisor.research_area = input.research_area.clone();
            advisor.cost_center = input.cost_center.clone();
            advisor.phone = input.phone.clone();
        }
        Ok(())
    }
}

#[async_trait]
impl EstablishmentRepository for MemoryStore {
    async fn insert(&self, input: &EstablishmentInput) -> Result<i32, DatabaseError> {
        let mut tables = self.record("establishments.insert");
        let id = tables.next_id();
        tables.establishments.push(Establishment {
            id,
            name: input.name.clone(),
            siret: input.siret.clone(),
            address: input.address.clone(),
            postal_code: input.postal_code.clone(),
            city: input.city.clone(),
            country: input.country.clone(),
            phone: input.phone.clone(),
            email: input.email.clone(),
        });
        Ok(id)
    }

    async fn select_all(&self) -> Result<Vec<Establishment>, DatabaseError> {
        let tables = self.record("establishments.select_all");
        Ok(tables.establishments.clone())
    }

    async fn select_by_id(&self, id: i32, columns: &Columns) -> Result<Option<Value>, DatabaseError> {
        let tables = self.record("establishments.select_by_id");
        project(tables.establishments.iter().find(|e| e.id == id), columns)
    }

    async fn select_by_name(&self, name: &str, columns: &Columns) -> Result<Option<Value>, DatabaseError> {
        let tables = self.record("establishments.select_by_name");
        project(tables.establishments.iter().find(|e| e.name == name), columns)
    }

    async fn exists(&self, id: i32) -> Result<bool, DatabaseError> {
        let tables = self.record("establishments.exists");
        Ok(tables.establishments.iter().any(|e| e.id == id))
    }

    async fn update(&self, id: i32, input: &EstablishmentInput) -> Result<(), DatabaseError> {
        let mut tables = self.record("establishments.update");
        if let Some(e) = tables.establishments.iter_mut().find(|e| e.id == id) {
            e.name = input.name.clone();
            e.siret = input.siret.clone();
            e.address = input.address.clone();
            e.postal_code = input.postal_code.clone();
            e.city = input.city.clone();
            e.country = input.country.clone();
            e.phone = input.phone.clone();
            e.email = input.email.clone();
        }
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<(), DatabaseError> {
        let mut tables = self.record("establishments.delete");
        tables.establishments.retain(|e| e.id != id);
        for advisor in tables.advisors.iter_mut().filter(|a| a.establishment_id == Some(id)) {
            advisor.establishment_id = None;
        }
        Ok(())
    }
}

#[async_trait]
impl LaboratoryRepository for MemoryStore {
    async fn insert(&self, input: &LaboratoryInput) -> Result<i32, DatabaseError> {
        let mut tables = self.record("laboratories.insert");
        let id = tables.next_id();
        tables.laboratories.push(Laboratory {
            id,
            name: input.name.clone(),
            address: input.address.clone(),
            city: input.city.clone(),
            country: input.country.clone(),
            means: input.means.clone(),
            expertise: input.expertise.clone(),
        });
        Ok(id)
    }

    async fn select_all(&self) -> Result<Vec<LaboratoryListItem>, DatabaseError> {
        let tables = self.record("laboratories.select_all");
        let items = tables
            .laboratories
            .iter()
            .map(|lab| {
                let director = tables.directors.iter().find(|d| d.laboratory_id == lab.id);
                LaboratoryListItem {
                    laboratory: lab.clone(),
                    director_id: director.map(|d| d.id),
                    director_first_name: director.map(|d| d.first_name.clone()),
                    director_last_name: director.map(|d| d.last_name.clone()),
                }
            })
            .collect();
        Ok(items)
    }

    async fn select_by_id(&self, id: i32, columns: &Columns) -> Result<Option<Value>, DatabaseError> {
        let tables = self.record("laboratories.select_by_id");
        project(tables.laboratories.iter().find(|l| l.id == id), columns)
    }

    async fn select_by_name(&self, name: &str, columns: &Columns) -> Result<Option<Value>, DatabaseError> {
        let tables = self.record("laboratories.select_by_name");
        project(tables.laboratories.iter().find(|l| l.name == name), columns)
    }

    async fn select_by_city(&self, city: &str) -> Result<Vec<Laboratory>, DatabaseError> {
        let tables = self.record("laboratories.select_by_city");
        Ok(tables
            .laboratories
            .iter()
            .filter(|l| l.city.as_deref() == Some(city))
            .cloned()
            .collect())
    }

    async fn select_by_country(&self, country: &str) -> Result<Vec<Laboratory>, DatabaseError> {
        let tables = self.record("laboratories.select_by_country");
        Ok(tables
            .laboratories
            .iter()
            .filter(|l| l.country.as_deref() == Some(country))
            .cloned()
            .collect())
    }

    async fn exists(&self, id: i32) -> Result<bool, DatabaseError> {
        let tables = self.record("laboratories.exists");
        Ok(tables.laboratories.iter().any(|l| l.id == id))
    }

    async fn update(&self, id: i32, input: &LaboratoryInput) -> Result<(), DatabaseError> {
        let mut tables = self.record("laboratories.update");
        if let Some(lab) = tables.laboratories.iter_mut().find(|l| l.id == id) {
            lab.name = input.name.clone();
            lab.address = input.address.clone();
            lab.city = input.city.clone();
            lab.country = input.country.clone();
            lab.means = input.means.clone();
            lab.expertise = input.expertise.clone();
        }
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<(), DatabaseError> {
        let mut tables = self.record("laboratories.delete");
        tables.laboratories.retain(|l| l.id != id);
        tables.directors.retain(|d| d.laboratory_id != id);
        for thesis in tables.theses.iter_mut().filter(|t| t.laboratory_id == Some(id)) {
            thesis.laboratory_id = None;
        }
        Ok(())
    }
}

#[async_trait]
impl LabDirectorRepository for MemoryStore {
    async fn insert(&self, laboratory_id: i32, details: &DirectorDetails) -> Result<i32, DatabaseError> {
        let mut tables = self.record("directors.insert");
        if tables.fail_director_insert {
            return Err(DatabaseError::QueryError("director insert failed".to_string()));
        }
        let id = tables.next_id();
        tables.directors.push(LabDirector {
            id,
            laboratory_id,
            first_name: details.first_name.clone(),
            last_name: details.last_name.clone(),
            email: details.email.clone(),
            phone: details.phone.clone(),
        });
        Ok(id)
    }

    async fn select_all(&self) -> Result<Vec<LabDirector>, DatabaseError> {
        let tables = self.record("directors.select_all");
        Ok(tables.directors.clone())
    }

    async fn select_by_id(&self, id: i32, columns: &Columns) -> Result<Option<Value>, DatabaseError> {
        let tables = self.record("directors.select_by_id");
        project(tables.directors.iter().find(|d| d.id == id), columns)
    }

    async fn select_by_laboratory(&self, laboratory_id: i32, columns: &Columns) -> Result<Option<Value>, DatabaseError> {
        let tables = self.record("directors.select_by_laboratory");
        project(tables.directors.iter().find(|d| d.laboratory_id == laboratory_id), columns)
    }

    async fn exists(&self, id: i32) -> Result<bool, DatabaseError> {
        let tables = self.record("directors.exists");
        Ok(tables.directors.iter().any(|d| d.id == id))
    }

    async fn update(&self, id: i32, laboratory_id: i32, details: &DirectorDetails) -> Result<(), DatabaseError> {
        let mut tables = self.record("directors.update");
        if let Some(d) = tables.directors.iter_mut().find(|d| d.id == id) {
            d.laboratory_id = laboratory_id;
            d.first_name = details.first_name.clone();
            d.last_name = details.last_name.clone();
            d.email = details.email.clone();
            d.phone = details.phone.clone();
        }
        Ok(())
    }
}

#[async_trait]
impl CandidateRepository for MemoryStore {
    async fn insert(&self, advisor_id: i32, input: &CandidateInput) -> Result<i32, DatabaseError> {
        let mut tables = self.record("candidates.insert");
        let present = tables.advisors.iter().any(|a| a.id == advisor_id);
        foreign_key(present, "candidates_advisor_id_fkey")?;
        let id = tables.next_id();
        tables.candidates.push(Candidate {
            id,
            advisor_id,
            first_name: input.first_name.clone(),
            last_name: input.last_name.clone(),
            email: input.email.clone(),
            phone: input.phone.clone(),
            committee_validation: input.committee_validation,
            hr_validation: input.hr_validation,
            zrr_validation: input.zrr_validation,
        });
        Ok(id)
    }

    async fn select_all(&self) -> Result<Vec<CandidateListItem>, DatabaseError> {
        let tables = self.record("candidates.select_all");
        Ok(tables.candidates.iter().map(|c| candidate_item(&tables, c)).collect())
    }

    async fn select_by_advisor(&self, advisor_id: i32) -> Result<Vec<CandidateListItem>, DatabaseError> {
        let tables = self.record("candidates.select_by_advisor");
        Ok(tables
            .candidates
            .iter()
            .filter(|c| c.advisor_id == advisor_id)
            .map(|c| candidate_item(&tables, c))
            .collect())
    }

    async fn select_by_id(&self, id: i32, columns: &Columns) -> Result<Option<Value>, DatabaseError> {
        let tables = self.record("candidates.select_by_id");
        project(tables.candidates.iter().find(|c| c.id == id), columns)
    }

    async fn exists(&self, id: i32) -> Result<bool, DatabaseError> {
        let tables = self.record("candidates.exists");
        Ok(tables.candidates.iter().any(|c| c.id == id))
    }

    async fn update(&self, id: i32, input: &CandidateInput) -> Result<(), DatabaseError> {
        let mut tables = self.record("candidates.update");
        if let Some(advisor_id) = input.advisor_id {
            let present = tables.advisors.iter().any(|a| a.id == advisor_id);
            foreign_key(present, "candidates_advisor_id_fkey")?;
        }
        if let Some(c) = tables.candidates.iter_mut().find(|c| c.id == id) {
            if let Some(advisor_id) = input.advisor_id {
                c.advisor_id = advisor_id;
            }
            c.first_name = input.first_name.clone();
            c.last_name = input.last_name.clone();
            c.email = input.email.clone();
            c.phone = input.phone.clone();
            c.committee_validation = input.committee_validation;
            c.hr_validation = input.hr_validation;
            c.zrr_validation = input.zrr_validation;
        }
        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<(), DatabaseError> {
        let mut tables = self.record("candidates.delete");
        tables.candidates.retain(|c| c.id != id);
        for thesis in tables.theses.iter_mut().filter(|t| t.candidate_id == Some(id)) {
            thesis.candidate_id = None;
        }
        Ok(())
    }
}

#[async_trait]
impl ThesisRepository for MemoryStore {
    async fn insert(&self, advisor_id: i32, input: &ThesisInput) -> Result<i32, DatabaseError> {
        let mut tables = self.record("theses.insert");
        let present = tables.advisors.iter().any(|a| a.id == advisor_id);
        foreign_key(present, "theses_advisor_id_fkey")?;
        check_laboratory(&tables, input.laboratory_id)?;
        let id = tables.next_id();
        let mut thesis = new_thesis(id, advisor_id, &input.topic, input.year, &input.domain, &input.keywords);
        thesis.description = input.description.clone();
        thesis.laboratory_id = input.laboratory_id;
        tables.theses.push(thesis);
        Ok(id)
    }

    async fn select_filtered(&self, filter: &ThesisFilter) -> Result<Vec<ThesisListItem>, DatabaseError> {
        let tables = self.record("theses.select_filtered");
        let year = filter
            .year
            .as_deref()
            .map(str::trim)
            .filter(|y| !y.is_empty())
            .map(|y| y.parse::<i32>().map_err(|e| DatabaseError::QueryError(e.to_string())))
            .transpose()?;

        let items = tables
            .theses
            .iter()
            .map(|t| thesis_item(&tables, t))
            .filter(|item| {
                contains(&item.thesis.keywords, &filter.keyword)
                    && year.map_or(true, |y| item.thesis.year == y)
                    && contains(&item.thesis.domain, &filter.domain)
                    && (contains(&item.advisor_first_name, &filter.advisor_name)
                        || contains(&item.advisor_last_name, &filter.advisor_name))
            })
            .collect();
        Ok(items)
    }

    async fn select_by_advisor(&self, advisor_id: i32) -> Result<Vec<ThesisListItem>, DatabaseError> {
        let tables = self.record("theses.select_by_advisor");
        Ok(tables
            .theses
            .iter()
            .filter(|t| t.advisor_id == advisor_id)
            .map(|t| thesis_item(&tables, t))
            .collect())
    }

    async fn select_by_id(&self, id: i32, columns: &Columns) -> Result<Option<Value>, DatabaseError> {
        let tables = self.record("theses.select_by_id");
        project(tables.theses.iter().find(|t| t.id == id), columns)
    }

    async fn exists(&self, id: i32) -> Result<bool, DatabaseError> {
        let tables = self.record("theses.exists");
        Ok(tables.theses.iter().any(|t| t.id == id))
    }

    async fn update(&self, id: i32, input: &ThesisInput) -> Result<(), DatabaseError> {
        let mut tables = self.record("theses.update");
        check_laboratory(&tables, input.laboratory_id)?;
        if let Some(t) = tables.theses.iter_mut().find(|t| t.id == id) {
            t.topic = input.topic.clone();
            t.year = input.year;
            t.domain = input.domain.clone();
            t.keywords = input.keywords.clone();
            t.description = input.description.clone();
            t.laboratory_id = input.laboratory_id;
        }
        Ok(())
    }

    async fn set_topic_validation(
        &self,
        id: i32,
        validated: bool,
        refused_topic: Option<&str>,
    ) -> Result<(), DatabaseError> {
        let mut tables = self.record("theses.set_topic_validation");
        if let Some(t) = tables.theses.iter_mut().find(|t| t.id == id) {
            t.topic_validation = validated;
            t.refused_topic = refused_topic.map(str::to_string);
        }
        Ok(())
    }

    async fn set_job_vacancy(&self, id: i32, job_vacancy: &str) -> Result<(), DatabaseError> {
        let mut tables = self.record("theses.set_job_vacancy");
        if let Some(t) = tables.theses.iter_mut().find(|t| t.id == id) {
            t.job_vacancy = Some(job_vacancy.to_string());
        }
        Ok(())
    }

    async fn set_candidate(&self, id: i32, candidate_id: i32) -> Result<(), DatabaseError> {
        let mut tables = self.record("theses.set_candidate");
        if let Some(t) = tables.theses.iter_mut().find(|t| t.id == id) {
            t.candidate_id = Some(candidate_id);
        }
        Ok(())
    }

    async fn set_anrt_number(&self, id: i32, anrt_number: &str) -> Result<(), DatabaseError> {
        let mut tables = self.record("theses.set_anrt_number");
        if let Some(t) = tables.theses.iter_mut().find(|t| t.id == id) {
            t.anrt_number = Some(anrt_number.to_string());
        }
        Ok(())
    }
}
