use crate::auth::validate_jwt;
use crate::database::models::*;
use crate::filter::ThesisFilter;
use crate::services::{LoginRequest, RegisterRequest, ServiceError};

use super::MemoryStore;

fn register_request(email: &str, password: &str) -> RegisterRequest {
    RegisterRequest {
        first_name: "Marie".to_string(),
        last_name: "Curie".to_string(),
        email: email.to_string(),
        password: password.to_string(),
        advisor: AdvisorInput {
            department: Some("Physics".to_string()),
            ..Default::default()
        },
    }
}

fn candidate(first_name: &str, last_name: &str) -> CandidateInput {
    CandidateInput {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        ..Default::default()
    }
}

fn new_laboratory() -> NewLaboratory {
    NewLaboratory {
        laboratory: LaboratoryInput {
            name: "LIP6".to_string(),
            city: Some("Paris".to_string()),
            country: Some("France".to_string()),
            ..Default::default()
        },
        director: DirectorDetails {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            ..Default::default()
        },
    }
}

#[tokio::test]
async fn register_creates_user_and_advisor_with_same_id() {
    let store = MemoryStore::new();
    let state = store.app_state();

    let id = state
        .auth
        .register(&register_request("marie@lab.example", "radium"))
        .await
        .unwrap();

    let tables = store.tables();
    assert_eq!(tables.users.len(), 1);
    assert_eq!(tables.users[0].id, id);
    assert_eq!(tables.users[0].role, "advisor");
    assert_ne!(tables.users[0].password, "radium");
    assert_eq!(tables.advisors.len(), 1);
    assert_eq!(tables.advisors[0].id, id);
    assert_eq!(tables.advisors[0].department.as_deref(), Some("Physics"));
}

#[tokio::test]
async fn register_with_existing_email_conflicts_without_new_rows() {
    let store = MemoryStore::new();
    store.seed_advisor("Pierre", "Curie", "taken@lab.example");
    let state = store.app_state();

    let err = state
        .auth
        .register(&register_request("taken@lab.example", "radium"))
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::Conflict(_)));
    let tables = store.tables();
    assert_eq!(tables.users.len(), 1);
    assert_eq!(tables.advisors.len(), 1);
    assert!(!tables.called("users.insert"));
}

#[tokio::test]
async fn register_with_blank_credentials_never_touches_the_store() {
    let store = MemoryStore::new();
    let state = store.app_state();

    for (email, password) in [("", "radium"), ("marie@lab.example", "   ")] {
        let err = state
            .auth
            .register(&register_request(email, password))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    assert!(store.tables().calls.is_empty());
}

#[tokio::test]
async fn login_checks_email_then_password() {
    let store = MemoryStore::new();
    let state = store.app_state();
    let id = state
        .auth
        .register(&register_request("marie@lab.example", "radium"))
        .await
        .unwrap();

    let outcome = state
        .auth
        .login(&LoginRequest {
            email: "marie@lab.example".to_string(),
            password: "radium".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(outcome.user.id, id);
    assert_eq!(validate_jwt(&outcome.token).unwrap().sub, id);

    let wrong_password = state
        .auth
        .login(&LoginRequest {
            email: "marie@lab.example".to_string(),
            password: "polonium".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(wrong_password, ServiceError::Unauthorized(_)));

    let unknown = state
        .auth
        .login(&LoginRequest {
            email: "nobody@lab.example".to_string(),
            password: "radium".to_string(),
        })
        .await
        .unwrap_err();
    assert!(matches!(unknown, ServiceError::NotFound(_)));
}

#[tokio::test]
async fn candidate_with_blank_name_is_not_created() {
    let store = MemoryStore::new();
    let advisor = store.seed_advisor("Marie", "Curie", "marie@lab.example");
    let state = store.app_state();

    assert_eq!(state.candidates.create(advisor, &candidate("", "Doe")).await.unwrap(), None);
    assert_eq!(state.candidates.create(advisor, &candidate("Jane", " ")).await.unwrap(), None);
    assert!(store.tables().candidates.is_empty());

    let id = state
        .candidates
        .create(advisor, &candidate("Jane", "Doe"))
        .await
        .unwrap()
        .expect("candidate id");
    let tables = store.tables();
    assert_eq!(tables.candidates.len(), 1);
    assert_eq!(tables.candidates[0].id, id);
    assert_eq!(tables.candidates[0].advisor_id, advisor);
}

#[tokio::test]
async fn laboratory_creation_links_director_to_new_laboratory() {
    let store = MemoryStore::new();
    let state = store.app_state();

    let created = state.laboratories.create(&new_laboratory()).await.unwrap();

    let tables = store.tables();
    assert_eq!(tables.laboratories.len(), 1);
    assert_eq!(tables.laboratories[0].id, created.id);
    assert_eq!(tables.directors.len(), 1);
    assert_eq!(tables.directors[0].id, created.director_id);
    assert_eq!(tables.directors[0].laboratory_id, created.id);
}

#[tokio::test]
async fn failed_director_insert_removes_the_laboratory() {
    let store = MemoryStore::new();
    store.tables().fail_director_insert = true;
    let state = store.app_state();

    let err = state.laboratories.create(&new_laboratory()).await.unwrap_err();

    assert!(matches!(err, ServiceError::Database(_)));
    let tables = store.tables();
    assert!(tables.called("laboratories.delete"));
    assert!(tables.laboratories.is_empty());
    assert!(tables.directors.is_empty());
}

#[tokio::test]
async fn updating_a_missing_record_is_not_found_without_update_call() {
    let store = MemoryStore::new();
    let state = store.app_state();

    let thesis = ThesisInput {
        topic: "Quantum sensing".to_string(),
        year: 2024,
        ..Default::default()
    };
    let err = state.theses.update(42, &thesis).await.unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));

    let err = state
        .establishments
        .update(
            42,
            &EstablishmentInput {
                name: "Sorbonne".to_string(),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));

    let err = state.candidates.delete(42).await.unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));

    let tables = store.tables();
    assert!(tables.called("theses.exists"));
    assert!(!tables.called("theses.update"));
    assert!(!tables.called("establishments.update"));
    assert!(!tables.called("candidates.delete"));
}

#[tokio::test]
async fn thesis_list_applies_year_and_domain_together() {
    let store = MemoryStore::new();
    let advisor = store.seed_advisor("Marie", "Curie", "marie@lab.example");
    let wanted = store.seed_thesis(advisor, "Graph learning", 2024, "informatique", "ml");
    store.seed_thesis(advisor, "Old graphs", 2023, "informatique", "ml");
    store.seed_thesis(advisor, "Isotopes", 2024, "chimie", "radium");
    let state = store.app_state();

    let filter = ThesisFilter {
        year: Some("2024".to_string()),
        domain: Some("info".to_string()),
        ..Default::default()
    };
    let theses = state.theses.list(&filter).await.unwrap();
    assert_eq!(theses.len(), 1);
    assert_eq!(theses[0].thesis.id, wanted);
    assert_eq!(theses[0].advisor_last_name, "Curie");

    let all = state.theses.list(&ThesisFilter::default()).await.unwrap();
    assert_eq!(all.len(), 3);
}

#[tokio::test]
async fn thesis_list_rejects_non_numeric_year_before_querying() {
    let store = MemoryStore::new();
    let state = store.app_state();

    let filter = ThesisFilter {
        year: Some("last year".to_string()),
        ..Default::default()
    };
    let err = state.theses.list(&filter).await.unwrap_err();

    assert!(matches!(err, ServiceError::Filter(_)));
    assert!(!store.tables().called("theses.select_filtered"));
}

#[tokio::test]
async fn topic_refusal_records_reason_and_acceptance_clears_it() {
    let store = MemoryStore::new();
    let advisor = store.seed_advisor("Marie", "Curie", "marie@lab.example");
    let id = store.seed_thesis(advisor, "Cold fusion", 2024, "physique", "energy");
    let state = store.app_state();

    state
        .theses
        .validate_topic(
            id,
            &TopicValidation {
                topic_validation: false,
                refused_topic: Some("Out of scope".to_string()),
            },
        )
        .await
        .unwrap();
    {
        let tables = store.tables();
        assert!(!tables.theses[0].topic_validation);
        assert_eq!(tables.theses[0].refused_topic.as_deref(), Some("Out of scope"));
    }

    state
        .theses
        .validate_topic(
            id,
            &TopicValidation {
                topic_validation: true,
                refused_topic: Some("ignored".to_string()),
            },
        )
        .await
        .unwrap();
    let tables = store.tables();
    assert!(tables.theses[0].topic_validation);
    assert_eq!(tables.theses[0].refused_topic, None);
}

#[tokio::test]
async fn workflow_actions_update_an_existing_thesis() {
    let store = MemoryStore::new();
    let advisor = store.seed_advisor("Marie", "Curie", "marie@lab.example");
    let id = store.seed_thesis(advisor, "Cold fusion", 2024, "physique", "energy");
    let state = store.app_state();
    let candidate_id = state
        .candidates
        .create(advisor, &candidate("Jane", "Doe"))
        .await
        .unwrap()
        .expect("candidate id");

    state.theses.update_job_vacancy(id, "PhD position 2024-17").await.unwrap();
    state.theses.assign_candidate(id, candidate_id).await.unwrap();
    state.theses.add_anrt_number(id, "CIFRE-2024-0042").await.unwrap();

    let err = state.theses.assign_candidate(id, 9999).await.unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));

    let tables = store.tables();
    let thesis = &tables.theses[0];
    assert_eq!(thesis.job_vacancy.as_deref(), Some("PhD position 2024-17"));
    assert_eq!(thesis.candidate_id, Some(candidate_id));
    assert_eq!(thesis.anrt_number.as_deref(), Some("CIFRE-2024-0042"));
}

#[tokio::test]
async fn projection_rejects_columns_outside_the_allow_list() {
    let store = MemoryStore::new();
    let id = store.seed_advisor("Marie", "Curie", "marie@lab.example");
    let state = store.app_state();

    let user = state.users.get_by_id(id, Some("firstName,email")).await.unwrap();
    assert_eq!(
        user,
        serde_json::json!({ "firstName": "Marie", "email": "marie@lab.example" })
    );

    let err = state.users.get_by_id(id, Some("password")).await.unwrap_err();
    assert!(matches!(err, ServiceError::Filter(_)));
}
