use authentication_service::domain::user::models::Role;
use authentication_service::domain::user::models::User;
use authentication_service::domain::user::models::UserId;
use authentication_service::domain::user::ports::UserRepository;
use authentication_service::outbound::repositories::PostgresUserRepository;
use authentication_service::user::errors::UserError;
use chrono::Utc;
use sqlx::PgPool;

async fn connect() -> PgPool {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let pool = PgPool::connect(&url)
        .await
        .expect("Failed to connect to database");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");
    pool
}

fn new_user(email: &str) -> User {
    User {
        id: UserId::new(),
        email: email.to_string(),
        password_hash: "$argon2id$v=19$m=8,t=1,p=1$c2FsdHNhbHQ$aGFzaGhhc2g".to_string(),
        role: Role::customer(),
        created_at: Utc::now(),
    }
}

fn unique_email() -> String {
    format!("{}@example.com", UserId::new())
}

#[tokio::test]
#[ignore = "requires PostgreSQL at DATABASE_URL"]
async fn test_create_then_find_by_email() {
    let repository = PostgresUserRepository::new(connect().await);
    let email = unique_email();

    let created = repository.create(new_user(&email)).await.unwrap();
    let found = repository
        .find_by_email(&email)
        .await
        .unwrap()
        .expect("User not found");

    assert_eq!(found.id, created.id);
    assert_eq!(found.email, email);
    assert_eq!(found.role.as_str(), "customer");
    assert_eq!(found.password_hash, created.password_hash);
}

#[tokio::test]
#[ignore = "requires PostgreSQL at DATABASE_URL"]
async fn test_find_unknown_email() {
    let repository = PostgresUserRepository::new(connect().await);

    let found = repository.find_by_email(&unique_email()).await.unwrap();

    assert!(found.is_none());
}

#[tokio::test]
#[ignore = "requires PostgreSQL at DATABASE_URL"]
async fn test_duplicate_email_is_rejected() {
    let repository = PostgresUserRepository::new(connect().await);
    let email = unique_email();

    repository.create(new_user(&email)).await.unwrap();
    let result = repository.create(new_user(&email)).await;

    assert!(matches!(result, Err(UserError::EmailAlreadyExists(e)) if e == email));
}
