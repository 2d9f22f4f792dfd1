//! Integration tests for the StaffSync store layer.
//!
//! These run against an in-memory SQLite database, so they exercise the
//! real migrations, the unique index, and transaction rollback behavior
//! without any external services.

use chrono::Utc;
use staffsync_db::{run_migrations, DbPool, NewTenant, NewUser, Tenant, User, ROLE_ADMIN};
use uuid::Uuid;

async fn test_pool() -> DbPool {
    let pool = DbPool::connect_in_memory()
        .await
        .expect("Failed to open in-memory database");
    run_migrations(&pool).await.expect("Failed to migrate");
    pool
}

fn new_tenant(company_name: &str) -> NewTenant {
    NewTenant {
        tenant_id: Uuid::new_v4(),
        company_name: company_name.to_string(),
        company_size: None,
        industry: None,
        website: None,
        subscribe_newsletter: false,
        created_at: Utc::now(),
    }
}

fn new_admin(tenant_id: Uuid, email: &str) -> NewUser {
    NewUser {
        user_id: Uuid::new_v4(),
        tenant_id,
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        email: email.to_string(),
        phone: Some("555-0100".to_string()),
        role: ROLE_ADMIN.to_string(),
        job_title: None,
        password_hash: "$argon2id$test-placeholder".to_string(),
        created_at: Utc::now(),
    }
}

async fn register(pool: &DbPool, company_name: &str, email: &str) -> Uuid {
    let tenant = new_tenant(company_name);
    let user = new_admin(tenant.tenant_id, email);

    let mut tx = pool.begin().await.expect("Failed to begin transaction");
    Tenant::create_in_tx(&mut tx, &tenant)
        .await
        .expect("Failed to insert tenant");
    User::create_in_tx(&mut tx, &user)
        .await
        .expect("Failed to insert user");
    tx.commit().await.expect("Failed to commit");

    tenant.tenant_id
}

#[tokio::test]
async fn migrations_are_idempotent() {
    let pool = test_pool().await;

    // A second run must be a no-op, not an error
    run_migrations(&pool)
        .await
        .expect("Re-running migrations should not fail");

    assert_eq!(Tenant::count(pool.inner()).await.unwrap(), 0);
    assert_eq!(User::count(pool.inner()).await.unwrap(), 0);
}

#[tokio::test]
async fn tenant_and_admin_are_created_together() {
    let pool = test_pool().await;

    let tenant_id = register(&pool, "Acme", "a@acme.com").await;

    let tenant = Tenant::find_by_id(pool.inner(), tenant_id)
        .await
        .unwrap()
        .expect("Tenant should exist");
    assert_eq!(tenant.company_name, "Acme");

    let user = User::find_by_email(pool.inner(), "a@acme.com")
        .await
        .unwrap()
        .expect("Admin user should exist");
    assert_eq!(user.tenant_id, tenant_id);
    assert_eq!(user.role, ROLE_ADMIN);
}

#[tokio::test]
async fn email_lookup_is_case_insensitive() {
    let pool = test_pool().await;
    register(&pool, "Acme", "Ada@Acme.com").await;

    let user = User::find_by_email(pool.inner(), "ada@acme.COM")
        .await
        .unwrap()
        .expect("Lookup should match regardless of case");

    // Stored email keeps its original casing for display
    assert_eq!(user.email, "Ada@Acme.com");

    assert!(User::email_exists(pool.inner(), "ADA@ACME.COM").await.unwrap());
    assert!(!User::email_exists(pool.inner(), "other@acme.com").await.unwrap());
}

#[tokio::test]
async fn duplicate_email_violates_unique_index() {
    let pool = test_pool().await;
    register(&pool, "Acme", "a@acme.com").await;

    // Same email with different casing must hit the unique index
    let tenant = new_tenant("Acme Clone");
    let user = new_admin(tenant.tenant_id, "A@ACME.com");

    let mut tx = pool.begin().await.unwrap();
    Tenant::create_in_tx(&mut tx, &tenant).await.unwrap();
    let err = User::create_in_tx(&mut tx, &user)
        .await
        .expect_err("Duplicate email should be rejected");
    assert!(err.is_unique_violation());
    drop(tx);

    assert_eq!(Tenant::count(pool.inner()).await.unwrap(), 1);
    assert_eq!(User::count(pool.inner()).await.unwrap(), 1);
}

#[tokio::test]
async fn failed_user_insert_rolls_back_tenant() {
    let pool = test_pool().await;
    register(&pool, "Acme", "a@acme.com").await;

    let tenant = new_tenant("Orphan Candidate");
    let user = new_admin(tenant.tenant_id, "a@acme.com");

    let mut tx = pool.begin().await.unwrap();
    Tenant::create_in_tx(&mut tx, &tenant).await.unwrap();
    assert!(User::create_in_tx(&mut tx, &user).await.is_err());
    // Dropping the transaction without committing rolls it back
    drop(tx);

    let orphan = Tenant::find_by_id(pool.inner(), tenant.tenant_id)
        .await
        .unwrap();
    assert!(orphan.is_none(), "No tenant row may survive the rollback");
    assert_eq!(Tenant::count(pool.inner()).await.unwrap(), 1);
}

#[tokio::test]
async fn user_requires_existing_tenant() {
    let pool = test_pool().await;

    let user = new_admin(Uuid::new_v4(), "nobody@example.com");

    let mut tx = pool.begin().await.unwrap();
    let result = User::create_in_tx(&mut tx, &user).await;
    assert!(
        result.is_err(),
        "Foreign key to tenants must be enforced"
    );
}
