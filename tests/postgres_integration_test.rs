//! PostgreSQL integration tests.
//!
//! Requires `DATABASE_URL` and `--features postgres-tests`. Tests share one
//! database, so each one holds a process-wide lock and starts from empty tables.
#![cfg(feature = "postgres-tests")]

use std::sync::OnceLock;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tokio::sync::{Mutex, MutexGuard};

use member_search::config::SearchConfig;
use member_search::database::{DatabaseConnection, DatabaseMigrations};
use member_search::models::{Member, MemberSearchCondition, NewMember, NewTeam, Team};
use member_search::query_builder::PageRequest;
use member_search::search::{PaginationStrategy, PgSearchExecutor, SearchQueryFacade};

static DB_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

async fn fresh_database() -> (MutexGuard<'static, ()>, PgPool) {
    let guard = DB_LOCK.get_or_init(|| Mutex::new(())).lock().await;
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let pool = PgPoolOptions::new()
        .max_connections(4)
        .connect(&url)
        .await
        .expect("connect to test database");

    DatabaseMigrations::run(&pool).await.expect("bootstrap schema");
    DatabaseMigrations::truncate_all(&pool)
        .await
        .expect("truncate tables");
    (guard, pool)
}

async fn seed(pool: &PgPool) -> (Team, Team) {
    let team_a = Team::create(pool, NewTeam::new("teamA")).await.unwrap();
    let team_b = Team::create(pool, NewTeam::new("teamB")).await.unwrap();
    for (name, age, team) in [
        ("member1", 20, &team_a),
        ("member2", 22, &team_a),
        ("member3", 23, &team_b),
        ("member4", 24, &team_b),
    ] {
        Member::create(pool, NewMember::new(name, age).in_team(team.team_id))
            .await
            .unwrap();
    }
    (team_a, team_b)
}

#[tokio::test]
async fn test_migrations_are_idempotent() {
    let (_guard, pool) = fresh_database().await;
    DatabaseMigrations::run(&pool).await.unwrap();
    DatabaseMigrations::run(&pool).await.unwrap();

    let db = DatabaseConnection::from_pool(pool);
    assert!(db.health_check().await.unwrap());
}

#[tokio::test]
async fn test_connection_from_config() {
    let (_guard, _pool) = fresh_database().await;
    let mut config = SearchConfig::default();
    config.database.url = std::env::var("DATABASE_URL").ok();
    config.database.max_connections = 2;
    config.database.run_migrations = true;

    let db = DatabaseConnection::new(&config).await.unwrap();
    assert!(db.health_check().await.unwrap());
    db.close().await;
}

#[tokio::test]
async fn test_team_and_member_records() {
    let (_guard, pool) = fresh_database().await;
    let (team_a, _) = seed(&pool).await;

    let found = Team::find_by_name(&pool, "teamA").await.unwrap().unwrap();
    assert_eq!(found, team_a);
    assert_eq!(
        Team::find_by_id(&pool, team_a.team_id).await.unwrap(),
        Some(team_a.clone())
    );

    let members = Member::list_all(&pool).await.unwrap();
    assert_eq!(members.len(), 4);

    let by_name = Member::find_by_username(&pool, "member1").await.unwrap();
    assert_eq!(by_name.len(), 1);
    assert_eq!(by_name[0].team_id, Some(team_a.team_id));

    let by_id = Member::find_by_id(&pool, by_name[0].member_id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(by_id, by_name[0]);

    assert_eq!(Team::list_all(&pool).await.unwrap().len(), 2);
    assert!(Member::delete(&pool, by_id.member_id).await.unwrap());
    assert!(!Member::delete(&pool, by_id.member_id).await.unwrap());
    assert_eq!(Member::list_all(&pool).await.unwrap().len(), 3);
}

#[tokio::test]
async fn test_bulk_updates() {
    let (_guard, pool) = fresh_database().await;
    seed(&pool).await;

    let renamed = Member::bulk_rename_younger_than(&pool, 23, "nonmember")
        .await
        .unwrap();
    assert_eq!(renamed, 2);

    let added = Member::bulk_add_age(&pool, 1).await.unwrap();
    assert_eq!(added, 4);

    let members = Member::list_all(&pool).await.unwrap();
    let ages: Vec<i32> = members.iter().map(|m| m.age).collect();
    assert_eq!(ages, vec![21, 23, 24, 25]);
    assert_eq!(
        Member::find_by_username(&pool, "nonmember").await.unwrap().len(),
        2
    );
}

#[tokio::test]
async fn test_search_by_team_and_age() {
    let (_guard, pool) = fresh_database().await;
    seed(&pool).await;
    let facade = SearchQueryFacade::new(PgSearchExecutor::new(pool));

    let none = MemberSearchCondition::new()
        .with_team_name("teamA")
        .with_age_goe(23);
    assert!(facade.search(&none).await.unwrap().is_empty());

    let both = MemberSearchCondition::new()
        .with_team_name("teamA")
        .with_age_goe(20);
    let rows = facade.search(&both).await.unwrap();
    let names: Vec<_> = rows.iter().map(|r| r.username.as_str()).collect();
    assert_eq!(names, vec!["member1", "member2"]);
}

#[tokio::test]
async fn test_teamless_member_is_returned() {
    let (_guard, pool) = fresh_database().await;
    seed(&pool).await;
    Member::create(&pool, NewMember::new("loner", 40)).await.unwrap();
    let facade = SearchQueryFacade::new(PgSearchExecutor::new(pool));

    let rows = facade
        .search(&MemberSearchCondition::new().with_age_goe(40))
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].team_id, None);
    assert_eq!(rows[0].team_name, None);
}

#[tokio::test]
async fn test_pagination_strategies_agree() {
    let (_guard, pool) = fresh_database().await;
    seed(&pool).await;
    let executor = PgSearchExecutor::new(pool);

    for (offset, limit) in [(0, 2), (1, 2), (3, 2), (0, 10), (8, 3)] {
        let page = PageRequest::new(offset, limit).unwrap();
        let combined = SearchQueryFacade::new(executor.clone())
            .with_strategy(PaginationStrategy::Combined)
            .search_page(&MemberSearchCondition::new(), page)
            .await
            .unwrap();
        let split = SearchQueryFacade::new(executor.clone())
            .with_strategy(PaginationStrategy::Split)
            .search_page(&MemberSearchCondition::new(), page)
            .await
            .unwrap();

        assert_eq!(combined, split, "offset {offset} limit {limit}");
        assert_eq!(split.total_count, 4);
    }
}

#[tokio::test]
async fn test_middle_window() {
    let (_guard, pool) = fresh_database().await;
    seed(&pool).await;
    let facade = SearchQueryFacade::new(PgSearchExecutor::new(pool));

    let page = facade
        .search_page(&MemberSearchCondition::new(), PageRequest::new(1, 2).unwrap())
        .await
        .unwrap();
    let names: Vec<_> = page.items.iter().map(|r| r.username.as_str()).collect();
    assert_eq!(names, vec!["member2", "member3"]);
    assert_eq!(page.total_count, 4);
}
