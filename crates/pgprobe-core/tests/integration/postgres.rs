//! Catalog probing against a real PostgreSQL server.
//!
//! Every test works on its own table so the tests can run in parallel.

use pgprobe_core::{
    BlockingProber, ErrorKind, PgProber, Prober, ProberOptions, RelationKind, TargetType,
};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::postgres_url;

async fn pool() -> PgPool {
    PgPoolOptions::new()
        .max_connections(2)
        .connect(&postgres_url())
        .await
        .expect("connect to test database")
}

async fn recreate(pool: &PgPool, table: &str, columns: &str) {
    sqlx::raw_sql(&format!(
        "DROP TABLE IF EXISTS {table}; CREATE TABLE {table} ({columns});"
    ))
    .execute(pool)
    .await
    .expect("create test table");
}

async fn drop_table(pool: &PgPool, table: &str) {
    sqlx::raw_sql(&format!("DROP TABLE IF EXISTS {table};"))
        .execute(pool)
        .await
        .expect("drop test table");
}

#[tokio::test]
async fn test_postgres_musics_table() {
    let pool = pool().await;
    recreate(
        &pool,
        "it_musics",
        "id bigint PRIMARY KEY, artist text, title text NOT NULL, rating float8",
    )
    .await;

    let prober = PgProber::from_pool(pool.clone(), ProberOptions::default())
        .await
        .expect("prepare prober");
    let table = prober.fetch_table("it_musics").await.expect("probe table");

    assert_eq!(table.name, "it_musics");
    let names: Vec<_> = table.fields.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["ID", "Artist", "Title", "Rating"]);
    let types: Vec<_> = table.fields.iter().map(|f| f.target_type).collect();
    assert_eq!(
        types,
        [
            TargetType::Int64,
            TargetType::String,
            TargetType::String,
            TargetType::Float64
        ]
    );
    let ordinals: Vec<_> = table.fields.iter().map(|f| f.ordinal).collect();
    assert_eq!(ordinals, [1, 2, 3, 4]);

    assert_eq!(table.primary_keys.len(), 1);
    assert_eq!(table.primary_keys[0].raw_name, "id");
    assert!(table.primary_keys[0].index_definition.contains("it_musics_pkey"));
    let non_pk: Vec<_> = table
        .non_primary_keys
        .iter()
        .map(|f| f.raw_name.as_str())
        .collect();
    assert_eq!(non_pk, ["artist", "title", "rating"]);

    assert!(!table.fields[0].nullable);
    assert!(table.fields[1].nullable);
    assert!(!table.fields[2].nullable);
    assert_eq!(table.fields[2].type_display, "text");

    drop_table(&pool, "it_musics").await;
}

#[tokio::test]
async fn test_postgres_id_and_name_columns() {
    let pool = pool().await;
    recreate(&pool, "it_people", "id int PRIMARY KEY, name text").await;

    let prober = PgProber::from_pool(pool.clone(), ProberOptions::default())
        .await
        .expect("prepare prober");
    let fields = prober.fetch_fields("it_people").await.expect("probe fields");

    assert_eq!(fields.len(), 2);
    assert!(fields[0].is_primary);
    assert_eq!(fields[0].target_type, TargetType::Int64);
    assert!(!fields[1].is_primary);
    assert_eq!(fields[1].target_type, TargetType::String);

    drop_table(&pool, "it_people").await;
}

#[tokio::test]
async fn test_postgres_missing_table() {
    let prober = PgProber::connect(&postgres_url(), ProberOptions::default())
        .await
        .expect("connect");

    let err = prober
        .fetch_fields("it_definitely_not_a_table")
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TableNotFound);
}

#[tokio::test]
async fn test_postgres_dropped_columns_are_skipped() {
    let pool = pool().await;
    recreate(&pool, "it_dropped", "id int, legacy text, kept text").await;
    sqlx::raw_sql("ALTER TABLE it_dropped DROP COLUMN legacy;")
        .execute(&pool)
        .await
        .expect("drop column");

    let prober = PgProber::from_pool(pool.clone(), ProberOptions::default())
        .await
        .expect("prepare prober");
    let fields = prober.fetch_fields("it_dropped").await.expect("probe fields");

    let raw: Vec<_> = fields.iter().map(|f| f.raw_name.as_str()).collect();
    assert_eq!(raw, ["id", "kept"]);
    assert_eq!(fields[1].ordinal, 3);
    assert!(fields.iter().all(|f| !f.has_index()));

    drop_table(&pool, "it_dropped").await;
}

#[tokio::test]
async fn test_postgres_column_in_several_indexes() {
    let pool = pool().await;
    recreate(&pool, "it_indexed", "id int PRIMARY KEY, slug text").await;
    sqlx::raw_sql(
        "CREATE UNIQUE INDEX it_indexed_slug ON it_indexed (slug);
         CREATE INDEX it_indexed_id_slug ON it_indexed (id, slug);",
    )
    .execute(&pool)
    .await
    .expect("create indexes");

    let prober = PgProber::from_pool(pool.clone(), ProberOptions::default())
        .await
        .expect("prepare prober");
    let fields = prober.fetch_fields("it_indexed").await.expect("probe fields");

    assert_eq!(fields.len(), 2);
    assert!(fields[0].is_primary);
    assert!(fields[0].index_definition.contains("it_indexed_pkey"));
    assert!(fields[1].is_unique);
    assert!(!fields[1].is_primary);

    drop_table(&pool, "it_indexed").await;
}

#[tokio::test]
async fn test_postgres_snapshot_reads() {
    let pool = pool().await;
    recreate(&pool, "it_snapshot", "id int PRIMARY KEY, created_at timestamptz").await;

    let options = ProberOptions {
        snapshot_reads: true,
        ..ProberOptions::default()
    };
    let prober = PgProber::from_pool(pool.clone(), options)
        .await
        .expect("prepare prober");
    let fields = prober.fetch_fields("it_snapshot").await.expect("probe fields");

    assert_eq!(fields.len(), 2);
    assert_eq!(fields[1].name, "CreatedAt");
    assert_eq!(fields[1].target_type, TargetType::Timestamp);

    drop_table(&pool, "it_snapshot").await;
}

#[tokio::test]
async fn test_postgres_list_relations() {
    let pool = pool().await;
    recreate(&pool, "it_listed", "id int PRIMARY KEY").await;
    sqlx::raw_sql("CREATE OR REPLACE VIEW it_listed_view AS SELECT id FROM it_listed;")
        .execute(&pool)
        .await
        .expect("create view");

    let prober = PgProber::from_pool(pool.clone(), ProberOptions::default())
        .await
        .expect("prepare prober");
    let relations = prober.list_relations().await.expect("list relations");

    let table = relations
        .iter()
        .find(|r| r.name == "it_listed")
        .expect("table listed");
    assert_eq!(table.kind, RelationKind::Table);
    let view = relations
        .iter()
        .find(|r| r.name == "it_listed_view")
        .expect("view listed");
    assert_eq!(view.kind, RelationKind::View);
    assert!(relations
        .iter()
        .all(|r| r.schema != "pg_catalog" && r.schema != "information_schema"));

    sqlx::raw_sql("DROP VIEW IF EXISTS it_listed_view;")
        .execute(&pool)
        .await
        .expect("drop view");
    drop_table(&pool, "it_listed").await;
}

#[test]
fn test_blocking_prober() {
    let prober =
        BlockingProber::connect(&postgres_url(), ProberOptions::default()).expect("connect");

    let err = prober.fetch_table("it_not_there_either").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::TableNotFound);
    assert!(prober.list_relations().is_ok());
}

#[test]
fn test_blocking_prober_dropped_inside_runtime() {
    let prober =
        BlockingProber::connect(&postgres_url(), ProberOptions::default()).expect("connect");
    assert!(prober.list_relations().is_ok());

    let runtime = tokio::runtime::Runtime::new().expect("runtime");
    runtime.block_on(async move {
        drop(prober);
    });
}
