use sqlx::PgPool;

/// All `id` columns must be bigint.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_all_pks_are_bigint(pool: PgPool) {
    let rows: Vec<(String, String)> = sqlx::query_as(
        "SELECT table_name, data_type
         FROM information_schema.columns
         WHERE column_name = 'id'
           AND table_schema = 'public'
           AND table_name != '_sqlx_migrations'
         ORDER BY table_name",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    assert_eq!(rows.len(), 4);
    for (table, data_type) in &rows {
        assert_eq!(data_type, "bigint", "Table {table}.id should be bigint");
    }
}

/// Every table has a timestamptz `created_at`; every table except the
/// append-only `contact_submissions` also has `updated_at`.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_timestamp_columns_are_timestamptz(pool: PgPool) {
    let expected = [
        ("pages", "created_at"),
        ("pages", "updated_at"),
        ("blog_posts", "created_at"),
        ("blog_posts", "updated_at"),
        ("blog_posts", "published_at"),
        ("contact_submissions", "created_at"),
        ("features", "created_at"),
        ("features", "updated_at"),
    ];

    for (table, col) in expected {
        let result: Option<(String,)> = sqlx::query_as(
            "SELECT data_type
             FROM information_schema.columns
             WHERE table_schema = 'public'
               AND table_name = $1
               AND column_name = $2",
        )
        .bind(table)
        .bind(col)
        .fetch_optional(&pool)
        .await
        .unwrap();

        let (data_type,) =
            result.unwrap_or_else(|| panic!("Table {table} is missing column {col}"));
        assert_eq!(
            data_type, "timestamp with time zone",
            "Table {table}.{col} should be timestamptz, got {data_type}"
        );
    }
}

/// Unique constraints follow the `uq_` naming so the API can report them
/// as conflicts.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unique_constraints_use_uq_prefix(pool: PgPool) {
    let names: Vec<(String,)> = sqlx::query_as(
        "SELECT constraint_name
         FROM information_schema.table_constraints
         WHERE table_schema = 'public'
           AND constraint_type = 'UNIQUE'
         ORDER BY constraint_name",
    )
    .fetch_all(&pool)
    .await
    .unwrap();

    let names: Vec<&str> = names.iter().map(|(n,)| n.as_str()).collect();
    assert_eq!(names, ["uq_blog_posts_slug", "uq_pages_slug"]);
}
