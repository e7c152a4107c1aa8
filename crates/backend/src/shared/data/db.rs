use once_cell::sync::OnceCell;
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, DbErr,
    Statement,
};
use std::path::Path;

static DB_CONN: OnceCell<DatabaseConnection> = OnceCell::new();

/// Схема хранилища. Выполняется при каждом старте, поэтому только IF NOT EXISTS.
const SCHEMA: &[(&str, &str)] = &[
    (
        "category",
        r#"
        CREATE TABLE IF NOT EXISTS category (
            id INTEGER PRIMARY KEY NOT NULL,
            name TEXT NOT NULL
        );
        "#,
    ),
    (
        "product",
        r#"
        CREATE TABLE IF NOT EXISTS product (
            id INTEGER PRIMARY KEY NOT NULL,
            category_id INTEGER NOT NULL REFERENCES category (id),
            name TEXT NOT NULL,
            price INTEGER NOT NULL
        );
        "#,
    ),
    (
        "idx_product_category_id",
        "CREATE INDEX IF NOT EXISTS idx_product_category_id ON product (category_id);",
    ),
    (
        "sale",
        r#"
        CREATE TABLE IF NOT EXISTS sale (
            id INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL,
            date TEXT NOT NULL
        );
        "#,
    ),
    (
        "sale_entry",
        r#"
        CREATE TABLE IF NOT EXISTS sale_entry (
            id INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL,
            sale_id INTEGER NOT NULL REFERENCES sale (id) ON DELETE CASCADE,
            product_id INTEGER NOT NULL REFERENCES product (id),
            quantity INTEGER NOT NULL
        );
        "#,
    ),
    (
        "idx_sale_entry_sale_id",
        "CREATE INDEX IF NOT EXISTS idx_sale_entry_sale_id ON sale_entry (sale_id);",
    ),
    (
        "idx_sale_entry_product_id",
        "CREATE INDEX IF NOT EXISTS idx_sale_entry_product_id ON sale_entry (product_id);",
    ),
];

pub async fn initialize_database(db_file: &Path) -> anyhow::Result<()> {
    if let Some(parent) = db_file.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let absolute_path = if db_file.is_absolute() {
        db_file.to_path_buf()
    } else {
        std::env::current_dir()?.join(db_file)
    };
    // Normalize path separators and ensure proper URL form on Windows
    let normalized = absolute_path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    let db_url = format!("sqlite://{}{}?mode=rwc", prefix, normalized);

    tracing::info!("Opening database {}", absolute_path.display());
    let conn = connect(&db_url).await?;
    ensure_schema(&conn).await?;

    DB_CONN
        .set(conn)
        .map_err(|_| anyhow::anyhow!("Failed to set DB_CONN"))?;
    Ok(())
}

async fn connect(db_url: &str) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(db_url.to_string());
    // SQLite не любит конкурентную запись, одна транзакция импорта за раз
    options.max_connections(1).sqlx_logging(false);
    Database::connect(options).await
}

/// Создает недостающие таблицы и индексы
pub async fn ensure_schema<C: ConnectionTrait>(conn: &C) -> Result<(), DbErr> {
    for (name, sql) in SCHEMA {
        tracing::debug!("Ensuring schema object {}", name);
        conn.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            sql.to_string(),
        ))
        .await?;
    }
    Ok(())
}

pub fn get_connection() -> &'static DatabaseConnection {
    DB_CONN
        .get()
        .expect("Database connection has not been initialized")
}

/// Глобальное подключение для тестов обработчиков; повторная установка игнорируется
#[cfg(test)]
pub fn set_connection_for_tests(conn: DatabaseConnection) {
    if DB_CONN.set(conn).is_err() {
        tracing::warn!("DB_CONN is already set, keeping the first connection");
    }
}

/// Пустая база в памяти со схемой, для тестов
#[cfg(test)]
pub async fn connect_in_memory() -> DatabaseConnection {
    let conn = connect("sqlite::memory:").await.unwrap();
    ensure_schema(&conn).await.unwrap();
    conn
}
