mod common;

use migration::{count_applied_migrations, get_latest_migration_version, migrate, MigrationCommand};
use tour_backend::config::db::{DbKind, RuntimeEnv};
use tour_backend::connect_db;

#[actix_web::test]
async fn up_down_and_fresh_on_sqlite() {
    let db = connect_db(RuntimeEnv::Test, DbKind::SqliteMemory)
        .await
        .expect("connect");

    assert_eq!(count_applied_migrations(&db).await.unwrap(), 0);
    assert_eq!(get_latest_migration_version(&db).await.unwrap(), None);

    migrate(&db, MigrationCommand::Up).await.unwrap();
    assert_eq!(count_applied_migrations(&db).await.unwrap(), 1);
    let version = get_latest_migration_version(&db).await.unwrap().unwrap();
    assert!(version.ends_with("_init"));

    migrate(&db, MigrationCommand::Down).await.unwrap();
    assert_eq!(count_applied_migrations(&db).await.unwrap(), 0);

    migrate(&db, MigrationCommand::Fresh).await.unwrap();
    assert_eq!(count_applied_migrations(&db).await.unwrap(), 1);
}
