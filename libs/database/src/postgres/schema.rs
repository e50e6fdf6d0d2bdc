use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, EntityTrait, Schema};
use tracing::info;

/// Create the table backing an entity if it does not exist yet.
///
/// Derives a `CREATE TABLE IF NOT EXISTS` statement from the entity
/// definition and executes it. Idempotent, so apps call it on every startup
/// instead of maintaining a migration history.
///
/// # Example
/// ```ignore
/// use database::postgres::create_table_if_not_exists;
///
/// create_table_if_not_exists(&db, my_domain::entity::Entity).await?;
/// ```
pub async fn create_table_if_not_exists<E: EntityTrait>(
    db: &DatabaseConnection,
    entity: E,
) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    let mut stmt = schema.create_table_from_entity(entity);
    stmt.if_not_exists();

    db.execute_raw(backend.build(&stmt)).await?;

    info!(table = %entity.table_name(), "Ensured table exists");
    Ok(())
}
