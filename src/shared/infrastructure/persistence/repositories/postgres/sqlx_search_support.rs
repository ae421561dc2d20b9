use std::collections::HashMap;

use sqlx::{PgConnection, Postgres, QueryBuilder, Row};
use tracing::error;
use uuid::Uuid;

use crate::shared::domain::model::{
    entities::entity::Entity,
    enums::catalog_domain_error::CatalogDomainError,
    errors::load_entity_error::LoadEntityError,
    queries::search_params::{SearchParams, SortDirection},
};

/// Sortable field name paired with the SQL expression used to order by it.
pub type SortColumn = (&'static str, &'static str);

pub fn map_infra_error(error: sqlx::Error) -> CatalogDomainError {
    CatalogDomainError::InfrastructureError(error.to_string())
}

/// Stored rows are re-validated on load; a failure means the persisted state
/// itself is corrupt, not that the caller sent bad input.
pub fn ensure_loadable<E: Entity>(mut entity: E) -> Result<E, CatalogDomainError> {
    if entity.validate(None) {
        return Ok(entity);
    }

    error!(
        entity = E::NAME,
        entity_id = %entity.entity_id(),
        errors = %entity.notification().to_json(),
        "persisted entity failed validation"
    );
    Err(LoadEntityError::new(E::NAME, entity.notification()).into())
}

pub fn like_pattern(value: &str) -> String {
    let escaped = value
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}

pub fn push_order_by<F>(
    builder: &mut QueryBuilder<'_, Postgres>,
    params: &SearchParams<F>,
    sort_columns: &[SortColumn],
    default_expression: &'static str,
) {
    let column = params.sort().and_then(|sort| {
        sort_columns
            .iter()
            .find(|(field, _)| *field == sort)
            .map(|(_, expression)| *expression)
    });

    match column {
        Some(expression) => {
            let direction = params.sort_dir().unwrap_or(SortDirection::Asc);
            builder.push(format!(" ORDER BY {expression} {}", direction.as_sql()));
        }
        None => {
            builder.push(format!(" ORDER BY {default_expression} DESC"));
        }
    }
}

pub fn push_pagination<F>(builder: &mut QueryBuilder<'_, Postgres>, params: &SearchParams<F>) {
    builder
        .push(" LIMIT ")
        .push_bind(i64::try_from(params.per_page()).unwrap_or(i64::MAX))
        .push(" OFFSET ")
        .push_bind(i64::try_from(params.offset()).unwrap_or(i64::MAX));
}

/// Replaces the rows of a junction table owned by `owner_id`, keeping the
/// given order in the `position` column.
pub async fn replace_relation(
    connection: &mut PgConnection,
    table: &'static str,
    owner_column: &'static str,
    target_column: &'static str,
    owner_id: Uuid,
    target_ids: &[Uuid],
) -> Result<(), CatalogDomainError> {
    sqlx::query(&format!("DELETE FROM {table} WHERE {owner_column} = $1"))
        .bind(owner_id)
        .execute(&mut *connection)
        .await
        .map_err(map_infra_error)?;

    if target_ids.is_empty() {
        return Ok(());
    }

    let mut builder: QueryBuilder<'_, Postgres> = QueryBuilder::new(format!(
        "INSERT INTO {table} ({owner_column}, {target_column}, position) "
    ));
    builder.push_values(
        target_ids.iter().enumerate(),
        |mut row, (position, target_id)| {
            row.push_bind(owner_id)
                .push_bind(*target_id)
                .push_bind(position as i32);
        },
    );
    builder
        .build()
        .execute(&mut *connection)
        .await
        .map_err(map_infra_error)?;

    Ok(())
}

pub async fn delete_relation(
    connection: &mut PgConnection,
    table: &'static str,
    owner_column: &'static str,
    owner_id: Uuid,
) -> Result<(), CatalogDomainError> {
    sqlx::query(&format!("DELETE FROM {table} WHERE {owner_column} = $1"))
        .bind(owner_id)
        .execute(&mut *connection)
        .await
        .map_err(map_infra_error)?;
    Ok(())
}

/// Loads junction rows for several owners at once, grouped by owner and in
/// insertion order.
pub async fn load_relation(
    connection: &mut PgConnection,
    table: &'static str,
    owner_column: &'static str,
    target_column: &'static str,
    owner_ids: &[Uuid],
) -> Result<HashMap<Uuid, Vec<Uuid>>, CatalogDomainError> {
    let mut grouped: HashMap<Uuid, Vec<Uuid>> = HashMap::new();
    if owner_ids.is_empty() {
        return Ok(grouped);
    }

    let statement = format!(
        "SELECT {owner_column} AS owner_id, {target_column} AS target_id FROM {table} \
         WHERE {owner_column} = ANY($1) ORDER BY {owner_column}, position"
    );
    let rows = sqlx::query(&statement)
        .bind(owner_ids)
        .fetch_all(&mut *connection)
        .await
        .map_err(map_infra_error)?;

    for row in rows {
        let owner_id: Uuid = row.try_get("owner_id").map_err(map_infra_error)?;
        let target_id: Uuid = row.try_get("target_id").map_err(map_infra_error)?;
        grouped.entry(owner_id).or_default().push(target_id);
    }

    Ok(grouped)
}

pub async fn existing_ids(
    connection: &mut PgConnection,
    table: &'static str,
    id_column: &'static str,
    ids: &[Uuid],
) -> Result<Vec<Uuid>, CatalogDomainError> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }

    let statement = format!("SELECT {id_column} AS id FROM {table} WHERE {id_column} = ANY($1)");
    let rows = sqlx::query(&statement)
        .bind(ids)
        .fetch_all(&mut *connection)
        .await
        .map_err(map_infra_error)?;

    rows.into_iter()
        .map(|row| row.try_get::<Uuid, _>("id").map_err(map_infra_error))
        .collect()
}
