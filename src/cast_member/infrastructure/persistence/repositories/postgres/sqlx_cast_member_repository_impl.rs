use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{Postgres, QueryBuilder, Row, postgres::PgRow};
use tracing::error;
use uuid::Uuid;

use crate::{
    cast_member::{
        domain::model::{
            entities::cast_member::CastMember,
            enums::cast_member_type::CastMemberType,
            queries::list_cast_members_query::{CAST_MEMBER_SORTABLE_FIELDS, CastMemberFilter},
            value_objects::cast_member_id::CastMemberId,
        },
        infrastructure::persistence::repositories::cast_member_repository::CastMemberRepository,
    },
    shared::{
        domain::model::{
            either::Either,
            entities::entity::Entity,
            enums::catalog_domain_error::CatalogDomainError,
            errors::{load_entity_error::LoadEntityError, not_found_error::NotFoundError},
            queries::{search_params::SearchParams, search_result::SearchResult},
            validation::notification::Notification,
            value_objects::entity_id::EntityId,
        },
        infrastructure::persistence::repositories::{
            postgres::{
                sqlx_search_support::{
                    SortColumn, ensure_loadable, existing_ids, like_pattern, map_infra_error,
                    push_order_by, push_pagination,
                },
                sqlx_unit_of_work_impl::SqlxUnitOfWorkImpl,
            },
            searchable_repository::{ExistsByIdResult, Repository, SearchableRepository},
        },
    },
};

const SELECT_COLUMNS: &str =
    "SELECT cast_member_id, name, cast_member_type, created_at FROM cast_members";

const SORT_COLUMNS: &[SortColumn] = &[("name", "name COLLATE \"C\""), ("created_at", "created_at")];

pub struct SqlxCastMemberRepositoryImpl {
    unit_of_work: Arc<SqlxUnitOfWorkImpl>,
}

impl SqlxCastMemberRepositoryImpl {
    pub fn new(unit_of_work: Arc<SqlxUnitOfWorkImpl>) -> Self {
        Self { unit_of_work }
    }

    fn row_to_entity(row: PgRow) -> Result<CastMember, CatalogDomainError> {
        let cast_member_id: Uuid = row.try_get("cast_member_id").map_err(map_infra_error)?;
        let name: String = row.try_get("name").map_err(map_infra_error)?;
        let raw_type: i32 = row.try_get("cast_member_type").map_err(map_infra_error)?;
        let created_at: DateTime<Utc> = row.try_get("created_at").map_err(map_infra_error)?;

        let cast_member_type = match CastMemberType::create(raw_type) {
            Either::Ok(cast_member_type) => cast_member_type,
            Either::Fail(type_error) => {
                let mut notification = Notification::new();
                notification.add_error(type_error.to_string(), Some("type"));
                error!(
                    entity = CastMember::NAME,
                    entity_id = %cast_member_id,
                    error = %type_error,
                    "persisted cast member has an unknown type"
                );
                return Err(LoadEntityError::new(CastMember::NAME, &notification).into());
            }
        };

        ensure_loadable(CastMember::restore(
            CastMemberId::from_uuid(cast_member_id),
            name,
            cast_member_type,
            created_at,
        ))
    }

    fn push_filter(builder: &mut QueryBuilder<'_, Postgres>, filter: Option<&CastMemberFilter>) {
        let Some(filter) = filter else {
            return;
        };

        let mut separator = " WHERE ";
        if let Some(name) = &filter.name {
            builder
                .push(separator)
                .push("name ILIKE ")
                .push_bind(like_pattern(name));
            separator = " AND ";
        }
        if let Some(cast_member_type) = filter.cast_member_type {
            builder
                .push(separator)
                .push("cast_member_type = ")
                .push_bind(cast_member_type.value());
        }
    }
}

#[async_trait]
impl Repository<CastMember> for SqlxCastMemberRepositoryImpl {
    async fn insert(&self, cast_member: &CastMember) -> Result<(), CatalogDomainError> {
        self.bulk_insert(std::slice::from_ref(cast_member)).await
    }

    async fn bulk_insert(&self, cast_members: &[CastMember]) -> Result<(), CatalogDomainError> {
        if cast_members.is_empty() {
            return Ok(());
        }

        let mut builder: QueryBuilder<'_, Postgres> = QueryBuilder::new(
            "INSERT INTO cast_members (cast_member_id, name, cast_member_type, created_at) ",
        );
        builder.push_values(cast_members, |mut row, cast_member| {
            row.push_bind(cast_member.cast_member_id().value())
                .push_bind(cast_member.name().to_string())
                .push_bind(cast_member.cast_member_type().value())
                .push_bind(cast_member.created_at());
        });

        let mut connection = self.unit_of_work.connection().await?;
        builder
            .build()
            .execute(&mut *connection)
            .await
            .map_err(map_infra_error)?;

        Ok(())
    }

    async fn update(&self, cast_member: &CastMember) -> Result<(), CatalogDomainError> {
        let mut connection = self.unit_of_work.connection().await?;
        let result = sqlx::query(
            "UPDATE cast_members SET name = $2, cast_member_type = $3 WHERE cast_member_id = $1",
        )
        .bind(cast_member.cast_member_id().value())
        .bind(cast_member.name())
        .bind(cast_member.cast_member_type().value())
        .execute(&mut *connection)
        .await
        .map_err(map_infra_error)?;

        if result.rows_affected() == 0 {
            return Err(NotFoundError::new(cast_member.cast_member_id(), CastMember::NAME).into());
        }
        Ok(())
    }

    async fn delete(&self, cast_member_id: &CastMemberId) -> Result<(), CatalogDomainError> {
        let mut connection = self.unit_of_work.connection().await?;
        let result = sqlx::query("DELETE FROM cast_members WHERE cast_member_id = $1")
            .bind(cast_member_id.value())
            .execute(&mut *connection)
            .await
            .map_err(map_infra_error)?;

        if result.rows_affected() == 0 {
            return Err(NotFoundError::new(cast_member_id, CastMember::NAME).into());
        }
        Ok(())
    }

    async fn find_by_id(
        &self,
        cast_member_id: &CastMemberId,
    ) -> Result<Option<CastMember>, CatalogDomainError> {
        let mut connection = self.unit_of_work.connection().await?;
        let maybe_row = sqlx::query(&format!("{SELECT_COLUMNS} WHERE cast_member_id = $1"))
            .bind(cast_member_id.value())
            .fetch_optional(&mut *connection)
            .await
            .map_err(map_infra_error)?;

        maybe_row.map(Self::row_to_entity).transpose()
    }

    async fn find_all(&self) -> Result<Vec<CastMember>, CatalogDomainError> {
        let mut connection = self.unit_of_work.connection().await?;
        let rows = sqlx::query(&format!("{SELECT_COLUMNS} ORDER BY created_at DESC"))
            .fetch_all(&mut *connection)
            .await
            .map_err(map_infra_error)?;

        rows.into_iter().map(Self::row_to_entity).collect()
    }

    async fn find_by_ids(
        &self,
        ids: &[CastMemberId],
    ) -> Result<Vec<CastMember>, CatalogDomainError> {
        let raw_ids = ids.iter().map(EntityId::value).collect::<Vec<_>>();
        let mut connection = self.unit_of_work.connection().await?;
        let rows = sqlx::query(&format!("{SELECT_COLUMNS} WHERE cast_member_id = ANY($1)"))
            .bind(&raw_ids)
            .fetch_all(&mut *connection)
            .await
            .map_err(map_infra_error)?;

        rows.into_iter().map(Self::row_to_entity).collect()
    }

    async fn exists_by_id(
        &self,
        ids: &[CastMemberId],
    ) -> Result<ExistsByIdResult<CastMemberId>, CatalogDomainError> {
        let raw_ids = ids.iter().map(EntityId::value).collect::<Vec<_>>();
        let mut connection = self.unit_of_work.connection().await?;
        let found =
            existing_ids(&mut connection, "cast_members", "cast_member_id", &raw_ids).await?;

        let (exists, not_exists): (Vec<_>, Vec<_>) = ids
            .iter()
            .copied()
            .partition(|id| found.contains(&id.value()));
        Ok(ExistsByIdResult { exists, not_exists })
    }
}

#[async_trait]
impl SearchableRepository<CastMember, CastMemberFilter> for SqlxCastMemberRepositoryImpl {
    fn sortable_fields(&self) -> &'static [&'static str] {
        CAST_MEMBER_SORTABLE_FIELDS
    }

    async fn search(
        &self,
        params: &SearchParams<CastMemberFilter>,
    ) -> Result<SearchResult<CastMember>, CatalogDomainError> {
        let mut count_builder: QueryBuilder<'_, Postgres> =
            QueryBuilder::new("SELECT COUNT(*) AS total FROM cast_members");
        Self::push_filter(&mut count_builder, params.filter());

        let mut select_builder: QueryBuilder<'_, Postgres> = QueryBuilder::new(SELECT_COLUMNS);
        Self::push_filter(&mut select_builder, params.filter());
        push_order_by(&mut select_builder, params, SORT_COLUMNS, "created_at");
        push_pagination(&mut select_builder, params);

        let mut connection = self.unit_of_work.connection().await?;
        let total: i64 = count_builder
            .build()
            .fetch_one(&mut *connection)
            .await
            .and_then(|row| row.try_get("total"))
            .map_err(map_infra_error)?;
        let rows = select_builder
            .build()
            .fetch_all(&mut *connection)
            .await
            .map_err(map_infra_error)?;

        let items = rows
            .into_iter()
            .map(Self::row_to_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(SearchResult::new(
            items,
            total as u64,
            params.page(),
            params.per_page(),
        ))
    }
}

impl CastMemberRepository for SqlxCastMemberRepositoryImpl {}
