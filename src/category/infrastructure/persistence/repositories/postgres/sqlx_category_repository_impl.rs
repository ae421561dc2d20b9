use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{Postgres, QueryBuilder, Row, postgres::PgRow};
use uuid::Uuid;

use crate::{
    category::{
        domain::model::{
            entities::category::Category,
            queries::list_categories_query::{CATEGORY_SORTABLE_FIELDS, CategoryFilter},
            value_objects::category_id::CategoryId,
        },
        infrastructure::persistence::repositories::category_repository::CategoryRepository,
    },
    shared::{
        domain::model::{
            entities::entity::Entity,
            enums::catalog_domain_error::CatalogDomainError,
            errors::not_found_error::NotFoundError,
            queries::{search_params::SearchParams, search_result::SearchResult},
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

const SELECT_COLUMNS: &str = "SELECT category_id, name, description, is_active, created_at FROM categories";

const SORT_COLUMNS: &[SortColumn] = &[("name", "name COLLATE \"C\""), ("created_at", "created_at")];

pub struct SqlxCategoryRepositoryImpl {
    unit_of_work: Arc<SqlxUnitOfWorkImpl>,
}

impl SqlxCategoryRepositoryImpl {
    pub fn new(unit_of_work: Arc<SqlxUnitOfWorkImpl>) -> Self {
        Self { unit_of_work }
    }

    fn row_to_entity(row: PgRow) -> Result<Category, CatalogDomainError> {
        let category_id: Uuid = row.try_get("category_id").map_err(map_infra_error)?;
        let name: String = row.try_get("name").map_err(map_infra_error)?;
        let description: Option<String> = row.try_get("description").map_err(map_infra_error)?;
        let is_active: bool = row.try_get("is_active").map_err(map_infra_error)?;
        let created_at: DateTime<Utc> = row.try_get("created_at").map_err(map_infra_error)?;

        ensure_loadable(Category::restore(
            CategoryId::from_uuid(category_id),
            name,
            description,
            is_active,
            created_at,
        ))
    }

    fn push_filter(builder: &mut QueryBuilder<'_, Postgres>, filter: Option<&CategoryFilter>) {
        if let Some(name) = filter {
            builder.push(" WHERE name ILIKE ").push_bind(like_pattern(name));
        }
    }
}

#[async_trait]
impl Repository<Category> for SqlxCategoryRepositoryImpl {
    async fn insert(&self, category: &Category) -> Result<(), CatalogDomainError> {
        self.bulk_insert(std::slice::from_ref(category)).await
    }

    async fn bulk_insert(&self, categories: &[Category]) -> Result<(), CatalogDomainError> {
        if categories.is_empty() {
            return Ok(());
        }

        let mut builder: QueryBuilder<'_, Postgres> = QueryBuilder::new(
            "INSERT INTO categories (category_id, name, description, is_active, created_at) ",
        );
        builder.push_values(categories, |mut row, category| {
            row.push_bind(category.category_id().value())
                .push_bind(category.name().to_string())
                .push_bind(category.description().map(str::to_string))
                .push_bind(category.is_active())
                .push_bind(category.created_at());
        });

        let mut connection = self.unit_of_work.connection().await?;
        builder
            .build()
            .execute(&mut *connection)
            .await
            .map_err(map_infra_error)?;

        Ok(())
    }

    async fn update(&self, category: &Category) -> Result<(), CatalogDomainError> {
        let statement = r#"
            UPDATE categories
            SET name = $2, description = $3, is_active = $4
            WHERE category_id = $1
        "#;

        let mut connection = self.unit_of_work.connection().await?;
        let result = sqlx::query(statement)
            .bind(category.category_id().value())
            .bind(category.name())
            .bind(category.description())
            .bind(category.is_active())
            .execute(&mut *connection)
            .await
            .map_err(map_infra_error)?;

        if result.rows_affected() == 0 {
            return Err(NotFoundError::new(category.category_id(), Category::NAME).into());
        }
        Ok(())
    }

    async fn delete(&self, category_id: &CategoryId) -> Result<(), CatalogDomainError> {
        let mut connection = self.unit_of_work.connection().await?;
        let result = sqlx::query("DELETE FROM categories WHERE category_id = $1")
            .bind(category_id.value())
            .execute(&mut *connection)
            .await
            .map_err(map_infra_error)?;

        if result.rows_affected() == 0 {
            return Err(NotFoundError::new(category_id, Category::NAME).into());
        }
        Ok(())
    }

    async fn find_by_id(
        &self,
        category_id: &CategoryId,
    ) -> Result<Option<Category>, CatalogDomainError> {
        let mut connection = self.unit_of_work.connection().await?;
        let maybe_row = sqlx::query(&format!("{SELECT_COLUMNS} WHERE category_id = $1"))
            .bind(category_id.value())
            .fetch_optional(&mut *connection)
            .await
            .map_err(map_infra_error)?;

        maybe_row.map(Self::row_to_entity).transpose()
    }

    async fn find_all(&self) -> Result<Vec<Category>, CatalogDomainError> {
        let mut connection = self.unit_of_work.connection().await?;
        let rows = sqlx::query(&format!("{SELECT_COLUMNS} ORDER BY created_at DESC"))
            .fetch_all(&mut *connection)
            .await
            .map_err(map_infra_error)?;

        rows.into_iter().map(Self::row_to_entity).collect()
    }

    async fn find_by_ids(&self, ids: &[CategoryId]) -> Result<Vec<Category>, CatalogDomainError> {
        let raw_ids = ids.iter().map(EntityId::value).collect::<Vec<_>>();
        let mut connection = self.unit_of_work.connection().await?;
        let rows = sqlx::query(&format!("{SELECT_COLUMNS} WHERE category_id = ANY($1)"))
            .bind(&raw_ids)
            .fetch_all(&mut *connection)
            .await
            .map_err(map_infra_error)?;

        rows.into_iter().map(Self::row_to_entity).collect()
    }

    async fn exists_by_id(
        &self,
        ids: &[CategoryId],
    ) -> Result<ExistsByIdResult<CategoryId>, CatalogDomainError> {
        let raw_ids = ids.iter().map(EntityId::value).collect::<Vec<_>>();
        let mut connection = self.unit_of_work.connection().await?;
        let found = existing_ids(&mut connection, "categories", "category_id", &raw_ids).await?;

        let (exists, not_exists): (Vec<_>, Vec<_>) = ids
            .iter()
            .copied()
            .partition(|id| found.contains(&id.value()));
        Ok(ExistsByIdResult { exists, not_exists })
    }
}

#[async_trait]
impl SearchableRepository<Category, CategoryFilter> for SqlxCategoryRepositoryImpl {
    fn sortable_fields(&self) -> &'static [&'static str] {
        CATEGORY_SORTABLE_FIELDS
    }

    async fn search(
        &self,
        params: &SearchParams<CategoryFilter>,
    ) -> Result<SearchResult<Category>, CatalogDomainError> {
        let mut count_builder: QueryBuilder<'_, Postgres> =
            QueryBuilder::new("SELECT COUNT(*) AS total FROM categories");
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

impl CategoryRepository for SqlxCategoryRepositoryImpl {}
