use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgConnection, Postgres, QueryBuilder, Row, postgres::PgRow};
use uuid::Uuid;

use crate::{
    category::domain::model::value_objects::category_id::CategoryId,
    genre::{
        domain::model::{
            entities::genre::Genre,
            queries::list_genres_query::{GENRE_SORTABLE_FIELDS, GenreFilter},
            value_objects::genre_id::GenreId,
        },
        infrastructure::persistence::repositories::genre_repository::GenreRepository,
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
                    SortColumn, delete_relation, ensure_loadable, existing_ids, like_pattern,
                    load_relation, map_infra_error, push_order_by, push_pagination,
                    replace_relation,
                },
                sqlx_unit_of_work_impl::SqlxUnitOfWorkImpl,
            },
            searchable_repository::{ExistsByIdResult, Repository, SearchableRepository},
        },
    },
};

const SELECT_COLUMNS: &str = "SELECT genre_id, name, is_active, created_at FROM genres";

const SORT_COLUMNS: &[SortColumn] = &[("name", "name COLLATE \"C\""), ("created_at", "created_at")];

const GENRE_CATEGORIES: &str = "genre_categories";

struct GenreRow {
    genre_id: Uuid,
    name: String,
    is_active: bool,
    created_at: DateTime<Utc>,
}

pub struct SqlxGenreRepositoryImpl {
    unit_of_work: Arc<SqlxUnitOfWorkImpl>,
}

impl SqlxGenreRepositoryImpl {
    pub fn new(unit_of_work: Arc<SqlxUnitOfWorkImpl>) -> Self {
        Self { unit_of_work }
    }

    fn read_row(row: PgRow) -> Result<GenreRow, CatalogDomainError> {
        Ok(GenreRow {
            genre_id: row.try_get("genre_id").map_err(map_infra_error)?,
            name: row.try_get("name").map_err(map_infra_error)?,
            is_active: row.try_get("is_active").map_err(map_infra_error)?,
            created_at: row.try_get("created_at").map_err(map_infra_error)?,
        })
    }

    /// Attaches each genre's categories, loaded in a single query.
    async fn hydrate(
        connection: &mut PgConnection,
        rows: Vec<PgRow>,
    ) -> Result<Vec<Genre>, CatalogDomainError> {
        let rows = rows
            .into_iter()
            .map(Self::read_row)
            .collect::<Result<Vec<_>, _>>()?;
        let genre_ids = rows.iter().map(|row| row.genre_id).collect::<Vec<_>>();
        let mut categories = load_relation(
            connection,
            GENRE_CATEGORIES,
            "genre_id",
            "category_id",
            &genre_ids,
        )
        .await?;

        rows.into_iter()
            .map(|row| {
                let categories_id = categories
                    .remove(&row.genre_id)
                    .unwrap_or_default()
                    .into_iter()
                    .map(CategoryId::from_uuid)
                    .collect();
                ensure_loadable(Genre::restore(
                    GenreId::from_uuid(row.genre_id),
                    row.name,
                    categories_id,
                    row.is_active,
                    row.created_at,
                ))
            })
            .collect()
    }

    fn category_uuids(genre: &Genre) -> Vec<Uuid> {
        genre.categories_id().iter().map(EntityId::value).collect()
    }

    fn push_filter(builder: &mut QueryBuilder<'_, Postgres>, filter: Option<&GenreFilter>) {
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
        if let Some(categories_id) = &filter.categories_id {
            let raw_ids = categories_id.iter().map(EntityId::value).collect::<Vec<_>>();
            builder
                .push(separator)
                .push("genre_id IN (SELECT genre_id FROM genre_categories WHERE category_id = ANY(")
                .push_bind(raw_ids)
                .push("))");
        }
    }
}

#[async_trait]
impl Repository<Genre> for SqlxGenreRepositoryImpl {
    async fn insert(&self, genre: &Genre) -> Result<(), CatalogDomainError> {
        self.bulk_insert(std::slice::from_ref(genre)).await
    }

    async fn bulk_insert(&self, genres: &[Genre]) -> Result<(), CatalogDomainError> {
        if genres.is_empty() {
            return Ok(());
        }

        let mut builder: QueryBuilder<'_, Postgres> =
            QueryBuilder::new("INSERT INTO genres (genre_id, name, is_active, created_at) ");
        builder.push_values(genres, |mut row, genre| {
            row.push_bind(genre.genre_id().value())
                .push_bind(genre.name().to_string())
                .push_bind(genre.is_active())
                .push_bind(genre.created_at());
        });

        let mut connection = self.unit_of_work.connection().await?;
        builder
            .build()
            .execute(&mut *connection)
            .await
            .map_err(map_infra_error)?;

        for genre in genres {
            replace_relation(
                &mut connection,
                GENRE_CATEGORIES,
                "genre_id",
                "category_id",
                genre.genre_id().value(),
                &Self::category_uuids(genre),
            )
            .await?;
        }

        Ok(())
    }

    async fn update(&self, genre: &Genre) -> Result<(), CatalogDomainError> {
        let mut connection = self.unit_of_work.connection().await?;
        let result = sqlx::query("UPDATE genres SET name = $2, is_active = $3 WHERE genre_id = $1")
            .bind(genre.genre_id().value())
            .bind(genre.name())
            .bind(genre.is_active())
            .execute(&mut *connection)
            .await
            .map_err(map_infra_error)?;

        if result.rows_affected() == 0 {
            return Err(NotFoundError::new(genre.genre_id(), Genre::NAME).into());
        }

        replace_relation(
            &mut connection,
            GENRE_CATEGORIES,
            "genre_id",
            "category_id",
            genre.genre_id().value(),
            &Self::category_uuids(genre),
        )
        .await
    }

    async fn delete(&self, genre_id: &GenreId) -> Result<(), CatalogDomainError> {
        let mut connection = self.unit_of_work.connection().await?;
        delete_relation(&mut connection, GENRE_CATEGORIES, "genre_id", genre_id.value()).await?;

        let result = sqlx::query("DELETE FROM genres WHERE genre_id = $1")
            .bind(genre_id.value())
            .execute(&mut *connection)
            .await
            .map_err(map_infra_error)?;

        if result.rows_affected() == 0 {
            return Err(NotFoundError::new(genre_id, Genre::NAME).into());
        }
        Ok(())
    }

    async fn find_by_id(&self, genre_id: &GenreId) -> Result<Option<Genre>, CatalogDomainError> {
        let mut connection = self.unit_of_work.connection().await?;
        let rows = sqlx::query(&format!("{SELECT_COLUMNS} WHERE genre_id = $1"))
            .bind(genre_id.value())
            .fetch_all(&mut *connection)
            .await
            .map_err(map_infra_error)?;

        Ok(Self::hydrate(&mut connection, rows).await?.into_iter().next())
    }

    async fn find_all(&self) -> Result<Vec<Genre>, CatalogDomainError> {
        let mut connection = self.unit_of_work.connection().await?;
        let rows = sqlx::query(&format!("{SELECT_COLUMNS} ORDER BY created_at DESC"))
            .fetch_all(&mut *connection)
            .await
            .map_err(map_infra_error)?;

        Self::hydrate(&mut connection, rows).await
    }

    async fn find_by_ids(&self, ids: &[GenreId]) -> Result<Vec<Genre>, CatalogDomainError> {
        let raw_ids = ids.iter().map(EntityId::value).collect::<Vec<_>>();
        let mut connection = self.unit_of_work.connection().await?;
        let rows = sqlx::query(&format!("{SELECT_COLUMNS} WHERE genre_id = ANY($1)"))
            .bind(&raw_ids)
            .fetch_all(&mut *connection)
            .await
            .map_err(map_infra_error)?;

        Self::hydrate(&mut connection, rows).await
    }

    async fn exists_by_id(
        &self,
        ids: &[GenreId],
    ) -> Result<ExistsByIdResult<GenreId>, CatalogDomainError> {
        let raw_ids = ids.iter().map(EntityId::value).collect::<Vec<_>>();
        let mut connection = self.unit_of_work.connection().await?;
        let found = existing_ids(&mut connection, "genres", "genre_id", &raw_ids).await?;

        let (exists, not_exists): (Vec<_>, Vec<_>) = ids
            .iter()
            .copied()
            .partition(|id| found.contains(&id.value()));
        Ok(ExistsByIdResult { exists, not_exists })
    }
}

#[async_trait]
impl SearchableRepository<Genre, GenreFilter> for SqlxGenreRepositoryImpl {
    fn sortable_fields(&self) -> &'static [&'static str] {
        GENRE_SORTABLE_FIELDS
    }

    async fn search(
        &self,
        params: &SearchParams<GenreFilter>,
    ) -> Result<SearchResult<Genre>, CatalogDomainError> {
        let mut count_builder: QueryBuilder<'_, Postgres> =
            QueryBuilder::new("SELECT COUNT(*) AS total FROM genres");
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
        let items = Self::hydrate(&mut connection, rows).await?;

        Ok(SearchResult::new(
            items,
            total as u64,
            params.page(),
            params.per_page(),
        ))
    }
}

impl GenreRepository for SqlxGenreRepositoryImpl {}
