use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgConnection, Postgres, QueryBuilder, Row, postgres::PgRow};
use tracing::error;
use uuid::Uuid;

use crate::{
    cast_member::domain::model::value_objects::cast_member_id::CastMemberId,
    category::domain::model::value_objects::category_id::CategoryId,
    genre::domain::model::value_objects::genre_id::GenreId,
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
                    SortColumn, delete_relation, ensure_loadable, existing_ids, like_pattern,
                    load_relation, map_infra_error, push_order_by, push_pagination,
                    replace_relation,
                },
                sqlx_unit_of_work_impl::SqlxUnitOfWorkImpl,
            },
            searchable_repository::{ExistsByIdResult, Repository, SearchableRepository},
        },
    },
    video::{
        domain::model::{
            entities::video::{Video, VideoSnapshot},
            enums::rating::Rating,
            queries::list_videos_query::{VIDEO_SORTABLE_FIELDS, VideoFilter},
            value_objects::video_id::VideoId,
        },
        infrastructure::persistence::repositories::video_repository::VideoRepository,
    },
};

const SELECT_COLUMNS: &str = "SELECT video_id, title, description, year_launched, duration, \
     rating, is_opened, is_published, created_at FROM videos";

const SORT_COLUMNS: &[SortColumn] = &[
    ("title", "title COLLATE \"C\""),
    ("created_at", "created_at"),
];

/// Junction table keyed by `video_id`.
struct Relation {
    table: &'static str,
    target_column: &'static str,
}

const VIDEO_CATEGORIES: Relation = Relation {
    table: "video_categories",
    target_column: "category_id",
};

const VIDEO_GENRES: Relation = Relation {
    table: "video_genres",
    target_column: "genre_id",
};

const VIDEO_CAST_MEMBERS: Relation = Relation {
    table: "video_cast_members",
    target_column: "cast_member_id",
};

struct VideoRow {
    video_id: Uuid,
    title: String,
    description: String,
    year_launched: i32,
    duration: i32,
    rating: String,
    is_opened: bool,
    is_published: bool,
    created_at: DateTime<Utc>,
}

pub struct SqlxVideoRepositoryImpl {
    unit_of_work: Arc<SqlxUnitOfWorkImpl>,
}

impl SqlxVideoRepositoryImpl {
    pub fn new(unit_of_work: Arc<SqlxUnitOfWorkImpl>) -> Self {
        Self { unit_of_work }
    }

    fn read_row(row: PgRow) -> Result<VideoRow, CatalogDomainError> {
        Ok(VideoRow {
            video_id: row.try_get("video_id").map_err(map_infra_error)?,
            title: row.try_get("title").map_err(map_infra_error)?,
            description: row.try_get("description").map_err(map_infra_error)?,
            year_launched: row.try_get("year_launched").map_err(map_infra_error)?,
            duration: row.try_get("duration").map_err(map_infra_error)?,
            rating: row.try_get("rating").map_err(map_infra_error)?,
            is_opened: row.try_get("is_opened").map_err(map_infra_error)?,
            is_published: row.try_get("is_published").map_err(map_infra_error)?,
            created_at: row.try_get("created_at").map_err(map_infra_error)?,
        })
    }

    fn restore_rating(video_id: Uuid, raw: &str) -> Result<Rating, CatalogDomainError> {
        match Rating::create(raw) {
            Either::Ok(rating) => Ok(rating),
            Either::Fail(rating_error) => {
                let mut notification = Notification::new();
                notification.add_error(rating_error.to_string(), Some("rating"));
                error!(
                    entity = Video::NAME,
                    entity_id = %video_id,
                    error = %rating_error,
                    "persisted video has an unknown rating"
                );
                Err(LoadEntityError::new(Video::NAME, &notification).into())
            }
        }
    }

    async fn hydrate(
        connection: &mut PgConnection,
        rows: Vec<PgRow>,
    ) -> Result<Vec<Video>, CatalogDomainError> {
        let rows = rows
            .into_iter()
            .map(Self::read_row)
            .collect::<Result<Vec<_>, _>>()?;
        let video_ids = rows.iter().map(|row| row.video_id).collect::<Vec<_>>();

        let mut categories = load_relation(
            &mut *connection,
            VIDEO_CATEGORIES.table,
            "video_id",
            VIDEO_CATEGORIES.target_column,
            &video_ids,
        )
        .await?;
        let mut genres = load_relation(
            &mut *connection,
            VIDEO_GENRES.table,
            "video_id",
            VIDEO_GENRES.target_column,
            &video_ids,
        )
        .await?;
        let mut cast_members = load_relation(
            &mut *connection,
            VIDEO_CAST_MEMBERS.table,
            "video_id",
            VIDEO_CAST_MEMBERS.target_column,
            &video_ids,
        )
        .await?;

        rows.into_iter()
            .map(|row| {
                let rating = Self::restore_rating(row.video_id, &row.rating)?;
                let categories_id = categories.remove(&row.video_id).unwrap_or_default();
                let genres_id = genres.remove(&row.video_id).unwrap_or_default();
                let cast_members_id = cast_members.remove(&row.video_id).unwrap_or_default();

                ensure_loadable(Video::restore(VideoSnapshot {
                    video_id: VideoId::from_uuid(row.video_id),
                    title: row.title,
                    description: row.description,
                    year_launched: row.year_launched,
                    duration: row.duration,
                    rating,
                    is_opened: row.is_opened,
                    is_published: row.is_published,
                    categories_id: categories_id.into_iter().map(CategoryId::from_uuid).collect(),
                    genres_id: genres_id.into_iter().map(GenreId::from_uuid).collect(),
                    cast_members_id: cast_members_id
                        .into_iter()
                        .map(CastMemberId::from_uuid)
                        .collect(),
                    created_at: row.created_at,
                }))
            })
            .collect()
    }

    async fn write_relations(
        connection: &mut PgConnection,
        video: &Video,
    ) -> Result<(), CatalogDomainError> {
        let video_id = video.video_id().value();
        let targets: [(Relation, Vec<Uuid>); 3] = [
            (VIDEO_CATEGORIES, uuids(video.categories_id())),
            (VIDEO_GENRES, uuids(video.genres_id())),
            (VIDEO_CAST_MEMBERS, uuids(video.cast_members_id())),
        ];

        for (relation, target_ids) in targets {
            replace_relation(
                &mut *connection,
                relation.table,
                "video_id",
                relation.target_column,
                video_id,
                &target_ids,
            )
            .await?;
        }
        Ok(())
    }

    fn push_filter(builder: &mut QueryBuilder<'_, Postgres>, filter: Option<&VideoFilter>) {
        let Some(filter) = filter else {
            return;
        };

        let mut separator = " WHERE ";
        if let Some(title) = &filter.title {
            builder
                .push(separator)
                .push("title ILIKE ")
                .push_bind(like_pattern(title));
            separator = " AND ";
        }

        let criteria = [
            (VIDEO_CATEGORIES, filter.categories_id.as_deref().map(uuids)),
            (VIDEO_GENRES, filter.genres_id.as_deref().map(uuids)),
            (
                VIDEO_CAST_MEMBERS,
                filter.cast_members_id.as_deref().map(uuids),
            ),
        ];
        for (relation, ids) in criteria {
            let Some(ids) = ids else {
                continue;
            };
            builder
                .push(separator)
                .push(format!(
                    "video_id IN (SELECT video_id FROM {} WHERE {} = ANY(",
                    relation.table, relation.target_column
                ))
                .push_bind(ids)
                .push("))");
            separator = " AND ";
        }
    }
}

fn uuids<I: EntityId>(ids: &[I]) -> Vec<Uuid> {
    ids.iter().map(EntityId::value).collect()
}

#[async_trait]
impl Repository<Video> for SqlxVideoRepositoryImpl {
    async fn insert(&self, video: &Video) -> Result<(), CatalogDomainError> {
        self.bulk_insert(std::slice::from_ref(video)).await
    }

    async fn bulk_insert(&self, videos: &[Video]) -> Result<(), CatalogDomainError> {
        if videos.is_empty() {
            return Ok(());
        }

        let mut builder: QueryBuilder<'_, Postgres> = QueryBuilder::new(
            "INSERT INTO videos (video_id, title, description, year_launched, duration, rating, \
             is_opened, is_published, created_at) ",
        );
        builder.push_values(videos, |mut row, video| {
            row.push_bind(video.video_id().value())
                .push_bind(video.title().to_string())
                .push_bind(video.description().to_string())
                .push_bind(video.year_launched())
                .push_bind(video.duration())
                .push_bind(video.rating().as_str())
                .push_bind(video.is_opened())
                .push_bind(video.is_published())
                .push_bind(video.created_at());
        });

        let mut connection = self.unit_of_work.connection().await?;
        builder
            .build()
            .execute(&mut *connection)
            .await
            .map_err(map_infra_error)?;

        for video in videos {
            Self::write_relations(&mut connection, video).await?;
        }
        Ok(())
    }

    async fn update(&self, video: &Video) -> Result<(), CatalogDomainError> {
        let statement = r#"
            UPDATE videos
            SET title = $2, description = $3, year_launched = $4, duration = $5,
                rating = $6, is_opened = $7, is_published = $8
            WHERE video_id = $1
        "#;

        let mut connection = self.unit_of_work.connection().await?;
        let result = sqlx::query(statement)
            .bind(video.video_id().value())
            .bind(video.title())
            .bind(video.description())
            .bind(video.year_launched())
            .bind(video.duration())
            .bind(video.rating().as_str())
            .bind(video.is_opened())
            .bind(video.is_published())
            .execute(&mut *connection)
            .await
            .map_err(map_infra_error)?;

        if result.rows_affected() == 0 {
            return Err(NotFoundError::new(video.video_id(), Video::NAME).into());
        }

        Self::write_relations(&mut connection, video).await
    }

    async fn delete(&self, video_id: &VideoId) -> Result<(), CatalogDomainError> {
        let mut connection = self.unit_of_work.connection().await?;
        for relation in [VIDEO_CATEGORIES, VIDEO_GENRES, VIDEO_CAST_MEMBERS] {
            delete_relation(&mut connection, relation.table, "video_id", video_id.value()).await?;
        }

        let result = sqlx::query("DELETE FROM videos WHERE video_id = $1")
            .bind(video_id.value())
            .execute(&mut *connection)
            .await
            .map_err(map_infra_error)?;

        if result.rows_affected() == 0 {
            return Err(NotFoundError::new(video_id, Video::NAME).into());
        }
        Ok(())
    }

    async fn find_by_id(&self, video_id: &VideoId) -> Result<Option<Video>, CatalogDomainError> {
        let mut connection = self.unit_of_work.connection().await?;
        let rows = sqlx::query(&format!("{SELECT_COLUMNS} WHERE video_id = $1"))
            .bind(video_id.value())
            .fetch_all(&mut *connection)
            .await
            .map_err(map_infra_error)?;

        Ok(Self::hydrate(&mut connection, rows).await?.into_iter().next())
    }

    async fn find_all(&self) -> Result<Vec<Video>, CatalogDomainError> {
        let mut connection = self.unit_of_work.connection().await?;
        let rows = sqlx::query(&format!("{SELECT_COLUMNS} ORDER BY created_at DESC"))
            .fetch_all(&mut *connection)
            .await
            .map_err(map_infra_error)?;

        Self::hydrate(&mut connection, rows).await
    }

    async fn find_by_ids(&self, ids: &[VideoId]) -> Result<Vec<Video>, CatalogDomainError> {
        let raw_ids = uuids(ids);
        let mut connection = self.unit_of_work.connection().await?;
        let rows = sqlx::query(&format!("{SELECT_COLUMNS} WHERE video_id = ANY($1)"))
            .bind(&raw_ids)
            .fetch_all(&mut *connection)
            .await
            .map_err(map_infra_error)?;

        Self::hydrate(&mut connection, rows).await
    }

    async fn exists_by_id(
        &self,
        ids: &[VideoId],
    ) -> Result<ExistsByIdResult<VideoId>, CatalogDomainError> {
        let raw_ids = uuids(ids);
        let mut connection = self.unit_of_work.connection().await?;
        let found = existing_ids(&mut connection, "videos", "video_id", &raw_ids).await?;

        let (exists, not_exists): (Vec<_>, Vec<_>) = ids
            .iter()
            .copied()
            .partition(|id| found.contains(&id.value()));
        Ok(ExistsByIdResult { exists, not_exists })
    }
}

#[async_trait]
impl SearchableRepository<Video, VideoFilter> for SqlxVideoRepositoryImpl {
    fn sortable_fields(&self) -> &'static [&'static str] {
        VIDEO_SORTABLE_FIELDS
    }

    async fn search(
        &self,
        params: &SearchParams<VideoFilter>,
    ) -> Result<SearchResult<Video>, CatalogDomainError> {
        let mut count_builder: QueryBuilder<'_, Postgres> =
            QueryBuilder::new("SELECT COUNT(*) AS total FROM videos");
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

impl VideoRepository for SqlxVideoRepositoryImpl {}
