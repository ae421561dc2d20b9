use std::sync::Arc;

use axum::Router;
use dotenvy::dotenv;
use sqlx::{migrate, postgres::PgPoolOptions};
use tracing::info;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use video_catalog_api::{
    cast_member::{
        build_cast_member_router,
        interfaces::rest::resources::{
            cast_member_resource::{CastMemberCollectionResource, CastMemberResource},
            create_cast_member_request_resource::CreateCastMemberRequestResource,
            update_cast_member_request_resource::UpdateCastMemberRequestResource,
        },
    },
    category::{
        build_category_router,
        interfaces::rest::resources::{
            category_resource::{CategoryCollectionResource, CategoryResource},
            create_category_request_resource::CreateCategoryRequestResource,
            update_category_request_resource::UpdateCategoryRequestResource,
        },
    },
    config::app_config::AppConfig,
    genre::{
        build_genre_router,
        interfaces::rest::resources::{
            create_genre_request_resource::CreateGenreRequestResource,
            genre_resource::{GenreCategoryResource, GenreCollectionResource, GenreResource},
            update_genre_request_resource::UpdateGenreRequestResource,
        },
    },
    shared::{
        infrastructure::persistence::repositories::postgres::sqlx_unit_of_work_impl::SqlxUnitOfWorkImpl,
        interfaces::rest::resources::{
            error_response_resource::ErrorResponseResource,
            pagination_meta_resource::PaginationMetaResource,
            search_query_resource::SearchQueryResource,
        },
    },
    video::{
        build_video_router,
        interfaces::rest::resources::{
            create_video_request_resource::CreateVideoRequestResource,
            update_video_request_resource::UpdateVideoRequestResource,
            video_resource::{VideoCollectionResource, VideoResource},
        },
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        video_catalog_api::category::interfaces::rest::controllers::category_rest_controller::create_category,
        video_catalog_api::category::interfaces::rest::controllers::category_rest_controller::list_categories,
        video_catalog_api::category::interfaces::rest::controllers::category_rest_controller::get_category,
        video_catalog_api::category::interfaces::rest::controllers::category_rest_controller::update_category,
        video_catalog_api::category::interfaces::rest::controllers::category_rest_controller::delete_category,
        video_catalog_api::cast_member::interfaces::rest::controllers::cast_member_rest_controller::create_cast_member,
        video_catalog_api::cast_member::interfaces::rest::controllers::cast_member_rest_controller::list_cast_members,
        video_catalog_api::cast_member::interfaces::rest::controllers::cast_member_rest_controller::get_cast_member,
        video_catalog_api::cast_member::interfaces::rest::controllers::cast_member_rest_controller::update_cast_member,
        video_catalog_api::cast_member::interfaces::rest::controllers::cast_member_rest_controller::delete_cast_member,
        video_catalog_api::genre::interfaces::rest::controllers::genre_rest_controller::create_genre,
        video_catalog_api::genre::interfaces::rest::controllers::genre_rest_controller::list_genres,
        video_catalog_api::genre::interfaces::rest::controllers::genre_rest_controller::get_genre,
        video_catalog_api::genre::interfaces::rest::controllers::genre_rest_controller::update_genre,
        video_catalog_api::genre::interfaces::rest::controllers::genre_rest_controller::delete_genre,
        video_catalog_api::video::interfaces::rest::controllers::video_rest_controller::create_video,
        video_catalog_api::video::interfaces::rest::controllers::video_rest_controller::list_videos,
        video_catalog_api::video::interfaces::rest::controllers::video_rest_controller::get_video,
        video_catalog_api::video::interfaces::rest::controllers::video_rest_controller::update_video,
        video_catalog_api::video::interfaces::rest::controllers::video_rest_controller::delete_video
    ),
    components(
        schemas(
            CategoryResource,
            CategoryCollectionResource,
            CreateCategoryRequestResource,
            UpdateCategoryRequestResource,
            CastMemberResource,
            CastMemberCollectionResource,
            CreateCastMemberRequestResource,
            UpdateCastMemberRequestResource,
            GenreResource,
            GenreCategoryResource,
            GenreCollectionResource,
            CreateGenreRequestResource,
            UpdateGenreRequestResource,
            VideoResource,
            VideoCollectionResource,
            CreateVideoRequestResource,
            UpdateVideoRequestResource,
            PaginationMetaResource,
            SearchQueryResource,
            ErrorResponseResource
        )
    ),
    tags(
        (name = "categories", description = "Category catalog administration"),
        (name = "cast-members", description = "Cast member catalog administration"),
        (name = "genres", description = "Genre catalog administration"),
        (name = "videos", description = "Video catalog administration")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() {
    dotenv().ok();

    let config = AppConfig::from_env();

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let pool = PgPoolOptions::new()
        .max_connections(config.postgres_max_connections)
        .connect(&config.database_url())
        .await
        .expect("failed to connect to postgres");

    migrate!("./migrations")
        .run(&pool)
        .await
        .expect("failed to run database migrations");

    let unit_of_work = Arc::new(SqlxUnitOfWorkImpl::new(pool));

    let app = Router::new()
        .merge(build_category_router(unit_of_work.clone()))
        .merge(build_cast_member_router(unit_of_work.clone()))
        .merge(build_genre_router(unit_of_work.clone()))
        .merge(build_video_router(unit_of_work))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind server address");

    info!(port = config.port, "server listening");
    info!("swagger ui available at http://localhost:{}/swagger-ui", config.port);

    axum::serve(listener, app)
        .await
        .expect("failed to start axum server");
}
