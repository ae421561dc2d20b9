use std::sync::Arc;

use video_catalog_api::{
    cast_member::{
        application::validations::cast_members_id_exists_in_storage_validator::CastMembersIdExistsInStorageValidator,
        domain::model::entities::cast_member::CastMember,
        infrastructure::persistence::repositories::in_memory::cast_member_in_memory_repository::{
            CastMemberInMemoryRepository, CastMemberSearchPolicy,
        },
    },
    category::{
        application::validations::categories_id_exists_in_storage_validator::CategoriesIdExistsInStorageValidator,
        domain::model::entities::category::Category,
        infrastructure::persistence::repositories::in_memory::category_in_memory_repository::{
            CategoryInMemoryRepository, CategorySearchPolicy,
        },
    },
    genre::{
        application::validations::genres_id_exists_in_storage_validator::GenresIdExistsInStorageValidator,
        domain::model::entities::genre::Genre,
        infrastructure::persistence::repositories::in_memory::genre_in_memory_repository::{
            GenreInMemoryRepository, GenreSearchPolicy,
        },
    },
    shared::infrastructure::persistence::repositories::in_memory::in_memory_unit_of_work::InMemoryUnitOfWork,
    video::{
        application::{
            command_services::video_command_service_impl::{
                VideoCommandServiceImpl, VideoRelationValidators,
            },
            query_services::video_query_service_impl::VideoQueryServiceImpl,
        },
        domain::model::entities::video::Video,
        infrastructure::persistence::repositories::in_memory::video_in_memory_repository::{
            VideoInMemoryRepository, VideoSearchPolicy,
        },
    },
};

pub struct VideoTestHarness {
    pub video_repository: Arc<VideoInMemoryRepository>,
    pub unit_of_work: Arc<InMemoryUnitOfWork>,
    pub command_service: VideoCommandServiceImpl<InMemoryUnitOfWork>,
    pub query_service: VideoQueryServiceImpl,
}

pub fn create_harness(
    categories: Vec<Category>,
    genres: Vec<Genre>,
    cast_members: Vec<CastMember>,
    videos: Vec<Video>,
) -> VideoTestHarness {
    let video_repository = Arc::new(VideoInMemoryRepository::with_items(
        VideoSearchPolicy,
        videos,
    ));
    let category_repository = Arc::new(CategoryInMemoryRepository::with_items(
        CategorySearchPolicy,
        categories,
    ));
    let genre_repository = Arc::new(GenreInMemoryRepository::with_items(
        GenreSearchPolicy,
        genres,
    ));
    let cast_member_repository = Arc::new(CastMemberInMemoryRepository::with_items(
        CastMemberSearchPolicy,
        cast_members,
    ));
    let unit_of_work = Arc::new(InMemoryUnitOfWork::new());

    let validators = VideoRelationValidators {
        categories_id: CategoriesIdExistsInStorageValidator::new(category_repository),
        genres_id: GenresIdExistsInStorageValidator::new(genre_repository),
        cast_members_id: CastMembersIdExistsInStorageValidator::new(cast_member_repository),
    };

    VideoTestHarness {
        command_service: VideoCommandServiceImpl::new(
            video_repository.clone(),
            validators,
            unit_of_work.clone(),
        ),
        query_service: VideoQueryServiceImpl::new(video_repository.clone()),
        video_repository,
        unit_of_work,
    }
}
