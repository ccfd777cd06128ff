use log::info;
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    api::error,
    modules::{
        friend::repository::FriendRepository,
        user::{repository::UserRepository, schema::UserEntity},
    },
};

#[derive(Clone)]
pub struct FriendService {
    friend_repo: Arc<dyn FriendRepository + Send + Sync>,
    user_repo: Arc<dyn UserRepository + Send + Sync>,
}

impl FriendService {
    pub fn with_dependencies(
        friend_repo: Arc<dyn FriendRepository + Send + Sync>,
        user_repo: Arc<dyn UserRepository + Send + Sync>,
    ) -> Self {
        info!("FriendService initialized with dependencies");
        FriendService { friend_repo, user_repo }
    }

    /// Idempotent set-add; returns the caller's refreshed record.
    pub async fn add_friend(
        &self,
        user_id: &Uuid,
        friend_id: &Uuid,
    ) -> Result<UserEntity, error::SystemError> {
        if self.user_repo.find_by_id(friend_id).await?.is_none() {
            return Err(error::SystemError::not_found("User not found"));
        }

        self.friend_repo.add_friend(user_id, friend_id).await?;

        self.user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| error::SystemError::not_found("User not found"))
    }

    pub async fn friends_of(&self, user_id: &Uuid) -> Result<Vec<UserEntity>, error::SystemError> {
        self.friend_repo.find_friends(user_id).await
    }

    pub async fn friend_count(&self, user_id: &Uuid) -> Result<i64, error::SystemError> {
        self.friend_repo.count_friends(user_id).await
    }
}
