use uuid::Uuid;

use crate::{api::error, modules::user::model::InsertUser, modules::user::schema::UserEntity};

#[async_trait::async_trait]
pub trait UserRepository {
    async fn find_all(&self) -> Result<Vec<UserEntity>, error::SystemError>;
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<UserEntity>, error::SystemError>;
    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<UserEntity>, error::SystemError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<UserEntity>, error::SystemError>;
    async fn create(&self, user: &InsertUser) -> Result<UserEntity, error::SystemError>;
}
