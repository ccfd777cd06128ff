use uuid::Uuid;

use crate::{api::error, modules::user::schema::UserEntity};

#[async_trait::async_trait]
pub trait FriendRepository {
    /// Set-semantics insert: adding an existing friendship is a no-op.
    async fn add_friend(
        &self,
        user_id: &Uuid,
        friend_id: &Uuid,
    ) -> Result<(), error::SystemError>;

    async fn find_friends(&self, user_id: &Uuid) -> Result<Vec<UserEntity>, error::SystemError>;

    async fn count_friends(&self, user_id: &Uuid) -> Result<i64, error::SystemError>;
}
