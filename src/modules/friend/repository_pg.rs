use uuid::Uuid;

use crate::{
    api::error,
    modules::{friend::repository::FriendRepository, user::schema::UserEntity},
};

#[derive(Clone)]
pub struct FriendRepositoryPg {
    pool: sqlx::PgPool,
}

impl FriendRepositoryPg {
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl FriendRepository for FriendRepositoryPg {
    async fn add_friend(
        &self,
        user_id: &Uuid,
        friend_id: &Uuid,
    ) -> Result<(), error::SystemError> {
        sqlx::query(
            "INSERT INTO friendships (user_id, friend_id) VALUES ($1, $2) ON CONFLICT DO NOTHING",
        )
        .bind(user_id)
        .bind(friend_id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn find_friends(&self, user_id: &Uuid) -> Result<Vec<UserEntity>, error::SystemError> {
        let friends = sqlx::query_as::<_, UserEntity>(
            r#"
        SELECT u.*
        FROM friendships f
        JOIN users u ON u.id = f.friend_id
        WHERE f.user_id = $1
        ORDER BY u.username
        "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(friends)
    }

    async fn count_friends(&self, user_id: &Uuid) -> Result<i64, error::SystemError> {
        let count: (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM friendships WHERE user_id = $1")
                .bind(user_id)
                .fetch_one(&self.pool)
                .await?;
        Ok(count.0)
    }
}
