use async_graphql::{Context, Object, Result, SimpleObject, ID};
use validator::Validate;

use crate::modules::friend::service::FriendService;
use crate::modules::thought::model::Thought;
use crate::modules::thought::service::ThoughtService;
use crate::modules::user::schema::UserEntity;

#[derive(Validate)]
pub struct SignUpModel {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 5, message = "Password must be at least 5 characters long"))]
    pub password: String,
}

pub struct InsertUser {
    pub username: String,
    pub email: String,
    pub hash_password: String,
}

/// GraphQL `User`. The password hash stays inside the entity and is never
/// exposed as a field. `friends` and `thoughts` expand on demand, the GraphQL
/// counterpart of the original's populated sub-documents.
pub struct User(pub UserEntity);

#[Object]
impl User {
    #[graphql(name = "_id")]
    async fn id(&self) -> ID {
        ID(self.0.id.to_string())
    }

    async fn username(&self) -> &str {
        &self.0.username
    }

    async fn email(&self) -> &str {
        &self.0.email
    }

    async fn friend_count(&self, ctx: &Context<'_>) -> Result<i64> {
        let friend_service = ctx.data::<FriendService>()?;
        friend_service.friend_count(&self.0.id).await.map_err(|e| e.extend())
    }

    async fn friends(&self, ctx: &Context<'_>) -> Result<Vec<User>> {
        let friend_service = ctx.data::<FriendService>()?;
        let friends = friend_service.friends_of(&self.0.id).await.map_err(|e| e.extend())?;
        Ok(friends.into_iter().map(User).collect())
    }

    async fn thoughts(&self, ctx: &Context<'_>) -> Result<Vec<Thought>> {
        let thought_service = ctx.data::<ThoughtService>()?;
        let thoughts =
            thought_service.list(Some(&self.0.username)).await.map_err(|e| e.extend())?;
        Ok(thoughts.into_iter().map(Thought).collect())
    }
}

/// `addUser`/`login` payload: the signed bearer token plus the caller's record.
#[derive(SimpleObject)]
pub struct Auth {
    pub token: String,
    pub user: User,
}
