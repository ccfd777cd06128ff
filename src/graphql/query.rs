use async_graphql::{Context, Object, Result, ID};

use crate::graphql::parse_id;
use crate::middlewares::require_auth;
use crate::modules::thought::{model::Thought, service::ThoughtService};
use crate::modules::user::{model::User, service::UserService};

pub struct Query;

#[Object]
impl Query {
    /// All users, expanded with friends and thoughts.
    async fn users(&self, ctx: &Context<'_>) -> Result<Vec<User>> {
        let user_service = ctx.data::<UserService>()?;
        let users = user_service.list().await.map_err(|e| e.extend())?;
        Ok(users.into_iter().map(User).collect())
    }

    /// One user by username; null when there is none.
    async fn user(&self, ctx: &Context<'_>, username: String) -> Result<Option<User>> {
        let user_service = ctx.data::<UserService>()?;
        let user = user_service.get_by_username(&username).await.map_err(|e| e.extend())?;
        Ok(user.map(User))
    }

    /// All thoughts, or one user's, newest first.
    async fn thoughts(&self, ctx: &Context<'_>, username: Option<String>) -> Result<Vec<Thought>> {
        let thought_service = ctx.data::<ThoughtService>()?;
        let thoughts =
            thought_service.list(username.as_deref()).await.map_err(|e| e.extend())?;
        Ok(thoughts.into_iter().map(Thought).collect())
    }

    /// One thought by id; null when there is none.
    async fn thought(
        &self,
        ctx: &Context<'_>,
        #[graphql(name = "_id")] id: ID,
    ) -> Result<Option<Thought>> {
        let thought_service = ctx.data::<ThoughtService>()?;
        let id = parse_id(&id)?;
        let thought = thought_service.get_by_id(&id).await.map_err(|e| e.extend())?;
        Ok(thought.map(Thought))
    }

    /// The caller's own expanded record. The only gated query.
    async fn me(&self, ctx: &Context<'_>) -> Result<Option<User>> {
        let auth = require_auth(ctx, "Not logged in")?;
        let user_service = ctx.data::<UserService>()?;
        let user = user_service.get_by_id(&auth.id).await.map_err(|e| e.extend())?;
        Ok(user.map(User))
    }
}
