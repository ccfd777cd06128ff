use async_graphql::{Context, Object, Result, ID};

use crate::graphql::parse_id;
use crate::middlewares::require_auth;
use crate::modules::friend::service::FriendService;
use crate::modules::thought::{
    model::{NewReactionModel, NewThoughtModel, Thought},
    service::ThoughtService,
};
use crate::modules::user::{
    model::{Auth, SignUpModel, User},
    service::UserService,
};

pub struct Mutation;

#[Object]
impl Mutation {
    /// Signup. The one mutation open to unauthenticated callers besides login.
    async fn add_user(
        &self,
        ctx: &Context<'_>,
        username: String,
        email: String,
        password: String,
    ) -> Result<Auth> {
        let user_service = ctx.data::<UserService>()?;
        let (token, user) = user_service
            .sign_up(SignUpModel { username, email, password })
            .await
            .map_err(|e| e.extend())?;
        Ok(Auth { token, user: User(user) })
    }

    async fn login(&self, ctx: &Context<'_>, email: String, password: String) -> Result<Auth> {
        let user_service = ctx.data::<UserService>()?;
        let (token, user) =
            user_service.login(&email, &password).await.map_err(|e| e.extend())?;
        Ok(Auth { token, user: User(user) })
    }

    async fn add_thought(&self, ctx: &Context<'_>, thought_text: String) -> Result<Thought> {
        let auth = require_auth(ctx, "You need to be logged in!")?;
        let thought_service = ctx.data::<ThoughtService>()?;
        let thought = thought_service
            .add_thought(&auth.username, NewThoughtModel { thought_text })
            .await
            .map_err(|e| e.extend())?;
        Ok(Thought(thought))
    }

    /// Appends a reaction to the target thought. A nonexistent thought id
    /// resolves to null, mirroring the not-found contract of the queries.
    async fn add_reaction(
        &self,
        ctx: &Context<'_>,
        thought_id: ID,
        reaction_body: String,
    ) -> Result<Option<Thought>> {
        let auth = require_auth(ctx, "You need to be logged in!")?;
        let thought_service = ctx.data::<ThoughtService>()?;
        let thought_id = parse_id(&thought_id)?;
        let thought = thought_service
            .add_reaction(&auth.username, &thought_id, NewReactionModel { reaction_body })
            .await
            .map_err(|e| e.extend())?;
        Ok(thought.map(Thought))
    }

    async fn add_friend(&self, ctx: &Context<'_>, friend_id: ID) -> Result<User> {
        let auth = require_auth(ctx, "You need to be logged in!")?;
        let friend_service = ctx.data::<FriendService>()?;
        let friend_id = parse_id(&friend_id)?;
        let user =
            friend_service.add_friend(&auth.id, &friend_id).await.map_err(|e| e.extend())?;
        Ok(User(user))
    }
}
