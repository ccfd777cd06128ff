use actix_web::{web, HttpRequest, HttpResponse};
use async_graphql::{http::GraphiQLSource, EmptySubscription, ErrorExtensions, Schema, ID};
use async_graphql_actix_web::{GraphQLRequest, GraphQLResponse};
use uuid::Uuid;

use crate::{
    api::error,
    middlewares,
    modules::{
        friend::service::FriendService, thought::service::ThoughtService,
        user::service::UserService,
    },
    ENV,
};

pub mod mutation;
pub mod query;

pub use mutation::Mutation;
pub use query::Query;

pub type AppSchema = Schema<Query, Mutation, EmptySubscription>;

pub fn create_schema(
    user_service: UserService,
    thought_service: ThoughtService,
    friend_service: FriendService,
) -> AppSchema {
    Schema::build(Query, Mutation, EmptySubscription)
        .data(user_service)
        .data(thought_service)
        .data(friend_service)
        .limit_depth(16)
        .finish()
}

pub fn parse_id(id: &ID) -> async_graphql::Result<Uuid> {
    Uuid::parse_str(id.as_str()).map_err(|_| error::Error::bad_user_input("Invalid id").extend())
}

/// The single GraphQL endpoint. Identity extraction never rejects a request;
/// gated resolvers fail individually when no identity is attached.
pub async fn graphql_handler(
    schema: web::Data<AppSchema>,
    req: HttpRequest,
    gql_req: GraphQLRequest,
) -> GraphQLResponse {
    let mut request = gql_req.into_inner();
    if let Some(identity) = middlewares::authenticate(&req, ENV.jwt_secret.as_bytes()) {
        request = request.data(identity);
    }
    schema.execute(request).await.into()
}

pub async fn graphiql() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(GraphiQLSource::build().endpoint("/graphql").finish())
}
