use actix_cors::Cors;
use actix_web::{self, http::header, middleware::Logger, web, App, HttpServer};
use std::sync::{Arc, LazyLock};

use crate::modules::{
    friend::{repository_pg::FriendRepositoryPg, service::FriendService},
    thought::{repository_pg::ThoughtRepositoryPg, service::ThoughtService},
    user::{repository_pg::UserRepositoryPg, service::UserService},
};

mod api;
mod configs;
mod constants;
mod graphql;
mod middlewares;
mod modules;
mod utils;

pub static ENV: LazyLock<constants::Env> = LazyLock::new(|| {
    dotenvy::dotenv().ok();
    env_logger::init();
    log::info!("Environment variables loaded from .env file");
    constants::Env::default()
});

#[actix_web::get("/")]
async fn health_check() -> &'static str {
    "Server is running"
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let db_pool = configs::connect_database()
        .await
        .map_err(|_| std::io::Error::other("Database connection error"))?;

    let user_repo = UserRepositoryPg::new(db_pool.clone());
    let thought_repo = ThoughtRepositoryPg::new(db_pool.clone());
    let friend_repo = FriendRepositoryPg::new(db_pool.clone());

    let user_service = UserService::with_dependencies(
        Arc::new(user_repo.clone()),
        &ENV.jwt_secret,
        ENV.token_expiration,
    );
    let thought_service = ThoughtService::with_dependencies(Arc::new(thought_repo));
    let friend_service =
        FriendService::with_dependencies(Arc::new(friend_repo), Arc::new(user_repo));

    let schema = graphql::create_schema(user_service, thought_service, friend_service);

    println!("Starting server at http://{}:{}", ENV.ip.as_str(), ENV.port);
    log::info!("GraphiQL UI available at http://{}:{}/graphql", ENV.ip.as_str(), ENV.port);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin(ENV.frontend_url.as_str())
            .allowed_methods(vec!["GET", "POST"])
            .allowed_headers(vec![header::AUTHORIZATION, header::CONTENT_TYPE])
            .max_age(3600);

        App::new()
            .wrap(Logger::default())
            .wrap(cors)
            .app_data(web::Data::new(schema.clone()))
            .service(health_check)
            .service(
                web::resource("/graphql")
                    .route(web::post().to(graphql::graphql_handler))
                    .route(web::get().to(graphql::graphiql)),
            )
    })
    .bind((ENV.ip.as_str(), ENV.port))?
    .workers(2)
    .run()
    .await
}
