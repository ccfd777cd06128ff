pub mod user {
    pub mod model;
    pub mod repository;
    pub mod repository_pg;
    pub mod schema;
    pub mod service;
}

pub mod thought {
    pub mod model;
    pub mod repository;
    pub mod repository_pg;
    pub mod schema;
    pub mod service;
}

pub mod friend {
    pub mod repository;
    pub mod repository_pg;
    pub mod service;
}
