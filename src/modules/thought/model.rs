use async_graphql::{Object, ID};
use validator::Validate;

use crate::modules::thought::schema::{ReactionEntity, ThoughtRecord};

#[derive(Validate)]
pub struct NewThoughtModel {
    #[validate(length(min = 1, max = 280, message = "Thoughts must be between 1 and 280 characters"))]
    pub thought_text: String,
}

#[derive(Validate)]
pub struct NewReactionModel {
    #[validate(length(min = 1, max = 280, message = "Reactions must be between 1 and 280 characters"))]
    pub reaction_body: String,
}

pub struct InsertThought {
    pub thought_text: String,
    pub username: String,
}

pub struct InsertReaction {
    pub reaction_body: String,
    pub username: String,
}

pub struct Thought(pub ThoughtRecord);

#[Object]
impl Thought {
    #[graphql(name = "_id")]
    async fn id(&self) -> ID {
        ID(self.0.thought.id.to_string())
    }

    async fn thought_text(&self) -> &str {
        &self.0.thought.thought_text
    }

    async fn created_at(&self) -> chrono::DateTime<chrono::Utc> {
        self.0.thought.created_at
    }

    async fn username(&self) -> &str {
        &self.0.thought.username
    }

    async fn reaction_count(&self) -> i64 {
        self.0.reactions.len() as i64
    }

    async fn reactions(&self) -> Vec<Reaction> {
        self.0.reactions.iter().cloned().map(Reaction).collect()
    }
}

pub struct Reaction(pub ReactionEntity);

#[Object]
impl Reaction {
    #[graphql(name = "_id")]
    async fn id(&self) -> ID {
        ID(self.0.id.to_string())
    }

    async fn reaction_body(&self) -> &str {
        &self.0.reaction_body
    }

    async fn created_at(&self) -> chrono::DateTime<chrono::Utc> {
        self.0.created_at
    }

    async fn username(&self) -> &str {
        &self.0.username
    }
}
