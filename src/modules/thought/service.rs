use log::info;
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::api::error;
use crate::modules::thought::model::{
    InsertReaction, InsertThought, NewReactionModel, NewThoughtModel,
};
use crate::modules::thought::repository::ThoughtRepository;
use crate::modules::thought::schema::ThoughtRecord;

#[derive(Clone)]
pub struct ThoughtService {
    repo: Arc<dyn ThoughtRepository + Send + Sync>,
}

impl ThoughtService {
    pub fn with_dependencies(repo: Arc<dyn ThoughtRepository + Send + Sync>) -> Self {
        info!("ThoughtService initialized with dependencies");
        ThoughtService { repo }
    }

    pub async fn list(
        &self,
        username: Option<&str>,
    ) -> Result<Vec<ThoughtRecord>, error::SystemError> {
        self.repo.find_all(username).await
    }

    pub async fn get_by_id(&self, id: &Uuid) -> Result<Option<ThoughtRecord>, error::SystemError> {
        self.repo.find_by_id(id).await
    }

    /// The author's username is stamped onto the thought at creation time and
    /// never re-derived afterwards.
    pub async fn add_thought(
        &self,
        username: &str,
        thought: NewThoughtModel,
    ) -> Result<ThoughtRecord, error::SystemError> {
        thought.validate().map_err(|e| error::SystemError::bad_request(e.to_string()))?;

        let insert = InsertThought {
            thought_text: thought.thought_text,
            username: username.to_string(),
        };
        self.repo.create(&insert).await
    }

    /// Resolves to `None` when the target thought does not exist.
    pub async fn add_reaction(
        &self,
        username: &str,
        thought_id: &Uuid,
        reaction: NewReactionModel,
    ) -> Result<Option<ThoughtRecord>, error::SystemError> {
        reaction.validate().map_err(|e| error::SystemError::bad_request(e.to_string()))?;

        let insert = InsertReaction {
            reaction_body: reaction.reaction_body,
            username: username.to_string(),
        };
        self.repo.add_reaction(thought_id, &insert).await
    }
}
