use uuid::Uuid;

use crate::{
    api::error,
    modules::thought::model::{InsertReaction, InsertThought},
    modules::thought::schema::ThoughtRecord,
};

#[async_trait::async_trait]
pub trait ThoughtRepository {
    /// All thoughts, or one user's, newest first.
    async fn find_all(
        &self,
        username: Option<&str>,
    ) -> Result<Vec<ThoughtRecord>, error::SystemError>;

    async fn find_by_id(&self, id: &Uuid) -> Result<Option<ThoughtRecord>, error::SystemError>;

    async fn create(&self, thought: &InsertThought) -> Result<ThoughtRecord, error::SystemError>;

    /// Appends a reaction to the target thought and returns the refreshed
    /// record. `None` when no thought has that id.
    async fn add_reaction(
        &self,
        thought_id: &Uuid,
        reaction: &InsertReaction,
    ) -> Result<Option<ThoughtRecord>, error::SystemError>;
}
