use sqlx::prelude::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, FromRow)]
pub struct ThoughtEntity {
    pub id: Uuid,
    pub thought_text: String,
    pub username: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, FromRow)]
pub struct ReactionEntity {
    pub id: Uuid,
    pub thought_id: Uuid,
    pub reaction_body: String,
    pub username: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// A thought together with its reactions, read as one unit. Reactions have no
/// lifecycle of their own: they are created through their parent and go away
/// with it (`ON DELETE CASCADE`).
#[derive(Debug, Clone)]
pub struct ThoughtRecord {
    pub thought: ThoughtEntity,
    pub reactions: Vec<ReactionEntity>,
}
