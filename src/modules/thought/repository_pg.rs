use std::collections::HashMap;

use uuid::Uuid;

use crate::{
    api::error,
    modules::thought::{
        model::{InsertReaction, InsertThought},
        repository::ThoughtRepository,
        schema::{ReactionEntity, ThoughtEntity, ThoughtRecord},
    },
};

#[derive(Clone)]
pub struct ThoughtRepositoryPg {
    pool: sqlx::PgPool,
}

impl ThoughtRepositoryPg {
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }

    /// Loads the reactions for a batch of thoughts and zips them back onto
    /// their parents, preserving the parents' order.
    async fn attach_reactions(
        &self,
        thoughts: Vec<ThoughtEntity>,
    ) -> Result<Vec<ThoughtRecord>, error::SystemError> {
        if thoughts.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<Uuid> = thoughts.iter().map(|t| t.id).collect();
        let reactions = sqlx::query_as::<_, ReactionEntity>(
            "SELECT * FROM reactions WHERE thought_id = ANY($1) ORDER BY created_at, id",
        )
        .bind(&ids)
        .fetch_all(&self.pool)
        .await?;

        let mut by_thought: HashMap<Uuid, Vec<ReactionEntity>> = HashMap::new();
        for reaction in reactions {
            by_thought.entry(reaction.thought_id).or_default().push(reaction);
        }

        Ok(thoughts
            .into_iter()
            .map(|thought| {
                let reactions = by_thought.remove(&thought.id).unwrap_or_default();
                ThoughtRecord { thought, reactions }
            })
            .collect())
    }
}

#[async_trait::async_trait]
impl ThoughtRepository for ThoughtRepositoryPg {
    async fn find_all(
        &self,
        username: Option<&str>,
    ) -> Result<Vec<ThoughtRecord>, error::SystemError> {
        let thoughts = match username {
            Some(username) => {
                sqlx::query_as::<_, ThoughtEntity>(
                    "SELECT * FROM thoughts WHERE username = $1 ORDER BY created_at DESC, id DESC",
                )
                .bind(username)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, ThoughtEntity>(
                    "SELECT * FROM thoughts ORDER BY created_at DESC, id DESC",
                )
                .fetch_all(&self.pool)
                .await?
            }
        };

        self.attach_reactions(thoughts).await
    }

    async fn find_by_id(&self, id: &Uuid) -> Result<Option<ThoughtRecord>, error::SystemError> {
        let thought = sqlx::query_as::<_, ThoughtEntity>("SELECT * FROM thoughts WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        match thought {
            Some(thought) => Ok(self.attach_reactions(vec![thought]).await?.pop()),
            None => Ok(None),
        }
    }

    async fn create(&self, thought: &InsertThought) -> Result<ThoughtRecord, error::SystemError> {
        let id = Uuid::new_v7(uuid::Timestamp::now(uuid::NoContext));
        let entity = sqlx::query_as::<_, ThoughtEntity>(
            "INSERT INTO thoughts (id, thought_text, username) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(id)
        .bind(&thought.thought_text)
        .bind(&thought.username)
        .fetch_one(&self.pool)
        .await?;

        Ok(ThoughtRecord { thought: entity, reactions: Vec::new() })
    }

    async fn add_reaction(
        &self,
        thought_id: &Uuid,
        reaction: &InsertReaction,
    ) -> Result<Option<ThoughtRecord>, error::SystemError> {
        let id = Uuid::new_v7(uuid::Timestamp::now(uuid::NoContext));

        // INSERT .. SELECT keyed on the parent row: a missing thought inserts
        // nothing instead of tripping the foreign key.
        let inserted = sqlx::query(
            r#"
        INSERT INTO reactions (id, thought_id, reaction_body, username)
        SELECT $1, t.id, $3, $4
        FROM thoughts t
        WHERE t.id = $2
        "#,
        )
        .bind(id)
        .bind(thought_id)
        .bind(&reaction.reaction_body)
        .bind(&reaction.username)
        .execute(&self.pool)
        .await?
        .rows_affected();

        if inserted == 0 {
            return Ok(None);
        }

        self.find_by_id(thought_id).await
    }
}
