use log::info;
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::api::error;
use crate::modules::user::model::{InsertUser, SignUpModel};
use crate::modules::user::repository::UserRepository;
use crate::modules::user::schema::UserEntity;
use crate::utils::{hash_password, verify_password, Claims};

#[derive(Clone)]
pub struct UserService {
    repo: Arc<dyn UserRepository + Send + Sync>,
    jwt_secret: Arc<str>,
    token_expiration: u64,
}

impl UserService {
    pub fn with_dependencies(
        repo: Arc<dyn UserRepository + Send + Sync>,
        jwt_secret: &str,
        token_expiration: u64,
    ) -> Self {
        info!("UserService initialized with dependencies");
        UserService { repo, jwt_secret: jwt_secret.into(), token_expiration }
    }

    pub async fn list(&self) -> Result<Vec<UserEntity>, error::SystemError> {
        self.repo.find_all().await
    }

    pub async fn get_by_id(&self, id: &Uuid) -> Result<Option<UserEntity>, error::SystemError> {
        self.repo.find_by_id(id).await
    }

    pub async fn get_by_username(
        &self,
        username: &str,
    ) -> Result<Option<UserEntity>, error::SystemError> {
        self.repo.find_by_username(username).await
    }

    pub async fn sign_up(
        &self,
        user: SignUpModel,
    ) -> Result<(String, UserEntity), error::SystemError> {
        user.validate().map_err(|e| error::SystemError::bad_request(e.to_string()))?;

        let hash_password = hash_password(&user.password)?;

        let new_user =
            InsertUser { username: user.username, email: user.email, hash_password };

        let user_entity = self.repo.create(&new_user).await?;
        let token = self.issue_token(&user_entity)?;

        Ok((token, user_entity))
    }

    /// A missing user and a wrong password fail with the identical message so
    /// the response never reveals which email addresses have accounts.
    pub async fn login(
        &self,
        email: &str,
        password: &str,
    ) -> Result<(String, UserEntity), error::SystemError> {
        let user_entity = self
            .repo
            .find_by_email(email)
            .await?
            .ok_or_else(|| error::SystemError::unauthorized("Incorrect credentials"))?;

        let valid = verify_password(&user_entity.hash_password, password)?;
        if !valid {
            return Err(error::SystemError::unauthorized("Incorrect credentials"));
        }

        let token = self.issue_token(&user_entity)?;
        Ok((token, user_entity))
    }

    fn issue_token(&self, user: &UserEntity) -> Result<String, error::SystemError> {
        Claims::new(&user.id, &user.username, &user.email, self.token_expiration)
            .encode(self.jwt_secret.as_bytes())
    }
}
