use std::sync::Arc;

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use tracing::{info, warn};

use crate::core::{AppError, Page, PageOptions, Result};
use crate::modules::chefs::models::{Chef, ChefRequest};
use crate::modules::chefs::repositories::ChefRepository;

/// Service for chef business logic
pub struct ChefService {
    chef_repo: Arc<dyn ChefRepository>,
}

impl ChefService {
    pub fn new(chef_repo: Arc<dyn ChefRepository>) -> Self {
        Self { chef_repo }
    }

    /// Every chef, ordered by id
    pub async fn all_chefs(&self) -> Result<Vec<Chef>> {
        self.chef_repo.get_all_chefs().await
    }

    /// One page of chefs
    pub async fn list_chefs(&self, options: &PageOptions) -> Result<Page<Chef>> {
        self.chef_repo.get_all_chefs_paged(options).await
    }

    /// Get chef by ID
    pub async fn get_chef(&self, id: i32) -> Result<Chef> {
        self.chef_repo
            .get_chef_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Chef with id {} not found", id)))
    }

    /// Username search over all chefs
    pub async fn search_all(&self, term: &str) -> Result<Vec<Chef>> {
        self.chef_repo.search_chefs_by_term(term).await
    }

    /// One page of the username search
    pub async fn search_chefs(&self, term: &str, options: &PageOptions) -> Result<Page<Chef>> {
        self.chef_repo
            .search_chefs_by_term_paged(term, options)
            .await
    }

    /// Validate, hash the password, and store a new chef
    pub async fn create_chef(&self, request: ChefRequest) -> Result<Chef> {
        request.validate()?;

        let password_hash = hash_password(&request.password)?;
        let mut chef = request.into_chef(0, password_hash);
        chef.id = self.chef_repo.create_chef(&chef).await?;

        info!(
            chef_id = chef.id,
            username = %chef.username,
            is_admin = chef.is_admin,
            "Chef created"
        );

        Ok(chef)
    }

    /// Replace every field of an existing chef
    pub async fn update_chef(&self, id: i32, request: ChefRequest) -> Result<Chef> {
        request.validate()?;

        // Surface NotFound before paying for a hash
        self.get_chef(id).await?;

        let password_hash = hash_password(&request.password)?;
        let chef = request.into_chef(id, password_hash);
        self.chef_repo.update_chef(&chef).await?;

        info!(chef_id = id, username = %chef.username, "Chef updated");

        Ok(chef)
    }

    pub async fn delete_chef(&self, id: i32) -> Result<()> {
        let chef = self.get_chef(id).await?;
        self.chef_repo.delete_chef(&chef).await?;

        info!(chef_id = id, username = %chef.username, "Chef deleted");

        Ok(())
    }

    /// Check a login attempt against the stored hash
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<Option<Chef>> {
        let Some(chef) = self.chef_repo.get_chef_by_username(username).await? else {
            return Ok(None);
        };

        // Rows written outside this service may hold a plaintext password
        match verify_password(password, &chef.password) {
            Ok(true) => Ok(Some(chef)),
            Ok(false) => {
                warn!(username = %username, "Rejected chef login");
                Ok(None)
            }
            Err(e) => {
                warn!(
                    chef_id = chef.id,
                    error = %e,
                    "Stored password is not an argon2 hash, rejecting login"
                );
                Ok(None)
            }
        }
    }
}

/// Hash a chef password using Argon2
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::internal(format!("Failed to hash password: {}", e)))
}

/// Verify a chef password against an Argon2 PHC string
pub fn verify_password(password: &str, hash: &str) -> Result<bool> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| AppError::internal(format!("Invalid hash format: {}", e)))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}
