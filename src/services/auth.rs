//! Account registration, login, and profile management.

use argon2::Argon2;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use validator::ValidateEmail;

use crate::domain::user::{NewUser, UpdateUser, User};
use crate::models::auth::Claims;
use crate::models::config::ServerConfig;
use crate::repository::{UserReader, UserWriter};
use crate::services::{ServiceError, ServiceResult};

const TOKEN_TTL_HOURS: i64 = 24;
const MIN_PASSWORD_LEN: usize = 6;

/// A freshly authenticated session: the JWT plus the public user record.
#[derive(Debug)]
pub struct Session {
    pub token: String,
    pub user: User,
}

fn hash_password(password: &str) -> ServiceResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|h| h.to_string())
        .map_err(|e| ServiceError::Internal(format!("Password hashing failed: {e}")))
}

fn verify_password(password: &str, hash: &str) -> bool {
    PasswordHash::new(hash)
        .map(|parsed| {
            Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok()
        })
        .unwrap_or(false)
}

fn issue_token(config: &ServerConfig, user: &User) -> ServiceResult<String> {
    let exp = (Utc::now() + Duration::hours(TOKEN_TTL_HOURS)).timestamp() as usize;
    let claims = Claims {
        sub: user.id,
        email: user.email.clone(),
        name: user.name.clone(),
        exp,
    };
    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
    .map_err(|e| ServiceError::Internal(format!("Token encoding failed: {e}")))
}

fn validate_password(password: &str) -> ServiceResult<()> {
    if password.len() < MIN_PASSWORD_LEN {
        return Err(ServiceError::Validation(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }
    Ok(())
}

pub fn register<R>(
    repo: &R,
    config: &ServerConfig,
    name: &str,
    email: &str,
    password: &str,
) -> ServiceResult<Session>
where
    R: UserReader + UserWriter + ?Sized,
{
    let name = name.trim();
    let email = email.trim().to_lowercase();

    if name.is_empty() || email.is_empty() || password.is_empty() {
        return Err(ServiceError::Validation(
            "Name, email, and password are required.".to_string(),
        ));
    }
    if !email.validate_email() {
        return Err(ServiceError::Validation("Invalid email address".to_string()));
    }
    validate_password(password)?;

    if repo
        .get_user_credentials(&email)
        .map_err(ServiceError::from)?
        .is_some()
    {
        return Err(ServiceError::Validation(
            "Email is already registered".to_string(),
        ));
    }

    let password_hash = hash_password(password)?;
    let user = repo
        .create_user(&NewUser::new(name.to_string(), email, password_hash))
        .map_err(ServiceError::from)?;
    let token = issue_token(config, &user)?;

    Ok(Session { token, user })
}

pub fn login<R>(
    repo: &R,
    config: &ServerConfig,
    email: &str,
    password: &str,
) -> ServiceResult<Session>
where
    R: UserReader + ?Sized,
{
    let email = email.trim().to_lowercase();
    if email.is_empty() || password.is_empty() {
        return Err(ServiceError::Validation(
            "Email and password are required.".to_string(),
        ));
    }

    let (user, hash) = repo
        .get_user_credentials(&email)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::Unauthorized)?;

    if !verify_password(password, &hash) {
        return Err(ServiceError::Unauthorized);
    }

    let token = issue_token(config, &user)?;
    Ok(Session { token, user })
}

pub fn profile<R>(repo: &R, user_id: i32) -> ServiceResult<User>
where
    R: UserReader + ?Sized,
{
    repo.get_user_by_id(user_id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)
}

pub fn update_profile<R>(repo: &R, user_id: i32, name: &str, email: &str) -> ServiceResult<User>
where
    R: UserWriter + ?Sized,
{
    let name = name.trim();
    let email = email.trim().to_lowercase();
    if name.is_empty() || email.is_empty() {
        return Err(ServiceError::Validation(
            "Username and email are required.".to_string(),
        ));
    }
    if !email.validate_email() {
        return Err(ServiceError::Validation("Invalid email address".to_string()));
    }

    repo.update_user(
        user_id,
        &UpdateUser {
            name: name.to_string(),
            email,
        },
    )
    .map_err(ServiceError::from)
}

pub fn change_password<R>(
    repo: &R,
    user_id: i32,
    current_password: &str,
    new_password: &str,
) -> ServiceResult<()>
where
    R: UserReader + UserWriter + ?Sized,
{
    if current_password.is_empty() || new_password.is_empty() {
        return Err(ServiceError::Validation(
            "Current and new password are required.".to_string(),
        ));
    }
    validate_password(new_password)?;

    let hash = repo
        .get_password_hash(user_id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)?;

    if !verify_password(current_password, &hash) {
        return Err(ServiceError::Unauthorized);
    }

    let new_hash = hash_password(new_password)?;
    repo.set_password_hash(user_id, &new_hash)
        .map_err(ServiceError::from)
}
