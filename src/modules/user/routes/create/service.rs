use super::types::{request, response};
use crate::{modules::user::repository, types::Context};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Body) -> response::Response {
    payload.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    let email = payload.email.trim().to_lowercase();

    let mut tx = ctx.db_conn.pool.begin().await.map_err(|err| {
        tracing::error!("Failed to start database transaction: {}", err);
        response::Error::FailedToCreateUser
    })?;

    let existing = repository::find_by_email(&mut *tx, email.clone())
        .await
        .map_err(|_| response::Error::FailedToCreateUser)?;

    if existing.is_some() {
        return Err(response::Error::EmailAlreadyInUse);
    }

    let user = repository::create(
        &mut *tx,
        repository::CreateUserPayload {
            name: payload.name.trim().to_string(),
            email,
        },
    )
    .await
    .map_err(|err| match err {
        repository::Error::EmailAlreadyInUse => response::Error::EmailAlreadyInUse,
        repository::Error::UnexpectedError => response::Error::FailedToCreateUser,
    })?;

    tx.commit()
        .await
        .map_err(|err| {
            tracing::error!("Failed to commit database transaction: {}", err);
            response::Error::FailedToCreateUser
        })
        .map(|_| response::Success::UserCreated(user))
}
