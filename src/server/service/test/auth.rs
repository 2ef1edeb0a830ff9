use super::*;
use crate::server::{
    model::user::Credentials,
    service::{auth::AuthService, token::TokenService},
};

/// Minimum bcrypt cost, keeps hashing fast in tests.
const TEST_COST: u32 = 4;

fn credentials(email: &str, password: &str) -> Credentials {
    Credentials {
        email: email.to_string(),
        password: password.to_string(),
    }
}

/// Tests registering and then logging in with the same credentials.
///
/// Verifies that only a bcrypt hash is stored and that the issued token carries the
/// account's ID and email.
///
/// Expected: Ok(User) then Ok(token) verifying to the same identity
#[tokio::test]
async fn registers_and_logs_in() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = TokenService::new("test-secret").unwrap();

    let service = AuthService::new(db, &tokens, TEST_COST);
    let user = service
        .register(credentials("a@b.com", "hunter22"))
        .await?;

    let stored = entity::prelude::User::find_by_id(user.user_id)
        .one(db)
        .await?
        .unwrap();
    assert_ne!(stored.password_hash, "hunter22");
    assert!(bcrypt::verify("hunter22", &stored.password_hash).unwrap());

    let token = service.login(credentials("a@b.com", "hunter22")).await?;
    let identity = tokens.verify(&token)?;

    assert_eq!(identity.user_id, user.user_id);
    assert_eq!(identity.email, "a@b.com");

    Ok(())
}

/// Tests registering an email that already has an account.
///
/// Expected: Err(AuthError::DuplicateAccount) and a single account row
#[tokio::test]
async fn rejects_duplicate_registration() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = TokenService::new("test-secret").unwrap();

    let service = AuthService::new(db, &tokens, TEST_COST);
    service.register(credentials("a@b.com", "first")).await?;
    let result = service.register(credentials("a@b.com", "second")).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::DuplicateAccount))
    ));
    assert_eq!(entity::prelude::User::find().count(db).await?, 1);

    Ok(())
}

/// Tests registering with malformed emails.
///
/// Expected: Err(AuthError::InvalidEmail) and no account row
#[tokio::test]
async fn rejects_invalid_email_on_register() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = TokenService::new("test-secret").unwrap();

    let service = AuthService::new(db, &tokens, TEST_COST);

    for email in ["", "plain", "a@b", "a@b.c", "a b@c.com"] {
        let result = service.register(credentials(email, "pw")).await;
        assert!(
            matches!(result, Err(AppError::AuthErr(AuthError::InvalidEmail))),
            "accepted {:?}",
            email
        );
    }
    assert_eq!(entity::prelude::User::find().count(db).await?, 0);

    Ok(())
}

/// Tests that unknown emails and wrong passwords fail the same way.
///
/// Expected: Err(AuthError::InvalidCredentials) for both
#[tokio::test]
async fn login_failures_are_indistinguishable() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = TokenService::new("test-secret").unwrap();

    let service = AuthService::new(db, &tokens, TEST_COST);
    service.register(credentials("a@b.com", "right")).await?;

    let wrong_password = service.login(credentials("a@b.com", "wrong")).await;
    let unknown_email = service.login(credentials("nobody@b.com", "right")).await;

    assert!(matches!(
        wrong_password,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));
    assert!(matches!(
        unknown_email,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}

/// Tests logging in with a malformed email.
///
/// Expected: Err(AuthError::InvalidEmail) before any lookup
#[tokio::test]
async fn rejects_invalid_email_on_login() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = TokenService::new("test-secret").unwrap();

    let service = AuthService::new(db, &tokens, TEST_COST);
    let result = service.login(credentials("not-an-email", "pw")).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidEmail))
    ));

    Ok(())
}

/// Tests that factory-created accounts can be looked up but not logged into.
///
/// The factory stores a placeholder that is not a bcrypt hash, so verification itself
/// fails rather than reporting a mismatch.
///
/// Expected: Err(AuthError::PasswordHash)
#[tokio::test]
async fn surfaces_unreadable_stored_hash() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let tokens = TokenService::new("test-secret").unwrap();

    let user = factory::user::UserFactory::new(db)
        .email("legacy@example.com")
        .build()
        .await?;

    let service = AuthService::new(db, &tokens, TEST_COST);
    let result = service.login(credentials(&user.email, "anything")).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::PasswordHash(_)))
    ));

    Ok(())
}
