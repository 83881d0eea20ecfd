use std::{ops::Deref, sync::Arc};

use rocket::{
    self,
    http::Status,
    outcome::try_outcome,
    request::{FromRequest, Outcome, Request},
    State,
};

use crate::{
    core::{prelude::*, usecases},
    web::jwt,
};
use msh_application::error::AppError;
use msh_core::{
    gateways::{geocode::GeoCodingGateway, storage::AttachmentStorage},
    usecases::Error as ParameterError,
};

pub const COOKIE_EMAIL_KEY: &str = "msh-user-email";

type Result<T> = std::result::Result<T, AppError>;

fn get_bearer_token(auth_header_val: &str) -> Option<&str> {
    let (scheme, token) = auth_header_val.split_once(' ')?;
    (scheme == "Bearer" && !token.is_empty()).then_some(token)
}

/// Rejects a token that has been issued for another account
/// with the same e-mail address or before a role change.
fn verify_token_claims(claims: Option<&jwt::Claims>, user: &User) -> Result<()> {
    match claims {
        Some(claims) if !claims.matches(user) => {
            log::debug!("Token of user {} is outdated", claims.user_id());
            Err(ParameterError::Unauthorized.into())
        }
        _ => Ok(()),
    }
}

/// The (optional) principal of a request.
///
/// The e-mail address is taken from the private session cookie
/// or from a valid JWT in the `Authorization` header.
#[derive(Debug)]
pub struct Auth {
    bearer_tokens: Vec<String>,
    account_email: Option<EmailAddress>,
    token_claims: Option<jwt::Claims>,
}

impl Auth {
    pub fn account_email(&self) -> Result<&EmailAddress> {
        self.account_email
            .as_ref()
            .ok_or_else(|| ParameterError::Unauthorized.into())
    }

    pub fn bearer_tokens(&self) -> &[String] {
        &self.bearer_tokens
    }

    /// The signed-in user if the account still exists.
    pub fn try_user<R: UserRepo>(&self, repo: &R) -> Result<Option<User>> {
        let Some(email) = &self.account_email else {
            return Ok(None);
        };
        let user = repo.try_get_user_by_email(email)?;
        Ok(user.filter(|user| verify_token_claims(self.token_claims.as_ref(), user).is_ok()))
    }

    /// Any signed-in user.
    pub fn user<R: UserRepo>(&self, repo: &R) -> Result<User> {
        self.user_with_roles(repo, &[])
    }

    pub fn user_with_roles<R: UserRepo>(&self, repo: &R, roles: &[Role]) -> Result<User> {
        let user = usecases::authorize_user_by_email(repo, self.account_email()?, roles)?;
        verify_token_claims(self.token_claims.as_ref(), &user)?;
        Ok(user)
    }

    fn bearer_tokens_from_header(request: &Request) -> Vec<String> {
        request
            .headers()
            .get("Authorization")
            .filter_map(get_bearer_token)
            .map(ToOwned::to_owned)
            .collect()
    }

    fn account_email_from_cookie(request: &Request) -> Option<EmailAddress> {
        request
            .cookies()
            .get_private(COOKIE_EMAIL_KEY)
            .and_then(|cookie| cookie.value().parse().ok())
    }

    async fn claims_from_jwt_in_header(
        request: &Request<'_>,
        bearer_tokens: &[String],
    ) -> Option<(EmailAddress, jwt::Claims)> {
        let jwt_state = request.guard::<&State<jwt::JwtState>>().await.succeeded()?;
        bearer_tokens
            .iter()
            .filter_map(|token| jwt_state.validate_token(token).ok())
            .find_map(|claims| Some((claims.email()?, claims)))
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Auth {
    type Error = ();
    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let bearer_tokens = Self::bearer_tokens_from_header(request);
        let mut account_email = None;
        let mut token_claims = None;
        if cfg!(feature = "cookies") {
            account_email = Self::account_email_from_cookie(request);
        }
        if cfg!(feature = "jwt") && account_email.is_none() {
            if let Some((email, claims)) =
                Self::claims_from_jwt_in_header(request, &bearer_tokens).await
            {
                account_email = Some(email);
                token_claims = Some(claims);
            }
        }
        Outcome::Success(Self {
            bearer_tokens,
            account_email,
            token_claims,
        })
    }
}

/// A request that must be signed in.
#[derive(Debug)]
pub struct Account {
    email: EmailAddress,
    token_claims: Option<jwt::Claims>,
}

impl Account {
    /// The signed-in user, regardless of the role.
    pub fn user<R: UserRepo>(&self, repo: &R) -> Result<User> {
        let user = usecases::authorize_user_by_email(repo, &self.email, &[])?;
        verify_token_claims(self.token_claims.as_ref(), &user)?;
        Ok(user)
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Account {
    type Error = ();
    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let auth = try_outcome!(Auth::from_request(request).await);
        match auth.account_email {
            Some(email) => Outcome::Success(Account {
                email,
                token_claims: auth.token_claims,
            }),
            None => Outcome::Error((Status::Unauthorized, ())),
        }
    }
}

#[derive(Clone)]
pub struct GeoCoding(pub Arc<dyn GeoCodingGateway + Send + Sync>);

impl Deref for GeoCoding {
    type Target = dyn GeoCodingGateway + Send + Sync;
    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

pub struct Storage(pub Box<dyn AttachmentStorage + Send + Sync>);

impl Deref for Storage {
    type Target = dyn AttachmentStorage + Send + Sync;
    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}
