use super::*;
use rocket::http::SameSite;

#[post("/login", format = "application/json", data = "<login>")]
pub fn post_login(
    db: sqlite::Connections,
    cookies: &CookieJar<'_>,
    login: JsonResult<json::Credentials>,
    jwt_state: &State<jwt::JwtState>,
) -> Result<Option<json::JwtToken>> {
    let login = login?.into_inner();
    let user = {
        let credentials = usecases::Credentials {
            email: &login.email.parse()?,
            password: &login.password,
        };
        usecases::login_with_email(&db.shared()?, &credentials).inspect_err(|err| {
            debug!("Login with email '{}' failed: {err}", login.email);
        })?
    };

    let mut response = None;
    if cfg!(feature = "jwt") {
        let token = jwt_state.generate_token(&user)?;
        response = Some(json::JwtToken { token });
    }
    if cfg!(feature = "cookies") {
        cookies.add_private(
            Cookie::build((COOKIE_EMAIL_KEY, user.email.into_string())).same_site(SameSite::Lax),
        );
    }
    Ok(Json(response))
}

#[post("/logout")]
pub fn post_logout(
    auth: Auth,
    cookies: &CookieJar<'_>,
    jwt_state: &State<jwt::JwtState>,
) -> Json<()> {
    cookies.remove_private(COOKIE_EMAIL_KEY);
    if cfg!(feature = "jwt") {
        for bearer in auth.bearer_tokens() {
            jwt_state.blacklist_token(bearer.to_owned());
        }
    }
    Json(())
}

#[post("/users", format = "application/json", data = "<new_user>")]
pub fn post_user(db: sqlite::Connections, new_user: JsonResult<json::NewUser>) -> Result<json::User> {
    let new_user = from_json::try_new_user(new_user?.into_inner())?;
    let user = flows::register_user(db.pool(), new_user)?;
    Ok(Json(user.into()))
}

#[get("/users/current")]
pub fn get_current_user(db: sqlite::Connections, account: Account) -> Result<json::User> {
    let user = account.user(&db.shared()?)?;
    Ok(Json(user.into()))
}

#[put("/users/current", format = "application/json", data = "<update>")]
pub fn put_current_user(
    db: sqlite::Connections,
    auth: Auth,
    update: JsonResult<json::UpdateProfile>,
) -> Result<json::User> {
    let update = from_json::update_profile(update?.into_inner());
    let user = auth.user(&db.shared()?)?;
    let user = usecases::update_profile(&db.exclusive()?, user.id.as_str(), update)?;
    Ok(Json(user.into()))
}

#[get("/users")]
pub fn get_users(db: sqlite::Connections, auth: Auth) -> Result<Vec<json::User>> {
    let db = db.shared()?;
    auth.user_with_roles(&db, ADMIN_ROLES)?;
    let users = db.all_users()?;
    Ok(Json(users.into_iter().map(Into::into).collect()))
}

#[get("/users/<id>", rank = 2)]
pub fn get_user(db: sqlite::Connections, auth: Auth, id: &str) -> Result<json::User> {
    let db = db.shared()?;
    let account = auth.user(&db)?;
    let user = usecases::get_user(&db, &account, id)?;
    Ok(Json(user.into()))
}

#[post("/users/<id>/role", format = "application/json", data = "<data>")]
pub fn post_user_role(
    db: sqlite::Connections,
    auth: Auth,
    id: &str,
    data: JsonResult<json::ChangeUserRole>,
) -> Result<json::User> {
    let account = auth.user_with_roles(&db.shared()?, SUPER_ADMIN_ROLES)?;
    let json::ChangeUserRole { role } = data?.into_inner();
    let user = flows::change_user_role(db.pool(), &account, id, role.into())?;
    Ok(Json(user.into()))
}

#[delete("/users/<id>")]
pub fn delete_user(db: sqlite::Connections, auth: Auth, id: &str) -> Result<()> {
    let account = auth.user_with_roles(&db.shared()?, SUPER_ADMIN_ROLES)?;
    usecases::delete_user(&db.exclusive()?, &account, id)?;
    Ok(Json(()))
}

/// Tells the UI whether to render a dashboard view or where to redirect.
#[get("/dashboard/access?<view>")]
pub fn get_dashboard_access(
    db: sqlite::Connections,
    auth: Auth,
    view: Option<&str>,
) -> Result<json::AccessDecision> {
    let required = match view.unwrap_or("admin") {
        "admin" => ADMIN_ROLES,
        "super-admin" => SUPER_ADMIN_ROLES,
        other => {
            return Err(ApiError::OtherWithStatus(
                anyhow!("Unknown dashboard view '{other}'"),
                Status::BadRequest,
            ));
        }
    };
    let (auth_state, profile_state) = if auth.account_email().is_ok() {
        let profile = match auth.try_user(&db.shared()?)? {
            Some(user) => ProfileState::Loaded(user.role),
            None => ProfileState::Missing,
        };
        (AuthState::SignedIn, profile)
    } else {
        (AuthState::SignedOut, ProfileState::Missing)
    };
    let decision = decide_access(auth_state, profile_state, required);
    Ok(Json(to_json::access_decision(decision)))
}
