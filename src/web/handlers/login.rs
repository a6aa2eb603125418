//! Login page handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;

use crate::domain::entities::LoginOutcome;
use crate::error::AppError;
use crate::state::AppState;

/// Template for the login page.
///
/// Renders `templates/login.html` with an optional failure message.
#[derive(Template, WebTemplate)]
#[template(path = "login.html")]
struct LoginTemplate {
    message: Option<String>,
}

/// Submitted login form.
///
/// Missing fields are treated as empty strings.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub password: String,
}

/// Renders the empty login page.
///
/// # Endpoint
///
/// `GET /`
pub async fn login_page_handler() -> impl IntoResponse {
    LoginTemplate { message: None }
}

/// Handles a login submission.
///
/// # Endpoint
///
/// `POST /` with form fields `name` and `password`
///
/// # Responses
///
/// - **303 See Other** to `/swagger/<token>` when the credentials match
/// - **200 OK** with the login form and `please login with correct credentials`
///   otherwise
///
/// # Errors
///
/// Returns `500` only if the credential store itself fails.
pub async fn login_submit_handler(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> Result<Response, AppError> {
    let outcome = state
        .login_service
        .attempt_login(&form.name, &form.password)
        .await?;

    Ok(match outcome {
        LoginOutcome::Success { redirect_to } => Redirect::to(&redirect_to).into_response(),
        LoginOutcome::Failure { message } => LoginTemplate {
            message: Some(message),
        }
        .into_response(),
    })
}
