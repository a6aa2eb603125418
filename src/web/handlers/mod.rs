//! HTML template rendering handlers.

mod login;
mod swagger;

pub use login::{LoginForm, login_page_handler, login_submit_handler};
pub use swagger::{openapi_handler, swagger_handler};
