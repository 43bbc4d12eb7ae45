use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use stockroom_auth::Role;

use crate::middleware::auth::AUTH_TOKEN_HEADER;
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::auth::model::{AuthResponse, LoginRequest, MessageResponse};
use crate::modules::users::model::{
    CreateUserDto, CreatedUserResponse, User, UserResponse, UsersResponse,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::register_user,
        crate::modules::auth::controller::login_user,
        crate::modules::auth::controller::get_me,
        crate::modules::users::controller::get_users,
        crate::modules::users::controller::create_user,
        crate::modules::users::controller::delete_user,
    ),
    components(
        schemas(
            User,
            Role,
            CreateUserDto,
            LoginRequest,
            AuthResponse,
            MessageResponse,
            UserResponse,
            UsersResponse,
            CreatedUserResponse,
            ErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Registration, login and the current account"),
        (name = "Users", description = "Account management (admin only)"),
    ),
    info(
        title = "Stockroom API",
        version = "0.1.0",
        description = "Inventory management API: accounts, authentication and role-based access control",
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "auth_token",
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new(AUTH_TOKEN_HEADER))),
            )
        }
    }
}
