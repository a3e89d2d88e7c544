pub mod api;
pub mod app_state;
pub mod error;
pub mod logger;
pub mod routes;
pub mod shutdown_coordinator;
pub mod shutdown_guard;


pub use api::{
    error::ApiError,
    error::Result as ApiResult,
    greeting::{GREETING, hello},
    status_message::StatusMessage,
    users::{
        create_user_request::CreateUserRequest,
        list_users_query::ListUsersQuery,
        update_user_request::UpdateUserRequest,
        user_dto::UserDto,
        user_lookup_response::UserLookupResponse,
        users::{create_user, delete_user, get_user, list_users, update_user},
    },
};
pub use app_state::AppState;
pub use shutdown_coordinator::ShutdownCoordinator;
pub use shutdown_guard::ShutdownGuard;

pub use crate::routes::build_router;
