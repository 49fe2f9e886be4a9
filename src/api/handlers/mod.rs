//! HTTP request handlers for API endpoints.

pub mod root;
pub mod users;

pub use root::root_handler;
pub use users::{
    create_user_handler, delete_user_handler, delete_user_without_id_handler, get_user_handler,
    list_users_handler, method_not_allowed_handler, update_user_handler,
};
