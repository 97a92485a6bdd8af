//! User entity <-> model mapper

use portal_core::entities::User;
use portal_core::Role;

use crate::models::UserModel;

impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: model.id,
            email: model.email,
            full_name: model.full_name,
            role: Role::from_str_lossy(&model.role),
            phone: model.phone,
            created_at: model.created_at,
            last_login: model.last_login,
        }
    }
}
