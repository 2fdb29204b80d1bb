use crate::{dtos::UserDTO, MessageResponse};
use event_reminder_domain::{User, ID};
use serde::{Deserialize, Serialize};

pub type UserResponse = UserDTO;

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        UserDTO::new(user)
    }
}

pub mod get_users {
    use super::*;

    pub type APIResponse = Vec<UserDTO>;
}

pub mod get_user {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub user_id: ID,
    }

    pub type APIResponse = UserResponse;
}

pub mod create_user {
    use super::*;

    #[derive(Debug, Default, Deserialize, Serialize)]
    pub struct RequestBody {
        #[serde(default)]
        pub name: Option<String>,
        #[serde(default)]
        pub email: Option<String>,
    }

    pub type APIResponse = UserResponse;
}

pub mod update_user {
    use super::*;

    #[derive(Debug, Default, Deserialize, Serialize)]
    pub struct RequestBody {
        #[serde(default)]
        pub name: Option<String>,
        #[serde(default)]
        pub email: Option<String>,
    }

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub user_id: ID,
    }

    pub type APIResponse = UserResponse;
}

pub mod delete_user {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub user_id: ID,
    }

    pub type APIResponse = MessageResponse;
}
