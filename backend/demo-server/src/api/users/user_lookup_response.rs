use crate::UserDto;

use serde::Serialize;

/// Single user lookup. A missing user serializes as `{}`.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum UserLookupResponse {
    Found(UserDto),
    Missing {},
}

impl From<Option<UserDto>> for UserLookupResponse {
    fn from(user: Option<UserDto>) -> Self {
        match user {
            Some(dto) => UserLookupResponse::Found(dto),
            None => UserLookupResponse::Missing {},
        }
    }
}
