use crate::ApiError;

use demo_core::UserSearch;

use serde::Deserialize;

/// Query parameters for listing users
///
/// `id` is taken as a string so that `?id=` means "no id filter" instead of
/// a rejected request.
#[derive(Debug, Default, Deserialize)]
pub struct ListUsersQuery {
    pub id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
}

impl TryFrom<ListUsersQuery> for UserSearch {
    type Error = ApiError;

    #[track_caller]
    fn try_from(query: ListUsersQuery) -> Result<Self, Self::Error> {
        Ok(UserSearch {
            id: UserSearch::parse_id(query.id.as_deref())?,
            name: query.name,
            email: query.email,
        })
    }
}
