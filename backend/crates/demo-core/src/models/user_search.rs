//! Search filter for listing users.
//!
//! Every field is optional and filters combine with AND. `name` and `email`
//! are substring matches; `id` is an exact match.

use crate::{CoreError, Result as CoreErrorResult, non_empty};

use std::panic::Location;

use error_location::ErrorLocation;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserSearch {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub email: Option<String>,
}

impl UserSearch {
    /// Parse a raw `id` filter. Missing or empty input means "no id filter".
    #[track_caller]
    pub fn parse_id(raw: Option<&str>) -> CoreErrorResult<Option<i64>> {
        match raw.map(str::trim) {
            None | Some("") => Ok(None),
            Some(value) => value
                .parse::<i64>()
                .map(Some)
                .map_err(|_| CoreError::InvalidUserId {
                    value: value.to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }),
        }
    }

    pub fn name(&self) -> Option<&str> {
        non_empty(&self.name)
    }

    pub fn email(&self) -> Option<&str> {
        non_empty(&self.email)
    }

    /// True when the search matches every row.
    pub fn is_unfiltered(&self) -> bool {
        self.id.is_none() && self.name().is_none() && self.email().is_none()
    }
}
