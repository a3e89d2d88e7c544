//! Partial update of a user.

use crate::non_empty;

/// Fields to overwrite on an existing user.
///
/// Absent and empty values both mean "leave this column alone".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserChanges {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl UserChanges {
    pub fn name(&self) -> Option<&str> {
        non_empty(&self.name)
    }

    pub fn email(&self) -> Option<&str> {
        non_empty(&self.email)
    }

    /// True when applying these changes writes no column besides `id`.
    pub fn is_empty(&self) -> bool {
        self.name().is_none() && self.email().is_none()
    }
}
