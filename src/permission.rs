// Copyright 2025 Cowboy AI, LLC.

//! CRUD permissions granted to roles on events

use crate::errors::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::BitOr;

/// Set of Create/Read/Update/Delete permissions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Permissions {
    /// May trigger the event to create a case
    pub create: bool,
    /// May see the event in case history
    pub read: bool,
    /// May trigger the event on an existing case
    pub update: bool,
    /// May delete
    pub delete: bool,
}

impl Permissions {
    /// No permissions
    pub const NONE: Self = Self::from_flags(false, false, false, false);
    /// Read only, the "history only" grant
    pub const READ: Self = Self::from_flags(false, true, false, false);
    /// Create, read and update
    pub const CREATE_READ_UPDATE: Self = Self::from_flags(true, true, true, false);
    /// Everything
    pub const CREATE_READ_UPDATE_DELETE: Self = Self::from_flags(true, true, true, true);

    const fn from_flags(create: bool, read: bool, update: bool, delete: bool) -> Self {
        Self {
            create,
            read,
            update,
            delete,
        }
    }

    /// Parse a CRUD string such as `"CRU"` or `"R"`
    pub fn parse(crud: &str) -> ConfigResult<Self> {
        let mut permissions = Self::NONE;
        for c in crud.chars() {
            match c.to_ascii_uppercase() {
                'C' => permissions.create = true,
                'R' => permissions.read = true,
                'U' => permissions.update = true,
                'D' => permissions.delete = true,
                _ => {
                    return Err(ConfigError::InvalidPermission {
                        crud: crud.to_string(),
                        flag: c,
                    })
                }
            }
        }
        Ok(permissions)
    }

    /// Union of two permission sets
    pub fn union(self, other: Self) -> Self {
        Self {
            create: self.create || other.create,
            read: self.read || other.read,
            update: self.update || other.update,
            delete: self.delete || other.delete,
        }
    }

    /// Whether no permission is set
    pub fn is_empty(&self) -> bool {
        *self == Self::NONE
    }

    /// Render as a CRUD string
    pub fn to_crud_string(&self) -> String {
        let mut s = String::with_capacity(4);
        if self.create {
            s.push('C');
        }
        if self.read {
            s.push('R');
        }
        if self.update {
            s.push('U');
        }
        if self.delete {
            s.push('D');
        }
        s
    }
}

impl BitOr for Permissions {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl fmt::Display for Permissions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_crud_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crud_rendering() {
        assert_eq!(Permissions::CREATE_READ_UPDATE.to_crud_string(), "CRU");
        assert_eq!(Permissions::READ.to_string(), "R");
        assert_eq!(Permissions::CREATE_READ_UPDATE_DELETE.to_string(), "CRUD");
        assert_eq!(Permissions::NONE.to_string(), "");
    }

    #[test]
    fn test_parse() {
        assert_eq!(Permissions::parse("cru").unwrap(), Permissions::CREATE_READ_UPDATE);
        assert_eq!(Permissions::parse("R").unwrap(), Permissions::READ);
        assert_eq!(
            Permissions::parse("RX"),
            Err(ConfigError::InvalidPermission {
                crud: "RX".to_string(),
                flag: 'X',
            })
        );
    }

    #[test]
    fn test_union() {
        let merged = Permissions::READ | Permissions::parse("CU").unwrap();
        assert_eq!(merged, Permissions::CREATE_READ_UPDATE);
        assert!(Permissions::NONE.is_empty());
        assert!(!merged.is_empty());
    }
}
