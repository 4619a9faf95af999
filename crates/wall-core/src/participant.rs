//! Participants — who may see and write to a wall, and with which role.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use uuid::Uuid;

use crate::{Error, Result};

/// A participant's role on a wall.
///
/// Roles are a closed set, not a hierarchy: permission checks name the roles
/// they accept explicitly (see [`Role::AUTHORS`]) instead of comparing ranks.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Default,
  Serialize,
  Deserialize,
  Display,
  EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
  Admin,
  Editor,
  #[default]
  Member,
}

impl Role {
  /// Every role; used where any participant is accepted.
  pub const ALL: &'static [Role] = &[Role::Admin, Role::Editor, Role::Member];

  /// Roles allowed to post top-level messages.
  pub const AUTHORS: &'static [Role] = &[Role::Admin, Role::Editor];

  /// Parse a role name, reporting unknown names as a validation failure on
  /// the `role` field.
  pub fn parse(s: &str) -> Result<Self> {
    Role::from_str(s).map_err(|_| Error::invalid_enum("role"))
  }
}

/// A (subject, role) pair on a wall's roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
  /// Opaque identifier of the user or entity.
  pub subject: Uuid,
  #[serde(default)]
  pub role:    Role,
}

impl Participant {
  pub fn new(subject: Uuid, role: Role) -> Self { Self { subject, role } }

  pub fn is_admin(&self) -> bool { self.role == Role::Admin }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::ValidationKind;

  #[test]
  fn role_parses_lowercase_names() {
    assert_eq!(Role::parse("admin").unwrap(), Role::Admin);
    assert_eq!(Role::parse("editor").unwrap(), Role::Editor);
    assert_eq!(Role::parse("member").unwrap(), Role::Member);
    assert_eq!(Role::Editor.to_string(), "editor");
  }

  #[test]
  fn unknown_role_is_an_enum_validation_error() {
    let err = Role::parse("invalid").unwrap_err();
    assert!(matches!(
      err,
      Error::Validation { ref field, kind: ValidationKind::Enum } if field == "role"
    ));
  }

  #[test]
  fn role_defaults_to_member_when_omitted() {
    let p: Participant = serde_json::from_value(serde_json::json!({
      "subject": Uuid::nil(),
    }))
    .unwrap();
    assert_eq!(p.role, Role::Member);
  }

  #[test]
  fn unknown_role_is_rejected_on_deserialise() {
    let res: Result<Participant, _> = serde_json::from_value(serde_json::json!({
      "subject": Uuid::nil(),
      "role": "owner",
    }));
    assert!(res.is_err());
  }
}
