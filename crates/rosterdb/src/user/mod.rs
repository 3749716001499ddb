//! The user record: the one entity this roster manages.

pub mod fixtures;

use crate::{
    model::{FieldKind, FieldModel, FieldPresence, RecordModel},
    patch::{PatchError, PatchRecord},
    traits::{FieldValues, FreshKey, Path, RecordKind},
    value::Value,
};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error as ThisError;
use ulid::Ulid;

const USER_PATH: &str = "rosterdb::user::User";

///
/// UserId
///
/// Typed primary key. Minted by repositories on create; a user without
/// one has never been saved.
///

#[derive(
    Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
#[serde(transparent)]
pub struct UserId(Ulid);

impl UserId {
    #[must_use]
    pub fn generate() -> Self {
        Self(Ulid::new())
    }
}

impl FreshKey for UserId {
    fn fresh() -> Self {
        Self::generate()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UserId {
    type Err = ulid::DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ulid::from_string(s).map(Self)
    }
}

///
/// UserType
///
/// The roster's role split, round-tripping the form select's
/// lowercase wire form.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Basic,
    Admin,
}

impl UserType {
    /// Allowed wire variants, in select-option order.
    pub const CHOICES: &'static [&'static str] = &["basic", "admin"];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

///
/// ParseUserTypeError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[error("unknown user type: {0}")]
pub struct ParseUserTypeError(String);

impl FromStr for UserType {
    type Err = ParseUserTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "basic" => Ok(Self::Basic),
            "admin" => Ok(Self::Admin),
            other => Err(ParseUserTypeError(other.to_string())),
        }
    }
}

///
/// User
///
/// Wire shape matches the original admin surface: camelCase field
/// names and a `type` discriminator, with `id` omitted while unsaved.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<UserId>,
    pub first_name: String,
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    pub email: String,
    #[serde(rename = "type")]
    pub user_type: UserType,
}

static USER_MODEL: RecordModel = RecordModel {
    path: USER_PATH,
    record_name: "user",
    primary_key: "id",
    fields: &[
        FieldModel {
            name: "firstName",
            kind: FieldKind::Text,
            presence: FieldPresence::Required,
        },
        FieldModel {
            name: "lastName",
            kind: FieldKind::Text,
            presence: FieldPresence::Required,
        },
        FieldModel {
            name: "phoneNumber",
            kind: FieldKind::Phone,
            presence: FieldPresence::Optional,
        },
        FieldModel {
            name: "email",
            kind: FieldKind::Email,
            presence: FieldPresence::Required,
        },
        FieldModel {
            name: "type",
            kind: FieldKind::Choice(UserType::CHOICES),
            presence: FieldPresence::Required,
        },
    ],
};

impl Path for User {
    const PATH: &'static str = USER_PATH;
}

impl RecordKind for User {
    type Key = UserId;

    const RECORD_NAME: &'static str = "user";
    const MODEL: &'static RecordModel = &USER_MODEL;

    fn key(&self) -> Option<UserId> {
        self.id
    }

    fn set_key(&mut self, key: UserId) {
        self.id = Some(key);
    }
}

impl FieldValues for User {
    fn get_value(&self, field: &str) -> Option<Value> {
        match field {
            "firstName" => Some(Value::Text(self.first_name.clone())),
            "lastName" => Some(Value::Text(self.last_name.clone())),
            "phoneNumber" => Some(Value::from(self.phone_number.clone())),
            "email" => Some(Value::Text(self.email.clone())),
            "type" => Some(Value::from(self.user_type.as_str())),
            _ => None,
        }
    }
}

fn required_text(field: &str, value: &Value) -> Result<String, PatchError> {
    value
        .as_text()
        .map(str::to_string)
        .ok_or_else(|| PatchError::invalid(field, "a value is required"))
}

impl PatchRecord for User {
    fn apply_field(&mut self, field: &str, value: &Value) -> Result<(), PatchError> {
        match field {
            "firstName" => self.first_name = required_text(field, value)?,
            "lastName" => self.last_name = required_text(field, value)?,
            "email" => self.email = required_text(field, value)?,
            "phoneNumber" => self.phone_number = value.as_text().map(str::to_string),
            "type" => {
                let text = required_text(field, value)?;
                self.user_type = text
                    .parse()
                    .map_err(|err: ParseUserTypeError| PatchError::invalid(field, err.to_string()))?;
            }
            "id" => {
                return Err(PatchError::ImmutableField {
                    field: field.to_string(),
                });
            }
            other => {
                return Err(PatchError::UnknownField {
                    field: other.to_string(),
                });
            }
        }

        Ok(())
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_type_round_trips_the_select_wire_form() {
        for (text, expected) in [("basic", UserType::Basic), ("admin", UserType::Admin)] {
            let parsed: UserType = text.parse().unwrap();
            assert_eq!(parsed, expected);
            assert_eq!(parsed.to_string(), text);
        }

        assert!("root".parse::<UserType>().is_err());
    }

    #[test]
    fn field_values_cover_the_model() {
        let tom = fixtures::tom_sawyer();
        for name in User::MODEL.field_names() {
            assert!(tom.get_value(name).is_some(), "missing value for {name}");
        }
        assert!(tom.get_value("id").is_none());
    }

    #[test]
    fn wire_shape_uses_camel_case_and_type() {
        let tom = fixtures::tom_sawyer();
        let json = serde_json::to_value(&tom).unwrap();

        assert!(json.get("firstName").is_some());
        assert!(json.get("phoneNumber").is_some());
        assert_eq!(json["type"], "basic");
        assert!(json.get("first_name").is_none());
    }

    #[test]
    fn unsaved_user_serializes_without_id() {
        let mut tom = fixtures::tom_sawyer();
        tom.id = None;

        let json = serde_json::to_value(&tom).unwrap();
        assert!(json.get("id").is_none());

        let back: User = serde_json::from_value(json).unwrap();
        assert_eq!(back.id, None);
    }

    #[test]
    fn user_id_parses_its_display_form() {
        let id = UserId::generate();
        let parsed: UserId = id.to_string().parse().unwrap();

        assert_eq!(parsed, id);
    }
}
