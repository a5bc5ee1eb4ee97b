use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A persisted contact. `id` is assigned by the store (or chosen by the caller on upsert)
/// and never changes afterwards.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: i64,
    pub name: String,
    pub phone_number: String,
    pub email: String,
}

/// Contact fields as supplied by a caller on create/upsert.
///
/// Missing fields deserialize as empty strings so they show up as validation
/// violations rather than as a malformed body.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct NewContact {
    pub name: String,
    pub phone_number: String,
    pub email: String,
}

impl NewContact {
    pub fn new(
        name: impl Into<String>,
        phone_number: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone_number: phone_number.into(),
            email: email.into(),
        }
    }

    /// Attaches an identifier, producing the persisted shape.
    pub fn with_id(self, id: i64) -> Contact {
        Contact {
            id,
            name: self.name,
            phone_number: self.phone_number,
            email: self.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn contact_serializes_camel_case() {
        let contact = NewContact::new("Alice Johnson", "1234567890", "alice@example.com").with_id(1);
        let value = serde_json::to_value(&contact).unwrap();
        assert_eq!(
            value,
            json!({
                "id": 1,
                "name": "Alice Johnson",
                "phoneNumber": "1234567890",
                "email": "alice@example.com"
            })
        );
    }

    #[test]
    fn new_contact_missing_fields_default_to_empty() {
        let payload: NewContact = serde_json::from_value(json!({ "name": "Bob" })).unwrap();
        assert_eq!(payload.name, "Bob");
        assert!(payload.phone_number.is_empty());
        assert!(payload.email.is_empty());
    }

    #[test]
    fn new_contact_ignores_client_supplied_id() {
        let payload: NewContact = serde_json::from_value(json!({
            "id": 99,
            "name": "Bob",
            "phoneNumber": "1",
            "email": "bob@example.com"
        }))
        .unwrap();
        assert_eq!(payload, NewContact::new("Bob", "1", "bob@example.com"));
    }
}
