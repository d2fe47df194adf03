//! The customer record as it travels over the wire and in and out of storage.

use serde::{Deserialize, Serialize};

/// A customer record.
///
/// `id` is `None` only before the record has been persisted; storage assigns
/// it on insert and it never changes afterwards. Create requests therefore
/// omit the field (or send it, in which case it is ignored), and every
/// response for a persisted record carries it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Customer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub role: String,
    pub email: String,
    pub phone: String,
    pub contacted: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jane() -> Customer {
        Customer {
            id: None,
            name: "Jane Doe".into(),
            role: "Vet".into(),
            email: "jane@x.de".into(),
            phone: "123".into(),
            contacted: false,
        }
    }

    #[test]
    fn create_request_deserializes_without_id() {
        let parsed: Customer = serde_json::from_str(
            r#"{"name":"Jane Doe","role":"Vet","email":"jane@x.de","phone":"123","contacted":false}"#,
        )
        .expect("valid body");
        assert_eq!(parsed, jane());
    }

    #[test]
    fn client_supplied_id_is_carried_not_invented() {
        let parsed: Customer = serde_json::from_str(
            r#"{"id":42,"name":"Jane Doe","role":"Vet","email":"jane@x.de","phone":"123","contacted":false}"#,
        )
        .expect("valid body");
        assert_eq!(parsed.id, Some(42));
    }

    #[test]
    fn unsaved_record_serializes_without_id() {
        let json = serde_json::to_value(jane()).expect("serialize");
        assert!(json.get("id").is_none());
    }

    #[test]
    fn persisted_record_serializes_with_id() {
        let saved = Customer {
            id: Some(7),
            ..jane()
        };
        let json = serde_json::to_value(saved).expect("serialize");
        assert_eq!(json["id"], 7);
        assert_eq!(json["contacted"], false);
    }

    #[test]
    fn missing_field_is_rejected() {
        let result: Result<Customer, _> =
            serde_json::from_str(r#"{"name":"Jane Doe","contacted":false}"#);
        assert!(result.is_err());
    }
}
