use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Attendee {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub check_in_at: Option<DateTime<Utc>>
}

/// One page of attendees plus the number of attendees across all pages
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct ResultSet {
    pub attendees: Vec<Attendee>,
    pub total: u64
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(u64)
}

// Some pass-in servers use numeric ids
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
    where D: Deserializer<'de> {
    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(id) => id,
        RawId::Number(id) => id.to_string()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_deserialize_result_set() {
        let body = r#"{
            "attendees": [
                {"id": "a1", "name": "Ana", "email": "ana@mail.com", "createdAt": "2024-04-01T10:00:00.000Z", "checkInAt": null},
                {"id": 42, "name": "Bruno", "email": "bruno@mail.com", "createdAt": "2024-04-01T10:00:00Z", "checkInAt": "2024-04-02T08:30:00Z"},
                {"id": "c3", "name": "Carla", "email": "carla@mail.com", "createdAt": "2024-04-01T10:00:00Z"}
            ],
            "total": 23
        }"#;
        let actual: ResultSet = serde_json::from_str(body).unwrap();

        assert_eq!(actual.total, 23);
        assert_eq!(actual.attendees.len(), 3);
        assert_eq!(actual.attendees[0].id, "a1");
        assert_eq!(actual.attendees[0].created_at, Utc.with_ymd_and_hms(2024, 4, 1, 10, 0, 0).unwrap());
        assert_eq!(actual.attendees[0].check_in_at, None);
        assert_eq!(actual.attendees[1].id, "42");
        assert_eq!(actual.attendees[1].check_in_at, Some(Utc.with_ymd_and_hms(2024, 4, 2, 8, 30, 0).unwrap()));
        assert_eq!(actual.attendees[2].check_in_at, None);
    }

    #[test]
    fn test_deserialize_rejects_missing_total() {
        let actual = serde_json::from_str::<ResultSet>(r#"{"attendees": []}"#);
        assert!(actual.is_err());
    }
}
