use serde::{Deserialize, Serialize};

/// Snapshot of the authenticated user as the backend returns it. Role-specific
/// fields are optional; only the ones matching `role` are populated.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(default, alias = "_id")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub verified: bool,
    // citizen
    #[serde(default)]
    pub aadhar_number: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub date_of_birth: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    // police
    #[serde(default)]
    pub badge_number: Option<String>,
    #[serde(default)]
    pub station_name: Option<String>,
    #[serde(default)]
    pub jurisdiction_area: Option<String>,
    #[serde(default)]
    pub rank: Option<String>,
    // doctor
    #[serde(default)]
    pub specialization: Option<String>,
    #[serde(default)]
    pub license_number: Option<String>,
    #[serde(default)]
    pub hospital_name: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

impl UserRecord {
    /// Identifier used for report ownership; falls back to the email when the
    /// backend returned no id field.
    pub fn report_id(&self) -> Option<String> {
        self.id.clone().or_else(|| {
            if self.email.is_empty() {
                None
            } else {
                Some(self.email.clone())
            }
        })
    }
}

/// Standard `{success, message?, data?}` response wrapper used by every
/// CivicIQ endpoint.
#[derive(Clone, Debug, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<T>,
}

impl<T> ApiEnvelope<T> {
    pub fn into_result(self) -> Result<T, String> {
        if self.success {
            self.data
                .ok_or_else(|| "response carried no data".to_string())
        } else {
            Err(self
                .message
                .unwrap_or_else(|| "request failed".to_string()))
        }
    }

    /// For endpoints that answer with only an acknowledgement message.
    pub fn into_message(self) -> Result<String, String> {
        if self.success {
            Ok(self.message.unwrap_or_default())
        } else {
            Err(self
                .message
                .unwrap_or_else(|| "request failed".to_string()))
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct LoginData {
    pub token: String,
    pub user: UserRecord,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct ProfileData {
    pub user: UserRecord,
}

/// A missing-person report as listed on the history screen.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct MissingReportDto {
    #[serde(default, alias = "_id")]
    pub id: Option<String>,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub age_when_missing: Option<serde_json::Value>,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub last_seen_location: String,
    #[serde(default)]
    pub last_seen_date: String,
    #[serde(default)]
    pub guardian_name: String,
    #[serde(default)]
    pub status: Option<String>,
}

/// A sighting (spotted unknown person) report on the history screen.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct SightingReportDto {
    #[serde(default, alias = "_id")]
    pub id: Option<String>,
    #[serde(default, alias = "photoURL")]
    pub photo_url: String,
    #[serde(default)]
    pub location: String,
    #[serde(default, alias = "dateTime")]
    pub date_time: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_success_yields_data() {
        let env: ApiEnvelope<LoginData> = serde_json::from_str(
            r#"{"success":true,"data":{"token":"t1","user":{"name":"Asha","email":"a@b.co","role":"user"}}}"#,
        )
        .expect("decode");
        let data = env.into_result().expect("data");
        assert_eq!(data.token, "t1");
        assert_eq!(data.user.role, "user");
    }

    #[test]
    fn envelope_failure_yields_message() {
        let env: ApiEnvelope<LoginData> =
            serde_json::from_str(r#"{"success":false,"message":"bad credentials"}"#)
                .expect("decode");
        assert_eq!(env.into_result().unwrap_err(), "bad credentials");
    }

    #[test]
    fn envelope_failure_without_message_is_generic() {
        let env: ApiEnvelope<ProfileData> =
            serde_json::from_str(r#"{"success":false}"#).expect("decode");
        assert_eq!(env.into_message().unwrap_err(), "request failed");
    }

    #[test]
    fn user_record_tolerates_unknown_and_missing_fields() {
        let user: UserRecord = serde_json::from_str(
            r#"{"_id":"u7","name":"Ravi","role":"police","badge_number":"B-12","extra":"ignored"}"#,
        )
        .expect("decode");
        assert_eq!(user.id.as_deref(), Some("u7"));
        assert_eq!(user.badge_number.as_deref(), Some("B-12"));
        assert!(!user.verified);
        assert!(user.aadhar_number.is_none());
    }

    #[test]
    fn report_id_prefers_id_over_email() {
        let mut user = UserRecord {
            email: "a@b.co".into(),
            ..Default::default()
        };
        assert_eq!(user.report_id().as_deref(), Some("a@b.co"));
        user.id = Some("u1".into());
        assert_eq!(user.report_id().as_deref(), Some("u1"));
    }

    #[test]
    fn sighting_report_accepts_camel_case_aliases() {
        let dto: SightingReportDto = serde_json::from_str(
            r#"{"photoURL":"https://x/y.jpg","dateTime":"2024-05-01T10:00","location":"pier 4"}"#,
        )
        .expect("decode");
        assert_eq!(dto.photo_url, "https://x/y.jpg");
        assert_eq!(dto.date_time, "2024-05-01T10:00");
    }
}
