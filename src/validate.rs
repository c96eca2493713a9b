use crate::role::Role;
use std::collections::BTreeMap;

/// Field name -> message. Empty map means the form may be submitted.
pub type FieldErrors = BTreeMap<&'static str, String>;

fn is_email(value: &str) -> bool {
    let mut parts = value.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => {
            !local.is_empty()
                && !local.contains(char::is_whitespace)
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
                && !domain.contains(char::is_whitespace)
        }
        _ => false,
    }
}

fn all_digits(value: &str, len: usize) -> bool {
    value.len() == len && value.bytes().all(|b| b.is_ascii_digit())
}

pub fn login_form(email: &str, password: &str) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if email.trim().is_empty() {
        errors.insert("email", "Email is required".into());
    } else if !is_email(email.trim()) {
        errors.insert("email", "Email is invalid".into());
    }
    if password.is_empty() {
        errors.insert("password", "Password is required".into());
    } else if password.len() < 6 {
        errors.insert("password", "Password must be at least 6 characters".into());
    }
    errors
}

/// All signup inputs in one place; only the fields for the selected role are
/// validated and submitted.
#[derive(Clone, Debug, Default)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
    // citizen
    pub aadhar_number: String,
    pub address: String,
    pub date_of_birth: String,
    pub gender: String,
    // police
    pub badge_number: String,
    pub station_name: String,
    pub jurisdiction_area: String,
    pub rank: String,
    // doctor
    pub specialization: String,
    pub license_number: String,
    pub hospital_name: String,
    pub location: String,
}

impl SignupForm {
    /// JSON body for `POST /auth/signup/{role}`, carrying only the fields the
    /// chosen role's endpoint expects.
    pub fn payload(&self, role: Role) -> serde_json::Value {
        let mut body = serde_json::json!({
            "name": self.name,
            "email": self.email,
            "phone": self.phone,
            "password": self.password,
        });
        let extra = match role {
            Role::Citizen => serde_json::json!({
                "aadhar_number": self.aadhar_number,
                "address": self.address,
                "date_of_birth": self.date_of_birth,
                "gender": self.gender,
            }),
            Role::Police => serde_json::json!({
                "badge_number": self.badge_number,
                "station_name": self.station_name,
                "jurisdiction_area": self.jurisdiction_area,
                "rank": self.rank,
            }),
            Role::Doctor => serde_json::json!({
                "specialization": self.specialization,
                "license_number": self.license_number,
                "hospital_name": self.hospital_name,
                "location": self.location,
            }),
        };
        if let (Some(body), Some(extra)) = (body.as_object_mut(), extra.as_object())
        {
            for (k, v) in extra {
                body.insert(k.clone(), v.clone());
            }
        }
        body
    }
}

pub fn signup_form(form: &SignupForm, role: Role) -> FieldErrors {
    let mut errors = FieldErrors::new();
    if form.name.trim().is_empty() {
        errors.insert("name", "Name is required".into());
    }
    if form.email.trim().is_empty() {
        errors.insert("email", "Email is required".into());
    } else if !is_email(form.email.trim()) {
        errors.insert("email", "Email is invalid".into());
    }
    if form.phone.trim().is_empty() {
        errors.insert("phone", "Phone number is required".into());
    } else if !all_digits(form.phone.trim(), 10) {
        errors.insert("phone", "Phone number must be 10 digits".into());
    }
    if form.password.is_empty() {
        errors.insert("password", "Password is required".into());
    } else if form.password.len() < 6 {
        errors.insert("password", "Password must be at least 6 characters".into());
    }
    if form.password != form.confirm_password {
        errors.insert("confirm_password", "Passwords do not match".into());
    }

    match role {
        Role::Citizen => {
            if form.aadhar_number.trim().is_empty() {
                errors.insert("aadhar_number", "Aadhar number is required".into());
            } else if !all_digits(form.aadhar_number.trim(), 12) {
                errors.insert("aadhar_number", "Aadhar number must be 12 digits".into());
            }
            if form.address.trim().is_empty() {
                errors.insert("address", "Address is required".into());
            }
            if form.date_of_birth.is_empty() {
                errors.insert("date_of_birth", "Date of birth is required".into());
            }
            if form.gender.is_empty() {
                errors.insert("gender", "Gender is required".into());
            }
        }
        Role::Police => {
            if form.badge_number.trim().is_empty() {
                errors.insert("badge_number", "Badge number is required".into());
            }
            if form.station_name.trim().is_empty() {
                errors.insert("station_name", "Station name is required".into());
            }
            if form.jurisdiction_area.trim().is_empty() {
                errors.insert("jurisdiction_area", "Jurisdiction area is required".into());
            }
            if form.rank.trim().is_empty() {
                errors.insert("rank", "Rank is required".into());
            }
        }
        Role::Doctor => {
            if form.specialization.trim().is_empty() {
                errors.insert("specialization", "Specialization is required".into());
            }
            if form.license_number.trim().is_empty() {
                errors.insert("license_number", "License number is required".into());
            }
            if form.hospital_name.trim().is_empty() {
                errors.insert("hospital_name", "Hospital name is required".into());
            }
            if form.location.trim().is_empty() {
                errors.insert("location", "Location is required".into());
            }
        }
    }
    errors
}

/// Inputs for the missing-person report. Every field is mandatory, the image
/// included.
#[derive(Clone, Debug, Default)]
pub struct MissingReportForm {
    pub full_name: String,
    pub age_when_missing: String,
    pub gender: String,
    pub last_seen_location: String,
    pub last_seen_date: String,
    pub guardian_name: String,
    pub relationship: String,
    pub phone_number: String,
    pub email: String,
}

impl MissingReportForm {
    pub fn text_fields(&self) -> [(&'static str, &str); 9] {
        [
            ("full_name", self.full_name.as_str()),
            ("age_when_missing", self.age_when_missing.as_str()),
            ("gender", self.gender.as_str()),
            ("last_seen_location", self.last_seen_location.as_str()),
            ("last_seen_date", self.last_seen_date.as_str()),
            ("guardian_name", self.guardian_name.as_str()),
            ("relationship", self.relationship.as_str()),
            ("phone_number", self.phone_number.as_str()),
            ("email", self.email.as_str()),
        ]
    }
}

pub fn missing_report(form: &MissingReportForm, has_image: bool) -> Option<&'static str> {
    let complete = has_image
        && form
            .text_fields()
            .iter()
            .all(|(_, value)| !value.trim().is_empty());
    if complete {
        None
    } else {
        Some("All fields are mandatory. Please fill out every field.")
    }
}

pub fn sighting_report(photo_url: &str, location: &str) -> Option<&'static str> {
    if photo_url.trim().is_empty() {
        Some("Please provide a photo URL first")
    } else if location.trim().is_empty() {
        Some("Please provide a location")
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_citizen_form() -> SignupForm {
        SignupForm {
            name: "Asha Verma".into(),
            email: "asha@example.com".into(),
            phone: "9876543210".into(),
            password: "secret1".into(),
            confirm_password: "secret1".into(),
            aadhar_number: "123412341234".into(),
            address: "12 Lake Road".into(),
            date_of_birth: "1990-04-01".into(),
            gender: "female".into(),
            ..Default::default()
        }
    }

    #[test]
    fn login_accepts_valid_credentials() {
        assert!(login_form("asha@example.com", "secret1").is_empty());
    }

    #[test]
    fn login_rejects_bad_email_and_short_password() {
        let errors = login_form("not-an-email", "abc");
        assert_eq!(errors["email"], "Email is invalid");
        assert_eq!(errors["password"], "Password must be at least 6 characters");
    }

    #[test]
    fn login_requires_both_fields() {
        let errors = login_form("  ", "");
        assert_eq!(errors["email"], "Email is required");
        assert_eq!(errors["password"], "Password is required");
    }

    #[test]
    fn citizen_signup_passes_when_complete() {
        assert!(signup_form(&complete_citizen_form(), Role::Citizen).is_empty());
    }

    #[test]
    fn citizen_signup_checks_aadhar_shape() {
        let mut form = complete_citizen_form();
        form.aadhar_number = "1234".into();
        let errors = signup_form(&form, Role::Citizen);
        assert_eq!(errors["aadhar_number"], "Aadhar number must be 12 digits");
    }

    #[test]
    fn phone_must_be_ten_digits() {
        let mut form = complete_citizen_form();
        form.phone = "98765abc10".into();
        let errors = signup_form(&form, Role::Citizen);
        assert_eq!(errors["phone"], "Phone number must be 10 digits");
    }

    #[test]
    fn mismatched_passwords_are_rejected() {
        let mut form = complete_citizen_form();
        form.confirm_password = "other1".into();
        let errors = signup_form(&form, Role::Citizen);
        assert_eq!(errors["confirm_password"], "Passwords do not match");
    }

    #[test]
    fn police_signup_requires_its_own_fields_only() {
        let form = SignupForm {
            name: "R. Gaikwad".into(),
            email: "rg@station.in".into(),
            phone: "9876543210".into(),
            password: "secret1".into(),
            confirm_password: "secret1".into(),
            badge_number: "B-42".into(),
            station_name: "Central".into(),
            jurisdiction_area: "North Zone".into(),
            rank: "Inspector".into(),
            ..Default::default()
        };
        assert!(signup_form(&form, Role::Police).is_empty());
        // citizen fields left blank must not trip the police path
        assert!(form.aadhar_number.is_empty());
    }

    #[test]
    fn doctor_signup_flags_missing_license() {
        let mut form = SignupForm {
            name: "Dr. Rao".into(),
            email: "rao@hospital.in".into(),
            phone: "9876543210".into(),
            password: "secret1".into(),
            confirm_password: "secret1".into(),
            specialization: "Pediatrics".into(),
            hospital_name: "City Care".into(),
            location: "Pune".into(),
            ..Default::default()
        };
        let errors = signup_form(&form, Role::Doctor);
        assert_eq!(errors["license_number"], "License number is required");
        form.license_number = "MH-1001".into();
        assert!(signup_form(&form, Role::Doctor).is_empty());
    }

    #[test]
    fn signup_payload_carries_only_role_fields() {
        let form = complete_citizen_form();
        let body = form.payload(Role::Citizen);
        assert_eq!(body["aadhar_number"], "123412341234");
        assert!(body.get("badge_number").is_none());
        let body = form.payload(Role::Police);
        assert!(body.get("aadhar_number").is_none());
        assert_eq!(body["name"], "Asha Verma");
    }

    #[test]
    fn missing_report_requires_every_field() {
        let mut form = MissingReportForm {
            full_name: "Kiran".into(),
            age_when_missing: "12".into(),
            gender: "Male".into(),
            last_seen_location: "Market".into(),
            last_seen_date: "2024-05-01".into(),
            guardian_name: "Sunita".into(),
            relationship: "Mother".into(),
            phone_number: "9876543210".into(),
            email: "sunita@example.com".into(),
        };
        assert!(missing_report(&form, true).is_none());
        assert!(missing_report(&form, false).is_some());
        form.guardian_name = "  ".into();
        assert!(missing_report(&form, true).is_some());
    }

    #[test]
    fn sighting_requires_photo_then_location() {
        assert_eq!(
            sighting_report("", "pier 4"),
            Some("Please provide a photo URL first")
        );
        assert_eq!(
            sighting_report("https://x/y.jpg", " "),
            Some("Please provide a location")
        );
        assert!(sighting_report("https://x/y.jpg", "pier 4").is_none());
    }
}
