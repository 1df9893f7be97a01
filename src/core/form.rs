// Application form: validation, relay payload and outcome rules.

/// Only institutional addresses may apply.
pub const REQUIRED_EMAIL_DOMAIN: &str = "@ontariotechu.net";

pub const RELAY_ENDPOINT: &str = "https://api.web3forms.com/submit";

pub const ACCESS_KEY: &str = match option_env!("EXOTU_FORM_ACCESS_KEY") {
    Some(key) => key,
    None => "YOUR-ACCESS-KEY",
};

pub const RECIPIENT: &str = match option_env!("EXOTU_FORM_RECIPIENT") {
    Some(to) => to,
    None => "exotu@ontariotechu.net",
};

pub const RETRY_MESSAGE: &str =
    "Something went wrong while sending your application. Please try again.";
pub const SENT_MESSAGE: &str =
    "Thanks for applying! We'll get back to you within 48 hours.";

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum FormError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("Please use your Ontario Tech email address (ending in @ontariotechu.net)")]
    EmailDomain,
}

/// User-entered fields, in the order they appear on the page.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ApplicationForm {
    pub name: String,
    pub email: String,
    pub major: String,
    pub year: String,
    pub interests: String,
    pub experience: String,
}

pub const FIELD_NAMES: [&str; 6] = ["name", "email", "major", "year", "interests", "experience"];

#[inline]
pub fn email_has_required_domain(email: &str) -> bool {
    email
        .trim()
        .to_ascii_lowercase()
        .ends_with(REQUIRED_EMAIL_DOMAIN)
}

impl ApplicationForm {
    /// Build from `(field, value)` pairs; unknown fields are ignored.
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, String)>) -> Self {
        let mut form = Self::default();
        for (field, value) in pairs {
            match field {
                "name" => form.name = value,
                "email" => form.email = value,
                "major" => form.major = value,
                "year" => form.year = value,
                "interests" => form.interests = value,
                "experience" => form.experience = value,
                _ => {}
            }
        }
        form
    }

    pub fn fields(&self) -> [(&'static str, &str); 6] {
        [
            ("name", self.name.as_str()),
            ("email", self.email.as_str()),
            ("major", self.major.as_str()),
            ("year", self.year.as_str()),
            ("interests", self.interests.as_str()),
            ("experience", self.experience.as_str()),
        ]
    }

    pub fn validate(&self) -> Result<(), FormError> {
        let required = [
            ("Full name", &self.name),
            ("Email address", &self.email),
            ("Major/department", &self.major),
            ("Year of study", &self.year),
            ("Areas of interest", &self.interests),
        ];
        if let Some((label, _)) = required.iter().find(|(_, v)| v.trim().is_empty()) {
            return Err(FormError::Missing(*label));
        }
        if !email_has_required_domain(&self.email) {
            return Err(FormError::EmailDomain);
        }
        Ok(())
    }

    fn message(&self) -> String {
        let mut msg = format!(
            "New application from {} <{}>\n\nMajor: {}\nYear: {}\nInterests: {}",
            self.name.trim(),
            self.email.trim(),
            self.major.trim(),
            self.year.trim(),
            self.interests.trim()
        );
        if !self.experience.trim().is_empty() {
            msg.push_str("\nExperience: ");
            msg.push_str(self.experience.trim());
        }
        msg
    }

    /// Multipart fields for the relay: fixed envelope first, then the user
    /// fields as entered.
    pub fn payload(&self) -> Vec<(&'static str, String)> {
        let mut out = vec![
            ("access_key", ACCESS_KEY.to_string()),
            ("subject", format!("EXOTU application: {}", self.name.trim())),
            ("from_name", self.name.trim().to_string()),
            ("from_email", self.email.trim().to_string()),
            ("to", RECIPIENT.to_string()),
            ("message", self.message()),
        ];
        out.extend(self.fields().iter().map(|(k, v)| (*k, v.to_string())));
        out
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum SubmitOutcome {
    Sent,
    Retry(String),
}

impl SubmitOutcome {
    pub fn message(&self) -> &str {
        match self {
            SubmitOutcome::Sent => SENT_MESSAGE,
            SubmitOutcome::Retry(msg) => msg,
        }
    }
}

#[inline]
pub fn is_success_status(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Decide what to tell the user after a submission attempt.
///
/// `status` is the HTTP status if a response arrived; `failed` is set when
/// anything threw along the way (network, body read). An OK response wins
/// over a later failure.
pub fn resolve_outcome(status: Option<u16>, failed: bool) -> SubmitOutcome {
    match status {
        Some(code) if is_success_status(code) => SubmitOutcome::Sent,
        Some(code) if !failed => SubmitOutcome::Retry(format!("{RETRY_MESSAGE} (status {code})")),
        _ => SubmitOutcome::Retry(RETRY_MESSAGE.to_string()),
    }
}
