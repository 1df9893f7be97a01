// Host-side tests for application form validation and relay outcomes.

#![allow(dead_code)]
mod form {
    include!("../src/core/form.rs");
}

use form::*;

fn filled() -> ApplicationForm {
    ApplicationForm::from_pairs([
        ("name", "Ada Lovelace".to_string()),
        ("email", "ada.lovelace@ontariotechu.net".to_string()),
        ("major", "Mechatronics".to_string()),
        ("year", "3".to_string()),
        ("interests", "Control systems".to_string()),
        ("experience", String::new()),
        ("honeypot", "ignored".to_string()),
    ])
}

#[test]
fn institutional_email_passes() {
    assert_eq!(filled().validate(), Ok(()));
    let shouting = ApplicationForm {
        email: " ADA@OntarioTechU.NET ".to_string(),
        ..filled()
    };
    assert_eq!(shouting.validate(), Ok(()));
}

#[test]
fn other_domains_are_rejected_with_guidance() {
    let app = ApplicationForm {
        email: "ada@gmail.com".to_string(),
        ..filled()
    };
    let err = app.validate().unwrap_err();
    assert_eq!(err, FormError::EmailDomain);
    assert!(err.to_string().contains(REQUIRED_EMAIL_DOMAIN));

    let lookalike = ApplicationForm {
        email: "ada@ontariotechu.net.evil.com".to_string(),
        ..filled()
    };
    assert_eq!(lookalike.validate(), Err(FormError::EmailDomain));
}

#[test]
fn required_fields_are_checked_in_order() {
    let blank = ApplicationForm::default();
    assert_eq!(blank.validate(), Err(FormError::Missing("Full name")));

    let no_interests = ApplicationForm {
        interests: "   ".to_string(),
        ..filled()
    };
    assert_eq!(
        no_interests.validate(),
        Err(FormError::Missing("Areas of interest"))
    );
    // Missing fields are reported before the domain check.
    let no_major = ApplicationForm {
        major: String::new(),
        email: "x@gmail.com".to_string(),
        ..filled()
    };
    assert_eq!(
        no_major.validate(),
        Err(FormError::Missing("Major/department"))
    );
}

#[test]
fn payload_puts_envelope_before_user_fields() {
    let app = ApplicationForm {
        experience: "FIRST robotics".to_string(),
        ..filled()
    };
    let payload = app.payload();
    let keys: Vec<&str> = payload.iter().map(|(k, _)| *k).collect();
    assert_eq!(
        keys,
        [
            "access_key",
            "subject",
            "from_name",
            "from_email",
            "to",
            "message",
            "name",
            "email",
            "major",
            "year",
            "interests",
            "experience",
        ]
    );
    let get = |key: &str| {
        payload
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
            .unwrap()
    };
    assert_eq!(get("access_key"), ACCESS_KEY);
    assert_eq!(get("to"), RECIPIENT);
    assert_eq!(get("subject"), "EXOTU application: Ada Lovelace");
    assert!(get("message").contains("Experience: FIRST robotics"));
    assert_eq!(get("year"), "3");
}

#[test]
fn message_omits_empty_experience() {
    let payload = filled().payload();
    let message = &payload.iter().find(|(k, _)| *k == "message").unwrap().1;
    assert!(!message.contains("Experience"));
    assert!(message.contains("Interests: Control systems"));
}

#[test]
fn outcome_follows_status() {
    assert_eq!(resolve_outcome(Some(200), false), SubmitOutcome::Sent);
    assert_eq!(resolve_outcome(Some(204), false), SubmitOutcome::Sent);
    // An OK response wins over a failed body read.
    assert_eq!(resolve_outcome(Some(200), true), SubmitOutcome::Sent);

    let rejected = resolve_outcome(Some(500), false);
    assert!(matches!(&rejected, SubmitOutcome::Retry(m) if m.contains("status 500")));
    assert!(rejected.message().starts_with(RETRY_MESSAGE));

    assert_eq!(
        resolve_outcome(Some(400), true),
        SubmitOutcome::Retry(RETRY_MESSAGE.to_string())
    );
    assert_eq!(
        resolve_outcome(None, true),
        SubmitOutcome::Retry(RETRY_MESSAGE.to_string())
    );
    assert_eq!(SubmitOutcome::Sent.message(), SENT_MESSAGE);
}

#[test]
fn status_classes() {
    assert!(is_success_status(200));
    assert!(is_success_status(299));
    assert!(!is_success_status(199));
    assert!(!is_success_status(300));
    assert!(!is_success_status(404));
}
