//! Contact form draft and the mail/phone hand-offs it produces.

use std::rc::Rc;

use log::{info, warn};
use web_sys::{window, SubmitEvent};
use yew::functional::Reducible;

use crate::components::toast::Notice;
use crate::config;

pub const FALLBACK_SUBJECT: &str = "Project Inquiry";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    /// Maps an input's `name` attribute to the draft field it edits.
    pub fn from_name(name: &str) -> Option<Field> {
        match name {
            "name" => Some(Field::Name),
            "email" => Some(Field::Email),
            "subject" => Some(Field::Subject),
            "message" => Some(Field::Message),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactDraft {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    /// Returns a copy of the draft with only `field` replaced.
    pub fn with(&self, field: Field, value: impl Into<String>) -> ContactDraft {
        let value = value.into();
        match field {
            Field::Name => ContactDraft { name: value, ..self.clone() },
            Field::Email => ContactDraft { email: value, ..self.clone() },
            Field::Subject => ContactDraft { subject: value, ..self.clone() },
            Field::Message => ContactDraft { message: value, ..self.clone() },
        }
    }

    /// Only an empty subject falls back; anything typed, spaces included, is kept.
    pub fn subject_or_default(&self) -> &str {
        if self.subject.is_empty() {
            FALLBACK_SUBJECT
        } else {
            &self.subject
        }
    }

    pub fn body(&self) -> String {
        format!(
            "Hi {},\n\nName: {}\nEmail: {}\n\nMessage:\n{}\n\nBest regards",
            config::OWNER_FIRST_NAME,
            self.name,
            self.email,
            self.message
        )
    }

    pub fn handoff(&self) -> Handoff {
        Handoff::Mail {
            to: config::CONTACT_EMAIL.to_string(),
            subject: Some(self.subject_or_default().to_string()),
            body: Some(self.body()),
        }
    }
}

/// One keystroke's worth of change to the draft.
pub struct FieldEdit {
    pub field: Field,
    pub value: String,
}

impl Reducible for ContactDraft {
    type Action = FieldEdit;

    fn reduce(self: Rc<Self>, edit: FieldEdit) -> Rc<Self> {
        self.with(edit.field, edit.value).into()
    }
}

/// The part of a form-submit event the contact form relies on.
pub trait FormSubmit {
    fn prevent_default(&self);
}

impl FormSubmit for SubmitEvent {
    fn prevent_default(&self) {
        web_sys::Event::prevent_default(self);
    }
}

pub fn submitted_notice() -> Notice {
    Notice {
        title: "Opening email client...".to_string(),
        description: "Your default email client should open with the message pre-filled.".to_string(),
    }
}

/// Handles a contact form submission: the browser's own submit navigation is
/// always suppressed, the draft goes out as a `mailto:` hand-off and the user
/// is told to expect their mail client. The notice is shown whether or not a
/// mail client actually picks the link up.
pub fn submit(
    event: &impl FormSubmit,
    draft: &ContactDraft,
    hand_off: impl FnOnce(&Handoff),
    notify: impl FnOnce(Notice),
) {
    event.prevent_default();
    hand_off(&draft.handoff());
    notify(submitted_notice());
}

/// A link the browser passes on to the user's mail or phone application.
/// Nothing comes back, so there is no way to tell whether it was acted on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Handoff {
    Mail {
        to: String,
        subject: Option<String>,
        body: Option<String>,
    },
    Tel {
        number: String,
    },
}

impl Handoff {
    pub fn mail_direct() -> Handoff {
        Handoff::Mail {
            to: config::CONTACT_EMAIL.to_string(),
            subject: None,
            body: None,
        }
    }

    pub fn call() -> Handoff {
        Handoff::Tel {
            number: config::CONTACT_PHONE.to_string(),
        }
    }

    pub fn href(&self) -> String {
        match self {
            Handoff::Mail { to, subject, body } => {
                let params: Vec<String> = [("subject", subject), ("body", body)]
                    .into_iter()
                    .filter_map(|(key, value)| {
                        value
                            .as_deref()
                            .map(|v| format!("{}={}", key, urlencoding::encode(v)))
                    })
                    .collect();
                if params.is_empty() {
                    format!("mailto:{}", to)
                } else {
                    format!("mailto:{}?{}", to, params.join("&"))
                }
            }
            Handoff::Tel { number } => format!("tel:{}", number),
        }
    }

    /// Points the current document at the link. The page itself stays put
    /// since the browser hands `mailto:`/`tel:` to another application.
    pub fn navigate(&self) {
        let href = self.href();
        info!("Handing off to {}", href.split(':').next().unwrap_or_default());
        if let Some(window) = window() {
            if let Err(e) = window.location().set_href(&href) {
                warn!("Hand-off navigation failed: {:?}", e);
            }
        }
    }

    /// Opens the link through `window.open`, as the quick-action buttons do.
    pub fn open(&self) {
        let href = self.href();
        if let Some(window) = window() {
            if let Err(e) = window.open_with_url(&href) {
                warn!("Could not open {}: {:?}", href, e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    const FIELDS: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    fn filled() -> ContactDraft {
        ContactDraft {
            name: "Jane".into(),
            email: "jane@x.com".into(),
            subject: "Hello & welcome".into(),
            message: "Line one\nLine two ✓".into(),
        }
    }

    fn query_param(href: &str, key: &str) -> Option<String> {
        let (_, query) = href.split_once('?')?;
        query.split('&').find_map(|pair| {
            let (k, v) = pair.split_once('=')?;
            (k == key).then(|| urlencoding::decode(v).map(|s| s.into_owned()).ok())?
        })
    }

    #[test]
    fn field_names_round_trip() {
        for field in FIELDS {
            assert_eq!(Field::from_name(field.name()), Some(field));
        }
        assert_eq!(Field::from_name("phone"), None);
    }

    #[test]
    fn updating_one_field_leaves_the_others_untouched() {
        let draft = filled();
        for field in FIELDS {
            let updated = draft.with(field, "new value");
            assert_eq!(updated.get(field), "new value");
            for other in FIELDS.iter().copied().filter(|f| *f != field) {
                assert_eq!(
                    updated.get(other).as_bytes(),
                    draft.get(other).as_bytes(),
                    "{:?} changed while updating {:?}",
                    other,
                    field
                );
            }
        }
    }

    #[test]
    fn blank_subject_falls_back_to_project_inquiry() {
        let draft = ContactDraft::default()
            .with(Field::Name, "Jane")
            .with(Field::Email, "jane@x.com")
            .with(Field::Message, "Need an app");
        let href = draft.handoff().href();

        assert!(href.starts_with(&format!("mailto:{}?", config::CONTACT_EMAIL)));
        assert!(href.contains("subject=Project%20Inquiry&body="));
        assert_eq!(query_param(&href, "subject").as_deref(), Some("Project Inquiry"));

        let body = query_param(&href, "body").expect("body param");
        for needle in ["Jane", "jane@x.com", "Need an app"] {
            assert_eq!(body.matches(needle).count(), 1, "{needle:?} in {body:?}");
        }
    }

    #[test]
    fn whitespace_subject_is_sent_as_typed() {
        let draft = ContactDraft::default().with(Field::Subject, "   ");
        assert_eq!(draft.subject_or_default(), "   ");
        let href = draft.handoff().href();
        assert!(href.contains("subject=%20%20%20&body="), "{href}");
        assert_eq!(query_param(&href, "subject").as_deref(), Some("   "));

        let draft = draft.with(Field::Subject, "Collab");
        assert_eq!(draft.subject_or_default(), "Collab");
        let draft = draft.with(Field::Subject, "");
        assert_eq!(draft.subject_or_default(), FALLBACK_SUBJECT);
    }

    #[test]
    fn special_characters_are_percent_encoded() {
        let href = filled().handoff().href();
        let query = href.split_once('?').map(|(_, q)| q).unwrap_or_default();

        assert!(query.contains("jane%40x.com"));
        assert!(query.contains("Hello%20%26%20welcome"));
        assert!(query.contains("%0A"));
        assert!(!query.contains(' '));
        assert!(!query.contains('\n'));
        assert_eq!(query.matches('&').count(), 1);
        assert_eq!(
            query_param(&href, "body").as_deref(),
            Some(filled().body().as_str())
        );
    }

    #[test]
    fn reducer_applies_a_single_field_edit() {
        let draft = Rc::new(filled()).reduce(FieldEdit {
            field: Field::Subject,
            value: "Changed".into(),
        });
        assert_eq!(*draft, filled().with(Field::Subject, "Changed"));
    }

    struct FakeSubmit(Cell<u32>);

    impl FormSubmit for FakeSubmit {
        fn prevent_default(&self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn submit_suppresses_default_and_hands_off_once() {
        let event = FakeSubmit(Cell::new(0));
        let mut handoffs = Vec::new();
        let mut notices = Vec::new();
        let draft = filled();

        submit(&event, &draft, |h| handoffs.push(h.href()), |n| notices.push(n));

        assert_eq!(event.0.get(), 1);
        assert_eq!(handoffs, vec![draft.handoff().href()]);
        assert!(handoffs[0].starts_with("mailto:"));
        assert_eq!(notices, vec![submitted_notice()]);
    }

    #[test]
    fn submit_notice_does_not_depend_on_the_draft() {
        let mut notices = Vec::new();
        for draft in [ContactDraft::default(), filled()] {
            submit(&FakeSubmit(Cell::new(0)), &draft, |_| {}, |n| notices.push(n));
        }
        assert_eq!(notices[0], notices[1]);
    }

    #[test]
    fn direct_links() {
        assert_eq!(
            Handoff::mail_direct().href(),
            format!("mailto:{}", config::CONTACT_EMAIL)
        );
        assert_eq!(Handoff::call().href(), format!("tel:{}", config::CONTACT_PHONE));
    }
}
