use leptos::prelude::*;
use thiserror::Error;

use super::state::PageEvent;
use super::transitions::{stagger_delay_ms, style_for, Trigger};
use super::Store;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Company,
    Email,
}

/// The three fields collected by the gate. Recreated fresh on every page
/// load and thrown away once validation passes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFormInput {
    pub name: String,
    pub company: String,
    pub email: String,
}

impl ContactFormInput {
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Company => self.company = value,
            Field::Email => self.email = value,
        }
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    #[error("Name is required")]
    NameRequired,
    #[error("Company is required")]
    CompanyRequired,
    #[error("Email is required")]
    EmailRequired,
    #[error("Please enter a valid email address")]
    EmailFormat,
}

/// Per-field validation outcome. All `None` means the input is valid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    pub name: Option<FieldError>,
    pub company: Option<FieldError>,
    pub email: Option<FieldError>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.company.is_none() && self.email.is_none()
    }

    pub fn get(&self, field: Field) -> Option<FieldError> {
        match field {
            Field::Name => self.name,
            Field::Company => self.company,
            Field::Email => self.email,
        }
    }
}

/// Full revalidation of every field. Called once per submit attempt; never
/// incrementally per keystroke. All three fields are required.
pub fn validate(input: &ContactFormInput) -> ValidationErrors {
    let email = input.email.trim();
    ValidationErrors {
        name: input
            .name
            .trim()
            .is_empty()
            .then_some(FieldError::NameRequired),
        company: input
            .company
            .trim()
            .is_empty()
            .then_some(FieldError::CompanyRequired),
        email: if email.is_empty() {
            Some(FieldError::EmailRequired)
        } else if !is_email_shaped(email) {
            Some(FieldError::EmailFormat)
        } else {
            None
        },
    }
}

// Loose shape check only: something "@" something "." something, with no
// whitespace. Deliverability is not this form's problem.
fn is_email_shaped(s: &str) -> bool {
    if s.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !local.is_empty() && !host.is_empty() && !tld.is_empty()
}

/// Blocking modal shown until a valid submission releases the gate.
#[component]
pub fn GateForm() -> impl IntoView {
    let store = expect_context::<Store>();
    let input = Memo::new(move |_| store.with(|s| s.gate.input()));
    let errors = Memo::new(move |_| store.with(|s| s.gate.errors()));

    let field_row = move |field: Field, placeholder: &'static str, kind: &'static str| {
        let index = match field {
            Field::Name => 0,
            Field::Company => 1,
            Field::Email => 2,
        };
        view! {
            <div style=format!("transition-delay: {}ms", stagger_delay_ms(index + 1))>
                <input
                    type=kind
                    placeholder=placeholder
                    prop:value=move || {
                        let input = input.get();
                        match field {
                            Field::Name => input.name,
                            Field::Company => input.company,
                            Field::Email => input.email,
                        }
                    }
                    on:input=move |ev| {
                        store.dispatch(PageEvent::FieldEdited(field, event_target_value(&ev)));
                    }
                    class="w-full px-4 py-2 rounded-md border border-gray-300 focus:outline-none focus:ring-2 focus:ring-blue-500 transition-all duration-300"
                />
                {move || {
                    errors
                        .get()
                        .get(field)
                        .map(|err| {
                            view! { <p class="mt-1 text-sm text-red-600">{err.to_string()}</p> }
                        })
                }}
            </div>
        }
    };

    view! {
        <div class="fixed inset-0 z-50 flex items-center justify-center bg-black/50">
            <div
                class="w-full max-w-md rounded-lg bg-white p-6 shadow-xl"
                style=style_for(Trigger::GateEnter)
            >
                <h2 class="text-lg font-bold mb-4">"Welcome! Please introduce yourself"</h2>
                <form
                    class="space-y-4"
                    on:submit=move |ev| {
                        ev.prevent_default();
                        store.dispatch(PageEvent::GateSubmitted);
                    }
                >
                    {field_row(Field::Name, "Name", "text")}
                    {field_row(Field::Company, "Company", "text")}
                    {field_row(Field::Email, "Email", "email")}
                    <button
                        type="submit"
                        class="w-full rounded-md bg-blue-600 px-4 py-2 font-medium text-white transition-all duration-300 hover:bg-blue-700 hover:scale-105"
                    >
                        "Continue to Portfolio ›"
                    </button>
                </form>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(name: &str, company: &str, email: &str) -> ContactFormInput {
        ContactFormInput {
            name: name.to_string(),
            company: company.to_string(),
            email: email.to_string(),
        }
    }

    #[test]
    fn empty_name_is_reported() {
        let errors = validate(&input("", "Acme", "a@b.co"));
        assert_eq!(errors.name, Some(FieldError::NameRequired));
        assert!(errors.company.is_none());
        assert!(errors.email.is_none());
    }

    #[test]
    fn whitespace_only_counts_as_empty() {
        let errors = validate(&input("  \t", "   ", " "));
        assert_eq!(errors.name, Some(FieldError::NameRequired));
        assert_eq!(errors.company, Some(FieldError::CompanyRequired));
        assert_eq!(errors.email, Some(FieldError::EmailRequired));
    }

    #[test]
    fn malformed_email_is_reported() {
        let errors = validate(&input("Ada", "Acme", "not-an-email"));
        assert_eq!(errors.email, Some(FieldError::EmailFormat));
    }

    #[test]
    fn minimal_email_shape_passes() {
        let errors = validate(&input("Ada", "Acme", "a@b.co"));
        assert!(errors.is_empty());
    }

    #[test]
    fn email_shape_edge_cases() {
        assert!(is_email_shaped("first.last@sub.example.org"));
        assert!(!is_email_shaped("@b.co"));
        assert!(!is_email_shaped("a@.co"));
        assert!(!is_email_shaped("a@bco"));
        assert!(!is_email_shaped("a@b."));
        assert!(!is_email_shaped("a b@c.co"));
        assert!(!is_email_shaped("a@b c.co"));
    }

    #[test]
    fn messages_match_displayed_copy() {
        assert_eq!(FieldError::NameRequired.to_string(), "Name is required");
        assert_eq!(
            FieldError::CompanyRequired.to_string(),
            "Company is required"
        );
        assert_eq!(FieldError::EmailRequired.to_string(), "Email is required");
        assert_eq!(
            FieldError::EmailFormat.to_string(),
            "Please enter a valid email address"
        );
    }
}
