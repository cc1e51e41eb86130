//! New-project form collector.
//!
//! # Responsibility
//! - Hold raw title/description/people text as typed by the user.
//! - Validate it with `FormRules` and submit valid drafts to the store.
//!
//! # Invariants
//! - `submit` calls the store only when every field is valid.
//! - Fields are cleared only after a successful submit.

use crate::input::validation::{validate, FieldValue, RuleViolation, Rules};
use crate::model::project::ProjectId;
use crate::state::project_state::ProjectStore;
use crate::view::component::Component;
use log::{debug, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Default minimum description length.
pub const DEFAULT_DESCRIPTION_MIN_LENGTH: usize = 5;
/// Default headcount bounds.
pub const DEFAULT_PEOPLE_MIN: i64 = 1;
pub const DEFAULT_PEOPLE_MAX: i64 = 5;

/// Validation policy for the three form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormRules {
    pub title: Rules,
    pub description: Rules,
    pub people: Rules,
}

impl Default for FormRules {
    fn default() -> Self {
        Self {
            title: Rules::required(),
            description: Rules::required().min_length(DEFAULT_DESCRIPTION_MIN_LENGTH),
            people: Rules::required()
                .min(DEFAULT_PEOPLE_MIN)
                .max(DEFAULT_PEOPLE_MAX),
        }
    }
}

impl FormRules {
    /// Replaces the headcount upper bound.
    pub fn with_max_people(mut self, max: i64) -> Self {
        self.people.max = Some(max);
        self
    }
}

/// Form field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Description,
    People,
}

impl FormField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::People => "people",
        }
    }
}

/// Why a form submit was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    Invalid {
        field: FormField,
        violation: RuleViolation,
    },
    NotANumber {
        field: FormField,
        value: String,
    },
    /// Passed the configured rules but is not a positive headcount.
    NotAHeadcount(i64),
}

impl InputError {
    pub fn field(&self) -> FormField {
        match self {
            Self::Invalid { field, .. } | Self::NotANumber { field, .. } => *field,
            Self::NotAHeadcount(_) => FormField::People,
        }
    }
}

impl Display for InputError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Invalid { field, violation } => {
                write!(f, "invalid {}: {violation}", field.as_str())
            }
            Self::NotANumber { field, value } => {
                write!(f, "invalid {}: `{value}` is not a whole number", field.as_str())
            }
            Self::NotAHeadcount(value) => {
                write!(f, "invalid people: {value} is not a positive headcount")
            }
        }
    }
}

impl Error for InputError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Invalid { violation, .. } => Some(violation),
            _ => None,
        }
    }
}

/// Validated form values ready for `ProjectStore::create_project`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub people: u32,
}

/// The "add project" form.
#[derive(Debug, Clone, Default)]
pub struct ProjectInput {
    pub title: String,
    pub description: String,
    /// Raw headcount text; parsed on submit.
    pub people: String,
    rules: FormRules,
}

impl ProjectInput {
    pub fn new(rules: FormRules) -> Self {
        Self {
            rules,
            ..Self::default()
        }
    }

    /// Replaces all three raw field values.
    pub fn fill(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        people: impl Into<String>,
    ) {
        self.title = title.into();
        self.description = description.into();
        self.people = people.into();
    }

    pub fn rules(&self) -> &FormRules {
        &self.rules
    }

    /// Validates the current field values.
    ///
    /// # Errors
    /// - Returns the first failing field, checked in title, description,
    ///   people order.
    pub fn gather(&self) -> Result<ProjectDraft, InputError> {
        check(FormField::Title, FieldValue::Text(&self.title), &self.rules.title)?;
        check(
            FormField::Description,
            FieldValue::Text(&self.description),
            &self.rules.description,
        )?;

        check(FormField::People, FieldValue::Text(&self.people), &self.rules.people)?;
        let raw_people = self.people.trim();
        let people = raw_people
            .parse::<i64>()
            .map_err(|_| InputError::NotANumber {
                field: FormField::People,
                value: raw_people.to_string(),
            })?;
        check(FormField::People, FieldValue::Number(people), &self.rules.people)?;
        let people = u32::try_from(people)
            .ok()
            .filter(|value| *value > 0)
            .ok_or(InputError::NotAHeadcount(people))?;

        Ok(ProjectDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            people,
        })
    }

    /// Validates and creates one project, then clears the form.
    ///
    /// # Errors
    /// - Returns the validation error and leaves both the form and the store
    ///   untouched.
    pub fn submit(&mut self, store: &ProjectStore) -> Result<ProjectId, InputError> {
        let draft = match self.gather() {
            Ok(draft) => draft,
            Err(err) => {
                info!(
                    "event=form_submit module=input status=rejected field={}",
                    err.field().as_str()
                );
                return Err(err);
            }
        };

        let id = store.create_project(draft.title, draft.description, draft.people);
        self.clear_inputs();
        Ok(id)
    }

    pub fn clear_inputs(&mut self) {
        self.title.clear();
        self.description.clear();
        self.people.clear();
    }
}

impl Component for ProjectInput {
    fn configure(&mut self) {
        debug!("event=view_configure module=view view=project_input status=ok");
    }

    fn render_content(&self) -> String {
        format!(
            "Title: {}\nDescription: {}\nPeople: {}\n",
            self.title, self.description, self.people
        )
    }
}

fn check(field: FormField, value: FieldValue<'_>, rules: &Rules) -> Result<(), InputError> {
    validate(value, rules).map_err(|violation| InputError::Invalid { field, violation })
}
