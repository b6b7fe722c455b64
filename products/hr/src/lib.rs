//! HR module: the "Add Employee" form.
//!
//! The form is a plain value owned by the caller. Edits go through
//! [`EmployeeForm::update`]; a submit runs the validator and, when the record
//! is clean, hands a snapshot to a [`Submitter`] (normally the HTTP
//! [`EmployeeClient`]).

pub mod client;
pub mod error;
pub mod field;
pub mod form;
pub mod record;
pub mod validation;
pub mod view;

pub use client::{ClientSettings, DEFAULT_ENDPOINT, EmployeeClient, SubmitReceipt, Submitter};
pub use error::{ConfigError, FormError, SUBMISSION_FAILED, SubmissionError};
pub use field::{Field, InputKind};
pub use form::{Banner, EmployeeForm, PendingSubmission, Tone};
pub use record::EmployeeRecord;
pub use validation::{ErrorMap, validate, validate_on};
pub use view::render_form;
