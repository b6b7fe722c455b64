use std::collections::BTreeMap;

use chrono::{DateTime, Local, NaiveDate};
use serde::Serialize;
use tracing::debug;

use crate::{field::Field, record::EmployeeRecord};

/// Current validation failures keyed by field, in display order.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ErrorMap(BTreeMap<Field, &'static str>);

impl ErrorMap {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.keys().copied()
    }

    fn insert(&mut self, field: Field, message: &'static str) {
        self.0.insert(field, message);
    }
}

type Rule = fn(&str, NaiveDate) -> bool;

// Name has no rule.
const RULES: [(Field, Rule, &str); 6] = [
    (
        Field::EmployeeId,
        employee_id_ok,
        "Employee ID must be <= 10 characters",
    ),
    (Field::Email, email_ok, "Valid Email is required"),
    (
        Field::PhoneNumber,
        phone_number_ok,
        "Phone number must be 10 digits",
    ),
    (Field::Department, not_empty, "Department is required"),
    (
        Field::DateOfJoining,
        date_of_joining_ok,
        "Date cannot be in the future",
    ),
    (Field::Role, not_empty, "Role is required"),
];

const EMPLOYEE_ID_MAX: usize = 10;
const PHONE_NUMBER_LEN: usize = 10;

/// Validate against today's local date.
pub fn validate(record: &EmployeeRecord) -> ErrorMap {
    validate_on(record, Local::now().date_naive())
}

/// Run every rule against `record`, treating `today` as the latest
/// acceptable joining date.
pub fn validate_on(record: &EmployeeRecord, today: NaiveDate) -> ErrorMap {
    let mut errors = ErrorMap::default();
    for (field, rule, message) in RULES {
        if !rule(record.get(field), today) {
            errors.insert(field, message);
        }
    }
    debug!(
        failing = errors.len(),
        fields = ?errors.fields().collect::<Vec<_>>(),
        "employee form validated"
    );
    errors
}

fn char_len(value: &str) -> usize {
    value.chars().count()
}

fn not_empty(value: &str, _: NaiveDate) -> bool {
    !value.is_empty()
}

fn employee_id_ok(value: &str, _: NaiveDate) -> bool {
    !value.is_empty() && char_len(value) <= EMPLOYEE_ID_MAX
}

fn email_ok(value: &str, _: NaiveDate) -> bool {
    value.contains('@')
}

fn phone_number_ok(value: &str, _: NaiveDate) -> bool {
    char_len(value) == PHONE_NUMBER_LEN
}

fn date_of_joining_ok(value: &str, today: NaiveDate) -> bool {
    parse_joining_date(value).is_some_and(|date| date <= today)
}

/// Accepts `YYYY-MM-DD` or an RFC 3339 timestamp.
fn parse_joining_date(value: &str) -> Option<NaiveDate> {
    if value.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|ts| ts.date_naive())
        })
}
