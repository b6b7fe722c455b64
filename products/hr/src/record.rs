use serde::{Deserialize, Serialize};

use crate::field::Field;

/// Raw form input. Every field is the string exactly as typed.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EmployeeRecord {
    #[serde(rename = "EmployeeID")]
    pub employee_id: String,
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub department: String,
    pub date_of_joining: String,
    pub role: String,
}

impl EmployeeRecord {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::EmployeeId => &self.employee_id,
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::PhoneNumber => &self.phone_number,
            Field::Department => &self.department,
            Field::DateOfJoining => &self.date_of_joining,
            Field::Role => &self.role,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::EmployeeId => &mut self.employee_id,
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::PhoneNumber => &mut self.phone_number,
            Field::Department => &mut self.department,
            Field::DateOfJoining => &mut self.date_of_joining,
            Field::Role => &mut self.role,
        };
        *slot = value.into();
    }

    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn is_empty(&self) -> bool {
        Field::ALL.into_iter().all(|field| self.get(field).is_empty())
    }
}
