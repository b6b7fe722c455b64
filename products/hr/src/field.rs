use std::fmt;

use serde::{Deserialize, Serialize};

/// The seven inputs of the employee form, in display order.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum Field {
    #[serde(rename = "EmployeeID")]
    EmployeeId,
    Name,
    Email,
    PhoneNumber,
    Department,
    DateOfJoining,
    Role,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InputKind {
    Text,
    Date,
}

impl Field {
    pub const ALL: [Field; 7] = [
        Field::EmployeeId,
        Field::Name,
        Field::Email,
        Field::PhoneNumber,
        Field::Department,
        Field::DateOfJoining,
        Field::Role,
    ];

    /// Wire key used in the JSON body and in error maps.
    pub fn key(self) -> &'static str {
        match self {
            Field::EmployeeId => "EmployeeID",
            Field::Name => "Name",
            Field::Email => "Email",
            Field::PhoneNumber => "PhoneNumber",
            Field::Department => "Department",
            Field::DateOfJoining => "DateOfJoining",
            Field::Role => "Role",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::EmployeeId => "Employee ID",
            Field::Name => "Name",
            Field::Email => "Email",
            Field::PhoneNumber => "Phone Number",
            Field::Department => "Department",
            Field::DateOfJoining => "Date of Joining",
            Field::Role => "Role",
        }
    }

    pub fn input_kind(self) -> InputKind {
        match self {
            Field::DateOfJoining => InputKind::Date,
            _ => InputKind::Text,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputKind::Text => f.write_str("text"),
            InputKind::Date => f.write_str("date"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_wire_key() {
        for field in Field::ALL {
            assert_eq!(field.to_string(), field.key());
        }
        assert_eq!(Field::EmployeeId.to_string(), "EmployeeID");
    }

    #[test]
    fn serde_uses_wire_keys() {
        let json = serde_json::to_string(&Field::EmployeeId).unwrap();
        assert_eq!(json, "\"EmployeeID\"");
        let json = serde_json::to_string(&Field::DateOfJoining).unwrap();
        assert_eq!(json, "\"DateOfJoining\"");
    }

    #[test]
    fn only_date_of_joining_is_a_date_input() {
        let dates: Vec<_> = Field::ALL
            .into_iter()
            .filter(|f| f.input_kind() == InputKind::Date)
            .collect();
        assert_eq!(dates, vec![Field::DateOfJoining]);
    }
}
