use std::fmt::Write as _;

use crate::{
    field::{Field, InputKind},
    form::{EmployeeForm, Tone},
};

const HEADING: &str = "Add Employee";

/// Plain-text rendering of the form: heading, banner, then one line per
/// field with its inline error underneath.
pub fn render_form(form: &EmployeeForm) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{HEADING}");
    let _ = writeln!(out, "{}", "=".repeat(HEADING.len()));

    if let Some(banner) = form.banner() {
        let marker = match banner.tone {
            Tone::Success => "[ok]",
            Tone::Failure => "[error]",
        };
        let _ = writeln!(out, "{marker} {}", banner.text);
    }

    let width = Field::ALL
        .iter()
        .map(|field| field.label().len())
        .max()
        .unwrap_or_default();
    for field in Field::ALL {
        let value = form.record().get(field);
        let hint = match field.input_kind() {
            InputKind::Date if value.is_empty() => " (YYYY-MM-DD)",
            _ => "",
        };
        let _ = writeln!(out, "{:<width$} : {value}{hint}", field.label());
        if let Some(error) = form.errors().get(field) {
            let _ = writeln!(out, "{:<width$}   ! {error}", "");
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn renders_labels_values_and_inline_errors() {
        let mut form = EmployeeForm::new();
        form.update(Field::EmployeeId, "E42");
        form.update(Field::Email, "no-at-sign");
        let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
        assert!(form.begin_submit_on(today).is_err());

        let text = render_form(&form);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "Add Employee");
        assert!(lines.iter().any(|l| l.starts_with("Employee ID") && l.ends_with(": E42")));
        assert!(lines.iter().any(|l| l.ends_with("! Valid Email is required")));
        assert!(lines.iter().any(|l| l.contains("Date of Joining") && l.ends_with("(YYYY-MM-DD)")));
        assert!(!text.contains("Employee ID must be"));
        assert!(!text.contains("[ok]") && !text.contains("[error]"));
    }
}
