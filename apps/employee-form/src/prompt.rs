use std::io::{self, BufRead, Write};

use products_hr::{EmployeeForm, Field};

/// Line-oriented field entry over any reader/writer pair.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Ask for `field`, showing its current value. An empty answer keeps the
    /// current value. Returns `false` once input is exhausted.
    pub fn ask(&mut self, form: &mut EmployeeForm, field: Field) -> io::Result<bool> {
        let current = form.record().get(field);
        if current.is_empty() {
            write!(self.output, "{}: ", field.label())?;
        } else {
            write!(self.output, "{} [{current}]: ", field.label())?;
        }
        self.output.flush()?;

        match self.read_line()? {
            None => Ok(false),
            Some(answer) => {
                if !answer.is_empty() {
                    form.update(field, answer);
                }
                Ok(true)
            }
        }
    }

    pub fn ask_each(
        &mut self,
        form: &mut EmployeeForm,
        fields: impl IntoIterator<Item = Field>,
    ) -> io::Result<bool> {
        for field in fields {
            if !self.ask(form, field)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    pub fn confirm(&mut self, question: &str) -> io::Result<bool> {
        write!(self.output, "{question} [y/N]: ")?;
        self.output.flush()?;
        Ok(self
            .read_line()?
            .is_some_and(|answer| matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")))
    }

    pub fn say(&mut self, text: &str) -> io::Result<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}
