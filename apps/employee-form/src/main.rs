mod config;
mod prompt;

use std::{
    io::{self, Write},
    process::ExitCode,
};

use anyhow::{Result, anyhow};
use clap::{Args, Parser, Subcommand};
use dotenvy::dotenv;
use platform_obs::init_tracing;
use products_hr::{
    EmployeeClient, EmployeeForm, EmployeeRecord, Field, FormError, render_form, validate,
};
use tracing::{debug, info};

use crate::{config::AppConfig, prompt::Prompter};

#[derive(Parser, Debug)]
#[command(name = "employee-form", version, about = "Add Employee form for the HR API")]
struct Cli {
    /// Employees endpoint that receives the POST.
    #[arg(long, global = true, env = "EMPLOYEE_API_URL", value_name = "URL")]
    endpoint: Option<String>,
    /// Log submission details to stderr.
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fill in the form (flags first, prompts for the rest) and submit it.
    Add(AddCommand),
    /// Validate a record without sending it.
    Check(FieldArgs),
    /// List the form's fields.
    Fields,
}

#[derive(Args, Debug)]
struct AddCommand {
    #[command(flatten)]
    fields: FieldArgs,
    #[arg(long, help = "Fail instead of prompting for missing or invalid fields")]
    no_prompt: bool,
}

#[derive(Args, Debug, Default)]
struct FieldArgs {
    #[arg(long)]
    employee_id: Option<String>,
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    email: Option<String>,
    #[arg(long)]
    phone_number: Option<String>,
    #[arg(long)]
    department: Option<String>,
    #[arg(long, value_name = "YYYY-MM-DD")]
    date_of_joining: Option<String>,
    #[arg(long)]
    role: Option<String>,
}

impl From<FieldArgs> for EmployeeRecord {
    fn from(args: FieldArgs) -> Self {
        EmployeeRecord {
            employee_id: args.employee_id.unwrap_or_default(),
            name: args.name.unwrap_or_default(),
            email: args.email.unwrap_or_default(),
            phone_number: args.phone_number.unwrap_or_default(),
            department: args.department.unwrap_or_default(),
            date_of_joining: args.date_of_joining.unwrap_or_default(),
            role: args.role.unwrap_or_default(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    dotenv().ok();
    let cli = Cli::parse();
    let config = AppConfig::load(cli.endpoint.as_deref(), cli.verbose)?;
    let _obs = init_tracing(config.obs.clone())?;

    match cli.command {
        Command::Add(cmd) => run_add(cmd, config).await,
        Command::Check(fields) => run_check(fields.into()),
        Command::Fields => print_fields(),
    }
}

async fn run_add(cmd: AddCommand, config: AppConfig) -> Result<ExitCode> {
    info!(endpoint = %config.client.endpoint(), "submitting employee form");
    let client = EmployeeClient::new(config.client)?;
    let mut form = EmployeeForm::with_record(cmd.fields.into());
    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());

    if !cmd.no_prompt {
        let missing: Vec<_> = Field::ALL
            .into_iter()
            .filter(|field| form.record().get(*field).is_empty())
            .collect();
        prompter.ask_each(&mut form, missing)?;
    }

    let mut retried = false;
    loop {
        match form.submit(&client).await {
            Ok(_) => {
                let text = form
                    .banner()
                    .map(|banner| banner.text.clone())
                    .unwrap_or_else(|| "Employee submitted".to_string());
                prompter.say(&format!("{text}\n"))?;
                return Ok(ExitCode::SUCCESS);
            }
            Err(FormError::Invalid(errors)) => {
                prompter.say(&render_form(&form))?;
                if cmd.no_prompt || !prompter.ask_each(&mut form, errors.fields())? {
                    return Ok(ExitCode::FAILURE);
                }
            }
            Err(FormError::Submission(err)) => {
                debug!(error = %err, "submission failed");
                prompter.say(&render_form(&form))?;
                if cmd.no_prompt || retried || !prompter.confirm("Try again?")? {
                    return Ok(ExitCode::FAILURE);
                }
                retried = true;
            }
            Err(FormError::InFlight) => return Err(anyhow!("form is already submitting")),
        }
    }
}

fn run_check(record: EmployeeRecord) -> Result<ExitCode> {
    let errors = validate(&record);
    let mut out = io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, &errors)?;
    writeln!(out)?;
    Ok(if errors.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn print_fields() -> Result<ExitCode> {
    let mut out = io::stdout().lock();
    for field in Field::ALL {
        writeln!(
            out,
            "{:<14} {:<16} {}",
            field.key(),
            field.label(),
            field.input_kind()
        )?;
    }
    Ok(ExitCode::SUCCESS)
}
