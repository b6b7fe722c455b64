use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use chrono::{Local, NaiveDate};
use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::{
    client::{SubmitReceipt, Submitter},
    error::{FormError, SubmissionError},
    field::Field,
    record::EmployeeRecord,
    validation::{ErrorMap, validate_on},
};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Success,
    Failure,
}

/// The single message shown above the form.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Banner {
    pub tone: Tone,
    pub text: String,
}

impl Banner {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            tone: Tone::Success,
            text: text.into(),
        }
    }

    pub fn failure(text: impl Into<String>) -> Self {
        Self {
            tone: Tone::Failure,
            text: text.into(),
        }
    }
}

/// Caller-owned state of the Add Employee form.
///
/// The record is the only source of truth. Errors and the banner are derived
/// from submit attempts and are replaced wholesale by each one.
#[derive(Debug, Default)]
pub struct EmployeeForm {
    record: EmployeeRecord,
    errors: ErrorMap,
    banner: Option<Banner>,
    in_flight: Arc<AtomicBool>,
}

/// A validated snapshot on its way to a [`Submitter`].
///
/// The form refuses new submits while one of these is alive. Dropping it
/// without calling [`EmployeeForm::finish_submit`] also releases the form.
#[derive(Debug)]
pub struct PendingSubmission {
    record: EmployeeRecord,
    _guard: InFlightGuard,
}

impl PendingSubmission {
    pub fn record(&self) -> &EmployeeRecord {
        &self.record
    }
}

#[derive(Debug)]
struct InFlightGuard(Arc<AtomicBool>);

impl InFlightGuard {
    fn acquire(flag: &Arc<AtomicBool>) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(Arc::clone(flag)))
    }
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl EmployeeForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_record(record: EmployeeRecord) -> Self {
        Self {
            record,
            ..Self::default()
        }
    }

    pub fn record(&self) -> &EmployeeRecord {
        &self.record
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn banner(&self) -> Option<&Banner> {
        self.banner.as_ref()
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    pub fn update(&mut self, field: Field, value: impl Into<String>) {
        self.record.set(field, value);
    }

    /// Clear every field. Errors and the banner are left alone.
    pub fn reset(&mut self) {
        self.record = EmployeeRecord::default();
    }

    pub fn begin_submit(&mut self) -> Result<PendingSubmission, FormError> {
        self.begin_submit_on(Local::now().date_naive())
    }

    /// Validate against `today` and, if the record is clean, take the
    /// in-flight guard and snapshot the record.
    pub fn begin_submit_on(&mut self, today: NaiveDate) -> Result<PendingSubmission, FormError> {
        if self.is_submitting() {
            debug!("submit ignored; previous submission still pending");
            return Err(FormError::InFlight);
        }

        self.errors = validate_on(&self.record, today);
        if !self.errors.is_empty() {
            return Err(FormError::Invalid(self.errors.clone()));
        }

        let guard = InFlightGuard::acquire(&self.in_flight).ok_or(FormError::InFlight)?;
        Ok(PendingSubmission {
            record: self.record.clone(),
            _guard: guard,
        })
    }

    /// Apply the outcome of a pending submission and release the guard.
    pub fn finish_submit(
        &mut self,
        pending: PendingSubmission,
        result: Result<SubmitReceipt, SubmissionError>,
    ) -> Result<SubmitReceipt, FormError> {
        let outcome = match result {
            Ok(receipt) => {
                info!(employee_id = %pending.record.employee_id, "employee added");
                self.banner = receipt
                    .message
                    .clone()
                    .filter(|message| !message.is_empty())
                    .map(Banner::success);
                self.errors = ErrorMap::default();
                self.reset();
                Ok(receipt)
            }
            Err(err) => {
                self.banner = Some(Banner::failure(err.user_message()));
                Err(FormError::Submission(err))
            }
        };
        drop(pending);
        outcome
    }

    /// Validate and, when clean, send the record through `submitter`.
    #[instrument(name = "employee_form.submit", skip_all)]
    pub async fn submit<S: Submitter>(&mut self, submitter: &S) -> Result<SubmitReceipt, FormError> {
        let pending = self.begin_submit()?;
        let result = submitter.submit(pending.record()).await;
        self.finish_submit(pending, result)
    }
}
