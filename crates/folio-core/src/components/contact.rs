//! Mock contact form: validates, pretends to send, resets.

use crate::config::ContactConfig;
use crate::effect::Effect;
use crate::error::{FolioError, FolioResult};
use crate::page::{ElementId, Page, Selector};
use crate::scheduler::{Job, Scheduler};

/// Field values of an accepted submission
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Clone, Debug)]
pub struct ContactForm {
    form: ElementId,
    name: ElementId,
    email: ElementId,
    message: ElementId,
    submit: ElementId,
    config: ContactConfig,
    /// Submit label to restore while a send is in flight
    in_flight: Option<String>,
    sent: u64,
}

impl ContactForm {
    pub fn setup(page: &Page, config: &ContactConfig) -> FolioResult<Self> {
        let form = page
            .query(Selector::Class("form"))
            .ok_or(FolioError::MissingElement(".form"))?;
        let field = |selector, name| {
            page.query_within(form, selector)
                .ok_or(FolioError::MissingElement(name))
        };
        Ok(Self {
            form,
            name: field(Selector::Typed("input", "text"), ".form input[type=\"text\"]")?,
            email: field(Selector::Typed("input", "email"), ".form input[type=\"email\"]")?,
            message: field(Selector::Tag("textarea"), ".form textarea")?,
            submit: field(Selector::Typed("button", "submit"), ".form button[type=\"submit\"]")?,
            config: config.clone(),
            in_flight: None,
            sent: 0,
        })
    }

    pub fn form(&self) -> ElementId {
        self.form
    }

    pub fn is_sending(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Completed (simulated) sends.
    pub fn sent(&self) -> u64 {
        self.sent
    }

    /// All three fields must be non-empty; which one is missing is not
    /// reported.
    pub fn validate(&self, page: &Page) -> FolioResult<Submission> {
        let read = |id| page.value(id).unwrap_or_default().to_string();
        let submission = Submission {
            name: read(self.name),
            email: read(self.email),
            message: read(self.message),
        };
        if submission.name.is_empty() || submission.email.is_empty() || submission.message.is_empty()
        {
            return Err(FolioError::IncompleteForm);
        }
        Ok(submission)
    }

    pub fn on_submit(
        &mut self,
        page: &mut Page,
        scheduler: &mut dyn Scheduler,
    ) -> FolioResult<Submission> {
        if self.in_flight.is_some() {
            return Err(FolioError::SubmissionInFlight);
        }
        let submission = match self.validate(page) {
            Ok(submission) => submission,
            Err(e) => {
                page.push_effect(Effect::notice(self.config.missing_fields_notice.clone()));
                return Err(e);
            }
        };

        let label = page.text(self.submit).unwrap_or_default().to_string();
        self.in_flight = Some(label);
        page.set_text(self.submit, self.config.sending_label.clone());
        page.set_disabled(self.submit, true);
        scheduler.schedule_after(self.config.send_delay(), Job::FinishSubmission);
        tracing::info!(from = %submission.email, "Contact form sending");
        Ok(submission)
    }

    pub fn finish(&mut self, page: &mut Page) {
        let Some(label) = self.in_flight.take() else {
            return;
        };
        page.push_effect(Effect::notice(self.config.thanks_notice.clone()));
        page.reset_form(self.form);
        page.set_text(self.submit, label);
        page.set_disabled(self.submit, false);
        self.sent += 1;
    }
}
