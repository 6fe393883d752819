//! Pilot-programme lead capture: field validation, attachment rules and the
//! submission state machine. Transport lives in [`submit`].

pub mod submit;

use crate::i18n::FormErrors;
use serde::Serialize;
use thiserror::Error;

pub use submit::LeadSubmitter;

pub const MAX_ATTACHMENT_BYTES: f64 = 10.0 * 1024.0 * 1024.0;
pub const MAX_ATTACHMENTS: u32 = 1;

const PDF_MIME: &str = "application/pdf";
const DOCX_MIME: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    FullName,
    WorkEmail,
    CompanyName,
    JobTitle,
    PhoneNumber,
}

impl Field {
    pub fn name(self) -> &'static str {
        match self {
            Field::FullName => "fullName",
            Field::WorkEmail => "workEmail",
            Field::CompanyName => "companyName",
            Field::JobTitle => "jobTitle",
            Field::PhoneNumber => "phoneNumber",
        }
    }
}

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum FieldError {
    #[error("required")]
    Required,
    #[error("invalid email address")]
    InvalidEmail,
}

impl FieldError {
    pub fn message(self, errors: &FormErrors) -> &'static str {
        match self {
            FieldError::Required => errors.required,
            FieldError::InvalidEmail => errors.invalid_email,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadForm {
    pub full_name: String,
    pub work_email: String,
    pub company_name: String,
    pub job_title: String,
    pub phone_number: String,
}

impl LeadForm {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FullName => &self.full_name,
            Field::WorkEmail => &self.work_email,
            Field::CompanyName => &self.company_name,
            Field::JobTitle => &self.job_title,
            Field::PhoneNumber => &self.phone_number,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::FullName => &mut self.full_name,
            Field::WorkEmail => &mut self.work_email,
            Field::CompanyName => &mut self.company_name,
            Field::JobTitle => &mut self.job_title,
            Field::PhoneNumber => &mut self.phone_number,
        };
        *slot = value;
    }

    /// Every problem found, in field order. Empty means the form can be sent.
    pub fn validate(&self) -> Vec<(Field, FieldError)> {
        let mut problems = Vec::new();
        for field in [Field::FullName, Field::WorkEmail, Field::CompanyName, Field::JobTitle] {
            if self.get(field).trim().is_empty() {
                problems.push((field, FieldError::Required));
            }
        }
        let email = self.work_email.trim();
        if !email.is_empty() && !looks_like_email(email) {
            problems.push((Field::WorkEmail, FieldError::InvalidEmail));
        }
        problems
    }
}

fn looks_like_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !value.contains(char::is_whitespace)
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && domain.contains('.')
        && !domain.contains('@')
}

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum AttachmentError {
    #[error("only PDF and DOCX documents are accepted")]
    UnsupportedType,
    #[error("document exceeds the 10 MiB limit")]
    TooLarge,
    #[error("only one document can be attached")]
    TooMany,
}

impl AttachmentError {
    pub fn message(self, errors: &FormErrors) -> &'static str {
        match self {
            AttachmentError::UnsupportedType => errors.unsupported_file,
            AttachmentError::TooLarge => errors.file_too_large,
            AttachmentError::TooMany => errors.too_many_files,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
}

/// What the form knows about a picked file before it is sent.
#[derive(Clone, Debug, PartialEq)]
pub struct AttachmentMeta {
    pub name: String,
    pub mime: String,
    pub size: f64,
}

impl AttachmentMeta {
    pub fn from_file(file: &web_sys::File) -> Self {
        Self {
            name: file.name(),
            mime: file.type_(),
            size: file.size(),
        }
    }

    /// Browsers leave the MIME type empty for some uploads, so the extension
    /// is accepted as a fallback.
    pub fn kind(&self) -> Option<DocumentKind> {
        match self.mime.as_str() {
            PDF_MIME => return Some(DocumentKind::Pdf),
            DOCX_MIME => return Some(DocumentKind::Docx),
            _ => {}
        }
        let ext = self.name.rsplit_once('.')?.1.to_ascii_lowercase();
        match ext.as_str() {
            "pdf" => Some(DocumentKind::Pdf),
            "docx" => Some(DocumentKind::Docx),
            _ => None,
        }
    }

    pub fn check(&self) -> Result<DocumentKind, AttachmentError> {
        let kind = self.kind().ok_or(AttachmentError::UnsupportedType)?;
        if self.size > MAX_ATTACHMENT_BYTES {
            return Err(AttachmentError::TooLarge);
        }
        Ok(kind)
    }
}

/// Applies the count rule and then the per-file rules.
pub fn check_selection(files: &[AttachmentMeta]) -> Result<Option<&AttachmentMeta>, AttachmentError> {
    if files.len() > MAX_ATTACHMENTS as usize {
        return Err(AttachmentError::TooMany);
    }
    match files.first() {
        Some(file) => {
            file.check()?;
            Ok(Some(file))
        }
        None => Ok(None),
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("network error: {0}")]
    Network(String),
    #[error("lead endpoint answered {status}")]
    Rejected { status: u16 },
    #[error("could not build request: {0}")]
    Encode(String),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed(SubmitError),
}

impl SubmissionState {
    /// Moves to `Submitting` unless a submission is already in flight or has
    /// succeeded. Returns whether the caller should send.
    pub fn begin(&mut self) -> bool {
        match self {
            SubmissionState::Idle | SubmissionState::Failed(_) => {
                *self = SubmissionState::Submitting;
                true
            }
            SubmissionState::Submitting | SubmissionState::Succeeded => false,
        }
    }

    pub fn finish(&mut self, result: Result<(), SubmitError>) {
        if *self != SubmissionState::Submitting {
            return;
        }
        *self = match result {
            Ok(()) => SubmissionState::Succeeded,
            Err(e) => SubmissionState::Failed(e),
        };
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionState::Submitting)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn complete_form() -> LeadForm {
        LeadForm {
            full_name: "Siti Rahma".into(),
            work_email: "siti@acme.co.id".into(),
            company_name: "Acme".into(),
            job_title: "General Counsel".into(),
            phone_number: String::new(),
        }
    }

    fn meta(name: &str, mime: &str, size: f64) -> AttachmentMeta {
        AttachmentMeta {
            name: name.into(),
            mime: mime.into(),
            size,
        }
    }

    #[test]
    fn complete_form_without_phone_is_valid() {
        assert_eq!(complete_form().validate(), vec![]);
    }

    #[test]
    fn blank_required_fields_are_reported_in_order() {
        let form = LeadForm {
            company_name: "  ".into(),
            ..LeadForm::default()
        };
        assert_eq!(
            form.validate(),
            vec![
                (Field::FullName, FieldError::Required),
                (Field::WorkEmail, FieldError::Required),
                (Field::CompanyName, FieldError::Required),
                (Field::JobTitle, FieldError::Required),
            ]
        );
    }

    #[test]
    fn malformed_emails_are_rejected() {
        for bad in ["siti", "@acme.com", "siti@acme", "siti@.com", "siti@acme.", "si ti@acme.com", "a@b@c.com"] {
            let mut form = complete_form();
            form.set(Field::WorkEmail, bad.into());
            assert_eq!(
                form.validate(),
                vec![(Field::WorkEmail, FieldError::InvalidEmail)],
                "{bad}"
            );
        }
    }

    #[test]
    fn field_errors_resolve_to_translated_messages() {
        let errors = &crate::i18n::ID.registration.errors;
        assert_eq!(FieldError::Required.message(errors), errors.required);
        assert_eq!(AttachmentError::TooMany.message(errors), errors.too_many_files);
    }

    #[test]
    fn attachment_kind_by_mime_or_extension() {
        assert_eq!(meta("brief.bin", PDF_MIME, 10.0).kind(), Some(DocumentKind::Pdf));
        assert_eq!(meta("Kontrak.DOCX", "", 10.0).kind(), Some(DocumentKind::Docx));
        assert_eq!(meta("notes.doc", "application/msword", 10.0).kind(), None);
        assert_eq!(meta("README", "", 10.0).kind(), None);
    }

    #[test]
    fn attachment_size_limit_is_inclusive() {
        assert_eq!(meta("a.pdf", PDF_MIME, MAX_ATTACHMENT_BYTES).check(), Ok(DocumentKind::Pdf));
        assert_eq!(
            meta("a.pdf", PDF_MIME, MAX_ATTACHMENT_BYTES + 1.0).check(),
            Err(AttachmentError::TooLarge)
        );
    }

    #[test]
    fn selection_allows_at_most_one_file() {
        let pdf = meta("a.pdf", PDF_MIME, 1.0);
        assert_eq!(check_selection(&[]), Ok(None));
        assert_eq!(check_selection(std::slice::from_ref(&pdf)), Ok(Some(&pdf)));
        assert_eq!(
            check_selection(&[pdf.clone(), pdf]),
            Err(AttachmentError::TooMany)
        );
    }

    #[test]
    fn failed_submission_can_be_retried() {
        let mut state = SubmissionState::default();
        assert!(state.begin());
        assert!(!state.begin());
        state.finish(Err(SubmitError::Rejected { status: 502 }));
        assert_eq!(state, SubmissionState::Failed(SubmitError::Rejected { status: 502 }));
        assert!(state.begin());
        state.finish(Ok(()));
        assert_eq!(state, SubmissionState::Succeeded);
        assert!(!state.begin());
    }

    #[test]
    fn finish_outside_submitting_is_ignored() {
        let mut state = SubmissionState::Idle;
        state.finish(Ok(()));
        assert_eq!(state, SubmissionState::Idle);
    }
}
