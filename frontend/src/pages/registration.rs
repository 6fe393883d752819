use crate::app::{use_language, use_view};
use crate::leads::{
    check_selection, AttachmentError, AttachmentMeta, Field, FieldError, LeadForm, LeadSubmitter, SubmissionState,
};
use crate::state::ViewAction;
use wasm_bindgen_futures::spawn_local;
use web_sys::{FileList, HtmlInputElement};
use yew::prelude::*;

const BENEFIT_ICONS: [&str; 3] = ["⛨", "⎙", "☺"];

fn files_of(list: Option<FileList>) -> Vec<web_sys::File> {
    let Some(list) = list else {
        return Vec::new();
    };
    (0..list.length()).filter_map(|i| list.get(i)).collect()
}

/// Runs the selection rules and returns the accepted file, if any.
fn pick(files: Vec<web_sys::File>) -> Result<Option<web_sys::File>, AttachmentError> {
    let metas: Vec<AttachmentMeta> = files.iter().map(AttachmentMeta::from_file).collect();
    check_selection(&metas)?;
    Ok(files.into_iter().next())
}

#[derive(Properties, PartialEq)]
struct TextFieldProps {
    field: Field,
    label: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
    value: String,
    error: Option<&'static str>,
    onchange: Callback<(Field, String)>,
}

#[function_component(TextField)]
fn text_field(props: &TextFieldProps) -> Html {
    let oninput = {
        let field = props.field;
        let onchange = props.onchange.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            onchange.emit((field, input.value()));
        })
    };
    html! {
        <div class={classes!("form-field", props.error.is_some().then_some("invalid"))}>
            <label for={props.field.name()}>{props.label}</label>
            <input
                id={props.field.name()}
                name={props.field.name()}
                type={props.input_type}
                placeholder={props.placeholder}
                value={props.value.clone()}
                {oninput}
            />
            if let Some(error) = props.error {
                <span class="field-error">{error}</span>
            }
        </div>
    }
}

#[function_component(RegistrationPage)]
pub fn registration_page() -> Html {
    let language = use_language();
    let view = use_view();
    let t = &language.store.t().registration;

    let form = use_state(LeadForm::default);
    let field_errors = use_state(Vec::<(Field, FieldError)>::new);
    let attachment = use_state(|| None::<web_sys::File>);
    let attachment_error = use_state(|| None::<AttachmentError>);
    let dragging = use_state_eq(|| false);
    let submission = use_state(SubmissionState::default);
    let submitter = use_state(LeadSubmitter::from_config);

    let on_field = {
        let form = form.clone();
        let field_errors = field_errors.clone();
        Callback::from(move |(field, value): (Field, String)| {
            let mut next = (*form).clone();
            next.set(field, value);
            // Clear the message for a field as soon as it is edited.
            if field_errors.iter().any(|(f, _)| *f == field) {
                field_errors.set(field_errors.iter().copied().filter(|(f, _)| *f != field).collect());
            }
            form.set(next);
        })
    };

    let accept_files = {
        let attachment = attachment.clone();
        let attachment_error = attachment_error.clone();
        Callback::from(move |files: Vec<web_sys::File>| match pick(files) {
            Ok(file) => {
                if let Some(file) = &file {
                    log::debug!("attachment selected: {} ({} bytes)", file.name(), file.size());
                }
                attachment.set(file);
                attachment_error.set(None);
            }
            Err(e) => {
                log::debug!("attachment rejected: {}", e);
                attachment_error.set(Some(e));
            }
        })
    };

    let on_file_change = {
        let accept_files = accept_files.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            accept_files.emit(files_of(input.files()));
            // Let the same file be picked again after a rejection.
            input.set_value("");
        })
    };
    let on_drag_over = {
        let dragging = dragging.clone();
        Callback::from(move |e: DragEvent| {
            e.prevent_default();
            dragging.set(true);
        })
    };
    let on_drag_leave = {
        let dragging = dragging.clone();
        Callback::from(move |_: DragEvent| dragging.set(false))
    };
    let on_drop = {
        let dragging = dragging.clone();
        Callback::from(move |e: DragEvent| {
            e.prevent_default();
            dragging.set(false);
            accept_files.emit(files_of(e.data_transfer().and_then(|dt| dt.files())));
        })
    };

    let submit = {
        let form = form.clone();
        let field_errors = field_errors.clone();
        let attachment = attachment.clone();
        let submission = submission.clone();
        let submitter = submitter.clone();
        Callback::from(move |_: ()| {
            let problems = form.validate();
            if !problems.is_empty() {
                log::debug!("registration blocked by {} field error(s)", problems.len());
                field_errors.set(problems);
                return;
            }
            let mut state = (*submission).clone();
            if !state.begin() {
                return;
            }
            submission.set(state.clone());

            let lead = (*form).clone();
            let file = (*attachment).clone();
            let submitter = (*submitter).clone();
            let submission = submission.clone();
            spawn_local(async move {
                let result = submitter.submit(&lead, file.as_ref()).await;
                if let Err(e) = &result {
                    log::warn!("registration failed: {}", e);
                }
                state.finish(result);
                submission.set(state);
            });
        })
    };
    let onsubmit = {
        let submit = submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            submit.emit(());
        })
    };
    let on_retry = Callback::from(move |_: MouseEvent| submit.emit(()));

    if *submission == SubmissionState::Succeeded {
        return html! {
            <div class="registration registration-success">
                <div class="success-card">
                    <div class="success-icon">{"✓"}</div>
                    <h2>{t.success.title}</h2>
                    <p>{t.success.desc}</p>
                    <button class="button-secondary" onclick={view.on(ViewAction::GoHome)}>
                        {t.return_home}
                    </button>
                </div>
            </div>
        };
    }

    let error_for = |field: Field| {
        field_errors
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, e)| e.message(&t.errors))
    };
    let text_field = |field: Field, label: &'static str, input_type: &'static str, placeholder: &'static str| {
        html! {
            <TextField
                {field}
                {label}
                {input_type}
                {placeholder}
                value={form.get(field).to_string()}
                error={error_for(field)}
                onchange={on_field.clone()}
            />
        }
    };
    let submitting = submission.is_submitting();

    html! {
        <div class="registration">
            <div class="registration-layout">
                <div class="registration-pitch">
                    <div class="hero-badge">{t.badge}</div>
                    <h1>
                        {t.headline_start}
                        <span class="text-gradient">{t.headline_highlight}</span>
                    </h1>
                    <p class="registration-sub">{t.subheadline}</p>
                    <div class="benefits">
                        { for t.benefits.iter().zip(BENEFIT_ICONS).map(|(benefit, icon)| html! {
                            <div class="benefit">
                                <div class="card-icon">{icon}</div>
                                <div>
                                    <h3>{benefit.title}</h3>
                                    <p>{benefit.desc}</p>
                                </div>
                            </div>
                        }) }
                    </div>
                </div>

                <div class="registration-card">
                    <form {onsubmit} novalidate={true}>
                        <div class="form-row">
                            {text_field(Field::FullName, t.form.full_name, "text", "John Doe")}
                            {text_field(Field::WorkEmail, t.form.work_email, "email", "john@company.com")}
                        </div>
                        <div class="form-row">
                            {text_field(Field::CompanyName, t.form.company_name, "text", "Acme Corp")}
                            {text_field(Field::JobTitle, t.form.job_title, "text", "Chief Legal Officer")}
                        </div>
                        {text_field(Field::PhoneNumber, t.form.phone_number, "tel", "+62 812 3456 7890")}

                        <div class="upload">
                            <div class="upload-head">
                                <label>{t.form.upload_title}</label>
                                <span class="mono">{"ENCRYPTED UPLOAD"}</span>
                            </div>
                            <p class="upload-desc">{t.form.upload_desc}</p>
                            <label
                                class={classes!("dropzone", "cursor-pointer", dragging.then_some("dragging"))}
                                ondragover={on_drag_over}
                                ondragleave={on_drag_leave}
                                ondrop={on_drop}
                            >
                                <input
                                    type="file"
                                    class="visually-hidden"
                                    accept=".pdf,.docx,application/pdf,application/vnd.openxmlformats-officedocument.wordprocessingml.document"
                                    onchange={on_file_change}
                                />
                                {
                                    match &*attachment {
                                        Some(file) => html! {
                                            <div class="dropzone-ready">
                                                <span class="success-icon">{"✓"}</span>
                                                <p class="file-name">{file.name()}</p>
                                            </div>
                                        },
                                        None => html! {
                                            <>
                                                <div class="dropzone-icon">{"⇪"}</div>
                                                <p>{t.form.dropzone_text}</p>
                                                <p class="dropzone-sub">{t.form.dropzone_subtext}</p>
                                            </>
                                        },
                                    }
                                }
                            </label>
                            if let Some(error) = *attachment_error {
                                <span class="field-error">{error.message(&t.errors)}</span>
                            }
                        </div>

                        if let SubmissionState::Failed(_) = &*submission {
                            <div class="submit-failed" role="alert">
                                <span>{t.errors.submit_failed}</span>
                                <button type="button" class="button-secondary" onclick={on_retry}>
                                    {t.errors.retry}
                                </button>
                            </div>
                        }

                        <button type="submit" class="button-primary submit" disabled={submitting}>
                            if submitting {
                                <span class="spinner"></span>
                                <span>{t.form.submitting}</span>
                            } else {
                                {t.form.submit}{" →"}
                            }
                        </button>
                        <div class="agreement">{t.form.agreement}</div>
                    </form>
                </div>
            </div>
        </div>
    }
}
