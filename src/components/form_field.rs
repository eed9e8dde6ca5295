//! Form Helpers
//!
//! `FormState` bundles a form's inputs with its field errors, submit error
//! and pending flag; `FormField` renders one labelled control with its message.

use std::future::Future;

use leptos::prelude::*;

use crate::forms::FieldErrors;

pub struct FormState<F: Send + Sync + 'static> {
    pub form: RwSignal<F>,
    pub errors: RwSignal<FieldErrors>,
    pub submit_error: RwSignal<Option<String>>,
    pub pending: RwSignal<bool>,
}

impl<F: Send + Sync + 'static> Clone for FormState<F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F: Send + Sync + 'static> Copy for FormState<F> {}

impl<F: Send + Sync + 'static> FormState<F> {
    pub fn new(initial: F) -> Self {
        Self {
            form: RwSignal::new(initial),
            errors: RwSignal::new(FieldErrors::new()),
            submit_error: RwSignal::new(None),
            pending: RwSignal::new(false),
        }
    }

    /// Replace the inputs and clear all messages
    pub fn reset(&self, value: F) {
        self.form.set(value);
        self.errors.set(FieldErrors::new());
        self.submit_error.set(None);
    }

    pub fn is_pending(&self) -> bool {
        self.pending.get()
    }

    /// Validate and hand the request to `send`. Field errors stop the submit;
    /// a failed send keeps the inputs and records the message. Returns `true`
    /// once `send` succeeded.
    pub async fn submit<R, Fut>(
        self,
        validate: impl FnOnce(&F) -> Result<R, FieldErrors>,
        send: impl FnOnce(R) -> Fut,
    ) -> bool
    where
        Fut: Future<Output = Result<(), String>>,
    {
        if self.pending.get_untracked() {
            return false;
        }
        let request = match self.form.with_untracked(validate) {
            Ok(request) => request,
            Err(field_errors) => {
                tracing::debug!("Form has {} invalid field(s)", field_errors.len());
                self.errors.set(field_errors);
                return false;
            }
        };
        self.errors.set(FieldErrors::new());
        self.submit_error.set(None);
        self.pending.set(true);
        let result = send(request).await;
        self.pending.set(false);
        match result {
            Ok(()) => true,
            Err(e) => {
                tracing::error!("Submit failed: {}", e);
                self.submit_error.set(Some(e));
                false
            }
        }
    }
}

/// Label, control and the field's validation message
#[component]
pub fn FormField(
    #[prop(into)] label: String,
    errors: RwSignal<FieldErrors>,
    field: &'static str,
    children: Children,
) -> impl IntoView {
    let message = move || errors.with(|e| e.get(field).map(str::to_string));

    view! {
        <div class="form-field" class:invalid=move || errors.with(|e| e.has(field))>
            <label>{label}</label>
            {children()}
            {move || message().map(|m| view! { <p class="field-error">{m}</p> })}
        </div>
    }
}

/// Message of a failed submit, kept while the form stays open
#[component]
pub fn SubmitError(error: RwSignal<Option<String>>) -> impl IntoView {
    move || error.get().map(|e| view! { <p class="form-error" role="alert">{e}</p> })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::ApartmentForm;
    use futures::executor::block_on;

    #[test]
    fn test_invalid_form_is_not_sent() {
        let state = FormState::new(ApartmentForm::default());
        let mut sent = false;
        let ok = block_on(state.submit(ApartmentForm::validate, |_| {
            sent = true;
            async { Ok(()) }
        }));

        assert!(!ok);
        assert!(!sent);
        assert!(state.errors.with_untracked(|e| e.has(ApartmentForm::NAME)));
    }

    #[test]
    fn test_failed_send_keeps_inputs() {
        let form = ApartmentForm {
            name: "A-1203".into(),
            area: "75".into(),
        };
        let state = FormState::new(form.clone());
        let ok = block_on(state.submit(ApartmentForm::validate, |_| async {
            Err("Apartment name already exists".to_string())
        }));

        assert!(!ok);
        assert_eq!(state.form.get_untracked(), form);
        assert_eq!(
            state.submit_error.get_untracked().as_deref(),
            Some("Apartment name already exists")
        );
        assert!(!state.pending.get_untracked());
    }

    #[test]
    fn test_successful_submit_clears_messages() {
        let state = FormState::new(ApartmentForm::default());
        block_on(state.submit(ApartmentForm::validate, |_| async { Ok(()) }));
        assert!(!state.errors.with_untracked(FieldErrors::is_empty));

        state.form.update_untracked(|f| f.name = "B-0402".into());
        let ok = block_on(state.submit(ApartmentForm::validate, |request| async move {
            assert_eq!(request.name, "B-0402");
            Ok(())
        }));

        assert!(ok);
        assert!(state.errors.with_untracked(FieldErrors::is_empty));
        assert_eq!(state.submit_error.get_untracked(), None);
    }
}
