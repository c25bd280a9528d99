#![allow(non_snake_case)]

use dioxus::logger::tracing::warn;
use dioxus::prelude::*;

use crate::components::toast::show_toast;
use crate::utils::auth::{
  self, AppError, AuthClient, AuthState, SignUpOutcome, SUPABASE_ANON_KEY, SUPABASE_URL,
};

#[component]
pub fn AuthModal() -> Element {
  let auth_state = use_context::<AuthState>();
  let mut session = auth_state.session;
  let mut modal_open = auth_state.modal_open;

  let mut login_view = use_signal(|| true);
  let mut email = use_signal(String::new);
  let mut password = use_signal(String::new);
  let mut full_name = use_signal(String::new);
  let mut error: Signal<Option<String>> = use_signal(|| None);
  let mut notice: Signal<Option<String>> = use_signal(|| None);
  let mut busy = use_signal(|| false);

  let client = use_signal(|| AuthClient::new(reqwest::Client::new(), SUPABASE_URL, SUPABASE_ANON_KEY));

  let submit = move |_evt: FormEvent| async move {
    busy.set(true);
    error.set(None);
    notice.set(None);

    let auth_client = client.read();
    if login_view() {
      match auth_client.sign_in(&email(), &password()).await {
        Ok(new_session) => {
          if let Err(e) = auth::store_session(&new_session) {
            warn!("failed to persist session: {}", e);
          }
          session.set(Some(new_session));
          modal_open.set(false);
          show_toast("auth-success-toast");
        }
        Err(AppError::AuthorizationError(msg)) => error.set(Some(msg)),
        Err(e) => error.set(Some(e.to_string())),
      }
    } else {
      match auth_client.sign_up(&email(), &password(), &full_name()).await {
        Ok(SignUpOutcome::SessionReady(new_session)) => {
          if let Err(e) = auth::store_session(&new_session) {
            warn!("failed to persist session: {}", e);
          }
          session.set(Some(new_session));
          modal_open.set(false);
          show_toast("auth-success-toast");
        }
        Ok(SignUpOutcome::ConfirmationEmailSent) => {
          // keep the modal open until the user verifies
          notice.set(Some("Please check your email to verify your account.".to_string()));
        }
        Err(AppError::AuthorizationError(msg)) => error.set(Some(msg)),
        Err(e) => error.set(Some(e.to_string())),
      }
    }
    busy.set(false);
  };

  rsx! {
    if modal_open() {
      div {
        class: "modal-backdrop",
        div {
          class: "modal-card",
          button {
            class: "modal-close",
            aria_label: "Close",
            onclick: move |_evt| modal_open.set(false),
            "✕"
          }
          div {
            class: "modal-brand",
            span { class: "brand-mark", "✨" }
            span { class: "brand-name", "SmarTIX" }
          }
          h2 { if login_view() { "Welcome Back" } else { "Create an Account" } }
          p {
            class: "modal-subtitle",
            if login_view() { "Sign in to continue" } else { "to start your journey" }
          }
          if let Some(message) = error() {
            p { class: "modal-error", "{message}" }
          }
          if let Some(message) = notice() {
            p { class: "modal-notice", "{message}" }
          }
          form {
            class: "modal-form",
            onsubmit: submit,
            if !login_view() {
              input {
                r#type: "text",
                class: "modal-input",
                placeholder: "Full Name",
                required: true,
                value: "{full_name}",
                oninput: move |evt| full_name.set(evt.value()),
              }
            }
            input {
              r#type: "email",
              class: "modal-input",
              placeholder: "Email",
              required: true,
              value: "{email}",
              oninput: move |evt| email.set(evt.value()),
            }
            input {
              r#type: "password",
              class: "modal-input",
              placeholder: "Password",
              required: true,
              value: "{password}",
              oninput: move |evt| password.set(evt.value()),
            }
            button {
              r#type: "submit",
              class: "button button-primary modal-submit",
              disabled: busy(),
              if busy() {
                "Please wait..."
              } else if login_view() {
                "Sign In"
              } else {
                "Sign Up"
              }
            }
          }
          p {
            class: "modal-switch",
            if login_view() { "Don't have an account? " } else { "Already have an account? " }
            a {
              href: "#",
              onclick: move |evt| {
                evt.prevent_default();
                login_view.set(!login_view());
                error.set(None);
                notice.set(None);
              },
              if login_view() { "Sign Up" } else { "Sign In" }
            }
          }
        }
      }
    }
  }
}
