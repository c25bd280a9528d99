#![allow(non_snake_case)]

use dioxus::logger::tracing::warn;
use dioxus::prelude::*;

use crate::components::auth_modal::AuthModal;
use crate::components::chatbot::Chatbot;
use crate::components::theme_switcher::ThemeSwitcher;
use crate::components::toast::{show_toast, ErrorToast, SuccessToast};
use crate::utils::auth::{self, AuthClient, AuthState, SUPABASE_ANON_KEY, SUPABASE_URL};
use crate::Route;

#[component]
pub fn NavBar() -> Element {
  static CSS: Asset = asset!("/assets/template.css");

  rsx! {
    document::Stylesheet { href: CSS }
    Header {}
    Outlet::<Route> {}
    Footer {}
    Chatbot {}
    AuthModal {}
    SuccessToast { id: "auth-success-toast", content: "Signed in successfully" }
    ErrorToast { id: "auth-signout-toast", content: "Could not reach the sign-in service" }
  }
}

#[component]
fn Header() -> Element {
  let auth_state = use_context::<AuthState>();
  let mut session = auth_state.session;
  let mut modal_open = auth_state.modal_open;
  let mut search_query = use_signal(String::new);
  let nav = navigator();

  rsx! {
    nav {
      div {
        class: "nav-container",
        Link {
          class: "logo",
          to: Route::Home {},
          span { class: "brand-mark", "✨" }
          span { class: "brand-name", "SmarTIX" }
        }
        form {
          class: "nav-search",
          onsubmit: move |_evt| {
            let query = search_query().trim().to_string();
            if !query.is_empty() {
              nav.push(Route::Events { search: query, category: String::new() });
              search_query.set(String::new());
            }
          },
          input {
            r#type: "text",
            class: "nav-search-input",
            placeholder: "Search for events, artists, venues...",
            value: "{search_query}",
            oninput: move |evt| search_query.set(evt.value()),
          }
        }
        div {
          class: "nav-links",
          Link {
            active_class: "nav-active",
            to: Route::Events { search: String::new(), category: String::new() },
            "Events"
          }
          Link {
            active_class: "nav-active",
            to: Route::Categories {},
            "Categories"
          }
          Link {
            active_class: "nav-active",
            to: Route::AiRecommendations {},
            "AI Picks"
          }
          div {
            class: "nav-dropdown",
            button { class: "nav-dropdown-trigger", "Dashboards ▾" }
            div {
              class: "nav-dropdown-menu",
              Link { to: Route::OrganizerDashboard {}, "Organizer Intelligence" }
              Link { to: Route::DynamicPricing {}, "Dynamic Pricing" }
              Link { to: Route::BookingIntegrity {}, "Booking Integrity" }
              Link { to: Route::UserDashboard {}, "My Dashboard" }
            }
          }
          ThemeSwitcher {}
          if let Some(current) = session() {
            span { class: "nav-user", {format!("Hi, {}", current.user.display_name())} }
            button {
              class: "button button-ghost",
              onclick: move |_evt| {
                let token = session().map(|s| s.access_token);
                auth::clear_session();
                session.set(None);
                modal_open.set(true);
                // best-effort revoke; the local session is gone either way
                if let Some(token) = token {
                  spawn(async move {
                    let client = AuthClient::new(reqwest::Client::new(), SUPABASE_URL, SUPABASE_ANON_KEY);
                    if let Err(e) = client.sign_out(&token).await {
                      warn!("sign-out request failed: {}", e);
                      show_toast("auth-signout-toast");
                    }
                  });
                }
              },
              "Sign Out"
            }
          } else {
            button {
              class: "button button-primary",
              onclick: move |_evt| modal_open.set(true),
              "Sign In"
            }
          }
        }
      }
    }
  }
}

#[component]
fn Footer() -> Element {
  rsx! {
    footer {
      div {
        class: "footer-container",
        div {
          class: "copyright",
          p { "© 2025 SmarTIX" }
          p { class: "footer-tagline", "Smart ticketing powered by AI" }
        }
        div {
          class: "social-links",
          a {
            href: "mailto:hello@smartix.events",
            class: "social-link",
            title: "Email",
            svg {
              xmlns: "http://www.w3.org/2000/svg",
              width: "24",
              height: "24",
              view_box: "0 0 24 24",
              fill: "none",
              stroke: "currentcolor",
              stroke_width: "2",
              stroke_linecap: "round",
              stroke_linejoin: "round",
              path {
                d: "M4 4h16c1.1 0 2 .9 2 2v12c0 1.1-.9 2-2 2H4c-1.1 0-2-.9-2-2V6c0-1.1.9-2 2-2z"
              }
              polyline {
                points: "22,6 12,13 2,6"
              }
            }
          }
          a {
            href: "https://github.com/smartix-events",
            target: "_blank",
            class: "social-link",
            title: "Github",
            svg {
              xmlns: "http://www.w3.org/2000/svg",
              width: "24",
              height: "24",
              view_box: "0 0 24 24",
              fill: "none",
              stroke: "currentcolor",
              stroke_width: "2",
              stroke_linecap: "round",
              stroke_linejoin: "round",
              path {
                d: "M9 19c-5 1.5-5-2.5-7-3m14 6v-3.87a3.37 3.37 0 0 0-.94-2.61c3.14-.35 6.44-1.54 6.44-7A5.44 5.44 0 0 0 20 4.77 5.07 5.07 0 0 0 19.91 1S18.73.65 16 2.48a13.38 13.38 0 0 0-7 0C6.27.65 5.09 1 5.09 1A5.07 5.07 0 0 0 5 4.77a5.44 5.44 0 0 0-1.5 3.78c0 5.42 3.3 6.61 6.44 7A3.37 3.37 0 0 0 9 18.13V22"
              }
            }
          }
        }
      }
    }
  }
}
