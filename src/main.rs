#![allow(non_snake_case)]
mod components;
mod pages;
mod utils;

use components::navbar::NavBar;
use dioxus::prelude::*;
use pages::{
  ai_recommendations::AiRecommendations,
  booking_integrity::BookingIntegrity,
  checkout::{Checkout, CheckoutState},
  dynamic_pricing::DynamicPricing,
  event_details::EventDetails,
  events::{Categories, Events},
  home::Home,
  organizer_dashboard::OrganizerDashboard,
  user_dashboard::UserDashboard,
};
use utils::{
  auth::{self, AuthState},
  theme::{self, ThemeState},
};

#[derive(Routable, PartialEq, Clone)]
enum Route {
  #[layout(NavBar)]
  #[route("/")]
  Home {},
  #[route("/events?:search&:category")]
  Events { search: String, category: String },
  #[route("/categories")]
  Categories {},
  #[route("/event/:id")]
  EventDetails { id: String },
  #[route("/ai-recommendations")]
  AiRecommendations {},
  #[route("/checkout")]
  Checkout {},
  #[route("/dashboard/organizer")]
  OrganizerDashboard {},
  #[route("/dashboard/booking-integrity")]
  BookingIntegrity {},
  #[route("/dashboard/dynamic-pricing")]
  DynamicPricing {},
  #[route("/dashboard/user")]
  UserDashboard {},
  #[route("/:..route")]
  PageNotFound { route: Vec<String> },
}

fn main() {
  dioxus::launch(App);
}

fn App() -> Element {
  let theme_signal = use_context_provider(|| ThemeState { theme: Signal::new(theme::load_theme()) }).theme;
  use_context_provider(|| {
    let session = auth::load_session();
    AuthState {
      modal_open: Signal::new(session.is_none()),
      session: Signal::new(session),
    }
  });
  use_context_provider(|| CheckoutState { draft: Signal::new(None) });

  // keep the <html> attribute and the stored preference in sync with the toggle
  use_effect(move || {
    let current = theme_signal();
    theme::apply_theme(current);
    theme::store_theme(current);
  });

  rsx! { Router::<Route> {} }
}

#[component]
fn PageNotFound(route: Vec<String>) -> Element {
  rsx! {
    div {
      class: "not-found",
      h1 { "Page not found" }
      p { "We are terribly sorry, but the page you requested doesn't exist." }
      pre { color: "red", "log:\nattempted to navigate to: {route:?}" }
    }
  }
}
