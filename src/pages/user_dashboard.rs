use chrono::Utc;
use dioxus::prelude::*;

use crate::components::event_card::EventCard;
use crate::utils::mock_data::{generate_mock_bookings, generate_mock_events, Booking, Event};

#[component]
pub fn UserDashboard() -> Element {
  static CSS: Asset = asset!("/assets/dashboard.css");
  let events: Signal<Vec<Event>> = use_signal(|| generate_mock_events(20));
  let bookings: Signal<Vec<Booking>> = use_signal(|| generate_mock_bookings(10));

  let recommended: Vec<Event> = events()
    .iter()
    .filter(|e| e.ai_score.map_or(false, |score| score > 0.9))
    .take(4)
    .cloned()
    .collect();

  // the demo signs the viewer in as user-1
  let upcoming: Vec<(Booking, Event)> = bookings()
    .iter()
    .filter(|b| b.user_id == "user-1")
    .filter_map(|b| {
      events()
        .iter()
        .find(|e| e.id == b.event_id)
        .map(|e| (b.clone(), e.clone()))
    })
    .filter(|(_, event)| event.date > Utc::now())
    .collect();

  rsx! {
    document::Stylesheet { href: CSS }
    div {
      class: "dashboard-page",
      header {
        class: "dashboard-header user",
        span { class: "user-avatar", "👤" }
        div {
          h1 { "Welcome Back, Alex!" }
          p { "Here's your personalized event hub." }
        }
      }
      section {
        class: "user-section",
        h2 { "✨ Personalized Recommendations" }
        if recommended.is_empty() {
          p {
            class: "user-empty",
            "No special recommendations for you at the moment. Explore more events to improve suggestions!"
          }
        } else {
          div {
            class: "event-grid cols-4",
            for (index, event) in recommended.into_iter().enumerate() {
              EventCard { key: "{event.id}", event, index }
            }
          }
        }
      }
      section {
        class: "user-section",
        h2 { "🎟 Your Upcoming Events" }
        if upcoming.is_empty() {
          p {
            class: "user-empty",
            "You have no upcoming events. Time to book a new experience!"
          }
        } else {
          div {
            class: "upcoming-list",
            for (booking, event) in upcoming {
              div {
                key: "{booking.id}",
                class: "upcoming-row",
                img { src: "{event.image}", alt: "{event.title}" }
                div {
                  class: "upcoming-info",
                  h3 { "{event.title}" }
                  p { {format!("{} at {}", event.date.format("%A, %d %B %Y"), event.time)} }
                  p { class: "upcoming-venue", "{event.venue}" }
                }
                div {
                  class: "upcoming-actions",
                  p {
                    class: "upcoming-qty",
                    if booking.quantity > 1 { "{booking.quantity} Tickets" } else { "1 Ticket" }
                  }
                  button { class: "button button-primary", "View E-Ticket" }
                }
              }
            }
          }
        }
      }
    }
  }
}
