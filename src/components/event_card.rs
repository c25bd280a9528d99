#![allow(non_snake_case)]

use dioxus::prelude::*;

use crate::utils::format::format_inr;
use crate::utils::mock_data::Event;
use crate::Route;

#[component]
pub fn EventCard(event: Event, index: usize) -> Element {
  let selling_fast = event.sold_percentage() > 80.0;
  let date_label = event.date.format("%d %b %Y").to_string();
  let price_label = format!("{}{}", event.currency, format_inr(event.price_min));
  let delay = index * 50;

  rsx! {
    div {
      class: "event-card",
      style: "animation-delay: {delay}ms",
      Link {
        class: "event-card-link",
        to: Route::EventDetails { id: event.id.clone() },
        div {
          class: "event-card-media",
          img { src: "{event.image}", alt: "{event.title}", loading: "lazy" }
          div { class: "event-card-media-overlay" }
          div {
            class: "event-card-media-caption",
            h3 { "{event.title}" }
            div { class: "event-card-location", "📍 {event.venue}, {event.city}" }
          }
          if event.is_ai_pick() {
            div { class: "event-card-badge ai", "✨ AI Pick" }
          }
          if selling_fast {
            div { class: "event-card-badge selling-fast", "Selling Fast" }
          }
        }
        div {
          class: "event-card-body",
          div {
            class: "event-card-meta",
            span { class: "event-card-category", "{event.category}" }
            span { class: "event-card-rating", "★ {event.rating}" }
          }
          div { class: "event-card-date", "{date_label} • {event.time}" }
          div {
            class: "event-card-footer",
            div {
              p { class: "event-card-price-label", "Starts from" }
              p { class: "event-card-price", "{price_label}" }
            }
            span { class: "event-card-cta", "Book Now" }
          }
        }
      }
    }
  }
}
