use dioxus::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::pages::checkout::{BookingDraft, CheckoutState};
use crate::utils::format::format_inr;
use crate::utils::mock_data::{generate_mock_events, generate_ticket_tiers, Event, TicketTier};
use crate::Route;

fn load_event(id: &str) -> (Option<Event>, Vec<TicketTier>) {
  let event = generate_mock_events(24).into_iter().find(|e| e.id == id);
  let tiers = event
    .as_ref()
    .map(|e| generate_ticket_tiers(&e.id))
    .unwrap_or_default();
  (event, tiers)
}

#[component]
pub fn EventDetails(id: String) -> Element {
  static CSS: Asset = asset!("/assets/details.css");
  let mut loaded_for = use_signal(|| id.clone());
  let mut data = use_signal(|| load_event(&id));
  let mut selected_tier =
    use_signal(|| data().1.first().map(|t| t.id.clone()).unwrap_or_default());
  let mut quantity = use_signal(|| 1u32);
  let mut checkout_draft = use_context::<CheckoutState>().draft;
  let nav = navigator();

  // in-app links can move straight from one event page to another; the
  // route id changing means a fresh lookup and reset selection
  if loaded_for() != id {
    loaded_for.set(id.clone());
    let fresh = load_event(&id);
    selected_tier.set(fresh.1.first().map(|t| t.id.clone()).unwrap_or_default());
    quantity.set(1);
    data.set(fresh);
  }

  let (event, tiers) = data();
  let Some(event) = event else {
    return rsx! {
      document::Stylesheet { href: CSS }
      div {
        class: "details-missing",
        h1 { "Event not found" }
        p { "The event you are looking for doesn't exist or has ended." }
        Link { class: "button button-primary", to: Route::Home {}, "Back to Home" }
      }
    };
  };

  let selected: Option<TicketTier> = tiers.iter().find(|t| t.id == selected_tier()).cloned();
  let subtotal = selected
    .as_ref()
    .map(|tier| tier.price * Decimal::from(quantity()))
    .unwrap_or(Decimal::ZERO);
  let service_fee = subtotal * dec!(0.05);
  let total = subtotal + service_fee;
  let max_quantity = selected.as_ref().map(|tier| tier.available).unwrap_or(1);
  let long_date = event.date.format("%A, %d %B %Y").to_string();
  let subtotal_label = format!("{}{}", event.currency, format_inr(subtotal));
  let fee_label = format!("{}{}", event.currency, format_inr(service_fee));
  let total_label = format!("{}{}", event.currency, format_inr(total));

  let on_book = {
    let event = event.clone();
    let selected = selected.clone();
    move |_evt: MouseEvent| {
      if let Some(tier) = selected.clone() {
        checkout_draft.set(Some(BookingDraft { event: event.clone(), tier, quantity: quantity() }));
        nav.push(Route::Checkout {});
      }
    }
  };

  rsx! {
    document::Stylesheet { href: CSS }
    div {
      class: "details-page",
      div {
        class: "details-hero",
        img { src: "{event.image}", alt: "{event.title}" }
        div { class: "details-hero-overlay" }
        div {
          class: "details-hero-content",
          if event.is_ai_pick() {
            div { class: "details-ai-badge", "✨ AI Recommended" }
          }
          h1 { "{event.title}" }
          div {
            class: "details-tags",
            for tag in event.tags.iter() {
              span { key: "{tag}", class: "details-tag", "{tag}" }
            }
          }
        }
      }
      div {
        class: "details-layout",
        div {
          class: "details-card info",
          h2 { "Event Details" }
          div {
            class: "details-facts",
            div {
              class: "details-fact",
              span { class: "details-fact-icon", "📅" }
              div {
                p { class: "details-fact-label", "Date & Time" }
                p { class: "details-fact-value", "{long_date} at {event.time}" }
              }
            }
            div {
              class: "details-fact",
              span { class: "details-fact-icon", "📍" }
              div {
                p { class: "details-fact-label", "Venue" }
                p { class: "details-fact-value", "{event.venue}, {event.city}" }
              }
            }
            div {
              class: "details-fact",
              span { class: "details-fact-icon", "👥" }
              div {
                p { class: "details-fact-label", "Attendees" }
                p { class: "details-fact-value", "{event.attendees} interested" }
              }
            }
            div {
              class: "details-fact",
              span { class: "details-fact-icon", "⭐" }
              div {
                p { class: "details-fact-label", "Rating" }
                p { class: "details-fact-value", "{event.rating} / 5.0" }
              }
            }
          }
          div {
            class: "details-about",
            h3 { "About This Event" }
            p { "{event.description}" }
            p { class: "details-organizer", "Organized by {event.organizer}" }
          }
        }
        div {
          class: "details-card booking",
          h3 { "🎟 Select Tickets" }
          div {
            class: "tier-list",
            for tier in tiers.iter() {
              {
                let tier_id = tier.id.clone();
                let price_label = format!("{}{}", event.currency, format_inr(tier.price));
                rsx! {
                  div {
                    key: "{tier.id}",
                    class: if selected_tier() == tier.id { "tier-option selected" } else { "tier-option" },
                    onclick: move |_evt| {
                      selected_tier.set(tier_id.clone());
                      quantity.set(1);
                    },
                    div {
                      class: "tier-option-head",
                      div {
                        h4 { "{tier.name}" }
                        p { class: "tier-price", "{price_label}" }
                      }
                      if selected_tier() == tier.id {
                        span { class: "tier-check", "✔" }
                      }
                    }
                    ul {
                      class: "tier-benefits",
                      for benefit in tier.benefits.iter() {
                        li { key: "{benefit}", "{benefit}" }
                      }
                    }
                    p { class: "tier-availability", "{tier.available} of {tier.total} left" }
                  }
                }
              }
            }
          }
          div {
            class: "quantity-row",
            label { "Quantity" }
            div {
              class: "quantity-stepper",
              button {
                onclick: move |_evt| quantity.set(quantity().saturating_sub(1).max(1)),
                "−"
              }
              span { class: "quantity-value", "{quantity}" }
              button {
                onclick: move |_evt| quantity.set((quantity() + 1).min(max_quantity)),
                "+"
              }
            }
          }
          div {
            class: "booking-totals",
            div { class: "summary-line", span { "Subtotal" } span { "{subtotal_label}" } }
            div { class: "summary-line", span { "Service Fee" } span { "{fee_label}" } }
            div {
              class: "summary-line total",
              span { "Total" }
              span { "{total_label}" }
            }
          }
          button {
            class: "button button-primary book-button",
            onclick: on_book,
            "🛒 Book Tickets"
          }
        }
      }
    }
  }
}
