use std::time::Duration;

use async_std::task;
use dioxus::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use uuid::Uuid;
use web_sys::window;

use crate::utils::format::format_inr;
use crate::utils::mock_data::{Event, TicketTier};
use crate::Route;

/// Everything checkout needs from the event page. Carried through an
/// explicit context so nothing leaks into globals; absence means the user
/// deep-linked to /checkout and gets bounced home.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingDraft {
  pub event: Event,
  pub tier: TicketTier,
  pub quantity: u32,
}

#[derive(Clone, Copy)]
pub struct CheckoutState {
  pub draft: Signal<Option<BookingDraft>>,
}

const STEPS: [&str; 3] = ["Order Summary", "Payment", "Confirmation"];

#[component]
pub fn Checkout() -> Element {
  static CSS: Asset = asset!("/assets/checkout.css");
  let mut draft = use_context::<CheckoutState>().draft;
  let nav = navigator();
  let mut active_step = use_signal(|| 1usize);

  use_effect(move || {
    if draft().is_none() {
      nav.replace(Route::Home {});
    }
  });

  let Some(order) = draft() else {
    return rsx! {
      document::Stylesheet { href: CSS }
      div {
        class: "checkout-empty",
        p { "Loading checkout..." }
      }
    };
  };

  let subtotal = order.tier.price * Decimal::from(order.quantity);
  let service_fee = subtotal * dec!(0.05);
  let total = subtotal + service_fee;
  let event_date = order.event.date.format("%d %b %Y").to_string();
  let per_ticket_label = format!("{}{}", order.event.currency, format_inr(order.tier.price));
  let subtotal_label = format!("{}{}", order.event.currency, format_inr(subtotal));
  let fee_label = format!("{}{}", order.event.currency, format_inr(service_fee));
  let total_label = format!("{}{}", order.event.currency, format_inr(total));

  let on_pay = move |_evt: FormEvent| {
    active_step.set(2);
    // simulated gateway round trip; nothing typed in the form leaves the page
    spawn(async move {
      task::sleep(Duration::from_secs(2)).await;
      let reference = Uuid::new_v4();
      if let Some(w) = window() {
        let _ = w.alert_with_message(&format!(
          "Booking successful! Your reference is {}. A confirmation has been sent to your email.",
          reference
        ));
      }
      draft.set(None);
      nav.replace(Route::Home {});
    });
  };

  rsx! {
    document::Stylesheet { href: CSS }
    div {
      class: "checkout-page",
      button {
        class: "back-link",
        onclick: move |_evt| { nav.go_back(); },
        "← Back to Event"
      }
      h1 { "Checkout" }
      div {
        class: "checkout-steps",
        for (index, step) in STEPS.iter().enumerate() {
          {
            let step_number = (index + 1).to_string();
            rsx! {
              div {
                key: "{step}",
                class: if index < active_step() { "checkout-step done" } else { "checkout-step" },
                span {
                  class: "step-circle",
                  if index + 1 < active_step() { "✓" } else { "{step_number}" }
                }
                span { class: "step-label", "{step}" }
              }
            }
          }
        }
      }
      div {
        class: "checkout-layout",
        div {
          class: "checkout-card payment",
          h2 { "Payment Details" }
          form {
            onsubmit: on_pay,
            div {
              class: "form-group",
              label { class: "form-label", "Name on Card" }
              input { class: "form-input", r#type: "text", required: true, placeholder: "John Doe" }
            }
            div {
              class: "form-group",
              label { class: "form-label", "Card Number" }
              input { class: "form-input", r#type: "text", required: true, placeholder: "0000 0000 0000 0000" }
            }
            div {
              class: "form-row",
              div {
                class: "form-group",
                label { class: "form-label", "Expiry Date" }
                input { class: "form-input", r#type: "text", required: true, placeholder: "MM / YY" }
              }
              div {
                class: "form-group",
                label { class: "form-label", "CVC" }
                input { class: "form-input", r#type: "text", required: true, placeholder: "123" }
              }
            }
            button {
              r#type: "submit",
              class: "button button-primary pay-button",
              disabled: active_step() > 1,
              if active_step() > 1 {
                "Processing..."
              } else {
                "Pay {total_label}"
              }
            }
            p { class: "secure-note", "🔒 Secure payment — demo only, nothing is charged" }
          }
        }
        div {
          class: "checkout-card summary",
          h2 { "Order Summary" }
          div {
            class: "summary-event",
            img { src: "{order.event.image}", alt: "{order.event.title}" }
            div {
              h3 { "{order.event.title}" }
              p { "📅 {event_date}" }
              p { "📍 {order.event.venue}" }
            }
          }
          div {
            class: "summary-lines",
            div { class: "summary-line", span { "Ticket Type" } span { "{order.tier.name}" } }
            div { class: "summary-line", span { "Quantity" } span { "{order.quantity}" } }
            div {
              class: "summary-line",
              span { "Price per ticket" }
              span { "{per_ticket_label}" }
            }
          }
          div {
            class: "summary-lines",
            div { class: "summary-line", span { "Subtotal" } span { "{subtotal_label}" } }
            div { class: "summary-line", span { "Service Fee (5%)" } span { "{fee_label}" } }
          }
          div {
            class: "summary-total",
            span { "Total" }
            span { class: "summary-total-value", "{total_label}" }
          }
        }
      }
    }
  }
}
