use dioxus::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::utils::format::format_inr;
use crate::utils::mock_data::{generate_mock_events, Event};
use crate::utils::pricing::{dynamic_price, price_factors, PriceFactors};

#[component]
pub fn DynamicPricing() -> Element {
  static CSS: Asset = asset!("/assets/dashboard.css");
  let events: Signal<Vec<Event>> = use_signal(|| generate_mock_events(6));

  let priced: Vec<(Event, PriceFactors, Decimal)> = events()
    .iter()
    .map(|event| {
      let factors = price_factors(
        event.tickets_available,
        event.total_tickets,
        event.attendees,
        event.days_until(),
      );
      let price = dynamic_price(event.price_min, &factors);
      (event.clone(), factors, price)
    })
    .collect();

  rsx! {
    document::Stylesheet { href: CSS }
    div {
      class: "dashboard-page",
      header {
        class: "dashboard-header",
        div {
          h1 { "📈 Dynamic Pricing Dashboard" }
          p { "Real-time ticket price adjustments powered by AI." }
        }
      }
      div {
        class: "pricing-grid",
        for (event, factors, price) in priced {
          {
            let delta = ((price - event.price_min) / event.price_min * dec!(100)).round_dp(1);
            let days_left = event.days_until();
            let base_label = format!("₹{}", format_inr(event.price_min));
            let dynamic_label = format!("₹{}", format_inr(price));
            rsx! {
              div {
                key: "{event.id}",
                class: "pricing-card",
                h3 { class: "truncate", "{event.title}" }
                div {
                  class: "pricing-figures",
                  div {
                    span { class: "base-price", "{base_label}" }
                    p { class: "dynamic-price", "{dynamic_label}" }
                  }
                  span {
                    class: if price > event.price_min { "price-delta up" } else { "price-delta down" },
                    if price > event.price_min { "▲ {delta}%" } else { "▼ {delta}%" }
                  }
                }
                h4 { "Pricing Factors" }
                FactorBar { label: "Demand", value: factors.demand, class: "bar-demand" }
                FactorBar { label: "Scarcity", value: factors.supply, class: "bar-scarcity" }
                FactorBar { label: "Urgency", value: factors.time, class: "bar-urgency" }
                div {
                  class: "pricing-card-footer",
                  span { "{days_left} days left" }
                  span { "{event.tickets_available} tickets left" }
                }
              }
            }
          }
        }
      }
    }
  }
}

#[component]
fn FactorBar(label: &'static str, value: f64, class: &'static str) -> Element {
  let width = (value / 1.5).min(1.0) * 100.0;

  rsx! {
    div {
      class: "factor-bar",
      div {
        class: "factor-bar-labels",
        span { "{label}" }
        span { {format!("{:.2}x", value)} }
      }
      div {
        class: "factor-bar-track",
        div {
          class: "factor-bar-fill {class}",
          style: "width: {width}%",
        }
      }
    }
  }
}
