use std::collections::{BTreeMap, HashSet};

use chrono::NaiveDate;
use dioxus::prelude::*;
use rust_decimal::Decimal;

use crate::components::charts::{use_echarts_loader, SalesTrendChart};
use crate::utils::format::format_inr;
use crate::utils::mock_data::{generate_mock_bookings, generate_mock_events, Booking, Event};

#[component]
pub fn OrganizerDashboard() -> Element {
  static CSS: Asset = asset!("/assets/dashboard.css");
  let bookings: Signal<Vec<Booking>> = use_signal(|| generate_mock_bookings(100));
  let events: Signal<Vec<Event>> = use_signal(|| generate_mock_events(10));
  let mut selected_event_id =
    use_signal(|| events().first().map(|e| e.id.clone()).unwrap_or_default());
  let charts_ready = use_echarts_loader();

  let filtered: Vec<Booking> = bookings()
    .iter()
    .filter(|b| b.event_id == selected_event_id())
    .cloned()
    .collect();
  let total_revenue: Decimal = filtered.iter().map(|b| b.total_price).sum();
  let tickets_sold: u32 = filtered.iter().map(|b| b.quantity).sum();
  let unique_attendees = filtered
    .iter()
    .map(|b| b.user_id.as_str())
    .collect::<HashSet<_>>()
    .len();

  // tickets per day, oldest first, for the trend chart
  let sales_points: Memo<Vec<(String, u32)>> = use_memo(move || {
    let mut per_day: BTreeMap<NaiveDate, u32> = BTreeMap::new();
    for booking in bookings().iter().filter(|b| b.event_id == selected_event_id()) {
      *per_day.entry(booking.booking_date.date_naive()).or_insert(0) += booking.quantity;
    }
    per_day
      .into_iter()
      .map(|(day, sold)| (day.format("%d %b").to_string(), sold))
      .collect()
  });

  let recent: Vec<Booking> = filtered.iter().take(10).cloned().collect();

  rsx! {
    document::Stylesheet { href: CSS }
    div {
      class: "dashboard-page",
      header {
        class: "dashboard-header",
        div {
          h1 { "Organizer Dashboard" }
          p { "Sales and audience insight for your events" }
        }
        select {
          class: "sort-select event-select",
          onchange: move |evt| selected_event_id.set(evt.value()),
          for event in events().iter() {
            option {
              key: "{event.id}",
              value: "{event.id}",
              selected: event.id == selected_event_id(),
              "{event.title}"
            }
          }
        }
      }
      div {
        class: "metric-grid",
        MetricCard {
          title: "Total Revenue",
          value: format!("₹{}", format_inr(total_revenue)),
          icon: "💰",
          change: "+5.4%",
          increase: true,
        }
        MetricCard {
          title: "Tickets Sold",
          value: tickets_sold.to_string(),
          icon: "🎟",
          change: "+8.2%",
          increase: true,
        }
        MetricCard {
          title: "Unique Attendees",
          value: unique_attendees.to_string(),
          icon: "👥",
          change: "-1.1%",
          increase: false,
        }
      }
      div {
        class: "dashboard-columns",
        div {
          class: "dashboard-card wide",
          h2 { "📊 Sales Trend" }
          if charts_ready() {
            SalesTrendChart { points: sales_points }
          } else {
            div { class: "chart-placeholder", "Loading chart..." }
          }
        }
        div {
          class: "dashboard-card",
          h2 { "Recent Bookings" }
          div {
            class: "recent-bookings",
            for booking in recent {
              {
                let amount_label = format!("+ ₹{}", format_inr(booking.total_price));
                let time_label = booking.booking_date.format("%d %b, %I:%M %p").to_string();
                let qty_label = format!("{} tickets • {}", booking.quantity, booking.status);
                rsx! {
                  div {
                    key: "{booking.id}",
                    class: "recent-booking-row",
                    div {
                      p { class: "recent-booking-name", "{booking.user_name}" }
                      p { class: "recent-booking-qty", "{qty_label}" }
                    }
                    div {
                      class: "recent-booking-right",
                      p { class: "recent-booking-amount", "{amount_label}" }
                      p { class: "recent-booking-time", "{time_label}" }
                    }
                  }
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
fn MetricCard(title: &'static str, value: String, icon: &'static str, change: &'static str, increase: bool) -> Element {
  rsx! {
    div {
      class: "metric-card",
      div {
        class: "metric-card-top",
        div {
          p { class: "metric-title", "{title}" }
          p { class: "metric-value", "{value}" }
        }
        span { class: "metric-icon", "{icon}" }
      }
      p {
        class: if increase { "metric-change up" } else { "metric-change down" },
        "{change} vs last month"
      }
    }
  }
}
