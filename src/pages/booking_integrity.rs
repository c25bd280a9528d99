use dioxus::prelude::*;

use crate::utils::mock_data::{generate_mock_bookings, Booking, BookingFlag};

fn flag_details(flag: BookingFlag) -> (&'static str, &'static str) {
  match flag {
    BookingFlag::PotentialDuplicate => ("flag-pill duplicate", "Similar booking by same user in short time."),
    BookingFlag::HighVolume => ("flag-pill high-volume", "Unusually high number of tickets."),
    BookingFlag::IrregularTime => ("flag-pill irregular-time", "Booking made at an odd hour (e.g., 2-5 AM)."),
  }
}

#[component]
pub fn BookingIntegrity() -> Element {
  static CSS: Asset = asset!("/assets/dashboard.css");
  let bookings: Signal<Vec<Booking>> = use_signal(|| generate_mock_bookings(50));

  let flagged: Vec<Booking> = bookings().iter().filter(|b| b.flag.is_some()).cloned().collect();
  let flagged_count = flagged.len();

  rsx! {
    document::Stylesheet { href: CSS }
    div {
      class: "dashboard-page",
      header {
        class: "dashboard-header",
        div {
          h1 { "🛡 Booking Integrity" }
          p { "AI-powered detection of suspicious booking activities." }
        }
      }
      div {
        class: "dashboard-card",
        h2 { "Flagged Bookings ({flagged_count})" }
        p {
          class: "dashboard-card-subtitle",
          "The following bookings have been automatically flagged for review based on predictive modeling."
        }
        div {
          class: "table-wrap",
          table {
            class: "integrity-table",
            thead {
              tr {
                th { scope: "col", "Booking ID" }
                th { scope: "col", "User" }
                th { scope: "col", "Event" }
                th { scope: "col", "Flag Reason" }
                th { scope: "col", "Actions" }
              }
            }
            tbody {
              for booking in flagged {
                tr {
                  key: "{booking.id}",
                  td { class: "mono", "{booking.id}" }
                  td { "{booking.user_name}" }
                  td { class: "truncate", "{booking.event_title}" }
                  td {
                    if let Some(flag) = booking.flag {
                      span {
                        class: flag_details(flag).0,
                        title: flag_details(flag).1,
                        "⚠ {flag}"
                      }
                    }
                  }
                  td {
                    div {
                      class: "integrity-actions",
                      button { class: "button action-approve", "Approve" }
                      button { class: "button action-reject", "Reject" }
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
