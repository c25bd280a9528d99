use dioxus::prelude::*;

use crate::components::event_card::EventCard;
use crate::utils::mock_data::{generate_mock_events, Event, EventCategory};

#[derive(Debug, Clone, Copy, PartialEq)]
enum SortBy {
  Date,
  PriceLow,
  PriceHigh,
  Rating,
  Popularity,
}

impl SortBy {
  fn from_value(value: &str) -> SortBy {
    match value {
      "price-low" => SortBy::PriceLow,
      "price-high" => SortBy::PriceHigh,
      "rating" => SortBy::Rating,
      "popularity" => SortBy::Popularity,
      _ => SortBy::Date,
    }
  }
}

fn apply_sort(events: &mut [Event], sort_by: SortBy) {
  match sort_by {
    SortBy::Date => events.sort_by(|a, b| a.date.cmp(&b.date)),
    SortBy::PriceLow => events.sort_by(|a, b| a.price_min.cmp(&b.price_min)),
    SortBy::PriceHigh => events.sort_by(|a, b| b.price_min.cmp(&a.price_min)),
    SortBy::Rating => events.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
    SortBy::Popularity => events.sort_by(|a, b| b.attendees.cmp(&a.attendees)),
  }
}

/// `/categories` shows the same catalogue with no preselected filter.
#[component]
pub fn Categories() -> Element {
  rsx! {
    Events { search: String::new(), category: String::new() }
  }
}

#[component]
pub fn Events(search: String, category: String) -> Element {
  static CSS: Asset = asset!("/assets/events.css");
  let events: Signal<Vec<Event>> = use_signal(|| generate_mock_events(24));
  let mut selected_category = use_signal(|| if category.is_empty() { "All".to_string() } else { category.clone() });
  let mut sort_by = use_signal(|| SortBy::Date);
  let mut show_filters = use_signal(|| false);

  let mut filtered: Vec<Event> = events()
    .iter()
    .filter(|event| {
      selected_category() == "All" || event.category.to_string() == selected_category()
    })
    .filter(|event| {
      if search.is_empty() {
        return true;
      }
      let needle = search.to_lowercase();
      event.title.to_lowercase().contains(&needle) || event.description.to_lowercase().contains(&needle)
    })
    .cloned()
    .collect();
  apply_sort(&mut filtered, sort_by());

  let shown = filtered.len();
  let categories: Vec<String> = std::iter::once("All".to_string())
    .chain(EventCategory::ALL.iter().map(|c| c.to_string()))
    .collect();

  rsx! {
    document::Stylesheet { href: CSS }
    div {
      class: "events-page",
      header {
        class: "events-header",
        h1 { "Discover Events" }
        p { "Find your next amazing experience" }
      }
      div {
        class: "events-layout",
        aside {
          class: if show_filters() { "events-sidebar open" } else { "events-sidebar" },
          div {
            class: "filter-card",
            h3 { "Categories" }
            div {
              class: "filter-options",
              for name in categories {
                {
                  let value = name.clone();
                  rsx! {
                    button {
                      key: "{name}",
                      class: if selected_category() == name { "filter-option active" } else { "filter-option" },
                      onclick: move |_evt| selected_category.set(value.clone()),
                      "{name}"
                    }
                  }
                }
              }
            }
          }
          div {
            class: "filter-card",
            h3 { "Sort By" }
            select {
              class: "sort-select",
              onchange: move |evt| sort_by.set(SortBy::from_value(&evt.value())),
              option { value: "date", "Date" }
              option { value: "price-low", "Price: Low to High" }
              option { value: "price-high", "Price: High to Low" }
              option { value: "rating", "Rating" }
              option { value: "popularity", "Popularity" }
            }
          }
        }
        div {
          class: "events-results",
          div {
            class: "events-results-bar",
            p {
              "Showing "
              span { class: "results-count", "{shown}" }
              " events"
            }
            button {
              class: "button filter-toggle",
              onclick: move |_evt| show_filters.set(!show_filters()),
              "Filters"
            }
          }
          if shown > 0 {
            div {
              class: "event-grid cols-3",
              for (index, event) in filtered.into_iter().enumerate() {
                EventCard { key: "{event.id}", event, index }
              }
            }
          } else {
            div {
              class: "events-empty",
              p { "No events found matching your criteria" }
            }
          }
        }
      }
    }
  }
}
