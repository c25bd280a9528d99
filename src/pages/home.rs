use dioxus::prelude::*;

use crate::components::banner_carousel::BannerCarousel;
use crate::components::event_card::EventCard;
use crate::utils::mock_data::{generate_mock_events, Event, EventCategory};
use crate::Route;

const HERO_CHIP_CATEGORIES: [EventCategory; 5] = [
  EventCategory::Music,
  EventCategory::Sports,
  EventCategory::Comedy,
  EventCategory::Technology,
  EventCategory::FoodAndDrink,
];

#[component]
pub fn Home() -> Element {
  static CSS: Asset = asset!("/assets/home.css");
  let events: Signal<Vec<Event>> = use_signal(|| generate_mock_events(24));
  let nav = navigator();

  let featured: Vec<Event> = events().iter().filter(|e| e.featured).take(6).cloned().collect();
  let ai_picked: Vec<Event> = events().iter().filter(|e| e.is_ai_pick()).take(4).cloned().collect();

  rsx! {
    document::Stylesheet { href: CSS }
    div {
      class: "home-page",
      BannerCarousel {}
      section {
        class: "hero",
        div { class: "hero-badge", "✨ AI-Powered Event Discovery" }
        h1 {
          "Discover Your Next"
          br {}
          span { class: "hero-gradient", "Unforgettable Experience" }
        }
        p {
          class: "hero-subtitle",
          "Smart ticketing powered by AI. Get personalized recommendations for concerts, sports, festivals, and more."
        }
        div {
          class: "hero-chips",
          for category in HERO_CHIP_CATEGORIES {
            button {
              key: "{category}",
              class: "hero-chip",
              onclick: move |_evt| {
                nav.push(Route::Events { search: String::new(), category: category.to_string() });
              },
              "{category}"
            }
          }
        }
      }
      section {
        class: "home-section",
        div {
          class: "home-section-header",
          div { class: "section-badge", "✨ AI Recommendations" }
          h2 { "Picked Just for You" }
          p { "Our AI analyses your preferences and trending events to bring you the best experiences" }
        }
        div {
          class: "event-grid cols-4",
          for (index, event) in ai_picked.into_iter().enumerate() {
            EventCard { key: "{event.id}", event, index }
          }
        }
        div {
          class: "center",
          Link {
            class: "button button-primary",
            to: Route::AiRecommendations {},
            "View All AI Picks ✨"
          }
        }
      }
      section {
        class: "home-section",
        div {
          class: "home-section-header",
          h2 { "Featured Events" }
          p { "Hand-picked highlights happening soon" }
        }
        div {
          class: "event-grid cols-3",
          for (index, event) in featured.into_iter().enumerate() {
            EventCard { key: "{event.id}", event, index }
          }
        }
      }
      section {
        class: "home-section",
        div {
          class: "home-section-header",
          h2 { "Browse by Category" }
        }
        div {
          class: "category-grid",
          for category in EventCategory::ALL {
            button {
              key: "{category}",
              class: "category-tile",
              onclick: move |_evt| {
                nav.push(Route::Events { search: String::new(), category: category.to_string() });
              },
              span { class: "category-tile-icon", {category.icon()} }
              span { class: "category-tile-name", "{category}" }
            }
          }
        }
      }
    }
  }
}
