use dioxus::prelude::*;

use crate::components::event_card::EventCard;
use crate::utils::mock_data::{generate_mock_events, Event};

#[component]
pub fn AiRecommendations() -> Element {
  static CSS: Asset = asset!("/assets/recommendations.css");
  let events: Signal<Vec<Event>> = use_signal(|| generate_mock_events(24));

  let mut ai_picks: Vec<Event> = events().iter().filter(|e| e.is_ai_pick()).cloned().collect();
  ai_picks.sort_by(|a, b| {
    b.ai_score
      .unwrap_or(0.0)
      .total_cmp(&a.ai_score.unwrap_or(0.0))
  });
  let personalized: Vec<Event> = ai_picks.into_iter().take(6).collect();

  let mut trending: Vec<Event> = events();
  trending.sort_by(|a, b| b.attendees.cmp(&a.attendees));
  trending.truncate(6);

  rsx! {
    document::Stylesheet { href: CSS }
    div {
      class: "recommendations-page",
      header {
        class: "recommendations-hero",
        div { class: "section-badge", "✨ AI-Powered Intelligence" }
        h1 { "Your Personalized Event Feed" }
        p {
          "Our advanced AI analyses your preferences, browsing history, and trending events to curate the perfect experiences for you"
        }
      }
      div {
        class: "recommendations-body",
        div {
          class: "feature-cards",
          div {
            class: "feature-card",
            span { class: "feature-card-icon", "🧠" }
            h3 { "Smart Matching" }
            p { "AI analyses your interests and past bookings to find perfect matches" }
          }
          div {
            class: "feature-card",
            span { class: "feature-card-icon", "📈" }
            h3 { "Trend Analysis" }
            p { "Stay ahead with events gaining popularity in your area" }
          }
          div {
            class: "feature-card",
            span { class: "feature-card-icon", "⚡" }
            h3 { "Real-time Updates" }
            p { "Get instant notifications for events matching your profile" }
          }
        }
        section {
          class: "recommendations-section",
          h2 { "✨ Personalized For You" }
          div {
            class: "event-grid cols-3",
            for (index, event) in personalized.into_iter().enumerate() {
              EventCard { key: "{event.id}", event, index }
            }
          }
        }
        section {
          class: "recommendations-section",
          h2 { "🔥 Trending This Week" }
          div {
            class: "event-grid cols-3",
            for (index, event) in trending.into_iter().enumerate() {
              EventCard { key: "{event.id}", event, index }
            }
          }
        }
      }
    }
  }
}
