#![allow(non_snake_case)]

use std::time::Duration;

use async_std::task;
use dioxus::prelude::*;

const BANNERS: [(&str, &str, &str); 3] = [
  (
    "Sunburn Music Festival 2025",
    "Asia's biggest electronic music festival is back",
    "https://images.unsplash.com/photo-1492684223066-81342ee5ff30?w=1600&h=600&fit=crop",
  ),
  (
    "IPL 2025 Finals",
    "Witness cricket history live at the stadium",
    "https://images.unsplash.com/photo-1540039155733-5bb30b53aa14?w=1600&h=600&fit=crop",
  ),
  (
    "International Film Festival",
    "Premieres, retrospectives and red-carpet nights",
    "https://images.unsplash.com/photo-1478720568477-152d9b164e26?w=1600&h=600&fit=crop",
  ),
];

#[component]
pub fn BannerCarousel() -> Element {
  let mut current = use_signal(|| 0usize);

  // advance every few seconds; the task dies with the component scope
  use_future(move || async move {
    loop {
      task::sleep(Duration::from_secs(5)).await;
      current.set((current() + 1) % BANNERS.len());
    }
  });

  rsx! {
    section {
      class: "banner-carousel",
      for (idx, (title, subtitle, image)) in BANNERS.into_iter().enumerate() {
        div {
          key: "banner-{idx}",
          class: if idx == current() { "banner-slide active" } else { "banner-slide" },
          style: "background-image: url('{image}')",
          div { class: "banner-overlay" }
          div {
            class: "banner-copy",
            h2 { "{title}" }
            p { "{subtitle}" }
          }
        }
      }
      div {
        class: "banner-dots",
        for idx in 0..BANNERS.len() {
          button {
            key: "banner-dot-{idx}",
            class: if idx == current() { "banner-dot active" } else { "banner-dot" },
            aria_label: format!("Go to slide {}", idx + 1),
            onclick: move |_evt| current.set(idx),
          }
        }
      }
    }
  }
}
