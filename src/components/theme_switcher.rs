#![allow(non_snake_case)]

use dioxus::prelude::*;

use crate::utils::theme::{Theme, ThemeState};

#[component]
pub fn ThemeSwitcher() -> Element {
  let mut theme = use_context::<ThemeState>().theme;

  rsx! {
    button {
      class: "theme-toggle",
      aria_label: "Toggle theme",
      onclick: move |_evt| {
        let next = theme().toggled();
        theme.set(next);
      },
      if theme() == Theme::Light {
        // moon
        svg {
          xmlns: "http://www.w3.org/2000/svg",
          width: "20",
          height: "20",
          view_box: "0 0 24 24",
          fill: "none",
          stroke: "currentcolor",
          stroke_width: "2",
          stroke_linecap: "round",
          stroke_linejoin: "round",
          path { d: "M21 12.79A9 9 0 1 1 11.21 3 7 7 0 0 0 21 12.79z" }
        }
      } else {
        // sun
        svg {
          xmlns: "http://www.w3.org/2000/svg",
          width: "20",
          height: "20",
          view_box: "0 0 24 24",
          fill: "none",
          stroke: "currentcolor",
          stroke_width: "2",
          stroke_linecap: "round",
          stroke_linejoin: "round",
          circle { cx: "12", cy: "12", r: "5" }
          path { d: "M12 1v2M12 21v2M4.22 4.22l1.42 1.42M18.36 18.36l1.42 1.42M1 12h2M21 12h2M4.22 19.78l1.42-1.42M18.36 5.64l1.42-1.42" }
        }
      }
    }
  }
}
