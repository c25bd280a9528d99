#![allow(non_snake_case)]

use std::time::Duration;

use async_std::task;
use dioxus::prelude::*;
use futures_util::StreamExt;

use crate::utils::assistant::{self, BotReply};
use crate::utils::mock_data::{generate_mock_events, Event};
use crate::Route;

/// A transcript entry is either side of the conversation; rendering matches
/// exhaustively so a new variant cannot be silently dropped.
#[derive(Debug, Clone, PartialEq)]
pub enum ChatTurn {
  User { text: String },
  Bot { reply: BotReply },
}

#[component]
pub fn Chatbot() -> Element {
  let mut open = use_signal(|| false);
  let mut input = use_signal(String::new);
  let mut messages: Signal<Vec<ChatTurn>> = use_signal(Vec::new);
  let pool: Signal<Vec<Event>> = use_signal(|| generate_mock_events(5));

  // reopening always restarts the transcript from the greeting
  use_effect(move || {
    if open() {
      messages.set(vec![ChatTurn::Bot { reply: assistant::greeting() }]);
    }
  });

  // keep the transcript pinned to the newest turn
  use_effect(move || {
    let _turns = messages().len();
    document::eval(
      r#"
      var el = document.getElementById("chat-scroll");
      if (el) { el.scrollTop = el.scrollHeight; }
      "#,
    );
  });

  let dispatcher = use_coroutine(move |mut rx: UnboundedReceiver<String>| async move {
    while let Some(text) = rx.next().await {
      messages.write().push(ChatTurn::User { text: text.clone() });
      // fake typing delay before the canned reply lands
      task::sleep(Duration::from_secs(1)).await;
      let reply = assistant::process_message(&text, &pool());
      messages.write().push(ChatTurn::Bot { reply });
    }
  });

  let mut send = move |text: String| {
    if text.trim().is_empty() {
      return;
    }
    dispatcher.send(text);
    input.set(String::new());
  };

  let chips: Vec<&'static str> = match messages().last() {
    Some(ChatTurn::Bot { reply }) => reply.options.clone(),
    _ => Vec::new(),
  };

  rsx! {
    button {
      class: "chat-fab",
      aria_label: "Open assistant",
      onclick: move |_evt| open.set(!open()),
      if open() { "✕" } else { "🤖" }
    }
    if open() {
      div {
        class: "chat-panel",
        header {
          class: "chat-header",
          div { class: "chat-avatar", "✨" }
          div {
            h3 { "SmarTIX Assistant" }
            p { class: "chat-status", "● Online" }
          }
        }
        div {
          id: "chat-scroll",
          class: "chat-messages",
          for (idx, turn) in messages().iter().enumerate() {
            {match turn {
              ChatTurn::User { text } => rsx! {
                div {
                  key: "turn-{idx}",
                  class: "chat-row user",
                  div { class: "chat-bubble user", "{text}" }
                }
              },
              ChatTurn::Bot { reply } => rsx! {
                div {
                  key: "turn-{idx}",
                  class: "chat-row bot",
                  div {
                    class: "chat-bubble bot",
                    p { "{reply.text}" }
                    if !reply.links.is_empty() {
                      ul {
                        class: "chat-links",
                        for link in reply.links.iter() {
                          li {
                            key: "{link.id}",
                            Link {
                              class: "chat-link",
                              to: Route::EventDetails { id: link.id.clone() },
                              onclick: move |_evt| open.set(false),
                              "{link.title}"
                            }
                          }
                        }
                      }
                    }
                  }
                }
              },
            }}
          }
          if !chips.is_empty() {
            div {
              class: "chat-chips",
              for option in chips {
                button {
                  key: "{option}",
                  class: "chat-chip",
                  onclick: move |_evt| send(option.to_string()),
                  "{option}"
                }
              }
            }
          }
        }
        form {
          class: "chat-input-row",
          onsubmit: move |_evt| send(input()),
          input {
            r#type: "text",
            class: "chat-input",
            placeholder: "Type a message...",
            value: "{input}",
            oninput: move |evt| input.set(evt.value()),
          }
          button { r#type: "submit", class: "chat-send", "➤" }
        }
      }
    }
  }
}
