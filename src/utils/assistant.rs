use crate::utils::mock_data::{Event, EventCategory};

pub const OPT_FIND: &str = "Find an event";
pub const OPT_FIND_ANOTHER: &str = "Find another event";
pub const OPT_TRENDING: &str = "Trending events";
pub const OPT_BOOKING_HELP: &str = "Help with booking";

const BOOKING_HELP_TEXT: &str = "For booking issues, please visit the event page and ensure you \
have selected your tickets correctly. If problems persist, contact our support team.";

#[derive(Debug, Clone, PartialEq)]
pub struct EventLink {
  pub id: String,
  pub title: String,
}

impl EventLink {
  fn from_event(event: &Event) -> Self {
    EventLink { id: event.id.clone(), title: event.title.clone() }
  }
}

/// One canned assistant turn: text, optional event links rendered beneath it,
/// and quick-reply chips. Every dispatch branch fills `options`, so the chips
/// row never disappears.
#[derive(Debug, Clone, PartialEq)]
pub struct BotReply {
  pub text: String,
  pub links: Vec<EventLink>,
  pub options: Vec<&'static str>,
}

pub fn greeting() -> BotReply {
  BotReply {
    text: "Hello! I'm the SmarTIX assistant. How can I help you today?".to_string(),
    links: Vec::new(),
    options: vec![OPT_FIND, OPT_TRENDING, OPT_BOOKING_HELP],
  }
}

/// Keyword dispatch over the user's utterance. Case-insensitive,
/// first-match-wins; the rule order matters because the quick-reply labels
/// themselves contain keywords ("Trending events" re-enters the find flow).
/// Total: every input lands in some branch.
pub fn process_message(text: &str, pool: &[Event]) -> BotReply {
  let lower = text.trim().to_lowercase();

  if lower.contains("find") || lower.contains("event") {
    return BotReply {
      text: "Great! What category are you interested in?".to_string(),
      links: Vec::new(),
      options: vec!["Music", "Sports", "Comedy", "Any"],
    };
  }

  let category_pick = match lower.as_str() {
    "music" => Some(Some(EventCategory::Music)),
    "sports" => Some(Some(EventCategory::Sports)),
    "comedy" => Some(Some(EventCategory::Comedy)),
    "any" => Some(None),
    _ => None,
  };
  if let Some(filter) = category_pick {
    let matches: Vec<&Event> = pool
      .iter()
      .filter(|event| filter.map_or(true, |category| event.category == category))
      .collect();

    return if matches.is_empty() {
      BotReply {
        text: format!("Sorry, I couldn't find any {} events right now.", lower),
        links: Vec::new(),
        options: vec![OPT_FIND, OPT_TRENDING],
      }
    } else {
      let text = match filter {
        Some(_) => format!("Here are some {} events I found:", lower),
        None => "Here are some events I found:".to_string(),
      };
      BotReply {
        text,
        links: matches.iter().take(2).map(|event| EventLink::from_event(event)).collect(),
        options: vec![OPT_FIND, OPT_TRENDING],
      }
    };
  }

  if lower.contains("trending") {
    return match pool.first() {
      Some(top) => BotReply {
        text: "Here's a top trending event:".to_string(),
        links: vec![EventLink::from_event(top)],
        options: vec![OPT_FIND_ANOTHER, OPT_BOOKING_HELP],
      },
      None => BotReply {
        text: "Sorry, nothing is trending right now.".to_string(),
        links: Vec::new(),
        options: vec![OPT_FIND, OPT_BOOKING_HELP],
      },
    };
  }

  if lower.contains("help") || lower.contains("booking") {
    return BotReply {
      text: BOOKING_HELP_TEXT.to_string(),
      links: Vec::new(),
      options: vec![OPT_FIND, OPT_TRENDING],
    };
  }

  BotReply {
    text: "I'm not sure how to help with that. Please choose an option.".to_string(),
    links: Vec::new(),
    options: vec![OPT_FIND, OPT_TRENDING, OPT_BOOKING_HELP],
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::Utc;
  use rust_decimal_macros::dec;

  fn event(id: &str, title: &str, category: EventCategory) -> Event {
    Event {
      id: id.to_string(),
      title: title.to_string(),
      description: String::new(),
      category,
      date: Utc::now(),
      time: "07:30 PM".to_string(),
      venue: "NSCI Dome".to_string(),
      city: "Mumbai".to_string(),
      country: "India".to_string(),
      image: String::new(),
      price_min: dec!(800),
      price_max: dec!(2400),
      currency: "₹",
      tickets_available: 100,
      total_tickets: 200,
      organizer: "Percept Live".to_string(),
      tags: vec!["Live"],
      rating: 4.5,
      attendees: 900,
      featured: false,
      ai_score: Some(0.9),
    }
  }

  fn pool() -> Vec<Event> {
    vec![
      event("event-1", "IPL 2025 Finals", EventCategory::Sports),
      event("event-2", "NH7 Weekender", EventCategory::Music),
      event("event-3", "Stand-Up Comedy Night", EventCategory::Comedy),
      event("event-4", "Bollywood Nights Live", EventCategory::Music),
      event("event-5", "Sunburn Music Festival 2025", EventCategory::Music),
    ]
  }

  #[test]
  fn every_input_gets_a_reply_with_options() {
    let pool = pool();
    for input in [
      "find", "EVENT", "music", "Sports", "comedy", "any", "trending",
      "help", "booking", "???", "   ", "42", "qwertyuiop",
    ] {
      let reply = process_message(input, &pool);
      assert!(!reply.text.is_empty(), "empty text for {:?}", input);
      assert!(!reply.options.is_empty(), "no options for {:?}", input);
    }
  }

  #[test]
  fn find_keyword_asks_for_a_category() {
    let reply = process_message("I want to FIND something", &pool());
    assert_eq!(reply.options, vec!["Music", "Sports", "Comedy", "Any"]);
    assert!(reply.links.is_empty());
  }

  #[test]
  fn music_filter_only_links_music_events() {
    let pool = pool();
    let reply = process_message("MuSiC", &pool);
    assert_eq!(reply.links.len(), 2);
    for link in &reply.links {
      let event = pool.iter().find(|e| e.id == link.id).expect("link points into the pool");
      assert_eq!(event.category, EventCategory::Music);
    }
    assert_eq!(reply.options, vec![OPT_FIND, OPT_TRENDING]);
  }

  #[test]
  fn any_returns_first_two_events_unfiltered() {
    let pool = pool();
    let reply = process_message("any", &pool);
    assert_eq!(reply.links.len(), 2);
    assert_eq!(reply.links[0].title, "IPL 2025 Finals");
    assert_eq!(reply.links[1].title, "NH7 Weekender");
  }

  #[test]
  fn unmatched_category_apologizes() {
    let sports_only = vec![event("event-1", "Mumbai Marathon", EventCategory::Sports)];
    let reply = process_message("comedy", &sports_only);
    assert!(reply.links.is_empty());
    assert!(reply.text.contains("couldn't find any comedy events"));
    assert_eq!(reply.options, vec![OPT_FIND, OPT_TRENDING]);
  }

  #[test]
  fn trending_links_the_top_pool_event() {
    let reply = process_message("trending", &pool());
    assert_eq!(reply.links.len(), 1);
    assert_eq!(reply.links[0].title, "IPL 2025 Finals");
    assert_eq!(reply.options, vec![OPT_FIND_ANOTHER, OPT_BOOKING_HELP]);
  }

  #[test]
  fn trending_quick_reply_reenters_the_find_flow() {
    // "Trending events" contains "event", so rule one wins over rule three
    let reply = process_message(OPT_TRENDING, &pool());
    assert_eq!(reply.options, vec!["Music", "Sports", "Comedy", "Any"]);
  }

  #[test]
  fn help_and_booking_share_the_support_reply() {
    let pool = pool();
    let help = process_message("help", &pool);
    let booking = process_message("my booking is stuck", &pool);
    assert_eq!(help.text, booking.text);
    assert_eq!(help.options, vec![OPT_FIND, OPT_TRENDING]);
  }

  #[test]
  fn unknown_input_falls_back_with_all_options() {
    let reply = process_message("what is the weather", &pool());
    assert_eq!(reply.options, vec![OPT_FIND, OPT_TRENDING, OPT_BOOKING_HELP]);
  }
}
