use std::fmt;

use chrono::{DateTime, Duration, Timelike, Utc};
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Every batch contains this many events; `generate_mock_events` slices it.
pub const EVENT_BATCH_SIZE: usize = 24;

/// Checkout and mock bookings both apply the flat 5% service fee.
pub const SERVICE_FEE_MULTIPLIER: Decimal = dec!(1.05);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventCategory {
  Music,
  Sports,
  ArtsAndTheatre,
  FoodAndDrink,
  Technology,
  Business,
  Comedy,
  Film,
}

impl EventCategory {
  pub const ALL: [EventCategory; 8] = [
    EventCategory::Music,
    EventCategory::Sports,
    EventCategory::ArtsAndTheatre,
    EventCategory::FoodAndDrink,
    EventCategory::Technology,
    EventCategory::Business,
    EventCategory::Comedy,
    EventCategory::Film,
  ];

  pub fn icon(&self) -> &'static str {
    match self {
      EventCategory::Music => "🎵",
      EventCategory::Sports => "⚽",
      EventCategory::ArtsAndTheatre => "🎭",
      EventCategory::FoodAndDrink => "🍔",
      EventCategory::Technology => "💻",
      EventCategory::Business => "💼",
      EventCategory::Comedy => "😂",
      EventCategory::Film => "🎬",
    }
  }
}

impl fmt::Display for EventCategory {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let name = match self {
      EventCategory::Music => "Music",
      EventCategory::Sports => "Sports",
      EventCategory::ArtsAndTheatre => "Arts & Theatre",
      EventCategory::FoodAndDrink => "Food & Drink",
      EventCategory::Technology => "Technology",
      EventCategory::Business => "Business",
      EventCategory::Comedy => "Comedy",
      EventCategory::Film => "Film",
    };
    write!(f, "{}", name)
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Event {
  pub id: String,
  pub title: String,
  pub description: String,
  pub category: EventCategory,
  pub date: DateTime<Utc>,
  pub time: String,
  pub venue: String,
  pub city: String,
  pub country: String,
  pub image: String,
  pub price_min: Decimal,
  pub price_max: Decimal,
  pub currency: &'static str,
  pub tickets_available: u32,
  pub total_tickets: u32,
  pub organizer: String,
  pub tags: Vec<&'static str>,
  pub rating: f64,
  pub attendees: u32,
  pub featured: bool,
  pub ai_score: Option<f64>,
}

impl Event {
  pub fn days_until(&self) -> i64 {
    (self.date - Utc::now()).num_days()
  }

  pub fn sold_percentage(&self) -> f64 {
    let sold = self.total_tickets - self.tickets_available;
    (sold as f64 / self.total_tickets as f64) * 100.0
  }

  pub fn is_ai_pick(&self) -> bool {
    self.ai_score.map_or(false, |score| score > 0.85)
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TicketTier {
  pub id: String,
  pub name: &'static str,
  pub price: Decimal,
  pub available: u32,
  pub total: u32,
  pub benefits: Vec<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingStatus {
  Confirmed,
  Pending,
  Cancelled,
}

impl fmt::Display for BookingStatus {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let name = match self {
      BookingStatus::Confirmed => "Confirmed",
      BookingStatus::Pending => "Pending",
      BookingStatus::Cancelled => "Cancelled",
    };
    write!(f, "{}", name)
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingFlag {
  PotentialDuplicate,
  HighVolume,
  IrregularTime,
}

impl fmt::Display for BookingFlag {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let name = match self {
      BookingFlag::PotentialDuplicate => "Potential Duplicate",
      BookingFlag::HighVolume => "High Volume",
      BookingFlag::IrregularTime => "Irregular Time",
    };
    write!(f, "{}", name)
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
  pub id: String,
  pub event_id: String,
  pub event_title: String,
  pub user_id: String,
  pub user_name: String,
  pub quantity: u32,
  pub total_price: Decimal,
  pub booking_date: DateTime<Utc>,
  pub status: BookingStatus,
  pub flag: Option<BookingFlag>,
}

const VENUES: [&str; 11] = [
  "Phoenix Marketcity",
  "Jawaharlal Nehru Stadium",
  "NSCI Dome",
  "DLF Cyber Hub",
  "Kingdom of Dreams",
  "Siri Fort Auditorium",
  "The Leela Palace",
  "Hyderabad International Convention Centre",
  "Palace Grounds",
  "Taj Lands End",
  "ITC Grand Bharat",
];

const CITIES: [&str; 10] = [
  "Mumbai", "Delhi", "Bangalore", "Hyderabad", "Chennai",
  "Pune", "Kolkata", "Ahmedabad", "Jaipur", "Goa",
];

const EVENT_IMAGES: [&str; 8] = [
  "https://images.unsplash.com/photo-1492684223066-81342ee5ff30?w=800&h=500&fit=crop",
  "https://images.unsplash.com/photo-1540039155733-5bb30b53aa14?w=800&h=500&fit=crop",
  "https://images.unsplash.com/photo-1501281668745-f7f57925c3b4?w=800&h=500&fit=crop",
  "https://images.unsplash.com/photo-1429962714451-bb934ecdc4ec?w=800&h=500&fit=crop",
  "https://images.unsplash.com/photo-1470229722913-7c0e2dbbafd3?w=800&h=500&fit=crop",
  "https://images.unsplash.com/photo-1459749411175-04bf5292ceea?w=800&h=500&fit=crop",
  "https://images.unsplash.com/photo-1506157786151-b8491531f063?w=800&h=500&fit=crop",
  "https://images.unsplash.com/photo-1533174072545-7a4b6ad7a6c3?w=800&h=500&fit=crop",
];

const ORGANIZERS: [&str; 8] = [
  "Percept Live",
  "OML Entertainment",
  "Wizcraft International",
  "E-Factor Experiences",
  "Seventy Event Media Group",
  "Showtime Events",
  "Fountainhead MKTG",
  "Cineyug Entertainments",
];

const USER_NAMES: [&str; 20] = [
  "Aarav Sharma", "Priya Patel", "Rohan Mehta", "Ananya Iyer", "Vikram Rao",
  "Sneha Kulkarni", "Arjun Nair", "Kavya Reddy", "Ishaan Gupta", "Meera Joshi",
  "Aditya Singh", "Diya Kapoor", "Karan Malhotra", "Nisha Verma", "Rahul Desai",
  "Tanvi Bhat", "Siddharth Menon", "Pooja Chawla", "Nikhil Jain", "Riya Saxena",
];

const DESCRIPTIONS: [&str; 4] = [
  "An unmissable live experience bringing together the best performers in the country. \
   Expect a packed lineup, immersive production and a crowd that keeps the energy high \
   from the first act to the last encore.",
  "A curated celebration for enthusiasts and newcomers alike. Interactive zones, guest \
   appearances and plenty of food options make this a full-day outing worth planning for.",
  "Now in its latest edition, this event has grown into one of the most talked-about \
   fixtures on the city calendar. Early arrival is recommended as gates get busy closer \
   to showtime.",
  "Produced by an award-winning team, the show combines world-class staging with local \
   flavour. Limited premium seating is available close to the action.",
];

const BASE_TAGS: [&str; 3] = ["Popular", "Trending", "Limited Seats"];

fn title_pool(category: EventCategory) -> [&'static str; 3] {
  match category {
    EventCategory::Music => ["Sunburn Music Festival 2025", "NH7 Weekender", "Bollywood Nights Live"],
    EventCategory::Sports => ["IPL 2025 Finals", "Mumbai Marathon", "ISL Football Championship"],
    EventCategory::ArtsAndTheatre => ["The Merchant of Venice", "Contemporary Art Exhibition", "Kathak Dance Performance"],
    EventCategory::FoodAndDrink => ["Street Food Festival", "Wine Tasting Evening", "Culinary Masterclass"],
    EventCategory::Technology => ["Tech Summit India 2025", "AI & ML Conference", "Startup Pitch Night"],
    EventCategory::Business => ["Leadership Summit", "Entrepreneur's Forum", "Business Networking Event"],
    EventCategory::Comedy => ["Stand-Up Comedy Night", "Comedy Central Live", "Improv Theatre Show"],
    EventCategory::Film => ["International Film Festival", "Bollywood Premier Night", "Documentary Screening"],
  }
}

fn category_tags(category: EventCategory) -> [&'static str; 3] {
  match category {
    EventCategory::Music => ["Live", "Concert", "Festival"],
    EventCategory::Sports => ["Championship", "Tournament", "Live"],
    EventCategory::ArtsAndTheatre => ["Performance", "Exhibition", "Cultural"],
    EventCategory::FoodAndDrink => ["Tasting", "Gourmet", "Festival"],
    EventCategory::Technology => ["Conference", "Workshop", "Networking"],
    EventCategory::Business => ["Professional", "Networking", "Summit"],
    EventCategory::Comedy => ["Stand-up", "Live Show", "Entertainment"],
    EventCategory::Film => ["Screening", "Premier", "Festival"],
  }
}

struct MockGenerator {
  rng: StdRng,
}

impl MockGenerator {
  fn new() -> Self {
    MockGenerator { rng: StdRng::from_entropy() }
  }

  fn event(&mut self, index: usize) -> Event {
    let category = *EventCategory::ALL.choose(&mut self.rng).expect("category pool is non-empty");
    let price_min = Decimal::from(self.rng.gen_range(500..=2000u32));
    let price_max = price_min + Decimal::from(self.rng.gen_range(1000..=5000u32));
    let total_tickets = self.rng.gen_range(100..=5000u32);
    let tickets_available = self.rng.gen_range(0..=total_tickets);

    let date = Utc::now()
      + Duration::days(self.rng.gen_range(1..=180))
      + Duration::hours(self.rng.gen_range(0..24))
      + Duration::minutes(15 * self.rng.gen_range(0..4));

    Event {
      id: format!("event-{}", index + 1),
      title: title_pool(category).choose(&mut self.rng).expect("title pool is non-empty").to_string(),
      description: DESCRIPTIONS.choose(&mut self.rng).expect("description pool is non-empty").to_string(),
      category,
      date,
      time: date.format("%I:%M %p").to_string(),
      venue: VENUES.choose(&mut self.rng).expect("venue pool is non-empty").to_string(),
      city: CITIES.choose(&mut self.rng).expect("city pool is non-empty").to_string(),
      country: "India".to_string(),
      image: EVENT_IMAGES.choose(&mut self.rng).expect("image pool is non-empty").to_string(),
      price_min,
      price_max,
      currency: "₹",
      tickets_available,
      total_tickets,
      organizer: ORGANIZERS.choose(&mut self.rng).expect("organizer pool is non-empty").to_string(),
      tags: self.tags(category),
      rating: self.rng.gen_range(35..=50u32) as f64 / 10.0,
      attendees: self.rng.gen_range(50..=2000),
      featured: index < 6,
      ai_score: Some(self.rng.gen_range(70..=99u32) as f64 / 100.0),
    }
  }

  fn tags(&mut self, category: EventCategory) -> Vec<&'static str> {
    let mut tags: Vec<&'static str> = Vec::with_capacity(3);
    tags.push(*BASE_TAGS.choose(&mut self.rng).expect("base tag pool is non-empty"));
    tags.extend(category_tags(category).choose_multiple(&mut self.rng, 2).copied());
    tags
  }

  fn event_batch(&mut self) -> Vec<Event> {
    (0..EVENT_BATCH_SIZE).map(|index| self.event(index)).collect()
  }

  fn booking(&mut self, index: usize, events: &[Event]) -> Booking {
    let event = events.choose(&mut self.rng).expect("event batch is non-empty");
    let quantity = self.rng.gen_range(1..=5u32);

    Booking {
      id: format!("booking-{}", index + 1),
      event_id: event.id.clone(),
      event_title: event.title.clone(),
      user_id: format!("user-{}", self.rng.gen_range(1..=25u32)),
      user_name: USER_NAMES.choose(&mut self.rng).expect("user name pool is non-empty").to_string(),
      quantity,
      total_price: event.price_min * Decimal::from(quantity) * SERVICE_FEE_MULTIPLIER,
      booking_date: Utc::now() - Duration::minutes(self.rng.gen_range(0..=30 * 24 * 60)),
      status: *[BookingStatus::Confirmed, BookingStatus::Pending, BookingStatus::Cancelled]
        .choose(&mut self.rng)
        .expect("status pool is non-empty"),
      flag: None,
    }
  }
}

/// Returns a fresh batch of events truncated to `count`. Ids are stable
/// (`event-1`..) across batches so by-id lookups work between pages, but the
/// remaining fields are re-randomized per batch.
pub fn generate_mock_events(count: usize) -> Vec<Event> {
  let mut generator = MockGenerator::new();
  let mut events = generator.event_batch();
  events.truncate(count);
  events
}

/// Three fixed tiers per event. General admission matches the event's minimum
/// price; Premium and VIP are exact 2.5x and 5x multiples of it.
pub fn generate_ticket_tiers(event_id: &str) -> Vec<TicketTier> {
  let mut generator = MockGenerator::new();
  let base_price = generator
    .event_batch()
    .into_iter()
    .find(|event| event.id == event_id)
    .map(|event| event.price_min)
    .unwrap_or(dec!(750));

  vec![
    TicketTier {
      id: format!("{}-general", event_id),
      name: "General Admission",
      price: base_price,
      available: generator.rng.gen_range(50..=200),
      total: 200,
      benefits: vec!["Entry to event", "General seating"],
    },
    TicketTier {
      id: format!("{}-premium", event_id),
      name: "Premium",
      price: base_price * dec!(2.5),
      available: generator.rng.gen_range(20..=100),
      total: 100,
      benefits: vec!["Priority entry", "Premium seating", "Complimentary refreshments"],
    },
    TicketTier {
      id: format!("{}-vip", event_id),
      name: "VIP",
      price: base_price * dec!(5),
      available: generator.rng.gen_range(5..=50),
      total: 50,
      benefits: vec!["VIP lounge access", "Meet & greet", "Exclusive merchandise", "Premium bar"],
    },
  ]
}

/// Random bookings against a fresh event batch, with a handful of hand-crafted
/// anomalous entries appended afterwards. The flags are injected, not
/// detected; the integrity dashboard only displays them.
pub fn generate_mock_bookings(count: usize) -> Vec<Booking> {
  let mut generator = MockGenerator::new();
  let events = generator.event_batch();

  let mut bookings: Vec<Booking> = (0..count).map(|index| generator.booking(index, &events)).collect();

  if let Some(first) = bookings.first().cloned() {
    let mut duplicate = first.clone();
    duplicate.id = "booking-duplicate-1".to_string();
    duplicate.flag = Some(BookingFlag::PotentialDuplicate);
    bookings.push(duplicate);

    let mut duplicate = first;
    duplicate.id = "booking-duplicate-2".to_string();
    duplicate.booking_date += Duration::seconds(1);
    duplicate.flag = Some(BookingFlag::PotentialDuplicate);
    bookings.push(duplicate);
  }

  if let Some(source) = bookings.get(5).cloned() {
    let mut high_volume = source;
    high_volume.id = "booking-high-volume".to_string();
    high_volume.quantity = 15;
    high_volume.total_price *= dec!(3);
    high_volume.flag = Some(BookingFlag::HighVolume);
    bookings.push(high_volume);
  }

  if let Some(source) = bookings.get(10).cloned() {
    let mut irregular = source;
    irregular.id = "booking-irregular-time".to_string();
    irregular.booking_date = irregular
      .booking_date
      .with_hour(3)
      .expect("3 AM is a valid hour");
    irregular.flag = Some(BookingFlag::IrregularTime);
    bookings.push(irregular);
  }

  bookings.sort_by(|a, b| b.booking_date.cmp(&a.booking_date));
  bookings
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn event_batch_respects_count_and_stable_ids() {
    let events = generate_mock_events(5);
    assert_eq!(events.len(), 5);
    for (index, event) in events.iter().enumerate() {
      assert_eq!(event.id, format!("event-{}", index + 1));
    }
  }

  #[test]
  fn event_invariants_hold_for_full_batch() {
    for event in generate_mock_events(EVENT_BATCH_SIZE) {
      assert!(event.tickets_available <= event.total_tickets);
      assert!(event.price_min < event.price_max);
      assert!((3.5..=5.0).contains(&event.rating));
      let score = event.ai_score.expect("mock events always carry an AI score");
      assert!((0.70..=0.99).contains(&score));
      assert!((50..=2000).contains(&event.attendees));
      assert!(event.days_until() >= 0);
    }
  }

  #[test]
  fn first_six_events_are_featured() {
    let events = generate_mock_events(EVENT_BATCH_SIZE);
    for (index, event) in events.iter().enumerate() {
      assert_eq!(event.featured, index < 6);
    }
  }

  #[test]
  fn tier_prices_are_exact_multiples_of_general() {
    let tiers = generate_ticket_tiers("event-3");
    assert_eq!(tiers.len(), 3);
    let general = tiers[0].price;
    assert_eq!(tiers[1].price, general * dec!(2.5));
    assert_eq!(tiers[2].price, general * dec!(5));
    for tier in &tiers {
      assert!(tier.available <= tier.total);
      assert!(!tier.benefits.is_empty());
    }
  }

  #[test]
  fn unknown_event_falls_back_to_default_base_price() {
    let tiers = generate_ticket_tiers("event-999");
    assert_eq!(tiers[0].price, dec!(750));
    assert_eq!(tiers[2].price, dec!(3750));
  }

  #[test]
  fn booking_totals_include_exact_service_fee() {
    for booking in generate_mock_bookings(50) {
      if booking.flag.is_some() {
        continue; // injected entries intentionally break the formula
      }
      // total = base price x quantity x 1.05; dividing back must recover an
      // integer base price from the generator's range
      let base = booking.total_price / dec!(1.05) / Decimal::from(booking.quantity);
      assert!(base.is_integer());
      assert!((dec!(500)..=dec!(2000)).contains(&base));
      assert_eq!(base * Decimal::from(booking.quantity) * SERVICE_FEE_MULTIPLIER, booking.total_price);
    }
  }

  #[test]
  fn flagged_entries_are_injected_and_sorted() {
    let bookings = generate_mock_bookings(50);

    let duplicates: Vec<_> = bookings
      .iter()
      .filter(|b| b.flag == Some(BookingFlag::PotentialDuplicate))
      .collect();
    assert_eq!(duplicates.len(), 2);

    let high_volume = bookings
      .iter()
      .find(|b| b.flag == Some(BookingFlag::HighVolume))
      .expect("high volume entry is injected");
    assert_eq!(high_volume.quantity, 15);

    let irregular = bookings
      .iter()
      .find(|b| b.flag == Some(BookingFlag::IrregularTime))
      .expect("irregular time entry is injected");
    assert_eq!(irregular.booking_date.hour(), 3);

    for pair in bookings.windows(2) {
      assert!(pair[0].booking_date >= pair[1].booking_date);
    }
  }
}
