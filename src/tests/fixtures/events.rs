use crate::modules::events::core::event::Event;

/// The "Ball Games" event with its three sub-events, as in the fair catalog.
pub fn ball_games_event() -> Event {
    let mut event = Event::new("1", "Ball Games", "Sports")
        .with_sub_events(["Basketball", "Volleyball", "Badminton"]);
    event.icon = Some("trophy".into());
    event
}
