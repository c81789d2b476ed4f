use card_order::{CardKey, CardOrganizer, CardSurface, StackSurface};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .init();

    let input = r#"{
        "data": [
            { "key": 1, "title": "Write draft", "description": "First pass" },
            { "key": 2, "title": "Review", "description": "Ask a colleague" },
            { "key": 3, "title": "Publish", "description": "Ship it", "owner": "ops" }
        ],
        "config": { "unique": true, "mutation": true }
    }"#;

    let mut organizer =
        CardOrganizer::from_json(input)?.on_publish(|value| println!("output = {value}"));
    let mut surface = organizer
        .cards()
        .iter()
        .fold(StackSurface::new().gap(8.0), |surface, card| {
            surface.card(card.key.clone(), 64.0)
        });

    let last = organizer
        .cards()
        .iter()
        .position(|card| card.key == CardKey::Int(3))
        .unwrap_or_default();
    let below_last = surface.midpoint_of(last).unwrap_or_default() + 1.0;

    organizer.drag_start(1)?;
    for pointer_y in [20.0, 90.0, 150.0, below_last] {
        if let Some(outcome) = organizer.on_move_tick(&mut surface, pointer_y) {
            println!(
                "moved {} from {} to {} (pointer at {pointer_y})",
                outcome.key, outcome.from, outcome.to
            );
        }
    }
    organizer.on_drop();

    println!("== final order ==");
    for (ix, card) in organizer.ordered_cards().enumerate() {
        let extra = card
            .exposed_data(organizer.config())
            .filter(|data| !data.is_empty())
            .map(|data| serde_json::Value::Object(data.clone()).to_string())
            .unwrap_or_default();
        println!("{:>2}. [{}] {} {extra}", ix + 1, card.key, card.title);
    }
    assert_eq!(surface.arrangement().len(), organizer.tracker().len());
    Ok(())
}
