use crate::modules::events::core::event::{Event, EventDetails, SubEvent};

fn sub_event(name: &str, description: &str, emoji: &str) -> SubEvent {
    SubEvent {
        name: name.into(),
        description: Some(description.into()),
        emoji: Some(emoji.into()),
    }
}

fn fair_event(
    id: &str,
    title: &str,
    description: &str,
    category: &str,
    icon: &str,
    sub_events: Vec<SubEvent>,
) -> Event {
    Event {
        id: id.into(),
        title: title.into(),
        description: description.into(),
        category: category.into(),
        sub_events,
        icon: Some(icon.into()),
        details: EventDetails::default(),
    }
}

pub fn cpe_fair_2024_events() -> Vec<Event> {
    vec![
        fair_event(
            "1",
            "Ball Games",
            "Test your athletic prowess in classic ball sports with fast-paced matches.",
            "Sports",
            "trophy",
            vec![
                sub_event(
                    "Basketball",
                    "Experience intense 5v5 court action where teamwork and precision drive victory.",
                    "🏀",
                ),
                sub_event(
                    "Volleyball",
                    "Spike, block, and dig your way to glory in thrilling 6v6 team battles.",
                    "🏐",
                ),
                sub_event(
                    "Badminton",
                    "Master agility and finesse in fast-paced singles and doubles matches.",
                    "🏸",
                ),
            ],
        ),
        fair_event(
            "2",
            "Academics",
            "Challenge your intellect in our comprehensive Quiz Bee covering multiple domains.",
            "Academic",
            "brain",
            vec![
                sub_event(
                    "General Info and History",
                    "Test your knowledge of world events, culture, and historical milestones.",
                    "📚",
                ),
                sub_event(
                    "General Engineering and Sciences",
                    "Dive into engineering principles, physics, and scientific breakthroughs.",
                    "⚙️",
                ),
                sub_event(
                    "Programming",
                    "Solve algorithm challenges and showcase your coding expertise.",
                    "💻",
                ),
                sub_event(
                    "Circuits and Design",
                    "Demonstrate mastery in electronics, circuits, and system design concepts.",
                    "🔌",
                ),
            ],
        ),
        fair_event(
            "3",
            "Board Games",
            "Strategic thinking meets competitive gameplay in classic board games.",
            "Strategy",
            "dices",
            vec![
                sub_event(
                    "Game of the General",
                    "Command your army in this tactical military strategy board game.",
                    "⚔️",
                ),
                sub_event(
                    "Chess",
                    "Outsmart your opponent in the ultimate game of strategy and intellect.",
                    "♟️",
                ),
                sub_event(
                    "Rubik's Cube",
                    "Race against time to solve the iconic 3D puzzle in record speed.",
                    "🧩",
                ),
                sub_event(
                    "Scrabble",
                    "Build words and maximize points in this classic vocabulary challenge.",
                    "🔤",
                ),
            ],
        ),
        fair_event(
            "4",
            "Talents",
            "Take center stage and showcase your unique talents to the world.",
            "Entertainment",
            "music",
            vec![
                sub_event(
                    "The Clash",
                    "Belt out your best performance in this solo singing showdown.",
                    "🎤",
                ),
                sub_event(
                    "Battle of the Bands",
                    "Rock the stage with your band and electrify the crowd.",
                    "🎸",
                ),
                sub_event(
                    "CpE Best Dance Crew",
                    "Showcase synchronized moves and creative choreography with your crew.",
                    "💃",
                ),
                sub_event(
                    "Mr. and Ms. CpE",
                    "Compete for the crown in this prestigious beauty and talent pageant.",
                    "👑",
                ),
            ],
        ),
        fair_event(
            "5",
            "E-sports",
            "Enter the digital arena and prove your gaming dominance in top titles.",
            "Gaming",
            "gamepad",
            vec![
                sub_event(
                    "Mobile Legends",
                    "Dominate the battlefield in this popular mobile MOBA tournament.",
                    "📱",
                ),
                sub_event(
                    "League of Legends",
                    "Prove your skills in the legendary PC MOBA championship.",
                    "🎮",
                ),
                sub_event(
                    "Valorant",
                    "Strategize and execute in this tactical 5v5 first-person shooter.",
                    "🔫",
                ),
            ],
        ),
    ]
}

pub fn conference_showcase_events() -> Vec<Event> {
    vec![
        Event {
            id: "1".into(),
            title: "Tech Innovation Summit 2025".into(),
            description: "Join industry leaders and innovators for a day of inspiring talks, networking, and hands-on workshops about the future of technology.".into(),
            category: "Technology".into(),
            sub_events: Vec::new(),
            icon: None,
            details: EventDetails {
                date: Some("2025-11-15".into()),
                time: Some("09:00 AM".into()),
                location: Some("San Francisco Convention Center".into()),
                price: Some(299.0),
                image_url: Some(
                    "https://images.unsplash.com/photo-1540575467063-178a50c2df87?w=800&q=80"
                        .into(),
                ),
                capacity: Some(500),
            },
        },
        Event {
            id: "2".into(),
            title: "Digital Marketing Masterclass".into(),
            description: "Learn cutting-edge digital marketing strategies from industry experts. Perfect for marketers looking to elevate their skills.".into(),
            category: "Marketing".into(),
            sub_events: Vec::new(),
            icon: None,
            details: EventDetails {
                date: Some("2025-11-22".into()),
                time: Some("10:00 AM".into()),
                location: Some("New York Hilton Midtown".into()),
                price: Some(199.0),
                image_url: Some(
                    "https://images.unsplash.com/photo-1557804506-669a67965ba0?w=800&q=80".into(),
                ),
                capacity: Some(200),
            },
        },
    ]
}
