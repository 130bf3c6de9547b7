use bubblepick::{BubbleError, Pager, Renderer, Simulator};

const HOBBIES: [&str; 44] = [
    "Reading",
    "Hiking",
    "Chess",
    "Board games",
    "Photography",
    "Cooking",
    "Baking",
    "Gardening",
    "Painting",
    "Drawing",
    "Calligraphy",
    "Knitting",
    "Pottery",
    "Woodworking",
    "Rock climbing",
    "Cycling",
    "Running",
    "Swimming",
    "Yoga",
    "Dancing",
    "Singing",
    "Playing guitar",
    "Piano",
    "Astronomy",
    "Bird watching",
    "Fishing",
    "Camping",
    "Traveling",
    "Learning languages",
    "Writing",
    "Blogging",
    "Podcasts",
    "Video games",
    "Programming",
    "Robotics",
    "3D printing",
    "Origami",
    "Puzzles",
    "Skateboarding",
    "Surfing",
    "Skiing",
    "Martial arts",
    "Volunteering",
    "Meditation",
];

fn main() -> Result<(), BubbleError> {
    let mut simulator = Simulator::builder().bounds(800.0, 600.0).build()?;
    simulator.set_on_select(|selected| println!("Selected: {}", selected.join(", ")));

    let pager = Pager::new(HOBBIES.iter().map(|h| h.to_string()).collect());

    let renderer = Renderer::new(simulator);
    renderer.create_window(pager)
}
