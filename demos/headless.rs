use bubblepick::{IntegrationModel, Simulator};
use glam::Vec2;

fn main() {
    // Configure the simulator
    let mut simulator = Simulator::builder()
        .integration_model(IntegrationModel::attraction())
        .bounds(800.0, 600.0)
        .seed(42)
        .build()
        .expect("valid configuration");

    let items: Vec<String> = (0..20).map(|i| format!("Hobby {}", i)).collect();
    simulator.sync_items(&items).expect("unique labels");

    // Run 10k simulation steps
    let mut collisions = 0;
    for _ in 0..10000 {
        collisions += simulator.step().resolved;
    }

    simulator.click(simulator.bubbles().as_slice()[0].position);
    println!("Resolved collisions: {}", collisions);
    println!("Selected: {:?}", simulator.active_labels());
    println!(
        "Center of mass: {}",
        simulator.bubbles().iter().map(|b| b.position).sum::<Vec2>() / items.len() as f32
    );
}
