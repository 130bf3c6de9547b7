use bubblepick::{Pager, Renderer, Simulator};
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::io::Error;

#[derive(Deserialize, Debug)]
struct Catalog {
    portion: usize,
    hobbies: Vec<String>,
}

fn main() {
    let catalog = match load_catalog() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("could not read demos/hobbies.json: {}", e);
            return;
        }
    };
    println!("Hobbies: {}", catalog.hobbies.len());

    let mut simulator = Simulator::builder()
        .bounds(900.0, 700.0)
        .radius(55.0)
        .max_speed(20.0)
        .build()
        .expect("valid configuration");
    simulator.set_on_select(|selected| println!("Selected: {:?}", selected));

    let pager = Pager::with_portion(catalog.hobbies, catalog.portion);
    let renderer = Renderer::new(simulator);
    if let Err(e) = renderer.create_window(pager) {
        eprintln!("{}", e);
    }
}

fn load_catalog() -> Result<Catalog, Error> {
    let file = File::open("demos/hobbies.json")?;
    let reader = BufReader::new(file);

    let catalog: Catalog = serde_json::from_reader(reader)?;
    Ok(catalog)
}
