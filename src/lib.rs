//! # Example
//! ```no_run
//!# use bubblepick::{Pager, Renderer, Simulator};
//!let simulator = Simulator::builder().build()?;
//!let pager = Pager::new(vec!["Chess".to_string(), "Hiking".to_string()]);
//!let renderer = Renderer::new(simulator);
//!renderer.create_window(pager)?;
//!# Ok::<(), bubblepick::BubbleError>(())
//! ```
//!
//! Headless use drives [`Simulator::step`] directly and feeds pointer input
//! through [`Simulator::click`] and [`Simulator::pointer_move`] between steps.

pub mod bubble_set;
pub mod canvas;
pub mod collision;
pub mod error;
pub mod pager;
pub mod properties;
pub mod renderer;
pub mod scheduler;
pub mod selection;
pub mod simulator;
pub mod text;

pub use error::BubbleError;
pub use pager::Pager;
pub use properties::Bubble;
pub use renderer::Renderer;
pub use simulator::{IntegrationModel, Simulator, SimulatorBuilder};
