mod driver;
mod engine;
mod settings;
mod tags;

pub use driver::{run_interval, SessionObserver};
pub use engine::{Mode, TimerEngine};
pub use settings::TimerSettings;
pub use tags::TagSet;
