mod notifier;

pub use notifier::{INotifier, SimulatedEmailNotifier};
