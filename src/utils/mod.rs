pub mod startup;

pub use startup::Autostart;
