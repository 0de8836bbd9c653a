pub mod composer;
pub mod strategies;
pub mod templates;

pub use composer::ResponseComposer;
pub use strategies::{Strategy, strategy_for};
