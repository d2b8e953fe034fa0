pub mod dialog;
pub mod ids;
pub mod store;

pub use dialog::{Button, ButtonStyle, Choice, Dialogs, Prompt, ScriptedDialogs};
pub use ids::{ClockIds, IdSource, SequentialIds};
pub use store::{AddOutcome, Subscription, TaskStore};
