mod template;

pub use template::{InstructionSet, refusal_message};
