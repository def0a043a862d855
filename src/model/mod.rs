pub mod checklist;
pub mod denial;
pub mod selection;
