//! Agent-facing surface: the four workflow operations as a trait.
//!
//! The reflection loop only ever talks to this trait, which keeps it
//! unit-testable with scripted doubles and leaves the door open for other
//! frontends to drive the same operations.

use crate::llm::Completion;
use crate::workflow::Workflow;

pub trait Tools {
    fn plan(&mut self) -> String;
    fn generate(&mut self) -> String;
    fn run(&mut self) -> String;
    fn feedback(&mut self, user_feedback: &str) -> String;
}

impl<C: Completion> Tools for Workflow<C> {
    fn plan(&mut self) -> String {
        Workflow::plan(self)
    }

    fn generate(&mut self) -> String {
        Workflow::generate(self)
    }

    fn run(&mut self) -> String {
        Workflow::run(self)
    }

    fn feedback(&mut self, user_feedback: &str) -> String {
        Workflow::feedback(self, user_feedback)
    }
}
