//! The four workflow operations: plan, generate, run, feedback.
//!
//! Every operation returns its console report as a string so the tools layer
//! (and the reflection loop) can inspect what was printed. Client and runner
//! failures are rendered as diagnostics here and never propagate further;
//! the process exit code stays 0 for anything but CLI usage errors.

use std::fs;
use std::path::PathBuf;

use crate::error::Error;
use crate::extract::extract_code;
use crate::llm::prompt;
use crate::llm::Completion;
use crate::runner;

pub struct Workflow<C: Completion> {
    client: C,
    output_file: PathBuf,
}

impl<C: Completion> Workflow<C> {
    pub fn new(client: C, output_file: PathBuf) -> Self {
        Self {
            client,
            output_file,
        }
    }

    /// Fetches a test plan and prints it. No file writes.
    pub fn plan(&self) -> String {
        println!("\n----- Fetching a Test Plan from the LLM -----\n");

        let report = match self.client.complete(&prompt::plan_prompt()) {
            Ok(text) => text,
            Err(e) => e.to_string(),
        };

        println!("{report}");
        println!("\n----- End of Test Plan -----\n");
        report
    }

    /// Requests test code, extracts the first code block, and overwrites the
    /// output file. On any client error nothing is written, so a previously
    /// generated file survives intact.
    pub fn generate(&self) -> String {
        println!("\n----- Requesting Test Code from the LLM -----\n");

        let raw = match self.client.complete(&prompt::generation_prompt()) {
            Ok(text) => text,
            Err(e) => {
                let report = format!("{e}\n\nGeneration aborted.");
                println!("{report}");
                return report;
            }
        };

        let code = extract_code(&raw);

        match fs::write(&self.output_file, &code) {
            Ok(()) => {
                let report = format!(
                    "Successfully generated test code in '{}'",
                    self.output_file.display()
                );
                println!("{report}");
                println!("\n----- You may now run the tests with: testwright run -----\n");
                report
            }
            Err(source) => {
                let report = Error::Write {
                    path: self.output_file.clone(),
                    source,
                }
                .to_string();
                println!("{report}");
                report
            }
        }
    }

    /// Runs pytest against the output file and prints a pass/fail summary.
    /// The report carries the captured test output followed by the summary,
    /// which is what the reflection loop classifies on.
    pub fn run(&self) -> String {
        println!("\n----- Running the generated tests with pytest -----\n");

        let outcome = match runner::run_tests(&self.output_file) {
            Ok(o) => o,
            Err(e) => {
                let report = e.to_string();
                println!("{report}");
                return report;
            }
        };

        let summary = if outcome.passed() {
            "All tests passed successfully!".to_string()
        } else {
            format!(
                "Some tests failed with exit code {}. See above for details.",
                outcome.status
            )
        };

        println!("{}", outcome.output);
        println!("\n{summary}");

        format!("{}\n{summary}", outcome.output)
    }

    /// Sends user feedback to the LLM and prints the raw response. Never
    /// writes the output file; regeneration is a separate, explicit step.
    pub fn feedback(&self, user_feedback: &str) -> String {
        println!("\n----- Processing feedback with LLM -----\n");

        let report = match self.client.complete(&prompt::feedback_prompt(user_feedback)) {
            Ok(text) => text,
            Err(e) => e.to_string(),
        };

        println!("{report}");
        println!("\n----- End of Feedback Response -----\n");
        report
    }
}
