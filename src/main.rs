use std::process;

use clap::error::ErrorKind;
use clap::{Parser, Subcommand};

use testwright::config::Config;
use testwright::llm::CompletionClient;
use testwright::reflect;
use testwright::workflow::Workflow;

#[derive(Parser)]
#[command(
    name = "testwright",
    version,
    about = "LLM-powered API test generation: plan, generate, run, and refine pytest suites."
)]
struct Cli {
    #[command(subcommand)]
    command: CliCommand,
}

#[derive(Subcommand)]
enum CliCommand {
    /// Ask the LLM for a test plan
    Plan,
    /// Generate pytest code and write it to generated_tests.py
    Generate,
    /// Run the generated tests with pytest
    Run,
    /// Send feedback text to the LLM and print its response
    Feedback {
        /// Feedback for the LLM, e.g. "Add a boundary test."
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// Run once; on failure, reflect and retry exactly once
    Reflect,
}

fn main() {
    // Usage problems (no command, unknown command, feedback without text)
    // exit 1; --help and --version exit 0.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            return;
        }
        Err(e) => {
            let _ = e.print();
            process::exit(1);
        }
    };

    let cfg = Config::from_env();
    let output_file = cfg.output_file.clone();

    let client = match CompletionClient::new(cfg) {
        Ok(client) => client,
        Err(e) => {
            // HTTP client construction failing is an environment problem,
            // reported like every other diagnostic.
            println!("{e}");
            return;
        }
    };

    let mut workflow = Workflow::new(client, output_file);

    match cli.command {
        CliCommand::Plan => {
            workflow.plan();
        }
        CliCommand::Generate => {
            workflow.generate();
        }
        CliCommand::Run => {
            workflow.run();
        }
        CliCommand::Feedback { text } => {
            workflow.feedback(&text.join(" "));
        }
        CliCommand::Reflect => {
            let report = reflect::safe_run(&mut workflow);
            println!("\n{report}");
        }
    }
}
