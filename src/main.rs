//! Contact Assistant
//!
//! 標準入力からコマンドを読み取る対話型アドレス帳

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use anyhow::Result;
use clap::Parser;
use std::io;

use contact_assistant::adapter::clock::{FixedClock, SystemClock};
use contact_assistant::adapter::config::Config;
use contact_assistant::adapter::repositories::in_memory_contact_repository::InMemoryContactRepository;
use contact_assistant::domain::services::clock::Clock;
use contact_assistant::driver::{Args, AssistantWorkflow};

#[cfg_attr(coverage_nightly, coverage(off))]
fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    // Load configuration
    let config = Config::load_or_default(&args.config)?;

    let clock: Box<dyn Clock> = match args.today {
        Some(date) => Box::new(FixedClock::new(date)),
        None => Box::new(SystemClock),
    };

    // Create workflow with injected dependencies
    let mut workflow = AssistantWorkflow::new(config, InMemoryContactRepository::new(), clock);

    workflow.run(io::stdin().lock(), io::stdout().lock())
}
