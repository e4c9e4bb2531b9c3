//! Workflow Orchestration
//!
//! 読み取り・実行・表示のループ

use anyhow::{Context, Result};
use log::{info, warn};
use std::io::{BufRead, Write};

use crate::adapter::config::Config;
use crate::domain::repositories::contact_repository::ContactRepository;
use crate::domain::services::birthday_scheduler::BirthdayScheduler;
use crate::domain::services::clock::Clock;

use super::command::Command;
use super::dispatcher::{Dispatcher, Reply};

/// Assistant Workflow
///
/// 1コマンドずつ最後まで実行してから次の入力を読む
pub struct AssistantWorkflow<R: ContactRepository> {
    config: Config,
    store: R,
    clock: Box<dyn Clock>,
    dispatcher: Dispatcher,
}

impl<R: ContactRepository> AssistantWorkflow<R> {
    /// Create a new workflow instance with dependency injection
    pub fn new(config: Config, store: R, clock: Box<dyn Clock>) -> Self {
        let scheduler = BirthdayScheduler::new(config.lookahead_days);
        info!("Birthday lookahead: {} days", scheduler.lookahead_days());
        let dispatcher = Dispatcher::new(scheduler);
        Self {
            config,
            store,
            clock,
            dispatcher,
        }
    }

    pub fn store(&self) -> &R {
        &self.store
    }

    /// Run the read-eval-print loop until `exit` or end of input
    pub fn run<I: BufRead, O: Write>(&mut self, input: I, mut output: O) -> Result<()> {
        info!("Starting assistant...");
        writeln!(output, "{}", self.config.greeting)?;

        let mut lines = input.lines();
        loop {
            write!(output, "{}", self.config.prompt)?;
            output.flush()?;

            let Some(line) = lines.next() else {
                info!("End of input");
                break;
            };
            let line = line.context("Failed to read command")?;

            let command = match Command::parse(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(e) => {
                    warn!("Rejected input {:?}: {}", line, e);
                    writeln!(output, "{}", e)?;
                    continue;
                }
            };

            match self
                .dispatcher
                .dispatch(&command, &mut self.store, self.clock.today())
            {
                Ok(Reply::Continue(text)) => writeln!(output, "{}", text)?,
                Ok(Reply::Exit(text)) => {
                    writeln!(output, "{}", text)?;
                    break;
                }
                Err(e) => {
                    warn!("Command {:?} failed: {}", command, e);
                    writeln!(output, "{}", e)?;
                }
            }
        }

        info!("Assistant stopped");
        Ok(())
    }
}
