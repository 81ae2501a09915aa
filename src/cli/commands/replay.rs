//! Replay command - Drive the engine from a script, without a terminal
//!
//! A script is a JSON array whose elements are either UI actions
//! (`{"action": "sign_in_advance"}`) or waits (`{"wait_ms": 1000}`) that move
//! the virtual clock forward.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::load_config;
use crate::engine::{RenderCommand, UiAction, WorkflowEngine};
use crate::errors::Result;
use crate::fs::{read_json, resolve_cwd};
use crate::schemas::Destination;
use crate::store::{FileThemeStore, MemoryThemeStore, ThemeStore};

/// One element of a replay script
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReplayStep {
    /// Advance the clock, firing any timers that come due
    Wait { wait_ms: u64 },
    Action(UiAction),
}

/// An error reported by a step; the replay carries on after it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepError {
    pub code: String,
    pub message: String,
}

/// What a single step produced
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplayRecord {
    /// Zero for the initial page load, then the 1-based script position
    pub step: usize,
    /// Virtual time after the step
    pub at_ms: u64,
    pub label: String,
    pub commands: Vec<RenderCommand>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<StepError>,
}

fn action_label(action: &UiAction) -> String {
    serde_json::to_value(action)
        .ok()
        .and_then(|value| value.get("action").and_then(|name| name.as_str().map(String::from)))
        .unwrap_or_else(|| format!("{:?}", action))
}

fn elapsed_ms<S: ThemeStore>(engine: &WorkflowEngine<S>) -> u64 {
    u64::try_from(engine.now().as_millis()).unwrap_or(u64::MAX)
}

/// Load `page` and run every step against the engine
pub fn run_script<S: ThemeStore>(
    engine: &mut WorkflowEngine<S>,
    page: Destination,
    steps: &[ReplayStep],
) -> Result<Vec<ReplayRecord>> {
    let mut records = vec![ReplayRecord {
        step: 0,
        at_ms: elapsed_ms(engine),
        label: format!("load {}", page),
        commands: engine.start(page)?,
        error: None,
    }];

    for (index, step) in steps.iter().enumerate() {
        let (label, commands, error) = match step {
            ReplayStep::Wait { wait_ms } => (
                format!("wait {}ms", wait_ms),
                engine.advance_by(Duration::from_millis(*wait_ms)),
                None,
            ),
            ReplayStep::Action(action) => {
                let label = action_label(action);
                match engine.handle(action.clone()) {
                    Ok(commands) => (label, commands, None),
                    Err(e) => {
                        tracing::debug!("Step {} failed: {}", index + 1, e);
                        let error = StepError {
                            code: e.code().to_string(),
                            message: e.to_string(),
                        };
                        (label, Vec::new(), Some(error))
                    }
                }
            }
        };

        records.push(ReplayRecord {
            step: index + 1,
            at_ms: elapsed_ms(engine),
            label,
            commands,
            error,
        });
    }

    Ok(records)
}

fn print_records(records: &[ReplayRecord]) {
    for record in records {
        println!("[{:>7}ms] #{} {}", record.at_ms, record.step, record.label);
        for command in &record.commands {
            println!("    -> {}", command);
        }
        if let Some(error) = &record.error {
            println!("    !! {}: {}", error.code, error.message);
        }
    }
}

/// Replay a script file.
///
/// The theme starts from the stored preference, but toggles made by the
/// script are not written back.
pub async fn run(cwd: Option<&Path>, script: &Path, page: Destination, json: bool) -> Result<()> {
    let root = resolve_cwd(cwd);
    let config = load_config(&root)?;
    let theme = FileThemeStore::new(&root).get_preference()?;
    let steps: Vec<ReplayStep> = read_json(script)?;
    tracing::debug!("Replaying {} steps from {}", steps.len(), script.display());

    let mut engine = WorkflowEngine::new(config, MemoryThemeStore::with_theme(theme))?;
    let records = run_script(&mut engine, page, &steps)?;

    if json {
        let output = serde_json::to_string_pretty(&records)
            .map_err(|e| crate::errors::DataproveError::InvalidJson(e.to_string()))?;
        println!("{}", output);
    } else {
        print_records(&records);
    }
    Ok(())
}
