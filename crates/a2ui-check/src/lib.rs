//! A2UI Check - command-line front end
//!
//! Subcommands map onto the workspace crates:
//! - `validate`: tree validation of one tree or a batch
//! - `variety`: variety analysis of a type sequence
//! - `check`: the merged dashboard gate, over one or many candidates
//! - `demo`: built-in variety scenarios

#![warn(unreachable_pub)]

pub mod cli;
pub mod demo;
pub mod input;

use a2ui_core::{DashboardGate, GateConfig};
use a2ui_protocol::{ComponentRegistry, ReportOptions, Value};
use a2ui_validation::TreeValidator;
use a2ui_variety::VarietyAnalyzer;
use anyhow::{Context, Result};
use cli::{Cli, Command, ValidationArgs, VarietyArgs};
use serde::Serialize;

/// Result of one command: rendered output and overall pass/fail
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Everything passed
    pub ok: bool,
    /// Text or JSON to print
    pub output: String,
}

/// Execute a parsed command line
pub fn run(cli: &Cli) -> Result<Outcome> {
    let config = match &cli.config {
        Some(path) => GateConfig::load(path)?,
        None => GateConfig::default(),
    };
    let options = if cli.summary {
        ReportOptions::summary_only()
    } else {
        ReportOptions::default()
    };
    let registry = ComponentRegistry::with_defaults();
    tracing::debug!(
        config = ?cli.config,
        policy = %config.gate.policy,
        max_depth = config.validation.max_depth,
        "configuration resolved"
    );

    match &cli.command {
        Command::Validate { file, validation } => {
            let config = apply_validation(config, validation);
            let document = input::read_json(file)?;
            let validator = TreeValidator::with_options(&registry, config.validation);
            let result = match Value::from(document) {
                Value::Array(roots) => validator.validate_all(&roots),
                root => validator.validate(&root),
            };
            render(cli.json, result.valid, &result, || result.render(&options))
        }
        Command::Variety { file, variety } => {
            let config = apply_variety(config, *variety);
            let sequence = input::type_sequence(&input::read_json(file)?)?;
            let result = VarietyAnalyzer::new(config.variety).analyze(&sequence);
            render(cli.json, result.valid, &result, || result.render(&options))
        }
        Command::Check {
            files,
            policy,
            validation,
            variety,
        } => {
            let mut config = apply_variety(apply_validation(config, validation), *variety);
            if let Some(policy) = policy {
                config.gate.policy = *policy;
            }
            let gate = DashboardGate::from_config(registry, &config);

            let mut candidates = Vec::with_capacity(files.len());
            for file in files {
                match Value::from(input::read_json(file)?) {
                    Value::Array(sections) => candidates.push(sections),
                    other => anyhow::bail!(
                        "{}: expected an array of sections, got {}",
                        file.display(),
                        other.kind_name()
                    ),
                }
            }

            let verdicts = gate.check_many(&candidates);
            let ok = verdicts.iter().all(|verdict| verdict.accepted);
            if cli.json {
                return json_outcome(ok, &verdicts);
            }
            let mut output = String::new();
            for (file, verdict) in files.iter().zip(&verdicts) {
                if files.len() > 1 {
                    output.push_str(&format!("== {} ==\n", file.display()));
                }
                output.push_str(&verdict.render(&options));
                output.push('\n');
            }
            Ok(Outcome { ok, output })
        }
        Command::Demo => run_demo(cli.json, &options),
    }
}

fn run_demo(json: bool, options: &ReportOptions) -> Result<Outcome> {
    #[derive(Serialize)]
    struct Entry<'a> {
        title: &'a str,
        expected: bool,
        result: a2ui_variety::VarietyResult,
    }

    let analyzer = VarietyAnalyzer::default();
    let entries: Vec<Entry<'_>> = demo::SCENARIOS
        .iter()
        .map(|scenario| Entry {
            title: scenario.title,
            expected: scenario.expect_valid,
            result: analyzer.analyze(&scenario.descriptors()),
        })
        .collect();
    let ok = entries.iter().all(|entry| entry.result.valid == entry.expected);

    if json {
        return json_outcome(ok, &entries);
    }
    let mut output = String::new();
    for (i, entry) in entries.iter().enumerate() {
        output.push_str(&format!("== Example {}: {} ==\n", i + 1, entry.title));
        for (position, (component_type, id)) in demo::SCENARIOS[i].sections.iter().enumerate() {
            output.push_str(&format!("  {}. {component_type:<28} (id: {id})\n", position + 1));
        }
        output.push('\n');
        output.push_str(&entry.result.render(options));
        output.push('\n');
    }
    Ok(Outcome { ok, output })
}

fn apply_validation(mut config: GateConfig, args: &ValidationArgs) -> GateConfig {
    let options = &mut config.validation;
    if let Some(max_depth) = args.max_depth {
        options.max_depth = max_depth;
    }
    if args.allow_unregistered {
        options.allow_unregistered = true;
    }
    if args.no_registration {
        options.check_registration = false;
    }
    if args.no_circular {
        options.check_circular = false;
    }
    if args.required_props {
        options.check_required_props = true;
    }
    if let Some(namespace) = &args.namespace {
        options.type_namespace = Some(namespace.clone());
    }
    config
}

fn apply_variety(mut config: GateConfig, args: VarietyArgs) -> GateConfig {
    if let Some(min_types) = args.min_types {
        config.variety.min_unique_types = min_types;
    }
    if let Some(max_run) = args.max_run {
        config.variety.max_consecutive_same_type = max_run;
    }
    config
}

fn render<T: Serialize>(
    json: bool,
    ok: bool,
    value: &T,
    text: impl FnOnce() -> String,
) -> Result<Outcome> {
    if json {
        json_outcome(ok, value)
    } else {
        Ok(Outcome { ok, output: text() })
    }
}

fn json_outcome<T: Serialize + ?Sized>(ok: bool, value: &T) -> Result<Outcome> {
    let mut output = serde_json::to_string_pretty(value).context("failed to encode JSON output")?;
    output.push('\n');
    Ok(Outcome { ok, output })
}
