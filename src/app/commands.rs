use crate::config::toml_config::ExercisesConfig;
use crate::config::{CliConfig, Command};
use crate::core::brute_force::BruteForceAttacker;
use crate::core::calculator::{Calculation, CalculatorSession};
use crate::core::queue::CircularArrayQueue;
use crate::core::stats::SequenceStats;
use crate::core::tree::Tree;
use crate::core::{CrackOutcome, QueueSnapshot, StatsSnapshot};
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_range, validate_required_field,
};
use serde::Serialize;
use std::io::{BufRead, Write};

/// 依子命令分派到對應的練習
pub fn run<R: BufRead, W: Write>(cli: &CliConfig, input: R, out: &mut W) -> Result<()> {
    let config = cli.file_config()?;

    match &cli.command {
        Command::Crack {
            charset,
            password,
            length,
            monitor,
            json,
        } => {
            let outcome = crack(
                &config,
                CrackRequest {
                    charset: charset.as_deref(),
                    password,
                    length: *length,
                    monitor: *monitor,
                },
            )?;
            if *json {
                write_json(out, &outcome)
            } else {
                write_crack_summary(out, &outcome)
            }
        }
        Command::Calc => calc(&config, input, out).map(|_| ()),
        Command::Queue {
            capacity,
            json,
            items,
        } => {
            let snapshot = queue(&config, *capacity, items)?;
            if *json {
                write_json(out, &snapshot)
            } else {
                for item in &snapshot.elements {
                    writeln!(out, "{}", item)?;
                }
                Ok(())
            }
        }
        Command::Tree { json, values } => {
            let tree = tree(values);
            if *json {
                write_json(out, &tree)
            } else {
                write!(out, "{}", tree)?;
                Ok(())
            }
        }
        Command::Stats {
            window,
            json,
            numbers,
        } => {
            let snapshot = stats(&config, *window, numbers)?;
            if *json {
                write_json(out, &snapshot)
            } else {
                writeln!(out, "{}", snapshot.formatted)?;
                Ok(())
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CrackRequest<'a> {
    pub charset: Option<&'a str>,
    pub password: &'a str,
    pub length: Option<usize>,
    pub monitor: bool,
}

pub fn crack(config: &ExercisesConfig, request: CrackRequest<'_>) -> Result<CrackOutcome> {
    let charset = request.charset.or(config.charset());
    let charset = *validate_required_field("attacker.charset", &charset)?;
    validate_non_empty_string("charset", charset)?;

    let length = request
        .length
        .unwrap_or_else(|| request.password.chars().count());
    if let Some(max_length) = config.max_length() {
        validate_range("length", length, 0, max_length)?;
    }

    let characters: Vec<char> = charset.chars().collect();
    let mut attacker = BruteForceAttacker::new();
    attacker.init(&characters, request.password)?;

    let search_space = attacker.search_space(length);
    tracing::info!(
        "🔐 Cracking a {}-character password over {} characters ({} candidates)",
        length,
        characters.len(),
        search_space.map_or_else(|| "too many".to_string(), |s| s.to_string())
    );

    let mut monitor = SystemMonitor::new(request.monitor);
    monitor.log_stats("Before search");

    let opened = attacker.break_password(length)?;

    monitor.log_stats("After search");
    monitor.log_final_stats(attacker.attempts());

    if opened {
        tracing::info!("✅ Vault opened after {} attempts", attacker.attempts());
    } else {
        tracing::warn!("Search space exhausted after {} attempts", attacker.attempts());
    }

    Ok(CrackOutcome {
        opened,
        attempts: attacker.attempts(),
        search_space,
        password: opened.then(|| request.password.to_string()),
    })
}

pub fn calc<R: BufRead, W: Write>(
    config: &ExercisesConfig,
    input: R,
    out: &mut W,
) -> Result<Calculation> {
    let mut session = CalculatorSession::new(input, out);
    if let Some(max_precision) = config.max_precision() {
        session = session.with_max_precision(max_precision);
    }
    session.run()
}

pub fn queue(
    config: &ExercisesConfig,
    capacity: Option<usize>,
    items: &[String],
) -> Result<QueueSnapshot> {
    let capacity = capacity.unwrap_or_else(|| config.queue_capacity());
    validate_positive_number("capacity", capacity, 1)?;

    let mut queue = CircularArrayQueue::with_capacity(capacity);
    let mut rejected = Vec::new();
    for item in items {
        if !queue.enqueue(item.clone()) {
            tracing::warn!("Queue full ({}), rejected '{}'", capacity, item);
            rejected.push(item.clone());
        }
    }

    Ok(QueueSnapshot {
        capacity,
        size: queue.len(),
        elements: queue.iter().cloned().collect(),
        rejected,
    })
}

pub fn tree(values: &[i32]) -> Tree {
    if !values.windows(2).all(|w| w[0] <= w[1]) {
        tracing::warn!("Input is not sorted, in-order traversal will not match it");
    }
    let tree = Tree::from_values(values);
    tracing::debug!("Built tree with {} nodes, height {}", tree.len(), tree.height());
    tree
}

pub fn stats(
    config: &ExercisesConfig,
    window: Option<usize>,
    numbers: &[f64],
) -> Result<StatsSnapshot> {
    let window = window.unwrap_or_else(|| config.stats_window());
    validate_positive_number("window", window, 1)?;

    let mut stats = SequenceStats::with_capacity(window);
    for &number in numbers {
        stats.add_number(number);
    }
    Ok(stats.snapshot())
}

fn write_crack_summary<W: Write>(out: &mut W, outcome: &CrackOutcome) -> Result<()> {
    match &outcome.password {
        Some(password) => writeln!(
            out,
            "...click!... password '{}' found after {} attempts",
            password, outcome.attempts
        )?,
        None => writeln!(
            out,
            "password not found after {} attempts",
            outcome.attempts
        )?,
    }
    Ok(())
}

fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}
