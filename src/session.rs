//! The interactive question-and-answer flow of the information calculator.

use std::str::FromStr;

use crate::console::Console;
use crate::information::{evaluate, DataType, InformationReport, InputMode, ProbabilityVector};
use crate::{Error, Result};

/// Events needed before an empty line may end the input loop.
pub const MIN_EVENTS: usize = 2;

const SUM_TOLERANCE: f64 = 1e-9;

/// Everything the user entered.
#[derive(Clone, Debug, PartialEq)]
pub struct Problem {
    pub name: String,
    pub mode: InputMode,
    pub probabilities: ProbabilityVector,
    pub data_type: DataType,
}

impl Problem {
    pub fn evaluate(&self) -> InformationReport {
        evaluate(&self.probabilities, self.data_type)
    }
}

enum Step<T> {
    Value(T),
    Retry,
    Finish,
}

fn next_step<T: FromStr>(line: &str, accepted: usize) -> Step<T> {
    if line.is_empty() {
        return if accepted >= MIN_EVENTS {
            Step::Finish
        } else {
            Step::Retry
        };
    }
    match line.trim().parse() {
        Ok(v) => Step::Value(v),
        Err(_) => Step::Retry,
    }
}

/// Reads values until an empty line once `MIN_EVENTS` are in. Bad values and
/// early empty lines re-prompt for the same event.
fn read_events<C: Console, T: FromStr>(console: &mut C, what: &str) -> Result<Vec<T>> {
    let mut values = Vec::new();
    loop {
        let question = format!("\t{} of event {} >> ", what, values.len() + 1);
        let Some(line) = console.prompt(&question)? else {
            return Err(Error::UnexpectedEof("event values"));
        };
        match next_step(&line, values.len()) {
            Step::Value(v) => values.push(v),
            Step::Finish => return Ok(values),
            Step::Retry if line.is_empty() => {
                console.write_line(&format!("At least {MIN_EVENTS} events are required\n"))?;
            }
            Step::Retry => {
                tracing::debug!(input = %line, "rejected non-numeric event value");
                console.write_line("That value is not numeric, try again\n")?;
            }
        }
    }
}

fn read_probabilities<C: Console>(console: &mut C, mode: InputMode) -> Result<ProbabilityVector> {
    match mode {
        InputMode::Probabilities => {
            let values = read_events(console, "Probability")?;
            let probabilities = ProbabilityVector::from_probabilities(values);
            let sum = probabilities.sum();
            if (sum - 1.0).abs() > SUM_TOLERANCE {
                tracing::warn!(sum, "probabilities do not add up to 1");
            }
            Ok(probabilities)
        }
        InputMode::Occurrences => {
            let counts = read_events::<_, i32>(console, "Occurrences")?;
            if counts.iter().map(|&c| i64::from(c)).sum::<i64>() == 0 {
                tracing::warn!("occurrences add up to zero");
            }
            Ok(ProbabilityVector::from_occurrences(&counts))
        }
    }
}

/// Runs the full prompt sequence: name, input mode, events, data type.
pub fn read_problem<C: Console>(console: &mut C) -> Result<Problem> {
    let name = console
        .prompt("Name of the data set >> ")?
        .ok_or(Error::UnexpectedEof("the data set name"))?;
    if name.is_empty() {
        return Err(Error::EmptyDatasetName);
    }

    let mode = console
        .prompt("Will you enter probabilities (P) or event occurrences (E)? >> ")?
        .ok_or(Error::UnexpectedEof("the input mode"))?
        .parse::<InputMode>()?;

    let what = match mode {
        InputMode::Probabilities => "probabilities",
        InputMode::Occurrences => "occurrences",
    };
    console.write_line(&format!(
        "Enter the {what} of the events ({name}), press [ENTER] on an empty line to finish\n"
    ))?;
    let probabilities = read_probabilities(console, mode)?;

    console.write_line("\nWhat kind of data is it?")?;
    for d in DataType::ALL {
        console.write_line(&format!("\t{}.- {}", d.key(), d))?;
    }
    let data_type = console
        .prompt("Enter the matching number >> ")?
        .ok_or(Error::UnexpectedEof("the data type"))?
        .parse::<DataType>()?;

    Ok(Problem {
        name,
        mode,
        probabilities,
        data_type,
    })
}

/// Prints the per-event table followed by both totals.
pub fn write_report<C: Console>(
    console: &mut C,
    name: &str,
    report: &InformationReport,
) -> Result<()> {
    let unit = report.data_type.unit();
    console.write_line(&format!(
        "\nResults for {name} ({}, {unit}):",
        report.data_type
    ))?;
    for (i, e) in report.events.iter().enumerate() {
        console.write_line(&format!(
            "\tevent {}: p = {:.6}, I = {:.6}, H = {:.6}",
            i + 1,
            e.probability,
            e.self_information,
            e.entropy
        ))?;
    }
    console.write_line(&format!(
        "The total mutual information is: {:.6}",
        report.total_self_information
    ))?;
    console.write_line(&format!("The total entropy is: {:.6}", report.total_entropy))
}

/// Waits for one more line; a closed input also counts.
pub fn pause<C: Console>(console: &mut C) -> Result<()> {
    console.prompt("\nPress any key to continue...")?;
    Ok(())
}

/// Reads a problem, prints its report and returns it.
pub fn run<C: Console>(console: &mut C) -> Result<InformationReport> {
    let problem = read_problem(console)?;
    tracing::info!(
        name = %problem.name,
        events = problem.probabilities.len(),
        data_type = ?problem.data_type,
        base = problem.data_type.base(),
        "evaluating data set"
    );
    let report = problem.evaluate();
    write_report(console, &problem.name, &report)?;
    pause(console)?;
    Ok(report)
}
