//! Trials comparing the solver with the reference solver, run across worker threads.

use std::thread;

use crossbeam::channel::{bounded, unbounded};

use tern_sat::{config::Config, structures::literal::CLiteral};

use crate::{engine_output, formula::Formula, random::Trial, reference::reference_output, verdict};

/// The outcome of a single trial.
pub struct Outcome {
    pub trial: Trial,
    pub formula: Formula,
    pub solver: String,
    pub reference: String,
}

impl Outcome {
    /// Whether the verdicts agree, and any model written by the solver satisfies the formula.
    pub fn agrees(&self) -> bool {
        if verdict(&self.solver) != verdict(&self.reference) {
            return false;
        }

        match model_from_output(&self.solver) {
            Some(model) => self.formula.satisfied_by(&model),
            None => true,
        }
    }
}

/// Ways in which a run of trials may fail to complete.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunError {
    /// The thread generating formulas panicked.
    GeneratorFailed,

    /// Some worker thread panicked.
    WorkerFailed,

    /// Fewer outcomes were received than formulas generated.
    MissingOutcomes { generated: usize, received: usize },
}

impl std::fmt::Display for RunError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::GeneratorFailed => write!(f, "The formula generator failed"),
            Self::WorkerFailed => write!(f, "A worker failed"),
            Self::MissingOutcomes {
                generated,
                received,
            } => write!(f, "Generated {generated} formulas, though received {received} outcomes"),
        }
    }
}

/// The literals of the `v` lines of some output, if any.
pub fn model_from_output(output: &str) -> Option<Vec<CLiteral>> {
    let mut lines = output.lines().filter(|line| line.starts_with("v ")).peekable();
    lines.peek()?;

    Some(
        lines
            .flat_map(|line| line.split_whitespace().skip(1))
            .filter_map(|token| token.parse::<CLiteral>().ok())
            .filter(|literal| *literal != 0)
            .collect(),
    )
}

/// Runs each trial from `trials` on one of `workers` threads, returning the outcomes in order of iteration.
///
/// Trials are drawn on a thread of their own.
/// The run fails if any thread panics, so a failed run is never mistaken for a shorter one.
pub fn run_trials<I>(workers: usize, trials: I) -> Result<Vec<Outcome>, RunError>
where
    I: Iterator<Item = (Trial, Formula)> + Send + 'static,
{
    let workers = workers.max(1);
    let (job_tx, job_rx) = bounded::<(Trial, Formula)>(workers * 2);
    let (outcome_tx, outcome_rx) = unbounded::<Outcome>();

    let mut handles = Vec::default();
    for _ in 0..workers {
        let job_rx = job_rx.clone();
        let outcome_tx = outcome_tx.clone();

        handles.push(thread::spawn(move || {
            let config = Config::default();
            for (trial, formula) in job_rx {
                let dimacs = formula.as_dimacs();
                let outcome = Outcome {
                    trial,
                    solver: engine_output(&dimacs, &config),
                    reference: reference_output(&formula),
                    formula,
                };
                if outcome_tx.send(outcome).is_err() {
                    break;
                }
            }
        }));
    }
    drop(job_rx);
    drop(outcome_tx);

    let generator = thread::spawn(move || {
        let mut generated = 0;
        for job in trials {
            if job_tx.send(job).is_err() {
                break;
            }
            generated += 1;
        }
        generated
    });

    let mut outcomes = outcome_rx.iter().collect::<Vec<_>>();
    outcomes.sort_by_key(|outcome| outcome.trial.iteration);

    let generator_result = generator.join();

    let mut worker_failed = false;
    for handle in handles {
        if handle.join().is_err() {
            worker_failed = true;
        }
    }

    let generated = generator_result.map_err(|_| RunError::GeneratorFailed)?;
    if worker_failed {
        return Err(RunError::WorkerFailed);
    }
    if generated != outcomes.len() {
        return Err(RunError::MissingOutcomes {
            generated,
            received: outcomes.len(),
        });
    }

    Ok(outcomes)
}
