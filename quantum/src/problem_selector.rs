use std::{collections::VecDeque, error::Error, io::BufRead};

use thiserror::Error;

pub type ProblemResult = Result<(), Box<dyn Error>>;

#[derive(Debug, Error)]
pub enum SelectorError {
    #[error("problem `{number}` not found in {selector}, expected one of 0..{count}")]
    NotFound {
        selector: &'static str,
        number: String,
        count: usize,
    },

    #[error("unable to read problem number: {0}")]
    Input(#[from] std::io::Error),
}

/// Gets the arguments from the command line and returns them as a VecDeque
pub fn get_args() -> VecDeque<String> {
    let mut args = std::env::args();
    // get rid of the first argument which is the program name
    args.next();

    args.collect()
}

/// Trait for selecting a problem to run
pub trait ProblemSelector {
    /// Name of the problem.
    const NAME: &'static str;

    /// Vector of all available problems to choose
    fn list() -> Vec<&'static str>;

    /// Given a problem number, run the problem from the list of problems.
    /// Remaining arguments are passed to the problem.
    fn methods(number: &str, args: &mut VecDeque<String>) -> ProblemResult;

    /// Select a problem to run preselected or from user input.
    /// The problem can be run with -1 to run all problems.
    fn select(args: &mut VecDeque<String>) -> ProblemResult {
        Self::select_from(args, std::io::stdin().lock())
    }

    /// Same as [`ProblemSelector::select`], but the prompt is answered from `input`.
    fn select_from(args: &mut VecDeque<String>, mut input: impl BufRead) -> ProblemResult {
        let number = match args.pop_front() {
            Some(arg) => arg,
            None => {
                println!();
                println!("{}, provide a problem number:", Self::NAME);
                println!("-1: run all problems");

                for (i, problem) in Self::list().iter().enumerate() {
                    println!("{}: {}", i, problem);
                }

                let mut line = String::new();
                input.read_line(&mut line).map_err(SelectorError::from)?;
                line.trim().to_string()
            }
        };

        if number == "-1" {
            select_many::<Self>();
            return Ok(());
        }

        Self::methods(&number, args)
    }
}

/// Logs the chosen problem.
pub fn announce(name: &str) {
    log::info!("Chose problem: {}", name);
}

/// Runs every problem with default arguments, failures are logged and skipped.
fn select_many<S: ProblemSelector + ?Sized>() {
    for (i, name) in S::list().iter().enumerate() {
        if let Err(err) = S::methods(&i.to_string(), &mut VecDeque::new()) {
            log::error!("Problem {} ({}) failed: {}", i, name, err);
        }
    }
}

#[macro_export]
macro_rules! problems_impl {
    ($selector:ty, $name:expr, $($problem_type:expr => $method:expr),* $(,)?) => {
        impl $crate::problem_selector::ProblemSelector for $selector {
            const NAME: &'static str = $name;

            fn list() -> Vec<&'static str> {
                vec![$($problem_type),*]
            }

            #[allow(unused_assignments)]
            fn methods(
                number: &str,
                args: &mut std::collections::VecDeque<String>,
            ) -> $crate::problem_selector::ProblemResult {
                let name_list = Self::list();

                let mut i: usize = 0;
                $(
                    if i.to_string() == number {
                        $crate::problem_selector::announce(name_list[i]);
                        return $method(args);
                    }

                    i += 1;
                )*

                Err($crate::problem_selector::SelectorError::NotFound {
                    selector: Self::NAME,
                    number: number.to_string(),
                    count: name_list.len(),
                }
                .into())
            }
        }
    };
}

#[cfg(test)]
mod test {
    use std::{cell::Cell, collections::VecDeque};

    use crate::problem_selector::{ProblemResult, ProblemSelector, SelectorError};

    thread_local! {
        static RUNS: Cell<usize> = const { Cell::new(0) };
    }

    fn count_run(_: &mut VecDeque<String>) -> ProblemResult {
        RUNS.with(|runs| runs.set(runs.get() + 1));
        Ok(())
    }

    fn echo_args(args: &mut VecDeque<String>) -> ProblemResult {
        match args.pop_front() {
            Some(arg) if arg == "6.0" => Ok(()),
            other => Err(format!("unexpected argument {other:?}").into()),
        }
    }

    fn failing(_: &mut VecDeque<String>) -> ProblemResult {
        Err("always fails".into())
    }

    struct TestProblems;

    problems_impl!(TestProblems, "test",
        "count" => count_run,
        "echo" => echo_args,
        "failing" => failing,
    );

    #[test]
    fn problem_selector() {
        assert_eq!(TestProblems::list(), vec!["count", "echo", "failing"]);

        let mut args = VecDeque::from(vec!["1".to_string(), "6.0".to_string()]);
        assert!(TestProblems::select(&mut args).is_ok());
        assert!(args.is_empty());

        assert!(TestProblems::methods("2", &mut VecDeque::new()).is_err());
    }

    #[test]
    fn unknown_problem() {
        let err = TestProblems::methods("7", &mut VecDeque::new()).unwrap_err();
        let err = err.downcast::<SelectorError>().unwrap();
        assert!(matches!(*err, SelectorError::NotFound { count: 3, .. }));
    }

    #[test]
    fn prompt_and_run_all() {
        RUNS.with(|runs| runs.set(0));
        TestProblems::select_from(&mut VecDeque::new(), "0\n".as_bytes()).unwrap();
        assert_eq!(RUNS.with(Cell::get), 1);

        RUNS.with(|runs| runs.set(0));
        TestProblems::select_from(&mut VecDeque::new(), "-1\n".as_bytes()).unwrap();
        assert_eq!(RUNS.with(Cell::get), 1);
    }
}
