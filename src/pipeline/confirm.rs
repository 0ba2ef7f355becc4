use std::io::Write;

/// Outcome of the confirmation gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Proceed,
    Abort,
}

/// Injectable yes/no gate, so the pipeline can be driven in tests without a
/// terminal attached.
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> Decision;
}

/// Only an affirmative answer proceeds; anything else — including empty
/// input — aborts.
pub fn parse_answer(answer: &str) -> Decision {
    let answer = answer.trim();
    if answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes") {
        Decision::Proceed
    } else {
        Decision::Abort
    }
}

/// Reads a single line from stdin. End-of-input aborts.
pub struct Interactive;

impl Confirm for Interactive {
    fn confirm(&mut self, prompt: &str) -> Decision {
        print!("{} [y/N] ", prompt);
        if std::io::stdout().flush().is_err() {
            return Decision::Abort;
        }
        let mut input = String::new();
        match std::io::stdin().read_line(&mut input) {
            Ok(0) | Err(_) => Decision::Abort,
            Ok(_) => parse_answer(&input),
        }
    }
}

/// Canned answer for tests.
pub struct Preset(pub Decision);

impl Confirm for Preset {
    fn confirm(&mut self, _prompt: &str) -> Decision {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_affirmative_answers_proceed() {
        for answer in ["y", "Y", "yes", "YES", "Yes", "  y  ", "yes\n"] {
            assert_eq!(parse_answer(answer), Decision::Proceed, "answer: {:?}", answer);
        }
    }

    #[test]
    fn test_everything_else_aborts() {
        for answer in ["", "n", "no", "N", "maybe", "yep", "ja", "\n"] {
            assert_eq!(parse_answer(answer), Decision::Abort, "answer: {:?}", answer);
        }
    }
}
