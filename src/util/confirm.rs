use std::io::Write;

/// Blocking yes/no decision taken by the operator before any write happens.
/// Injected into the pipeline so tests can script the answer.
pub trait ConfirmationGate {
    fn confirm(&mut self, prompt: &str) -> bool;
}

/// Terminal prompt. Anything but "yes" (case-insensitive) is a refusal.
pub struct StdinConfirmation;

impl ConfirmationGate for StdinConfirmation {
    fn confirm(&mut self, prompt: &str) -> bool {
        print!("{}", prompt);
        if std::io::stdout().flush().is_err() {
            return false;
        }

        let mut answer = String::new();
        if std::io::stdin().read_line(&mut answer).is_err() {
            return false;
        }

        answer.trim().eq_ignore_ascii_case("yes")
    }
}
