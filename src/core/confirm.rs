/// Asks the user to approve an irreversible action.
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> bool;
}

/// Pre-approved (`--yes`).
pub struct AssumeYes;

impl Confirm for AssumeYes {
    fn confirm(&mut self, _prompt: &str) -> bool {
        true
    }
}
