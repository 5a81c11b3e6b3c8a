/// Interactive yes/no confirmation, asked before destructive actions.
///
/// Any `Fn(&str) -> bool` is a confirmation, which keeps tests deterministic.
pub trait Confirm: Send + Sync {
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}
