/// What a mini-game reports back to the overworld after a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Outcome {
    /// Keep ticking the scene.
    Continue,
    Quit,
    /// The scene's goal was reached.
    Win,
    /// The player died; the whole adventure starts over.
    RestartAdventure,
    /// Back to the overworld without a win.
    Main,
}

impl Outcome {
    pub(crate) fn is_finished(self) -> bool {
        self != Outcome::Continue
    }
}
