use crate::state_enum;

state_enum! {
    /// Where the current presentation stands.
    ///
    /// - `Idle`: no problem on screen.
    /// - `Presenting`: a problem is shown, answer hidden, not yet graded.
    /// - `AnswerShown`: the answer is visible, still not graded.
    /// - `Graded`: the attempt has been counted; grading is closed until the
    ///   next problem.
    pub enum Phase {
        Idle,
        Presenting,
        AnswerShown,
        Graded,
    }
}

impl Phase {
    pub const ALL: [Phase; 4] = [
        Phase::Idle,
        Phase::Presenting,
        Phase::AnswerShown,
        Phase::Graded,
    ];

    /// A problem is on screen and has not been graded yet.
    pub fn is_gradable(&self) -> bool {
        matches!(self, Phase::Presenting | Phase::AnswerShown)
    }
}
