/// One stage of the fan-out plan.
///
/// Phases advance strictly build → integrate → run; [`Phase::next`] is the
/// only transition, and a phase is entered only after the previous one has
/// fully completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Build,
    Integrate,
    Run,
}

impl Phase {
    /// The phase that follows this one, if any.
    pub fn next(self) -> Option<Phase> {
        match self {
            Phase::Build => Some(Phase::Integrate),
            Phase::Integrate => Some(Phase::Run),
            Phase::Run => None,
        }
    }

    /// Banner text printed when the phase begins.
    pub fn started_banner(&self) -> &'static str {
        match self {
            Phase::Build => "Build mode started",
            Phase::Integrate => "Integration mode started.",
            Phase::Run => "Run mode started.",
        }
    }

    /// Banner text printed when the phase ends.
    pub fn finished_banner(&self) -> &'static str {
        match self {
            Phase::Build => "Build mode finished.",
            Phase::Integrate => "Integration mode finished.",
            Phase::Run => "Run mode finished.",
        }
    }
}
