/// What happened to a single emit call.
///
/// `Fatal` is a request to terminate the process. The logger never exits on
/// its own; the caller's boundary (see `app::exit_on_fatal`) does.
#[must_use = "a Fatal emission must be turned into a process exit"]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emission {
    /// Below the threshold. Nothing was built, locked or written.
    Filtered,
    /// The line was handed to the sink. Sink errors are not reported here.
    Written,
    /// A fatal line was handed to the sink; the process must now exit.
    Fatal,
}

impl Emission {
    pub fn is_fatal(self) -> bool {
        matches!(self, Emission::Fatal)
    }

    pub fn was_written(self) -> bool {
        !matches!(self, Emission::Filtered)
    }
}
