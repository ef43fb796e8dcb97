mod ctx;
mod error;
pub mod reduce;
mod roller;
mod stringify;
mod trace;

use crate::common::Int;

type RResult<T> = Result<T, RollError>;

pub use ctx::{DefaultRoller, RollContext, DEFAULT_MAX_ROLLS};
pub use error::RollError;
pub use roller::Roller;
pub use stringify::{MarkdownStringifier, SimpleStringifier, Stringify};
pub use trace::{AcceptTrace, Collapse, RollTrace, RolledGroup, Step, Trace};

/// The grand total of an expression and how it was reached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Total {
    pub value: Int,
    pub trace: Trace,
}

impl Total {
    pub(crate) fn new(value: Int, trace: Trace) -> Self {
        Self { value, trace }
    }

    pub fn render<S: Stringify + Default>(&self) -> String {
        S::default().str_trace(&self.trace)
    }

    pub fn trace_text(&self) -> String {
        self.render::<SimpleStringifier>()
    }
}
