use super::trace::{AcceptTrace, Collapse, RolledGroup, Trace};
use crate::common::{Int, UInt};

/// Renders a [Trace] as text, one line per step.
pub trait Stringify {
    fn stringify<A: AcceptTrace>(&mut self, a: &A) -> String {
        a.accept(self)
    }

    fn str_trace(&mut self, trace: &Trace) -> String {
        trace
            .steps
            .iter()
            .map(|step| self.stringify(step))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn str_rolled(&mut self, group: &RolledGroup) -> String {
        let the_dice = group
            .rolls
            .iter()
            .map(|&x| self.str_die(x, group.sides.get()))
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "{}d{} ({}) = {}",
            group.count,
            group.sides,
            the_dice,
            self.str_result(group.subtotal)
        )
    }

    fn str_collapse(&mut self, c: &Collapse) -> String {
        format!("{} {} {} = {}", c.left, c.op, c.right, self.str_result(c.result))
    }

    fn str_die(&mut self, value: UInt, _sides: UInt) -> String {
        value.to_string()
    }

    fn str_result(&mut self, value: Int) -> String {
        value.to_string()
    }
}

#[derive(Default, Debug)]
pub struct SimpleStringifier;

impl SimpleStringifier {
    pub fn new() -> Self {
        Self
    }
}

impl Stringify for SimpleStringifier {}

/// Highlights natural ones and maximum rolls in bold and results as code.
#[derive(Default, Debug)]
pub struct MarkdownStringifier;

impl MarkdownStringifier {
    pub fn new() -> Self {
        Self
    }
}

impl Stringify for MarkdownStringifier {
    fn str_die(&mut self, value: UInt, sides: UInt) -> String {
        if value == 1 || value == sides {
            format!("**{}**", value)
        } else {
            value.to_string()
        }
    }

    fn str_result(&mut self, value: Int) -> String {
        format!("`{}`", value)
    }
}
