use clap::ValueEnum;

use fasim_automaton::AutomatonSpecification;
use fasim_automaton::Label;

/// The automata that can be replayed by the tool.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum DemoAutomaton {
    /// Deterministic, accepts the words with an even number of 0's.
    Dfa,
    /// Nondeterministic, accepts the words containing 11 or 101.
    Nfa,
}

impl DemoAutomaton {
    /// Returns the specification of this automaton.
    pub fn specification(self) -> AutomatonSpecification<char> {
        match self {
            DemoAutomaton::Dfa => AutomatonSpecification::new(
                ['0', '1'],
                "q0",
                ["q0"],
                [
                    ("q0", Label::Symbol('0'), "q1"),
                    ("q0", Label::Symbol('1'), "q0"),
                    ("q1", Label::Symbol('0'), "q0"),
                    ("q1", Label::Symbol('1'), "q1"),
                ],
            ),
            DemoAutomaton::Nfa => AutomatonSpecification::new(
                ['0', '1'],
                "q1",
                ["q4"],
                [
                    ("q1", Label::Symbol('0'), "q1"),
                    ("q1", Label::Symbol('1'), "q1"),
                    ("q1", Label::Symbol('1'), "q2"),
                    ("q2", Label::Symbol('0'), "q3"),
                    ("q2", Label::Epsilon, "q3"),
                    ("q3", Label::Symbol('1'), "q4"),
                    ("q4", Label::Symbol('0'), "q4"),
                    ("q4", Label::Symbol('1'), "q4"),
                ],
            ),
        }
    }
}
