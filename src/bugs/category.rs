use serde::{Deserialize, Serialize};

/// Program representation a bug category operates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Representation {
    Tree,
    Actions,
}

/// Identifier selecting which mutation strategy to apply.
///
/// The set is closed: adding a category means adding a variant here and a
/// dispatch arm, both of which the compiler checks exhaustively. Wire
/// identifiers are the snake_case strings curriculum definitions use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BugCategory {
    /// Two statements exchanged in the main program.
    SequenceError,
    /// One statement removed from a chain.
    MissingBlock,
    /// A loop iterating the wrong number of times.
    IncorrectLoopCount,
    /// A turn going the wrong way.
    IncorrectParameter,
    /// A cancelling pair of actions bloating the program.
    Optimization,
    /// Procedure calls out of order; reuses the statement-swap mutation.
    IncorrectFunctionCallOrder,
}

impl BugCategory {
    pub const ALL: [BugCategory; 6] = [
        BugCategory::SequenceError,
        BugCategory::MissingBlock,
        BugCategory::IncorrectLoopCount,
        BugCategory::IncorrectParameter,
        BugCategory::Optimization,
        BugCategory::IncorrectFunctionCallOrder,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BugCategory::SequenceError => "sequence_error",
            BugCategory::MissingBlock => "missing_block",
            BugCategory::IncorrectLoopCount => "incorrect_loop_count",
            BugCategory::IncorrectParameter => "incorrect_parameter",
            BugCategory::Optimization => "optimization",
            BugCategory::IncorrectFunctionCallOrder => "incorrect_function_call_order",
        }
    }

    /// Resolve a wire identifier; `None` for unrecognized categories.
    pub fn parse(identifier: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|category| category.as_str() == identifier)
    }

    pub fn representation(&self) -> Representation {
        match self {
            BugCategory::Optimization => Representation::Actions,
            _ => Representation::Tree,
        }
    }
}
