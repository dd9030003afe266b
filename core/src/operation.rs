//! The static table of supported operations.
//!
//! Every operation is the same generic call with a different endpoint name,
//! shorthand rule and required-field rule. Extract and Related are the two
//! exceptions to URL/text classification and say so explicitly here.

use std::fmt;
use std::str::FromStr;

/// How a bare string input becomes `Params`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shorthand {
    /// `url` when the string looks like an http(s) URL, `text` otherwise.
    Classify,
    /// Always this field, regardless of content.
    Field(&'static str),
}

/// Presence rule checked after normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Required {
    /// At least one of these fields must be present.
    AnyOf(&'static [&'static str]),
}

impl Required {
    pub fn fields(&self) -> &'static [&'static str] {
        match self {
            Required::AnyOf(fields) => fields,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Extract,
    Classify,
    Concepts,
    Entities,
    Hashtags,
    Language,
    Related,
    Sentiment,
    Summarize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperationSpec {
    pub operation: Operation,
    pub shorthand: Shorthand,
    pub required: Required,
}

const TEXT_OR_URL: Required = Required::AnyOf(&["text", "url"]);

const fn generic(operation: Operation) -> OperationSpec {
    OperationSpec {
        operation,
        shorthand: Shorthand::Classify,
        required: TEXT_OR_URL,
    }
}

/// One entry per operation, in `Operation::ALL` order.
pub static OPERATIONS: [OperationSpec; 9] = [
    OperationSpec {
        operation: Operation::Extract,
        shorthand: Shorthand::Field("url"),
        required: Required::AnyOf(&["url"]),
    },
    generic(Operation::Classify),
    generic(Operation::Concepts),
    generic(Operation::Entities),
    generic(Operation::Hashtags),
    generic(Operation::Language),
    OperationSpec {
        operation: Operation::Related,
        shorthand: Shorthand::Field("phrase"),
        required: Required::AnyOf(&["phrase"]),
    },
    generic(Operation::Sentiment),
    generic(Operation::Summarize),
];

impl Operation {
    pub const ALL: [Operation; 9] = [
        Operation::Extract,
        Operation::Classify,
        Operation::Concepts,
        Operation::Entities,
        Operation::Hashtags,
        Operation::Language,
        Operation::Related,
        Operation::Sentiment,
        Operation::Summarize,
    ];

    /// Endpoint path segment.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Extract => "extract",
            Operation::Classify => "classify",
            Operation::Concepts => "concepts",
            Operation::Entities => "entities",
            Operation::Hashtags => "hashtags",
            Operation::Language => "language",
            Operation::Related => "related",
            Operation::Sentiment => "sentiment",
            Operation::Summarize => "summarize",
        }
    }

    pub fn spec(&self) -> &'static OperationSpec {
        &OPERATIONS[*self as usize]
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownOperation(pub String);

impl fmt::Display for UnknownOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown operation: {}", self.0)
    }
}

impl std::error::Error for UnknownOperation {}

impl FromStr for Operation {
    type Err = UnknownOperation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .into_iter()
            .find(|op| op.name() == s)
            .ok_or_else(|| UnknownOperation(s.to_string()))
    }
}
