//! # Transformation Errors
//!
//! Failures that end a transformation run.
//!
//! All variants except [`TransformError::Rejected`] are defects: the grammar and
//! the mapping tables have drifted apart and no sensible partial AST exists.
//! `Rejected` carries strict-policy rejection up to the run boundary, where it
//! becomes an absent root plus the already-recorded issue.

use thiserror::Error;
use zenscript_cst::{RuleKind, Span, TokenKind};

/// Errors that can occur during CST to AST transformation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransformError {
    /// A token kind outside the exhaustive table of a mapping.
    #[error("no {mapping} for token {found} at byte {}", .span.start.byte)]
    UnexpectedToken {
        mapping: &'static str,
        found: TokenKind,
        span: Span,
    },

    /// A child translated to a different shape than its parent expects.
    #[error("expected {expected}, found {found} at byte {}", .span.start.byte)]
    ShapeMismatch {
        expected: &'static str,
        found: &'static str,
        span: Span,
    },

    /// A required child is absent from the CST.
    #[error("{rule} is missing its {field} at byte {}", .span.start.byte)]
    MissingChild {
        rule: RuleKind,
        field: &'static str,
        span: Span,
    },

    /// A pass-through rule without exactly one rule child.
    #[error("{rule} should wrap exactly one rule, found {found} at byte {}", .span.start.byte)]
    MalformedWrapper {
        rule: RuleKind,
        found: usize,
        span: Span,
    },

    /// A subtree rejected under the strict policy.
    #[error("rejected {shape} at byte {}", .span.start.byte)]
    Rejected { shape: String, span: Span },
}

impl TransformError {
    /// True for grammar/mapping drift, false for policy rejection.
    pub fn is_defect(&self) -> bool {
        !matches!(self, Self::Rejected { .. })
    }

    pub fn span(&self) -> Span {
        match self {
            Self::UnexpectedToken { span, .. }
            | Self::ShapeMismatch { span, .. }
            | Self::MissingChild { span, .. }
            | Self::MalformedWrapper { span, .. }
            | Self::Rejected { span, .. } => *span,
        }
    }
}

/// Errors from [`crate::Mapper::transform_json`].
#[derive(Debug, Error)]
pub enum LoadError {
    /// The serialized CST could not be decoded.
    #[error(transparent)]
    Cst(#[from] zenscript_cst::CstError),

    /// The decoded CST hit a mapping defect.
    #[error(transparent)]
    Transform(#[from] TransformError),
}
