//! Error types for kind-checked operations.

use crate::kind::KindId;
use thiserror::Error;

/// Result type for kind-checked operations.
pub type Result<T> = core::result::Result<T, UnitError>;

/// Contract violations raised by the runtime layer.
///
/// All of these are programmer errors: nothing here is transient or worth retrying. They exist so that an invalid
/// combination fails at the call site with an inspectable error instead of producing a wrong physical value.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UnitError {
    /// Operands (or a conversion target) belong to different kinds.
    #[error("kind mismatch in {operation}: expected {expected}, found {found}")]
    KindMismatch {
        /// Operation that was attempted.
        operation: &'static str,
        /// Kind the operation required.
        expected: KindId,
        /// Kind that was supplied.
        found: KindId,
    },

    /// Arithmetic or comparison between two unit values that this closed operator set does not define.
    #[error("unsafe unit operation: cannot {operation} {lhs} and {rhs}")]
    UnsafeOperation {
        /// Operation that was attempted (`"add"`, `"multiply"`, `"compare"`, …).
        operation: &'static str,
        /// Unit name of the left operand.
        lhs: &'static str,
        /// Unit name of the right operand.
        rhs: &'static str,
    },

    /// A vector was built from, or combined with, a sequence of the wrong length.
    #[error("arity mismatch: expected {expected} components, found {found}")]
    ArityMismatch {
        /// Required number of components.
        expected: usize,
        /// Supplied number of components.
        found: usize,
    },

    /// A vector needs at least one component to determine its kind.
    #[error("a vector needs at least one component")]
    EmptyVector,

    /// Component index past the end of a vector.
    #[error("index {index} out of bounds for vector of length {len}")]
    IndexOutOfBounds {
        /// Requested index.
        index: usize,
        /// Vector length.
        len: usize,
    },

    /// The operation is not defined for vectors of this kind.
    #[error("cannot {operation} a vector of {kind}")]
    UnsupportedKind {
        /// Operation that was attempted.
        operation: &'static str,
        /// Kind of the receiving vector.
        kind: KindId,
    },
}

impl UnitError {
    pub(crate) fn kind_mismatch(operation: &'static str, expected: KindId, found: KindId) -> Self {
        log::debug!("rejecting {operation}: expected {expected}, found {found}");
        UnitError::KindMismatch {
            operation,
            expected,
            found,
        }
    }

    pub(crate) fn unsafe_operation(
        operation: &'static str,
        lhs: &'static str,
        rhs: &'static str,
    ) -> Self {
        log::debug!("rejecting {operation} between {lhs} and {rhs}");
        UnitError::UnsafeOperation {
            operation,
            lhs,
            rhs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsafe_operation_message_names_both_operands() {
        let err = UnitError::unsafe_operation("add", "Angstrom", "Nanometer");
        assert_eq!(
            err.to_string(),
            "unsafe unit operation: cannot add Angstrom and Nanometer"
        );
    }

    #[test]
    fn kind_mismatch_message_uses_kind_names() {
        let err = UnitError::kind_mismatch("convert", KindId::Distance, KindId::Time);
        assert_eq!(
            err.to_string(),
            "kind mismatch in convert: expected DistanceUnit, found TimeUnit"
        );
    }

    #[test]
    fn arity_mismatch_message() {
        let err = UnitError::ArityMismatch {
            expected: 3,
            found: 2,
        };
        assert_eq!(err.to_string(), "arity mismatch: expected 3 components, found 2");
    }

    #[test]
    fn unsupported_kind_message() {
        let err = UnitError::UnsupportedKind {
            operation: "rotate",
            kind: KindId::Mass,
        };
        assert_eq!(err.to_string(), "cannot rotate a vector of MassUnit");
    }
}
