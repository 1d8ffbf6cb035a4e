//! # eofscope Prelude
//!
//! This module provides a convenient prelude for the most commonly used types from the
//! eofscope library. Import it to get the validation entry point and everything needed to
//! interpret its result.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all eofscope operations
pub use crate::Error;

/// The result type used throughout eofscope
pub use crate::Result;

// ================================================================================================
// Validation
// ================================================================================================

/// Validation entry point and its outcome
pub use crate::{validate_eof, Verdict};

/// Rule revision and container version
pub use crate::{EofVersion, Revision};

// ================================================================================================
// Container Structure
// ================================================================================================

/// Validated container view with resolved section bodies
pub use crate::{EofContainer, Section};

/// Header table records
pub use crate::{SectionHeader, SectionKind};

/// Format constants
pub use crate::container::{EOF_MAGIC, EOF_PREFIX_SIZE};

// ================================================================================================
// Low-level Parsing
// ================================================================================================

/// Bounds-checked cursor over a byte slice
pub use crate::Parser;
