//! Copyright header presence check.
//!
//! Every authored source file must open with a header naming the copyright
//! holder and a year. Generated files and files without content are exempt.

use super::{Check, CheckConfig, CheckContext};
use crate::classify::is_generated;
use crate::header::{HeaderStructure, SourceUnit, locate};
use crate::validate::error::RULE_ID;
use crate::validate::header::{Verdict, validate_header};
use crate::validate::{ValidationError, ValidationResult};
use log::trace;

/// Line reported when a header has no block to anchor the diagnostic to.
const UNANCHORED_LINE: usize = 1;

/// A check that requires a copyright header at the top of each file.
#[derive(Debug, Clone, Default)]
pub struct CopyrightPresentCheck;

impl CopyrightPresentCheck {
    /// Creates a new copyright header check.
    pub fn new() -> Self {
        Self
    }
}

impl Check for CopyrightPresentCheck {
    fn name(&self) -> &'static str {
        RULE_ID
    }

    fn run(&self, ctx: &CheckContext) -> ValidationResult {
        evaluate(ctx.unit, ctx.config).into()
    }
}

/// Evaluates the copyright rule for one source unit.
///
/// Returns `None` when the unit is blank, generated, or carries a compliant
/// header. Otherwise returns a single diagnostic at column 1 of the reported
/// line.
pub fn evaluate(unit: &SourceUnit, config: &CheckConfig) -> Option<ValidationError> {
    if unit.is_blank() {
        trace!("{}: no content, skipped", unit.file_name);
        return None;
    }

    let syntax = config.language_for(&unit.file_name).syntax();
    if is_generated(unit, syntax, &config.generated_patterns) {
        return None;
    }

    let structure = locate(unit, syntax);
    trace!("{}: located {}", unit.file_name, structure);

    let Verdict::NonCompliant { anchor, missing } =
        validate_header(&structure, config.company_name())
    else {
        return None;
    };

    let span = unit.line_span(anchor.unwrap_or(UNANCHORED_LINE));
    let error = match structure {
        HeaderStructure::None => {
            ValidationError::missing_header(&unit.file_name, span, config.severity)
        }
        _ => ValidationError::incomplete_header(&unit.file_name, missing, span, config.severity),
    };
    Some(error)
}
