//! Symbol audit — does a binding link cleanly against a given binary?
//!
//! Pure set logic over two symbol name sets: the names a binding layer
//! references and the names the native binary exports. Each referenced name
//! is classified against the drift manifest, reproducing what the linker
//! will decide once the shim archive sits ahead of the import library.

use std::collections::BTreeSet;

use crate::manifest::{ShimEntry, SymbolDisposition};

/// How one referenced symbol resolves at link time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SymbolCoverage {
    /// The binary exports the name; the shim is not involved.
    Exported,
    /// The shim forwards the old name. `target_exported` is false when the
    /// forward target is itself missing from the binary, which still breaks
    /// the link.
    Forwarded {
        target: String,
        target_exported: bool,
    },
    /// The shim stubs the old name with a fixed sentinel.
    Stubbed { sentinel: i32 },
    /// Both the binary and the shim define the name. The shim wins the link,
    /// intercepting a live symbol — a manifest entry that should be retired.
    Shadowed,
    /// Nobody defines the name; the link fails.
    Unresolved,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditFinding {
    pub symbol: String,
    pub coverage: SymbolCoverage,
}

/// Result of auditing one (referenced, exported) symbol-set pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolAudit {
    /// One finding per referenced symbol, in symbol order.
    pub findings: Vec<AuditFinding>,
}

impl SymbolAudit {
    /// True when every referenced symbol resolves: nothing unresolved and
    /// every forward lands on an exported target.
    pub fn is_link_clean(&self) -> bool {
        self.findings.iter().all(|f| match &f.coverage {
            SymbolCoverage::Unresolved => false,
            SymbolCoverage::Forwarded {
                target_exported, ..
            } => *target_exported,
            _ => true,
        })
    }

    pub fn unresolved(&self) -> impl Iterator<Item = &AuditFinding> {
        self.findings.iter().filter(|f| {
            matches!(
                f.coverage,
                SymbolCoverage::Unresolved
                    | SymbolCoverage::Forwarded {
                        target_exported: false,
                        ..
                    }
            )
        })
    }

    pub fn shadowed(&self) -> impl Iterator<Item = &AuditFinding> {
        self.findings
            .iter()
            .filter(|f| f.coverage == SymbolCoverage::Shadowed)
    }

    pub fn count(&self, pred: impl Fn(&SymbolCoverage) -> bool) -> usize {
        self.findings.iter().filter(|f| pred(&f.coverage)).count()
    }
}

/// Classify every referenced symbol against the export set and manifest.
pub fn audit_symbols(
    referenced: &BTreeSet<String>,
    exported: &BTreeSet<String>,
    manifest: &[ShimEntry],
) -> SymbolAudit {
    let findings = referenced
        .iter()
        .map(|symbol| {
            let shim = manifest.iter().find(|e| e.old_name == symbol.as_str());
            let coverage = match (exported.contains(symbol), shim) {
                (true, Some(_)) => SymbolCoverage::Shadowed,
                (true, None) => SymbolCoverage::Exported,
                (false, Some(entry)) => match entry.disposition {
                    SymbolDisposition::Forward { target } => SymbolCoverage::Forwarded {
                        target: target.to_string(),
                        target_exported: exported.contains(target),
                    },
                    SymbolDisposition::Stub { sentinel } => SymbolCoverage::Stubbed { sentinel },
                },
                (false, None) => SymbolCoverage::Unresolved,
            };
            AuditFinding {
                symbol: symbol.clone(),
                coverage,
            }
        })
        .collect();

    SymbolAudit { findings }
}
