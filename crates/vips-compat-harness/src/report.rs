//! Machine-readable and human-readable audit reports.
//!
//! Serde mirrors of the core audit/manifest types. The core crate stays
//! serde-free; the harness owns the report schema so the JSON shape can
//! evolve without touching link-level logic.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};
use vips_compat_core::audit::{SymbolAudit, SymbolCoverage};
use vips_compat_core::manifest::{BUILTIN_MANIFEST, ShimEntry, SymbolDisposition};

/// Bumped when a field changes meaning, not when fields are added.
pub const REPORT_SCHEMA_VERSION: &str = "1";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoverageStatus {
    Exported,
    Forwarded,
    Stubbed,
    Shadowed,
    Unresolved,
}

/// One referenced symbol and how it resolves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FindingRecord {
    pub symbol: String,
    pub status: CoverageStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_exported: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentinel: Option<i32>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageCounts {
    pub exported: usize,
    pub forwarded: usize,
    pub stubbed: usize,
    pub shadowed: usize,
    pub unresolved: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditReport {
    pub version: String,
    pub referenced: usize,
    pub link_clean: bool,
    pub counts: CoverageCounts,
    pub findings: Vec<FindingRecord>,
}

impl AuditReport {
    pub fn from_audit(audit: &SymbolAudit) -> Self {
        let mut counts = CoverageCounts::default();
        let findings = audit
            .findings
            .iter()
            .map(|f| {
                let (status, target, target_exported, sentinel) = match &f.coverage {
                    SymbolCoverage::Exported => {
                        counts.exported += 1;
                        (CoverageStatus::Exported, None, None, None)
                    }
                    SymbolCoverage::Forwarded {
                        target,
                        target_exported,
                    } => {
                        counts.forwarded += 1;
                        (
                            CoverageStatus::Forwarded,
                            Some(target.clone()),
                            Some(*target_exported),
                            None,
                        )
                    }
                    SymbolCoverage::Stubbed { sentinel } => {
                        counts.stubbed += 1;
                        (CoverageStatus::Stubbed, None, None, Some(*sentinel))
                    }
                    SymbolCoverage::Shadowed => {
                        counts.shadowed += 1;
                        (CoverageStatus::Shadowed, None, None, None)
                    }
                    SymbolCoverage::Unresolved => {
                        counts.unresolved += 1;
                        (CoverageStatus::Unresolved, None, None, None)
                    }
                };
                FindingRecord {
                    symbol: f.symbol.clone(),
                    status,
                    target,
                    target_exported,
                    sentinel,
                }
            })
            .collect::<Vec<_>>();

        Self {
            version: REPORT_SCHEMA_VERSION.to_string(),
            referenced: findings.len(),
            link_clean: audit.is_link_clean(),
            counts,
            findings,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// One-line-per-symbol summary for terminal output.
    pub fn render_plain(&self) -> String {
        let mut out = String::new();
        let verdict = if self.link_clean { "clean" } else { "BROKEN" };
        let _ = writeln!(
            out,
            "symbol audit: {} referenced, link {verdict}",
            self.referenced
        );
        for f in &self.findings {
            let detail = match (&f.status, &f.target, f.sentinel) {
                (CoverageStatus::Forwarded, Some(target), _) => {
                    if f.target_exported == Some(false) {
                        format!("forwarded -> {target} (TARGET MISSING)")
                    } else {
                        format!("forwarded -> {target}")
                    }
                }
                (CoverageStatus::Stubbed, _, Some(sentinel)) => {
                    format!("stubbed (sentinel {sentinel})")
                }
                (CoverageStatus::Exported, ..) => "exported".to_string(),
                (CoverageStatus::Shadowed, ..) => "SHADOWED (shim hides a live export)".to_string(),
                _ => "UNRESOLVED".to_string(),
            };
            let _ = writeln!(out, "  {:<24} {detail}", f.symbol);
        }
        out
    }
}

/// Serde view of one drift manifest entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestRecord {
    pub old_name: String,
    pub kind: CoverageStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentinel: Option<i32>,
    pub changed_in: String,
    pub variadic_tail: bool,
    pub note: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestReport {
    pub version: String,
    pub entries: Vec<ManifestRecord>,
}

impl ManifestReport {
    pub fn builtin() -> Self {
        Self::from_entries(BUILTIN_MANIFEST)
    }

    pub fn from_entries(entries: &[ShimEntry]) -> Self {
        let entries = entries
            .iter()
            .map(|e| {
                let (kind, target, sentinel) = match e.disposition {
                    SymbolDisposition::Forward { target } => (
                        CoverageStatus::Forwarded,
                        Some(target.to_string()),
                        None,
                    ),
                    SymbolDisposition::Stub { sentinel } => {
                        (CoverageStatus::Stubbed, None, Some(sentinel))
                    }
                };
                ManifestRecord {
                    old_name: e.old_name.to_string(),
                    kind,
                    target,
                    sentinel,
                    changed_in: e.changed_in.to_string(),
                    variadic_tail: e.variadic_tail,
                    note: e.note.to_string(),
                }
            })
            .collect();
        Self {
            version: REPORT_SCHEMA_VERSION.to_string(),
            entries,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn render_plain(&self) -> String {
        let mut out = String::new();
        for e in &self.entries {
            let detail = match (&e.target, e.sentinel) {
                (Some(target), _) => format!("forward -> {target}"),
                (None, Some(sentinel)) => format!("stub, returns {sentinel}"),
                _ => String::new(),
            };
            let tail = if e.variadic_tail { ", variadic tail" } else { "" };
            let _ = writeln!(
                out,
                "  {:<24} {detail} (changed in {}{tail}): {}",
                e.old_name, e.changed_in, e.note
            );
        }
        out
    }
}
