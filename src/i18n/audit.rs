//! Catalog coverage audit.
//!
//! Compares a locale's templates against the catalog's baseline locale so
//! incomplete or inconsistent translations are caught before they degrade
//! into fallbacks at runtime.

use crate::i18n::{template, Locale, MessageCatalog};
use serde::Serialize;
use std::collections::HashMap;

/// Audit report containing errors and warnings about one locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditReport {
    /// Locale that was audited
    pub locale: Locale,

    /// Baseline keys with no template in the audited locale
    pub errors: Vec<String>,

    /// Placeholder mismatches and keys unknown to the baseline
    pub warnings: Vec<String>,
}

impl AuditReport {
    /// Create a new empty report
    pub fn new(locale: Locale) -> Self {
        Self {
            locale,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Check if the report has any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Check if the report has any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

/// Auditor for catalog coverage.
pub struct CatalogAudit;

impl CatalogAudit {
    /// Audit one locale against the catalog's baseline.
    ///
    /// This function checks that:
    /// - every baseline key has a template in `locale` (errors)
    /// - each template uses the same placeholders, in the same order, as its
    ///   baseline counterpart (warnings)
    /// - `locale` has no keys the baseline lacks (warnings)
    pub fn audit(catalog: &MessageCatalog, locale: &Locale) -> AuditReport {
        let mut report = AuditReport::new(locale.clone());

        let baseline = catalog.templates(catalog.baseline());
        let translated: HashMap<_, _> = catalog.templates(locale).into_iter().collect();

        for (key, base_template) in &baseline {
            match translated.get(key) {
                None => report
                    .errors
                    .push(format!("Missing template for '{}'", key)),
                Some(local_template) => {
                    let expected = template::placeholders(base_template);
                    let actual = template::placeholders(local_template);
                    if expected != actual {
                        report.warnings.push(format!(
                            "Placeholder mismatch for '{}': baseline has {:?}, translation has {:?}",
                            key, expected, actual
                        ));
                    }
                }
            }
        }

        let baseline_keys: HashMap<_, _> = baseline.into_iter().collect();
        let mut extra: Vec<_> = translated
            .keys()
            .filter(|key| !baseline_keys.contains_key(*key))
            .collect();
        extra.sort();
        for key in extra {
            report
                .warnings
                .push(format!("Template for '{}' has no baseline counterpart", key));
        }

        report
    }

    /// Audit every non-baseline locale in the catalog, sorted by locale.
    pub fn audit_all(catalog: &MessageCatalog) -> Vec<AuditReport> {
        catalog
            .locales()
            .iter()
            .filter(|locale| *locale != catalog.baseline())
            .map(|locale| Self::audit(catalog, locale))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::MessageKey;

    // ==================== Built-in Tests ====================

    #[test]
    fn test_builtin_spanish_is_clean() {
        let catalog = MessageCatalog::new();
        let report = CatalogAudit::audit(&catalog, &Locale::ES);
        assert!(report.is_clean(), "{:?}", report);
    }

    #[test]
    fn test_audit_all_skips_baseline() {
        let catalog = MessageCatalog::new();
        let reports = CatalogAudit::audit_all(&catalog);
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].locale, Locale::ES);
    }

    // ==================== Detection Tests ====================

    #[test]
    fn test_missing_keys_are_errors() {
        let catalog = MessageCatalog::new();
        let french = Locale::new("fr");
        catalog.register(french.clone(), MessageKey::REQUIRED, "le champ est obligatoire");

        let report = CatalogAudit::audit(&catalog, &french);
        assert!(report.has_errors());
        assert_eq!(report.errors.len(), MessageKey::ALL.len() - 1);
        assert!(report.errors.iter().any(|e| e.contains("'min_value'")));
        assert!(!report.errors.iter().any(|e| e.contains("'required'")));
    }

    #[test]
    fn test_placeholder_mismatch_is_warning() {
        let catalog = MessageCatalog::new();
        catalog.register(Locale::ES, MessageKey::BETWEEN, "debe estar entre %v");

        let report = CatalogAudit::audit(&catalog, &Locale::ES);
        assert!(!report.has_errors());
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("Placeholder mismatch for 'between'"));
    }

    #[test]
    fn test_extra_key_is_warning() {
        let catalog = MessageCatalog::new();
        catalog.register(Locale::ES, MessageKey::new("zip"), "código postal inválido");

        let report = CatalogAudit::audit(&catalog, &Locale::ES);
        assert_eq!(
            report.warnings,
            vec!["Template for 'zip' has no baseline counterpart".to_string()]
        );
    }

    // ==================== Report Tests ====================

    #[test]
    fn test_audit_report_new() {
        let report = AuditReport::new(Locale::EN);
        assert!(report.is_clean());
        assert!(!report.has_errors());
        assert!(!report.has_warnings());
    }

    #[test]
    fn test_audit_report_with_warning() {
        let mut report = AuditReport::new(Locale::EN);
        report.warnings.push("Test warning".to_string());

        assert!(!report.is_clean());
        assert!(!report.has_errors());
        assert!(report.has_warnings());
    }
}
