//! Security audit for password hashing configurations
//! 
//! Flags configurations that are valid but weaker than recommended.
//! Audit findings never reject a configuration; validation does that.

use serde::Serialize;
use crate::shared::constants::*;
use super::password::Options;

/// Security audit results
#[derive(Debug, Clone, Default, Serialize)]
pub struct SecurityAuditResult {
    pub passed: bool,
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
    pub recommendations: Vec<String>,
}

impl SecurityAuditResult {
    pub fn new() -> Self {
        Self {
            passed: true,
            ..Default::default()
        }
    }

    pub fn add_warning(&mut self, warning: String) {
        self.warnings.push(warning);
    }

    pub fn add_error(&mut self, error: String) {
        self.errors.push(error);
        self.passed = false;
    }

    pub fn add_recommendation(&mut self, recommendation: String) {
        self.recommendations.push(recommendation);
    }
}

/// Security auditor for password hashing configurations
pub struct SecurityAuditor;

impl SecurityAuditor {
    /// Audit a configuration
    pub fn audit_options(options: &Options) -> SecurityAuditResult {
        let mut result = SecurityAuditResult::new();

        if let Err(e) = options.validate() {
            result.add_error(e.to_string());
            return result;
        }

        Self::audit_work_factor(options, &mut result);
        Self::audit_salt(options, &mut result);
        Self::audit_key_length(options, &mut result);

        result
    }

    fn audit_work_factor(options: &Options, result: &mut SecurityAuditResult) {
        if options.iterations() < RECOMMENDED_MIN_ITERATIONS {
            result.add_warning(format!(
                "Iteration count {} is below the recommended minimum of {}",
                options.iterations(),
                RECOMMENDED_MIN_ITERATIONS
            ));
            result.add_recommendation("Raise the iteration count and re-encode on next login".to_string());
        }
    }

    fn audit_salt(options: &Options, result: &mut SecurityAuditResult) {
        if options.salt_len() < RECOMMENDED_MIN_SALT_LEN {
            result.add_warning(format!(
                "Salt length {} is below the recommended minimum of {}",
                options.salt_len(),
                RECOMMENDED_MIN_SALT_LEN
            ));
        }
    }

    fn audit_key_length(options: &Options, result: &mut SecurityAuditResult) {
        let digest_len = options.hash_function().output_len();
        if options.key_len() < digest_len {
            result.add_warning(format!(
                "Derived key length {} is shorter than the {} digest ({} bytes)",
                options.key_len(),
                options.hash_function(),
                digest_len
            ));
        }
        if options.key_len() > digest_len {
            result.add_recommendation(format!(
                "Derived key spans {} {} blocks; each block repeats the full iteration count",
                options.key_len().div_ceil(digest_len),
                options.hash_function()
            ));
        }
    }

    /// Generate a human-readable security report for a configuration
    pub fn generate_security_report(options: &Options) -> String {
        let audit_result = Self::audit_options(options);
        
        let mut report = String::new();
        report.push_str("=== Password Hashing Security Report ===\n\n");
        report.push_str(&format!(
            "pbkdf2-{} iterations={} key_len={} salt_len={}\n\n",
            options.hash_function(),
            options.iterations(),
            options.key_len(),
            options.salt_len()
        ));
        
        if audit_result.passed {
            report.push_str("Security audit PASSED\n\n");
        } else {
            report.push_str("Security audit FAILED\n\n");
        }

        let sections = [
            ("Errors", &audit_result.errors),
            ("Warnings", &audit_result.warnings),
            ("Recommendations", &audit_result.recommendations),
        ];
        for (title, items) in sections {
            if items.is_empty() {
                continue;
            }
            report.push_str(title);
            report.push_str(":\n");
            for item in items {
                report.push_str(&format!("  - {}\n", item));
            }
            report.push('\n');
        }

        report
    }
}
