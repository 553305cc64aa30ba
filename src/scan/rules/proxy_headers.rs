//! Reverse-proxy security headers.

use crate::error::Result;
use crate::scan::checklist::{self, ChecklistItem};
use crate::scan::{Finding, RuleId, ScanContext, ScanRule, Severity};

const ITEMS: &[ChecklistItem] = &[
    ChecklistItem {
        needles: &["X-Frame-Options"],
        present: "Header X-Frame-Options configured (clickjacking protection)",
        absent: "Header X-Frame-Options not configured (clickjacking protection)",
    },
    ChecklistItem {
        needles: &["X-Content-Type-Options"],
        present: "Header X-Content-Type-Options configured (MIME sniffing protection)",
        absent: "Header X-Content-Type-Options not configured (MIME sniffing protection)",
    },
    ChecklistItem {
        needles: &["X-XSS-Protection"],
        present: "Header X-XSS-Protection configured (XSS protection)",
        absent: "Header X-XSS-Protection not configured (XSS protection)",
    },
];

/// Checks the reverse-proxy configuration sets HTTP hardening headers.
pub struct ProxyHeadersRule;

impl ScanRule for ProxyHeadersRule {
    fn id(&self) -> RuleId {
        RuleId::new("proxy-headers")
    }

    fn name(&self) -> &str {
        "Proxy Headers"
    }

    fn description(&self) -> &str {
        "Checks the reverse proxy sets X-Frame-Options, X-Content-Type-Options and X-XSS-Protection"
    }

    fn check(&self, ctx: &ScanContext) -> Result<Vec<Finding>> {
        let path = &ctx.config().proxy_config;
        match ctx.read(path)? {
            Some(content) => Ok(checklist::evaluate(&self.id(), &content, ITEMS)),
            None => Ok(vec![Finding::new(
                self.id(),
                Severity::Warning,
                format!("{} not found", path.display()),
            )]),
        }
    }
}
