//! Datastore credentials in the orchestration manifest.

use crate::error::Result;
use crate::scan::checklist::{self, ChecklistItem};
use crate::scan::{Finding, RuleId, ScanContext, ScanRule, Severity};

const ITEMS: &[ChecklistItem] = &[ChecklistItem {
    needles: &["MYSQL_ROOT_PASSWORD"],
    present: "Database root password configured in the orchestration manifest",
    absent: "Database root password not explicit in the orchestration manifest",
}];

/// Checks the orchestration manifest sets the database root credential.
pub struct DatastoreRule;

impl ScanRule for DatastoreRule {
    fn id(&self) -> RuleId {
        RuleId::new("datastore")
    }

    fn name(&self) -> &str {
        "Datastore"
    }

    fn description(&self) -> &str {
        "Checks the orchestration manifest configures the database root password"
    }

    fn check(&self, ctx: &ScanContext) -> Result<Vec<Finding>> {
        let path = &ctx.config().compose_file;
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
