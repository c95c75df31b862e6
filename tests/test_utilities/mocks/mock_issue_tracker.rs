use errata_roundtrip::ports::outbound::IssueTracker;
use errata_roundtrip::shared::Result;
use std::cell::RefCell;

/// Mock IssueTracker with a fixed answer and a call log.
pub struct MockIssueTracker {
    unresolved: bool,
    should_fail: bool,
    pub queried: RefCell<Vec<u32>>,
}

impl MockIssueTracker {
    pub fn resolved() -> Self {
        Self {
            unresolved: false,
            should_fail: false,
            queried: RefCell::new(Vec::new()),
        }
    }

    pub fn unresolved() -> Self {
        Self {
            unresolved: true,
            should_fail: false,
            queried: RefCell::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            unresolved: false,
            should_fail: true,
            queried: RefCell::new(Vec::new()),
        }
    }
}

impl IssueTracker for MockIssueTracker {
    fn is_unresolved(&self, issue_id: u32) -> Result<bool> {
        self.queried.borrow_mut().push(issue_id);
        if self.should_fail {
            anyhow::bail!("mock issue tracker failure");
        }
        Ok(self.unresolved)
    }
}

impl IssueTracker for &MockIssueTracker {
    fn is_unresolved(&self, issue_id: u32) -> Result<bool> {
        (**self).is_unresolved(issue_id)
    }
}
