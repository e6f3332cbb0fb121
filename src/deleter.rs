/// Site deletion flow: confirm, POST, remove the list entry or alert
///
/// Each call walks `Idle -> Confirming -> {Aborted | Requesting} -> {Removed | Failed}`.
/// The browser parts sit behind [`SiteHost`] and [`DeleteEndpoint`] so the
/// flow runs the same against the page and against test doubles.
use crate::config::PageConfig;
use crate::error::PageError;
use crate::site::RootDomain;

/// Terminal state of one delete invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// User declined the confirmation; nothing happened
    Aborted,
    /// Server accepted the delete; `entry_found` tells whether the list node was still there
    Removed { entry_found: bool },
    /// Request rejected or never completed; the user was alerted once
    Failed(PageError),
}

impl DeleteOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeleteOutcome::Aborted => "aborted",
            DeleteOutcome::Removed { .. } => "removed",
            DeleteOutcome::Failed(_) => "failed",
        }
    }
}

/// Blocking dialogs and document access
pub trait SiteHost {
    fn confirm(&self, message: &str) -> bool;
    fn alert(&self, message: &str);
    /// Remove the element with this id; returns false when there was none
    fn remove_entry(&self, element_id: &str) -> bool;
}

/// Transport for the delete request
#[allow(async_fn_in_trait)]
pub trait DeleteEndpoint {
    /// POST to `url` with no body and return the HTTP status
    async fn post(&self, url: &str) -> Result<u16, PageError>;
}

fn is_ok_status(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Run one delete invocation to its terminal state
pub async fn delete_site<H, E>(
    host: &H,
    endpoint: &E,
    config: &PageConfig,
    root_domain: &str,
    entry_id: &str,
) -> DeleteOutcome
where
    H: SiteHost,
    E: DeleteEndpoint,
{
    if !host.confirm(&config.confirm_message) {
        log::debug!("Delete of {:?} declined", root_domain);
        return DeleteOutcome::Aborted;
    }

    let url = RootDomain::new(root_domain).delete_url(&config.delete_endpoint);
    log::debug!("Requesting POST {}", url);
    let result = endpoint.post(&url).await.and_then(|status| {
        if is_ok_status(status) {
            Ok(())
        } else {
            Err(PageError::Status(status))
        }
    });

    match result {
        Ok(()) => {
            let entry_found = host.remove_entry(entry_id);
            if !entry_found {
                log::debug!("List entry {} already gone", entry_id);
            }
            log::info!("Deleted site {:?}", root_domain);
            DeleteOutcome::Removed { entry_found }
        }
        Err(e) => {
            log::warn!("Failed to delete site {:?}: {}", root_domain, e);
            host.alert(&config.failure_message);
            DeleteOutcome::Failed(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};

    struct MockHost {
        answer: bool,
        entries: RefCell<Vec<String>>,
        alerts: RefCell<Vec<String>>,
        confirms: Cell<usize>,
    }

    impl MockHost {
        fn new(answer: bool, entries: &[&str]) -> Self {
            MockHost {
                answer,
                entries: RefCell::new(entries.iter().map(|s| s.to_string()).collect()),
                alerts: RefCell::new(Vec::new()),
                confirms: Cell::new(0),
            }
        }

        fn has_entry(&self, id: &str) -> bool {
            self.entries.borrow().iter().any(|e| e == id)
        }
    }

    impl SiteHost for MockHost {
        fn confirm(&self, _message: &str) -> bool {
            self.confirms.set(self.confirms.get() + 1);
            self.answer
        }

        fn alert(&self, message: &str) {
            self.alerts.borrow_mut().push(message.to_string());
        }

        fn remove_entry(&self, element_id: &str) -> bool {
            let mut entries = self.entries.borrow_mut();
            let before = entries.len();
            entries.retain(|e| e != element_id);
            entries.len() < before
        }
    }

    struct MockEndpoint {
        response: Result<u16, PageError>,
        requests: RefCell<Vec<String>>,
    }

    impl MockEndpoint {
        fn new(response: Result<u16, PageError>) -> Self {
            MockEndpoint {
                response,
                requests: RefCell::new(Vec::new()),
            }
        }
    }

    impl DeleteEndpoint for MockEndpoint {
        async fn post(&self, url: &str) -> Result<u16, PageError> {
            self.requests.borrow_mut().push(url.to_string());
            self.response.clone()
        }
    }

    fn run(host: &MockHost, endpoint: &MockEndpoint, domain: &str, id: &str) -> DeleteOutcome {
        block_on(delete_site(host, endpoint, &PageConfig::default(), domain, id))
    }

    #[test]
    fn test_declined_does_nothing() {
        let host = MockHost::new(false, &["li-42"]);
        let endpoint = MockEndpoint::new(Ok(200));

        let outcome = run(&host, &endpoint, "example.com", "li-42");

        assert_eq!(outcome, DeleteOutcome::Aborted);
        assert!(endpoint.requests.borrow().is_empty());
        assert!(host.has_entry("li-42"));
        assert!(host.alerts.borrow().is_empty());
    }

    #[test]
    fn test_success_removes_entry_without_alert() {
        let host = MockHost::new(true, &["li-41", "li-42"]);
        let endpoint = MockEndpoint::new(Ok(200));

        let outcome = run(&host, &endpoint, "example.com", "li-42");

        assert_eq!(outcome, DeleteOutcome::Removed { entry_found: true });
        assert_eq!(*endpoint.requests.borrow(), vec!["/delete-site?rootDomain=example.com"]);
        assert!(!host.has_entry("li-42"));
        assert!(host.has_entry("li-41"));
        assert!(host.alerts.borrow().is_empty());
    }

    #[test]
    fn test_success_tolerates_missing_entry() {
        let host = MockHost::new(true, &[]);
        let endpoint = MockEndpoint::new(Ok(204));

        let outcome = run(&host, &endpoint, "example.com", "li-42");

        assert_eq!(outcome, DeleteOutcome::Removed { entry_found: false });
        assert!(host.alerts.borrow().is_empty());
    }

    #[test]
    fn test_server_error_alerts_once() {
        let host = MockHost::new(true, &["li-42"]);
        let endpoint = MockEndpoint::new(Ok(500));

        let outcome = run(&host, &endpoint, "example.com", "li-42");

        assert_eq!(outcome, DeleteOutcome::Failed(PageError::Status(500)));
        assert!(host.has_entry("li-42"));
        assert_eq!(
            *host.alerts.borrow(),
            vec![crate::config::DEFAULT_FAILURE_MESSAGE.to_string()]
        );
    }

    #[test]
    fn test_redirect_status_is_failure() {
        let host = MockHost::new(true, &["li-42"]);
        let endpoint = MockEndpoint::new(Ok(302));

        let outcome = run(&host, &endpoint, "example.com", "li-42");

        assert_eq!(outcome, DeleteOutcome::Failed(PageError::Status(302)));
        assert_eq!(host.alerts.borrow().len(), 1);
    }

    #[test]
    fn test_network_error_alerts_once() {
        let host = MockHost::new(true, &["li-42"]);
        let endpoint = MockEndpoint::new(Err(PageError::Transport("offline".to_string())));

        let outcome = run(&host, &endpoint, "example.com", "li-42");

        assert!(matches!(outcome, DeleteOutcome::Failed(PageError::Transport(_))));
        assert!(host.has_entry("li-42"));
        assert_eq!(host.alerts.borrow().len(), 1);
    }

    #[test]
    fn test_timeout_is_failure() {
        let host = MockHost::new(true, &["li-42"]);
        let endpoint = MockEndpoint::new(Err(PageError::Timeout(2000)));

        let outcome = run(&host, &endpoint, "example.com", "li-42");

        assert_eq!(outcome, DeleteOutcome::Failed(PageError::Timeout(2000)));
        assert_eq!(host.alerts.borrow().len(), 1);
    }

    #[test]
    fn test_padded_domain_sent_unchanged() {
        let host = MockHost::new(true, &["li-42"]);
        let endpoint = MockEndpoint::new(Ok(200));

        run(&host, &endpoint, " example.com", "li-42");

        assert_eq!(*endpoint.requests.borrow(), vec!["/delete-site?rootDomain=+example.com"]);
    }

    #[test]
    fn test_empty_domain_still_posted() {
        let host = MockHost::new(true, &["li-42"]);
        let endpoint = MockEndpoint::new(Ok(400));

        let outcome = run(&host, &endpoint, "", "li-42");

        assert_eq!(outcome, DeleteOutcome::Failed(PageError::Status(400)));
        assert_eq!(*endpoint.requests.borrow(), vec!["/delete-site?rootDomain="]);
        assert!(host.has_entry("li-42"));
        assert_eq!(host.alerts.borrow().len(), 1);
    }

    #[test]
    fn test_confirm_asked_exactly_once() {
        let host = MockHost::new(true, &["li-42"]);
        let endpoint = MockEndpoint::new(Ok(200));

        run(&host, &endpoint, "example.com", "li-42");

        assert_eq!(host.confirms.get(), 1);
    }

    #[test]
    fn test_uses_configured_endpoint_and_messages() {
        let host = MockHost::new(true, &["site-0"]);
        let endpoint = MockEndpoint::new(Ok(503));
        let config = PageConfig {
            delete_endpoint: "/admin/delete".to_string(),
            failure_message: "nope".to_string(),
            ..PageConfig::default()
        };

        block_on(delete_site(&host, &endpoint, &config, "bbc.co.uk", "site-0"));

        assert_eq!(*endpoint.requests.borrow(), vec!["/admin/delete?rootDomain=bbc.co.uk"]);
        assert_eq!(*host.alerts.borrow(), vec!["nope".to_string()]);
    }
}
