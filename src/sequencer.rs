use std::collections::HashMap;

/// A render region that is fetched and redrawn as a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Container {
    MyComplaints,
    AllComplaints,
    AdminComplaints,
    ResidentPolls,
    AdminPolls,
    Users,
    RegistrationRequests,
    HouseChangeRequests,
    AdminAlerts,
    ResidentAlerts,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    pub container: Container,
    serial: u64,
}

/// Only the newest request per container may write its result.
#[derive(Debug, Default)]
pub struct RequestSequencer {
    next: u64,
    latest: HashMap<Container, u64>,
}

impl RequestSequencer {
    pub fn issue(&mut self, container: Container) -> Ticket {
        self.next += 1;
        self.latest.insert(container, self.next);
        Ticket {
            container,
            serial: self.next,
        }
    }

    pub fn is_current(&self, ticket: &Ticket) -> bool {
        self.latest.get(&ticket.container) == Some(&ticket.serial)
    }

    /// Retires every outstanding ticket, e.g. on logout.
    pub fn reset(&mut self) {
        self.latest.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newer_ticket_supersedes_older() {
        let mut seq = RequestSequencer::default();
        let first = seq.issue(Container::AllComplaints);
        let second = seq.issue(Container::AllComplaints);
        assert!(!seq.is_current(&first));
        assert!(seq.is_current(&second));
    }

    #[test]
    fn test_containers_are_independent() {
        let mut seq = RequestSequencer::default();
        let complaints = seq.issue(Container::AdminComplaints);
        let polls = seq.issue(Container::AdminPolls);
        assert!(seq.is_current(&complaints));
        assert!(seq.is_current(&polls));
    }

    #[test]
    fn test_reset_retires_everything() {
        let mut seq = RequestSequencer::default();
        let before = seq.issue(Container::Users);
        seq.reset();
        assert!(!seq.is_current(&before));
        let after = seq.issue(Container::Users);
        assert!(seq.is_current(&after));
        assert_ne!(before, after);
    }
}
