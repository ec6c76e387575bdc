use crate::route::Location;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavSignal {
    /// First location seen by the session. Never animates.
    Initial(Location),
    Navigated {
        from: Location,
        to: Location,
    },
    Unchanged,
}

/// Tracks whether the session has seen a location yet and which one it saw
/// last. Lives for the whole session and is never reset.
#[derive(Debug, Clone, Default)]
pub struct NavigationSession {
    has_navigated_once: bool,
    previous_location: Option<Location>,
}

impl NavigationSession {
    pub fn has_navigated_once(&self) -> bool {
        self.has_navigated_once
    }

    pub fn previous_location(&self) -> Option<&Location> {
        self.previous_location.as_ref()
    }

    pub fn observe(&mut self, location: &Location) -> NavSignal {
        let Some(previous) = self.previous_location.as_ref() else {
            self.has_navigated_once = true;
            self.previous_location = Some(location.clone());
            return NavSignal::Initial(location.clone());
        };
        if previous == location {
            return NavSignal::Unchanged;
        }

        let from = std::mem::replace(&mut self.previous_location, Some(location.clone()));
        NavSignal::Navigated {
            from: from.unwrap_or_default(),
            to: location.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{NavSignal, NavigationSession};
    use crate::route::Location;

    #[test]
    fn first_observation_is_initial_and_sets_flag() {
        let mut session = NavigationSession::default();
        assert!(!session.has_navigated_once());

        let signal = session.observe(&Location::new("/work"));
        assert_eq!(signal, NavSignal::Initial(Location::new("/work")));
        assert!(session.has_navigated_once());
        assert_eq!(
            session.previous_location().map(Location::as_str),
            Some("/work")
        );
    }

    #[test]
    fn repeated_observation_is_idempotent() {
        let mut session = NavigationSession::default();
        session.observe(&Location::root());
        for _ in 0..3 {
            assert_eq!(session.observe(&Location::root()), NavSignal::Unchanged);
        }
        assert!(session.has_navigated_once());
    }

    #[test]
    fn changed_location_reports_navigation() {
        let mut session = NavigationSession::default();
        session.observe(&Location::root());

        let signal = session.observe(&Location::new("/about"));
        assert_eq!(
            signal,
            NavSignal::Navigated {
                from: Location::root(),
                to: Location::new("/about"),
            }
        );
        assert_eq!(session.observe(&Location::new("/about")), NavSignal::Unchanged);
    }
}
