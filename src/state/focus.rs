//! Keyboard focus ring over the form

use super::forms::{Field, FormAction};

/// Element that currently receives key input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(Field),
    Action(FormAction),
}

impl Default for Focus {
    fn default() -> Self {
        Focus::Field(Field::FirstName)
    }
}

impl Focus {
    /// Every focusable element: all fields, then the action buttons
    pub fn ring() -> Vec<Focus> {
        Field::ALL
            .into_iter()
            .map(Focus::Field)
            .chain(FormAction::ALL.into_iter().map(Focus::Action))
            .collect()
    }

    fn index(&self) -> usize {
        Self::ring().iter().position(|f| f == self).unwrap_or(0)
    }

    pub fn next(&self) -> Focus {
        let ring = Self::ring();
        ring[(self.index() + 1) % ring.len()]
    }

    pub fn prev(&self) -> Focus {
        let ring = Self::ring();
        let idx = self.index();
        if idx == 0 {
            ring[ring.len() - 1]
        } else {
            ring[idx - 1]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_focus_is_first_name() {
        assert_eq!(Focus::default(), Focus::Field(Field::FirstName));
    }

    #[test]
    fn test_ring_has_fields_then_actions() {
        let ring = Focus::ring();
        assert_eq!(ring.len(), Field::ALL.len() + FormAction::ALL.len());
        assert_eq!(ring[ring.len() - 1], Focus::Action(FormAction::Register));
    }

    #[test]
    fn test_next_wraps_around() {
        let last = Focus::Action(FormAction::Register);
        assert_eq!(last.next(), Focus::default());
    }

    #[test]
    fn test_prev_wraps_around() {
        assert_eq!(Focus::default().prev(), Focus::Action(FormAction::Register));
        assert_eq!(
            Focus::Field(Field::LastName).prev(),
            Focus::Field(Field::FirstName)
        );
    }
}
