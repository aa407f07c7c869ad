use std::rc::Rc;

use log::debug;
use yew::Reducible;

/// Transient state owned by the home page. Nothing here outlives a reload.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageState {
    pub about_open: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageAction {
    /// Image card activated.
    OpenAbout,
    /// Close button, backdrop click or Escape.
    CloseAbout,
}

impl Reducible for PageState {
    type Action = PageAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let about_open = match action {
            PageAction::OpenAbout => true,
            PageAction::CloseAbout => false,
        };
        if about_open == self.about_open {
            return self;
        }
        debug!("About overlay {}", if about_open { "opened" } else { "closed" });
        Rc::new(PageState { about_open })
    }
}

/// Which face of the contact card is showing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactFace {
    CallToAction,
    Email,
}

impl ContactFace {
    pub fn for_hover(hovered: bool) -> Self {
        if hovered {
            ContactFace::Email
        } else {
            ContactFace::CallToAction
        }
    }

    pub fn opacity_of(self, face: ContactFace) -> u8 {
        u8::from(self == face)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_and_closing_the_about_overlay() {
        let state = Rc::new(PageState::default());
        assert!(!state.about_open);

        let opened = state.reduce(PageAction::OpenAbout);
        assert!(opened.about_open);

        let closed = opened.reduce(PageAction::CloseAbout);
        assert!(!closed.about_open);
    }

    #[test]
    fn repeated_actions_keep_the_same_state() {
        let opened = Rc::new(PageState::default()).reduce(PageAction::OpenAbout);
        let again = opened.clone().reduce(PageAction::OpenAbout);
        assert!(Rc::ptr_eq(&opened, &again));

        let closed = Rc::new(PageState::default());
        let still_closed = closed.clone().reduce(PageAction::CloseAbout);
        assert!(Rc::ptr_eq(&closed, &still_closed));
    }

    #[test]
    fn most_recent_action_wins() {
        let actions = [
            PageAction::OpenAbout,
            PageAction::CloseAbout,
            PageAction::OpenAbout,
            PageAction::OpenAbout,
            PageAction::CloseAbout,
        ];
        let last = actions
            .iter()
            .fold(Rc::new(PageState::default()), |state, action| state.reduce(*action));
        assert!(!last.about_open);
    }

    #[test]
    fn hover_swaps_contact_face_and_leave_restores_it() {
        assert_eq!(ContactFace::for_hover(true), ContactFace::Email);
        assert_eq!(ContactFace::for_hover(false), ContactFace::CallToAction);

        let hovered = ContactFace::for_hover(true);
        assert_eq!(hovered.opacity_of(ContactFace::Email), 1);
        assert_eq!(hovered.opacity_of(ContactFace::CallToAction), 0);

        let left = ContactFace::for_hover(false);
        assert_eq!(left.opacity_of(ContactFace::Email), 0);
        assert_eq!(left.opacity_of(ContactFace::CallToAction), 1);
    }
}
