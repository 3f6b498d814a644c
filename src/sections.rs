use log::warn;
use web_sys::{window, ScrollBehavior, ScrollIntoViewOptions};

use crate::components::reveal::{Cascade, RevealTrigger};

/// The page sections, top to bottom.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Hero,
    About,
    Portfolio,
    Contact,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Hero,
        Section::About,
        Section::Portfolio,
        Section::Contact,
    ];

    pub fn anchor(self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::About => "about",
            Section::Portfolio => "portfolio",
            Section::Contact => "contact",
        }
    }

    pub fn reveal_trigger(self) -> RevealTrigger {
        match self {
            Section::Hero => RevealTrigger::OnMount,
            Section::Portfolio => RevealTrigger::OnVisible { threshold: 0.2 },
            Section::About | Section::Contact => RevealTrigger::OnVisible { threshold: 0.3 },
        }
    }

    /// Each section starts a little later than the one above it.
    pub fn cascade(self) -> Cascade {
        match self {
            Section::Hero => Cascade::new(0, 200),
            Section::About => Cascade::new(200, 200),
            Section::Portfolio => Cascade::new(250, 150),
            Section::Contact => Cascade::new(300, 200),
        }
    }
}

/// Smooth-scrolls to the section's anchor. Does nothing if the anchor is not
/// on the page.
pub fn scroll_to(section: Section) {
    let Some(target) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(section.anchor()))
    else {
        warn!("No element with id #{}", section.anchor());
        return;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}
