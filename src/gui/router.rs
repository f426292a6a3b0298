// src/gui/router.rs
use crate::config::options::PageKind::{self, *};
use super::pages::{self, Page};

pub static PAGES: &[&'static dyn Page] = &[
    &pages::summary::PAGE,
    &pages::team::PAGE,
    &pages::games::PAGE,
    &pages::betting::PAGE,
    &pages::win_loss::PAGE,
    &pages::correlation::PAGE,
];

pub fn all_pages() -> &'static [&'static dyn Page] {
    PAGES
}

pub fn page_for(kind: PageKind) -> &'static dyn Page {
    match kind {
        Summary     => &pages::summary::PAGE,
        Team        => &pages::team::PAGE,
        Games       => &pages::games::PAGE,
        Betting     => &pages::betting::PAGE,
        WinLoss     => &pages::win_loss::PAGE,
        Correlation => &pages::correlation::PAGE,
    }
}
