use hedge_core::model::{ContentGroup, ContentKind, HedgeSession};

use super::hedge_card_vm::tone_class;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SectionBody {
    Quote(String),
    Text(String),
    Bullets(Vec<String>),
    Stories(Vec<String>),
    Badges(Vec<String>),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DialogSectionVm {
    pub heading: String,
    pub tone_class: &'static str,
    pub body: SectionBody,
}

/// UI-ready state of the hedge dialog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HedgeDialogVm {
    pub title: String,
    pub progress: u8,
    pub progress_label: String,
    pub sections: Vec<DialogSectionVm>,
    pub completed: bool,
}

#[must_use]
pub fn map_hedge_dialog(session: &HedgeSession) -> HedgeDialogVm {
    let cycle = session.display_cycle_index();
    let category_tone = tone_class(session.category());
    let sections = session
        .content()
        .iter()
        .map(|group| map_section(group, cycle, category_tone))
        .collect();

    HedgeDialogVm {
        title: session.title().to_owned(),
        progress: session.progress(),
        progress_label: format!("{}%", session.progress()),
        sections,
        completed: session.is_completed(),
    }
}

fn map_section(group: &ContentGroup, cycle: usize, category_tone: &'static str) -> DialogSectionVm {
    let entries = group.visible_entries(cycle);
    let owned = || entries.iter().map(|entry| (*entry).to_owned()).collect::<Vec<_>>();
    let (body, tone) = match group.kind {
        ContentKind::Quotes => (
            SectionBody::Quote(entries.first().copied().unwrap_or_default().to_owned()),
            category_tone,
        ),
        // Self-care actions sit on a softer background than the quote above.
        ContentKind::Actions => (
            SectionBody::Text(entries.first().copied().unwrap_or_default().to_owned()),
            "tone-soft",
        ),
        ContentKind::Suggestions => (SectionBody::Bullets(owned()), category_tone),
        ContentKind::Stories => (SectionBody::Stories(owned()), category_tone),
        ContentKind::Achievements => (SectionBody::Badges(owned()), category_tone),
    };

    DialogSectionVm {
        heading: format!("{} {}", group.icon, group.heading),
        tone_class: tone,
        body,
    }
}
