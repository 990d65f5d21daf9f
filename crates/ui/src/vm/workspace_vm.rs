use study_core::study::{ContentTab, StudyWorkspace};

use crate::i18n::Text;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TabVm {
    pub tab: ContentTab,
    pub label: Text,
    pub active: bool,
}

impl TabVm {
    #[must_use]
    pub const fn class(&self) -> &'static str {
        if self.active { "tab tab--active" } else { "tab" }
    }
}

#[must_use]
pub const fn tab_label(tab: ContentTab) -> Text {
    match tab {
        ContentTab::Summary => Text::SummaryTab,
        ContentTab::Concepts => Text::ConceptsTab,
        ContentTab::Text => Text::TextTab,
        ContentTab::Transcript => Text::TranscriptTab,
        ContentTab::Tools => Text::ToolsTab,
    }
}

#[must_use]
pub fn map_tabs(workspace: &StudyWorkspace) -> Vec<TabVm> {
    let active = workspace.active_tab();
    workspace
        .available_tabs()
        .into_iter()
        .map(|tab| TabVm {
            tab,
            label: tab_label(tab),
            active: tab == active,
        })
        .collect()
}
