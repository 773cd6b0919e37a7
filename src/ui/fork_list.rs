use crate::classify::types::{Fork, RiskLevel};
use crate::ui::theme;
use crate::working_set::WorkingSet;
use ratatui::{
    buffer::Buffer as Buf,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Widget},
};

pub struct ForkList<'a> {
    pub forks: &'a WorkingSet,
    /// Index into [`WorkingSet::ordered`].
    pub selected: usize,
    pub deleting: Option<&'a str>,
}

enum DisplayEntry<'a> {
    Header { level: RiskLevel, count: usize },
    Fork { fork: &'a Fork, index: usize },
}

impl<'a> Widget for ForkList<'a> {
    fn render(self, area: Rect, buf: &mut Buf) {
        let block = Block::default()
            .title(format!(" Forks ({}) ", self.forks.len()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::BORDER_COLOR));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 {
            return;
        }
        if self.forks.is_empty() {
            let line = Line::from(Span::styled(" no forks", Style::default().fg(theme::DIM_TEXT)));
            buf.set_line(inner.x, inner.y, &line, inner.width);
            return;
        }

        let entries = self.build_entries();
        let visible = inner.height as usize;
        let selected_row = entries
            .iter()
            .position(|e| matches!(e, DisplayEntry::Fork { index, .. } if *index == self.selected))
            .unwrap_or(0);
        let scroll = (selected_row + 1).saturating_sub(visible);

        for (i, entry) in entries.iter().skip(scroll).take(visible).enumerate() {
            let y = inner.y + i as u16;
            let is_selected = scroll + i == selected_row
                && matches!(entry, DisplayEntry::Fork { .. });

            let line = self.entry_line(entry, is_selected, inner.width as usize);
            buf.set_line(inner.x, y, &line, inner.width);

            if is_selected {
                for x in inner.x..(inner.x + inner.width) {
                    buf[(x, y)].set_style(Style::default().bg(theme::SELECTED_BG));
                }
            }
        }
    }
}

impl<'a> ForkList<'a> {
    fn build_entries(&self) -> Vec<DisplayEntry<'a>> {
        let mut entries = Vec::new();
        let mut index = 0;

        for (level, forks) in self.forks.groups() {
            entries.push(DisplayEntry::Header {
                level,
                count: forks.len(),
            });
            for fork in forks {
                entries.push(DisplayEntry::Fork { fork, index });
                index += 1;
            }
        }

        entries
    }

    fn entry_line(&self, entry: &DisplayEntry, selected: bool, width: usize) -> Line<'static> {
        match entry {
            DisplayEntry::Header { level, count } => {
                let label = format!("{}: {}", level.value(), level.description());
                Line::from(vec![
                    Span::styled(
                        super::truncate_with_ellipsis(&label, width.saturating_sub(6)),
                        Style::default()
                            .fg(theme::level_color(*level))
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(format!(" {count}"), Style::default().fg(theme::DIM_TEXT)),
                ])
            }
            DisplayEntry::Fork { fork, .. } => {
                let pending = self.deleting == Some(fork.name_with_owner.as_str());
                let mut style = Style::default();
                if pending {
                    style = style.fg(theme::DIM_TEXT).add_modifier(Modifier::CROSSED_OUT);
                }
                if selected {
                    style = style.bg(theme::SELECTED_BG);
                }
                let label = format!("  {}", fork.name_with_owner);
                Line::from(Span::styled(
                    super::truncate_with_ellipsis(&label, width),
                    style,
                ))
            }
        }
    }
}
