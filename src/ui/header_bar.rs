use crate::classify::types::RiskLevel;
use crate::ui::theme;
use crate::working_set::WorkingSet;
use ratatui::{
    buffer::Buffer as Buf,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

pub struct HeaderBar<'a> {
    pub login: &'a str,
    pub forks: &'a WorkingSet,
    pub querying: bool,
}

impl<'a> Widget for HeaderBar<'a> {
    fn render(self, area: Rect, buf: &mut Buf) {
        let bg = Style::default().bg(theme::HEADER_BG);
        for x in area.x..area.right() {
            buf[(x, area.y)].set_style(bg);
        }

        let mut spans: Vec<Span<'static>> = vec![
            Span::styled(
                " forkprune",
                Style::default()
                    .fg(theme::ACCENT)
                    .bg(theme::HEADER_BG)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                " \u{2503} ",
                Style::default().fg(theme::SEPARATOR).bg(theme::HEADER_BG),
            ),
            Span::styled(self.login.to_string(), Style::default().bg(theme::HEADER_BG)),
            Span::styled("  ", bg),
        ];

        for level in RiskLevel::ALL {
            spans.push(Span::styled(
                format!("{}:{} ", level.value(), self.forks.count(level)),
                Style::default()
                    .fg(theme::level_color(level))
                    .bg(theme::HEADER_BG),
            ));
        }

        buf.set_line(area.x, area.y, &Line::from(spans), area.width);

        if self.querying {
            let busy = "querying\u{2026} ";
            let w = UnicodeWidthStr::width(busy) as u16;
            if area.width > w {
                buf.set_line(
                    area.right() - w,
                    area.y,
                    &Line::from(Span::styled(
                        busy,
                        Style::default().fg(theme::FILTER_COLOR).bg(theme::HEADER_BG),
                    )),
                    w,
                );
            }
        }
    }
}
