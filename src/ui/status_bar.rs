use crate::ui::theme;
use ratatui::{
    buffer::Buffer as Buf,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

pub struct StatusBar<'a> {
    pub last_sync: &'a str,
    pub rate_limit: Option<u32>,
}

impl<'a> Widget for StatusBar<'a> {
    fn render(self, area: Rect, buf: &mut Buf) {
        let bg = Style::default().bg(theme::STATUS_BG);
        for x in area.x..area.right() {
            buf[(x, area.y)].set_style(bg);
        }

        let sep = Span::styled("\u{2502}", Style::default().fg(theme::BORDER_COLOR).bg(theme::STATUS_BG));
        let mut spans = vec![
            Span::styled(" d delete  r rescan  ? help  q quit ", bg),
            sep.clone(),
            Span::styled(format!(" synced: {} ", self.last_sync), bg),
        ];

        if let Some(remaining) = self.rate_limit {
            spans.push(sep);
            spans.push(Span::styled(format!(" API: {remaining} "), bg));
        }

        buf.set_line(area.x, area.y, &Line::from(spans), area.width);
    }
}
