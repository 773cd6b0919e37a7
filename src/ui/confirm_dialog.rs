use crate::ui::theme;
use ratatui::{
    buffer::Buffer as Buf,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Widget},
};
use unicode_width::UnicodeWidthStr;

pub struct ConfirmDialog<'a> {
    pub name_with_owner: &'a str,
}

impl ConfirmDialog<'_> {
    pub fn question(&self) -> String {
        format!("delete {} fork?", self.name_with_owner)
    }
}

impl<'a> Widget for ConfirmDialog<'a> {
    fn render(self, area: Rect, buf: &mut Buf) {
        let question = self.question();
        let hint = "y: delete   n/Esc: keep";
        let want_w = UnicodeWidthStr::width(question.as_str()).max(hint.len()) + 4;
        let w = (want_w as u16).min(area.width);
        let h = 4u16.min(area.height);
        let popup = Rect::new(
            area.x + (area.width - w) / 2,
            area.y + (area.height - h) / 2,
            w,
            h,
        );
        Clear.render(popup, buf);

        let block = Block::default()
            .title(" Confirm ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::ERROR_FG));
        let inner = block.inner(popup);
        block.render(popup, buf);

        if inner.height == 0 {
            return;
        }
        let q = super::truncate_with_ellipsis(&question, inner.width.saturating_sub(1) as usize);
        buf.set_line(
            inner.x + 1,
            inner.y,
            &Line::from(Span::styled(q, Style::default().add_modifier(Modifier::BOLD))),
            inner.width.saturating_sub(1),
        );
        if inner.height > 1 {
            buf.set_line(
                inner.x + 1,
                inner.y + 1,
                &Line::from(Span::styled(hint, Style::default().fg(theme::DIM_TEXT))),
                inner.width.saturating_sub(1),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_names_the_fork() {
        let dialog = ConfirmDialog {
            name_with_owner: "octo/tokio",
        };
        assert_eq!(dialog.question(), "delete octo/tokio fork?");
    }

    #[test]
    fn test_fits_tiny_area() {
        let area = Rect::new(0, 0, 10, 3);
        let mut buf = Buf::empty(area);
        ConfirmDialog {
            name_with_owner: "someone/a-very-long-repository-name",
        }
        .render(area, &mut buf);
    }
}
