use crate::classify::types::{Fork, PullRequestState, RiskLevel};
use crate::ui::theme;
use ratatui::{
    buffer::Buffer as Buf,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Widget},
};

pub struct DetailPanel<'a> {
    pub fork: Option<&'a Fork>,
    pub login: &'a str,
}

impl<'a> Widget for DetailPanel<'a> {
    fn render(self, area: Rect, buf: &mut Buf) {
        let block = Block::default()
            .title(" Detail ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::BORDER_COLOR));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width < 10 {
            return;
        }

        let lines = match self.fork {
            Some(fork) => detail_lines(fork, self.login),
            None => vec![Line::from(Span::styled(
                "No fork selected",
                Style::default().fg(theme::DIM_TEXT),
            ))],
        };

        for (i, line) in lines.iter().take(inner.height as usize).enumerate() {
            buf.set_line(inner.x + 1, inner.y + i as u16, line, inner.width - 1);
        }
    }
}

fn detail_lines(fork: &Fork, login: &str) -> Vec<Line<'static>> {
    let label = Style::default().fg(theme::ACCENT);
    let link = Style::default().fg(theme::LINK_COLOR);
    let mut lines = vec![
        Line::from(vec![
            Span::styled("Repo ", label),
            Span::raw(fork.name_with_owner.clone()),
        ]),
        Line::from(vec![
            Span::styled("Parent ", label),
            Span::raw(fork.parent.clone().unwrap_or_else(|| "(unknown)".to_string())),
        ]),
        Line::from(vec![
            Span::styled("Level ", label),
            Span::styled(
                fork.risk_level.to_string(),
                Style::default()
                    .fg(theme::level_color(fork.risk_level))
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(fork.risk_level.description(), Style::default().fg(theme::DIM_TEXT))),
        Line::from(vec![
            Span::styled("Review ", label),
            Span::styled(fork.review_url(login), link),
        ]),
    ];

    if fork.risk_level == RiskLevel::OpenPullRequest {
        if let Some(date) = fork.most_recent_pr_date() {
            lines.push(Line::from(vec![
                Span::styled("Most recent PR ", label),
                Span::raw(date),
            ]));
        }
    }

    if fork.branches.is_empty() {
        return lines;
    }

    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled(
        format!("Your branches ({})", fork.branches.len()),
        Style::default().add_modifier(Modifier::BOLD),
    )));
    for branch in &fork.branches {
        lines.push(Line::from(Span::raw(format!("  {}", branch.name))));
        if branch.pull_requests.is_empty() {
            lines.push(Line::from(Span::styled(
                format!("    {}", fork.branch_url(&branch.name)),
                link,
            )));
        }
        for pr in &branch.pull_requests {
            let state_color = match pr.state {
                PullRequestState::Open => theme::level_color(RiskLevel::OpenPullRequest),
                PullRequestState::Closed | PullRequestState::Merged => theme::DIM_TEXT,
            };
            lines.push(Line::from(vec![
                Span::styled(format!("    {:?} ", pr.state).to_uppercase(), Style::default().fg(state_color)),
                Span::styled(pr.created_at.format("%Y-%m-%d ").to_string(), Style::default().fg(theme::DIM_TEXT)),
                Span::styled(pr.url.clone(), link),
            ]));
        }
    }

    lines
}
