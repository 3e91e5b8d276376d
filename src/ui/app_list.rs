use ratatui::{prelude::*, widgets::*};

use crate::messages::RenderState;
use crate::models::AppRecord;

/// List of discovered dapps, owned apps first
pub struct AppList<'a> {
    state: &'a RenderState,
    selected: Option<usize>,
    focused: bool,
}

impl<'a> AppList<'a> {
    pub fn new(state: &'a RenderState) -> Self {
        AppList {
            state,
            selected: None,
            focused: false,
        }
    }

    pub fn selected(mut self, index: Option<usize>) -> Self {
        self.selected = index;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn title(&self) -> String {
        let loading = if self.state.loading { " [...]" } else { "" };
        format!(
            " Dapps {}/{}{} | fee: {} ",
            self.state.owned_count, self.state.count, loading, self.state.fee
        )
    }
}

/// One list row: ownership marker, name, short id
pub fn app_line(app: &AppRecord) -> Line<'static> {
    let marker = if app.is_owner {
        Span::styled("[*] ", Style::default().fg(Color::Green).bold())
    } else {
        Span::raw("[ ] ")
    };
    let name_style = if app.manifest.is_some() {
        Style::default()
    } else {
        Style::default().fg(Color::DarkGray)
    };

    Line::from(vec![
        marker,
        Span::styled(app.name.clone(), name_style),
        Span::styled(format!("  {}", short_id(&app.id)), Style::default().fg(Color::DarkGray)),
    ])
}

/// `0x1234…abcd` form of a long id
fn short_id(id: &str) -> String {
    let chars: Vec<char> = id.chars().collect();
    if chars.len() <= 14 {
        return id.to_string();
    }
    let head: String = chars[..6].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}…{}", head, tail)
}

impl Widget for AppList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(self.title());

        if self.state.apps.is_empty() {
            let content = if self.state.loading {
                "Loading dapps..."
            } else {
                "No dapps registered."
            };
            Paragraph::new(content)
                .style(Style::default().fg(Color::DarkGray))
                .block(block)
                .render(area, buf);
            return;
        }

        let items: Vec<ListItem> = self.state.apps.iter().map(|app| ListItem::new(app_line(app))).collect();
        let list = List::new(items)
            .block(block)
            .highlight_style(Style::default().fg(Color::Yellow).bold());

        let mut list_state = ListState::default();
        list_state.select(self.selected);
        StatefulWidget::render(list, area, buf, &mut list_state);
    }
}
