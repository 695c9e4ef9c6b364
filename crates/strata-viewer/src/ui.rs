//! Screen layout: a header line over the scrollable element

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use strata_hydrate::ElementView;

use crate::App;

/// Rows taken by the header and the content border
const CHROME_ROWS: u16 = 5;

/// Content rows visible in a terminal `height` rows tall
pub fn viewport_height(height: u16) -> u16 {
    height.saturating_sub(CHROME_ROWS)
}

/// Draw the whole screen
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // title + keybindings
            Constraint::Min(0),
        ])
        .split(frame.area());

    render_header(frame, chunks[0], app);
    render_content(frame, chunks[1], app);
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            "STRATA",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(app.title.clone(), Style::default().fg(Color::Gray)),
        Span::raw("  "),
        Span::styled(app.position_label(), Style::default().fg(Color::DarkGray)),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title_bottom(Line::from(" [q]uit [j/k] scroll [PgUp/PgDn] page ").right_aligned()),
    );

    frame.render_widget(header, area);
}

fn render_content(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default().borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    frame.render_widget(
        ElementView::new(&app.element)
            .scale(app.scale)
            .scroll(app.scroll),
        inner,
    );
}
