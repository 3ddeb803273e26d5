use crate::application::{App, AppMode, Screen};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub fn render_ui(f: &mut Frame, app: &App) {
    match app.screen {
        Screen::SignIn => render_sign_in(f, app),
        Screen::Home => render_home(f, app),
    }

    match app.mode {
        AppMode::Normal => {}
        AppMode::ErrorDialog => render_error_dialog(f, app),
        AppMode::SuccessDialog => render_success_dialog(f),
    }
}

fn render_sign_in(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(f.area());

    let title = Paragraph::new("Sign in")
        .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD));
    f.render_widget(title, chunks[0]);

    let separator = Paragraph::new("─".repeat(f.area().width as usize))
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(separator, chunks[1]);

    let subtitle = Paragraph::new("Enter your phone number")
        .style(Style::default().fg(Color::White));
    f.render_widget(subtitle, chunks[2]);

    let description =
        Paragraph::new("Use your phone number to sign in or register an account.")
            .style(Style::default().fg(Color::Gray));
    f.render_widget(description, chunks[3]);

    let input_style = if matches!(app.mode, AppMode::Normal) {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let input = Paragraph::new(app.input.as_str()).style(input_style).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Phone number"),
    );
    f.render_widget(input, chunks[4]);

    if matches!(app.mode, AppMode::Normal) {
        f.set_cursor_position((
            chunks[4].x + app.input.len() as u16 + 1,
            chunks[4].y + 1,
        ));
    }

    if let Some(ref message) = app.error_message {
        let error = Paragraph::new(message.as_str()).style(Style::default().fg(Color::Red));
        f.render_widget(error, chunks[5]);
    }

    let button_style = if app.can_submit() {
        Style::default().bg(Color::LightBlue).fg(Color::Black)
    } else {
        Style::default().bg(Color::DarkGray).fg(Color::Gray)
    };
    let button = Paragraph::new("Continue")
        .alignment(Alignment::Center)
        .style(button_style)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(button, chunks[6]);

    let hint = Paragraph::new("Type digits to enter a number | Enter: continue | Esc: quit")
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(hint, chunks[8]);
}

fn render_home(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(f.area());

    let title = Paragraph::new("Welcome")
        .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD));
    f.render_widget(title, chunks[0]);

    let number = app.session.phone_number().unwrap_or("");
    let subtitle = Paragraph::new(Line::from(vec![
        Span::raw("Your phone number: "),
        Span::styled(
            number,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
    ]));
    f.render_widget(subtitle, chunks[2]);

    let hint = Paragraph::new("b/Enter: back to sign in | q/Esc: quit")
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(hint, chunks[4]);
}

fn render_error_dialog(f: &mut Frame, app: &App) {
    let area = centered_rect(60, 30, f.area());
    f.render_widget(Clear, area);

    let mut text = vec![
        Line::from(Span::styled(
            "The phone number is not in the correct format.",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from("Please enter it again."),
    ];

    if let Some(ref message) = app.dialog_message {
        text.push(Line::from(""));
        text.push(Line::from(Span::styled(
            message.as_str(),
            Style::default().fg(Color::Gray),
        )));
    }

    text.push(Line::from(""));
    text.push(Line::from(Span::styled(
        "Press Enter or Esc to close",
        Style::default().fg(Color::Gray),
    )));

    let paragraph = Paragraph::new(text).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Error")
            .border_style(Style::default().fg(Color::Red)),
    );
    f.render_widget(paragraph, area);
}

fn render_success_dialog(f: &mut Frame) {
    let area = centered_rect(60, 30, f.area());
    f.render_widget(Clear, area);

    let text = vec![
        Line::from(Span::styled(
            "Signed in successfully!",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press Enter to continue",
            Style::default().fg(Color::Gray),
        )),
    ];

    let paragraph = Paragraph::new(text).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Notice")
            .border_style(Style::default().fg(Color::Green)),
    );
    f.render_widget(paragraph, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
