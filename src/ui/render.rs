use crate::lexer::{Token, TokenCategory};
use crate::ui::theme::colors;
use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Width of the category column: the longest label plus a gap.
const LABEL_WIDTH: usize = 20;

/// Shortens `text` to at most `width` terminal cells, ending in `…` when cut.
/// A width of zero means no limit.
pub fn truncate_to_width(text: &str, width: usize) -> String {
    if width == 0 || UnicodeWidthStr::width(text) <= width {
        return text.to_string();
    }

    let mut used = 0;
    let mut out = String::new();
    for grapheme in text.graphemes(true) {
        let w = UnicodeWidthStr::width(grapheme);
        if used + w > width - 1 {
            break;
        }
        used += w;
        out.push_str(grapheme);
    }
    out.push('…');
    out
}

fn token_line(token: &Token, value_width: usize) -> Line<'static> {
    let label = format!("{:<width$}", token.category.label(), width = LABEL_WIDTH);
    Line::from(vec![
        Span::styled(label, Style::default().fg(colors::category(token.category))),
        Span::styled(
            truncate_to_width(&token.text, value_width),
            Style::default().fg(colors::text()),
        ),
    ])
}

pub fn render_token_table(
    tokens: &[Token],
    value_width: usize,
    title: &str,
) -> Paragraph<'static> {
    let lines: Vec<Line> = if tokens.is_empty() {
        vec![Line::styled(
            "No tokens",
            Style::default().fg(colors::dimmed()),
        )]
    } else {
        tokens.iter().map(|t| token_line(t, value_width)).collect()
    };

    Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title.to_string()),
        )
        .style(Style::default().bg(colors::background()))
}

pub fn render_input_line(input: &str) -> Paragraph<'static> {
    let line = Line::from(vec![
        Span::styled(
            "› ",
            Style::default()
                .fg(colors::accent())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(input.to_string(), Style::default().fg(colors::text())),
    ]);

    Paragraph::new(line)
        .block(Block::default().borders(Borders::ALL).title("Source"))
        .style(Style::default().bg(colors::background()))
}

/// Echo of the classified text on one line; line breaks are shown as `↵`.
pub fn render_echo(input_text: Option<&str>) -> Line<'static> {
    match input_text {
        Some(text) => {
            let flat: String = text
                .chars()
                .map(|c| match c {
                    '\n' => '↵',
                    '\r' | '\t' => ' ',
                    c => c,
                })
                .collect();
            Line::from(vec![
                Span::styled("Input text: ", Style::default().fg(colors::dimmed())),
                Span::styled(flat, Style::default().fg(colors::text())),
            ])
        }
        None => Line::from(""),
    }
}

pub fn render_dropped(dropped: &[String]) -> Paragraph<'static> {
    let text = if dropped.is_empty() {
        String::new()
    } else {
        format!("Unrecognized: {}", dropped.join(" "))
    };

    Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(colors::dimmed()).bg(colors::background()))
}

pub fn render_summary(summary: &[(TokenCategory, usize)]) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, (category, count)) in summary.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  ", Style::default()));
        }
        spans.push(Span::styled(
            format!("{} {}", category.label(), count),
            Style::default().fg(colors::category(*category)),
        ));
    }

    Line::from(spans).alignment(Alignment::Left)
}

pub fn render_status(origin: Option<&str>, warning: Option<&str>) -> Line<'static> {
    match (warning, origin) {
        (Some(warning), _) => Line::styled(
            warning.to_string(),
            Style::default().fg(colors::warning()),
        ),
        (None, Some(origin)) => Line::styled(
            format!("Classified {}", origin),
            Style::default().fg(colors::dimmed()),
        ),
        (None, None) => Line::styled(
            "Type source text and press Enter, :h for help",
            Style::default().fg(colors::dimmed()),
        ),
    }
}

pub fn render_help() -> Paragraph<'static> {
    let lines = vec![
        Line::from("<text>      classify the typed fragments"),
        Line::from("@<path>     load and classify a source file"),
        Line::from("@@          classify the clipboard contents"),
        Line::from(":h :help    show this help"),
        Line::from(":q :quit    quit"),
        Line::from(""),
        Line::from("Up/Down scroll tokens, Ctrl-P/Ctrl-N recall earlier inputs"),
        Line::from("Esc clears the input or closes help"),
    ];

    Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Help"))
        .style(Style::default().fg(colors::text()).bg(colors::background()))
}
