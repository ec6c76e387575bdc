use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::command::CommandSpec;
use crate::contact::{ContactField, ContactForm};
use crate::transition::{OverlayFrame, TransitionPhase};

use super::chrome::ACCENT;
use super::layout::centered_rect;

const CURTAIN: Color = Color::Rgb(10, 10, 10);

/// Rows covered by each curtain half at the given coverage.
pub(crate) fn curtain_rows(height: u16, coverage: f32) -> (u16, u16) {
    let coverage = coverage.clamp(0.0, 1.0);
    let covered = (f32::from(height) * coverage).ceil() as u16;
    let covered = covered.min(height);
    let top = covered.div_ceil(2);
    (top, covered - top)
}

/// Two panels close in from the top and bottom edges while covering and
/// open again while revealing. The destination name sits in the seam.
pub fn draw_transition_overlay(
    frame: &mut Frame<'_>,
    area: Rect,
    overlay: OverlayFrame,
    page_name: &str,
) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let (top_rows, bottom_rows) = curtain_rows(area.height, overlay.coverage);
    let curtain = Block::default().style(Style::default().bg(CURTAIN));
    if top_rows > 0 {
        let top = Rect::new(area.x, area.y, area.width, top_rows);
        frame.render_widget(Clear, top);
        frame.render_widget(curtain.clone(), top);
    }
    if bottom_rows > 0 {
        let bottom = Rect::new(
            area.x,
            area.y + area.height - bottom_rows,
            area.width,
            bottom_rows,
        );
        frame.render_widget(Clear, bottom);
        frame.render_widget(curtain, bottom);
    }

    let show_name = overlay.phase == TransitionPhase::Committing || overlay.coverage >= 0.9;
    if show_name && !page_name.is_empty() {
        let row = Rect::new(area.x, area.y + area.height / 2, area.width, 1);
        let label = Paragraph::new(page_name)
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .bg(CURTAIN)
                    .fg(ACCENT)
                    .add_modifier(Modifier::BOLD),
            );
        frame.render_widget(label, row);
    }
}

pub fn draw_prompt_overlay(
    frame: &mut Frame<'_>,
    area: Rect,
    input: &str,
    cursor: usize,
    hints: &[CommandSpec],
) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let popup_width = area.width.min(64);
    let popup_height = area.height.clamp(3, 12);
    let popup = centered_rect(area, popup_width, popup_height);
    frame.render_widget(Clear, popup);

    let block = Block::default()
        .title(" Command ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // input
            Constraint::Length(1), // separator
            Constraint::Min(0),    // hints
        ])
        .split(inner);

    let input_line = build_input_line(":", input, cursor, usize::from(chunks[0].width));
    frame.render_widget(Paragraph::new(input_line), chunks[0]);

    let sep_style = Style::default().fg(Color::DarkGray);
    frame.render_widget(
        Paragraph::new("─".repeat(usize::from(inner.width))).style(sep_style),
        chunks[1],
    );

    let typed = input.split_whitespace().next().unwrap_or("");
    let lines: Vec<Line<'_>> = hints
        .iter()
        .filter(|spec| spec.id.starts_with(typed))
        .take(usize::from(chunks[2].height))
        .map(|spec| {
            Line::from(vec![
                Span::raw("   "),
                Span::raw(spec.usage),
                Span::raw("  "),
                Span::styled(spec.title, Style::default().fg(Color::DarkGray)),
            ])
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), chunks[2]);
}

pub fn draw_contact_overlay(
    frame: &mut Frame<'_>,
    area: Rect,
    form: &ContactForm,
    recipient: &str,
) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let popup_width = area.width.min(72);
    let popup_height = area.height.min(11);
    let popup = centered_rect(area, popup_width, popup_height);
    frame.render_widget(Clear, popup);

    let title = if form.is_submitting() {
        " Sending... ".to_string()
    } else {
        format!(" Message to {recipient} ")
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ACCENT));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let width = usize::from(inner.width);
    let mut lines = Vec::new();
    for field in ContactField::ORDER {
        let focused = form.focused() == field && !form.is_submitting();
        let label_style = if focused {
            Style::default().fg(ACCENT)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        lines.push(Line::styled(field.label().to_uppercase(), label_style));
        if focused {
            lines.push(build_input_line(
                "",
                form.value(field),
                form.cursor(field),
                width,
            ));
        } else {
            lines.push(Line::raw(form.value(field).to_string()));
        }
        lines.push(Line::raw(""));
    }
    lines.push(Line::styled(
        "tab next field · enter on message sends · esc close",
        Style::default().fg(Color::DarkGray),
    ));
    frame.render_widget(Paragraph::new(lines), inner);
}

pub fn draw_cursor(frame: &mut Frame<'_>, area: Rect, cell: (u16, u16), glyph: &str) {
    let (column, row) = cell;
    if column < area.x
        || row < area.y
        || column >= area.x.saturating_add(area.width)
        || row >= area.y.saturating_add(area.height)
    {
        return;
    }
    frame.render_widget(
        Paragraph::new(glyph).style(Style::default().fg(ACCENT)),
        Rect::new(column, row, 1, 1),
    );
}

/// Single-line text field with a software caret, scrolled horizontally so
/// the caret stays visible.
fn build_input_line(prefix: &str, input: &str, cursor: usize, width: usize) -> Line<'static> {
    let mut spans = vec![
        Span::raw(" ".to_string()),
        Span::styled(prefix.to_string(), Style::default().fg(Color::White)),
    ];
    let prefix_width = 1 + prefix.chars().count();
    let max_text_width = width.saturating_sub(prefix_width);

    let chars: Vec<char> = input.chars().collect();
    let char_count = chars.len();
    let cursor = cursor.min(char_count);

    let start = if max_text_width == 0 {
        char_count
    } else if cursor >= max_text_width {
        cursor
            .saturating_sub(max_text_width.saturating_sub(1))
            .min(char_count)
    } else {
        0
    };

    let text_width = max_text_width.max(1);
    let end = (start + text_width).min(char_count);
    let mut visible: Vec<char> = chars[start..end].to_vec();
    if visible.len() < text_width {
        visible.extend(std::iter::repeat_n(' ', text_width - visible.len()));
    }

    let caret_idx = cursor
        .saturating_sub(start)
        .min(text_width.saturating_sub(1));

    for (idx, ch) in visible.into_iter().enumerate() {
        if idx == caret_idx {
            spans.push(Span::styled(
                ch.to_string(),
                Style::default().add_modifier(Modifier::REVERSED),
            ));
        } else {
            spans.push(Span::raw(ch.to_string()));
        }
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::layout::Rect;
    use ratatui::style::Modifier;

    use super::{
        build_input_line, curtain_rows, draw_contact_overlay, draw_prompt_overlay,
        draw_transition_overlay,
    };
    use crate::command::all_command_specs;
    use crate::contact::{ContactField, ContactForm};
    use crate::transition::{OverlayFrame, TransitionPhase};

    #[test]
    fn curtain_rows_split_coverage_between_halves() {
        assert_eq!(curtain_rows(20, 0.0), (0, 0));
        assert_eq!(curtain_rows(20, 0.5), (5, 5));
        assert_eq!(curtain_rows(21, 1.0), (11, 10));
        assert_eq!(curtain_rows(10, 3.0), (5, 5));
    }

    #[test]
    fn input_line_highlights_caret_on_character() {
        let line = build_input_line(":", "abc", 1, 12);
        assert_eq!(line.spans[3].content.as_ref(), "b");
        assert!(
            line.spans[3]
                .style
                .add_modifier
                .contains(Modifier::REVERSED)
        );
    }

    #[test]
    fn input_line_highlights_trailing_space_at_end_cursor() {
        let line = build_input_line(":", "abc", 3, 12);
        assert_eq!(line.spans[5].content.as_ref(), " ");
        assert!(
            line.spans[5]
                .style
                .add_modifier
                .contains(Modifier::REVERSED)
        );
    }

    #[test]
    fn full_cover_shows_destination_name() {
        let mut terminal =
            Terminal::new(TestBackend::new(30, 9)).expect("test terminal should initialize");
        terminal
            .draw(|frame| {
                draw_transition_overlay(
                    frame,
                    Rect::new(0, 0, 30, 9),
                    OverlayFrame {
                        generation: 1,
                        phase: TransitionPhase::Committing,
                        coverage: 1.0,
                    },
                    "Work",
                );
            })
            .expect("draw should pass");

        let buffer = terminal.backend().buffer();
        let middle: String = (0..30)
            .map(|x| buffer[(x, 4)].symbol().to_string())
            .collect();
        assert_eq!(middle.trim(), "Work");
    }

    #[test]
    fn overlays_handle_tiny_and_multibyte_input_without_panic() {
        let mut terminal =
            Terminal::new(TestBackend::new(12, 4)).expect("test terminal should initialize");
        let mut form = ContactForm::default();
        form.set_value(ContactField::Name, "あい");
        terminal
            .draw(|frame| {
                let area = Rect::new(0, 0, 12, 4);
                draw_prompt_overlay(frame, area, "あい", 1, all_command_specs());
                draw_contact_overlay(frame, area, &form, "someone@example.com");
                draw_transition_overlay(
                    frame,
                    area,
                    OverlayFrame {
                        generation: 2,
                        phase: TransitionPhase::Covering,
                        coverage: 0.3,
                    },
                    "Project",
                );
            })
            .expect("draw should pass");
    }
}
