use crate::application::{App, AppMode, LoadStatus};
use crate::domain::Product;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Frame,
};

pub fn render_ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(26), Constraint::Min(0)])
        .split(chunks[2]);

    render_header(f, app, chunks[0]);
    render_search_bar(f, app, chunks[1]);
    render_categories(f, app, body[0]);
    render_products(f, app, body[1]);
    render_status_bar(f, app, chunks[3]);

    if app.mode == AppMode::Help {
        render_help_popup(f, app.help_scroll);
    }
}

/// Capitalises the first letter of a category label for display.
pub fn display_category(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let header = Paragraph::new(format!(
        "storefront | Showing {} of {} | Sort: {}",
        app.rendered().len(),
        app.view.len(),
        app.sort.label()
    ))
    .style(Style::default().fg(Color::Cyan));
    f.render_widget(header, area);
}

fn render_search_bar(f: &mut Frame, app: &App, area: Rect) {
    let (text, style) = if app.mode == AppMode::Search {
        (app.search_input.as_str(), Style::default().fg(Color::Green))
    } else {
        (app.filter.query.as_str(), Style::default())
    };

    let search = Paragraph::new(text)
        .block(Block::default().borders(Borders::ALL).title("Search"))
        .style(style);
    f.render_widget(search, area);

    if app.mode == AppMode::Search {
        // Clamp to the last column inside the borders
        let typed = app.search_input[..app.cursor_position].chars().count();
        let offset = u16::try_from(typed)
            .unwrap_or(u16::MAX)
            .min(area.width.saturating_sub(3));
        f.set_cursor_position((
            area.x.saturating_add(1).saturating_add(offset),
            area.y.saturating_add(1),
        ));
    }
}

fn render_categories(f: &mut Frame, app: &App, area: Rect) {
    let selecting = app.mode == AppMode::Category;
    let items: Vec<ListItem> = app
        .catalog
        .categories()
        .iter()
        .enumerate()
        .map(|(index, label)| {
            let checked = app.filter.category.as_deref() == Some(label.as_str());
            let mark = if checked { "[x]" } else { "[ ]" };
            let style = if selecting && index == app.category_index {
                Style::default().bg(Color::LightBlue).fg(Color::Black)
            } else if checked {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default()
            };
            ListItem::new(format!("{} {}", mark, display_category(label))).style(style)
        })
        .collect();

    let border_style = if selecting {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    };
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Categories")
            .border_style(border_style),
    );
    f.render_widget(list, area);
}

fn render_products(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title("Products");

    let message = match &app.status {
        LoadStatus::Loading => Some(("Loading products...".to_string(), Color::Yellow)),
        LoadStatus::Failed(error) => Some((error.clone(), Color::Red)),
        LoadStatus::Ready if app.view.is_empty() => {
            Some(("No products match".to_string(), Color::DarkGray))
        }
        LoadStatus::Ready => None,
    };
    if let Some((text, color)) = message {
        let paragraph = Paragraph::new(text)
            .block(block)
            .style(Style::default().fg(color));
        f.render_widget(paragraph, area);
        return;
    }

    let lines: Vec<Line> = app
        .rendered()
        .iter()
        .skip(app.product_scroll)
        .flat_map(product_card)
        .collect();

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn product_card(product: &Product) -> Vec<Line<'static>> {
    let mut heading = vec![
        Span::styled(
            product.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(product.display_price(), Style::default().fg(Color::Green)),
        Span::raw("  "),
        Span::styled(
            display_category(&product.category),
            Style::default().fg(Color::Yellow),
        ),
    ];
    if let Some(rating) = &product.rating {
        heading.push(Span::styled(
            format!("  ★ {:.1} ({})", rating.rate, rating.count),
            Style::default().fg(Color::Magenta),
        ));
    }

    vec![
        Line::from(heading),
        Line::from(product.description.clone()),
        Line::from(Span::styled(
            product.image.clone(),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
    ]
}

fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let status_text = match app.mode {
        AppMode::Normal => {
            if let Some(ref status) = app.status_message {
                status.clone()
            } else if app.show_load_more() {
                "m/Enter: load more | /: search | c: categories | s: sort | ?: help | q: quit".to_string()
            } else {
                "/: search | c: categories | s: sort | ?: help | q: quit".to_string()
            }
        }
        AppMode::Search => "Type to search (Enter to keep, Esc to cancel)".to_string(),
        AppMode::Category => "↑↓/jk: move | Space/Enter: toggle | x: show all | Esc: done".to_string(),
        AppMode::Help => "↑↓/jk: scroll | Home: top | Esc/q: close help".to_string(),
    };

    let status = Paragraph::new(status_text)
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(match app.mode {
            AppMode::Normal => Style::default(),
            AppMode::Search => Style::default().fg(Color::Green),
            AppMode::Category => Style::default().fg(Color::Yellow),
            AppMode::Help => Style::default().fg(Color::Cyan),
        });
    f.render_widget(status, area);
}

fn render_help_popup(f: &mut Frame, scroll: usize) {
    let area = f.area();
    let popup_area = Rect {
        x: area.width / 10,
        y: area.height / 10,
        width: area.width * 4 / 5,
        height: area.height * 4 / 5,
    };

    f.render_widget(Clear, popup_area);

    let help_lines: Vec<&str> = HELP_TEXT.lines().collect();
    let visible_height = popup_area.height.saturating_sub(2) as usize;

    let start_line = scroll.min(help_lines.len().saturating_sub(visible_height));
    let end_line = (start_line + visible_height).min(help_lines.len());

    let visible_text = help_lines[start_line..end_line].join("\n");

    let help_widget = Paragraph::new(visible_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("storefront Help")
                .style(Style::default().fg(Color::Cyan)),
        )
        .style(Style::default().fg(Color::White));

    f.render_widget(help_widget, popup_area);
}

const HELP_TEXT: &str = r#"STOREFRONT KEY BINDINGS

=== BROWSING ===
m / Enter / Space   Load the next 10 products
↑↓ or k/j           Scroll the product list
q                   Quit

=== SEARCH ===
/ or Ctrl+F         Search titles, descriptions and categories
                    The list updates as you type
Enter               Keep the query
Esc                 Restore the previous query

=== CATEGORIES ===
c                   Open the category selector
↑↓ or k/j           Move the highlight
Space / Enter       Select the category, again to show all
x                   Show all categories

=== SORTING ===
s                   Cycle default / low to high / high to low
a                   Price: low to high
d                   Price: high to low
n                   Default order

=== HELP ===
? or F1             Show this help
Esc / q             Close this help"#;
