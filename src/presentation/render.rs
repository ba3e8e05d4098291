use super::{PriceSection, ResultView, Session, ViewState};

/// Render the session as plain text for the terminal.
pub fn render_session(session: &Session) -> String {
    let text = session.translations();
    let mut output = format!("{}\n{}\n\n", text.main_title, text.main_subtitle);

    match session.state() {
        ViewState::Idle => output.push_str(&format!("{}\n", text.topic_placeholder)),
        ViewState::Loading => output.push_str(&format!("{}\n", text.loading_text)),
        ViewState::Error(message) => output.push_str(&format!("Error: {message}\n")),
        ViewState::Result(view) => output.push_str(&render_result(view, session)),
    }

    output.push_str(&format!("\n{}", text.footer_text));
    output
}

fn render_result(view: &ResultView, session: &Session) -> String {
    let text = session.translations();

    let mut output = format!("{}:\n", text.pros_title);
    for item in &view.pros {
        output.push_str(&format!("  + {item}\n"));
    }

    output.push_str(&format!("\n{}:\n", text.cons_title));
    for item in &view.cons {
        output.push_str(&format!("  - {item}\n"));
    }

    if let Some(prices) = &view.price_section {
        output.push_str(&render_prices(prices, session));
    }
    output
}

fn render_prices(prices: &PriceSection, session: &Session) -> String {
    let text = session.translations();
    let width = prices
        .comparisons
        .iter()
        .map(|c| c.store.chars().count())
        .max()
        .unwrap_or(0);

    let rows = prices
        .comparisons
        .iter()
        .map(|c| format!("  {:<width$}  {}", c.store, c.price, width = width))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "\n{}:\n{}\n{}\n{}: {}\n",
        text.compare_title, rows, text.compare_footer, text.shopping_link_text, prices.shopping_link
    )
}
