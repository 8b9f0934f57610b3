use maud::{DOCTYPE, Markup, PreEscaped, html};

use std::sync::OnceLock;

use numfmt::{Formatter, Precision};

// Page container
pub const PAGE_CONTAINER_STYLE: &str =
    "max-width: 1100px; margin: 0 auto; padding: 2rem 1.5rem; \
    font-family: system-ui, sans-serif; color: #111827;";

pub const CHART_GRID_STYLE: &str =
    "display: grid; grid-template-columns: repeat(auto-fit, minmax(420px, 1fr)); gap: 1rem;";

pub const CHART_CONTAINER_STYLE: &str =
    "min-height: 380px; border-radius: 0.25rem; background: #f3f4f6;";

pub const EMPTY_CHART_STYLE: &str = "min-height: 380px; border-radius: 0.25rem; \
    background: #f3f4f6; display: flex; align-items: center; justify-content: center; \
    color: #6b7280;";

/// The ECharts build the report pages load.
pub const ECHARTS_SCRIPT_URL: &str =
    "https://cdn.jsdelivr.net/npm/echarts@6.0.0/dist/echarts.min.js";

pub enum HeadElement {
    /// The file path or URL to a JavaScript script.
    ScriptLink(String),
    /// JavaScript source code.
    ScriptSource(PreEscaped<String>),
}

pub fn base(title: &str, head_elements: &[HeadElement], content: &Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en"
        {
            head
            {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - Money Manager" }

                @for element in head_elements
                {
                    @match element
                    {
                        HeadElement::ScriptSource(text) => script { (text) }
                        HeadElement::ScriptLink(path) => script src=(path) {}
                    }
                }
            }

            body style="margin: 0; background: #f9fafb;"
            {
                (content)
            }
        }
    }
}

/// Format `number` as dollars with two decimal places, e.g. "-$1,234.50".
pub fn format_currency(number: f64) -> String {
    static POSITIVE_FMT: OnceLock<Formatter> = OnceLock::new();

    let positive_fmt = POSITIVE_FMT.get_or_init(|| {
        Formatter::currency("$")
            .unwrap()
            .precision(Precision::Decimals(2))
    });

    static NEGATIVE_FMT: OnceLock<Formatter> = OnceLock::new();

    let negative_fmt = NEGATIVE_FMT.get_or_init(|| {
        Formatter::currency("-$")
            .unwrap()
            .precision(Precision::Decimals(2))
    });

    // numfmt truncates extra decimals and switches to scientific notation
    // below one cent.
    let number = (number * 100.0).round() / 100.0;

    let formatted_string = if number < 0.0 {
        negative_fmt.fmt_string(number.abs())
    } else if number > 0.0 {
        positive_fmt.fmt_string(number)
    } else {
        // Zero (including -0.0) is hardcoded as "0", so we must specify the
        // formatted string for zero
        return "$0.00".to_owned();
    };

    pad_cents(formatted_string)
}

/// numfmt drops trailing zeros, e.g. "12.30" is rendered as "12.3" and
/// "12.00" as "12.0", so pad the fraction back out to two digits.
fn pad_cents(mut formatted_string: String) -> String {
    let decimals = match formatted_string.rfind('.') {
        Some(point) => formatted_string.len() - point - 1,
        None => {
            formatted_string.push('.');
            0
        }
    };

    for _ in decimals..2 {
        formatted_string.push('0');
    }

    formatted_string
}
