//! HTML rendering of the order page.
//!
//! The page exposes one region per order field (`#deliver-to`, `#cake-type`,
//! `#fillings`) whose text is exactly the field value, plus one form per
//! field group.

use crate::domain::order::{MenuOption, Order, CAKE_TYPES, FILLINGS};

/// Render the full order page. `error` is shown above the forms when set.
pub fn render_order_page(order: &Order, error: Option<&str>) -> String {
    let mut html = String::with_capacity(2048);

    html.push_str(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n\
         <meta charset=\"utf-8\">\n<title>Cake order</title>\n</head>\n<body>\n\
         <h1>Cake order</h1>\n",
    );

    if let Some(message) = error {
        html.push_str(&format!(
            "<p id=\"error\" class=\"error\">{}</p>\n",
            escape(message)
        ));
    }

    html.push_str("<section id=\"order\">\n");
    region(&mut html, "Deliver to", "deliver-to", order.name_text());
    region(&mut html, "Cake type", "cake-type", order.cake_type_text());
    region(&mut html, "Fillings", "fillings", &order.fillings_text());
    html.push_str("</section>\n");

    html.push_str(
        "<form action=\"/name\" method=\"post\">\n\
         <label for=\"name\">Name</label>\n\
         <input id=\"name\" name=\"name\" type=\"text\">\n\
         <button id=\"submit-name\" type=\"submit\">Submit name</button>\n\
         </form>\n",
    );

    html.push_str("<form action=\"/cake-type\" method=\"post\">\n");
    for option in CAKE_TYPES {
        let checked = order.cake_type.as_deref() == Some(option.label);
        choice(&mut html, "radio", "cakeType", option, checked);
    }
    html.push_str(
        "<button id=\"submit-cake-type\" type=\"submit\">Submit cake type</button>\n</form>\n",
    );

    html.push_str("<form action=\"/fillings\" method=\"post\">\n");
    for option in FILLINGS {
        let checked = order.fillings.iter().any(|f| f == option.label);
        choice(&mut html, "checkbox", "fillings", option, checked);
    }
    html.push_str(
        "<button id=\"submit-fillings\" type=\"submit\">Submit fillings</button>\n</form>\n",
    );

    html.push_str("</body>\n</html>\n");
    html
}

fn region(html: &mut String, title: &str, id: &str, text: &str) {
    html.push_str(&format!(
        "<p>{}: <span id=\"{}\">{}</span></p>\n",
        title,
        id,
        escape(text)
    ));
}

fn choice(html: &mut String, kind: &str, name: &str, option: &MenuOption, checked: bool) {
    html.push_str(&format!(
        "<label><input id=\"{id}\" type=\"{kind}\" name=\"{name}\" value=\"{value}\"{checked}> {value}</label>\n",
        id = option.id,
        value = escape(option.label),
        checked = if checked { " checked" } else { "" },
    ));
}

/// Escape text for use in element content and quoted attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
