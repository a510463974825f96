//! Text access over a parsed HTML document.

use scraper::{ElementRef, Html, Node};

/// Elements whose text content is never rendered as page text.
const NON_VISIBLE_ELEMENTS: [&str; 4] = ["script", "style", "noscript", "template"];

fn is_hidden_container(node: &Node) -> bool {
    node.as_element()
        .is_some_and(|e| NON_VISIBLE_ELEMENTS.contains(&e.name()))
}

/// Collects the non-blank visible text nodes under `element`, in document order.
fn visible_text_nodes<'a>(element: ElementRef<'a>) -> Vec<&'a str> {
    element
        .descendants()
        .filter_map(|node| {
            let text = node.value().as_text()?;
            if node.ancestors().any(|a| is_hidden_container(a.value())) {
                return None;
            }
            let text: &str = text;
            (!text.trim().is_empty()).then_some(text)
        })
        .collect()
}

/// Every visible text node of the document.
#[must_use]
pub fn text_nodes(document: &Html) -> Vec<&str> {
    visible_text_nodes(document.root_element())
}

/// The visible text of the document, one space between text nodes.
#[must_use]
pub fn visible_text(document: &Html) -> String {
    text_nodes(document)
        .into_iter()
        .map(str::trim)
        .collect::<Vec<_>>()
        .join(" ")
}

/// The visible text of a single element, one space between text nodes.
///
/// A node that starts with a decimal or thousands separator is glued to the
/// previous one, so markup such as `49<small>,90</small>` reads as `49,90`
/// while `<span>2</span><span>49,90</span>` stays `2 49,90`.
#[must_use]
pub fn element_text(element: ElementRef<'_>) -> String {
    let mut text = String::new();
    for node in visible_text_nodes(element) {
        let node = node.trim();
        if !text.is_empty() && !node.starts_with([',', '.']) {
            text.push(' ');
        }
        text.push_str(node);
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visible_text_skips_scripts_and_styles() {
        let html = Html::parse_document(
            "<html><head><style>.a{color:red}</style><script>var atacado = 1;</script></head>\
             <body><p>Moda</p><p>Varejo</p><noscript>ative o javascript</noscript></body></html>",
        );
        assert_eq!(visible_text(&html), "Moda Varejo");
    }

    #[test]
    fn text_nodes_skip_blank_nodes() {
        let html = Html::parse_document("<body><div>  </div><span>R$ 10,00</span></body>");
        assert_eq!(text_nodes(&html), vec!["R$ 10,00"]);
    }

    #[test]
    fn element_text_concatenates_split_markup() {
        let html = Html::parse_document(
            r#"<body><span class="price">49<small>,90</small></span></body>"#,
        );
        let selector = scraper::Selector::parse(".price").unwrap();
        let element = html.select(&selector).next().unwrap();
        assert_eq!(element_text(element), "49,90");
    }

    #[test]
    fn element_text_keeps_separate_numbers_apart() {
        let html = Html::parse_document(
            r#"<body><div class="price-box"><span class="qty">2</span><span class="value">49,90</span></div></body>"#,
        );
        let selector = scraper::Selector::parse(".price-box").unwrap();
        let element = html.select(&selector).next().unwrap();
        assert_eq!(element_text(element), "2 49,90");
    }
}
