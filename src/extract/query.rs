use scraper::Selector;

/// A tag lookup: element type plus attribute-equality constraints
///
/// `class` constraints match each whitespace-separated class independently, so
/// `class("A B")` finds `<div class="A B">` as well as `<div class="B A C">`.
/// Every other attribute must equal the given value exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagQuery {
    tag: String,
    attrs: Vec<(String, String)>,
}

impl TagQuery {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            attrs: Vec::new(),
        }
    }

    pub fn attr(mut self, name: &str, value: &str) -> Self {
        self.attrs.push((name.to_string(), value.to_string()));
        self
    }

    pub fn class(self, classes: &str) -> Self {
        self.attr("class", classes)
    }

    /// Renders the lookup as a CSS selector
    pub fn to_css(&self) -> String {
        let mut css = self.tag.clone();
        for (name, value) in &self.attrs {
            if name == "class" {
                for class in value.split_whitespace() {
                    css.push_str(&format!("[class~=\"{}\"]", escape(class)));
                }
            } else {
                css.push_str(&format!("[{}=\"{}\"]", name, escape(value)));
            }
        }
        css
    }

    /// Compiled selector, `None` if the lookup cannot be expressed
    pub fn selector(&self) -> Option<Selector> {
        let css = self.to_css();
        let selector = match Selector::parse(&css) {
            Ok(selector) => Some(selector),
            Err(e) => {
                tracing::debug!("Unusable selector '{}': {:?}", css, e);
                None
            }
        };
        selector
    }
}

fn escape(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
