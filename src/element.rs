//! Owned visual tree
//!
//! Charts render into a tree of [`Element`]s instead of a live document.
//! The tree can be queried with simple selectors (`#id`, `.class`, `tag`),
//! mutated by event handlers, and serialized to SVG/HTML markup.

use std::fmt::Write as _;

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// HTML elements that must be written with an explicit end tag.
const HTML_CONTAINERS: &[&str] = &["body", "div", "section", "span", "p"];

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Element {
    pub tag: String,
    attrs: Vec<(String, String)>,
    styles: Vec<(String, String)>,
    classes: Vec<String>,
    text: Option<String>,
    children: Vec<Element>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Default::default()
        }
    }

    pub fn attr(mut self, name: &str, value: impl ToString) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn style(mut self, name: &str, value: impl ToString) -> Self {
        self.set_style(name, value);
        self
    }

    pub fn class(mut self, class: &str) -> Self {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Appends `child` and returns a handle to it, mirroring selection `append`.
    pub fn append(&mut self, child: Element) -> &mut Element {
        self.children.push(child);
        let last = self.children.len() - 1;
        &mut self.children[last]
    }

    pub fn set_attr(&mut self, name: &str, value: impl ToString) {
        upsert(&mut self.attrs, name, value.to_string());
    }

    pub fn set_style(&mut self, name: &str, value: impl ToString) {
        upsert(&mut self.styles, name, value.to_string());
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = Some(text.into());
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        lookup(&self.attrs, name)
    }

    pub fn get_style(&self, name: &str) -> Option<&str> {
        lookup(&self.styles, name)
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn text_content(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    pub(crate) fn children_mut(&mut self) -> &mut [Element] {
        &mut self.children
    }

    pub fn id(&self) -> Option<&str> {
        self.get_attr("id")
    }

    /// Matches a single simple selector: `#id`, `.class` or a tag name.
    pub fn matches(&self, selector: &str) -> bool {
        let selector = selector.trim();
        if let Some(id) = selector.strip_prefix('#') {
            self.id() == Some(id)
        } else if let Some(class) = selector.strip_prefix('.') {
            self.has_class(class)
        } else {
            !selector.is_empty() && self.tag == selector
        }
    }

    /// First match in document order, including `self`.
    pub fn select(&self, selector: &str) -> Option<&Element> {
        if self.matches(selector) {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.select(selector))
    }

    pub fn select_mut(&mut self, selector: &str) -> Option<&mut Element> {
        if self.matches(selector) {
            return Some(self);
        }
        self.children.iter_mut().find_map(|c| c.select_mut(selector))
    }

    /// All matches in document order, including `self`.
    pub fn select_all(&self, selector: &str) -> Vec<&Element> {
        let mut out = Vec::new();
        self.collect(selector, &mut out);
        out
    }

    fn collect<'a>(&'a self, selector: &str, out: &mut Vec<&'a Element>) {
        if self.matches(selector) {
            out.push(self);
        }
        for c in &self.children {
            c.collect(selector, out);
        }
    }

    /// Applies `f` to every match in document order.
    pub fn for_each_mut(&mut self, selector: &str, f: &mut impl FnMut(&mut Element)) {
        if self.matches(selector) {
            f(self);
        }
        for c in &mut self.children {
            c.for_each_mut(selector, f);
        }
    }

    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        self.write_markup(&mut out);
        out
    }

    fn write_markup(&self, out: &mut String) {
        let _ = write!(out, "<{}", self.tag);
        if self.tag == "svg" && self.get_attr("xmlns").is_none() {
            let _ = write!(out, " xmlns=\"{}\"", SVG_NS);
        }
        for (name, value) in &self.attrs {
            let _ = write!(out, " {}=\"{}\"", name, escape(value));
        }
        if !self.classes.is_empty() {
            let _ = write!(out, " class=\"{}\"", escape(&self.classes.join(" ")));
        }
        if !self.styles.is_empty() {
            let style = self
                .styles
                .iter()
                .map(|(k, v)| format!("{k}:{v}"))
                .collect::<Vec<_>>()
                .join(";");
            let _ = write!(out, " style=\"{}\"", escape(&style));
        }

        let void = !HTML_CONTAINERS.contains(&self.tag.as_str());
        if void && self.text.is_none() && self.children.is_empty() {
            out.push_str("/>");
            return;
        }

        out.push('>');
        if let Some(text) = &self.text {
            out.push_str(&escape(text));
        }
        for c in &self.children {
            c.write_markup(out);
        }
        let _ = write!(out, "</{}>", self.tag);
    }
}

fn upsert(list: &mut Vec<(String, String)>, name: &str, value: String) {
    match list.iter_mut().find(|(k, _)| k == name) {
        Some(entry) => entry.1 = value,
        None => list.push((name.to_string(), value)),
    }
}

fn lookup<'a>(list: &'a [(String, String)], name: &str) -> Option<&'a str> {
    list.iter()
        .find(|(k, _)| k == name)
        .map(|(_, v)| v.as_str())
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selectors_match_id_class_and_tag() {
        let tree = Element::new("div")
            .attr("id", "root")
            .child(Element::new("rect").class("bar"))
            .child(Element::new("rect").class("bar").class("hot"));

        assert!(tree.select("#root").is_some());
        assert_eq!(tree.select_all(".bar").len(), 2);
        assert_eq!(tree.select_all("rect").len(), 2);
        assert_eq!(tree.select_all(".hot").len(), 1);
        assert!(tree.select("#missing").is_none());
        assert!(tree.select("").is_none());
    }

    #[test]
    fn markup_escapes_and_self_closes() {
        let el = Element::new("g")
            .child(Element::new("text").text("A & <B>"))
            .child(Element::new("line").attr("x1", 1).style("stroke", "#999"));

        assert_eq!(
            el.to_markup(),
            "<g><text>A &amp; &lt;B&gt;</text><line x1=\"1\" style=\"stroke:#999\"/></g>"
        );
    }

    #[test]
    fn set_attr_overwrites_in_place() {
        let mut el = Element::new("rect").attr("fill", "red").attr("x", 1);
        el.set_attr("fill", "blue");
        assert_eq!(el.get_attr("fill"), Some("blue"));
        assert_eq!(el.to_markup(), "<rect fill=\"blue\" x=\"1\"/>");
    }
}
