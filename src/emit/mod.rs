use crate::error::EmitError;
use crate::graph::{ActionLabel, BrdGraph, GraphEdge, GraphNode, Matcher};
use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use std::io;

mod settings;

pub use settings::GraphSettings;

/// The declaration line every BRD document starts with.
pub const XML_DECLARATION: &str = r#"<?xml version="1.0" standalone="yes"?>"#;

const INDENT_WIDTH: usize = 4;
const NOTE_PROPERTY_SET: &str = "NotePropertySet";
const CORRECT_ACTION: &str = "Correct Action";

/// Serializes a `BrdGraph` into the BRD XML dialect.
///
/// Output layout: the declaration line, then a `stateGraph` root holding the
/// start messages, every node, every edge and an empty `EdgesGroups` element.
/// Indentation is four spaces and elements holding only text stay on one line.
#[derive(Debug, Clone, Default)]
pub struct DocumentEmitter {
    settings: GraphSettings,
}

impl DocumentEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: GraphSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &GraphSettings {
        &self.settings
    }

    pub fn emit(&self, graph: &BrdGraph) -> Result<String, EmitError> {
        let mut buffer = Vec::new();
        buffer.extend_from_slice(XML_DECLARATION.as_bytes());
        buffer.push(b'\n');

        let mut xml = XmlOut {
            writer: Writer::new_with_indent(buffer, b' ', INDENT_WIDTH),
        };

        let attributes = self.settings.attributes();
        let root_attributes: Vec<(&str, &str)> = attributes
            .iter()
            .map(|(name, value)| (*name, value.as_str()))
            .collect();
        xml.open("stateGraph", &root_attributes)?;
        write_start_messages(&mut xml)?;
        for node in &graph.nodes {
            write_node(&mut xml, node)?;
        }
        for edge in &graph.edges {
            write_edge(&mut xml, edge)?;
        }
        xml.empty("EdgesGroups", &[("ordered", "false")])?;
        xml.close("stateGraph")?;

        let mut bytes = xml.writer.into_inner();
        bytes.push(b'\n');
        Ok(String::from_utf8(bytes)?)
    }
}

fn write_start_messages(xml: &mut XmlOut) -> io::Result<()> {
    xml.open("startNodeMessages", &[])?;

    xml.open("message", &[])?;
    xml.text("verb", NOTE_PROPERTY_SET)?;
    xml.open("properties", &[])?;
    xml.text("MessageType", "StartProblem")?;
    xml.text("ProblemName", "empty")?;
    xml.close("properties")?;
    xml.close("message")?;

    xml.open("message", &[])?;
    xml.text("verb", NOTE_PROPERTY_SET)?;
    xml.open("properties", &[])?;
    xml.text("MessageType", "StartStateEnd")?;
    xml.close("properties")?;
    xml.close("message")?;

    xml.close("startNodeMessages")
}

fn write_node(xml: &mut XmlOut, node: &GraphNode) -> io::Result<()> {
    xml.open("node", &[("locked", "false"), ("doneState", "false")])?;
    xml.text("text", &node.label)?;
    xml.text("uniqueID", &node.id.to_string())?;
    xml.open("dimension", &[])?;
    xml.text("x", &node.position.x.to_string())?;
    xml.text("y", &node.position.y.to_string())?;
    xml.close("dimension")?;
    xml.close("node")
}

fn write_edge(xml: &mut XmlOut, edge: &GraphEdge) -> io::Result<()> {
    xml.open("edge", &[])?;
    write_action_label(xml, &edge.label)?;
    xml.text("preCheckedStatus", "No-Applicable")?;
    xml.open("rule", &[])?;
    xml.text("text", "unnamed")?;
    xml.text("indicator", "-1")?;
    xml.close("rule")?;
    xml.text("sourceID", &edge.source_id.to_string())?;
    xml.text("destID", &edge.dest_id.to_string())?;
    xml.text("traversalCount", "0")?;
    xml.close("edge")
}

fn write_action_label(xml: &mut XmlOut, label: &ActionLabel) -> io::Result<()> {
    xml.open(
        "actionLabel",
        &[
            ("preferPathMark", "true"),
            ("minTraversals", "1"),
            ("maxTraversals", "1"),
        ],
    )?;
    xml.empty("studentHintRequest", &[])?;
    xml.empty("stepSuccessfulCompletion", &[])?;
    xml.empty("stepStudentError", &[])?;
    xml.text("uniqueID", &label.unique_id.to_string())?;

    xml.open("message", &[])?;
    xml.text("verb", NOTE_PROPERTY_SET)?;
    xml.open("properties", &[])?;
    xml.text("MessageType", "InterfaceAction")?;
    xml.text("transaction_id", &label.transaction_id.to_string())?;
    xml.wrapped_value("Selection", &label.selection)?;
    xml.wrapped_value("Action", &label.action)?;
    xml.wrapped_value("Input", &label.input)?;
    xml.close("properties")?;
    xml.close("message")?;

    xml.empty("buggyMessage", &[])?;
    xml.empty("successMessage", &[])?;
    xml.text("hintMessage", &label.hint_message)?;
    xml.empty("callbackFn", &[])?;
    xml.text("actionType", CORRECT_ACTION)?;
    xml.text("oldActionType", CORRECT_ACTION)?;
    xml.text("checkedStatus", "Never Checked")?;

    xml.open("matchers", &[("Concatenation", "true")])?;
    write_matcher(xml, "Selection", &label.matchers.selection)?;
    write_matcher(xml, "Action", &label.matchers.action)?;
    write_matcher(xml, "Input", &label.matchers.input)?;
    xml.text_with("Actor", &[("linkTriggered", "false")], &label.actor)?;
    xml.close("matchers")?;

    xml.close("actionLabel")
}

fn write_matcher(xml: &mut XmlOut, slot: &str, matcher: &Matcher) -> io::Result<()> {
    xml.open(slot, &[])?;
    xml.open("matcher", &[])?;
    xml.text("matcherType", &matcher.kind.to_string())?;
    xml.text_with("matcherParameter", &[("name", "single")], &matcher.value)?;
    xml.close("matcher")?;
    xml.close(slot)
}

/// Thin element-level helpers over the indenting writer.
struct XmlOut {
    writer: Writer<Vec<u8>>,
}

impl XmlOut {
    fn open(&mut self, name: &str, attributes: &[(&str, &str)]) -> io::Result<()> {
        let start = BytesStart::new(name).with_attributes(attributes.iter().copied());
        self.writer.write_event(Event::Start(start))
    }

    fn close(&mut self, name: &str) -> io::Result<()> {
        self.writer.write_event(Event::End(BytesEnd::new(name)))
    }

    fn empty(&mut self, name: &str, attributes: &[(&str, &str)]) -> io::Result<()> {
        let start = BytesStart::new(name).with_attributes(attributes.iter().copied());
        self.writer.write_event(Event::Empty(start))
    }

    fn text(&mut self, name: &str, content: &str) -> io::Result<()> {
        self.text_with(name, &[], content)
    }

    /// Writes `<name attrs>content</name>` on a single line, or `<name attrs/>` for empty content.
    fn text_with(
        &mut self,
        name: &str,
        attributes: &[(&str, &str)],
        content: &str,
    ) -> io::Result<()> {
        if content.is_empty() {
            return self.empty(name, attributes);
        }
        self.open(name, attributes)?;
        let escaped = escape_text(content);
        self.writer
            .write_event(Event::Text(BytesText::from_escaped(escaped)))?;
        self.close(name)
    }

    /// Writes `<name><value>content</value></name>`.
    fn wrapped_value(&mut self, name: &str, content: &str) -> io::Result<()> {
        self.open(name, &[])?;
        self.text("value", content)?;
        self.close(name)
    }
}

/// Escapes `&`, `<`, `>` and `"` in text content. Apostrophes stay literal.
fn escape_text(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            other => escaped.push(other),
        }
    }
    escaped
}
