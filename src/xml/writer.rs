use quick_xml::Writer;
use quick_xml::escape::partial_escape;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::core::SepaError;
use crate::pain::XmlNode;

use super::XmlDeclaration;

/// Streams an [`XmlNode`] tree into an indented (two spaces) document.
///
/// Text elements stay on one line; lists expand into siblings.
pub struct XmlWriter {
    inner: Writer<Vec<u8>>,
}

impl XmlWriter {
    /// Open a document and write its declaration line.
    pub fn new(declaration: &XmlDeclaration) -> Result<Self, SepaError> {
        let mut w = Self {
            inner: Writer::new_with_indent(Vec::new(), b' ', 2),
        };
        w.emit(Event::Decl(BytesDecl::new(
            declaration.version.as_str(),
            Some(declaration.encoding.as_str()),
            None,
        )))?;
        Ok(w)
    }

    /// Write `node` and everything below it.
    pub fn write_node(&mut self, node: &XmlNode) -> Result<(), SepaError> {
        match node {
            XmlNode::Element {
                name,
                attrs,
                children,
            } => {
                self.emit(Event::Start(open_tag(name, attrs)))?;
                children.iter().try_for_each(|child| self.write_node(child))?;
                self.emit(Event::End(BytesEnd::new(*name)))
            }
            XmlNode::Text { name, attrs, text } => {
                self.emit(Event::Start(open_tag(name, attrs)))?;
                // Only markup characters are escaped; quotes stay literal.
                self.emit(Event::Text(BytesText::from_escaped(partial_escape(text.as_str()))))?;
                self.emit(Event::End(BytesEnd::new(*name)))
            }
            XmlNode::List(items) => items.iter().try_for_each(|item| self.write_node(item)),
        }
    }

    /// Consume the writer and return the document text.
    pub fn finish(self) -> Result<String, SepaError> {
        String::from_utf8(self.inner.into_inner())
            .map_err(|e| SepaError::Xml(format!("output is not UTF-8: {e}")))
    }

    fn emit(&mut self, event: Event<'_>) -> Result<(), SepaError> {
        self.inner
            .write_event(event)
            .map_err(|e| SepaError::Xml(format!("write failed: {e}")))
    }
}

fn open_tag<'a>(name: &'a str, attrs: &'a [(&'static str, String)]) -> BytesStart<'a> {
    let mut tag = BytesStart::new(name);
    tag.extend_attributes(attrs.iter().map(|(k, v)| (*k, v.as_str())));
    tag
}
