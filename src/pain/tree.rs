//! Typed document tree handed to the XML serializer.

/// One node of the output tree.
///
/// Element names and attribute keys are fixed by the pain schemas, so they
/// are `&'static str`; only values are owned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XmlNode {
    /// `<name attrs…>children…</name>`
    Element {
        name: &'static str,
        attrs: Vec<(&'static str, String)>,
        children: Vec<XmlNode>,
    },
    /// `<name attrs…>text</name>`
    Text {
        name: &'static str,
        attrs: Vec<(&'static str, String)>,
        text: String,
    },
    /// Sibling nodes rendered in order, without a wrapping element.
    List(Vec<XmlNode>),
}

impl XmlNode {
    pub fn element(name: &'static str, children: Vec<XmlNode>) -> Self {
        Self::Element {
            name,
            attrs: Vec::new(),
            children,
        }
    }

    pub fn element_with_attrs(
        name: &'static str,
        attrs: Vec<(&'static str, String)>,
        children: Vec<XmlNode>,
    ) -> Self {
        Self::Element {
            name,
            attrs,
            children,
        }
    }

    pub fn text(name: &'static str, text: impl Into<String>) -> Self {
        Self::Text {
            name,
            attrs: Vec::new(),
            text: text.into(),
        }
    }

    pub fn text_with_attrs(
        name: &'static str,
        attrs: Vec<(&'static str, String)>,
        text: impl Into<String>,
    ) -> Self {
        Self::Text {
            name,
            attrs,
            text: text.into(),
        }
    }

    /// Element name, or `None` for a [`XmlNode::List`].
    pub fn name(&self) -> Option<&'static str> {
        match self {
            Self::Element { name, .. } | Self::Text { name, .. } => Some(*name),
            Self::List(_) => None,
        }
    }

    /// Direct child elements, with lists flattened.
    pub fn children(&self) -> Vec<&XmlNode> {
        fn flatten<'a>(nodes: &'a [XmlNode], out: &mut Vec<&'a XmlNode>) {
            for node in nodes {
                match node {
                    XmlNode::List(items) => flatten(items, out),
                    other => out.push(other),
                }
            }
        }
        let mut out = Vec::new();
        match self {
            Self::Element { children, .. } => flatten(children, &mut out),
            Self::List(items) => flatten(items, &mut out),
            Self::Text { .. } => {}
        }
        out
    }

    /// First direct child element named `name`.
    pub fn child(&self, name: &str) -> Option<&XmlNode> {
        self.children().into_iter().find(|c| c.name() == Some(name))
    }

    /// Follow a `/`-separated path of child element names.
    pub fn find(&self, path: &str) -> Option<&XmlNode> {
        path.split('/')
            .try_fold(self, |node, segment| node.child(segment))
    }

    /// Text content of a [`XmlNode::Text`] node.
    pub fn text_content(&self) -> Option<&str> {
        match self {
            Self::Text { text, .. } => Some(text.as_str()),
            _ => None,
        }
    }

    /// Value of attribute `key`.
    pub fn attr(&self, key: &str) -> Option<&str> {
        match self {
            Self::Element { attrs, .. } | Self::Text { attrs, .. } => attrs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.as_str()),
            Self::List(_) => None,
        }
    }
}
