use crate::{
    escape::{find_unescaped, strip_comment, strip_unescaped_suffix, unescape},
    ConfigNode, DecodeError,
};

/// Parses the text config format into a [`ConfigNode`] tree.
///
/// `key = value` splits on the first unescaped `=` with both sides trimmed,
/// then unescaped. A bare name (or `name {`) opens a child node closed by a
/// lone `}`. Anything after an unescaped `//` on a line is a comment.
pub struct NodeReader<'b> {
    bytes: &'b [u8],
}

impl<'b> NodeReader<'b> {
    pub fn new(bytes: &'b [u8]) -> Self {
        Self { bytes }
    }

    /// Reads the whole payload into a nameless root node
    pub fn read(&self) -> Result<ConfigNode, DecodeError> {
        let text = std::str::from_utf8(self.bytes).map_err(|err| DecodeError::InvalidUtf8 {
            offset: err.valid_up_to(),
        })?;

        let mut stack: Vec<ConfigNode> = vec![ConfigNode::root()];
        // node name seen on a previous line, waiting for its `{`
        let mut pending_name: Option<(usize, String)> = None;

        for (index, raw_line) in text.lines().enumerate() {
            let line_number = index + 1;
            let line = strip_comment(raw_line).trim();
            if line.is_empty() {
                continue;
            }

            if let Some((pending_line, name)) = pending_name.take() {
                if line == "{" {
                    stack.push(ConfigNode::new(name));
                    continue;
                }
                return Err(DecodeError::MissingOpeningBrace {
                    line: pending_line,
                    name,
                });
            }

            if line == "}" {
                if stack.len() <= 1 {
                    return Err(DecodeError::UnexpectedClosingBrace { line: line_number });
                }
                if let Some(closed) = stack.pop() {
                    if let Some(parent) = stack.last_mut() {
                        parent.add_node(closed);
                    }
                }
                continue;
            }

            if let Some(split) = find_unescaped(line, '=') {
                let key = unescape(line[..split].trim(), line_number)?;
                let value = unescape(line[split + 1..].trim(), line_number)?;
                if let Some(current) = stack.last_mut() {
                    current.add_value(key, value);
                }
                continue;
            }

            if let Some(name) = strip_unescaped_suffix(line, '{') {
                stack.push(ConfigNode::new(unescape(name.trim(), line_number)?));
                continue;
            }

            pending_name = Some((line_number, unescape(line, line_number)?));
        }

        if let Some((line, name)) = pending_name {
            return Err(DecodeError::MissingOpeningBrace { line, name });
        }

        if stack.len() > 1 {
            let name = stack
                .last()
                .map(|node| node.name().to_string())
                .unwrap_or_default();
            return Err(DecodeError::UnclosedNode { name });
        }

        Ok(stack.pop().unwrap_or_default())
    }
}
