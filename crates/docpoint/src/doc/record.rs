use serde::{Deserialize, Serialize};

/// The resulting documentation for a particular item: the engine's sole
/// output type, created fresh per query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doc {
    pub name: String,
    pub import: String,
    pub pkg: String,
    pub decl: String,
    pub doc: String,
    pub pos: String,
}

impl Doc {
    /// Plain-text form: the import clause, the declaration, and the
    /// documentation wrapped at `line_length` code points. Lines that start
    /// with whitespace are preformatted and reproduced indented verbatim.
    pub fn to_text(
        &self,
        line_length: usize,
    ) -> String {
        let mut out = String::new();
        if !self.import.is_empty() {
            out.push_str(&format!("import \"{}\"\n\n", self.import));
        }
        out.push_str(&self.decl);
        out.push_str("\n\n");

        let doc = if self.doc.is_empty() {
            "Undocumented."
        } else {
            self.doc.as_str()
        };
        out.push_str(&wrap_doc(doc, line_length));
        out
    }
}

enum Block {
    Paragraph(Vec<String>),
    Preformatted(Vec<String>),
}

fn wrap_doc(
    doc: &str,
    width: usize,
) -> String {
    let mut blocks: Vec<Block> = Vec::new();

    for line in doc.lines() {
        if line.trim().is_empty() {
            match blocks.last() {
                Some(Block::Paragraph(words)) if words.is_empty() => {},
                _ => blocks.push(Block::Paragraph(Vec::new())),
            }
        } else if line.starts_with(' ') || line.starts_with('\t') {
            let trimmed = line.trim_start().to_string();
            match blocks.last_mut() {
                Some(Block::Preformatted(lines)) => lines.push(trimmed),
                _ => blocks.push(Block::Preformatted(vec![trimmed])),
            }
        } else {
            let words = line.split_whitespace().map(str::to_string);
            match blocks.last_mut() {
                Some(Block::Paragraph(existing)) => existing.extend(words),
                _ => blocks.push(Block::Paragraph(words.collect())),
            }
        }
    }

    let rendered: Vec<String> = blocks
        .iter()
        .filter_map(|block| match block {
            Block::Paragraph(words) if words.is_empty() => None,
            Block::Paragraph(words) => Some(wrap_paragraph(words, width)),
            Block::Preformatted(lines) => Some(
                lines
                    .iter()
                    .map(|line| format!("    {line}\n"))
                    .collect::<String>(),
            ),
        })
        .collect();

    rendered.join("\n")
}

fn wrap_paragraph(
    words: &[String],
    width: usize,
) -> String {
    let mut out = String::new();
    let mut line_len = 0usize;
    for word in words {
        let word_len = word.chars().count();
        if line_len > 0 && line_len + 1 + word_len > width {
            out.push('\n');
            line_len = 0;
        } else if line_len > 0 {
            out.push(' ');
            line_len += 1;
        }
        out.push_str(word);
        line_len += word_len;
    }
    out.push('\n');
    out
}

#[cfg(test)]
#[path = "../../tests/src/doc/record_tests.rs"]
mod tests;
