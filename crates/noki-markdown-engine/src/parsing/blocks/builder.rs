use super::{kinds::ListLine, types::ListItem};

/// Accumulates the entries of a list block line by line.
///
/// - a marker line opens a new item
/// - any other non-blank line extends the current item with a single space,
///   or becomes an unmarked entry when no item has been opened yet
/// - blank lines are skipped without closing the current item
pub struct ListBuilder {
    items: Vec<ListItem>,
}

impl ListBuilder {
    pub fn new() -> Self {
        Self { items: vec![] }
    }

    pub fn push(&mut self, line: &str) {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return;
        }

        if let Some((marker, text)) = ListLine::parse(line) {
            self.items.push(ListItem {
                marker: Some(marker),
                text: text.to_string(),
            });
            return;
        }

        match self.items.last_mut() {
            Some(current) if current.is_list_item() => {
                current.text.push(' ');
                current.text.push_str(trimmed);
            }
            _ => self.items.push(ListItem {
                marker: None,
                text: trimmed.to_string(),
            }),
        }
    }

    pub fn finish(self) -> Vec<ListItem> {
        self.items
    }
}

impl Default for ListBuilder {
    fn default() -> Self {
        Self::new()
    }
}
